use serde::{Deserialize, Serialize};

use crate::domain::timecode::Timecode;

/// One dialog's worth of raw user input, passed in wholesale per call. The
/// engine never stores it between invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub input_path: String,
    pub output_basename: String,
    pub start_trim: String,
    pub end_trim: String,
    pub output_directory: String,
    pub output_extension: String,
    pub frame_rate: u32,
    pub create_reference_plane: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    InputPath,
    OutputBasename,
    StartTrim,
    EndTrim,
    OutputDirectory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidState {
    Valid,
    Invalid,
}

/// Field-local validity for per-keystroke checks. Trim fields must parse as
/// timecodes, everything else only has to be non-empty.
pub fn validate_field(field: FormField, text: &str) -> ValidState {
    let valid = match field {
        FormField::StartTrim | FormField::EndTrim => Timecode::parse(text).is_ok(),
        FormField::InputPath | FormField::OutputBasename | FormField::OutputDirectory => {
            !text.is_empty()
        }
    };

    if valid {
        ValidState::Valid
    } else {
        ValidState::Invalid
    }
}

/// Gate for the create action: every text field filled in and both trim
/// fields well-formed. Whether end actually comes after start is left to the
/// planner at submission time, so this stays cheap enough to run on every
/// keystroke.
pub fn is_ready(snapshot: &FormSnapshot) -> bool {
    let filled = [
        &snapshot.input_path,
        &snapshot.output_basename,
        &snapshot.start_trim,
        &snapshot.end_trim,
        &snapshot.output_directory,
    ]
    .iter()
    .all(|field| !field.is_empty());

    filled
        && Timecode::parse(&snapshot.start_trim).is_ok()
        && Timecode::parse(&snapshot.end_trim).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_snapshot() -> FormSnapshot {
        FormSnapshot {
            input_path: "/v.mp4".to_string(),
            output_basename: "shot".to_string(),
            start_trim: "00:00:00".to_string(),
            end_trim: "00:01:30.5".to_string(),
            output_directory: "/out".to_string(),
            output_extension: ".png".to_string(),
            frame_rate: 24,
            create_reference_plane: false,
        }
    }

    #[test]
    fn ready_when_all_fields_present_and_timecodes_parse() {
        assert!(is_ready(&valid_snapshot()));
    }

    #[test]
    fn not_ready_when_any_text_field_is_empty() {
        let cases: [fn(&mut FormSnapshot); 5] = [
            |s| s.input_path.clear(),
            |s| s.output_basename.clear(),
            |s| s.start_trim.clear(),
            |s| s.end_trim.clear(),
            |s| s.output_directory.clear(),
        ];
        for clear in cases {
            let mut snapshot = valid_snapshot();
            clear(&mut snapshot);
            assert!(!is_ready(&snapshot));
        }
    }

    #[test]
    fn not_ready_with_valid_timecodes_but_empty_output_directory() {
        let mut snapshot = valid_snapshot();
        snapshot.output_directory.clear();
        assert!(!is_ready(&snapshot));
    }

    #[test]
    fn not_ready_when_a_trim_field_is_malformed() {
        let mut snapshot = valid_snapshot();
        snapshot.end_trim = "1:2".to_string();
        assert!(!is_ready(&snapshot));
    }

    #[test]
    fn gate_ignores_trim_ordering() {
        let mut snapshot = valid_snapshot();
        snapshot.start_trim = "00:02:00".to_string();
        snapshot.end_trim = "00:01:00".to_string();
        assert!(is_ready(&snapshot));
    }

    #[test]
    fn field_validation_is_local() {
        assert_eq!(
            validate_field(FormField::StartTrim, "00:00:10"),
            ValidState::Valid
        );
        assert_eq!(
            validate_field(FormField::StartTrim, "not a timecode"),
            ValidState::Invalid
        );
        assert_eq!(
            validate_field(FormField::InputPath, "/v.mp4"),
            ValidState::Valid
        );
        assert_eq!(validate_field(FormField::OutputDirectory, ""), ValidState::Invalid);
    }
}
