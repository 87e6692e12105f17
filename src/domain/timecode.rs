use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One or two colon-separated pairs of digits, then an optional fraction of
/// one or two digits. Covers `HH:MM:SS`, `MM:SS`, and either with `.ff`.
const TIMECODE_GRAMMAR: &str = r"^(?:([0-9]{2}):)?([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,2}))?$";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("timecode must look like HH:MM:SS or MM:SS, optionally followed by .ff")]
    Malformed,
    #[error("minutes and seconds must be between 00 and 59")]
    ComponentOutOfRange,
}

/// Elapsed time as entered in a trim field. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timecode {
    hours: u32,
    minutes: u8,
    seconds: u8,
    /// Fractional seconds in hundredths, kept only when the source text
    /// carried a fraction.
    hundredths: Option<u8>,
}

impl Timecode {
    pub fn parse(text: &str) -> Result<Timecode, ParseError> {
        let grammar = Regex::new(TIMECODE_GRAMMAR).unwrap();
        let caps = grammar.captures(text).ok_or(ParseError::Malformed)?;

        let hours = caps
            .get(1)
            .map(|h| h.as_str().parse::<u32>().unwrap())
            .unwrap_or(0);
        let minutes: u8 = caps[2].parse().unwrap();
        let seconds: u8 = caps[3].parse().unwrap();
        let hundredths = caps.get(4).map(|f| {
            let digits = f.as_str();
            let value: u8 = digits.parse().unwrap();
            // A single digit is tenths: "23:45.5" means 23:45 and a half.
            if digits.len() == 1 {
                value * 10
            } else {
                value
            }
        });

        if minutes > 59 || seconds > 59 {
            return Err(ParseError::ComponentOutOfRange);
        }

        Ok(Timecode {
            hours,
            minutes,
            seconds,
            hundredths,
        })
    }

    /// Build a timecode from a duration in seconds, rounded to hundredths.
    pub fn from_seconds(total: f64) -> Timecode {
        let total_hundredths = (total.max(0.0) * 100.0).round() as u64;
        let fraction = (total_hundredths % 100) as u8;
        let whole = total_hundredths / 100;

        Timecode {
            hours: (whole / 3600) as u32,
            minutes: ((whole / 60) % 60) as u8,
            seconds: (whole % 60) as u8,
            hundredths: if fraction == 0 { None } else { Some(fraction) },
        }
    }

    pub fn total_seconds(&self) -> f64 {
        let whole =
            self.hours as f64 * 3600.0 + self.minutes as f64 * 60.0 + self.seconds as f64;
        whole + self.hundredths.unwrap_or(0) as f64 / 100.0
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)?;
        if let Some(fraction) = self.hundredths {
            write!(f, ".{:02}", fraction)?;
        }
        Ok(())
    }
}
