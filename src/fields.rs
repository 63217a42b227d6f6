//! Field types and input validation for task records.
//!
//! The prompt layer and the CLI both funnel raw user input through the
//! parsers here, so the acceptance rules live in exactly one place.

use clap::ValueEnum;
use thiserror::Error;

/// Lowest accepted priority.
pub const PRIORITY_MIN: i64 = 1;
/// Highest accepted priority.
pub const PRIORITY_MAX: i64 = 10;
/// Priority assumed for records loaded without one.
pub const DEFAULT_PRIORITY: i64 = 5;

/// Task progress states. Stored on disk as their display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Status {
    #[value(name = "to-be-started")]
    ToBeStarted,
    #[value(name = "in-progress")]
    InProgress,
    #[value(name = "finished")]
    Finished,
}

impl Status {
    /// Menu order: option 1 is "To be started", 2 "In progress", 3 "Finished".
    pub const ALL: [Status; 3] = [Status::ToBeStarted, Status::InProgress, Status::Finished];

    /// The canonical string written to the task file.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::ToBeStarted => "To be started",
            Status::InProgress => "In progress",
            Status::Finished => "Finished",
        }
    }
}

/// Rejected user input for a task field.
///
/// These are re-promptable: the interactive loop reports the message and asks
/// again, it never coerces the value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0:?} is not a whole number")]
    PriorityNotANumber(String),
    #[error("priority {0} is outside 1 to 10")]
    PriorityOutOfRange(i64),
    #[error("{0:?} is not a status option, expected 1, 2, or 3")]
    UnknownStatusChoice(String),
}

/// Range-check an already-numeric priority level.
pub fn check_priority(level: i64) -> Result<i64, ValidationError> {
    if (PRIORITY_MIN..=PRIORITY_MAX).contains(&level) {
        Ok(level)
    } else {
        Err(ValidationError::PriorityOutOfRange(level))
    }
}

/// Parse a raw priority string as entered at a prompt.
pub fn parse_priority(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    let level = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::PriorityNotANumber(trimmed.to_string()))?;
    check_priority(level)
}

/// Parse a raw status selector as entered at the numbered menu.
pub fn parse_status_choice(raw: &str) -> Result<Status, ValidationError> {
    match raw.trim() {
        "1" => Ok(Status::ToBeStarted),
        "2" => Ok(Status::InProgress),
        "3" => Ok(Status::Finished),
        other => Err(ValidationError::UnknownStatusChoice(other.to_string())),
    }
}

/// Priority bands used by the board renderer for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// 8 and above is high, 4 to 7 medium, 3 and below low.
    pub fn of(level: i64) -> Self {
        if level >= 8 {
            PriorityTier::High
        } else if level >= 4 {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_accepts_bounds() {
        assert_eq!(parse_priority("1"), Ok(1));
        assert_eq!(parse_priority("10"), Ok(10));
        assert_eq!(parse_priority(" 5 "), Ok(5));
    }

    #[test]
    fn priority_rejects_out_of_range() {
        assert_eq!(parse_priority("0"), Err(ValidationError::PriorityOutOfRange(0)));
        assert_eq!(parse_priority("11"), Err(ValidationError::PriorityOutOfRange(11)));
        assert_eq!(parse_priority("-3"), Err(ValidationError::PriorityOutOfRange(-3)));
    }

    #[test]
    fn priority_rejects_non_numeric() {
        assert_eq!(
            parse_priority("high"),
            Err(ValidationError::PriorityNotANumber("high".to_string()))
        );
        assert_eq!(
            parse_priority("2.5"),
            Err(ValidationError::PriorityNotANumber("2.5".to_string()))
        );
    }

    #[test]
    fn status_choice_maps_menu_numbers() {
        assert_eq!(parse_status_choice("1"), Ok(Status::ToBeStarted));
        assert_eq!(parse_status_choice("2"), Ok(Status::InProgress));
        assert_eq!(parse_status_choice("3"), Ok(Status::Finished));
    }

    #[test]
    fn status_choice_rejects_everything_else() {
        assert!(parse_status_choice("4").is_err());
        assert!(parse_status_choice("Finished").is_err());
        assert!(parse_status_choice("").is_err());
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(PriorityTier::of(10), PriorityTier::High);
        assert_eq!(PriorityTier::of(8), PriorityTier::High);
        assert_eq!(PriorityTier::of(7), PriorityTier::Medium);
        assert_eq!(PriorityTier::of(4), PriorityTier::Medium);
        assert_eq!(PriorityTier::of(3), PriorityTier::Low);
        assert_eq!(PriorityTier::of(1), PriorityTier::Low);
    }
}
