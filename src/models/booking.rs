use std::fmt;

use serde::Deserialize;

use super::room_type::RoomType;

pub const SUCCESS_PREFIX: &str = "[SUCCESS]";
pub const CANCELLED_PREFIX: &str = "[CANCELLED]";

pub const NO_BOOKING_MADE: &str = "No booking made";
pub const MISSING_DETAILS: &str = "Missing required booking details";
pub const ELICITATION_TIMED_OUT: &str = "Elicitation timed out";

/// Arguments of one `book_room` call. Empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "room_type")]
    pub room_type: Option<String>,
}

impl BookingRequest {
    pub fn new(date: Option<&str>, room_type: Option<&str>) -> Self {
        Self {
            date: date.map(str::to_string),
            room_type: room_type.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NegotiationOutcome {
    Success { date: String, room_type: RoomType },
    Cancelled { reason: String },
}

impl NegotiationOutcome {
    pub fn success(date: impl Into<String>, room_type: RoomType) -> Self {
        NegotiationOutcome::Success {
            date: date.into(),
            room_type,
        }
    }

    pub fn cancelled(reason: impl Into<String>) -> Self {
        NegotiationOutcome::Cancelled {
            reason: reason.into(),
        }
    }

    pub fn no_rooms_left(date: &str, room_type: &RoomType) -> Self {
        Self::cancelled(format!("No rooms left for {date} ({room_type})."))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, NegotiationOutcome::Success { .. })
    }
}

impl fmt::Display for NegotiationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegotiationOutcome::Success { date, room_type } => {
                write!(f, "{SUCCESS_PREFIX} Booked for {date} ({room_type})")
            }
            NegotiationOutcome::Cancelled { reason } => write!(f, "{CANCELLED_PREFIX} {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_format() {
        let outcome = NegotiationOutcome::success("2025-06-01", RoomType::new("Standard"));
        assert_eq!(outcome.to_string(), "[SUCCESS] Booked for 2025-06-01 (standard)");
        assert!(outcome.is_success());
    }

    #[test]
    fn test_cancelled_format() {
        let outcome = NegotiationOutcome::cancelled(NO_BOOKING_MADE);
        assert_eq!(outcome.to_string(), "[CANCELLED] No booking made");
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_no_rooms_left_format() {
        let outcome = NegotiationOutcome::no_rooms_left("2025-06-01", &RoomType::new("deluxe"));
        assert_eq!(
            outcome.to_string(),
            "[CANCELLED] No rooms left for 2025-06-01 (deluxe)."
        );
    }

    #[test]
    fn test_request_accepts_both_spellings() {
        let camel: BookingRequest =
            serde_json::from_str(r#"{"date":"2025-06-01","roomType":"suite"}"#).unwrap();
        assert_eq!(camel.room_type.as_deref(), Some("suite"));

        let snake: BookingRequest = serde_json::from_str(r#"{"room_type":"suite"}"#).unwrap();
        assert_eq!(snake.room_type.as_deref(), Some("suite"));
        assert_eq!(snake.date, None);
    }
}
