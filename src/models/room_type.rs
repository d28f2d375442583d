use std::fmt;

/// Room type in its lookup form: trimmed and lowercased. Any string is
/// accepted; there is no closed set of room types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomType(String);

impl RoomType {
    pub fn new(raw: &str) -> Self {
        Self(normalize_room_type(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_room_type(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_room_type(" Deluxe "), "deluxe");
        assert_eq!(normalize_room_type("deluxe"), "deluxe");
        assert_eq!(normalize_room_type("\tSUITE\n"), "suite");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  Standard", "DELUXE  ", "Junior Suite", "", "   "] {
            let once = normalize_room_type(raw);
            assert_eq!(normalize_room_type(&once), once);
        }
    }

    #[test]
    fn test_room_type_keeps_unknown_values() {
        let room = RoomType::new(" Penthouse ");
        assert_eq!(room.as_str(), "penthouse");
        assert_eq!(room.to_string(), "penthouse");
        assert_eq!(RoomType::new(room.as_str()), room);
    }
}
