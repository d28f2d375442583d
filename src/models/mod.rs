pub mod booking;
pub mod preferences;
pub mod room_type;
pub mod schema;

pub use booking::{BookingRequest, NegotiationOutcome};
pub use preferences::AlternativePreferences;
pub use room_type::{normalize_room_type, RoomType};
pub use schema::{PropertyKind, SchemaDescription, SchemaProperty};
