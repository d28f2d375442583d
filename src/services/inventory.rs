use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use crate::errors::AppError;
use crate::models::RoomType;

pub const NO_INVENTORY_DATA: &str = "No inventory data for that date.";

/// Read-only source of room counts. Implementations must tolerate
/// concurrent reads.
pub trait InventorySource: Send + Sync {
    fn load(&self) -> Result<InventoryRecord, AppError>;
}

/// Room counts per date. Each day keeps the room types in the order the
/// backing store lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryRecord {
    days: HashMap<String, Vec<(String, u64)>>,
}

impl InventoryRecord {
    pub fn from_json(s: &str) -> Result<Self, AppError> {
        let root: Value = serde_json::from_str(s)
            .map_err(|e| AppError::DataUnavailable(format!("invalid inventory JSON: {e}")))?;
        let dates = root
            .as_object()
            .ok_or_else(|| AppError::DataUnavailable("inventory root must be an object".to_string()))?;

        let mut days = HashMap::with_capacity(dates.len());
        for (date, rooms) in dates {
            let rooms = rooms.as_object().ok_or_else(|| {
                AppError::DataUnavailable(format!("inventory for {date} must be an object"))
            })?;

            let mut counts = Vec::with_capacity(rooms.len());
            for (room_type, count) in rooms {
                let count = count.as_u64().ok_or_else(|| {
                    AppError::DataUnavailable(format!(
                        "count for {room_type} on {date} must be a non-negative integer"
                    ))
                })?;
                counts.push((room_type.clone(), count));
            }
            days.insert(date.clone(), counts);
        }

        Ok(Self { days })
    }

    /// Absent dates and absent room types both count as zero.
    pub fn count(&self, date: &str, room_type: &RoomType) -> u64 {
        self.days
            .get(date)
            .and_then(|rooms| rooms.iter().find(|(name, _)| name == room_type.as_str()))
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn is_available(&self, date: &str, room_type: &RoomType) -> bool {
        self.count(date, room_type) > 0
    }

    pub fn describe(&self, date: &str) -> String {
        let rooms = match self.days.get(date) {
            Some(rooms) if !rooms.is_empty() => rooms,
            _ => return NO_INVENTORY_DATA.to_string(),
        };

        rooms
            .iter()
            .map(|(room_type, count)| {
                if *count > 0 {
                    format!("{room_type} ({count} left)")
                } else {
                    format!("{room_type} (sold out)")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Inventory backed by a JSON file, re-read on every lookup.
pub struct JsonFileInventory {
    path: PathBuf,
}

impl JsonFileInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InventorySource for JsonFileInventory {
    fn load(&self) -> Result<InventoryRecord, AppError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::DataUnavailable(format!(
                "rooms dataset not readable at {}: {e}",
                self.path.display()
            ))
        })?;
        InventoryRecord::from_json(&raw)
    }
}

pub fn check_availability(
    source: &dyn InventorySource,
    date: &str,
    room_type: &RoomType,
) -> Result<bool, AppError> {
    Ok(source.load()?.is_available(date, room_type))
}

pub fn describe_available_options(
    source: &dyn InventorySource,
    date: &str,
) -> Result<String, AppError> {
    Ok(source.load()?.describe(date))
}
