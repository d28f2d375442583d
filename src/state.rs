use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::inventory::InventorySource;

pub struct AppState {
    pub config: AppConfig,
    pub inventory: Arc<dyn InventorySource>,
    pub http: reqwest::Client,
}
