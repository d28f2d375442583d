pub mod http;
pub mod stdin;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::SchemaDescription;

/// Asks an external party (a person, an agent turn, a test stub) for a
/// structured answer. The returned value is not validated here.
#[async_trait]
pub trait Elicitor: Send + Sync {
    async fn elicit(&self, message: &str, schema: &SchemaDescription) -> anyhow::Result<Value>;
}
