use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Elicitor;
use crate::errors::AppError;
use crate::models::SchemaDescription;

/// Forwards elicitations to a caller-supplied callback URL.
pub struct HttpElicitor {
    url: String,
    client: reqwest::Client,
}

impl HttpElicitor {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum ElicitAction {
    Accept,
    Decline,
    Cancel,
}

#[derive(Deserialize)]
struct ElicitEnvelope {
    action: ElicitAction,
    #[serde(default)]
    content: Option<Value>,
}

/// Accepts either a bare answer object or an `{action, content}` envelope.
/// A declined or cancelled envelope reads as a request to stop. An envelope
/// that does not parse is rejected rather than read as an answer.
fn unwrap_answer(body: Value) -> Result<Value, AppError> {
    if body.get("action").is_none() {
        return Ok(body);
    }

    let envelope: ElicitEnvelope = serde_json::from_value(body)
        .map_err(|e| AppError::SchemaValidation(format!("invalid elicitation envelope: {e}")))?;

    Ok(match envelope.action {
        ElicitAction::Accept => envelope.content.unwrap_or_else(|| json!({})),
        ElicitAction::Decline | ElicitAction::Cancel => json!({ "checkAlternative": false }),
    })
}

#[async_trait]
impl Elicitor for HttpElicitor {
    async fn elicit(&self, message: &str, schema: &SchemaDescription) -> anyhow::Result<Value> {
        let id = uuid::Uuid::new_v4().to_string();
        let body = json!({
            "id": id,
            "message": message,
            "schema": schema.to_json_schema(),
        });

        tracing::debug!(id = %id, url = %self.url, "sending elicitation request");

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .context("failed to call elicitation callback")?
            .error_for_status()
            .context("elicitation callback returned error")?;

        let data: Value = resp
            .json()
            .await
            .context("failed to parse elicitation response")?;

        Ok(unwrap_answer(data)?)
    }
}
