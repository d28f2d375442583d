use std::time::Duration;

use crate::errors::AppError;
use crate::models::booking::{ELICITATION_TIMED_OUT, MISSING_DETAILS, NO_BOOKING_MADE};
use crate::models::{AlternativePreferences, BookingRequest, NegotiationOutcome, RoomType};
use crate::services::elicitation::Elicitor;
use crate::services::inventory::{check_availability, describe_available_options, InventorySource};

const MISSING_DETAILS_PROMPT: &str = "I need both a date and a room type. \
    Please share alternative instructions or say you would like to cancel.";

/// Runs one `book_room` negotiation.
///
/// At most two elicitations happen: one to fill in missing details and one
/// to offer alternatives when the requested room is sold out. Business
/// cancellations are `Ok`; only infrastructure and schema failures are `Err`.
pub async fn book_room(
    inventory: &dyn InventorySource,
    elicitor: Option<&dyn Elicitor>,
    elicitation_timeout: Option<Duration>,
    request: BookingRequest,
) -> Result<NegotiationOutcome, AppError> {
    let elicitor = elicitor.ok_or(AppError::MissingContext)?;

    let mut date = present(request.date);
    let mut room_type = present(request.room_type);

    if date.is_none() || room_type.is_none() {
        tracing::info!(date = ?date, room_type = ?room_type, "booking details incomplete");

        let Some(prefs) =
            elicit_preferences(elicitor, MISSING_DETAILS_PROMPT, elicitation_timeout, 1).await?
        else {
            return Ok(NegotiationOutcome::cancelled(ELICITATION_TIMED_OUT));
        };
        if !prefs.check_alternative {
            return Ok(NegotiationOutcome::cancelled(NO_BOOKING_MADE));
        }
        date = date.or_else(|| present(prefs.alternative_date));
        room_type = room_type.or_else(|| present(prefs.alternative_room));
    }

    let (Some(date), Some(room_type)) = (date, room_type) else {
        return Ok(NegotiationOutcome::cancelled(MISSING_DETAILS));
    };
    let room_type = RoomType::new(&room_type);

    if check_availability(inventory, &date, &room_type)? {
        tracing::info!(date = %date, room_type = %room_type, "requested room available");
        return Ok(NegotiationOutcome::success(date, room_type));
    }

    let summary = describe_available_options(inventory, &date)?;
    tracing::info!(date = %date, room_type = %room_type, "requested room sold out, offering alternatives");

    let message = format!(
        "No {room_type} rooms are available on {date}. \
         Availability: {summary}. \
         Would you like to try another date or room type?"
    );
    let Some(prefs) = elicit_preferences(elicitor, &message, elicitation_timeout, 2).await? else {
        return Ok(NegotiationOutcome::cancelled(ELICITATION_TIMED_OUT));
    };
    if !prefs.check_alternative {
        return Ok(NegotiationOutcome::cancelled(NO_BOOKING_MADE));
    }

    let updated_date = present(prefs.alternative_date).unwrap_or(date);
    let updated_room_type = present(prefs.alternative_room)
        .map(|room| RoomType::new(&room))
        .unwrap_or(room_type);

    if !check_availability(inventory, &updated_date, &updated_room_type)? {
        tracing::info!(
            date = %updated_date,
            room_type = %updated_room_type,
            "alternative also unavailable"
        );
        return Ok(NegotiationOutcome::no_rooms_left(&updated_date, &updated_room_type));
    }

    tracing::info!(date = %updated_date, room_type = %updated_room_type, "alternative room available");
    Ok(NegotiationOutcome::success(updated_date, updated_room_type))
}

/// `None` when the answer did not arrive within `timeout`.
async fn elicit_preferences(
    elicitor: &dyn Elicitor,
    message: &str,
    timeout: Option<Duration>,
    round: u8,
) -> Result<Option<AlternativePreferences>, AppError> {
    let schema = AlternativePreferences::schema();
    let pending = elicitor.elicit(message, &schema);

    let answer = match timeout {
        Some(limit) => match tokio::time::timeout(limit, pending).await {
            Ok(answer) => answer,
            Err(_) => {
                tracing::warn!(round, timeout_secs = limit.as_secs(), "elicitation timed out");
                return Ok(None);
            }
        },
        None => pending.await,
    };

    // Gateways may reject a malformed answer themselves; keep that a schema error.
    let raw = answer.map_err(|e| match e.downcast::<AppError>() {
        Ok(err @ AppError::SchemaValidation(_)) => err,
        Ok(err) => {
            tracing::warn!(round, error = %err, "elicitation gateway failed");
            AppError::Elicitation(err.to_string())
        }
        Err(e) => {
            tracing::warn!(round, error = %e, "elicitation gateway failed");
            AppError::Elicitation(format!("{e:#}"))
        }
    })?;

    let prefs = AlternativePreferences::validate(&raw)?;
    tracing::info!(round, check_alternative = prefs.check_alternative, "elicitation answered");
    Ok(Some(prefs))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::models::SchemaDescription;
    use crate::services::inventory::InventoryRecord;

    struct StaticInventory(InventoryRecord);

    impl InventorySource for StaticInventory {
        fn load(&self) -> Result<InventoryRecord, AppError> {
            Ok(self.0.clone())
        }
    }

    struct ScriptedElicitor {
        answers: Mutex<Vec<Value>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedElicitor {
        fn new(answers: Vec<Value>) -> Self {
            Self {
                answers: Mutex::new(answers),
                prompts: Mutex::new(vec![]),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Elicitor for ScriptedElicitor {
        async fn elicit(&self, message: &str, _schema: &SchemaDescription) -> anyhow::Result<Value> {
            self.prompts.lock().unwrap().push(message.to_string());
            let mut answers = self.answers.lock().unwrap();
            anyhow::ensure!(!answers.is_empty(), "no scripted answer left");
            Ok(answers.remove(0))
        }
    }

    fn inventory() -> StaticInventory {
        StaticInventory(
            InventoryRecord::from_json(r#"{"2025-06-01":{"standard":2,"deluxe":0}}"#).unwrap(),
        )
    }

    #[test]
    fn test_present_treats_empty_as_absent() {
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(Some("suite".to_string())), Some("suite".to_string()));
        assert_eq!(present(None), None);
    }

    #[tokio::test]
    async fn test_sold_out_prompt_embeds_summary() {
        let elicitor = ScriptedElicitor::new(vec![json!({"checkAlternative": false})]);
        let outcome = book_room(
            &inventory(),
            Some(&elicitor),
            None,
            BookingRequest::new(Some("2025-06-01"), Some(" DELUXE ")),
        )
        .await
        .unwrap();

        assert_eq!(outcome.to_string(), "[CANCELLED] No booking made");
        assert_eq!(
            elicitor.prompts(),
            vec![
                "No deluxe rooms are available on 2025-06-01. \
                 Availability: standard (2 left), deluxe (sold out). \
                 Would you like to try another date or room type?"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_strings_trigger_missing_details_prompt() {
        let elicitor = ScriptedElicitor::new(vec![json!({"checkAlternative": false})]);
        let outcome = book_room(
            &inventory(),
            Some(&elicitor),
            None,
            BookingRequest::new(Some(""), Some("standard")),
        )
        .await
        .unwrap();

        assert_eq!(outcome, NegotiationOutcome::cancelled(NO_BOOKING_MADE));
        assert_eq!(elicitor.prompts(), vec![MISSING_DETAILS_PROMPT.to_string()]);
    }

    #[tokio::test]
    async fn test_alternative_date_keeps_room_type() {
        let inv = StaticInventory(
            InventoryRecord::from_json(
                r#"{"2025-06-01":{"suite":0},"2025-06-02":{"suite":1}}"#,
            )
            .unwrap(),
        );
        let elicitor = ScriptedElicitor::new(vec![json!({"alternativeDate": "2025-06-02"})]);
        let outcome = book_room(
            &inv,
            Some(&elicitor),
            None,
            BookingRequest::new(Some("2025-06-01"), Some("Suite")),
        )
        .await
        .unwrap();

        assert_eq!(outcome.to_string(), "[SUCCESS] Booked for 2025-06-02 (suite)");
    }

    struct RejectingElicitor;

    #[async_trait]
    impl Elicitor for RejectingElicitor {
        async fn elicit(&self, _message: &str, _schema: &SchemaDescription) -> anyhow::Result<Value> {
            Err(AppError::SchemaValidation("invalid elicitation envelope".to_string()).into())
        }
    }

    #[tokio::test]
    async fn test_gateway_schema_rejection_stays_schema_error() {
        let err = book_room(
            &inventory(),
            Some(&RejectingElicitor),
            None,
            BookingRequest::new(Some("2025-06-01"), Some("deluxe")),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::SchemaValidation(_)));
    }
}
