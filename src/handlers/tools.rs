use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::BookingRequest;
use crate::services::elicitation::http::HttpElicitor;
use crate::services::elicitation::Elicitor;
use crate::services::negotiation;
use crate::state::AppState;

pub const SERVER_NAME: &str = "hotel-booking";
pub const TOOL_NAME: &str = "book_room";
pub const TOOL_DESCRIPTION: &str = "Book a hotel room by date and room type.";

const INSTRUCTIONS: &str = "You help users book hotel rooms by gathering a date (YYYY-MM-DD) \
    and a room type (standard, deluxe, suite). When the requested room is sold out you should \
    call the tool again with alternative preferences gathered from the user.";

// GET /tools
#[derive(Serialize)]
pub struct ToolDescriptor {
    name: &'static str,
    description: &'static str,
    #[serde(rename = "inputSchema")]
    input_schema: Value,
}

#[derive(Serialize)]
pub struct ToolListing {
    server: &'static str,
    instructions: &'static str,
    tools: Vec<ToolDescriptor>,
}

fn book_room_input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "date": {
                "type": ["string", "null"],
                "description": "Check-in date in ISO format (YYYY-MM-DD).",
            },
            "roomType": {
                "type": ["string", "null"],
                "description": "Room type such as standard, deluxe, or suite.",
            },
        },
    })
}

pub async fn list_tools() -> Json<ToolListing> {
    Json(ToolListing {
        server: SERVER_NAME,
        instructions: INSTRUCTIONS,
        tools: vec![ToolDescriptor {
            name: TOOL_NAME,
            description: TOOL_DESCRIPTION,
            input_schema: book_room_input_schema(),
        }],
    })
}

// POST /tools/book_room
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRoomCall {
    #[serde(flatten)]
    pub request: BookingRequest,
    #[serde(default, alias = "elicitation_url")]
    pub elicitation_url: Option<String>,
}

#[derive(Serialize)]
pub struct BookRoomResponse {
    pub result: String,
}

pub async fn book_room(
    State(state): State<Arc<AppState>>,
    Json(call): Json<BookRoomCall>,
) -> Result<Json<BookRoomResponse>, AppError> {
    let elicitor = call
        .elicitation_url
        .filter(|url| !url.trim().is_empty())
        .map(|url| HttpElicitor::new(url, state.http.clone()));

    tracing::info!(
        date = ?call.request.date,
        room_type = ?call.request.room_type,
        has_elicitor = elicitor.is_some(),
        "book_room called"
    );

    let outcome = negotiation::book_room(
        state.inventory.as_ref(),
        elicitor.as_ref().map(|e| e as &dyn Elicitor),
        state.config.elicitation_timeout(),
        call.request,
    )
    .await
    .inspect_err(|e| tracing::error!(error = %e, "book_room failed"))?;

    tracing::info!(result = %outcome, booked = outcome.is_success(), "book_room finished");

    Ok(Json(BookRoomResponse {
        result: outcome.to_string(),
    }))
}
