pub mod elicitation;
pub mod inventory;
pub mod negotiation;
