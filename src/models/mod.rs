//! Request and response payloads for the papal endpoints.
//!
//! Required fields are modeled as `Option` so that an absent field reaches
//! the handler's validation (and its endpoint-specific message) instead of
//! being rejected by the JSON extractor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct DecreeResponse {
    pub decree: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfessRequest {
    #[serde(default)]
    pub sin: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PenanceResponse {
    pub penance: String,
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PapalNameResponse {
    #[serde(rename = "papalName")]
    pub papal_name: String,
}
