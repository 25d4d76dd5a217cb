//! The four papal endpoints.
//!
//! All four share one dispatch path: validate the required field, build the
//! prompt, call the provider with the endpoint's fixed sampling parameters,
//! trim the generated text, and wrap it in the endpoint's response field.

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::{
    AskRequest, AskResponse, ConfessRequest, DecreeResponse, NameRequest, PapalNameResponse,
    PenanceResponse,
};
use crate::prompts;
use crate::services::providers::{ChatPrompt, GenerationParams};
use crate::startup::AppState;

/// Fixed per-endpoint dispatch configuration.
struct EndpointSpec {
    params: GenerationParams,
    failure_message: &'static str,
}

const ASK: EndpointSpec = EndpointSpec {
    params: GenerationParams {
        temperature: 0.9,
        max_tokens: 200,
    },
    failure_message: "Failed to consult the Pontiff. The digital aether is disturbed.",
};

const DECREE: EndpointSpec = EndpointSpec {
    params: GenerationParams {
        temperature: 0.9,
        max_tokens: 100,
    },
    failure_message: "Failed to retrieve the daily decree. The sacred scrolls are temporarily unavailable.",
};

const CONFESS: EndpointSpec = EndpointSpec {
    params: GenerationParams {
        temperature: 0.9,
        max_tokens: 150,
    },
    failure_message: "Failed to process confession. The divine ledger is experiencing technical difficulties.",
};

// A papal name should not be long.
const PAPAL_NAME: EndpointSpec = EndpointSpec {
    params: GenerationParams {
        temperature: 0.8,
        max_tokens: 50,
    },
    failure_message: "Failed to generate papal name. The sacred name generator is offline.",
};

pub async fn ask_pope(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let question = require_field(payload.question, "Question is required.")?;
    let answer = dispatch(&state, "ask-pope", prompts::ask(&question), &ASK).await?;
    Ok(Json(AskResponse { answer }))
}

pub async fn daily_decree(
    State(state): State<AppState>,
) -> Result<Json<DecreeResponse>, ApiError> {
    let decree = dispatch(&state, "daily-decree", prompts::daily_decree(), &DECREE).await?;
    Ok(Json(DecreeResponse { decree }))
}

pub async fn confess(
    State(state): State<AppState>,
    Json(payload): Json<ConfessRequest>,
) -> Result<Json<PenanceResponse>, ApiError> {
    let sin = require_field(payload.sin, "A sin must be confessed.")?;
    let penance = dispatch(&state, "confess", prompts::confess(&sin), &CONFESS).await?;
    Ok(Json(PenanceResponse { penance }))
}

pub async fn generate_papal_name(
    State(state): State<AppState>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<PapalNameResponse>, ApiError> {
    let name = require_field(payload.name, "Name is required.")?;
    let papal_name = dispatch(
        &state,
        "generate-papal-name",
        prompts::papal_name(&name),
        &PAPAL_NAME,
    )
    .await?;
    Ok(Json(PapalNameResponse { papal_name }))
}

/// Required-field check. Absent and whitespace-only both fail, and no
/// upstream call is made.
fn require_field(value: Option<String>, message: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(message)),
    }
}

async fn dispatch(
    state: &AppState,
    endpoint: &'static str,
    prompt: ChatPrompt,
    spec: &EndpointSpec,
) -> Result<String, ApiError> {
    match state.provider.complete(&prompt, &spec.params).await {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            tracing::error!(endpoint, error = %e, "Chat completion failed");
            Err(ApiError::Upstream(spec.failure_message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::require_field;

    #[test]
    fn absent_field_is_rejected() {
        assert!(require_field(None, "Question is required.").is_err());
    }

    #[test]
    fn empty_and_whitespace_fields_are_rejected() {
        assert!(require_field(Some(String::new()), "Name is required.").is_err());
        assert!(require_field(Some("   ".to_string()), "Name is required.").is_err());
    }

    #[test]
    fn present_field_passes_through_unmodified() {
        let value = require_field(Some(" doomscrolling ".to_string()), "msg").unwrap();
        assert_eq!(value, " doomscrolling ");
    }
}
