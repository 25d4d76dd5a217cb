//! pope-service: the Pope Leon XIV backend.
//!
//! A thin HTTP facade that turns themed requests into single chat-completion
//! calls and relays the generated text back as JSON. There is no persistence
//! and no cross-request state; every endpoint is one prompt template plus one
//! upstream call.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod prompts;
pub mod services;
pub mod startup;
