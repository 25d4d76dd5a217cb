//! HTTP handlers for the Pope Leon XIV backend.

pub mod health;
pub mod pope;
