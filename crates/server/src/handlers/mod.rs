//! # API Route Handlers
//!
//! The Axum handlers for the document service, split between the document
//! endpoints (add, query, group, summarize) and the agent stubs.

pub mod agents;
pub mod documents;

pub use agents::*;
pub use documents::*;

// Shared items used by the handler modules.
use super::{errors::AppError, state::AppState};
