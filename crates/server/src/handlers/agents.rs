//! # Agent Endpoint Stubs
//!
//! Inert registration and task-assignment endpoints. Both only log; nothing
//! is persisted, deduplicated, or queued.

use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct RegisterAgentParams {
    pub agent_id: String,
    pub description: String,
}

/// The handler for `POST /register_agent/`.
///
/// Every call succeeds, regardless of prior calls.
pub async fn register_agent(Query(params): Query<RegisterAgentParams>) -> Json<Value> {
    info!(
        agent_id = %params.agent_id,
        description = %params.description,
        "Agent registered"
    );

    Json(json!({
        "message": format!("Agent {} registered", params.agent_id)
    }))
}

#[derive(Debug, Deserialize)]
pub struct AssignTaskParams {
    pub agent_id: String,
}

/// The handler for `POST /assign_task/`.
///
/// Echoes the task details back; there is no queue and no status tracking.
pub async fn assign_task(
    Query(params): Query<AssignTaskParams>,
    Json(task_details): Json<Value>,
) -> Json<Value> {
    info!(agent_id = %params.agent_id, task = %task_details, "Task assigned");

    Json(json!({
        "message": format!("Task assigned to {}", params.agent_id),
        "task": task_details,
    }))
}
