//! Run types shared between the dashboard and the agent backend
//!
//! These types describe:
//! - Library agents and the graphs they execute
//! - Graph executions ("runs"), either as full records or as summaries
//! - The closed execution-status vocabulary and its display mapping
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RunTypesError {
    #[error("unknown execution status: {0}")]
    UnknownStatus(String),
}

// ============================================================================
// Execution Status
// ============================================================================

/// Raw execution status as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "run_types.ts")]
pub enum ExecutionStatus {
    Incomplete,
    Queued,
    Running,
    Completed,
    Terminated,
    Failed,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Incomplete => "INCOMPLETE",
            ExecutionStatus::Queued => "QUEUED",
            ExecutionStatus::Running => "RUNNING",
            ExecutionStatus::Completed => "COMPLETED",
            ExecutionStatus::Terminated => "TERMINATED",
            ExecutionStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionStatus {
    type Err = RunTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOMPLETE" => Ok(ExecutionStatus::Incomplete),
            "QUEUED" => Ok(ExecutionStatus::Queued),
            "RUNNING" => Ok(ExecutionStatus::Running),
            "COMPLETED" => Ok(ExecutionStatus::Completed),
            "TERMINATED" => Ok(ExecutionStatus::Terminated),
            "FAILED" => Ok(ExecutionStatus::Failed),
            other => Err(RunTypesError::UnknownStatus(other.to_string())),
        }
    }
}

/// User-facing run status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "run_types.ts")]
pub enum AgentRunStatus {
    Draft,
    Queued,
    Running,
    Success,
    Failed,
    Stopped,
}

impl AgentRunStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentRunStatus::Draft => "draft",
            AgentRunStatus::Queued => "queued",
            AgentRunStatus::Running => "running",
            AgentRunStatus::Success => "success",
            AgentRunStatus::Failed => "failed",
            AgentRunStatus::Stopped => "stopped",
        }
    }

    /// Still executing or waiting for a worker; can be stopped.
    pub fn is_active(&self) -> bool {
        matches!(self, AgentRunStatus::Running | AgentRunStatus::Queued)
    }

    /// Reached a terminal state; can be run again.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            AgentRunStatus::Success | AgentRunStatus::Failed | AgentRunStatus::Stopped
        )
    }

    /// Whether the run's outputs are meaningful to display.
    pub fn shows_outputs(&self) -> bool {
        match self {
            AgentRunStatus::Running
            | AgentRunStatus::Success
            | AgentRunStatus::Failed
            | AgentRunStatus::Stopped => true,
            AgentRunStatus::Draft | AgentRunStatus::Queued => false,
        }
    }
}

impl From<ExecutionStatus> for AgentRunStatus {
    fn from(status: ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Incomplete => AgentRunStatus::Draft,
            ExecutionStatus::Queued => AgentRunStatus::Queued,
            ExecutionStatus::Running => AgentRunStatus::Running,
            ExecutionStatus::Completed => AgentRunStatus::Success,
            ExecutionStatus::Terminated => AgentRunStatus::Stopped,
            ExecutionStatus::Failed => AgentRunStatus::Failed,
        }
    }
}

impl fmt::Display for AgentRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Graph Schema
// ============================================================================

/// One field of a graph's input or output schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct SchemaProperty {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub value_type: Option<String>,
}

/// Input/output schema of a graph (JSON-schema subset)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct BlockIoSchema {
    #[serde(default)]
    pub properties: BTreeMap<String, SchemaProperty>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl BlockIoSchema {
    /// Human title for a field, falling back to the key itself.
    pub fn title_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.properties
            .get(key)
            .and_then(|prop| prop.title.as_deref())
            .unwrap_or(key)
    }
}

/// Credentials a graph needs before it can be executed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct CredentialsInputSchema {
    #[serde(default)]
    #[ts(type = "Record<string, unknown>")]
    pub properties: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl CredentialsInputSchema {
    pub fn has_required_credentials(&self) -> bool {
        !self.required.is_empty()
    }
}

// ============================================================================
// Graphs and Agents
// ============================================================================

/// Versioned workflow definition executed by an agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct Graph {
    pub id: String,
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub input_schema: BlockIoSchema,
    #[serde(default)]
    pub output_schema: BlockIoSchema,
    #[serde(default)]
    pub credentials_input_schema: CredentialsInputSchema,
    /// Runs are started by an external trigger (e.g. a webhook)
    #[serde(default)]
    pub has_external_trigger: bool,
}

impl Graph {
    /// A finished run can be re-submitted from the dashboard only when no
    /// trigger or credential input stands in the way.
    pub fn can_run_again(&self) -> bool {
        !self.has_external_trigger && !self.credentials_input_schema.has_required_credentials()
    }
}

/// Agent as it appears in the user's library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct LibraryAgent {
    pub id: String,
    pub graph_id: String,
    pub graph_version: u32,
    pub name: String,
    /// User may open the agent's graph in the builder
    #[serde(default)]
    pub can_access_graph: bool,
}

// ============================================================================
// Runs
// ============================================================================

/// Aggregate execution metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct ExecutionStats {
    /// Wall-clock seconds
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub node_exec_count: u64,
    /// Credits spent (1 credit = 1 cent)
    #[serde(default)]
    pub cost: i64,
}

/// Lightweight run summary, as returned by run listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct GraphExecutionMeta {
    pub id: String,
    pub graph_id: String,
    pub graph_version: u32,
    pub status: ExecutionStatus,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stats: Option<ExecutionStats>,
}

/// Full run record including input and output values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct GraphExecution {
    #[serde(flatten)]
    pub meta: GraphExecutionMeta,
    #[ts(type = "Record<string, unknown>")]
    pub inputs: IndexMap<String, serde_json::Value>,
    #[ts(type = "Record<string, Array<unknown>>")]
    pub outputs: IndexMap<String, Vec<serde_json::Value>>,
}

/// Either a full run record or a summary still waiting on its details.
///
/// Distinguished by the presence of `inputs`/`outputs` in the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(untagged)]
#[ts(export, export_to = "run_types.ts")]
pub enum RunRecord {
    Full(GraphExecution),
    Summary(GraphExecutionMeta),
}

impl RunRecord {
    pub fn meta(&self) -> &GraphExecutionMeta {
        match self {
            RunRecord::Full(exec) => &exec.meta,
            RunRecord::Summary(meta) => meta,
        }
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }

    pub fn display_status(&self) -> AgentRunStatus {
        self.meta().status.into()
    }

    pub fn inputs(&self) -> Option<&IndexMap<String, serde_json::Value>> {
        match self {
            RunRecord::Full(exec) => Some(&exec.inputs),
            RunRecord::Summary(_) => None,
        }
    }

    pub fn outputs(&self) -> Option<&IndexMap<String, Vec<serde_json::Value>>> {
        match self {
            RunRecord::Full(exec) => Some(&exec.outputs),
            RunRecord::Summary(_) => None,
        }
    }
}

impl From<GraphExecution> for RunRecord {
    fn from(exec: GraphExecution) -> Self {
        RunRecord::Full(exec)
    }
}

impl From<GraphExecutionMeta> for RunRecord {
    fn from(meta: GraphExecutionMeta) -> Self {
        RunRecord::Summary(meta)
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct ExecuteGraphRequest {
    #[ts(type = "Record<string, unknown>")]
    pub inputs: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "run_types.ts")]
pub struct ExecuteGraphResponse {
    pub graph_exec_id: String,
}

// ============================================================================
// Tests
// ============================================================================
