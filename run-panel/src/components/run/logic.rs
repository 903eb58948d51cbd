//! Run details pure logic functions: no RSX, no signals

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use run_types::{AgentRunStatus, Graph, GraphExecutionMeta, LibraryAgent, RunRecord};
use serde_json::Value;

use super::types::*;
use crate::format::{
    capitalize, format_absolute, format_credits, format_relative, humanize_duration,
};

pub const BUILDER_ROUTE: &str = "/build";

/// Text for a single input or output value. Objects and arrays are
/// pretty-printed with 2-space indentation; strings are shown unquoted.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
    }
}

pub fn build_info_stats(run: &GraphExecutionMeta, now: DateTime<Utc>) -> Vec<InfoStat> {
    let status = AgentRunStatus::from(run.status);
    let mut stats = vec![
        InfoStat {
            label: "Status",
            value: capitalize(status.label()),
        },
        InfoStat {
            label: "Started",
            value: format!(
                "{}, {}",
                format_relative(run.started_at, now),
                format_absolute(run.started_at)
            ),
        },
    ];

    if let Some(exec_stats) = &run.stats {
        stats.push(InfoStat {
            label: "Duration",
            value: humanize_duration(exec_stats.duration),
        });
        stats.push(InfoStat {
            label: "Steps",
            value: exec_stats.node_exec_count.to_string(),
        });
        stats.push(InfoStat {
            label: "Cost",
            value: format_credits(exec_stats.cost),
        });
    }

    stats
}

pub fn build_input_rows(run: &RunRecord, graph: &Graph) -> InputsView {
    let Some(inputs) = run.inputs() else {
        return InputsView::Loading;
    };

    let rows = inputs
        .iter()
        .map(|(key, value)| InputRow {
            key: key.clone(),
            title: graph.input_schema.title_for(key).to_string(),
            display: format_value(value),
            raw: value.clone(),
        })
        .collect();
    InputsView::Ready(rows)
}

/// The status gate comes first: a run outside the displayable statuses has no
/// output card, whether or not its full record has loaded.
pub fn build_output_rows(run: &RunRecord, graph: &Graph) -> OutputsView {
    if !run.display_status().shows_outputs() {
        return OutputsView::Hidden;
    }
    let Some(outputs) = run.outputs() else {
        return OutputsView::Loading;
    };

    let rows = outputs
        .iter()
        .map(|(key, values)| OutputRow {
            key: key.clone(),
            title: graph.output_schema.title_for(key).to_string(),
            values: values.iter().map(format_value).collect(),
        })
        .collect();
    OutputsView::Ready(rows)
}

pub fn builder_href(graph_id: &str, graph_version: u32, run_id: &str) -> String {
    format!(
        "{BUILDER_ROUTE}?flowID={graph_id}&flowVersion={graph_version}&flowExecutionID={run_id}"
    )
}

/// Assemble the run action list. Stop and run-again are mutually exclusive
/// by status; builder and delete do not depend on status.
pub fn build_run_actions(
    run: &RunRecord,
    graph: &Graph,
    agent: &LibraryAgent,
    inputs_ready: bool,
    pending: PendingActions,
) -> Vec<RunAction> {
    let status = run.display_status();
    let meta = run.meta();
    let mut actions = Vec::new();

    if status.is_active() {
        actions.push(RunAction {
            label: "Stop run",
            kind: RunActionKind::Stop,
            variant: ButtonVariant::Secondary,
            disabled: pending.stopping,
        });
    } else if status.is_finished() && graph.can_run_again() {
        actions.push(RunAction {
            label: "Run again",
            kind: RunActionKind::RunAgain,
            variant: ButtonVariant::Default,
            disabled: !inputs_ready || pending.rerunning,
        });
    }

    if agent.can_access_graph {
        actions.push(RunAction {
            label: "Open run in builder",
            kind: RunActionKind::OpenInBuilder {
                href: builder_href(&meta.graph_id, meta.graph_version, &meta.id),
            },
            variant: ButtonVariant::Default,
            disabled: false,
        });
    }

    actions.push(RunAction {
        label: "Delete run",
        kind: RunActionKind::Delete,
        variant: ButtonVariant::Destructive,
        disabled: false,
    });

    actions
}

/// Input values to submit on "Run again", or `None` while inputs load.
pub fn collect_execute_inputs(inputs: &InputsView) -> Option<IndexMap<String, Value>> {
    match inputs {
        InputsView::Loading => None,
        InputsView::Ready(rows) => Some(
            rows.iter()
                .map(|row| (row.key.clone(), row.raw.clone()))
                .collect(),
        ),
    }
}
