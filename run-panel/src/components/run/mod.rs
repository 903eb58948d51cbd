pub mod logic;
pub mod styles;
pub mod types;
pub mod view;

pub use types::{AgentAction, ButtonVariant};
pub use view::AgentRunDetailsView;

#[cfg(test)]
mod tests {
    use super::logic::*;
    use super::types::*;
    use chrono::{TimeZone, Utc};
    use run_types::{
        ExecutionStats, ExecutionStatus, Graph, GraphExecution, GraphExecutionMeta, LibraryAgent,
        RunRecord,
    };
    use serde_json::json;

    fn make_meta(status: ExecutionStatus) -> GraphExecutionMeta {
        GraphExecutionMeta {
            id: "run-42".to_string(),
            graph_id: "graph-7".to_string(),
            graph_version: 3,
            status,
            started_at: Utc.with_ymd_and_hms(2026, 10, 15, 11, 58, 0).unwrap(),
            ended_at: None,
            stats: None,
        }
    }

    fn make_full_run(status: ExecutionStatus) -> RunRecord {
        let mut inputs = indexmap::IndexMap::new();
        inputs.insert("topic".to_string(), json!("rust"));
        inputs.insert("limit".to_string(), json!(5));
        inputs.insert("options".to_string(), json!({ "depth": 2 }));

        let mut outputs = indexmap::IndexMap::new();
        outputs.insert("summary".to_string(), vec![json!("done"), json!({ "ok": true })]);

        RunRecord::Full(GraphExecution {
            meta: make_meta(status),
            inputs,
            outputs,
        })
    }

    fn make_graph() -> Graph {
        serde_json::from_value(json!({
            "id": "graph-7",
            "version": 3,
            "name": "Research agent",
            "input_schema": {
                "properties": {
                    "topic": { "title": "Topic", "type": "string" },
                    "limit": { "type": "integer" }
                }
            },
            "output_schema": {
                "properties": {
                    "summary": { "title": "Summary" }
                }
            }
        }))
        .unwrap()
    }

    fn make_agent(can_access_graph: bool) -> LibraryAgent {
        LibraryAgent {
            id: "agent-1".to_string(),
            graph_id: "graph-7".to_string(),
            graph_version: 3,
            name: "Research agent".to_string(),
            can_access_graph,
        }
    }

    fn labels(actions: &[RunAction]) -> Vec<&'static str> {
        actions.iter().map(|a| a.label).collect()
    }

    fn actions_for(
        status: ExecutionStatus,
        graph: &Graph,
        can_access_graph: bool,
    ) -> Vec<RunAction> {
        build_run_actions(
            &make_full_run(status),
            graph,
            &make_agent(can_access_graph),
            true,
            PendingActions::default(),
        )
    }

    #[test]
    fn active_runs_offer_stop_not_run_again() {
        let graph = make_graph();
        for status in [ExecutionStatus::Queued, ExecutionStatus::Running] {
            let actions = actions_for(status, &graph, false);
            assert_eq!(labels(&actions), vec!["Stop run", "Delete run"]);
        }
    }

    #[test]
    fn finished_runs_offer_run_again() {
        let graph = make_graph();
        for status in [
            ExecutionStatus::Completed,
            ExecutionStatus::Failed,
            ExecutionStatus::Terminated,
        ] {
            let actions = actions_for(status, &graph, false);
            assert_eq!(labels(&actions), vec!["Run again", "Delete run"]);
            assert!(!actions[0].disabled);
        }
    }

    #[test]
    fn required_credentials_block_run_again() {
        let mut graph = make_graph();
        graph.credentials_input_schema.required = vec!["github_credentials".to_string()];
        let actions = actions_for(ExecutionStatus::Completed, &graph, false);
        assert_eq!(labels(&actions), vec!["Delete run"]);
    }

    #[test]
    fn external_trigger_blocks_run_again() {
        let mut graph = make_graph();
        graph.has_external_trigger = true;
        let actions = actions_for(ExecutionStatus::Failed, &graph, false);
        assert_eq!(labels(&actions), vec!["Delete run"]);
    }

    #[test]
    fn draft_runs_only_offer_delete() {
        let actions = actions_for(ExecutionStatus::Incomplete, &make_graph(), false);
        assert_eq!(labels(&actions), vec!["Delete run"]);
    }

    #[test]
    fn builder_link_requires_graph_access() {
        let graph = make_graph();
        let without = actions_for(ExecutionStatus::Running, &graph, false);
        assert!(!without
            .iter()
            .any(|a| matches!(a.kind, RunActionKind::OpenInBuilder { .. })));

        let with = actions_for(ExecutionStatus::Running, &graph, true);
        assert_eq!(
            labels(&with),
            vec!["Stop run", "Open run in builder", "Delete run"]
        );
        assert_eq!(
            with[1].kind,
            RunActionKind::OpenInBuilder {
                href: "/build?flowID=graph-7&flowVersion=3&flowExecutionID=run-42".to_string()
            }
        );
    }

    #[test]
    fn run_again_disabled_until_inputs_load() {
        let summary = RunRecord::Summary(make_meta(ExecutionStatus::Completed));
        let graph = make_graph();
        let inputs = build_input_rows(&summary, &graph);
        assert_eq!(inputs, InputsView::Loading);
        assert!(collect_execute_inputs(&inputs).is_none());

        let actions = build_run_actions(
            &summary,
            &graph,
            &make_agent(false),
            inputs.is_ready(),
            PendingActions::default(),
        );
        assert_eq!(actions[0].kind, RunActionKind::RunAgain);
        assert!(actions[0].disabled);
    }

    #[test]
    fn pending_requests_disable_their_buttons() {
        let graph = make_graph();
        let pending = PendingActions {
            stopping: true,
            rerunning: true,
        };
        let stop = build_run_actions(
            &make_full_run(ExecutionStatus::Running),
            &graph,
            &make_agent(false),
            true,
            pending,
        );
        assert!(stop[0].disabled);

        let rerun = build_run_actions(
            &make_full_run(ExecutionStatus::Completed),
            &graph,
            &make_agent(false),
            true,
            pending,
        );
        assert!(rerun[0].disabled);
        assert!(!rerun[1].disabled);
    }

    #[test]
    fn info_stats_without_stats_has_two_entries() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let stats = build_info_stats(&make_meta(ExecutionStatus::Terminated), now);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].label, "Status");
        assert_eq!(stats[0].value, "Stopped");
        assert_eq!(stats[1].label, "Started");
        assert_eq!(stats[1].value, "2 minutes ago, 2026-10-15 11:58:00");
    }

    #[test]
    fn info_stats_with_stats() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let mut meta = make_meta(ExecutionStatus::Completed);
        meta.stats = Some(ExecutionStats {
            duration: 125.0,
            node_exec_count: 4,
            cost: 300,
        });

        let stats = build_info_stats(&meta, now);
        let pairs: Vec<(&str, &str)> = stats
            .iter()
            .map(|s| (s.label, s.value.as_str()))
            .collect();
        assert_eq!(
            pairs[2..],
            [("Duration", "2 minutes"), ("Steps", "4"), ("Cost", "$3.00")]
        );
        assert_eq!(pairs[0], ("Status", "Success"));
    }

    #[test]
    fn started_stat_follows_the_clock() {
        let meta = make_meta(ExecutionStatus::Running);
        let early = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 10, 15, 12, 30, 0).unwrap();

        let before = build_info_stats(&meta, early);
        let after = build_info_stats(&meta, later);
        assert_eq!(before[1].value, "2 minutes ago, 2026-10-15 11:58:00");
        assert_eq!(after[1].value, "32 minutes ago, 2026-10-15 11:58:00");
    }

    #[test]
    fn input_rows_format_values_and_titles() {
        let inputs = build_input_rows(&make_full_run(ExecutionStatus::Completed), &make_graph());
        let InputsView::Ready(rows) = inputs else {
            panic!("inputs should be ready");
        };

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].title, "Topic");
        assert_eq!(rows[0].display, "rust");
        assert_eq!(rows[1].title, "limit");
        assert_eq!(rows[1].display, "5");
        assert_eq!(rows[2].display, "{\n  \"depth\": 2\n}");
    }

    #[test]
    fn execute_inputs_keep_raw_values() {
        let inputs = build_input_rows(&make_full_run(ExecutionStatus::Completed), &make_graph());
        let payload = collect_execute_inputs(&inputs).expect("inputs ready");
        assert_eq!(payload["limit"], json!(5));
        assert_eq!(payload["options"], json!({ "depth": 2 }));
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["topic", "limit", "options"]);
    }

    #[test]
    fn outputs_hidden_outside_displayable_statuses() {
        let graph = make_graph();
        for status in [ExecutionStatus::Queued, ExecutionStatus::Incomplete] {
            assert_eq!(
                build_output_rows(&make_full_run(status), &graph),
                OutputsView::Hidden
            );
        }
    }

    #[test]
    fn summary_records_hidden_outside_displayable_statuses() {
        let graph = make_graph();
        for status in [ExecutionStatus::Queued, ExecutionStatus::Incomplete] {
            let summary = RunRecord::Summary(make_meta(status));
            assert_eq!(build_output_rows(&summary, &graph), OutputsView::Hidden);
        }
    }

    #[test]
    fn outputs_loading_for_summary_records() {
        let summary = RunRecord::Summary(make_meta(ExecutionStatus::Running));
        assert_eq!(
            build_output_rows(&summary, &make_graph()),
            OutputsView::Loading
        );
    }

    #[test]
    fn outputs_ready_for_displayable_statuses() {
        let outputs = build_output_rows(&make_full_run(ExecutionStatus::Running), &make_graph());
        let OutputsView::Ready(rows) = outputs else {
            panic!("outputs should be ready");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Summary");
        assert_eq!(
            rows[0].values,
            vec!["done".to_string(), "{\n  \"ok\": true\n}".to_string()]
        );
    }

    #[test]
    fn format_value_scalars_pass_through() {
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(1.5)), "1.5");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!("plain")), "plain");
        assert_eq!(format_value(&json!([1, 2])), "[\n  1,\n  2\n]");
    }
}
