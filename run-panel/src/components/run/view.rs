//! Main AgentRunDetailsView component

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, warn};
use gloo_timers::future::TimeoutFuture;
use run_types::{Graph, LibraryAgent, RunRecord};
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{execute_graph, stop_graph_execution};
use crate::components::status_views::LoadingState;
use crate::components::toast::{notify_failure, ToastQueue, ToastStack};

use super::logic::*;
use super::styles::RUN_PANEL_STYLES;
use super::types::*;

/// How often the relative "Started" time is recomputed
pub const CLOCK_TICK_MS: u32 = 30_000;

/// Handles wired to the run action buttons
#[derive(Clone, Copy)]
struct RunDispatch {
    run: ReadSignal<RunRecord>,
    graph: ReadSignal<Graph>,
    inputs: Memo<InputsView>,
    pending: Signal<PendingActions>,
    toasts: Signal<ToastQueue>,
    on_run: Callback<String>,
    delete_run: Callback<()>,
}

impl RunDispatch {
    fn dispatch(self, kind: &RunActionKind) {
        match kind {
            RunActionKind::Stop => self.stop(),
            RunActionKind::RunAgain => self.run_again(),
            RunActionKind::Delete => self.delete_run.call(()),
            // Rendered as a link
            RunActionKind::OpenInBuilder { .. } => {}
        }
    }

    fn run_again(mut self) {
        let Some(inputs) = collect_execute_inputs(&self.inputs.read()) else {
            warn!("Run again requested before run inputs loaded; ignoring");
            return;
        };
        if self.pending.read().rerunning {
            return;
        }

        let (graph_id, graph_version) = {
            let run = self.run.read();
            (run.meta().graph_id.clone(), run.meta().graph_version)
        };
        self.pending.write().rerunning = true;

        spawn(async move {
            match execute_graph(&graph_id, graph_version, inputs).await {
                Ok(response) => {
                    info!(
                        "Started new execution {} of graph {} v{}",
                        response.graph_exec_id, graph_id, graph_version
                    );
                    self.on_run.call(response.graph_exec_id);
                }
                Err(e) => {
                    error!("Failed to execute graph {}: {}", graph_id, e);
                    notify_failure(self.toasts, "execute agent", &e);
                }
            }
            self.pending.write().rerunning = false;
        });
    }

    fn stop(mut self) {
        if self.pending.read().stopping {
            return;
        }

        let graph_id = self.graph.read().id.clone();
        let run_id = self.run.read().id().to_string();
        self.pending.write().stopping = true;

        spawn(async move {
            match stop_graph_execution(&graph_id, &run_id).await {
                Ok(()) => info!("Requested stop of run {}", run_id),
                Err(e) => {
                    error!("Failed to stop run {}: {}", run_id, e);
                    notify_failure(self.toasts, "stop run", &e);
                }
            }
            self.pending.write().stopping = false;
        });
    }
}

/// Detail panel for one agent run: info, outputs, inputs and actions.
#[component]
pub fn AgentRunDetailsView(
    agent: ReadSignal<LibraryAgent>,
    graph: ReadSignal<Graph>,
    run: ReadSignal<RunRecord>,
    #[props(default)] agent_actions: Vec<AgentAction>,
    on_run: Callback<String>,
    delete_run: Callback<()>,
) -> Element {
    let pending = use_signal(PendingActions::default);
    let local_toasts = use_signal(ToastQueue::default);
    let host_toasts = try_use_context::<Signal<ToastQueue>>();
    let has_toast_host = host_toasts.is_some();
    let toasts = host_toasts.unwrap_or(local_toasts);

    let mut now = use_signal(Utc::now);
    let clock_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let clock_alive = clock_alive.clone();
        use_drop(move || clock_alive.set(false));
    }

    use_hook(move || {
        spawn(async move {
            while clock_alive.get() {
                TimeoutFuture::new(CLOCK_TICK_MS).await;
                if clock_alive.get() {
                    now.set(Utc::now());
                }
            }
        });
    });

    let info_stats = use_memo(move || build_info_stats(run.read().meta(), now()));
    let inputs = use_memo(move || build_input_rows(&run.read(), &graph.read()));
    let outputs = use_memo(move || build_output_rows(&run.read(), &graph.read()));
    let run_actions = use_memo(move || {
        build_run_actions(
            &run.read(),
            &graph.read(),
            &agent.read(),
            inputs.read().is_ready(),
            pending(),
        )
    });

    let dispatch = RunDispatch {
        run,
        graph,
        inputs,
        pending,
        toasts,
        on_run,
        delete_run,
    };

    rsx! {
        style { {RUN_PANEL_STYLES} }
        div {
            class: "run-details",

            div {
                class: "run-details-main",

                section {
                    class: "run-card",
                    div { class: "run-card-header", "Info" }
                    div {
                        class: "info-stats",
                        for stat in info_stats() {
                            div {
                                key: "{stat.label}",
                                class: "info-stat",
                                span { class: "info-stat-label", "{stat.label}" }
                                span { class: "info-stat-value", "{stat.value}" }
                            }
                        }
                    }
                }

                {render_outputs(&outputs.read())}

                section {
                    class: "run-card",
                    div { class: "run-card-header", "Input" }
                    {render_inputs(&inputs.read())}
                }
            }

            aside {
                class: "action-sidebar",
                div {
                    class: "action-group",
                    h3 { class: "action-group-title", "Run actions" }
                    for action in run_actions() {
                        {render_run_action(action, dispatch)}
                    }
                }
                if !agent_actions.is_empty() {
                    div {
                        class: "action-group",
                        h3 { class: "action-group-title", "Agent actions" }
                        for action in agent_actions.iter().cloned() {
                            {render_agent_action(action)}
                        }
                    }
                }
            }

            if !has_toast_host {
                ToastStack { toasts }
            }
        }
    }
}

fn render_outputs(outputs: &OutputsView) -> Element {
    match outputs {
        OutputsView::Hidden => rsx! {},
        OutputsView::Loading => rsx! {
            section {
                class: "run-card",
                div { class: "run-card-header", "Output" }
                LoadingState { message: "Loading outputs...".to_string() }
            }
        },
        OutputsView::Ready(rows) => rsx! {
            section {
                class: "run-card",
                div { class: "run-card-header", "Output" }
                div {
                    class: "run-card-body",
                    if rows.is_empty() {
                        span { class: "field-empty", "No outputs yet" }
                    }
                    for row in rows.iter() {
                        div {
                            key: "{row.key}",
                            class: "field-row",
                            label { class: "field-title", "{row.title}" }
                            for (idx, value) in row.values.iter().enumerate() {
                                pre { key: "{idx}", class: "field-value", "{value}" }
                            }
                        }
                    }
                }
            }
        },
    }
}

fn render_inputs(inputs: &InputsView) -> Element {
    match inputs {
        InputsView::Loading => rsx! {
            LoadingState { message: "Loading inputs...".to_string() }
        },
        InputsView::Ready(rows) => rsx! {
            div {
                class: "run-card-body",
                if rows.is_empty() {
                    span { class: "field-empty", "This run has no inputs" }
                }
                for row in rows.iter() {
                    div {
                        key: "{row.key}",
                        class: "field-row",
                        label { class: "field-title", "{row.title}" }
                        pre { class: "field-value", "{row.display}" }
                    }
                }
            }
        },
    }
}

fn render_run_action(action: RunAction, dispatch: RunDispatch) -> Element {
    let RunAction {
        label,
        kind,
        variant,
        disabled,
    } = action;

    if let RunActionKind::OpenInBuilder { href } = &kind {
        return rsx! {
            a {
                key: "{label}",
                class: variant.class(),
                href: "{href}",
                "{label}"
            }
        };
    }

    rsx! {
        button {
            key: "{label}",
            class: variant.class(),
            disabled: disabled,
            onclick: move |_| dispatch.dispatch(&kind),
            "{label}"
        }
    }
}

fn render_agent_action(action: AgentAction) -> Element {
    let AgentAction {
        label,
        variant,
        callback,
    } = action;

    rsx! {
        button {
            key: "{label}",
            class: variant.class(),
            onclick: move |_| callback.call(()),
            "{label}"
        }
    }
}
