//! Run details page
//!
//! Host for the run details panel: resolves agent, graph and run from the
//! page query, keeps an active run refreshed, and owns delete/re-run
//! navigation.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use gloo_timers::future::TimeoutFuture;
use run_types::{Graph, LibraryAgent, RunRecord};
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{
    delete_graph_execution, fetch_graph, fetch_graph_execution, fetch_library_agent,
};
use crate::components::run::AgentRunDetailsView;
use crate::components::status_views::{ErrorState, LoadingState};
use crate::components::toast::{notify_failure, ToastQueue};

pub const RUN_REFRESH_INTERVAL_MS: u32 = 2_000;

/// Identifiers the page is opened with: `?agentID=...&runID=...`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub agent_id: String,
    pub run_id: String,
}

/// Build the query from already-decoded parameter values. Both ids must be
/// present and non-empty.
pub fn page_query_from(agent_id: Option<String>, run_id: Option<String>) -> Option<PageQuery> {
    let agent_id = agent_id.filter(|v| !v.is_empty())?;
    let run_id = run_id.filter(|v| !v.is_empty())?;
    Some(PageQuery { agent_id, run_id })
}

/// Read the page query from the browser location.
pub fn read_page_query() -> Option<PageQuery> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    page_query_from(params.get("agentID"), params.get("runID"))
}

#[derive(Clone, Debug, PartialEq)]
enum PageState {
    Loading,
    Ready {
        agent: LibraryAgent,
        graph: Graph,
        run: RunRecord,
    },
    Deleted,
    Failed(String),
}

async fn load_page(
    agent_id: &str,
    run_id: &str,
) -> Result<(LibraryAgent, Graph, RunRecord), String> {
    let agent = fetch_library_agent(agent_id).await?;
    let graph = fetch_graph(&agent.graph_id, Some(agent.graph_version)).await?;
    let run = fetch_graph_execution(&graph.id, run_id).await?;
    Ok((agent, graph, run))
}

#[component]
pub fn RunDetailsPage(agent_id: String, run_id: String) -> Element {
    let mut state = use_signal(|| PageState::Loading);
    let mut current_run_id = use_signal(|| run_id.clone());
    let toasts = use_context::<Signal<ToastQueue>>();
    let refresh_alive = use_hook(|| Rc::new(Cell::new(true)));
    let mut refresh_started = use_signal(|| false);

    {
        let refresh_alive = refresh_alive.clone();
        use_drop(move || refresh_alive.set(false));
    }

    // (Re)load everything whenever the selected run changes
    {
        let agent_id = agent_id.clone();
        use_effect(move || {
            let run_id = current_run_id();
            let agent_id = agent_id.clone();
            state.set(PageState::Loading);
            spawn(async move {
                match load_page(&agent_id, &run_id).await {
                    Ok((agent, graph, run)) => {
                        state.set(PageState::Ready { agent, graph, run });
                    }
                    Err(e) => {
                        error!("Failed to load run {}: {}", run_id, e);
                        state.set(PageState::Failed(e));
                    }
                }
            });
        });
    }

    // Keep an active run's record fresh
    {
        let refresh_alive = refresh_alive.clone();
        use_effect(move || {
            if refresh_started() {
                return;
            }
            refresh_started.set(true);

            let refresh_alive = refresh_alive.clone();
            spawn(async move {
                while refresh_alive.get() {
                    TimeoutFuture::new(RUN_REFRESH_INTERVAL_MS).await;

                    let target = match &*state.peek() {
                        PageState::Ready { graph, run, .. }
                            if run.display_status().is_active() =>
                        {
                            Some((graph.id.clone(), run.id().to_string()))
                        }
                        _ => None,
                    };
                    let Some((graph_id, run_id)) = target else {
                        continue;
                    };

                    match fetch_graph_execution(&graph_id, &run_id).await {
                        Ok(fresh) => {
                            if let PageState::Ready { run, .. } = &mut *state.write() {
                                if run.id() == fresh.id() && *run != fresh {
                                    *run = fresh;
                                }
                            }
                        }
                        Err(e) => error!("Failed to refresh run {}: {}", run_id, e),
                    }
                }
            });
        });
    }

    let on_run = move |new_run_id: String| {
        info!("Switching to new run {}", new_run_id);
        current_run_id.set(new_run_id);
    };

    let delete_run = move |_| {
        let run_id = current_run_id();
        spawn(async move {
            match delete_graph_execution(&run_id).await {
                Ok(()) => {
                    info!("Deleted run {}", run_id);
                    state.set(PageState::Deleted);
                }
                Err(e) => {
                    error!("Failed to delete run {}: {}", run_id, e);
                    notify_failure(toasts, "delete run", &e);
                }
            }
        });
    };

    match state() {
        PageState::Loading => rsx! {
            LoadingState { message: "Loading run...".to_string() }
        },
        PageState::Failed(error) => rsx! {
            ErrorState { title: "Error loading run".to_string(), error }
        },
        PageState::Deleted => rsx! {
            div {
                style: "padding: 2rem; text-align: center; color: var(--text-secondary, #94a3b8);",
                "This run has been deleted."
            }
        },
        PageState::Ready { agent, graph, run } => rsx! {
            AgentRunDetailsView {
                agent,
                graph,
                run,
                on_run,
                delete_run,
            }
        },
    }
}
