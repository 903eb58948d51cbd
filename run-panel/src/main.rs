use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use run_panel::{read_page_query, ErrorState, RunDetailsPage, ToastQueue, ToastStack};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let toasts = use_context_provider(|| Signal::new(ToastQueue::default()));
    let query = use_hook(read_page_query);

    let body = match query {
        Some(query) => rsx! {
            RunDetailsPage { agent_id: query.agent_id, run_id: query.run_id }
        },
        None => rsx! {
            ErrorState {
                title: "No run selected".to_string(),
                error: "Open this page with ?agentID=<agent>&runID=<run>".to_string(),
            }
        },
    };

    rsx! {
        div {
            style: "min-height: 100vh; background-color: #111827; color: white; padding: 1rem;",
            {body}
            ToastStack { toasts }
        }
    }
}
