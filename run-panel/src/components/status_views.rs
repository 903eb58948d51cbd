use dioxus::prelude::*;

const ERROR_STATE_STYLE: &str = concat!(
    "display: flex; flex-direction: column; align-items: center; justify-content: center; ",
    "height: 100%; color: var(--danger-text, #ef4444); padding: 2rem; text-align: center;",
);

#[component]
pub fn LoadingState(message: String) -> Element {
    rsx! {
        div {
            class: "loading-state",
            span { class: "loading-spinner" }
            span { "{message}" }
        }
    }
}

#[component]
pub fn ErrorState(title: String, error: String) -> Element {
    rsx! {
        div {
            style: ERROR_STATE_STYLE,
            p { style: "font-weight: 500; margin-bottom: 0.5rem;", "{title}" }
            p { style: "font-size: 0.875rem; color: var(--text-secondary, #9ca3af);", "{error}" }
        }
    }
}
