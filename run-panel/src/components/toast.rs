//! Toast notifications
//!
//! A small signal-backed queue of transient messages. Hosts may provide a
//! `Signal<ToastQueue>` as context; components fall back to a local queue.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use std::collections::VecDeque;

pub const TOAST_CAPACITY: usize = 5;
pub const TOAST_LIFETIME_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn class(self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    /// Push a toast, dropping the oldest when full. Returns its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        while self.toasts.len() > TOAST_CAPACITY {
            self.toasts.pop_front();
        }
        id
    }

    /// Destructive toast for a failed user action, e.g. "execute agent".
    pub fn push_failure(&mut self, action: &str, error: &str) -> u64 {
        self.push(
            "Something went wrong",
            format!("Could not {action}: {error}"),
            ToastVariant::Destructive,
        )
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Surface a failed action to the user and schedule the toast's expiry.
pub fn notify_failure(mut toasts: Signal<ToastQueue>, action: &str, error: &str) {
    let id = toasts.write().push_failure(action, error);
    spawn(async move {
        TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        toasts.write().dismiss(id);
    });
}

#[component]
pub fn ToastStack(mut toasts: Signal<ToastQueue>) -> Element {
    let current = toasts.read().iter().cloned().collect::<Vec<_>>();

    rsx! {
        div {
            class: "toast-stack",
            for toast in current {
                div {
                    key: "{toast.id}",
                    class: toast.variant.class(),
                    div {
                        class: "toast-body",
                        p { class: "toast-title", "{toast.title}" }
                        p { class: "toast-description", "{toast.description}" }
                    }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
