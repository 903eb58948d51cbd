//! Run details view-model types

use dioxus::prelude::*;
use serde_json::Value;

/// One labelled entry of the run info card
#[derive(Clone, Debug, PartialEq)]
pub struct InfoStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputRow {
    pub key: String,
    pub title: String,
    /// Text shown in the card
    pub display: String,
    /// Value as received, re-submitted on "Run again"
    pub raw: Value,
}

/// Input card state
#[derive(Clone, Debug, PartialEq)]
pub enum InputsView {
    /// Run record has no input payload yet
    Loading,
    Ready(Vec<InputRow>),
}

impl InputsView {
    pub fn is_ready(&self) -> bool {
        matches!(self, InputsView::Ready(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutputRow {
    pub key: String,
    pub title: String,
    pub values: Vec<String>,
}

/// Output card state
#[derive(Clone, Debug, PartialEq)]
pub enum OutputsView {
    /// Run record has no output payload yet
    Loading,
    /// Status has no displayable outputs; the card is not rendered
    Hidden,
    Ready(Vec<OutputRow>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Secondary,
    Destructive,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "action-button",
            ButtonVariant::Secondary => "action-button secondary",
            ButtonVariant::Destructive => "action-button destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunActionKind {
    Stop,
    RunAgain,
    OpenInBuilder { href: String },
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunAction {
    pub label: &'static str,
    pub kind: RunActionKind,
    pub variant: ButtonVariant,
    pub disabled: bool,
}

/// Requests currently in flight from this panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingActions {
    pub stopping: bool,
    pub rerunning: bool,
}

/// Agent-level action supplied by the host page
#[derive(Clone, PartialEq)]
pub struct AgentAction {
    pub label: String,
    pub variant: ButtonVariant,
    pub callback: Callback<()>,
}

impl AgentAction {
    pub fn new(label: impl Into<String>, callback: Callback<()>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Default,
            callback,
        }
    }
}
