pub mod run;
pub mod status_views;
pub mod toast;

pub use run::{AgentAction, AgentRunDetailsView, ButtonVariant};
pub use status_views::{ErrorState, LoadingState};
pub use toast::{ToastQueue, ToastStack};
