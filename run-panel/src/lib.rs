pub mod api;
pub mod components;
pub mod format;
pub mod page;

pub use api::*;
pub use components::*;
pub use page::*;
