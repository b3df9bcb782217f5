pub mod app;
pub mod display;
pub mod loader;
pub mod menu;
pub mod registry;

pub use crate::domain::model::{Entry, FeedDescriptor, LoadOutcome};
pub use crate::domain::ports::{FeedSource, RenderableState};
pub use crate::utils::error::Result;
