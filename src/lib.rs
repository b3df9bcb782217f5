pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ParseServiceSource;
pub use config::ReaderConfig;
pub use core::{
    app::FeedReader, display::DisplaySurface, loader::FeedLoader, menu::MenuVisibility,
    registry::FeedRegistry,
};
pub use domain::model::{Entry, FeedDescriptor, LoadOutcome};
pub use domain::ports::{FeedSource, RenderableState};
pub use utils::error::{FeedError, Result};
