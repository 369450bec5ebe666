//! Core crate exports for the `gewaesserkarte` terminal map.
//!
//! The root module re-exports the view-state components so that embedders can
//! drive the map without digging through the module hierarchy.

pub mod app;
pub mod app_dirs;
pub mod catalog;
pub mod filter;
pub mod input;
pub mod logging;
pub mod present;
mod render;
pub mod runtime;
pub mod search;
pub mod theme;
pub mod viewport;

pub use app::{App, FocusedWater, MapOutcome, UiConfig};
pub use catalog::{Catalog, CatalogError, Coordinate, Water, WaterId};
pub use present::DisplayState;
pub use runtime::run;
pub use search::{Phase, SearchState};
pub use theme::Theme;
pub use viewport::{Region, Span, Viewport};
