//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: UI focus and cursor state
//! - `catalog`: Song records and the read-only catalog
//! - `query`: Search filtering and storefront section composition
//! - `playback`: Current song / playing flag selection
//! - `app_model`: Main application model tying the above together

mod types;
mod catalog;
mod query;
mod playback;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, UiState};

pub use catalog::{Catalog, Category, Song};

pub use query::{CategorySection, SectionLimits};

pub use playback::{PlaybackInfo, PlaybackSession};

pub use app_model::AppModel;
