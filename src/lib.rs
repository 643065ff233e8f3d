//! # Hospital Search
//!
//! A terminal hospital finder: pick a state, then a city within it, and
//! search. State and city lists come from a remote directory service.
//!
//! ## Features
//! - State list fetched once when the form opens
//! - City list re-fetched whenever the state changes
//! - City picker disabled until a state is chosen
//! - Search navigates to `/search?state=..&city=..`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod router;
pub mod ui;

// Re-export commonly used types
pub use models::{CityName, Selection, StateName};
pub use config::Config;
pub use error::{ConfigError, DirectoryError};
pub use router::{Route, Router};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{DirectoryClient, DirectoryService, NetworkActor};
