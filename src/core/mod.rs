//! Core module - session state and application infrastructure
//!
//! # Architecture Overview
//!
//! - [`SessionState`] - the modal state of a session (`AwaitingStart` → `Running` → `Over`)
//! - [`GameSettings`] - user preferences persisted as JSON
//! - [`CoreError`] - errors from settings I/O and invalid state transitions

pub mod error;
pub mod resources;
pub mod settings_persistence;
pub mod states;

pub use error::{CoreError, CoreResult};
pub use resources::*;
pub use states::*;
