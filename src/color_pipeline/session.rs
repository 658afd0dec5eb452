//! Editing session module
//!
//! Ties the locator and the color codec together for one loaded file.

mod color_session;
pub mod types;


pub use color_session::{ColorSession, SessionSummary};
pub use types::{EditorConfig, EditorConfigBuilder, NonFinitePolicy};
