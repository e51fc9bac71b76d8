/// State management module
///
/// This module handles all gallery state, including:
/// - The gallery controller and its commands (gallery.rs)
/// - Shared data structures (data.rs)
/// - The derived page/search view (view.rs)
/// - Prompts raised by commands (prompt.rs)

pub mod data;
pub mod gallery;
pub mod prompt;
pub mod view;
