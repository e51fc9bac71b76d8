/// User interface module
///
/// - `gallery.rs` renders the gallery screen from the derived view
/// - `dialogs.rs` wraps the native file picker and message boxes

pub mod dialogs;
pub mod gallery;
