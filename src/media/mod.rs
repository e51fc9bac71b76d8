/// Media handling module
///
/// This module handles:
/// - Loading picked files and rejecting non-images (loader.rs)
/// - Ephemeral object URLs for uploaded bytes (blob.rs)

pub mod blob;
pub mod loader;
