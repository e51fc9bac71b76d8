/// Native dialogs: the upload file picker and the prompts raised by
/// gallery commands
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

use crate::media::loader::IMAGE_EXTENSIONS;
use crate::state::prompt::Prompt;

/// Prompts backed by blocking OS message boxes
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn confirm(&self, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Image Gallery")
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();

        matches!(answer, MessageDialogResult::Yes)
    }

    fn alert(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Image Gallery")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Show the native file picker filtered to image files
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select an Image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}
