use iced::{Element, Size, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::Settings;
use error::GalleryError;
use media::loader::{self, PendingFile};
use state::data::{ImageId, LayoutMode};
use state::gallery::{DeleteOutcome, Gallery};
use state::prompt::Prompt;

/// Main application state
struct ImageGallery {
    /// All records plus the view settings around them
    gallery: Gallery,
    /// Page sizes offered by the picker
    page_size_options: Vec<usize>,
    /// Status message to display to the user
    status: String,
    /// Confirmation and alert dialogs
    prompt: Box<dyn Prompt>,
    /// Bumped on every pick; only the latest pick's load is accepted
    load_generation: u64,
    /// A picked file is still being read
    loading: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the file picker button
    PickFile,
    /// Background read of the picked file finished, tagged with its pick
    FileLoaded(u64, Result<PendingFile, GalleryError>),
    NameChanged(String),
    Submit,
    /// User clicked Delete on a record
    Delete(ImageId),
    LayoutSelected(LayoutMode),
    SearchChanged(String),
    PageSelected(usize),
    PageSizeSelected(usize),
}

impl ImageGallery {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        (
            Self::with_prompt(settings, Box::new(ui::dialogs::NativePrompt)),
            Task::none(),
        )
    }

    fn with_prompt(settings: Settings, prompt: Box<dyn Prompt>) -> Self {
        info!(
            page_size = settings.page_size,
            layout = ?settings.default_layout,
            "Image gallery initialized"
        );

        ImageGallery {
            gallery: Gallery::new(settings.page_size, settings.default_layout),
            page_size_options: settings.page_size_options,
            status: "Ready. Choose an image to upload.".to_string(),
            prompt,
            load_generation: 0,
            loading: false,
        }
    }

    /// Start a new pick; earlier loads still in flight become stale
    fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                if let Some(path) = ui::dialogs::pick_image_file() {
                    self.status = format!("Loading {}...", path.display());
                    let generation = self.begin_load();
                    return Task::perform(loader::load_upload(path), move |result| {
                        Message::FileLoaded(generation, result)
                    });
                }
            }
            Message::FileLoaded(generation, _) if generation != self.load_generation => {
                debug!(generation, latest = self.load_generation, "Dropping stale upload load");
            }
            Message::FileLoaded(_, Ok(file)) => {
                self.loading = false;
                let (width, height) = file.dimensions();
                info!(
                    path = %file.path().display(),
                    bytes = file.byte_len(),
                    width,
                    height,
                    "Upload file ready"
                );
                self.status = format!("Selected {}", file.file_name());
                self.gallery.select_file(file);
            }
            Message::FileLoaded(_, Err(e)) => {
                self.loading = false;
                warn!(error = %e, "Failed to load upload");
                self.status = e.to_string();
                self.prompt.alert(&self.status);
            }
            Message::NameChanged(name) => self.gallery.set_name(name),
            Message::Submit if self.loading => {
                self.status = "Still loading the selected image...".to_string();
            }
            Message::Submit => match self.gallery.submit() {
                Ok(id) => {
                    if let Some(record) = self.gallery.find(id) {
                        self.status = format!("Added {}", record.name());
                    }
                }
                Err(e) => {
                    self.status = e.to_string();
                    self.prompt.alert(&self.status);
                }
            },
            Message::Delete(id) => {
                if let DeleteOutcome::Deleted(name) = self.gallery.delete(id, self.prompt.as_ref()) {
                    self.status = format!("Deleted {}", name);
                }
            }
            Message::LayoutSelected(layout) => self.gallery.set_layout(layout),
            Message::SearchChanged(term) => self.gallery.set_search_term(term),
            Message::PageSelected(page) => {
                self.gallery.set_page(page);
            }
            Message::PageSizeSelected(page_size) => {
                self.gallery.set_page_size(page_size);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::gallery::view(&self.gallery, &self.page_size_options, &self.status)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load_or_default();
    let window = iced::window::Settings {
        size: Size::new(settings.window_width, settings.window_height),
        min_size: Some(Size::new(480.0, 400.0)),
        ..iced::window::Settings::default()
    };

    iced::application("Image Gallery", ImageGallery::update, ImageGallery::view)
        .theme(ImageGallery::theme)
        .window(window)
        .centered()
        .run_with(move || ImageGallery::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::loader::tests::pending_png;
    use crate::state::prompt::scripted::ScriptedPrompt;

    fn app(answer: bool) -> ImageGallery {
        let prompt = ScriptedPrompt {
            answer,
            ..ScriptedPrompt::default()
        };
        ImageGallery::with_prompt(Settings::default(), Box::new(prompt))
    }

    /// Simulate the picker choosing `name` and its read finishing
    fn pick(app: &mut ImageGallery, name: &str) {
        let generation = app.begin_load();
        let _ = app.update(Message::FileLoaded(generation, Ok(pending_png(name))));
    }

    fn upload(app: &mut ImageGallery, name: &str) {
        pick(app, name);
        let _ = app.update(Message::NameChanged(name.to_string()));
        let _ = app.update(Message::Submit);
    }

    #[test]
    fn starts_from_settings() {
        let app = app(true);
        assert_eq!(app.gallery.page_size(), 2);
        assert_eq!(app.gallery.layout(), LayoutMode::Column);
        assert_eq!(app.page_size_options, vec![2, 4, 8, 12]);
    }

    #[test]
    fn submit_through_messages_adds_record() {
        let mut app = app(true);
        upload(&mut app, "cat.png");

        assert_eq!(app.gallery.records().len(), 1);
        assert_eq!(app.status, "Added cat.png");
    }

    #[test]
    fn empty_submit_reports_error() {
        let mut app = app(true);
        let _ = app.update(Message::Submit);

        assert!(app.gallery.records().is_empty());
        assert_eq!(app.status, "Fields cannot be empty");
    }

    #[test]
    fn failed_load_keeps_previous_draft() {
        let mut app = app(true);
        pick(&mut app, "cat.png");
        let generation = app.begin_load();
        let _ = app.update(Message::FileLoaded(generation, Err(GalleryError::UnsupportedImage {
            path: "notes.txt".into(),
            message: "unknown format".to_string(),
        })));

        assert_eq!(app.gallery.pending_file().map(|f| f.file_name()), Some("cat.png"));
        assert!(app.status.contains("notes.txt"));
    }

    #[test]
    fn latest_pick_wins_when_loads_finish_out_of_order() {
        let mut app = app(true);
        let big = app.begin_load();
        let small = app.begin_load();

        let _ = app.update(Message::FileLoaded(small, Ok(pending_png("small.png"))));
        let _ = app.update(Message::FileLoaded(big, Ok(pending_png("big.png"))));

        assert_eq!(app.gallery.pending_file().map(|f| f.file_name()), Some("small.png"));
        assert_eq!(app.status, "Selected small.png");

        let _ = app.update(Message::NameChanged("Small".to_string()));
        let _ = app.update(Message::Submit);
        assert_eq!(app.gallery.records()[0].file_name(), "small.png");
    }

    #[test]
    fn stale_load_error_is_ignored() {
        let mut app = app(true);
        let old = app.begin_load();
        pick(&mut app, "cat.png");

        let _ = app.update(Message::FileLoaded(old, Err(GalleryError::UnsupportedImage {
            path: "notes.txt".into(),
            message: "unknown format".to_string(),
        })));

        assert_eq!(app.status, "Selected cat.png");
    }

    #[test]
    fn submit_waits_for_pending_load() {
        let mut app = app(true);
        pick(&mut app, "cat.png");
        let _ = app.update(Message::NameChanged("Dog".to_string()));
        let generation = app.begin_load();

        let _ = app.update(Message::Submit);

        assert!(app.gallery.records().is_empty());
        assert_eq!(app.status, "Still loading the selected image...");

        let _ = app.update(Message::FileLoaded(generation, Ok(pending_png("dog.png"))));
        let _ = app.update(Message::Submit);
        assert_eq!(app.gallery.records()[0].file_name(), "dog.png");
        assert_eq!(app.gallery.records()[0].name(), "Dog");
    }

    #[test]
    fn delete_then_reflow_through_messages() {
        let mut app = app(true);
        for name in ["cat.png", "dog.png", "fox.png"] {
            upload(&mut app, name);
        }
        let _ = app.update(Message::PageSelected(2));
        let fox = app.gallery.page_slice()[0].id();

        let _ = app.update(Message::Delete(fox));

        assert_eq!(app.gallery.current_page(), 1);
        assert_eq!(app.gallery.total_pages(), 1);
        assert_eq!(app.status, "Deleted fox.png");
    }

    #[test]
    fn declined_delete_keeps_record() {
        let mut app = app(false);
        upload(&mut app, "cat.png");
        let id = app.gallery.records()[0].id();

        let _ = app.update(Message::Delete(id));

        assert_eq!(app.gallery.records().len(), 1);
        assert_eq!(app.status, "Added cat.png");
    }

    #[test]
    fn view_messages_update_gallery() {
        let mut app = app(true);
        let _ = app.update(Message::LayoutSelected(LayoutMode::Grid));
        let _ = app.update(Message::SearchChanged("Do".to_string()));
        let _ = app.update(Message::PageSizeSelected(4));

        assert_eq!(app.gallery.layout(), LayoutMode::Grid);
        assert_eq!(app.gallery.search_term(), "Do");
        assert_eq!(app.gallery.page_size(), 4);
    }
}
