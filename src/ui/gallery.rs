/// Gallery renderer
///
/// Maps a [`GalleryView`] onto the iced widget tree. Holds no state of its
/// own; the layout mode only changes how the visible items are arranged.
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, scrollable, text, text_input,
    Column, Image, Row,
};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::data::{ImageRecord, LayoutMode};
use crate::state::gallery::Gallery;
use crate::state::view::{GalleryView, PageIndicator};
use crate::Message;

const TILE_WIDTH: f32 = 280.0;

/// Shown instead of items and pagination when the gallery has no records
const EMPTY_PLACEHOLDER: &str = "No images yet";

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Build the whole gallery screen
pub fn view<'a>(
    gallery: &'a Gallery,
    page_size_options: &'a [usize],
    status: &'a str,
) -> Element<'a, Message> {
    let derived = GalleryView::derive(gallery);
    let summary = page_summary(&derived, gallery.search_term());
    let GalleryView {
        visible,
        indicators,
        is_empty,
        ..
    } = derived;

    let mut content: Column<Message> = column![text("Image Gallery").size(40)]
        .spacing(16)
        .padding(24)
        .width(Length::Fill);

    if let Some(summary) = summary {
        content = content.push(pagination(indicators, summary));
    }

    content = content
        .push(
            text_input("Search for images by name", gallery.search_term())
                .on_input(Message::SearchChanged)
                .padding(8),
        )
        .push(upload_form(gallery))
        .push(layout_box(gallery, page_size_options));

    let items: Element<Message> = if is_empty {
        text(EMPTY_PLACEHOLDER).size(32).into()
    } else {
        let tiles: Vec<Element<Message>> = visible.into_iter().map(tile).collect();
        match gallery.layout() {
            LayoutMode::Column => Column::with_children(tiles).spacing(12).into(),
            LayoutMode::Grid => Wrap::with_elements(tiles).into(),
        }
    };

    content = content.push(items).push(text(status).size(14));

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Caption next to the page buttons, or `None` when pagination is hidden
fn page_summary(view: &GalleryView<'_>, search_term: &str) -> Option<String> {
    if view.is_empty {
        return None;
    }

    let current = view
        .indicators
        .iter()
        .find(|indicator| indicator.active)
        .map_or(1, |indicator| indicator.number);
    let mut summary = format!("Page {} of {}", current, view.total_pages);

    if !search_term.is_empty() {
        summary.push_str(&format!(
            " - {} of {} match",
            view.visible.len(),
            view.page_slice.len()
        ));
    }

    Some(summary)
}

/// One button per page, the current one highlighted
fn pagination<'a>(indicators: Vec<PageIndicator>, summary: String) -> Element<'a, Message> {
    let buttons = indicators.into_iter().map(|indicator| {
        let style: ButtonStyle = if indicator.active {
            button::primary
        } else {
            button::secondary
        };
        button(text(indicator.number.to_string()))
            .style(style)
            .on_press(Message::PageSelected(indicator.number))
            .into()
    });

    row![
        Row::with_children(buttons).spacing(6),
        text(summary).size(14),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn upload_form(gallery: &Gallery) -> Element<'_, Message> {
    let file_label = gallery
        .pending_file()
        .map(|file| file.file_name().to_string())
        .unwrap_or_else(|| "Choose image...".to_string());

    row![
        button(text(file_label))
            .style(button::secondary)
            .on_press(Message::PickFile),
        text_input("Image name", gallery.pending_name())
            .on_input(Message::NameChanged)
            .on_submit(Message::Submit)
            .padding(8),
        button("Submit").on_press(Message::Submit).padding(8),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

fn layout_box<'a>(gallery: &Gallery, page_size_options: &'a [usize]) -> Element<'a, Message> {
    let toggles = LayoutMode::ALL.into_iter().map(|mode| {
        let style: ButtonStyle = if mode == gallery.layout() {
            button::primary
        } else {
            button::secondary
        };
        button(mode.label())
            .style(style)
            .on_press(Message::LayoutSelected(mode))
            .into()
    });

    row![
        text("Switch layout").size(20),
        Row::with_children(toggles).spacing(6),
        horizontal_space(),
        text("Per page"),
        pick_list(
            page_size_options,
            Some(gallery.page_size()),
            Message::PageSizeSelected
        ),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

/// Dimensions, size and upload time, e.g. "640x480 - 12 KB - 2026-10-19 09:30"
fn tile_caption(record: &ImageRecord) -> String {
    let (width, height) = record.dimensions();
    format!(
        "{}x{} - {} KB - {}",
        width,
        height,
        record.byte_len().div_ceil(1024),
        record.upload_date().format("%Y-%m-%d %H:%M")
    )
}

/// A single record: the picture, its name and a delete action
fn tile(record: &ImageRecord) -> Element<'_, Message> {
    let details = column![
        text(record.name()).size(18),
        text(tile_caption(record)).size(12),
    ]
    .spacing(2);

    let actions = row![
        details,
        horizontal_space(),
        button("Delete")
            .style(button::danger)
            .on_press(Message::Delete(record.id())),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(
        column![
            Image::<Handle>::new(record.url().handle().clone()).width(Length::Fill),
            actions,
        ]
        .spacing(8),
    )
    .width(Length::Fixed(TILE_WIDTH))
    .padding(10)
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::loader::tests::pending_png;

    fn gallery_with(names: &[&str]) -> Gallery {
        let mut gallery = Gallery::new(2, LayoutMode::Column);
        for name in names {
            gallery.select_file(pending_png(name));
            gallery.set_name(name.to_string());
            gallery.submit().unwrap();
        }
        gallery
    }

    #[test]
    fn empty_gallery_hides_pagination() {
        let gallery = gallery_with(&[]);
        let derived = GalleryView::derive(&gallery);
        assert_eq!(page_summary(&derived, ""), None);
        assert_eq!(page_summary(&derived, "cat"), None);
    }

    #[test]
    fn summary_shows_current_page() {
        let mut gallery = gallery_with(&["cat.png", "dog.png", "fox.png"]);
        gallery.set_page(2);
        let derived = GalleryView::derive(&gallery);
        assert_eq!(page_summary(&derived, "").as_deref(), Some("Page 2 of 2"));
    }

    #[test]
    fn summary_counts_matches_on_current_page() {
        let mut gallery = gallery_with(&["cat.png", "dog.png", "fox.png"]);
        gallery.set_search_term("do".to_string());
        let derived = GalleryView::derive(&gallery);
        assert_eq!(
            page_summary(&derived, gallery.search_term()).as_deref(),
            Some("Page 1 of 2 - 1 of 2 match")
        );
    }

    #[test]
    fn tile_caption_is_plain_ascii() {
        let gallery = gallery_with(&["cat.png"]);
        let caption = tile_caption(&gallery.records()[0]);
        assert!(caption.starts_with("2x2 - 1 KB - "));
        assert!(caption.is_ascii());
    }

    #[test]
    fn builds_for_every_layout() {
        let options = [2, 4];
        let empty = gallery_with(&[]);
        let _ = view(&empty, &options, "");

        let mut gallery = gallery_with(&["cat.png", "dog.png"]);
        for mode in LayoutMode::ALL {
            gallery.set_layout(mode);
            let _ = view(&gallery, &options, "Ready");
        }
    }
}
