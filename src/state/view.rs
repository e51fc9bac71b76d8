/// Derived view of the gallery
///
/// Everything the renderer shows is computed here from the gallery state:
/// the current page's slice, the total page count, the search-filtered items
/// and the page indicators. Recomputing is cheap, so the UI derives a fresh
/// view on every render.
use std::ops::Range;

use super::data::ImageRecord;
use super::gallery::Gallery;

/// One entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub number: usize,
    pub active: bool,
}

#[derive(Debug)]
pub struct GalleryView<'a> {
    /// `ceil(records / page_size)`, 0 when there are no records
    pub total_pages: usize,
    /// Records on the current page, before search filtering
    pub page_slice: &'a [ImageRecord],
    /// Records on the current page whose name matches the search term
    pub visible: Vec<&'a ImageRecord>,
    pub indicators: Vec<PageIndicator>,
    /// No records at all; the renderer shows a placeholder instead of pages
    pub is_empty: bool,
}

impl<'a> GalleryView<'a> {
    pub fn derive(gallery: &'a Gallery) -> Self {
        let records = gallery.records();
        let current_page = gallery.current_page();
        let total_pages = total_pages(records.len(), gallery.page_size());

        let page_slice = &records[page_range(records.len(), current_page, gallery.page_size())];

        // Search only narrows the current page; it never re-paginates.
        let visible = page_slice
            .iter()
            .filter(|record| matches_search(record.name(), gallery.search_term()))
            .collect();

        let indicators = (1..=total_pages)
            .map(|number| PageIndicator {
                number,
                active: number == current_page,
            })
            .collect();

        Self {
            total_pages,
            page_slice,
            visible,
            indicators,
            is_empty: records.is_empty(),
        }
    }
}

/// Number of pages needed for `len` records
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of `page` (1-based), clipped to `len`
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Case-insensitive substring match; an empty term matches everything
pub fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}
