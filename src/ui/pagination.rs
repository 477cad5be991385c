//! The one pagination implementation shared by every list-bearing screen.
//! Changing pages only re-slices the already-fetched list; no network calls.

use eframe::egui::{Button, RichText, Ui};

use crate::ui::UI_CONFIG;
use crate::ui::UI_TEXT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize, // 1-based
    page_size: usize,
}

impl Pager {
    pub const fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// `ceil(len / page_size)`; an empty list has zero pages, never NaN-style
    /// surprises.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.page += 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// The current page's view into `items`. Out-of-range pages (list shrank
    /// under us) yield an empty slice rather than panicking.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Prev/Next controls plus the "Page x of y" caption. Hidden entirely for an
/// empty list, like the pages it was extracted from.
pub fn pagination_controls(ui: &mut Ui, pager: &mut Pager, len: usize) {
    if len == 0 {
        return;
    }
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pager.has_prev(), Button::new(UI_TEXT.btn_prev))
            .clicked()
        {
            pager.prev();
        }
        if ui
            .add_enabled(pager.has_next(len), Button::new(UI_TEXT.btn_next))
            .clicked()
        {
            pager.next(len);
        }
        ui.label(
            RichText::new(format!("Page {} of {}", pager.page(), pager.total_pages(len)))
                .small()
                .color(UI_CONFIG.colors.subdued),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        let pager = Pager::new(5);
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(5), 1);
        assert_eq!(pager.total_pages(6), 2);
        assert_eq!(pager.total_pages(12), 3);
    }

    #[test]
    fn next_enabled_on_page_one_iff_more_than_one_page() {
        let pager = Pager::new(5);
        assert!(!pager.has_next(5));
        assert!(pager.has_next(6));
    }

    #[test]
    fn empty_list_has_zero_pages_and_no_motion() {
        let mut pager = Pager::new(5);
        assert_eq!(pager.total_pages(0), 0);
        assert!(!pager.has_next(0));
        assert!(!pager.has_prev());
        pager.next(0);
        pager.prev();
        assert_eq!(pager.page(), 1);
        let empty: &[u8] = &[];
        assert!(pager.slice(empty).is_empty());
    }

    #[test]
    fn twelve_items_walk() {
        let items: Vec<u32> = (1..=12).collect();
        let mut pager = Pager::new(5);

        assert_eq!(pager.slice(&items), &[1, 2, 3, 4, 5]);
        assert!(pager.has_next(items.len()));
        assert_eq!(pager.total_pages(items.len()), 3);

        pager.next(items.len());
        assert_eq!(pager.slice(&items), &[6, 7, 8, 9, 10]);

        pager.next(items.len());
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.slice(&items), &[11, 12]);
        assert!(!pager.has_next(items.len()));

        // Next on the last page is a no-op.
        pager.next(items.len());
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn out_of_range_page_slices_empty() {
        let items: Vec<u32> = (1..=12).collect();
        let mut pager = Pager::new(5);
        pager.next(items.len());
        pager.next(items.len());
        // List shrank behind our back.
        let shrunk: Vec<u32> = (1..=3).collect();
        assert!(pager.slice(&shrunk).is_empty());
        pager.reset();
        assert_eq!(pager.slice(&shrunk), &[1, 2, 3]);
    }
}
