use std::ops::Range;

/// Items shown per inventory page.
pub const PAGE_SIZE: usize = 9;

/// Up to this many pages every number gets a button.
const MAX_UNCOLLAPSED_PAGES: usize = 7;

/// One entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PageButton {
    pub fn number(&self) -> Option<usize> {
        match self {
            PageButton::Page { number, .. } => Some(*number),
            PageButton::Ellipsis => None,
        }
    }
}

/// Page-number strip for `current` of `total_pages`.
///
/// Short runs list every page. Longer runs always show the first and last
/// page, the pages either side of `current`, and an ellipsis for each gap.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    let page = |number: usize| PageButton::Page {
        number,
        current: number == current,
    };

    if total_pages <= MAX_UNCOLLAPSED_PAGES {
        return (1..=total_pages).map(page).collect();
    }

    let mut buttons = vec![page(1)];
    if current > 3 {
        buttons.push(PageButton::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    buttons.extend((start..=end).map(page));

    if current + 2 < total_pages {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.push(page(total_pages));
    buttons
}

/// Everything needed to draw the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub buttons: Vec<PageButton>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationControls {
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            buttons: page_buttons(current_page, total_pages),
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        }
    }

    /// The bar is hidden when everything fits on one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}

/// The inventory page cursor. It survives re-renders and is clamped to the
/// current result set each time one is paginated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
    total_pages: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_pages: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total pages as of the last `paginate` call.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Move the cursor. Out-of-range pages are clamped on the next `paginate`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Fit the cursor to a result set of `total_items` and return the index
    /// range of the current page.
    pub fn paginate(&mut self, total_items: usize, reset: bool) -> Range<usize> {
        if reset {
            self.current_page = 1;
        }
        self.total_pages = total_items.div_ceil(self.page_size);
        self.current_page = self.current_page.clamp(1, self.total_pages.max(1));

        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(total_items);
        start.min(end)..end
    }

    pub fn controls(&self, total_items: usize) -> PaginationControls {
        PaginationControls::new(self.current_page, self.total_pages, total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(buttons: &[PageButton]) -> Vec<Option<usize>> {
        buttons.iter().map(PageButton::number).collect()
    }

    #[test]
    fn test_short_runs_show_every_page() {
        let buttons = page_buttons(2, 3);
        assert_eq!(numbers(&buttons), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            buttons[1],
            PageButton::Page { number: 2, current: true }
        );
        assert_eq!(page_buttons(1, 7).len(), 7);
        assert_eq!(numbers(&page_buttons(1, 1)), vec![Some(1)]);
        assert!(page_buttons(1, 0).is_empty());
    }

    #[test]
    fn test_long_runs_collapse() {
        assert_eq!(
            numbers(&page_buttons(1, 10)),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_buttons(3, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_buttons(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_buttons(8, 10)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
        assert_eq!(
            numbers(&page_buttons(10, 10)),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn test_first_and_last_always_present() {
        for total in 1..=20 {
            for current in 1..=total {
                let buttons = numbers(&page_buttons(current, total));
                assert_eq!(buttons.first(), Some(&Some(1)));
                assert_eq!(buttons.last(), Some(&Some(total)));
                assert!(buttons.contains(&Some(current)));
            }
        }
    }

    #[test]
    fn test_controls_prev_next() {
        let first = PaginationControls::new(1, 3, 23);
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        assert!(first.is_visible());

        let last = PaginationControls::new(3, 3, 23);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);

        assert!(!PaginationControls::new(1, 1, 4).is_visible());
    }

    #[test]
    fn test_twenty_three_items() {
        let mut pager = Pager::default();
        assert_eq!(pager.paginate(23, true), 0..9);
        assert_eq!(pager.total_pages(), 3);

        pager.set_page(3);
        assert_eq!(pager.paginate(23, false), 18..23);

        let controls = pager.controls(23);
        assert_eq!(numbers(&controls.buttons), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(controls.total_items, 23);
    }

    #[test]
    fn test_cursor_clamps_when_results_shrink() {
        let mut pager = Pager::default();
        pager.paginate(50, true);
        pager.set_page(6);
        assert_eq!(pager.paginate(50, false), 45..50);

        // Filter shrinks the result set to two pages
        assert_eq!(pager.paginate(12, false), 9..12);
        assert_eq!(pager.current_page(), 2);

        // And to nothing
        assert_eq!(pager.paginate(0, false), 0..0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 0);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = Pager::default();
        pager.paginate(30, true);
        pager.set_page(3);
        assert_eq!(pager.paginate(30, true), 0..9);
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.has_prev());
        assert!(pager.has_next());
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        let mut pager = Pager::default();
        pager.set_page(0);
        assert_eq!(pager.paginate(10, false), 0..9);
        assert_eq!(pager.current_page(), 1);
    }
}
