//! Client-side pagination cursor for server-paged listings.

/// Zero-based page cursor plus the "probably one more page" heuristic.
///
/// `has_more` is true iff the last recorded page came back full. When the
/// total count is an exact multiple of the page size this yields one final
/// empty page, which is accepted behavior for these listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    page: usize,
    has_more: bool,
}

impl Paging {
    /// A fresh cursor at page zero. `has_more` starts true so the forward
    /// control is enabled until the first fetch says otherwise.
    pub fn new() -> Self {
        Self {
            page: 0,
            has_more: true,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Offset to request for the current page.
    pub fn skip(&self, page_size: usize) -> usize {
        self.page * page_size
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.has_more
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self) {
        self.page += 1;
    }

    /// Back to page zero, keeping `has_more` until the next fetch records it.
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Records the size of a fetched page to refresh the heuristic.
    pub fn record_page(&mut self, returned: usize, page_size: usize) {
        self.has_more = returned == page_size;
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_with_forward_enabled() {
        let paging = Paging::new();
        assert_eq!(paging.page(), 0);
        assert!(!paging.can_prev());
        assert!(paging.can_next());
    }

    #[test]
    fn test_skip_is_page_times_size() {
        let mut paging = Paging::new();
        assert_eq!(paging.skip(50), 0);
        paging.next();
        paging.next();
        assert_eq!(paging.skip(50), 100);
    }

    #[test]
    fn test_full_page_means_more() {
        let mut paging = Paging::new();
        paging.record_page(50, 50);
        assert!(paging.can_next());

        paging.record_page(49, 50);
        assert!(!paging.can_next());

        paging.record_page(0, 50);
        assert!(!paging.can_next());
    }

    #[test]
    fn test_prev_saturates_at_zero() {
        let mut paging = Paging::new();
        paging.prev();
        assert_eq!(paging.page(), 0);

        paging.next();
        assert!(paging.can_prev());
        paging.prev();
        assert_eq!(paging.page(), 0);
        assert!(!paging.can_prev());
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut paging = Paging::new();
        paging.next();
        paging.next();
        paging.record_page(50, 50);

        paging.reset();
        assert_eq!(paging.page(), 0);
        assert!(!paging.can_prev());
        // heuristic is only refreshed by the next recorded fetch
        assert!(paging.has_more());
    }
}
