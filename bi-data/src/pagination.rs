//! Page math for table views. Pages are 1-based.

/// Rows-per-page choices offered by the pagination control.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Total pages needed for `len` rows: `ceil(len / per_page)`.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Rows `[(page-1)*per_page, page*per_page)` of `items`, empty when the page
/// is out of range.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Keep the current page valid after the filtered set shrinks.
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.clamp(1, count.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons to show for `current` of `count` pages.
///
/// Up to seven pages are all shown. Beyond that the first and last page are
/// always present together with the current page and its neighbours; near
/// either edge the first (or last) five pages are shown instead.
pub fn page_window(current: usize, count: usize) -> Vec<PageItem> {
    if count == 0 {
        return Vec::new();
    }
    if count <= 7 {
        return (1..=count).map(PageItem::Page).collect();
    }
    let current = clamp_page(current, count);
    let mut items = Vec::with_capacity(7);
    if current <= 4 {
        items.extend((1..=5).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(count));
    } else if current >= count - 3 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((count - 4..=count).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(count));
    }
    items
}

/// "Showing 11-20 of 57".
pub fn range_label(page: usize, per_page: usize, total: usize) -> String {
    if total == 0 || page == 0 || per_page == 0 {
        return "Showing 0 of 0".to_string();
    }
    let start = (page - 1) * per_page + 1;
    let end = (page * per_page).min(total);
    if start > total {
        return format!("Showing 0 of {}", total);
    }
    format!("Showing {}-{} of {}", start, end, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(57, 25), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_slices_cover_every_row_exactly_once() {
        let items: Vec<usize> = (0..23).collect();
        let per_page = 10;
        let mut seen = Vec::new();
        for page in 1..=page_count(items.len(), per_page) {
            let slice = page_slice(&items, page, per_page);
            assert_eq!(slice.first().copied(), Some((page - 1) * per_page));
            seen.extend_from_slice(slice);
        }
        assert_eq!(seen, items);
        assert!(page_slice(&items, 4, per_page).is_empty());
        assert!(page_slice(&items, 0, per_page).is_empty());
    }

    #[test]
    fn test_clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_small_counts_show_all_pages() {
        assert!(page_window(1, 0).is_empty());
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(7, 7).len(), 7);
    }

    #[test]
    fn test_windows_with_ellipses() {
        assert_eq!(
            page_window(2, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(19, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_window_always_contains_current_first_and_last() {
        for count in 1..30 {
            for current in 1..=count {
                let w = page_window(current, count);
                assert!(w.contains(&Page(current)));
                assert!(w.contains(&Page(1)));
                assert!(w.contains(&Page(count)));
            }
        }
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(range_label(2, 10, 57), "Showing 11-20 of 57");
        assert_eq!(range_label(6, 10, 57), "Showing 51-57 of 57");
        assert_eq!(range_label(1, 10, 0), "Showing 0 of 0");
    }
}
