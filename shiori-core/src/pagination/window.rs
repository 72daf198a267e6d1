//! Windowed page-number generation for the page-index control.

use std::fmt;

use crate::constants::WINDOW_FULL_THRESHOLD;

/// One button in the page-index control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A numbered, navigable page button.
    Page(u32),
    /// A collapsed run of pages.
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => write!(f, "…"),
        }
    }
}

/// Compute the page tokens shown for `current_page` of `total_pages`.
///
/// Callers clamp `total_pages` to at least 1 before invoking (see
/// [`crate::pagination::total_pages`]); this is never called with 0.
///
/// Up to seven pages render in full. Beyond that the window keeps the
/// first and last page visible and collapses the far side(s):
/// near the start `[1 2 3 4 5 … N]`, near the end `[1 … N-5 .. N]`,
/// and in the middle `[1 … c-1 c c+1 … N]`.
pub fn window(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    debug_assert!(total_pages >= 1, "callers clamp total_pages to at least 1");

    if total_pages <= WINDOW_FULL_THRESHOLD {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    if current_page <= 4 {
        let mut tokens: Vec<PageToken> =
            (1..=5).map(PageToken::Page).collect();
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
        return tokens;
    }

    if current_page >= total_pages - 3 {
        let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
        tokens.extend(
            (total_pages - 5..=total_pages).map(PageToken::Page),
        );
        return tokens;
    }

    vec![
        PageToken::Page(1),
        PageToken::Ellipsis,
        PageToken::Page(current_page - 1),
        PageToken::Page(current_page),
        PageToken::Page(current_page + 1),
        PageToken::Ellipsis,
        PageToken::Page(total_pages),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(tokens: &[PageToken]) -> Vec<i64> {
        tokens
            .iter()
            .map(|t| match t {
                PageToken::Page(n) => i64::from(*n),
                PageToken::Ellipsis => -1,
            })
            .collect()
    }

    #[test]
    fn small_totals_render_every_page() {
        for total in 1..=7 {
            for current in 1..=total {
                let tokens = window(current, total);
                assert_eq!(
                    pages(&tokens),
                    (1..=i64::from(total)).collect::<Vec<_>>(),
                    "current={current} total={total}"
                );
            }
        }
    }

    #[test]
    fn near_start_collapses_tail() {
        assert_eq!(pages(&window(3, 20)), vec![1, 2, 3, 4, 5, -1, 20]);
        assert_eq!(pages(&window(1, 8)), vec![1, 2, 3, 4, 5, -1, 8]);
        assert_eq!(pages(&window(4, 100)), vec![1, 2, 3, 4, 5, -1, 100]);
    }

    #[test]
    fn near_end_collapses_head() {
        assert_eq!(
            pages(&window(18, 20)),
            vec![1, -1, 15, 16, 17, 18, 19, 20]
        );
        assert_eq!(pages(&window(8, 8)), vec![1, -1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(pages(&window(5, 8)), vec![1, -1, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn middle_collapses_both_sides() {
        assert_eq!(
            pages(&window(10, 20)),
            vec![1, -1, 9, 10, 11, -1, 20]
        );
        assert_eq!(pages(&window(5, 9)), vec![1, -1, 4, 5, 6, -1, 9]);
    }

    #[test]
    fn first_and_last_page_always_visible() {
        for total in 8..40 {
            for current in 1..=total {
                let tokens = window(current, total);
                assert_eq!(tokens.first(), Some(&PageToken::Page(1)));
                assert_eq!(
                    tokens.last(),
                    Some(&PageToken::Page(total)),
                    "current={current} total={total}"
                );
                assert!(
                    tokens.contains(&PageToken::Page(current)),
                    "current page missing: current={current} total={total}"
                );
            }
        }
    }
}
