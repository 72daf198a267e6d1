//! Slicing a fully loaded result buffer into fixed-size pages.
//!
//! The backend returns the whole filtered set; pagination happens locally.

/// Number of pages a buffer of `len` items spans at `page_size`.
///
/// Floors at 1 so the window generator never sees zero pages, even for an
/// empty buffer.
pub fn total_pages(len: usize, page_size: usize) -> u32 {
    debug_assert!(page_size > 0, "page sizes are fixed positive constants");
    let pages = len.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a requested page index into `[1, total_pages]`.
///
/// Out-of-range input (including 0 from malformed route parameters) is
/// corrected, never rejected.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// The items of `page` (1-based) out of `buffer`.
///
/// Pure range selection; a page beyond the available range yields an empty
/// slice rather than failing.
pub fn slice_page<T>(buffer: &[T], page: u32, page_size: usize) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(page_size);
    if start >= buffer.len() {
        return &[];
    }
    let end = (start + page_size).min(buffer.len());
    &buffer[start..end]
}
