//! Fixed per-view presentation constants.

/// Entries per page in the administrative listing.
pub const ADMIN_PAGE_SIZE: usize = 6;

/// Entries per page in the public catalog, genre, and search views.
pub const CATALOG_PAGE_SIZE: usize = 24;

/// Most page buttons a window shows before collapsing with ellipses.
pub const WINDOW_FULL_THRESHOLD: u32 = 7;
