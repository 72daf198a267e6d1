//! Local pagination: windowed page-index generation and buffer slicing.

pub mod paginator;
pub mod window;

pub use paginator::{clamp_page, slice_page, total_pages};
pub use window::{PageToken, window};
