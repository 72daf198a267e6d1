//! Test doubles for the engine's service seams.

pub mod stubs;

pub use stubs::{RecordingEffects, TestCatalogApi, sample_entry};
