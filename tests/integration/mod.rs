//! Integration tests for the timeline generator
//!
//! These tests drive the public API end to end: loading calendar data
//! from files, evaluating stages against reference dates and writing
//! the rendered page.

pub mod build_page;
pub mod data_sources;
pub mod evaluation;
pub mod helpers;
