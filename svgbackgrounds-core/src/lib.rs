//! Catalog of SVGbackgrounds.com-style tiles and the metadata export read by
//! the pattern browser.
//!
//! Each catalog entry produces a 100×100 SVG document; [`extract`] scrapes its
//! dimensions and primitives, [`build_records`] turns the catalog into
//! [`PatternRecord`]s and [`write_records`] stores them as one JSON array.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod constants;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod record;
pub mod svg;

pub use catalog::{catalog, find};
pub use error::{Error, Result};
pub use export::{to_json, write_records};
pub use extract::extract;
pub use models::{ExtractedGeometry, PatternRecord, PatternSource};
pub use record::{build_record, build_records, build_records_at, now};
