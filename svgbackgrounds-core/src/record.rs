use chrono::{Local, NaiveDateTime, SubsecRound};
use tracing::debug;

use crate::catalog::catalog;
use crate::constants::{LICENSE, MAX_SVG_PATH, MODE, SOURCE, VERSION};
use crate::extract::extract;
use crate::models::{PatternRecord, PatternSource};

/// Local wall-clock time at microsecond precision.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Run one producer through the extractor and stamp it with `created`.
///
/// `svgPath` keeps the first [`MAX_SVG_PATH`] primitives, or the whole
/// document as a single entry when the tile has no primitives at all.
pub fn build_record(source: &PatternSource, created: NaiveDateTime) -> PatternRecord {
    let svg = source.svg_text();
    let geom = extract(&svg);
    let svg_path = if geom.primitives.is_empty() {
        vec![svg]
    } else {
        geom.primitives.into_iter().take(MAX_SVG_PATH).collect()
    };
    debug!(id = source.id, entries = svg_path.len(), "built pattern record");
    PatternRecord {
        id: source.id.to_string(),
        name: source.name.to_string(),
        width: geom.width,
        height: geom.height,
        view_box_height: geom.view_box_height,
        mode: MODE.to_string(),
        svg_path,
        tags: source.tags.iter().map(|t| t.to_string()).collect(),
        description: source.description.to_string(),
        source: SOURCE.to_string(),
        license: LICENSE.to_string(),
        created,
        version: VERSION.to_string(),
    }
}

/// Records for the whole catalog, all stamped with the same instant.
pub fn build_records_at(created: NaiveDateTime) -> Vec<PatternRecord> {
    catalog().iter().map(|p| build_record(p, created)).collect()
}

/// Records for the whole catalog, each stamped when it is built.
pub fn build_records() -> Vec<PatternRecord> {
    catalog().iter().map(|p| build_record(p, now())).collect()
}
