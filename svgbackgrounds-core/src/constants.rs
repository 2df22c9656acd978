/// Catalog-wide constants shared by the extractor, records and export.
/// Lengths are in SVG user units unless noted otherwise.
pub const TILE_SIZE: u32 = 100;
/// Fallback for a missing or non-numeric `width`/`height` attribute.
pub const DEFAULT_DIMENSION: u32 = TILE_SIZE;
/// Upper bound on entries kept in a record's `svgPath`.
pub const MAX_SVG_PATH: usize = 5;
/// Every catalog pattern repeats seamlessly.
pub const MODE: &str = "tile";
pub const SOURCE: &str = "SVGbackgrounds.com";
pub const LICENSE: &str = "Free with Attribution";
pub const VERSION: &str = "1.0";
/// Where the pattern browser expects the catalog file.
pub const DEFAULT_OUTPUT: &str =
    "/workspace/svg-pattern-generator/patterns/svgbackgrounds/data/svgbackgrounds.json";
