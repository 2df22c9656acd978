//! Textual metadata scraping for catalog tiles.
//!
//! This is a handful of regular expressions over double-quoted attributes,
//! not an XML parser. Missing or malformed attributes fall back to defaults,
//! so [`extract`] never fails.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::constants::DEFAULT_DIMENSION;
use crate::models::ExtractedGeometry;

struct Patterns {
    view_box: Regex,
    width: Regex,
    height: Regex,
    path: Regex,
    rect: Regex,
    circle: Regex,
    polygon: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex patterns validated by the unit tests"
)]
fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| {
        let re = |src: &str| Regex::new(src).expect("static regex pattern is valid");
        Patterns {
            view_box: re(r#"viewBox="([^"]*)""#),
            width: re(r#"width="(\d+)""#),
            height: re(r#"height="(\d+)""#),
            path: re(r#"<path[^>]*d="([^"]*)"[^>]*>"#),
            rect: re(r"<rect[^>]*>"),
            circle: re(r"<circle[^>]*>"),
            polygon: re(r#"<polygon[^>]*points="([^"]*)"[^>]*>"#),
        }
    })
}

fn first_number(re: &Regex, svg: &str) -> Option<u32> {
    re.captures(svg)?.get(1)?.as_str().parse().ok()
}

fn view_box_height(svg: &str) -> Option<u32> {
    let value = patterns().view_box.captures(svg)?.get(1)?.as_str();
    value.split_whitespace().nth(3)?.parse().ok()
}

/// Scrape dimensions and drawing primitives from one SVG document.
///
/// `width`/`height` come from the first numeric attribute of that name
/// anywhere in the text. The primitive list is every path `d` value prefixed
/// with `M`, then every `<rect>` tag, every `<circle>` tag and every polygon
/// `points` value, each group in document order.
pub fn extract(svg: &str) -> ExtractedGeometry {
    let p = patterns();
    let width = first_number(&p.width, svg).unwrap_or(DEFAULT_DIMENSION);
    let height = first_number(&p.height, svg).unwrap_or(DEFAULT_DIMENSION);
    let view_box_height = view_box_height(svg).unwrap_or(height);

    let paths = p.path.captures_iter(svg).map(|c| format!("M{}", &c[1]));
    let rects = p.rect.find_iter(svg).map(|m| m.as_str().to_string());
    let circles = p.circle.find_iter(svg).map(|m| m.as_str().to_string());
    let polygons = p.polygon.captures_iter(svg).map(|c| c[1].to_string());
    let primitives: Vec<String> = paths.chain(rects).chain(circles).chain(polygons).collect();

    debug!(
        width,
        height,
        view_box_height,
        primitives = primitives.len(),
        "extracted svg geometry"
    );
    ExtractedGeometry {
        width,
        height,
        view_box_height,
        primitives,
    }
}
