use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One catalog entry: identity, human metadata and the tile producer.
#[derive(Clone, Copy, Debug)]
pub struct PatternSource {
    /// Slug, unique across the catalog.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Pure producer of the complete SVG document.
    pub svg: fn() -> String,
}

impl PatternSource {
    pub fn svg_text(&self) -> String {
        (self.svg)()
    }
}

/// Dimensions and drawing primitives scraped from one SVG document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedGeometry {
    pub width: u32,
    pub height: u32,
    pub view_box_height: u32,
    // paths (with "M" prefix), then rect tags, circle tags, polygon points
    pub primitives: Vec<String>,
}

/// Output unit written to the catalog JSON, one per pattern.
///
/// Field order and names are what the pattern browser reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub view_box_height: u32,
    pub mode: String,
    pub svg_path: Vec<String>,
    pub tags: Vec<String>,
    pub description: String,
    pub source: String,
    pub license: String,
    #[serde(with = "iso_micros")]
    pub created: NaiveDateTime,
    pub version: String,
}

/// `created` as `YYYY-MM-DDTHH:MM:SS.ffffff`; the fraction is omitted when
/// it is zero.
pub mod iso_micros {
    use chrono::{NaiveDateTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const WHOLE: &str = "%Y-%m-%dT%H:%M:%S";
    const MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    const PARSE: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn format(t: &NaiveDateTime) -> String {
        let fmt = if t.nanosecond() / 1_000 == 0 { WHOLE } else { MICROS };
        t.format(fmt).to_string()
    }

    pub fn serialize<S: Serializer>(t: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, PARSE).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::iso_micros;
    use chrono::NaiveDate;

    #[test]
    fn created_always_prints_six_fraction_digits() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let t = day.and_hms_micro_opt(3, 4, 5, 600_000).unwrap();
        assert_eq!(iso_micros::format(&t), "2024-01-02T03:04:05.600000");
        let t = day.and_hms_micro_opt(3, 4, 5, 7).unwrap();
        assert_eq!(iso_micros::format(&t), "2024-01-02T03:04:05.000007");
    }

    #[test]
    fn whole_seconds_drop_the_fraction() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(iso_micros::format(&t), "2024-01-02T03:04:05");
        let mut de = serde_json::Deserializer::from_str("\"2024-01-02T03:04:05\"");
        assert_eq!(iso_micros::deserialize(&mut de).unwrap(), t);
    }
}
