//! The fixed set of SVGbackgrounds.com-style tiles.
//!
//! Entries are listed in the order they are exported. Every tile is a
//! 100×100 document; only its structure (dimensions plus extractable
//! primitives) is relied on downstream, not the exact artwork.

use crate::models::PatternSource;
use crate::svg::Tile;

static CATALOG: [PatternSource; 12] = [
    PatternSource {
        id: "liquid-cheese",
        name: "Liquid Cheese",
        description: "A yellow background pattern with a liquid cheese aesthetic",
        tags: &["abstract", "organic", "yellow", "gradient", "pattern"],
        svg: liquid_cheese,
    },
    PatternSource {
        id: "protruding-squares",
        name: "Protruding Squares",
        description: "An orange background pattern featuring a design of protruding squares",
        tags: &["geometric", "orange", "squares", "pattern", "simple"],
        svg: protruding_squares,
    },
    PatternSource {
        id: "wintery-sunburst",
        name: "Wintery Sunburst Sky Blue",
        description: "A sky-blue background pattern depicting a wintery sunburst effect",
        tags: &["abstract", "blue", "sunburst", "winter", "pattern"],
        svg: wintery_sunburst,
    },
    PatternSource {
        id: "subtle-triangles",
        name: "Subtle Prism Triangle Pattern",
        description: "A background pattern composed of subtle prism-like triangles",
        tags: &["geometric", "triangles", "prism", "purple", "subtle"],
        svg: subtle_triangles,
    },
    PatternSource {
        id: "bullseye-gradient",
        name: "Bullseye Gradient Background Design",
        description: "A gradient background design resembling a bullseye target",
        tags: &["gradient", "bullseye", "target", "red", "abstract"],
        svg: bullseye_gradient,
    },
    PatternSource {
        id: "spectrum-gradient",
        name: "Spectrum Gradient Color Wheel Background",
        description: "A vibrant background pattern featuring a spectrum color wheel gradient",
        tags: &["gradient", "spectrum", "rainbow", "vibrant", "colorful"],
        svg: spectrum_gradient,
    },
    PatternSource {
        id: "wavey-fingerprint",
        name: "Wavey Fingerprint Stripe Pattern",
        description: "A background pattern characterized by wavey, fingerprint-like stripes",
        tags: &["abstract", "fingerprint", "curved", "purple", "organic"],
        svg: wavey_fingerprint,
    },
    PatternSource {
        id: "radiant-grid",
        name: "Radiant Gradient Warm And Colorful Grid Background",
        description: "A warm and colorful grid background featuring a radiant gradient effect",
        tags: &["geometric", "grid", "gradient", "warm", "colorful"],
        svg: radiant_grid,
    },
    PatternSource {
        id: "constellation",
        name: "Endless Constellation Purple Network Background",
        description: "A purple background pattern depicting an intricate, endless constellation-like network",
        tags: &["abstract", "network", "purple", "constellation", "connections"],
        svg: constellation,
    },
    PatternSource {
        id: "zig-zag-chevron",
        name: "Zig Zag Chevron Stripes Pattern",
        description: "A background pattern featuring prominent zig-zag chevron stripes",
        tags: &["geometric", "chevron", "zigzag", "blue", "stripes"],
        svg: zig_zag_chevron,
    },
    PatternSource {
        id: "lime-chevron",
        name: "Repeating Chevrons Lime Green Background",
        description: "A lime green background pattern with repeating chevron shapes",
        tags: &["geometric", "chevron", "lime", "green", "repeating"],
        svg: lime_chevron,
    },
    PatternSource {
        id: "large-triangles",
        name: "Large Triangles Blue Background",
        description: "A blue background pattern composed of large triangular shapes",
        tags: &["geometric", "triangles", "blue", "large", "simple"],
        svg: large_triangles,
    },
];

/// All patterns in export order.
pub fn catalog() -> &'static [PatternSource] {
    &CATALOG
}

/// Look up a pattern by its slug.
pub fn find(id: &str) -> Option<&'static PatternSource> {
    CATALOG.iter().find(|p| p.id == id)
}

fn liquid_cheese() -> String {
    let mut t = Tile::new();
    t.linear_gradient(
        "cheeseGradient",
        &[("0%", "#FFD700"), ("50%", "#FFA500"), ("100%", "#FF8C00")],
    );
    // Backdrop disc circumscribes the tile; the two blobs are its only primitives.
    t.element("<ellipse cx=\"50\" cy=\"50\" rx=\"75\" ry=\"75\" fill=\"url(#cheeseGradient)\"/>");
    t.element("<path d=\"M20,30 Q30,10 40,25 T60,30 T80,25 Q90,35 85,50 T60,55 T35,50 Q25,40 30,30 Z\" fill=\"rgba(255,255,255,0.3)\"/>");
    t.element("<path d=\"M10,70 Q20,50 30,65 T50,70 T70,65 Q80,75 75,90 T50,95 T25,90 Q15,80 20,70 Z\" fill=\"rgba(255,255,255,0.2)\"/>");
    t.finish()
}

fn protruding_squares() -> String {
    const FILLS: [&str; 9] = [
        "#FFA500", "#FFD700", "#FFA500", //
        "#FF8C00", "#FFA500", "#FFD700", //
        "#FFA500", "#FF8C00", "#FFA500",
    ];
    let mut t = Tile::new();
    t.background("#FF4500");
    for (i, fill) in FILLS.iter().enumerate() {
        let x = 10 + 30 * (i % 3);
        let y = 10 + 30 * (i / 3);
        t.element(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"25\" height=\"25\" fill=\"{fill}\" stroke=\"#FF6347\" stroke-width=\"2\"/>"
        ));
    }
    t.finish()
}

fn wintery_sunburst() -> String {
    // (tip, shoulder, fill alpha)
    const RAYS: [(&str, &str, &str); 8] = [
        ("50,10", "55,15", "0.4"),
        ("10,50", "15,55", "0.3"),
        ("90,50", "85,55", "0.3"),
        ("50,90", "45,85", "0.4"),
        ("25,25", "30,30", "0.2"),
        ("75,25", "70,30", "0.2"),
        ("25,75", "30,70", "0.2"),
        ("75,75", "70,70", "0.2"),
    ];
    let mut t = Tile::new();
    t.linear_gradient(
        "sunburst",
        &[("0%", "#87CEEB"), ("50%", "#B0E0E6"), ("100%", "#E0F6FF")],
    )
    .background("url(#sunburst)")
    .comment("Sunburst rays")
    .group("opacity=\"0.6\"", |g| {
        for (tip, shoulder, alpha) in RAYS {
            g.element(&format!(
                "<path d=\"M50,50 L{tip} L{shoulder} Z\" fill=\"rgba(255,255,255,{alpha})\"/>"
            ));
        }
    });
    t.finish()
}

fn subtle_triangles() -> String {
    const VIOLET: &str = "rgba(138,43,226,0.3)";
    const INDIGO: &str = "rgba(75,0,130,0.3)";
    let mut t = Tile::new();
    t.linear_gradient("triangleGradient", &[("0%", "#E6E6FA"), ("100%", "#DDA0DD")])
        .background("url(#triangleGradient)")
        .comment("Triangle pattern")
        .group("opacity=\"0.3\"", |g| {
            for i in 0..9 {
                let x = 20 + 20 * (i % 3);
                let y = 20 + 20 * (i / 3);
                let fill = if i % 2 == 0 { VIOLET } else { INDIGO };
                g.element(&format!(
                    "<path d=\"M{x},{y} L{},{y} L{},{}.6 Z\" fill=\"{fill}\"/>",
                    x + 20,
                    x + 10,
                    y + 14
                ));
            }
        });
    t.finish()
}

fn bullseye_gradient() -> String {
    let mut t = Tile::new();
    t.radial_gradient(
        "bullseye",
        "50%",
        &[
            ("0%", "#FF0000"),
            ("25%", "#FFFFFF"),
            ("50%", "#FF0000"),
            ("75%", "#FFFFFF"),
            ("100%", "#FF0000"),
        ],
    )
    .background("url(#bullseye)");
    for r in [15, 30, 45] {
        t.element(&format!(
            "<circle cx=\"50\" cy=\"50\" r=\"{r}\" fill=\"none\" stroke=\"#8B0000\" stroke-width=\"2\"/>"
        ));
    }
    t.finish()
}

fn spectrum_gradient() -> String {
    let mut t = Tile::new();
    t.linear_gradient(
        "spectrum",
        &[
            ("0%", "#FF0000"),
            ("16.66%", "#FF8000"),
            ("33.33%", "#FFFF00"),
            ("50%", "#00FF00"),
            ("66.66%", "#0080FF"),
            ("83.33%", "#8000FF"),
            ("100%", "#FF0000"),
        ],
    )
    .background("url(#spectrum)")
    .comment("Rainbow stripes")
    .group("opacity=\"0.3\"", |g| {
        for i in 0..6 {
            let alpha = if i % 2 == 0 { "0.5" } else { "0.3" };
            g.element(&format!(
                "<rect x=\"0\" y=\"{}\" width=\"100\" height=\"5\" fill=\"rgba(255,255,255,{alpha})\"/>",
                10 + 15 * i
            ));
        }
    });
    t.finish()
}

fn wavey_fingerprint() -> String {
    const WAVES: [&str; 6] = [
        "M10,30 Q30,10 50,20 T90,30",
        "M5,40 Q25,20 45,30 T85,40",
        "M15,50 Q35,30 55,40 T95,50",
        "M10,60 Q30,40 50,50 T90,60",
        "M5,70 Q25,50 45,60 T85,70",
        "M15,80 Q35,60 55,70 T95,80",
    ];
    let mut t = Tile::new();
    t.linear_gradient("fingerprint", &[("0%", "#4B0082"), ("100%", "#8A2BE2")])
        .background("url(#fingerprint)")
        .comment("Fingerprint-like curved lines")
        .group(
            "stroke=\"rgba(255,255,255,0.4)\" stroke-width=\"1\" fill=\"none\"",
            |g| {
                for d in WAVES {
                    g.element(&format!("<path d=\"{d}\"/>"));
                }
            },
        )
        .comment("Concentric fingerprint rings")
        .group(
            "stroke=\"rgba(255,255,255,0.2)\" stroke-width=\"0.5\" fill=\"none\"",
            |g| {
                for r in [15, 25, 35, 45] {
                    g.element(&format!("<circle cx=\"50\" cy=\"50\" r=\"{r}\"/>"));
                }
            },
        );
    t.finish()
}

fn radiant_grid() -> String {
    const LINES: [u32; 4] = [20, 40, 60, 80];
    let mut t = Tile::new();
    t.radial_gradient(
        "radiant",
        "70%",
        &[
            ("0%", "#FF4500"),
            ("30%", "#FFA500"),
            ("60%", "#FFD700"),
            ("100%", "#FF6347"),
        ],
    )
    .background("url(#radiant)")
    .comment("Grid lines")
    .group("stroke=\"rgba(255,255,255,0.3)\" stroke-width=\"0.5\"", |g| {
        for x in LINES {
            g.element(&format!("<line x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"100\"/>"));
        }
        for y in LINES {
            g.element(&format!("<line x1=\"0\" y1=\"{y}\" x2=\"100\" y2=\"{y}\"/>"));
        }
    })
    .comment("Intersection points")
    .group("fill=\"rgba(255,255,255,0.6)\"", |g| {
        for y in LINES {
            for x in LINES {
                g.element(&format!("<circle cx=\"{x}\" cy=\"{y}\" r=\"2\"/>"));
            }
        }
    });
    t.finish()
}

fn constellation() -> String {
    const EDGES: [((u32, u32), (u32, u32)); 11] = [
        ((20, 20), (50, 30)),
        ((20, 20), (30, 50)),
        ((50, 30), (70, 20)),
        ((50, 30), (60, 60)),
        ((30, 50), (60, 60)),
        ((30, 50), (20, 70)),
        ((60, 60), (80, 70)),
        ((60, 60), (70, 80)),
        ((20, 70), (40, 80)),
        ((70, 20), (80, 40)),
        ((70, 80), (80, 90)),
    ];
    const STARS: [(u32, u32, &str); 11] = [
        (20, 20, "2"),
        (30, 50, "1.5"),
        (50, 30, "2"),
        (60, 60, "2"),
        (20, 70, "1.5"),
        (70, 20, "2"),
        (80, 70, "1.5"),
        (70, 80, "2"),
        (40, 80, "1"),
        (80, 40, "1"),
        (80, 90, "1.5"),
    ];
    let mut t = Tile::new();
    t.linear_gradient(
        "constellation",
        &[("0%", "#4B0082"), ("50%", "#6A0DAD"), ("100%", "#8A2BE2")],
    )
    .background("url(#constellation)")
    .comment("Network lines")
    .group("stroke=\"rgba(255,255,255,0.3)\" stroke-width=\"0.5\"", |g| {
        for ((x1, y1), (x2, y2)) in EDGES {
            g.element(&format!(
                "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"/>"
            ));
        }
    })
    .comment("Stars/nodes")
    .group("fill=\"rgba(255,255,255,0.8)\"", |g| {
        for (cx, cy, r) in STARS {
            g.element(&format!("<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"/>"));
        }
    });
    t.finish()
}

/// Four zig-zag polylines, each peaking `rise` units above its baseline.
fn chevron_rows(t: &mut Tile, first_baseline: u32, rise: u32) {
    for row in 0..4 {
        let low = first_baseline + 20 * row;
        let high = low - rise;
        t.element(&format!(
            "<path d=\"M10,{low} L30,{high} L50,{low} L70,{high} L90,{low}\"/>"
        ));
    }
}

fn zig_zag_chevron() -> String {
    let mut t = Tile::new();
    t.linear_gradient("chevron", &[("0%", "#000080"), ("100%", "#4169E1")])
        .background("url(#chevron)")
        .comment("Zigzag chevron pattern")
        .group(
            "stroke=\"rgba(255,255,255,0.8)\" stroke-width=\"3\" fill=\"none\"",
            |g| chevron_rows(g, 20, 10),
        );
    t.finish()
}

fn lime_chevron() -> String {
    let mut t = Tile::new();
    t.linear_gradient("limeChevron", &[("0%", "#32CD32"), ("100%", "#228B22")])
        .background("url(#limeChevron)")
        .comment("Lime chevron pattern")
        .group(
            "stroke=\"rgba(255,255,255,0.9)\" stroke-width=\"4\" fill=\"none\"",
            |g| chevron_rows(g, 15, 10),
        )
        .group("fill=\"rgba(255,255,255,0.2)\"", |g| {
            for y in [10, 30] {
                for x in [5, 35, 65] {
                    g.element(&format!(
                        "<rect x=\"{x}\" y=\"{y}\" width=\"25\" height=\"20\"/>"
                    ));
                }
            }
        });
    t.finish()
}

fn large_triangles() -> String {
    const OUTER: [&str; 4] = [
        "M0,0 L50,30 L0,60 Z",
        "M50,30 L100,0 L100,60 Z",
        "M0,60 L50,30 L0,100 Z",
        "M100,60 L50,30 L100,100 Z",
    ];
    let mut t = Tile::new();
    t.linear_gradient("triangles", &[("0%", "#0000CD"), ("100%", "#4169E1")])
        .background("url(#triangles)")
        .comment("Large triangles")
        .group("fill=\"rgba(255,255,255,0.3)\"", |g| {
            for d in OUTER {
                g.element(&format!("<path d=\"{d}\"/>"));
            }
        })
        .comment("Inner triangles")
        .group("fill=\"rgba(255,255,255,0.2)\"", |g| {
            for (x, y) in [(15, 15), (60, 15), (15, 55), (60, 55)] {
                g.element(&format!(
                    "<path d=\"M{x},{y} L{},{} L{x},{} Z\"/>",
                    x + 25,
                    y + 15,
                    y + 30
                ));
            }
        });
    t.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn twelve_unique_slugs_in_export_order() {
        let ids: Vec<&str> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            [
                "liquid-cheese",
                "protruding-squares",
                "wintery-sunburst",
                "subtle-triangles",
                "bullseye-gradient",
                "spectrum-gradient",
                "wavey-fingerprint",
                "radiant-grid",
                "constellation",
                "zig-zag-chevron",
                "lime-chevron",
                "large-triangles",
            ]
        );
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 12);
    }

    #[test]
    fn every_tile_declares_the_shared_frame() {
        for p in catalog() {
            let svg = p.svg_text();
            assert!(
                svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\" width=\"100\" height=\"100\">"),
                "{}",
                p.id
            );
            assert!(svg.ends_with("</svg>"), "{}", p.id);
            assert!(!p.tags.is_empty(), "{}", p.id);
        }
    }

    #[test]
    fn producers_are_deterministic_and_distinct() {
        let docs: Vec<String> = catalog().iter().map(|p| p.svg_text()).collect();
        for (p, doc) in catalog().iter().zip(&docs) {
            assert_eq!(&p.svg_text(), doc);
        }
        assert_eq!(docs.iter().collect::<HashSet<_>>().len(), docs.len());
    }

    #[test]
    fn find_by_slug() {
        assert_eq!(find("radiant-grid").map(|p| p.name), Some("Radiant Gradient Warm And Colorful Grid Background"));
        assert!(find("no-such-pattern").is_none());
    }

    #[test]
    fn generated_shapes_match_their_layout() {
        let squares = protruding_squares();
        assert!(squares.contains("<rect x=\"70\" y=\"70\" width=\"25\" height=\"25\" fill=\"#FFA500\""));
        let triangles = subtle_triangles();
        assert!(triangles.contains("<path d=\"M60,60 L80,60 L70,74.6 Z\" fill=\"rgba(138,43,226,0.3)\"/>"));
        let lime = lime_chevron();
        assert!(lime.contains("<path d=\"M10,75 L30,65 L50,75 L70,65 L90,75\"/>"));
        let large = large_triangles();
        assert!(large.contains("<path d=\"M60,55 L85,70 L60,85 Z\"/>"));
    }
}
