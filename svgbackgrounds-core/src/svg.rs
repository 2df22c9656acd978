use crate::constants::TILE_SIZE;

const INDENT: &str = "    ";

/// Line-oriented writer for one square pattern tile.
///
/// Every tile opens with the same root element (`viewBox="0 0 100 100"`,
/// `width="100" height="100"`) and children are indented four spaces per
/// nesting level. Attribute values are always double-quoted, which is what
/// [`crate::extract`] relies on.
pub struct Tile {
    s: String,
    depth: usize,
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

impl Tile {
    pub fn new() -> Self {
        let mut s = String::new();
        s.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {0} {0}\" width=\"{0}\" height=\"{0}\">\n",
            TILE_SIZE
        ));
        Tile { s, depth: 1 }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.s.push_str(INDENT);
        }
        self.s.push_str(text);
        self.s.push('\n');
    }

    /// Diagonal gradient running from the top-left to the bottom-right corner.
    pub fn linear_gradient(&mut self, id: &str, stops: &[(&str, &str)]) -> &mut Self {
        let open = format!(
            "<linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">"
        );
        self.gradient(&open, "</linearGradient>", stops)
    }

    /// Gradient radiating from the tile center out to radius `r`.
    pub fn radial_gradient(&mut self, id: &str, r: &str, stops: &[(&str, &str)]) -> &mut Self {
        let open = format!("<radialGradient id=\"{id}\" cx=\"50%\" cy=\"50%\" r=\"{r}\">");
        self.gradient(&open, "</radialGradient>", stops)
    }

    fn gradient(&mut self, open: &str, close: &str, stops: &[(&str, &str)]) -> &mut Self {
        self.line("<defs>");
        self.depth += 1;
        self.line(open);
        self.depth += 1;
        for (offset, color) in stops {
            self.line(&format!(
                "<stop offset=\"{offset}\" style=\"stop-color:{color};stop-opacity:1\" />"
            ));
        }
        self.depth -= 1;
        self.line(close);
        self.depth -= 1;
        self.line("</defs>");
        self
    }

    /// Full-tile rectangle.
    pub fn background(&mut self, fill: &str) -> &mut Self {
        self.line(&format!(
            "<rect width=\"{0}\" height=\"{0}\" fill=\"{fill}\"/>",
            TILE_SIZE
        ));
        self
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.line(&format!("<!-- {text} -->"));
        self
    }

    /// Emit one element verbatim at the current depth.
    pub fn element(&mut self, markup: &str) -> &mut Self {
        self.line(markup);
        self
    }

    /// Wrap whatever `body` writes in a `<g>` carrying `attrs`.
    pub fn group(&mut self, attrs: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(&format!("<g {attrs}>"));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("</g>");
        self
    }

    pub fn finish(mut self) -> String {
        self.s.push_str("</svg>");
        self.s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_indent_their_children() {
        let mut t = Tile::new();
        t.background("#fff").group("opacity=\"0.5\"", |g| {
            g.element("<circle cx=\"50\" cy=\"50\" r=\"2\"/>");
        });
        assert_eq!(
            t.finish(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\" width=\"100\" height=\"100\">\n\
             \x20   <rect width=\"100\" height=\"100\" fill=\"#fff\"/>\n\
             \x20   <g opacity=\"0.5\">\n\
             \x20       <circle cx=\"50\" cy=\"50\" r=\"2\"/>\n\
             \x20   </g>\n\
             </svg>"
        );
    }

    #[test]
    fn gradient_lands_in_defs() {
        let mut t = Tile::new();
        t.radial_gradient("glow", "70%", &[("0%", "#000"), ("100%", "#FFF")]);
        let svg = t.finish();
        let defs = svg.find("<defs>").unwrap();
        let open = svg.find("<radialGradient id=\"glow\" cx=\"50%\" cy=\"50%\" r=\"70%\">").unwrap();
        let close = svg.find("</defs>").unwrap();
        assert!(defs < open && open < close);
        assert_eq!(svg.matches("<stop ").count(), 2);
        assert!(svg.contains("style=\"stop-color:#FFF;stop-opacity:1\""));
    }

    #[test]
    fn empty_tile_is_well_formed() {
        let svg = Tile::default().finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("\n</svg>"));
    }
}
