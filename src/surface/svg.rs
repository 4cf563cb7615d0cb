//! SVG document surface

use std::fmt::Write;

use crate::io::configuration::{FONT_FAMILY, FONT_SIZE, STROKE_COLOR, TEXT_COLOR};
use crate::io::error::{Result, surface_unavailable};
use crate::layout::geometry::Point;
use crate::surface::{Color, GlyphStyle, Surface, TextAlignment};

/// Surface that accumulates SVG elements
///
/// The document is produced once by [`SvgSurface::finish`]; the surface is
/// unavailable afterwards.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    body: String,
    width: u32,
    height: u32,
    background: Color,
    stroke: Color,
    text_color: Color,
    font_size: f64,
    finished: bool,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    /// Create an empty surface with the default label style
    pub const fn new() -> Self {
        Self {
            body: String::new(),
            width: 0,
            height: 0,
            background: [0, 0, 0, 0],
            stroke: STROKE_COLOR,
            text_color: TEXT_COLOR,
            font_size: FONT_SIZE,
            finished: false,
        }
    }

    /// Close the document and return its text
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the document was already finished
    pub fn finish(&mut self) -> Result<String> {
        self.check_available()?;
        self.finished = true;

        let mut document = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            document,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            document,
            r#"  <rect x="0" y="0" width="{}" height="{}" {}/>"#,
            self.width,
            self.height,
            paint("fill", self.background)
        );
        document.push_str(&self.body);
        document.push_str("</svg>\n");
        Ok(document)
    }
}

impl Surface for SvgSurface {
    fn check_available(&self) -> Result<()> {
        if self.finished {
            Err(surface_unavailable(&"SVG document already finished"))
        } else {
            Ok(())
        }
    }

    fn clear(&mut self, width: u32, height: u32, background: Color) {
        self.body.clear();
        self.width = width;
        self.height = height;
        self.background = background;
    }

    fn draw_filled_circle(&mut self, center: Point, radius: f64, style: GlyphStyle) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{radius}" {} {}/>"#,
            center.x,
            center.y,
            paint("fill", style.fill),
            paint("stroke", style.stroke)
        );
    }

    fn draw_text(&mut self, text: &str, at: Point, alignment: TextAlignment) {
        let anchor = match alignment {
            TextAlignment::Left => "start",
            TextAlignment::Center => "middle",
            TextAlignment::Right => "end",
        };
        let _ = writeln!(
            self.body,
            r#"  <text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="middle" font-family="{FONT_FAMILY}" font-size="{}" {} xml:space="preserve">{}</text>"#,
            at.x,
            at.y,
            self.font_size,
            paint("fill", self.text_color),
            escape(text)
        );
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            paint("stroke", self.stroke)
        );
    }
}

// Formats a color attribute, adding an opacity attribute for translucent colors
fn paint(attribute: &str, [r, g, b, a]: Color) -> String {
    if a == u8::MAX {
        format!(r##"{attribute}="#{r:02x}{g:02x}{b:02x}""##)
    } else {
        let opacity = f64::from(a) / f64::from(u8::MAX);
        format!(r##"{attribute}="#{r:02x}{g:02x}{b:02x}" {attribute}-opacity="{opacity:.3}""##)
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
