// File: crates/chart-core/src/svg.rs
// Summary: Serialize a Scene to a standalone SVG document.

use std::fmt::Write as _;

use crate::scene::{Primitive, Scene, Stroke, TextAnchor};
use crate::theme::Rgba;

impl Scene {
    /// Standalone SVG: a background rect followed by every node in paint order.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width(), self.height());
        let mut out = String::with_capacity(256 + self.len() * 96);
        // fmt::Write into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%" {}/>"#, paint("fill", self.background()));
        for node in self.paint_order() {
            write_primitive(&mut out, &node.primitive);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_primitive(out: &mut String, p: &Primitive) {
    let _ = match p {
        Primitive::Line { from, to, stroke } => writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            from.x, from.y, to.x, to.y, stroke_attrs(stroke)
        ),
        Primitive::Polyline { points, stroke } => {
            let pts = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ");
            writeln!(out, r#"<polyline points="{pts}" fill="none" {}/>"#, stroke_attrs(stroke))
        }
        Primitive::Text { at, text, size, color, anchor, rotation } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let transform = if *rotation != 0.0 {
                format!(r#" transform="rotate({rotation} {} {})""#, at.x, at.y)
            } else {
                String::new()
            };
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{size}" text-anchor="{anchor}" {}{transform}>{}</text>"#,
                at.x,
                at.y,
                paint("fill", *color),
                escape(text)
            )
        }
        Primitive::Circle { center, radius, fill, stroke } => {
            let fill = fill.map(|c| paint("fill", c)).unwrap_or_else(|| r#"fill="none""#.to_string());
            let stroke = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
            writeln!(out, r#"<circle cx="{}" cy="{}" r="{radius}" {fill} {stroke}/>"#, center.x, center.y)
        }
    };
}

fn paint(attr: &str, c: Rgba) -> String {
    let mut s = format!(r##"{attr}="#{:02X}{:02X}{:02X}""##, c.r, c.g, c.b);
    if c.a != 255 {
        let _ = write!(s, r#" {attr}-opacity="{:.3}""#, c.a as f32 / 255.0);
    }
    s
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut out = format!(r#"{} stroke-width="{}""#, paint("stroke", s.color), s.width);
    if let Some(dash) = &s.dash {
        let list = dash.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(" ");
        let _ = write!(out, r#" stroke-dasharray="{list}""#);
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::scene::{DrawSurface, Layer};
    use crate::theme::colors;

    #[test]
    fn text_is_escaped_and_rotated() {
        let mut scene = Scene::new(20, 10);
        scene.append(
            Layer::Chart,
            Primitive::Text {
                at: Point::new(5.0, 5.0),
                text: "a < b & c".into(),
                size: 10.0,
                color: colors::BLACK,
                anchor: TextAnchor::Middle,
                rotation: -90.0,
            },
        );
        let svg = scene.to_svg();
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(svg.contains(r#"transform="rotate(-90 5 5)""#));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn dashed_polyline_is_unfilled() {
        let mut scene = Scene::new(20, 10);
        let stroke = Stroke::solid(colors::BLUE, 1.5).dashed(Some(vec![2.0, 4.0]));
        scene.append(
            Layer::Chart,
            Primitive::Polyline { points: vec![Point::new(0.0, 0.0), Point::new(1.5, 2.0)], stroke },
        );
        let svg = scene.to_svg();
        assert!(svg.contains(r#"points="0,0 1.5,2" fill="none""#));
        assert!(svg.contains(r#"stroke-dasharray="2 4""#));
    }
}
