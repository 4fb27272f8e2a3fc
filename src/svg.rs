//! Vector scene graph: an ordered, immutable tree of draw fragments plus
//! a serializer to standalone SVG markup.
//!
//! Fragments are plain values. Composition appends them in paint order
//! (later fragments paint over earlier ones); nothing is mutated after
//! rendering, so z-order is explicit and testable.

use std::fmt::Write;

use kurbo::Point;

use crate::geometry::IntPoint;

/// One element of a vector scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        fill_opacity: f64,
    },
    /// Embedded raster, positioned and sized in the same unit space as
    /// the surrounding scene. `href` is typically a base64 data URI.
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        href: String,
    },
}

impl Fragment {
    pub fn circle(center: Point, r: f64, fill: impl Into<String>) -> Self {
        Self::Circle {
            cx: center.x,
            cy: center.y,
            r,
            fill: fill.into(),
        }
    }

    pub fn line(from: Point, to: Point, stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            stroke: stroke.into(),
            stroke_width,
        }
    }
}

/// A finished vector scene: canvas size plus fragments in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorImage {
    size: IntPoint,
    fragments: Vec<Fragment>,
}

impl VectorImage {
    pub fn new(size: IntPoint, fragments: Vec<Fragment>) -> Self {
        Self { size, fragments }
    }

    pub fn size(&self) -> IntPoint {
        self.size
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Serializes the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.x,
            h = self.size.y,
        );
        for fragment in &self.fragments {
            write_fragment(&mut out, fragment);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_fragment(out: &mut String, fragment: &Fragment) {
    match fragment {
        Fragment::Circle { cx, cy, r, fill } => {
            let _ = writeln!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#);
        }
        Fragment::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            let _ = writeln!(
                out,
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
            );
        }
        Fragment::Rect {
            x,
            y,
            width,
            height,
            fill,
            fill_opacity,
        } => {
            let _ = writeln!(
                out,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}" fill-opacity="{fill_opacity}"/>"#,
            );
        }
        Fragment::Image {
            x,
            y,
            width,
            height,
            href,
        } => {
            let _ = writeln!(
                out,
                r#"<image x="{x}" y="{y}" width="{width}" height="{height}" href="{href}"/>"#,
            );
        }
    }
}
