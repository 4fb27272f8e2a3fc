//! Marker library: pure functions from domain records (plus the
//! geometric context needed to resolve their coordinates) to scene-graph
//! fragments.
//!
//! Naming convention: `mark_*` produces discrete vector markers with
//! transparency around them; `embed_*` wraps a pixmap as an image
//! element suitable for a base layer.

use base64::Engine as _;

use crate::buffer::SplitBuffer;
use crate::color::edge_color;
use crate::error::VizResult;
use crate::geometry::IntRect;
use crate::pixmap::Pixmap;
use crate::svg::{Fragment, VectorImage};
use crate::types::{
    EdgeHashEntry, EdgePair, EdgeShape, IndexedEdge, MatchSide, Minutia, MinutiaPair,
    PairingGraph, Template,
};

// Fixed marker styling. Presentation tuning values; role, not magnitude,
// drives the pairing colors.
pub const POINT_RADIUS: f64 = 2.5;
pub const POINT_FILL: &str = "red";
pub const ROOT_RADIUS: f64 = 3.5;
pub const ROOT_FILL: &str = "blue";
pub const TREE_STROKE: &str = "green";
pub const TREE_WIDTH: f64 = 2.0;
pub const SUPPORT_STROKE: &str = "yellow";
pub const SUPPORT_WIDTH: f64 = 1.0;
pub const INDEXED_EDGE_WIDTH: f64 = 0.6;
pub const ROOT_LINE_STROKE: &str = "green";
pub const ROOT_LINE_WIDTH: f64 = 0.4;

/// Pixmap as an embedded image element with bit-exact alpha.
pub fn embed_png(pixmap: &Pixmap) -> VizResult<Fragment> {
    Ok(image_fragment(pixmap, "png", pixmap.png()?))
}

/// Pixmap as an embedded image element, forced opaque by the JPEG
/// encoding. Preferred for photographic base layers.
pub fn embed_jpeg(pixmap: &Pixmap) -> VizResult<Fragment> {
    Ok(image_fragment(pixmap, "jpeg", pixmap.jpeg()?))
}

fn image_fragment(pixmap: &Pixmap, format: &str, bytes: Vec<u8>) -> Fragment {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Fragment::Image {
        x: 0.0,
        y: 0.0,
        width: f64::from(pixmap.width()),
        height: f64::from(pixmap.height()),
        href: format!("data:image/{format};base64,{encoded}"),
    }
}

/// Small filled circle at a detected minutia's resolved center.
pub fn mark_minutia_position(minutia: &Minutia) -> Fragment {
    Fragment::circle(minutia.center(), POINT_RADIUS, POINT_FILL)
}

/// Point markers for every minutia of one subject.
pub fn mark_minutia_positions(template: &Template) -> Vec<Fragment> {
    template.minutiae.iter().map(mark_minutia_position).collect()
}

/// Larger, distinctly colored circle emphasizing the seed correspondence.
pub fn mark_root(minutia: &Minutia) -> Fragment {
    Fragment::circle(minutia.center(), ROOT_RADIUS, ROOT_FILL)
}

/// Edge split into two half-segments meeting at the midpoint, each half
/// colored by its own endpoint's angle, so one edge shows both encoded
/// colors at a glance.
pub fn mark_edge_shape(
    shape: EdgeShape,
    reference: &Minutia,
    neighbor: &Minutia,
    width: f64,
) -> [Fragment; 2] {
    let reference_pos = reference.center();
    let neighbor_pos = neighbor.center();
    let middle = reference_pos.lerp(neighbor_pos, 0.5);
    [
        Fragment::line(
            reference_pos,
            middle,
            edge_color(shape.length, shape.reference_angle),
            width,
        ),
        Fragment::line(
            neighbor_pos,
            middle,
            edge_color(shape.length, shape.neighbor_angle),
            width,
        ),
    ]
}

/// Edge-shape marker with endpoints dereferenced through the subject's
/// minutia list, thinned for dense index visualizations.
pub fn mark_indexed_edge(edge: &IndexedEdge, template: &Template) -> [Fragment; 2] {
    mark_edge_shape(
        edge.shape,
        &template.minutiae[edge.reference],
        &template.minutiae[edge.neighbor],
        INDEXED_EDGE_WIDTH,
    )
}

fn mark_pairing_edge(
    edge: &EdgePair,
    side: MatchSide,
    template: &Template,
    stroke: &str,
    stroke_width: f64,
) -> Fragment {
    let reference = template.minutiae[edge.from.side(side)].center();
    let neighbor = template.minutiae[edge.to.side(side)].center();
    Fragment::line(reference, neighbor, stroke, stroke_width)
}

/// Graph-extending pairing edge: strong color, heavier stroke.
pub fn mark_pairing_tree_edge(edge: &EdgePair, side: MatchSide, template: &Template) -> Fragment {
    mark_pairing_edge(edge, side, template, TREE_STROKE, TREE_WIDTH)
}

/// Corroborating-only pairing edge: lighter stroke beneath the tree.
pub fn mark_pairing_support_edge(
    edge: &EdgePair,
    side: MatchSide,
    template: &Template,
) -> Fragment {
    mark_pairing_edge(edge, side, template, SUPPORT_STROKE, SUPPORT_WIDTH)
}

/// Every indexed edge of the hash, longest first so shorter and denser
/// edges stay visible on top, followed by plain point markers so index
/// structure and underlying points are both visible. Each undirected
/// edge is drawn exactly once: only the direction with the numerically
/// smaller reference index is processed.
pub fn mark_hash(hash: &[EdgeHashEntry], template: &Template) -> Vec<Fragment> {
    let mut edges: Vec<&IndexedEdge> = hash.iter().flat_map(|entry| &entry.edges).collect();
    edges.sort_by(|a, b| b.shape.length.total_cmp(&a.shape.length));
    let mut markers = Vec::new();
    for edge in edges {
        if edge.reference < edge.neighbor {
            markers.extend(mark_indexed_edge(edge, template));
        }
    }
    markers.extend(mark_minutia_positions(template));
    markers
}

/// One side of the pairing graph. Z-order is deliberate: support edges
/// beneath tree edges beneath point markers beneath the single root
/// highlight.
pub fn mark_pairing(pairing: &PairingGraph, side: MatchSide, template: &Template) -> Vec<Fragment> {
    let mut markers = Vec::new();
    for edge in &pairing.support {
        markers.push(mark_pairing_support_edge(edge, side, template));
    }
    for edge in &pairing.tree {
        markers.push(mark_pairing_tree_edge(edge, side, template));
    }
    markers.extend(mark_minutia_positions(template));
    let root = &template.minutiae[pairing.root.side(side)];
    markers.push(mark_root(root));
    markers
}

/// Root correspondences as lines crossing from each probe minutia to its
/// candidate counterpart through a side-by-side split canvas.
pub fn mark_roots(roots: &[MinutiaPair], probe: &Template, candidate: &Template) -> VectorImage {
    let mut split = SplitBuffer::new(probe.size, candidate.size);
    for pair in roots {
        let probe_pos = probe.minutiae[pair.probe].center();
        let candidate_pos = candidate.minutiae[pair.candidate].center();
        split.add(Fragment::Line {
            x1: split.left_x(probe_pos.x),
            y1: split.left_y(probe_pos.y),
            x2: split.right_x(candidate_pos.x),
            y2: split.right_y(candidate_pos.y),
            stroke: ROOT_LINE_STROKE.to_string(),
            stroke_width: ROOT_LINE_WIDTH,
        });
    }
    split.content()
}

/// Block-sized veil whose opacity tracks missing contrast: high-contrast
/// blocks stay clear, low-contrast blocks darken.
pub fn mark_contrast(block: IntRect, contrast: f64) -> Fragment {
    Fragment::Rect {
        x: f64::from(block.x),
        y: f64::from(block.y),
        width: f64::from(block.width),
        height: f64::from(block.height),
        fill: "black".to_string(),
        fill_opacity: (1.0 - contrast).clamp(0.0, 1.0),
    }
}
