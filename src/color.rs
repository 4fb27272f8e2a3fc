//! Color encoders mapping domain quantities to visual attributes.

use crate::geometry::PI2;

/// Edge length at which the color stretch saturates. Presentation tuning
/// value, not a correctness invariant.
pub const EDGE_REFERENCE_LENGTH: f64 = 300.0;

/// Color of one half of an edge, encoding both direction and magnitude:
/// the endpoint-relative angle maps to hue over a full turn and the
/// edge length maps to brightness, brighter for short edges and darker
/// for long ones, saturating at [`EDGE_REFERENCE_LENGTH`]. Saturation is
/// fixed at full.
pub fn edge_color(length: f64, angle: f64) -> String {
    let stretch = (length.ln_1p() / EDGE_REFERENCE_LENGTH.ln_1p()).min(1.0);
    let rgb = hsb_to_rgb(angle / PI2, 1.0, 1.0 - 0.5 * stretch);
    format!("#{rgb:06x}")
}

/// HSB to packed 0xRRGGBB. Hue is a fraction of a full turn and wraps,
/// saturation and brightness are clamped 0..=1.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> u32 {
    let saturation = saturation.clamp(0.0, 1.0);
    let brightness = brightness.clamp(0.0, 1.0);
    let channel = |v: f64| (v * 255.0 + 0.5) as u32;
    if saturation == 0.0 {
        let v = channel(brightness);
        return (v << 16) | (v << 8) | v;
    }
    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));
    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    (channel(r) << 16) | (channel(g) << 8) | channel(b)
}
