//! # Vertex Colors
//!
//! RGB colors and the HSB conversion used for hue-cycle coloring of rings.

/// Saturation used for every hue-cycled ring.
pub const RING_SATURATION: f32 = 1.0;
/// Brightness used for every hue-cycled ring.
pub const RING_BRIGHTNESS: f32 = 0.6;

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Ring color for hue `t`, at the ring saturation and brightness.
    pub fn hue(t: f32) -> Self {
        hsb_to_rgb(t, RING_SATURATION, RING_BRIGHTNESS)
    }

    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

/// Converts hue/saturation/brightness to RGB.
///
/// Only the fractional part of `hue` matters, so `hue(0.0) == hue(1.0)`.
/// Each channel is quantized to 8 bits with round-half-up before being scaled
/// back to `[0, 1]`, which makes the output bit-exact across platforms.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Color {
    let quantize = |c: f32| ((c * 255.0 + 0.5) as i32).clamp(0, 255) as f32 / 255.0;

    if saturation == 0.0 {
        let v = quantize(brightness);
        return Color::new(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as i32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Color::new(quantize(r), quantize(g), quantize(b))
}
