use image::{imageops, Rgba, RgbaImage};

use crate::config::{frac, IconStyle};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: [u8; 3] = [255, 255, 255];

// Gradient rounded square with a thin translucent rim; transparent outside the shape.
pub fn make_background(size: u32, style: &IconStyle) -> RgbaImage {
    let s = size as f32;
    let padding = frac(size, style.padding_ratio) as f32;
    let radius = frac(size, style.corner_radius_ratio) as f32;
    let outline_w = IconStyle::outline_width(size) as f32;
    let outline_a = style.outline[3] as f32 / 255.0;
    let shape = RoundedRect::new(padding, padding, s - padding, s - padding, radius);

    let c = s * 0.5;
    let diag = std::f32::consts::SQRT_2 * s;

    RgbaImage::from_fn(size, size, |x, y| {
        let (px, py) = pixel_center(x, y);
        let d = shape.distance(px, py);
        let fill = coverage(d);
        if fill <= 0.0 {
            return TRANSPARENT;
        }

        // 0 at the top-left corner, 1 at the bottom-right
        let t = (0.5 + ((px - c) + (py - c)) / diag).clamp(0.0, 1.0);
        // inward stroke band along the edge
        let rim = (fill - coverage(d + outline_w)) * outline_a;

        let channel = |i: usize| {
            let base = lerp(style.gradient_start[i] as f32, style.gradient_end[i] as f32, t);
            lerp(base, style.outline[i] as f32, rim).round() as u8
        };
        Rgba([channel(0), channel(1), channel(2), unit_to_u8(fill)])
    })
}

/// White question-mark glyph: a ring for the loop plus a rotated capsule for the tail.
pub fn make_glyph(size: u32, style: &IconStyle) -> RgbaImage {
    let center = (size / 2) as f32 + 0.5;
    let outer_r = frac(size, style.ring_outer_ratio);
    let inner_r = frac(size, style.ring_inner_ratio) as f32;
    let tail = Capsule::tail(size, outer_r, center, style);
    let outer_r = outer_r as f32;

    RgbaImage::from_fn(size, size, |x, y| {
        let (px, py) = pixel_center(x, y);
        let dist = (px - center).hypot(py - center);
        let ring = coverage(dist - outer_r) * (1.0 - coverage(dist - inner_r));
        let tail = coverage(tail.distance(px, py));
        let a = ring + tail * (1.0 - ring);
        if a <= 0.0 {
            TRANSPARENT
        } else {
            Rgba([WHITE[0], WHITE[1], WHITE[2], unit_to_u8(a)])
        }
    })
}

/// Blurred silhouette of `glyph` in the shadow color.
pub fn make_shadow(glyph: &RgbaImage, style: &IconStyle) -> RgbaImage {
    let [r, g, b] = style.shadow_rgb;
    let silhouette = RgbaImage::from_fn(glyph.width(), glyph.height(), |x, y| {
        Rgba([r, g, b, glyph.get_pixel(x, y)[3]])
    });
    imageops::blur(&silhouette, IconStyle::shadow_sigma(glyph.width()))
}

/// Background, then the shadow nudged down, then the glyph on top.
pub fn composite_icon(size: u32, style: &IconStyle) -> RgbaImage {
    let background = make_background(size, style);
    let glyph = make_glyph(size, style);
    let shadow = make_shadow(&glyph, style);

    let mut icon = RgbaImage::from_pixel(size, size, TRANSPARENT);
    imageops::overlay(&mut icon, &background, 0, 0);
    imageops::overlay(&mut icon, &shadow, 0, IconStyle::shadow_offset(size) as i64);
    imageops::overlay(&mut icon, &glyph, 0, 0);
    icon
}

struct RoundedRect {
    cx: f32,
    cy: f32,
    half_w: f32,
    half_h: f32,
    radius: f32,
}

impl RoundedRect {
    fn new(left: f32, top: f32, right: f32, bottom: f32, radius: f32) -> Self {
        let half_w = (right - left) * 0.5;
        let half_h = (bottom - top) * 0.5;
        Self {
            cx: (left + right) * 0.5,
            cy: (top + bottom) * 0.5,
            half_w,
            half_h,
            radius: radius.min(half_w).min(half_h).max(0.0),
        }
    }

    /// Signed distance to the edge, negative inside.
    fn distance(&self, x: f32, y: f32) -> f32 {
        let qx = (x - self.cx).abs() - (self.half_w - self.radius);
        let qy = (y - self.cy).abs() - (self.half_h - self.radius);
        qx.max(0.0).hypot(qy.max(0.0)) + qx.max(qy).min(0.0) - self.radius
    }
}

/// Segment `a`-`b` thickened by `radius`.
struct Capsule {
    a: (f32, f32),
    b: (f32, f32),
    radius: f32,
}

impl Capsule {
    fn tail(size: u32, outer_r: u32, center: f32, style: &IconStyle) -> Self {
        let length = frac(size, style.tail_length_ratio) as f32;
        let thickness = frac(size, style.tail_thickness_ratio) as f32;
        let cx = center + frac(outer_r, style.tail_offset.0) as f32;
        let cy = center + frac(outer_r, style.tail_offset.1) as f32;

        let (sin, cos) = style.tail_angle_deg.to_radians().sin_cos();
        let half = ((length - thickness) * 0.5).max(0.0);
        Self {
            a: (cx - cos * half, cy - sin * half),
            b: (cx + cos * half, cy + sin * half),
            radius: thickness * 0.5,
        }
    }

    fn distance(&self, x: f32, y: f32) -> f32 {
        let (pax, pay) = (x - self.a.0, y - self.a.1);
        let (bax, bay) = (self.b.0 - self.a.0, self.b.1 - self.a.1);
        let len2 = bax * bax + bay * bay;
        let h = if len2 > 0.0 {
            ((pax * bax + pay * bay) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (pax - bax * h).hypot(pay - bay * h) - self.radius
    }
}

#[inline]
fn pixel_center(x: u32, y: u32) -> (f32, f32) {
    (x as f32 + 0.5, y as f32 + 0.5)
}

/// Pixel coverage for a signed edge distance, one pixel of anti-aliasing.
#[inline]
fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 { a + (b - a) * t }

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
