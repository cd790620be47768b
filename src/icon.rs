use image::{Rgba, RgbaImage};

use crate::font;
use crate::targets::{BG_COLOR, FG_COLOR};

// Render the HEIC -> JPG logo (corner brackets, down arrow, format labels)
pub fn create_icon(size: u32) -> RgbaImage {
    let p = Proportions::of(size);
    let bars = corner_brackets(size as i32, &p);
    let (tip, left, right) = arrow_points(size as i32, p.arrow);

    let mut img = RgbaImage::from_pixel(size, size, Rgba(BG_COLOR));
    for (x, y, px) in img.enumerate_pixels_mut() {
        let on_bracket = bars.iter().any(|b| b.contains(x as i32, y as i32));
        // Sample the arrow at the pixel center
        let on_arrow = point_in_triangle(x as f32 + 0.5, y as f32 + 0.5, tip, left, right);
        if on_bracket || on_arrow {
            *px = Rgba(FG_COLOR);
        }
    }

    let label_px = size as f32 * 0.20;
    font::draw_label(&mut img, "HEIC", (size as f32 * 0.15) as i32, label_px);
    font::draw_label(&mut img, "JPG", (size as f32 * 0.60) as i32, label_px);

    img
}

/// Logo proportions derived from the canvas side length. The floors keep
/// every stroke at least a pixel wide at tiny sizes.
struct Proportions {
    padding: i32,
    stroke: i32,
    arm: i32,
    arrow: i32,
}

impl Proportions {
    fn of(size: u32) -> Self {
        let s = size as f32;
        Proportions {
            padding: ((s * 0.08) as i32).max(2),
            stroke: ((s * 0.04) as i32).max(1),
            arm: (s * 0.25) as i32,
            arrow: ((s * 0.12) as i32).max(3),
        }
    }
}

/// Axis-aligned bar, half-open on both axes.
#[derive(Clone, Copy)]
struct Bar {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Bar {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// The four L-shaped corner brackets as eight bars, two per corner. Each
/// stroke is centered on the inset line at `padding`, like a stroked
/// polyline would be.
fn corner_brackets(size: i32, p: &Proportions) -> [Bar; 8] {
    let near = p.padding;
    let far = size - p.padding;
    let off = p.stroke / 2;
    // Perpendicular stroke band around an inset line at `c`
    let band = |c: i32| (c - off, c - off + p.stroke);

    let (nb0, nb1) = band(near);
    let (fb0, fb1) = band(far);

    [
        // top-left
        Bar { x0: nb0, y0: nb0, x1: nb1, y1: near + p.arm + 1 },
        Bar { x0: nb0, y0: nb0, x1: near + p.arm + 1, y1: nb1 },
        // top-right
        Bar { x0: fb0, y0: nb0, x1: fb1, y1: near + p.arm + 1 },
        Bar { x0: far - p.arm, y0: nb0, x1: fb1, y1: nb1 },
        // bottom-left
        Bar { x0: nb0, y0: far - p.arm, x1: nb1, y1: fb1 },
        Bar { x0: nb0, y0: fb0, x1: near + p.arm + 1, y1: fb1 },
        // bottom-right
        Bar { x0: fb0, y0: far - p.arm, x1: fb1, y1: fb1 },
        Bar { x0: far - p.arm, y0: fb0, x1: fb1, y1: fb1 },
    ]
}

/// Vertices of the centered, downward-pointing arrow.
fn arrow_points(size: i32, arrow: i32) -> ((f32, f32), (f32, f32), (f32, f32)) {
    let cx = size / 2;
    let cy = size / 2;
    let tip = (cx as f32, (cy + arrow) as f32);
    let left = ((cx - arrow / 2) as f32, (cy - arrow / 3) as f32);
    let right = ((cx + arrow / 2) as f32, (cy - arrow / 3) as f32);
    (tip, left, right)
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_dimensions() {
        for size in [1, 2, 16, 31, 32, 57, 128, 512] {
            let img = create_icon(size);
            assert_eq!((img.width(), img.height()), (size, size));
        }
    }

    #[test]
    fn test_fully_opaque() {
        for size in [16, 64, 256] {
            assert!(create_icon(size).pixels().all(|p| p[3] == 255));
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(create_icon(128).into_raw(), create_icon(128).into_raw());
    }

    #[test]
    fn test_small_sizes_use_palette_only() {
        // Below the label floor no font is consulted, so tiny renders carry
        // exactly the two logo colors no matter what fonts the host has.
        for size in [8, 16, 31, 39] {
            let img = create_icon(size);
            assert!(img.pixels().all(|p| p.0 == BG_COLOR || p.0 == FG_COLOR));
        }
    }

    #[test]
    fn test_bracket_and_arrow_placement() {
        // 128px: padding 10, stroke 5, arm 32, arrow 15
        let img = create_icon(128);
        assert_eq!(img.get_pixel(0, 0).0, BG_COLOR);
        assert_eq!(img.get_pixel(10, 10).0, FG_COLOR);
        assert_eq!(img.get_pixel(118, 10).0, FG_COLOR);
        assert_eq!(img.get_pixel(10, 118).0, FG_COLOR);
        assert_eq!(img.get_pixel(118, 118).0, FG_COLOR);
        // Inside the arrow, just above the tip at (64, 79)
        assert_eq!(img.get_pixel(64, 70).0, FG_COLOR);
    }

    #[test]
    fn test_point_in_triangle_edges() {
        let tip = (5.0, 10.0);
        let left = (0.0, 0.0);
        let right = (10.0, 0.0);
        assert!(point_in_triangle(5.0, 5.0, tip, left, right));
        assert!(point_in_triangle(5.0, 0.0, tip, left, right));
        assert!(!point_in_triangle(0.0, 10.0, tip, left, right));
    }
}
