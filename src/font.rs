use image::{Rgba, RgbaImage};

use crate::targets::FG_COLOR;

/// Labels below this pixel size are unreadable; they are skipped before any
/// font lookup, so small renders never touch the filesystem.
const MIN_LABEL_PX: f32 = 8.0;

// Candidate fonts, checked in order. Missing entries are normal off-platform.
const FONT_CANDIDATES: [&str; 5] = [
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/HelveticaNeue.ttc",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/Windows/Fonts/arial.ttf",
];

pub struct LabelFont {
    font: fontdue::Font,
    px: f32,
}

impl LabelFont {
    fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.px).advance_width)
            .sum()
    }
}

/// Resolve a typeface for a label of `px` pixels. `None` means the label is
/// not drawn at all, either because the size is under the floor or because
/// no candidate font could be loaded.
pub fn label_font(px: f32) -> Option<LabelFont> {
    if px < MIN_LABEL_PX {
        return None;
    }
    for path in FONT_CANDIDATES {
        let Ok(data) = std::fs::read(path) else {
            continue;
        };
        if let Ok(font) = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()) {
            return Some(LabelFont { font, px });
        }
    }
    None
}

/// Draw `text` in the foreground color, centered horizontally with its top
/// edge at `top`. Best effort: when no font resolves or the face reports no
/// line metrics the label is silently omitted.
pub fn draw_label(img: &mut RgbaImage, text: &str, top: i32, px: f32) {
    let Some(label) = label_font(px) else {
        return;
    };
    let Some(line) = label.font.horizontal_line_metrics(label.px) else {
        return;
    };

    let mut pen = (img.width() as f32 - label.measure(text)) / 2.0;
    let baseline = top as f32 + line.ascent;

    for ch in text.chars() {
        let (m, coverage) = label.font.rasterize(ch, label.px);
        let gx = pen as i32 + m.xmin;
        let gy = baseline as i32 - m.ymin - m.height as i32;
        blit_coverage(img, gx, gy, m.width, &coverage);
        pen += m.advance_width;
    }
}

/// Alpha-blend a glyph coverage bitmap of width `w` over the canvas.
fn blit_coverage(img: &mut RgbaImage, x0: i32, y0: i32, w: usize, coverage: &[u8]) {
    if w == 0 {
        return;
    }
    for (i, &a) in coverage.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let x = x0 + (i % w) as i32;
        let y = y0 + (i / w) as i32;
        if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
            continue;
        }
        let px = img.get_pixel_mut(x as u32, y as u32);
        *px = blend(*px, a);
    }
}

fn blend(dst: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = alpha as u16;
    let mut out = [0u8; 4];
    for c in 0..3 {
        out[c] = ((FG_COLOR[c] as u16 * a + dst[c] as u16 * (255 - a)) / 255) as u8;
    }
    out[3] = 255;
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_floor_skips_font_lookup() {
        assert!(label_font(0.0).is_none());
        assert!(label_font(7.9).is_none());
    }

    #[test]
    fn test_icons_under_40px_never_get_labels() {
        // label px is 20% of the icon size, so every icon under 40px stays
        // below the floor
        for size in 1..40u32 {
            assert!(label_font(size as f32 * 0.20).is_none());
        }
    }

    #[test]
    fn test_blend_extremes() {
        let bg = Rgba([160, 71, 71, 255]);
        assert_eq!(blend(bg, 255).0, FG_COLOR);
        assert_eq!(blend(bg, 0), bg);
    }

    #[test]
    fn test_blit_clips_to_canvas() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let coverage = vec![255u8; 9];
        blit_coverage(&mut img, -1, -1, 3, &coverage);
        // Only the four in-bounds pixels may change
        assert_eq!(img.get_pixel(0, 0).0, FG_COLOR);
        assert_eq!(img.get_pixel(1, 1).0, FG_COLOR);
        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 255]);
    }
}
