//! Palette and output tables for the generated icon assets.

/// Logo background, #a04747.
pub const BG_COLOR: [u8; 4] = [160, 71, 71, 255];
/// Brackets, arrow and labels.
pub const FG_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Relative directory the Tauri bundler reads icons from.
pub const ICONS_DIR: &str = "src-tauri/icons";

/// Plain PNG targets: (filename, pixel size).
pub const PLAIN_ICONS: [(&str, u32); 14] = [
    ("32x32.png", 32),
    ("128x128.png", 128),
    ("128x128@2x.png", 256),
    ("Square107x107Logo.png", 107),
    ("Square142x142Logo.png", 142),
    ("Square150x150Logo.png", 150),
    ("Square284x284Logo.png", 284),
    ("Square30x30Logo.png", 30),
    ("Square310x310Logo.png", 310),
    ("Square44x44Logo.png", 44),
    ("Square71x71Logo.png", 71),
    ("Square89x89Logo.png", 89),
    ("StoreLogo.png", 50),
    ("icon.png", 512),
];

/// Sizes embedded in the Windows icon container.
pub const ICO_SIZES: [u32; 4] = [16, 32, 48, 256];

// Zielgrößen (px) für das Apple-Iconset
pub const ICONSET_SIZES: [(u32, &str); 10] = [
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_plain_table_has_unique_filenames() {
        let names: HashSet<&str> = PLAIN_ICONS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), PLAIN_ICONS.len());
        assert!(PLAIN_ICONS.iter().all(|(n, _)| n.ends_with(".png")));
    }

    #[test]
    fn test_iconset_follows_apple_naming() {
        assert_eq!(ICONSET_SIZES.len(), 10);
        let names: HashSet<&str> = ICONSET_SIZES.iter().map(|(_, n)| *n).collect();
        assert_eq!(names.len(), ICONSET_SIZES.len());
        for (size, name) in ICONSET_SIZES {
            assert!(name.starts_with("icon_"), "unexpected name {}", name);
            if let Some(base) = name.strip_suffix("@2x.png") {
                let edge: u32 = base.trim_start_matches("icon_")
                    .split('x')
                    .next()
                    .unwrap()
                    .parse()
                    .unwrap();
                assert_eq!(size, edge * 2);
            }
        }
    }

    #[test]
    fn test_ico_sizes_are_sorted_and_unique() {
        let mut sorted = ICO_SIZES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, ICO_SIZES.to_vec());
    }
}
