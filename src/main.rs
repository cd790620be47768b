use std::path::Path;

use heic2jpg_icongen::targets::ICONS_DIR;
use heic2jpg_icongen::writers::generate_all;

fn main() {
    generate_all(Path::new(ICONS_DIR))
        .unwrap_or_else(|e| panic!("icon generation failed: {}", e));
}
