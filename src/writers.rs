use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::IconError;
use crate::icon::create_icon;
use crate::logger::{log_command, log_error, log_line};
use crate::targets::{ICONSET_SIZES, ICO_SIZES, PLAIN_ICONS};

/// Render and save every entry of the plain PNG table into `dir`.
pub fn write_plain_icons(dir: &Path) -> Result<(), IconError> {
    for (name, size) in PLAIN_ICONS {
        create_icon(size).save(dir.join(name))?;
        println!("   ✓ {} ({}x{})", name, size, size);
    }
    Ok(())
}

/// Write the multi-size Windows container to `path`.
pub fn write_ico(path: &Path) -> Result<(), IconError> {
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICO_SIZES {
        let img = create_icon(size);
        let entry = ico::IconImage::from_rgba_data(size, size, img.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&entry)?);
    }
    icon_dir.write(fs::File::create(path)?)?;
    Ok(())
}

/// Render the ten conventional iconset entries into `dir`.
fn stage_iconset(dir: &Path) -> Result<(), IconError> {
    for (size, name) in ICONSET_SIZES {
        create_icon(size).save(dir.join(name))?;
    }
    Ok(())
}

/// Compile the macOS container with `iconutil`, staging the iconset in a
/// scratch directory under `staging_root`. The scratch directory is removed
/// on every exit path by the `TempDir` guard.
fn write_icns_staged_in(staging_root: &Path, path: &Path) -> Result<(), IconError> {
    let staging = tempfile::tempdir_in(staging_root)?;
    let iconset = staging.path().join("icon.iconset");
    fs::create_dir(&iconset)?;
    stage_iconset(&iconset)?;

    let mut cmd = Command::new("iconutil");
    cmd.arg("-c").arg("icns").arg(&iconset).arg("-o").arg(path);
    log_command(&cmd);
    let output = cmd.output()?;
    if !output.status.success() {
        return Err(IconError::IconUtil {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// Write the macOS container to `path`.
pub fn write_icns(path: &Path) -> Result<(), IconError> {
    write_icns_staged_in(&std::env::temp_dir(), path)
}

/// Generate every icon artifact into `dir`. Each container writer degrades
/// independently to a single fallback PNG; directory and plain-writer
/// failures propagate.
pub fn generate_all(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir)?;
    log_line(&format!("generating icons into {}", dir.display()));

    println!("Generating icons for HEIC2JPG Converter...");
    println!("   output directory: {}", dir.display());

    write_plain_icons(dir)?;

    println!("   generating macOS icon set (icon.icns)...");
    match write_icns(&dir.join("icon.icns")) {
        Ok(()) => println!("   ✓ icon.icns"),
        Err(e) => fall_back(dir, "icon.icns", &e, "icon-512.png", 512),
    }

    println!("   generating Windows icon (icon.ico)...");
    match write_ico(&dir.join("icon.ico")) {
        Ok(()) => println!("   ✓ icon.ico"),
        Err(e) => fall_back(dir, "icon.ico", &e, "icon-256.png", 256),
    }

    println!();
    println!("All icons generated (v{}).", env!("CARGO_PKG_VERSION"));
    Ok(())
}

// Bei Containerfehlern auf ein einzelnes PNG zurückfallen
fn fall_back(dir: &Path, artifact: &str, err: &IconError, name: &str, size: u32) {
    println!("   ⚠ could not generate {}: {}", artifact, err);
    log_error(artifact, err);
    match create_icon(size).save(dir.join(name)) {
        Ok(()) => println!("   ✓ {} (fallback, {}x{})", name, size, size),
        Err(e) => log_error(name, &e),
    }
}
