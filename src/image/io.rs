//! Disk I/O for the CLI tools: grayscale images in, mask PNGs and JSON out.
//!
//! The library itself never touches the filesystem; these helpers keep the
//! binaries small and their error reporting uniform.
use super::{EdgeMask, ImageU8};
use image::{GrayImage, ImageBuffer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale frame as loaded from disk, tightly packed.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Borrow as the read-only view the detector consumes.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk, converting to 8-bit grayscale if needed.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let gray = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    Ok(GrayImageU8 {
        width: gray.width() as usize,
        height: gray.height() as usize,
        data: gray.into_raw(),
    })
}

/// Save a binary edge mask as a grayscale PNG.
///
/// The mask buffer is already row-major 0/255 bytes, so it is handed to the
/// encoder as-is.
pub fn save_edge_mask(mask: &EdgeMask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let png: GrayImage = ImageBuffer::from_raw(mask.w as u32, mask.h as u32, mask.data.clone())
        .ok_or_else(|| format!("Mask extent {}x{} does not match its buffer", mask.w, mask.h))?;
    png.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Read and parse a JSON file.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|e| format!("Failed to create {}: {e}", parent.display()))
}
