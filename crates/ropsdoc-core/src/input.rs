//! Preparation of uploaded files before they are sent to the OCR backend.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

use crate::error::InputError;
use crate::models::config::InputConfig;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Normalize an uploaded document.
///
/// PDFs are passed through untouched. Images must be in one of the allowed
/// formats; they are downscaled to fit within `max_resolution` on both sides
/// (never upscaled) and re-encoded in their original format.
pub fn prepare_document(
    file_name: &str,
    bytes: &[u8],
    config: &InputConfig,
) -> Result<Vec<u8>, InputError> {
    if is_pdf(file_name, bytes) {
        debug!("Passing PDF {} through unchanged", file_name);
        return Ok(bytes.to_vec());
    }

    let format = image::guess_format(bytes).map_err(InputError::Decode)?;
    if !is_allowed(format, &config.allowed_formats) {
        return Err(InputError::UnsupportedFormat(format_name(format)));
    }

    let image = image::load_from_memory_with_format(bytes, format).map_err(InputError::Decode)?;
    let image = downscale(image, config.max_resolution);

    let mut out = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut out), format)
        .map_err(InputError::Encode)?;

    debug!(
        "Prepared {} as {} ({} -> {} bytes)",
        file_name,
        format_name(format),
        bytes.len(),
        out.len()
    );
    Ok(out)
}

/// Read and prepare a document from disk.
pub fn prepare_file(path: &Path, config: &InputConfig) -> Result<Vec<u8>, InputError> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    prepare_document(name, &bytes, config)
}

fn is_pdf(file_name: &str, bytes: &[u8]) -> bool {
    file_name.to_lowercase().ends_with(".pdf") || bytes.starts_with(PDF_MAGIC)
}

fn is_allowed(format: ImageFormat, allowed: &[String]) -> bool {
    format
        .extensions_str()
        .iter()
        .any(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

fn format_name(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map(|ext| ext.to_uppercase())
        .unwrap_or_else(|| format!("{:?}", format))
}

fn downscale(image: DynamicImage, max_resolution: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width <= max_resolution && height <= max_resolution {
        return image;
    }

    debug!(
        "Downscaling {}x{} to fit {}x{}",
        width, height, max_resolution, max_resolution
    );
    image.thumbnail(max_resolution, max_resolution)
}
