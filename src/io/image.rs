//! Sheet export as JPEG or PNG chosen by file extension

use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::io::error::{ChartError, Result, invalid_parameter};
use crate::sheet::compose::Sheet;

/// True when the path names a JPEG file
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Save the sheet, creating parent directories as needed
///
/// `.jpg` and `.jpeg` paths are written as JPEG at `quality` (1 to 100); any other
/// extension is left to the `image` crate's format detection.
///
/// # Errors
///
/// Returns an error if:
/// - `quality` is outside 1 to 100
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - The image cannot be encoded in the requested format
pub fn save_sheet(sheet: &Sheet, path: &Path, quality: u8) -> Result<()> {
    if !(1..=100).contains(&quality) {
        return Err(invalid_parameter(
            "quality",
            &quality,
            &"JPEG quality must be between 1 and 100",
        ));
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let img = sheet.to_image();
    let export_error = |e| ChartError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    };

    if is_jpeg(path) {
        let file = File::create(path).map_err(|e| ChartError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
        img.write_with_encoder(encoder).map_err(export_error)?;
    } else {
        img.save(path).map_err(export_error)?;
    }

    log::info!("Saved sheet to {}", path.display());
    Ok(())
}
