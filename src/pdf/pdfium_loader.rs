//! PDFium library loader with platform-specific search paths.
//!
//! This module centralizes the logic for locating and loading the PDFium
//! dynamic library across different deployment scenarios.

use pdfium_render::prelude::*;
use std::path::PathBuf;

/// Overrides the search with an explicit directory holding the library
pub const PDFIUM_DIR_ENV: &str = "CSVCHART_PDFIUM_DIR";

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Load the PDFium library from known search paths or system library.
    ///
    /// Search order:
    /// 1. The directory named by `CSVCHART_PDFIUM_DIR`
    /// 2. `lib/` in the current working directory (development)
    /// 3. `lib/` next to the executable
    /// 4. System library fallback
    pub fn load() -> Result<Pdfium, String> {
        for dir in Self::search_dirs() {
            let path = Pdfium::pdfium_platform_library_name_at_path(&dir);
            if path.exists() {
                match Pdfium::bind_to_library(&path) {
                    Ok(bindings) => return Ok(Pdfium::new(bindings)),
                    Err(e) => tracing::warn!("Failed to bind {}: {:?}", path.display(), e),
                }
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| format!("Failed to load pdfium: {:?}", e))
    }

    fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        if let Some(dir) = std::env::var_os(PDFIUM_DIR_ENV) {
            dirs.push(PathBuf::from(dir));
        }

        // Current working directory (development)
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd.join("lib"));
        }

        // Executable-relative path
        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.join("lib"));
            }
        }

        dirs
    }
}
