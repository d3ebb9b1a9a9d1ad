//! Chart rendering
//!
//! The session store only knows the [`ChartRenderer`](crate::data::ChartRenderer)
//! seam; this module provides the software implementation used by the CLI.

mod raster;

pub use raster::{RasterRenderer, RasterSurface, parse_hex_color};
