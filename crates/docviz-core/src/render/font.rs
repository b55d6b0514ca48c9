//! Label font loading.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use tracing::debug;

use crate::error::RenderError;

/// Locations probed when no font is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// DejaVu Sans, compiled in so labels render without any system font.
const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Parse a font from raw TrueType/OpenType bytes.
pub fn from_bytes(bytes: Vec<u8>) -> Result<FontVec, RenderError> {
    FontVec::try_from_vec(bytes).map_err(|e| RenderError::Font(e.to_string()))
}

/// Load a font file.
pub fn from_path(path: &Path) -> Result<FontVec, RenderError> {
    let bytes = std::fs::read(path)
        .map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))?;
    from_bytes(bytes)
}

/// First readable font among the common system locations.
pub fn discover() -> Option<FontVec> {
    SYSTEM_FONTS.iter().map(PathBuf::from).find_map(|path| {
        let font = from_path(&path).ok()?;
        debug!("Using font {}", path.display());
        Some(font)
    })
}

/// The compiled-in DejaVu Sans.
pub fn bundled() -> Result<FontVec, RenderError> {
    from_bytes(BUNDLED_FONT.to_vec())
}

/// Pixel box of `text` at `size`.
pub fn measure(font: &FontVec, text: &str, size: f32) -> (u32, u32) {
    imageproc::drawing::text_size(PxScale::from(size), font, text)
}
