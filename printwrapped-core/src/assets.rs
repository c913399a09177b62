//! Card assets.
//!
//! The card uses Open Sans Bold, embedded into the SVG as a data URI.
//! The font file is read and encoded once at startup; the encoded
//! string is immutable afterwards and shared by every render.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};

/// File name of the bundled card font.
pub const FONT_FILE_OPEN_SANS_BOLD: &str = "open-sans-v15-latin-700.woff";

/// Startup-loaded assets used by the card renderer.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    /// Open Sans Bold as a `data:` URI, or `None` when loading failed.
    pub font_open_sans_bold: Option<String>,
}

impl Assets {
    /// Load assets from the configured locations.
    ///
    /// A missing or unreadable font is logged and left unset; the card
    /// then renders with the viewer's font fallback instead of
    /// failing the request.
    pub fn load(config: &Config) -> Self {
        let path = config.font_path();
        match font_data_uri(&path) {
            Ok(uri) => Self {
                font_open_sans_bold: Some(uri),
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to embed card font");
                Self {
                    font_open_sans_bold: None,
                }
            }
        }
    }
}

/// Read a `.woff` font file and encode it as a `data:font/woff` URI.
pub fn font_data_uri(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::Asset(format!("{}: {}", path.display(), e)))?;
    Ok(format!("data:font/woff;base64,{}", STANDARD.encode(bytes)))
}
