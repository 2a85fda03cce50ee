//! SlopSquid icon generator
//!
//! Procedurally draws the squid mascot used by the SlopSquid browser
//! extension and writes it as RGBA PNG icons at the sizes the extension
//! manifest asks for.
//!
//! # Features
//!
//! - **Pure rendering**: `render_icon(size)` is deterministic and touches no
//!   global state
//! - **Display lists**: the layout is a plain `Vec<PaintCommand>` that can be
//!   inspected without rasterizing
//! - **Driver**: `generate_icons` renders every size and saves
//!   `icon{size}.png` files
//!
//! # Example
//!
//! ```no_run
//! use squidicons::{generate_icons, DriverConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let icons = generate_icons(&DriverConfig::default())?;
//! for icon in &icons {
//!     println!("{} -> {}", icon.size, icon.path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod driver;
pub mod rendering;

pub use driver::{generate_icons, generate_icons_with, icon_path, GeneratedIcon};
pub use rendering::{render_icon, squid_commands, Canvas};

/// Icon sizes required by the extension manifest, in output order
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Directory icons are written to, relative to the working directory
pub const DEFAULT_OUT_DIR: &str = "icons";

/// Configuration for the icon driver
///
/// The defaults are the fixed sizes and output directory the extension
/// expects:
///
/// ```
/// let cfg = squidicons::DriverConfig::default();
/// assert_eq!(cfg.sizes, vec![16, 32, 48, 128]);
/// assert!(cfg.out_dir.ends_with("icons"));
/// ```
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Directory the PNG files are written to (created if missing)
    pub out_dir: PathBuf,
    /// Icon sizes to render, in order
    pub sizes: Vec<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

impl DriverConfig {
    /// Reject configurations that cannot produce an image
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::ConfigError("no icon sizes configured".into()));
        }
        if self.sizes.contains(&0) {
            return Err(Error::ConfigError("icon size must be positive".into()));
        }
        Ok(())
    }
}
