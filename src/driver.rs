//! Icon driver: render every configured size and write it to disk

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::rendering::render_icon;
use crate::{DriverConfig, Error, Result};

/// An icon that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    /// Hex SHA-256 of the rendered pixels
    pub fingerprint: String,
}

impl GeneratedIcon {
    pub fn file_name(&self) -> String {
        icon_file_name(self.size)
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Destination of the icon for `size` inside `dir`
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(icon_file_name(size))
}

/// Render and save every size in `config`, in order.
///
/// The first filesystem failure aborts the run. Icons written before the
/// failure are left in place.
pub fn generate_icons(config: &DriverConfig) -> Result<Vec<GeneratedIcon>> {
    generate_icons_with(config, |_| {})
}

/// Like `generate_icons`, calling `on_icon` as soon as each file is written
pub fn generate_icons_with<F>(config: &DriverConfig, mut on_icon: F) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(&GeneratedIcon),
{
    config.validate()?;

    fs::create_dir_all(&config.out_dir).map_err(|source| Error::CreateDir {
        path: config.out_dir.clone(),
        source,
    })?;
    debug!("Output directory ready: {}", config.out_dir.display());

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = write_icon(&config.out_dir, size)?;
        info!("Wrote {}", icon.path.display());
        on_icon(&icon);
        written.push(icon);
    }

    info!(
        "All {} icons written to {}",
        written.len(),
        config.out_dir.display()
    );
    Ok(written)
}

fn write_icon(dir: &Path, size: u32) -> Result<GeneratedIcon> {
    let canvas = render_icon(size);
    let fingerprint = canvas.fingerprint();
    debug!("icon{} fingerprint {}", size, fingerprint);

    let path = icon_path(dir, size);
    canvas
        .save_png(&path)
        .map_err(|source| Error::WriteIcon {
            path: path.clone(),
            source,
        })?;

    Ok(GeneratedIcon {
        size,
        path,
        fingerprint,
    })
}
