// Renderer module: chart document and console summary.

pub mod chart;
pub mod summary;

pub use chart::render_svg;
pub use summary::format_summary;

use crate::model::RenderError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes the rendered chart document to `path`.
pub fn write_chart(svg: &str, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    fs::write(path, svg).map_err(|source| RenderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Saved chart: {}", path.display());
    Ok(())
}
