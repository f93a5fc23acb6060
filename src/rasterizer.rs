use std::path::{Path, PathBuf};
use std::process::Command;

use spdlog::debug;

use crate::error::{CardError, CardResult};

pub trait Rasterizer {
    fn rasterize(&self, html_path: &Path, image_path: &Path) -> CardResult<()>;

    /// Extension of the produced image file
    fn extension(&self) -> &str;
}

/// Runs an external HTML to image converter, e.g. wkhtmltoimage:
/// `<program> --format <format> <html_path> <image_path>`
pub struct CommandRasterizer {
    pub program: PathBuf,
    pub format: String,
}

impl CommandRasterizer {
    pub fn new(program: PathBuf, format: &str) -> CommandRasterizer {
        CommandRasterizer {
            program,
            format: format.to_string(),
        }
    }
}

impl Rasterizer for CommandRasterizer {
    fn rasterize(&self, html_path: &Path, image_path: &Path) -> CardResult<()> {
        debug!("Running {} --format {} {} {}",
            self.program.display(), self.format, html_path.display(), image_path.display());

        // No shell involved, paths are passed as plain arguments
        let output = Command::new(&self.program)
            .arg("--format")
            .arg(&self.format)
            .arg(html_path)
            .arg(image_path)
            .output()
            .map_err(|e| CardError::Rasterizer(
                format!("could not launch {}: {}", self.program.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CardError::Rasterizer(
                format!("{} failed ({}): {}", self.program.display(), output.status, stderr.trim())));
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        &self.format
    }
}
