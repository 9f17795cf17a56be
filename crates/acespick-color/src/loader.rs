//! Asynchronous LUT resource loading.
//!
//! The pipeline does not care where its LUT text comes from; it asks a
//! [`LutSource`] for the two shaper resources and parses whatever comes
//! back. [`FileLutSource`] serves them from disk; tests substitute
//! in-memory sources.

use std::path::{Path, PathBuf};

use crate::error::ResourceError;

/// The two LUT resources the transform chain needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutResource {
    /// 3D LUT: display sRGB to shaper space (.spi3d).
    Shaper3d,
    /// 1D LUT: shaper space to linear ACES2065-1 (.spi1d).
    ShaperToLinear1d,
}

impl LutResource {
    /// Short name for log messages.
    pub fn name(self) -> &'static str {
        match self {
            LutResource::Shaper3d => "shaper 3D LUT",
            LutResource::ShaperToLinear1d => "shaper-to-linear 1D LUT",
        }
    }
}

/// Source of LUT file contents.
///
/// Implementations fetch the raw text of a resource; parsing stays in
/// the pipeline so every source shares the same format handling.
pub trait LutSource {
    /// Fetches the full text of `resource`.
    fn fetch(
        &self,
        resource: LutResource,
    ) -> impl Future<Output = Result<String, ResourceError>> + Send;
}

/// Loads LUTs from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileLutSource {
    shaper_3d: PathBuf,
    shaper_to_linear_1d: PathBuf,
}

impl FileLutSource {
    /// Creates a source reading the given .spi3d and .spi1d paths.
    pub fn new(shaper_3d: impl Into<PathBuf>, shaper_to_linear_1d: impl Into<PathBuf>) -> Self {
        Self {
            shaper_3d: shaper_3d.into(),
            shaper_to_linear_1d: shaper_to_linear_1d.into(),
        }
    }

    fn path(&self, resource: LutResource) -> &Path {
        match resource {
            LutResource::Shaper3d => &self.shaper_3d,
            LutResource::ShaperToLinear1d => &self.shaper_to_linear_1d,
        }
    }
}

impl LutSource for FileLutSource {
    async fn fetch(&self, resource: LutResource) -> Result<String, ResourceError> {
        let path = self.path(resource);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ResourceError::Read {
                resource: path.display().to_string(),
                message: e.to_string(),
            })
    }
}
