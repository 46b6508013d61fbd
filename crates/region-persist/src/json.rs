//! JSON file sink.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use region_domain::Region;

use crate::doc::{RegionDoc, RegionFile, VERSION};
use crate::{PersistResult, RegionSink};

/// Stores regions as a single pretty-printed JSON document.
///
/// Saves go to a sibling temp file that is renamed over the target, so a
/// failed save leaves the previous file in place.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RegionSink for JsonFileSink {
    fn save(&self, regions: &[Arc<Region>]) -> PersistResult<()> {
        let mut docs: Vec<_> = regions.iter().map(|r| RegionDoc::from_region(r)).collect();
        docs.sort_by(|a, b| a.id.to_lowercase().cmp(&b.id.to_lowercase()));

        let file = RegionFile {
            version: VERSION,
            regions: docs,
        };
        let bytes = serde_json::to_vec_pretty(&file)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let temp = self.temp_path();
        {
            let mut out = fs::File::create(&temp)?;
            out.write_all(&bytes)?;
            out.sync_all()?;
        }
        fs::rename(&temp, &self.path)?;

        tracing::info!(
            "Saved {} regions to {}",
            file.regions.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> PersistResult<Vec<Region>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No region file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let file: RegionFile = serde_json::from_slice(&bytes)?;
        if file.version != VERSION {
            tracing::warn!(
                "Region file version {} differs from {}, loading anyway",
                file.version,
                VERSION
            );
        }

        let regions = file
            .regions
            .into_iter()
            .map(RegionDoc::into_region)
            .collect::<PersistResult<Vec<_>>>()?;

        tracing::info!("Loaded {} regions from {}", regions.len(), self.path.display());
        Ok(regions)
    }
}
