//! Output assembly: template, manifest and staged assets
//!
//! Layout of the output directory:
//!
//! ```text
//! <out>/<stack>.template.json   (or .template.yaml)
//! <out>/manifest.json
//! <out>/asset.<digest>/...
//! ```

pub mod assets;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{Result, fs};
use crate::template::Template;
use assets::Asset;

/// Manifest file name
pub const MANIFEST_FILE: &str = "manifest.json";

/// Manifest schema version
pub const MANIFEST_VERSION: &str = "1";

/// Default output directory
pub const DEFAULT_OUT_DIR: &str = "cdk.out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Manifest {
    pub version: String,
    pub stack: ManifestStack,
    pub assets: Vec<ManifestAsset>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManifestStack {
    pub name: String,
    pub template_file: String,
    pub parameters: Vec<String>,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManifestAsset {
    pub id: String,
    pub hash: String,
    pub path: String,
    pub packaging: String,
    pub files: usize,
}

/// A rendered stack together with the assets it needs
#[derive(Debug, Clone)]
pub struct Assembly {
    pub stack_name: String,
    pub template: Template,
    pub assets: Vec<Asset>,
}

impl Assembly {
    pub fn template_file_name(&self, format: OutputFormat) -> String {
        format!("{}.template.{}", self.stack_name, format.extension())
    }

    /// Render the template in the given format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.template.to_json(),
            OutputFormat::Yaml => self.template.to_yaml(),
        }
    }

    pub fn manifest(&self, format: OutputFormat) -> Manifest {
        Manifest {
            version: MANIFEST_VERSION.to_string(),
            stack: ManifestStack {
                name: self.stack_name.clone(),
                template_file: self.template_file_name(format),
                parameters: self.template.parameters.keys().cloned().collect(),
                outputs: self.template.outputs.keys().cloned().collect(),
            },
            assets: self
                .assets
                .iter()
                .map(|asset| ManifestAsset {
                    id: asset.digest().to_string(),
                    hash: asset.hash.clone(),
                    path: asset.staged_dir_name(),
                    packaging: "zip-directory".to_string(),
                    files: asset.files.len(),
                })
                .collect(),
        }
    }

    /// Write template, manifest and staged assets into `out_dir`
    pub fn write(&self, out_dir: &Path, format: OutputFormat) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(out_dir).map_err(|e| fs::write_failed(out_dir, e))?;

        let mut written = Vec::new();

        let template_path = out_dir.join(self.template_file_name(format));
        write_atomic(&template_path, &self.render(format)?)?;
        written.push(template_path);

        let manifest_path = out_dir.join(MANIFEST_FILE);
        let mut manifest = serde_json::to_string_pretty(&self.manifest(format))?;
        manifest.push('\n');
        write_atomic(&manifest_path, &manifest)?;
        written.push(manifest_path);

        for asset in &self.assets {
            written.push(asset.stage(out_dir)?);
        }

        info!(out = %out_dir.display(), files = written.len(), "wrote assembly");
        Ok(written)
    }
}

/// Write through a temporary file in the same directory, then rename
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| fs::write_failed(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| fs::write_failed(path, e))?;
    file.persist(path).map_err(|e| fs::write_failed(path, e.error))?;
    Ok(())
}
