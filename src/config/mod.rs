//! Project configuration (unistack.yaml)
//!
//! The file is optional. Every field has a default matching the active
//! UniKarlsruhe deployment, so a bare directory renders the static site.

pub mod context;
pub mod domain;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, config, fs};
use crate::template::RemovalPolicy;

pub use context::Context;
pub use domain::DomainResolution;

/// Project file name
pub const CONFIG_FILE: &str = "unistack.yaml";

/// Which deployment shapes the stack contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentTarget {
    /// Static website bucket (plus distribution and asset sync when configured)
    #[default]
    StaticSite,
    /// Load-balanced autoscaling compute tier
    Compute,
    /// Both shapes in one stack
    All,
}

impl DeploymentTarget {
    pub fn includes_static_site(self) -> bool {
        matches!(self, DeploymentTarget::StaticSite | DeploymentTarget::All)
    }

    pub fn includes_compute(self) -> bool {
        matches!(self, DeploymentTarget::Compute | DeploymentTarget::All)
    }
}

/// Static site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct SiteConfig {
    pub bucket_name: String,
    pub index_document: String,
    pub error_document: String,
    pub removal_policy: RemovalPolicy,
    /// Local directory synced into the bucket, relative to the project directory
    pub assets: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bucket_name: "unikarlsruhe-site-bucket".into(),
            index_document: "index.html".into(),
            error_document: "error.html".into(),
            // Teardown deletes the bucket (and fails if it is not empty)
            removal_policy: RemovalPolicy::Destroy,
            assets: None,
        }
    }
}

/// Compute tier settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ComputeConfig {
    pub instance_type: String,
    pub min_capacity: u32,
    pub desired_capacity: u32,
    pub max_capacity: u32,
    pub cpu_target_percent: u32,
    pub listener_port: u16,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            instance_type: "t3.small".into(),
            min_capacity: 1,
            desired_capacity: 2,
            max_capacity: 3,
            cpu_target_percent: 20,
            listener_port: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ProjectConfig {
    pub stack_name: String,
    pub target: DeploymentTarget,
    pub domain_resolution: DomainResolution,
    pub site: SiteConfig,
    pub compute: ComputeConfig,
    pub context: BTreeMap<String, String>,

    /// Directory the file was loaded from; relative paths resolve against it
    #[serde(skip)]
    pub project_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            stack_name: "UniKarlsruheStack".into(),
            target: DeploymentTarget::default(),
            domain_resolution: DomainResolution::default(),
            site: SiteConfig::default(),
            compute: ComputeConfig::default(),
            context: BTreeMap::new(),
            project_dir: PathBuf::from("."),
        }
    }
}

impl ProjectConfig {
    /// Load `unistack.yaml` from a project directory, falling back to defaults
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no project file, using defaults");
            return Ok(Self {
                project_dir: project_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| fs::read_failed(&path, e))?;
        let mut project = Self::from_yaml(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        project.project_dir = project_dir.to_path_buf();
        project.validate()?;
        debug!(path = %path.display(), "loaded project file");
        Ok(project)
    }

    /// Parse without validation
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes to null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn validate(&self) -> Result<()> {
        let name = &self.stack_name;
        if name.is_empty() {
            return Err(config::invalid("stack-name must not be empty"));
        }
        if !name.starts_with(|c: char| c.is_ascii_alphabetic())
            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(config::invalid(format!(
                "stack-name '{name}' must start with a letter and contain only letters, digits and hyphens"
            )));
        }
        if self.site.bucket_name.is_empty() {
            return Err(config::invalid("site.bucket-name must not be empty"));
        }
        if !(1..=100).contains(&self.compute.cpu_target_percent) {
            return Err(config::invalid(format!(
                "compute.cpu-target-percent must be between 1 and 100, got {}",
                self.compute.cpu_target_percent
            )));
        }
        Ok(())
    }

    /// Base context from the project file
    pub fn context(&self) -> Context {
        Context::new(self.context.clone())
    }

    /// Absolute-or-project-relative path of the asset directory
    pub fn assets_dir(&self) -> Option<PathBuf> {
        self.site.assets.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                self.project_dir.join(p)
            }
        })
    }
}
