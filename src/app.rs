//! Composition entry point
//!
//! Selects the deployment shapes from the resolved [`DeploymentTarget`] and
//! declares them into a single stack.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::assembly::Assembly;
use crate::assembly::assets::Asset;
use crate::config::domain::resolve_site_domain;
use crate::config::{Context, DeploymentTarget, ProjectConfig};
use crate::construct::Stack;
use crate::error::Result;
use crate::stacks::{LoadBalancedBackend, StaticWebsite, StaticWebsiteProps};

/// Scope ids of the two shapes
pub const STATIC_SITE_ID: &str = "StaticWebsiteS3";
pub const COMPUTE_ID: &str = "BackendInfrastructure";

#[derive(Debug, Clone)]
pub struct App {
    project: ProjectConfig,
    context: Context,
    target: DeploymentTarget,
    out_dir: Option<PathBuf>,
}

impl App {
    pub fn new(project: ProjectConfig, context: Context) -> Self {
        let target = project.target;
        Self {
            project,
            context,
            target,
            out_dir: None,
        }
    }

    /// Output directory to leave out of asset hashing
    pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
        self.out_dir = Some(out_dir);
        self
    }

    /// Override the target from the project file
    pub fn with_target(mut self, target: Option<DeploymentTarget>) -> Self {
        if let Some(target) = target {
            self.target = target;
        }
        self
    }

    pub fn target(&self) -> DeploymentTarget {
        self.target
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The custom domain the static site would be served from
    pub fn site_domain(&self) -> Result<Option<String>> {
        resolve_site_domain(self.project.domain_resolution, &self.context)
    }

    /// Declare the selected shapes and return the rendered assembly
    pub fn synth(&self) -> Result<Assembly> {
        let mut stack = Stack::new(&self.project.stack_name);
        stack.set_description(format!(
            "{} ({})",
            self.project.stack_name,
            target_label(self.target)
        ));
        let root = stack.root();
        let mut assets = Vec::new();

        if self.target.includes_static_site() {
            let asset = self
                .project
                .assets_dir()
                .map(|dir| Asset::from_dir(&dir, self.out_dir.as_deref()))
                .transpose()?;
            let props = StaticWebsiteProps {
                site: &self.project.site,
                domain_resolution: self.project.domain_resolution,
                context: &self.context,
                asset: asset.as_ref(),
            };
            StaticWebsite::declare(&mut stack, &root.child(STATIC_SITE_ID), &props)?;
            assets.extend(asset);
        } else {
            debug!("static site not selected");
        }

        if self.target.includes_compute() {
            LoadBalancedBackend::declare(
                &mut stack,
                &root.child(COMPUTE_ID),
                &self.project.compute,
            )?;
        } else {
            debug!("compute tier not selected");
        }

        let template = stack.into_template();
        info!(
            stack = %self.project.stack_name,
            resources = template.resources.len(),
            "synthesized stack"
        );

        Ok(Assembly {
            stack_name: self.project.stack_name.clone(),
            template,
            assets,
        })
    }
}

fn target_label(target: DeploymentTarget) -> &'static str {
    match target {
        DeploymentTarget::StaticSite => "static site",
        DeploymentTarget::Compute => "compute tier",
        DeploymentTarget::All => "static site and compute tier",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(target: DeploymentTarget, pairs: &[&str]) -> App {
        let context = Context::default().with_overrides(pairs).unwrap();
        App::new(ProjectConfig::default(), context).with_target(Some(target))
    }

    #[test]
    fn test_default_target_is_static_site_only() {
        let app = App::new(ProjectConfig::default(), Context::default()).with_target(None);
        assert_eq!(app.target(), DeploymentTarget::StaticSite);

        let assembly = app.synth().unwrap();
        assert_eq!(
            assembly.template.resources_of_type("AWS::S3::Bucket").count(),
            1
        );
        assert_eq!(
            assembly
                .template
                .resources_of_type("AWS::AutoScaling::AutoScalingGroup")
                .count(),
            0
        );
    }

    #[test]
    fn test_compute_target_has_no_bucket() {
        let assembly = app(DeploymentTarget::Compute, &[]).synth().unwrap();
        assert_eq!(
            assembly.template.resources_of_type("AWS::S3::Bucket").count(),
            0
        );
        assert!(
            assembly
                .template
                .single_of_type("AWS::AutoScaling::AutoScalingGroup")
                .is_some()
        );
    }

    #[test]
    fn test_all_target_declares_both() {
        let assembly = app(DeploymentTarget::All, &[]).synth().unwrap();
        assert!(assembly.template.single_of_type("AWS::S3::Bucket").is_some());
        assert!(
            assembly
                .template
                .single_of_type("AWS::ElasticLoadBalancingV2::Listener")
                .is_some()
        );
        assert!(assembly.template.outputs.contains_key("SiteBucketName"));
        assert!(assembly.template.outputs.contains_key("LoadBalancerDns"));
    }

    #[test]
    fn test_synth_is_deterministic() {
        let pairs = [
            "domain=www.example.org",
            "certificateArn=arn:aws:acm:us-east-1:1:certificate/x",
        ];
        let first = app(DeploymentTarget::All, &pairs).synth().unwrap();
        let second = app(DeploymentTarget::All, &pairs).synth().unwrap();
        assert_eq!(
            first.template.to_json().unwrap(),
            second.template.to_json().unwrap()
        );
    }

    #[test]
    fn test_description_names_target() {
        let assembly = app(DeploymentTarget::Compute, &[]).synth().unwrap();
        assert_eq!(
            assembly.template.description.as_deref(),
            Some("UniKarlsruheStack (compute tier)")
        );
    }

    #[test]
    fn test_assets_skip_output_dir_inside_site() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("unistack.yaml"), "site:\n  assets: .\n").unwrap();
        std::fs::write(temp.path().join("index.html"), "<h1>KIT</h1>").unwrap();
        let out = temp.path().join("cdk.out");

        let project = ProjectConfig::load(temp.path()).unwrap();
        let app = App::new(project, Context::default()).with_out_dir(out.clone());

        let first = app.synth().unwrap();
        first.write(&out, crate::assembly::OutputFormat::Json).unwrap();
        let second = app.synth().unwrap();

        assert_eq!(first.assets[0].hash, second.assets[0].hash);
        assert_eq!(
            first.template.to_json().unwrap(),
            second.template.to_json().unwrap()
        );
    }

    #[test]
    fn test_site_domain() {
        let app = app(DeploymentTarget::StaticSite, &["domain=uni.example.org"]);
        assert_eq!(app.site_domain().unwrap().as_deref(), Some("uni.example.org"));
    }
}
