//! Static website: bucket, optional distribution, optional asset sync

use serde_json::json;
use tracing::info;

use crate::assembly::assets::Asset;
use crate::config::context::{CERTIFICATE_ARN, DOMAIN};
use crate::config::domain::resolve_site_domain;
use crate::config::{Context, DomainResolution, SiteConfig};
use crate::construct::{CfnResource, Scope, Stack};
use crate::error::{Result, config};
use crate::resources::cloudfront::{CustomDomain, Distribution, OriginAccessIdentity};
use crate::resources::deployment::BucketDeployment;
use crate::resources::s3::{Bucket, BucketPolicy, WebsiteConfiguration};
use crate::template::intrinsic::{get_att, reference};
use crate::template::{Output, Parameter};

/// Output names
pub const OUTPUT_BUCKET_NAME: &str = "SiteBucketName";
pub const OUTPUT_DISTRIBUTION_ID: &str = "DistributionId";
pub const OUTPUT_SITE_URL: &str = "SiteUrl";

pub struct StaticWebsiteProps<'a> {
    pub site: &'a SiteConfig,
    pub domain_resolution: DomainResolution,
    pub context: &'a Context,
    pub asset: Option<&'a Asset>,
}

/// Logical ids of what was declared
#[derive(Debug, Clone)]
pub struct StaticWebsite {
    pub bucket_id: String,
    pub distribution_id: Option<String>,
    pub deployment_id: Option<String>,
    pub site_domain: Option<String>,
}

impl StaticWebsite {
    pub fn declare(
        stack: &mut Stack,
        scope: &Scope,
        props: &StaticWebsiteProps<'_>,
    ) -> Result<Self> {
        let site_domain = resolve_site_domain(props.domain_resolution, props.context)?;
        let certificate_arn = props.context.try_get(CERTIFICATE_ARN);

        let bucket = Bucket {
            bucket_name: Some(props.site.bucket_name.clone()),
            website: Some(WebsiteConfiguration {
                index_document: props.site.index_document.clone(),
                error_document: props.site.error_document.clone(),
            }),
            removal_policy: props.site.removal_policy,
        };
        let bucket_id = stack.add(&scope.child("SiteBucket"), &bucket);
        stack.add_output(
            OUTPUT_BUCKET_NAME,
            Output::new(reference(&bucket_id)).with_description("Name of the site bucket"),
        );

        let distribution_id = match certificate_arn {
            Some(arn) => {
                let domain = match (&site_domain, props.domain_resolution) {
                    (Some(domain), _) => domain.clone(),
                    (None, DomainResolution::None) => {
                        return Err(config::invalid(
                            "certificateArn is set but domain-resolution is none; \
                             a distribution with a certificate needs a domain",
                        ));
                    }
                    (None, _) => return Err(config::context_missing(DOMAIN)),
                };
                Some(declare_distribution(stack, scope, &bucket_id, props, arn, domain))
            }
            None => None,
        };

        let deployment_id = props.asset.map(|asset| {
            declare_deployment(stack, scope, &bucket_id, distribution_id.as_deref(), asset)
        });

        // The custom domain only serves the site through the distribution
        let site_url = match (&site_domain, &distribution_id) {
            (Some(domain), Some(_)) => json!(format!("https://{domain}")),
            _ => get_att(&bucket_id, "WebsiteURL"),
        };
        stack.add_output(
            OUTPUT_SITE_URL,
            Output::new(site_url).with_description("URL the site is served from"),
        );

        info!(
            bucket = %bucket_id,
            distribution = distribution_id.is_some(),
            assets = deployment_id.is_some(),
            "declared static website"
        );

        Ok(Self {
            bucket_id,
            distribution_id,
            deployment_id,
            site_domain,
        })
    }
}

fn declare_distribution(
    stack: &mut Stack,
    scope: &Scope,
    bucket_id: &str,
    props: &StaticWebsiteProps<'_>,
    certificate_arn: &str,
    domain: String,
) -> String {
    let oai_id = stack.add(
        &scope.child("OriginAccessIdentity"),
        &OriginAccessIdentity {
            comment: format!("Allows the distribution to read {}", props.site.bucket_name),
        },
    );
    stack.add(
        &scope.child("SiteBucket").child("Policy"),
        &BucketPolicy::for_origin_access_identity(bucket_id, &oai_id),
    );

    let distribution = Distribution {
        bucket_logical_id: bucket_id.to_string(),
        oai_logical_id: oai_id,
        default_root_object: props.site.index_document.clone(),
        custom_domain: Some(CustomDomain {
            certificate_arn: certificate_arn.to_string(),
            aliases: vec![domain],
        }),
    };
    let distribution_id = stack.add(&scope.child("SiteDistribution"), &distribution);
    stack.add_output(
        OUTPUT_DISTRIBUTION_ID,
        Output::new(reference(&distribution_id)).with_description("Id of the site distribution"),
    );
    distribution_id
}

fn string_parameter(description: String) -> Parameter {
    Parameter {
        parameter_type: "String".into(),
        default: None,
        description: Some(description),
    }
}

fn declare_deployment(
    stack: &mut Stack,
    scope: &Scope,
    bucket_id: &str,
    distribution_id: Option<&str>,
    asset: &Asset,
) -> String {
    let asset_scope = stack.root().child("AssetParameters").child(asset.short_digest());
    let source_bucket_param = stack.add_parameter(
        &asset_scope.child("S3Bucket"),
        string_parameter(format!("Staging bucket for asset {}", asset.hash)),
    );
    let source_key_param = stack.add_parameter(
        &asset_scope.child("S3Key"),
        string_parameter(format!("Object key of asset {}", asset.hash)),
    );
    let handler_scope = stack.root().child("DeploymentHandlerArn");
    let handler_param = stack.add_parameter(
        &handler_scope,
        string_parameter("ARN of the function that performs bucket deployments".to_string()),
    );

    let deployment = BucketDeployment {
        service_token_param: handler_param,
        source_bucket_param,
        source_key_param,
        source_hash: asset.hash.clone(),
        destination_bucket_id: bucket_id.to_string(),
        distribution_id: distribution_id.map(str::to_string),
    };
    let mut resource = deployment.to_resource();
    if let Some(id) = distribution_id {
        resource = resource.depends_on(id);
    }
    stack.add_resource(&scope.child("DeployWebsite"), resource)
}
