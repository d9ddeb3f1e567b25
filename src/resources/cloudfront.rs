//! CloudFront origin access identity and distribution

use serde_json::{Map, Value, json};

use crate::construct::CfnResource;
use crate::template::intrinsic::{get_att, join, reference};

/// Managed "CachingOptimized" cache policy
pub const CACHING_OPTIMIZED_POLICY_ID: &str = "658327ea-f89d-4fab-a63d-7e88639e58f6";

/// Minimum TLS protocol for viewer connections
pub const MINIMUM_PROTOCOL_VERSION: &str = "TLSv1.2_2021";

const ORIGIN_ID: &str = "origin1";

#[derive(Debug, Clone)]
pub struct OriginAccessIdentity {
    pub comment: String,
}

impl CfnResource for OriginAccessIdentity {
    const RESOURCE_TYPE: &'static str = "AWS::CloudFront::CloudFrontOriginAccessIdentity";

    fn properties(&self) -> Value {
        json!({
            "CloudFrontOriginAccessIdentityConfig": { "Comment": self.comment },
        })
    }
}

/// Certificate and aliases served by a distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDomain {
    pub certificate_arn: String,
    pub aliases: Vec<String>,
}

/// A distribution with a single S3 origin and one default cache behavior
#[derive(Debug, Clone)]
pub struct Distribution {
    pub bucket_logical_id: String,
    pub oai_logical_id: String,
    pub default_root_object: String,
    pub custom_domain: Option<CustomDomain>,
}

impl Distribution {
    fn origin(&self) -> Value {
        let identity = join(
            "",
            vec![
                json!("origin-access-identity/cloudfront/"),
                reference(&self.oai_logical_id),
            ],
        );
        json!({
            "Id": ORIGIN_ID,
            "DomainName": get_att(&self.bucket_logical_id, "RegionalDomainName"),
            "S3OriginConfig": { "OriginAccessIdentity": identity },
        })
    }
}

impl CfnResource for Distribution {
    const RESOURCE_TYPE: &'static str = "AWS::CloudFront::Distribution";

    fn properties(&self) -> Value {
        let mut config = Map::new();
        config.insert("Enabled".into(), json!(true));
        config.insert("HttpVersion".into(), json!("http2"));
        config.insert("IPV6Enabled".into(), json!(true));
        config.insert(
            "DefaultRootObject".into(),
            json!(self.default_root_object),
        );
        config.insert("Origins".into(), json!([self.origin()]));
        config.insert(
            "DefaultCacheBehavior".into(),
            json!({
                "TargetOriginId": ORIGIN_ID,
                "ViewerProtocolPolicy": "redirect-to-https",
                "CachePolicyId": CACHING_OPTIMIZED_POLICY_ID,
                "Compress": true,
            }),
        );
        if let Some(domain) = &self.custom_domain {
            config.insert("Aliases".into(), json!(domain.aliases));
            config.insert(
                "ViewerCertificate".into(),
                json!({
                    "AcmCertificateArn": domain.certificate_arn,
                    "MinimumProtocolVersion": MINIMUM_PROTOCOL_VERSION,
                    "SslSupportMethod": "sni-only",
                }),
            );
        }
        json!({ "DistributionConfig": Value::Object(config) })
    }
}
