//! Asset sync into a bucket, with optional cache invalidation

use serde_json::{Value, json};

use crate::construct::CfnResource;
use crate::template::intrinsic::reference;

/// Invalidation paths issued after every sync
pub const INVALIDATE_ALL: &str = "/*";

/// Custom resource that copies a staged asset into a bucket
///
/// The provisioning engine uploads the staged asset, then the handler behind
/// `service_token_param` syncs it into the destination bucket and invalidates
/// the distribution.
#[derive(Debug, Clone)]
pub struct BucketDeployment {
    pub service_token_param: String,
    pub source_bucket_param: String,
    pub source_key_param: String,
    pub source_hash: String,
    pub destination_bucket_id: String,
    pub distribution_id: Option<String>,
}

impl BucketDeployment {
    /// Paths invalidated after the sync
    pub fn distribution_paths(&self) -> Vec<String> {
        vec![INVALIDATE_ALL.to_string()]
    }
}

impl CfnResource for BucketDeployment {
    const RESOURCE_TYPE: &'static str = "Custom::BucketDeployment";

    fn properties(&self) -> Value {
        let mut props = json!({
            "ServiceToken": reference(&self.service_token_param),
            "SourceBucketNames": [reference(&self.source_bucket_param)],
            "SourceObjectKeys": [reference(&self.source_key_param)],
            "SourceHash": self.source_hash,
            "DestinationBucketName": reference(&self.destination_bucket_id),
            "Prune": true,
        });
        if let Some(distribution) = &self.distribution_id {
            props["DistributionId"] = reference(distribution);
            props["DistributionPaths"] = json!(self.distribution_paths());
        }
        props
    }
}
