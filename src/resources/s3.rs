//! S3 bucket and bucket policy

use serde_json::{Map, Value, json};

use crate::construct::CfnResource;
use crate::template::RemovalPolicy;
use crate::template::intrinsic::{get_att, join, reference};

/// Website hosting documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteConfiguration {
    pub index_document: String,
    pub error_document: String,
}

impl Default for WebsiteConfiguration {
    fn default() -> Self {
        Self {
            index_document: "index.html".into(),
            error_document: "error.html".into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bucket {
    pub bucket_name: Option<String>,
    pub website: Option<WebsiteConfiguration>,
    pub removal_policy: RemovalPolicy,
}

impl CfnResource for Bucket {
    const RESOURCE_TYPE: &'static str = "AWS::S3::Bucket";

    fn properties(&self) -> Value {
        let mut props = Map::new();
        if let Some(name) = &self.bucket_name {
            props.insert("BucketName".into(), json!(name));
        }
        if let Some(website) = &self.website {
            props.insert(
                "WebsiteConfiguration".into(),
                json!({
                    "IndexDocument": website.index_document,
                    "ErrorDocument": website.error_document,
                }),
            );
        }
        Value::Object(props)
    }

    fn removal_policy(&self) -> Option<RemovalPolicy> {
        Some(self.removal_policy)
    }
}

/// Grants `s3:GetObject` on every object of a bucket to a canonical user
///
/// Used to let an origin access identity read an otherwise private bucket.
#[derive(Debug, Clone)]
pub struct BucketPolicy {
    pub bucket_logical_id: String,
    pub reader_canonical_user: Value,
}

impl BucketPolicy {
    /// Policy letting the given origin access identity read the bucket
    pub fn for_origin_access_identity(bucket_logical_id: &str, oai_logical_id: &str) -> Self {
        Self {
            bucket_logical_id: bucket_logical_id.to_string(),
            reader_canonical_user: get_att(oai_logical_id, "S3CanonicalUserId"),
        }
    }
}

impl CfnResource for BucketPolicy {
    const RESOURCE_TYPE: &'static str = "AWS::S3::BucketPolicy";

    fn properties(&self) -> Value {
        let objects_arn = join(
            "",
            vec![get_att(&self.bucket_logical_id, "Arn"), json!("/*")],
        );
        json!({
            "Bucket": reference(&self.bucket_logical_id),
            "PolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "s3:GetObject",
                    "Effect": "Allow",
                    "Principal": { "CanonicalUser": self.reader_canonical_user },
                    "Resource": objects_arn,
                }],
            },
        })
    }
}
