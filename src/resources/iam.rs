//! IAM role and instance profile for pool instances

use serde_json::{Value, json};

use crate::construct::CfnResource;
use crate::template::intrinsic::reference;

/// Role assumable by a single AWS service principal
#[derive(Debug, Clone)]
pub struct ServiceRole {
    pub service: String,
    pub name: String,
}

impl ServiceRole {
    pub fn for_ec2(name: impl Into<String>) -> Self {
        Self {
            service: "ec2.amazonaws.com".into(),
            name: name.into(),
        }
    }
}

impl CfnResource for ServiceRole {
    const RESOURCE_TYPE: &'static str = "AWS::IAM::Role";

    fn properties(&self) -> Value {
        json!({
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "sts:AssumeRole",
                    "Effect": "Allow",
                    "Principal": { "Service": self.service },
                }],
            },
            "Tags": [{ "Key": "Name", "Value": self.name }],
        })
    }
}

#[derive(Debug, Clone)]
pub struct InstanceProfile {
    pub role_id: String,
}

impl CfnResource for InstanceProfile {
    const RESOURCE_TYPE: &'static str = "AWS::IAM::InstanceProfile";

    fn properties(&self) -> Value {
        json!({ "Roles": [reference(&self.role_id)] })
    }
}
