//! CloudFormation template model
//!
//! Every map in the template is a `BTreeMap` (and `serde_json::Value` objects are
//! sorted as well), so rendering the same template twice always produces the same
//! bytes.

pub mod intrinsic;
pub mod logical_id;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Template format version emitted in every template
pub const FORMAT_VERSION: &str = "2010-09-09";

/// What the provisioning engine does with a resource when it leaves the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalPolicy {
    /// Delete the physical resource together with the stack
    Destroy,
    /// Keep the physical resource after the stack is deleted
    #[default]
    Retain,
    /// Snapshot before deleting (only for resources that support it)
    Snapshot,
}

impl RemovalPolicy {
    /// The `DeletionPolicy` / `UpdateReplacePolicy` value for this policy
    pub fn cfn_value(self) -> &'static str {
        match self {
            RemovalPolicy::Destroy => "Delete",
            RemovalPolicy::Retain => "Retain",
            RemovalPolicy::Snapshot => "Snapshot",
        }
    }
}

/// A single declared resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub properties: Value,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Resource {
    /// Create a resource of the given type with properties
    pub fn new(resource_type: impl Into<String>, properties: Value) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties,
            depends_on: Vec::new(),
            deletion_policy: None,
            update_replace_policy: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Set both the deletion and update-replace policy
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.deletion_policy = Some(policy.cfn_value().to_string());
        self.update_replace_policy = Some(policy.cfn_value().to_string());
        self
    }

    /// Add an explicit dependency on another logical id
    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        let id = logical_id.into();
        if !self.depends_on.contains(&id) {
            self.depends_on.push(id);
            self.depends_on.sort();
        }
        self
    }
}

/// A template parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(rename = "Type")]
    pub parameter_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A stack output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Output {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A complete deployment template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Parameter>,

    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Output>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    pub fn new() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            description: None,
            parameters: BTreeMap::new(),
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }

    /// All resources of one type, sorted by logical id
    pub fn resources_of_type<'a, 't>(
        &'a self,
        resource_type: &'t str,
    ) -> impl Iterator<Item = (&'a String, &'a Resource)> + use<'a, 't> {
        self.resources
            .iter()
            .filter(move |(_, r)| r.resource_type == resource_type)
    }

    /// The single resource of a type, if exactly one exists
    pub fn single_of_type(&self, resource_type: &str) -> Option<(&String, &Resource)> {
        let mut iter = self.resources_of_type(resource_type);
        let first = iter.next()?;
        if iter.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Render as pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_removal_policy_values() {
        assert_eq!(RemovalPolicy::Destroy.cfn_value(), "Delete");
        assert_eq!(RemovalPolicy::Retain.cfn_value(), "Retain");
        assert_eq!(RemovalPolicy::default(), RemovalPolicy::Retain);
    }

    #[test]
    fn test_resource_serializes_pascal_case() {
        let resource = Resource::new("AWS::S3::Bucket", json!({"BucketName": "b"}))
            .with_removal_policy(RemovalPolicy::Destroy)
            .depends_on("Other");
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["Type"], "AWS::S3::Bucket");
        assert_eq!(value["DeletionPolicy"], "Delete");
        assert_eq!(value["UpdateReplacePolicy"], "Delete");
        assert_eq!(value["DependsOn"], json!(["Other"]));
        assert!(value.get("Metadata").is_none());
    }

    #[test]
    fn test_depends_on_deduplicates() {
        let resource = Resource::new("AWS::EC2::Route", Value::Null)
            .depends_on("B")
            .depends_on("A")
            .depends_on("B");
        assert_eq!(resource.depends_on, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_template_json() {
        let json = Template::new().to_json().unwrap();
        assert!(json.contains("\"AWSTemplateFormatVersion\": \"2010-09-09\""));
        assert!(json.contains("\"Resources\": {}"));
        assert!(!json.contains("Outputs"));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_single_of_type() {
        let mut template = Template::new();
        template
            .resources
            .insert("A".into(), Resource::new("AWS::EC2::VPC", Value::Null));
        template
            .resources
            .insert("B".into(), Resource::new("AWS::EC2::Subnet", Value::Null));
        template
            .resources
            .insert("C".into(), Resource::new("AWS::EC2::Subnet", Value::Null));

        assert_eq!(template.single_of_type("AWS::EC2::VPC").unwrap().0, "A");
        assert!(template.single_of_type("AWS::EC2::Subnet").is_none());
        assert_eq!(template.resources_of_type("AWS::EC2::Subnet").count(), 2);
    }

    #[test]
    fn test_single_of_type_outlives_type_name() {
        let mut template = Template::new();
        template
            .resources
            .insert("Site".into(), Resource::new("AWS::S3::Bucket", Value::Null));

        let found = {
            let resource_type = String::from("AWS::S3::Bucket");
            template.single_of_type(&resource_type)
        };
        assert_eq!(found.map(|(id, _)| id.as_str()), Some("Site"));
    }

    #[test]
    fn test_yaml_rendering() {
        let mut template = Template::new();
        template.outputs.insert(
            "SiteUrl".into(),
            Output::new(json!("https://example.org")).with_description("site"),
        );
        let yaml = template.to_yaml().unwrap();
        assert!(
            yaml.contains("AWSTemplateFormatVersion: 2010-09-09")
                || yaml.contains("'2010-09-09'")
        );
        assert!(yaml.contains("SiteUrl"));
    }
}
