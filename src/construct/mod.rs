//! Construct tree: scopes, stacks and the resource trait
//!
//! A [`Scope`] is a path in the construct tree. Resources are added to a [`Stack`]
//! under a scope, which fixes their logical id and records the path as metadata.

use serde_json::Value;
use tracing::debug;

use crate::template::{Output, Parameter, RemovalPolicy, Resource, Template, logical_id};

/// Metadata key holding the construct path of a resource
pub const PATH_METADATA_KEY: &str = "unistack:path";

/// A typed resource declaration
pub trait CfnResource {
    /// CloudFormation resource type, e.g. `AWS::S3::Bucket`
    const RESOURCE_TYPE: &'static str;

    /// The `Properties` block
    fn properties(&self) -> Value;

    /// Removal policy, `None` leaves the engine default in place
    fn removal_policy(&self) -> Option<RemovalPolicy> {
        None
    }

    fn to_resource(&self) -> Resource {
        let resource = Resource::new(Self::RESOURCE_TYPE, self.properties());
        match self.removal_policy() {
            Some(policy) => resource.with_removal_policy(policy),
            None => resource,
        }
    }
}

/// A path in the construct tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    path: Vec<String>,
}

impl Scope {
    fn root(stack_name: &str) -> Self {
        Self {
            path: vec![stack_name.to_string()],
        }
    }

    /// A child scope with the given id
    pub fn child(&self, id: &str) -> Self {
        let mut path = self.path.clone();
        path.push(id.to_string());
        Self { path }
    }

    /// Slash separated path, e.g. `UniKarlsruheStack/StaticWebsite/SiteBucket`
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// Logical id this scope maps to
    pub fn logical_id(&self) -> String {
        logical_id::allocate(&self.path)
    }
}

/// A stack being declared
#[derive(Debug, Clone)]
pub struct Stack {
    name: String,
    template: Template,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: Template::new(),
        }
    }

    /// The scope all constructs of this stack live under
    pub fn root(&self) -> Scope {
        Scope::root(&self.name)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.template.description = Some(description.into());
    }

    /// Add a typed resource, returning its logical id
    pub fn add<R: CfnResource>(&mut self, scope: &Scope, resource: &R) -> String {
        self.add_resource(scope, resource.to_resource())
    }

    /// Add a prepared resource, returning its logical id
    pub fn add_resource(&mut self, scope: &Scope, mut resource: Resource) -> String {
        let id = scope.logical_id();
        resource
            .metadata
            .insert(PATH_METADATA_KEY.to_string(), scope.path());
        debug!(logical_id = %id, resource_type = %resource.resource_type, "declared resource");
        self.template.resources.insert(id.clone(), resource);
        id
    }

    /// Add a template parameter, returning its logical id
    pub fn add_parameter(&mut self, scope: &Scope, parameter: Parameter) -> String {
        let id = scope.logical_id();
        self.template.parameters.insert(id.clone(), parameter);
        id
    }

    pub fn add_output(&mut self, name: &str, output: Output) {
        self.template.outputs.insert(name.to_string(), output);
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn into_template(self) -> Template {
        self.template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Dummy;

    impl CfnResource for Dummy {
        const RESOURCE_TYPE: &'static str = "Test::Dummy";

        fn properties(&self) -> Value {
            json!({"A": 1})
        }

        fn removal_policy(&self) -> Option<RemovalPolicy> {
            Some(RemovalPolicy::Destroy)
        }
    }

    #[test]
    fn test_scope_path() {
        let stack = Stack::new("Root");
        let scope = stack.root().child("Site").child("Bucket");
        assert_eq!(scope.path(), "Root/Site/Bucket");
        assert!(scope.logical_id().starts_with("SiteBucket"));
    }

    #[test]
    fn test_add_records_path_metadata() {
        let mut stack = Stack::new("Root");
        let scope = stack.root().child("Thing");
        let id = stack.add(&scope, &Dummy);

        let resource = &stack.template().resources[&id];
        assert_eq!(resource.resource_type, "Test::Dummy");
        assert_eq!(resource.metadata[PATH_METADATA_KEY], "Root/Thing");
        assert_eq!(resource.deletion_policy.as_deref(), Some("Delete"));
    }

    #[test]
    fn test_outputs_and_parameters() {
        let mut stack = Stack::new("Root");
        let scope = stack.root().child("Param");
        let id = stack.add_parameter(
            &scope,
            Parameter {
                parameter_type: "String".into(),
                default: Some("x".into()),
                description: None,
            },
        );
        stack.add_output("Out", Output::new(json!("v")));

        let template = stack.into_template();
        assert!(template.parameters.contains_key(&id));
        assert_eq!(template.outputs["Out"].value, json!("v"));
    }
}
