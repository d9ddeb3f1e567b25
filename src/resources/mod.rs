//! Typed resource declarations
//!
//! Each type implements [`CfnResource`](crate::construct::CfnResource) and only
//! knows how to render its own `Properties`. Wiring between resources happens in
//! [`stacks`](crate::stacks).

pub mod autoscaling;
pub mod cloudfront;
pub mod deployment;
pub mod ec2;
pub mod elbv2;
pub mod iam;
pub mod s3;
