//! Deployment shapes
//!
//! - [`static_site`]: website bucket, optional distribution and asset sync
//! - [`compute`]: network, autoscaling pool and load balancer
//! - [`network`]: the virtual network the compute tier runs in

pub mod compute;
pub mod network;
pub mod static_site;

pub use compute::LoadBalancedBackend;
pub use static_site::{StaticWebsite, StaticWebsiteProps};
