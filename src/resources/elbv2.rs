//! Application load balancer, listener and target group

use serde_json::{Value, json};

use crate::construct::CfnResource;
use crate::template::intrinsic::{get_att, reference};

#[derive(Debug, Clone)]
pub struct LoadBalancer {
    pub internet_facing: bool,
    pub subnet_ids: Vec<String>,
    pub security_group_id: String,
}

impl CfnResource for LoadBalancer {
    const RESOURCE_TYPE: &'static str = "AWS::ElasticLoadBalancingV2::LoadBalancer";

    fn properties(&self) -> Value {
        let scheme = if self.internet_facing {
            "internet-facing"
        } else {
            "internal"
        };
        json!({
            "Type": "application",
            "Scheme": scheme,
            "Subnets": self.subnet_ids.iter().map(|id| reference(id)).collect::<Vec<_>>(),
            "SecurityGroups": [get_att(&self.security_group_id, "GroupId")],
            "LoadBalancerAttributes": [
                { "Key": "deletion_protection.enabled", "Value": "false" },
            ],
        })
    }
}

/// Instance targets registered through the autoscaling pool
#[derive(Debug, Clone)]
pub struct TargetGroup {
    pub vpc_id: String,
    pub port: u16,
}

impl CfnResource for TargetGroup {
    const RESOURCE_TYPE: &'static str = "AWS::ElasticLoadBalancingV2::TargetGroup";

    fn properties(&self) -> Value {
        json!({
            "Port": self.port,
            "Protocol": "HTTP",
            "TargetType": "instance",
            "VpcId": reference(&self.vpc_id),
        })
    }
}

/// HTTP listener forwarding everything to one target group
#[derive(Debug, Clone)]
pub struct Listener {
    pub load_balancer_id: String,
    pub target_group_id: String,
    pub port: u16,
}

impl CfnResource for Listener {
    const RESOURCE_TYPE: &'static str = "AWS::ElasticLoadBalancingV2::Listener";

    fn properties(&self) -> Value {
        json!({
            "LoadBalancerArn": reference(&self.load_balancer_id),
            "Port": self.port,
            "Protocol": "HTTP",
            "DefaultActions": [{
                "Type": "forward",
                "TargetGroupArn": reference(&self.target_group_id),
            }],
        })
    }
}
