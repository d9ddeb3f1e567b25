//! Autoscaling pool, launch configuration and scaling policy

use serde_json::{Value, json};

use crate::construct::CfnResource;
use crate::error::{Result, UnistackError};
use crate::template::intrinsic::{get_att, reference};

/// Pool size bounds, always `min <= desired <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityBounds {
    min: u32,
    desired: u32,
    max: u32,
}

impl CapacityBounds {
    pub fn new(min: u32, desired: u32, max: u32) -> Result<Self> {
        if min > desired || desired > max {
            return Err(UnistackError::InvalidCapacity { min, desired, max });
        }
        Ok(Self { min, desired, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn desired(&self) -> u32 {
        self.desired
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

#[derive(Debug, Clone)]
pub struct LaunchConfiguration {
    pub image_id: Value,
    pub instance_type: String,
    pub instance_profile_id: String,
    pub security_group_id: String,
    pub user_data: String,
}

impl CfnResource for LaunchConfiguration {
    const RESOURCE_TYPE: &'static str = "AWS::AutoScaling::LaunchConfiguration";

    fn properties(&self) -> Value {
        json!({
            "ImageId": self.image_id,
            "InstanceType": self.instance_type,
            "IamInstanceProfile": reference(&self.instance_profile_id),
            "SecurityGroups": [get_att(&self.security_group_id, "GroupId")],
            "UserData": { "Fn::Base64": self.user_data },
        })
    }
}

#[derive(Debug, Clone)]
pub struct AutoScalingGroup {
    pub launch_configuration_id: String,
    pub capacity: CapacityBounds,
    pub subnet_ids: Vec<String>,
    pub target_group_ids: Vec<String>,
    pub name: String,
}

impl CfnResource for AutoScalingGroup {
    const RESOURCE_TYPE: &'static str = "AWS::AutoScaling::AutoScalingGroup";

    fn properties(&self) -> Value {
        // The engine expects capacity values as strings
        json!({
            "LaunchConfigurationName": reference(&self.launch_configuration_id),
            "MinSize": self.capacity.min().to_string(),
            "DesiredCapacity": self.capacity.desired().to_string(),
            "MaxSize": self.capacity.max().to_string(),
            "VPCZoneIdentifier": self.subnet_ids.iter().map(|id| reference(id)).collect::<Vec<_>>(),
            "TargetGroupARNs": self
                .target_group_ids
                .iter()
                .map(|id| reference(id))
                .collect::<Vec<_>>(),
            "Tags": [{ "Key": "Name", "PropagateAtLaunch": true, "Value": self.name }],
        })
    }
}

/// Target tracking on average CPU utilization of the pool
#[derive(Debug, Clone)]
pub struct CpuScalingPolicy {
    pub group_id: String,
    pub target_utilization_percent: u32,
}

impl CfnResource for CpuScalingPolicy {
    const RESOURCE_TYPE: &'static str = "AWS::AutoScaling::ScalingPolicy";

    fn properties(&self) -> Value {
        json!({
            "AutoScalingGroupName": reference(&self.group_id),
            "PolicyType": "TargetTrackingScaling",
            "TargetTrackingConfiguration": {
                "PredefinedMetricSpecification": {
                    "PredefinedMetricType": "ASGAverageCPUUtilization",
                },
                "TargetValue": self.target_utilization_percent,
            },
        })
    }
}
