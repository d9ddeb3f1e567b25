//! Load-balanced autoscaling compute tier

use tracing::info;

use super::network::Network;
use crate::config::ComputeConfig;
use crate::construct::{Scope, Stack};
use crate::error::Result;
use crate::resources::autoscaling::{
    AutoScalingGroup, CapacityBounds, CpuScalingPolicy, LaunchConfiguration,
};
use crate::resources::ec2::{IngressRule, SecurityGroup, SecurityGroupEgress, SecurityGroupIngress};
use crate::resources::elbv2::{Listener, LoadBalancer, TargetGroup};
use crate::resources::iam::{InstanceProfile, ServiceRole};
use crate::template::intrinsic::{get_att, reference};
use crate::template::{Output, Parameter};

pub const OUTPUT_LOAD_BALANCER_DNS: &str = "LoadBalancerDns";

/// Latest Amazon Linux image, resolved by the engine at deploy time
pub const AMAZON_LINUX_IMAGE_PARAMETER: &str =
    "/aws/service/ami-amazon-linux-latest/amzn-ami-hvm-x86_64-gp2";

const IMAGE_PARAMETER_TYPE: &str = "AWS::SSM::Parameter::Value<AWS::EC2::Image::Id>";

#[derive(Debug, Clone)]
pub struct LoadBalancedBackend {
    pub network: Network,
    pub group_id: String,
    pub load_balancer_id: String,
    pub listener_id: String,
    pub target_group_id: String,
    pub scaling_policy_id: String,
}

impl LoadBalancedBackend {
    pub fn declare(stack: &mut Stack, scope: &Scope, compute: &ComputeConfig) -> Result<Self> {
        let capacity = CapacityBounds::new(
            compute.min_capacity,
            compute.desired_capacity,
            compute.max_capacity,
        )?;
        let port = compute.listener_port;

        let network = Network::declare(stack, &scope.child("VPC"));

        let image_scope = stack.root().child("SsmParameterValueAmazonLinuxImage");
        let image_param = stack.add_parameter(
            &image_scope,
            Parameter {
                parameter_type: IMAGE_PARAMETER_TYPE.into(),
                default: Some(AMAZON_LINUX_IMAGE_PARAMETER.into()),
                description: None,
            },
        );

        let asg_scope = scope.child("ASG");
        let instance_sg = stack.add(
            &asg_scope.child("InstanceSecurityGroup"),
            &SecurityGroup {
                vpc_id: network.vpc_id.clone(),
                description: format!("{}/InstanceSecurityGroup", asg_scope.path()),
                allow_all_outbound: true,
                ingress: Vec::new(),
            },
        );
        let role_id = stack.add(
            &asg_scope.child("InstanceRole"),
            &ServiceRole::for_ec2(asg_scope.path()),
        );
        let profile_id = stack.add(
            &asg_scope.child("InstanceProfile"),
            &InstanceProfile {
                role_id: role_id.clone(),
            },
        );
        let launch_config_id = stack.add(
            &asg_scope.child("LaunchConfig"),
            &LaunchConfiguration {
                image_id: reference(&image_param),
                instance_type: compute.instance_type.clone(),
                instance_profile_id: profile_id,
                security_group_id: instance_sg.clone(),
                user_data: "#!/bin/bash".into(),
            },
        );

        let lb_scope = scope.child("LB");
        let lb_sg = stack.add(
            &lb_scope.child("SecurityGroup"),
            &SecurityGroup {
                vpc_id: network.vpc_id.clone(),
                description: format!(
                    "Automatically created Security Group for ELB {}",
                    lb_scope.path()
                ),
                allow_all_outbound: false,
                ingress: vec![IngressRule::any_ipv4(port, "Open to the world")],
            },
        );
        let load_balancer_id = stack.add(
            &lb_scope,
            &LoadBalancer {
                internet_facing: true,
                subnet_ids: network.public_subnet_ids.clone(),
                security_group_id: lb_sg.clone(),
            },
        );

        let listener_scope = lb_scope.child("Listener");
        let target_group_id = stack.add(
            &listener_scope.child("TargetGroup"),
            &TargetGroup {
                vpc_id: network.vpc_id.clone(),
                port,
            },
        );
        let listener_id = stack.add(
            &listener_scope,
            &Listener {
                load_balancer_id: load_balancer_id.clone(),
                target_group_id: target_group_id.clone(),
                port,
            },
        );

        stack.add(
            &lb_scope.child("SecurityGroup").child("to InstanceSecurityGroup"),
            &SecurityGroupEgress {
                group_id: lb_sg.clone(),
                destination_group_id: instance_sg.clone(),
                port,
                description: "Load balancer to target".into(),
            },
        );
        stack.add(
            &asg_scope.child("InstanceSecurityGroup").child("from LBSecurityGroup"),
            &SecurityGroupIngress {
                group_id: instance_sg,
                source_group_id: lb_sg,
                port,
                description: "Load balancer to target".into(),
            },
        );

        let group_id = stack.add(
            &asg_scope,
            &AutoScalingGroup {
                launch_configuration_id: launch_config_id,
                capacity,
                subnet_ids: network.private_subnet_ids.clone(),
                target_group_ids: vec![target_group_id.clone()],
                name: asg_scope.path(),
            },
        );

        let scaling_policy_id = stack.add(
            &asg_scope.child("ScaleOnCPU"),
            &CpuScalingPolicy {
                group_id: group_id.clone(),
                target_utilization_percent: compute.cpu_target_percent,
            },
        );

        stack.add_output(
            OUTPUT_LOAD_BALANCER_DNS,
            Output::new(get_att(&load_balancer_id, "DNSName"))
                .with_description("Public DNS name of the load balancer"),
        );

        info!(
            group = %group_id,
            min = capacity.min(),
            desired = capacity.desired(),
            max = capacity.max(),
            "declared load-balanced backend"
        );

        Ok(Self {
            network,
            group_id,
            load_balancer_id,
            listener_id,
            target_group_id,
            scaling_policy_id,
        })
    }
}
