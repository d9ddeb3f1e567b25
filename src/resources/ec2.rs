//! EC2 networking resources

use serde_json::{Value, json};

use crate::construct::CfnResource;
use crate::template::intrinsic::{get_att, reference};

#[derive(Debug, Clone)]
pub struct Vpc {
    pub cidr_block: String,
    pub name: String,
}

impl CfnResource for Vpc {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::VPC";

    fn properties(&self) -> Value {
        json!({
            "CidrBlock": self.cidr_block,
            "EnableDnsHostnames": true,
            "EnableDnsSupport": true,
            "InstanceTenancy": "default",
            "Tags": [{ "Key": "Name", "Value": self.name }],
        })
    }
}

#[derive(Debug, Clone)]
pub struct InternetGateway {
    pub name: String,
}

impl CfnResource for InternetGateway {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::InternetGateway";

    fn properties(&self) -> Value {
        json!({ "Tags": [{ "Key": "Name", "Value": self.name }] })
    }
}

#[derive(Debug, Clone)]
pub struct GatewayAttachment {
    pub vpc_id: String,
    pub gateway_id: String,
}

impl CfnResource for GatewayAttachment {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::VPCGatewayAttachment";

    fn properties(&self) -> Value {
        json!({
            "VpcId": reference(&self.vpc_id),
            "InternetGatewayId": reference(&self.gateway_id),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Subnet {
    pub vpc_id: String,
    pub cidr_block: String,
    pub availability_zone: Value,
    pub public: bool,
    pub name: String,
}

impl CfnResource for Subnet {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::Subnet";

    fn properties(&self) -> Value {
        let subnet_type = if self.public { "Public" } else { "Private" };
        json!({
            "VpcId": reference(&self.vpc_id),
            "CidrBlock": self.cidr_block,
            "AvailabilityZone": self.availability_zone,
            "MapPublicIpOnLaunch": self.public,
            "Tags": [
                { "Key": "Name", "Value": self.name },
                { "Key": "unistack:subnet-type", "Value": subnet_type },
            ],
        })
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    pub vpc_id: String,
    pub name: String,
}

impl CfnResource for RouteTable {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::RouteTable";

    fn properties(&self) -> Value {
        json!({
            "VpcId": reference(&self.vpc_id),
            "Tags": [{ "Key": "Name", "Value": self.name }],
        })
    }
}

#[derive(Debug, Clone)]
pub struct RouteTableAssociation {
    pub route_table_id: String,
    pub subnet_id: String,
}

impl CfnResource for RouteTableAssociation {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::SubnetRouteTableAssociation";

    fn properties(&self) -> Value {
        json!({
            "RouteTableId": reference(&self.route_table_id),
            "SubnetId": reference(&self.subnet_id),
        })
    }
}

/// Where a default route sends traffic
#[derive(Debug, Clone)]
pub enum RouteTarget {
    InternetGateway(String),
    NatGateway(String),
}

/// The `0.0.0.0/0` route of a route table
#[derive(Debug, Clone)]
pub struct DefaultRoute {
    pub route_table_id: String,
    pub target: RouteTarget,
}

impl CfnResource for DefaultRoute {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::Route";

    fn properties(&self) -> Value {
        let mut props = json!({
            "RouteTableId": reference(&self.route_table_id),
            "DestinationCidrBlock": "0.0.0.0/0",
        });
        match &self.target {
            RouteTarget::InternetGateway(id) => props["GatewayId"] = reference(id),
            RouteTarget::NatGateway(id) => props["NatGatewayId"] = reference(id),
        }
        props
    }
}

#[derive(Debug, Clone)]
pub struct ElasticIp {
    pub name: String,
}

impl CfnResource for ElasticIp {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::EIP";

    fn properties(&self) -> Value {
        json!({
            "Domain": "vpc",
            "Tags": [{ "Key": "Name", "Value": self.name }],
        })
    }
}

#[derive(Debug, Clone)]
pub struct NatGateway {
    pub subnet_id: String,
    pub eip_id: String,
    pub name: String,
}

impl CfnResource for NatGateway {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::NatGateway";

    fn properties(&self) -> Value {
        json!({
            "SubnetId": reference(&self.subnet_id),
            "AllocationId": get_att(&self.eip_id, "AllocationId"),
            "Tags": [{ "Key": "Name", "Value": self.name }],
        })
    }
}

/// A security group; egress is open unless `allow_all_outbound` is false
#[derive(Debug, Clone)]
pub struct SecurityGroup {
    pub vpc_id: String,
    pub description: String,
    pub allow_all_outbound: bool,
    pub ingress: Vec<IngressRule>,
}

/// An inline ingress rule open to a CIDR range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressRule {
    pub cidr_ip: String,
    pub port: u16,
    pub description: String,
}

impl IngressRule {
    /// TCP `port` from any IPv4 address
    pub fn any_ipv4(port: u16, description: impl Into<String>) -> Self {
        Self {
            cidr_ip: "0.0.0.0/0".into(),
            port,
            description: description.into(),
        }
    }
}

impl CfnResource for SecurityGroup {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::SecurityGroup";

    fn properties(&self) -> Value {
        let egress = if self.allow_all_outbound {
            json!([{
                "CidrIp": "0.0.0.0/0",
                "Description": "Allow all outbound traffic by default",
                "IpProtocol": "-1",
            }])
        } else {
            // Placeholder rule that matches no traffic, so no egress is allowed
            json!([{
                "CidrIp": "255.255.255.255/32",
                "Description": "Disallow all traffic",
                "FromPort": 252,
                "IpProtocol": "icmp",
                "ToPort": 86,
            }])
        };
        let ingress: Vec<Value> = self
            .ingress
            .iter()
            .map(|rule| {
                json!({
                    "CidrIp": rule.cidr_ip,
                    "Description": rule.description,
                    "FromPort": rule.port,
                    "IpProtocol": "tcp",
                    "ToPort": rule.port,
                })
            })
            .collect();

        let mut props = json!({
            "GroupDescription": self.description,
            "VpcId": reference(&self.vpc_id),
            "SecurityGroupEgress": egress,
        });
        if !ingress.is_empty() {
            props["SecurityGroupIngress"] = Value::Array(ingress);
        }
        props
    }
}

/// Standalone ingress rule from one security group into another
#[derive(Debug, Clone)]
pub struct SecurityGroupIngress {
    pub group_id: String,
    pub source_group_id: String,
    pub port: u16,
    pub description: String,
}

impl CfnResource for SecurityGroupIngress {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::SecurityGroupIngress";

    fn properties(&self) -> Value {
        json!({
            "GroupId": get_att(&self.group_id, "GroupId"),
            "SourceSecurityGroupId": get_att(&self.source_group_id, "GroupId"),
            "IpProtocol": "tcp",
            "FromPort": self.port,
            "ToPort": self.port,
            "Description": self.description,
        })
    }
}

/// Standalone egress rule from one security group to another
#[derive(Debug, Clone)]
pub struct SecurityGroupEgress {
    pub group_id: String,
    pub destination_group_id: String,
    pub port: u16,
    pub description: String,
}

impl CfnResource for SecurityGroupEgress {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::SecurityGroupEgress";

    fn properties(&self) -> Value {
        json!({
            "GroupId": get_att(&self.group_id, "GroupId"),
            "DestinationSecurityGroupId": get_att(&self.destination_group_id, "GroupId"),
            "IpProtocol": "tcp",
            "FromPort": self.port,
            "ToPort": self.port,
            "Description": self.description,
        })
    }
}
