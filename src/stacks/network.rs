//! Virtual network with public and private subnets in two zones

use crate::construct::{CfnResource, Scope, Stack};
use crate::resources::ec2::{
    DefaultRoute, ElasticIp, GatewayAttachment, InternetGateway, NatGateway, RouteTable,
    RouteTableAssociation, RouteTarget, Subnet, Vpc,
};
use crate::template::intrinsic::{get_azs, select};

pub const VPC_CIDR: &str = "10.0.0.0/16";

/// `/18` blocks of the VPC: public subnets first, then private ones
const PUBLIC_CIDRS: [&str; 2] = ["10.0.0.0/18", "10.0.64.0/18"];
const PRIVATE_CIDRS: [&str; 2] = ["10.0.128.0/18", "10.0.192.0/18"];

#[derive(Debug, Clone)]
pub struct Network {
    pub vpc_id: String,
    pub public_subnet_ids: Vec<String>,
    pub private_subnet_ids: Vec<String>,
}

impl Network {
    pub fn declare(stack: &mut Stack, scope: &Scope) -> Self {
        let vpc_id = stack.add(
            scope,
            &Vpc {
                cidr_block: VPC_CIDR.into(),
                name: scope.path(),
            },
        );

        let igw_id = stack.add(
            &scope.child("IGW"),
            &InternetGateway { name: scope.path() },
        );
        let attachment_id = stack.add(
            &scope.child("VPCGW"),
            &GatewayAttachment {
                vpc_id: vpc_id.clone(),
                gateway_id: igw_id.clone(),
            },
        );

        let mut public_subnet_ids = Vec::new();
        let mut private_subnet_ids = Vec::new();

        let zones = PUBLIC_CIDRS.into_iter().zip(PRIVATE_CIDRS).enumerate();
        for (zone, (public_cidr, private_cidr)) in zones {
            let public_scope = scope.child(&format!("PublicSubnet{}", zone + 1));
            let public = declare_subnet(stack, &public_scope, &vpc_id, public_cidr, zone, true);
            let public_route = DefaultRoute {
                route_table_id: public.route_table_id.clone(),
                target: RouteTarget::InternetGateway(igw_id.clone()),
            };
            let route = public_route.to_resource().depends_on(attachment_id.clone());
            stack.add_resource(&public_scope.child("DefaultRoute"), route);

            let eip_id = stack.add(
                &public_scope.child("EIP"),
                &ElasticIp {
                    name: public_scope.path(),
                },
            );
            let nat_id = stack.add(
                &public_scope.child("NATGateway"),
                &NatGateway {
                    subnet_id: public.subnet_id.clone(),
                    eip_id,
                    name: public_scope.path(),
                },
            );

            let private_scope = scope.child(&format!("PrivateSubnet{}", zone + 1));
            let private = declare_subnet(stack, &private_scope, &vpc_id, private_cidr, zone, false);
            stack.add(
                &private_scope.child("DefaultRoute"),
                &DefaultRoute {
                    route_table_id: private.route_table_id,
                    target: RouteTarget::NatGateway(nat_id),
                },
            );

            public_subnet_ids.push(public.subnet_id);
            private_subnet_ids.push(private.subnet_id);
        }

        Self {
            vpc_id,
            public_subnet_ids,
            private_subnet_ids,
        }
    }
}

struct DeclaredSubnet {
    subnet_id: String,
    route_table_id: String,
}

fn declare_subnet(
    stack: &mut Stack,
    scope: &Scope,
    vpc_id: &str,
    cidr: &str,
    zone: usize,
    public: bool,
) -> DeclaredSubnet {
    let subnet_id = stack.add(
        &scope.child("Subnet"),
        &Subnet {
            vpc_id: vpc_id.to_string(),
            cidr_block: cidr.to_string(),
            availability_zone: select(zone, get_azs()),
            public,
            name: scope.path(),
        },
    );
    let route_table_id = stack.add(
        &scope.child("RouteTable"),
        &RouteTable {
            vpc_id: vpc_id.to_string(),
            name: scope.path(),
        },
    );
    stack.add(
        &scope.child("RouteTableAssociation"),
        &RouteTableAssociation {
            route_table_id: route_table_id.clone(),
            subnet_id: subnet_id.clone(),
        },
    );
    DeclaredSubnet {
        subnet_id,
        route_table_id,
    }
}
