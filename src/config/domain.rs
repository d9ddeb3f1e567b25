//! Site domain resolution

use serde::{Deserialize, Serialize};

use super::context::{Context, DOMAIN, ENV, SUBDOMAIN_PREFIX};
use crate::error::Result;

/// How the site's custom domain is derived from context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DomainResolution {
    /// The `domain` context value is the site domain
    #[default]
    Direct,
    /// `<subdomain-<env>>.<domain>`
    Environment,
    /// No custom domain
    None,
}

/// Resolve the site domain, if any
pub fn resolve_site_domain(
    strategy: DomainResolution,
    context: &Context,
) -> Result<Option<String>> {
    match strategy {
        DomainResolution::None => Ok(None),
        DomainResolution::Direct => Ok(context.try_get(DOMAIN).map(str::to_string)),
        DomainResolution::Environment => {
            let env = context.require(ENV)?;
            let subdomain = context.require(&format!("{SUBDOMAIN_PREFIX}{env}"))?;
            let domain = context.require(DOMAIN)?;
            Ok(Some(format!("{subdomain}.{domain}")))
        }
    }
}
