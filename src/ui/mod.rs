//! Terminal presentation for `list` and `context`
//!
//! Rendering is split from printing so the formatted lines can be tested
//! without a terminal.

use console::Style;

use crate::config::Context;
use crate::construct::PATH_METADATA_KEY;
use crate::template::Template;

/// One line per resource: logical id, type and construct path
pub fn resource_lines(template: &Template) -> Vec<String> {
    let width = template.resources.keys().map(String::len).max().unwrap_or(0);
    template
        .resources
        .iter()
        .map(|(id, resource)| {
            let path = resource
                .metadata
                .get(PATH_METADATA_KEY)
                .map(String::as_str)
                .unwrap_or_default();
            format!(
                "  {:<width$}  {}  {}",
                Style::new().bold().yellow().apply_to(id),
                Style::new().cyan().apply_to(&resource.resource_type),
                Style::new().dim().apply_to(path),
                width = width
            )
        })
        .collect()
}

pub fn display_resources(template: &Template) {
    println!("Resources ({}):", template.resources.len());
    for line in resource_lines(template) {
        println!("{line}");
    }

    if !template.parameters.is_empty() {
        println!();
        println!("Parameters ({}):", template.parameters.len());
        for (name, parameter) in &template.parameters {
            println!(
                "  {}  {}",
                Style::new().bold().apply_to(name),
                Style::new().dim().apply_to(&parameter.parameter_type)
            );
        }
    }

    if !template.outputs.is_empty() {
        println!();
        println!("Outputs ({}):", template.outputs.len());
        for name in template.outputs.keys() {
            println!("  {}", Style::new().bold().green().apply_to(name));
        }
    }
}

pub fn context_lines(context: &Context) -> Vec<String> {
    context
        .iter()
        .map(|(key, value)| {
            format!(
                "  {} {}",
                Style::new().bold().apply_to(format!("{key}:")),
                value
            )
        })
        .collect()
}

pub fn display_context(context: &Context, site_domain: Option<&str>) {
    if context.is_empty() {
        println!("No context values set.");
    } else {
        println!("Context:");
        for line in context_lines(context) {
            println!("{line}");
        }
    }
    println!();
    match site_domain {
        Some(domain) => println!(
            "{} {}",
            Style::new().bold().apply_to("Site domain:"),
            Style::new().green().apply_to(domain)
        ),
        None => println!(
            "{} {}",
            Style::new().bold().apply_to("Site domain:"),
            Style::new().dim().apply_to("(none)")
        ),
    }
}
