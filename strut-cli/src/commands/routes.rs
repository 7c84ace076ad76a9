use std::path::Path;

use colored::Colorize;
use strut_core::{build_service, GeneratorSettings, HttpVerb, Service};

use super::{load_service, CmdResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub verb: HttpVerb,
    pub path: String,
    pub base_path: String,
    pub method: String,
    pub label: String,
}

pub fn run(file: &Path, settings: &GeneratorSettings) -> CmdResult {
    let def = load_service(file)?;
    let service = build_service(&def, &settings.build_options())?;
    let routes = collect_routes(&service);

    if routes.is_empty() {
        println!("{}", "No routes found.".dimmed());
        return Ok(());
    }

    println!("{} {}", "Routes of".bold(), service.name.bold());
    println!();
    println!(
        "  {:<8} {:<35} {:<20} {:<20} {}",
        "VERB".dimmed(),
        "PATH".dimmed(),
        "BASE".dimmed(),
        "METHOD".dimmed(),
        "LABEL".dimmed()
    );
    println!("  {}", "-".repeat(95).dimmed());

    for route in &routes {
        let verb = route.verb.as_str().to_uppercase();
        let verb_colored = match route.verb {
            HttpVerb::Get => verb.green(),
            HttpVerb::Post => verb.blue(),
            HttpVerb::Put => verb.yellow(),
            HttpVerb::Delete => verb.red(),
            HttpVerb::Patch => verb.magenta(),
        };
        println!(
            "  {:<8} {:<35} {:<20} {:<20} {}",
            verb_colored, route.path, route.base_path, route.method, route.label,
        );
    }

    println!();
    println!("  {} routes total", routes.len());

    Ok(())
}

/// Every binding of every method, sorted by path then verb.
pub fn collect_routes(service: &Service) -> Vec<Route> {
    let mut routes: Vec<Route> = service
        .methods
        .iter()
        .flat_map(|method| {
            method.bindings.iter().map(|binding| Route {
                verb: binding.verb,
                path: binding.path_template.clone(),
                base_path: binding.base_path.clone(),
                method: method.name.clone(),
                label: binding.label.clone(),
            })
        })
        .collect();
    routes.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.verb.as_str().cmp(b.verb.as_str())));
    routes
}
