//! CLI entry point.
//!
//! # Responsibility
//! - Print usage guidance for the library entry points.
//! - Never touch feed files: appends happen through `sitefeed_core` calls
//!   made by site tooling.

fn main() {
    let banner = format!("Site Feed Manager v{}", sitefeed_core::core_version());
    println!("{banner}");
    println!("{}", "=".repeat(banner.len()));
    println!("Use sitefeed_core to add updates and publications:");
    println!();
    println!("  let service = FeedService::new(YamlFeedRepository::updates_in(site_root));");
    println!("  service.add_update(&UpdateRequest::new(");
    println!("      \"New paper accepted!\",");
    println!("      \"Details about the paper...\",");
    println!("  ))?;");
    println!();
    println!("  let service = FeedService::new(YamlFeedRepository::publications_in(site_root));");
    println!("  service.add_publication(&PublicationRequest::new(");
    println!("      \"Paper Title\", \"Author List\", \"Conference Name\", \"2024-01-01\",");
    println!("  ))?;");
}
