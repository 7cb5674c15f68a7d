//! strix: declarative browser startup profile
//!
//! Builds the shipped profile, registers the request filters, and emits
//! the profile as JSON for the host's configuration loader. Sets up
//! logging and the global allocator first.

use anyhow::{Context, Result};
use std::fs;
use strix_intercept::{Decision, InterceptRegistry, Request};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

// Use mimalloc as the global allocator for reduced memory fragmentation
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    info!("strix starting...");

    let profile = strix_profile::default_profile().context("building default profile")?;
    info!(
        "profile ready: {} options, {} overrides, {} bindings",
        profile.settings().len(),
        profile.overrides().len(),
        profile.bindings().len()
    );

    let mut registry = InterceptRegistry::new();
    for filter in strix_profile::default_filters() {
        registry.register(filter);
    }
    info!("request filters registered: {}", registry.len());
    startup_self_check(&registry);

    let json = profile.to_json().context("serializing profile")?;

    // `strix [--out <path>]`: write the rendered profile to a file, or to
    // stdout when no path is given.
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--out") => {
            let path = args.next().context("--out requires a path")?;
            fs::write(&path, &json).with_context(|| format!("writing profile to {path}"))?;
            info!("profile written to {path}");
        }
        Some(other) => anyhow::bail!("unknown argument: {other}"),
        None => println!("{json}"),
    }

    Ok(())
}

/// Run known requests through the registry at startup so the log shows
/// the registered filters actually deciding: one ad-delivery request that
/// must be blocked and two ordinary requests that must pass.
fn startup_self_check(registry: &InterceptRegistry) {
    let samples = [
        Request::new("www.youtube.com", "/get_video_info", "foo=1&adformat=xyz"),
        Request::new("www.youtube.com", "/watch", "v=abc"),
        Request::new("example.com", "/", ""),
    ];

    for request in &samples {
        match registry.evaluate(request) {
            Decision::Block { filter } => info!("self-check: {request} blocked by {filter}"),
            Decision::Allow => info!("self-check: {request} allowed"),
        }
    }
}
