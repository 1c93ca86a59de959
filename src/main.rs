// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use appstudio_e2e::config::Config;
use appstudio_e2e::framework::Framework;
use appstudio_e2e::scenarios;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting AppStudio e2e suites");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: work_dir={}, label_filter={:?}",
        config.work_dir.display(),
        config.label_filter
    );

    let framework = Framework::new(config.clone()).await?;

    match framework.kcp.list_kcp_workspaces().await {
        Ok(workspaces) => info!("{} KCP workspaces visible", workspaces.items.len()),
        Err(e) => warn!("Unable to list KCP workspaces: {}", e),
    }

    let mut failed = Vec::new();
    for suite in scenarios::all() {
        if !config.selects(suite.labels()) {
            info!("Skipping suite '{}' (labels {:?})", suite.name(), suite.labels());
            continue;
        }

        let report = suite.run(&framework).await;
        info!("{}", report);
        if !report.success() {
            failed.push(report.suite);
        }
    }

    if !failed.is_empty() {
        bail!("{} suite(s) failed: {}", failed.len(), failed.join(", "));
    }

    info!("All suites passed");
    Ok(())
}
