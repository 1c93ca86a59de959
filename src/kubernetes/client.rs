// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{E2eError, Result};
use kube::{config::KubeConfigOptions, Client};
use std::path::Path;
use tracing::{info, instrument};

/// Create the Kubernetes client used by the framework
///
/// Uses `APPSTUDIO_KUBECONFIG` when configured, otherwise infers the
/// configuration from `KUBECONFIG` or the in-cluster environment.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.appstudio_kubeconfig {
        Some(path) => create_client_from_path(path).await,
        None => {
            info!("No explicit kubeconfig configured, inferring client configuration");
            Client::try_default().await.map_err(|e| {
                E2eError::KubeconfigError(format!("Failed to infer config: {}", e))
            })
        }
    }
}

/// Create a Kubernetes client from a kubeconfig file on disk
pub async fn create_client_from_path(path: &Path) -> Result<Client> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        E2eError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    create_client_from_kubeconfig(&kubeconfig).await
}

/// Create a Kubernetes client from a kubeconfig string
pub async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    use kube::config::Kubeconfig;

    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| E2eError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| E2eError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| E2eError::KubeconfigError(format!("Failed to create client: {}", e)))
}
