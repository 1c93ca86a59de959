// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sandbox signup and cluster registration accessors.

use crate::constants::singapore::{MANAGED_CLUSTER_SECRET_KEY, MANAGED_KUBECONFIG_FILE};
use crate::error::{E2eError, Result};
use crate::types::{
    registered_cluster::RegisteredClusterSpec, ManagedClusterSet, RegisteredCluster, Space,
    UserSignup,
};
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, ResourceExt,
};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

pub struct SingaporeController {
    client: Client,
    host_operator_namespace: String,
}

impl SingaporeController {
    pub fn new(client: Client, host_operator_namespace: impl Into<String>) -> Self {
        Self {
            client,
            host_operator_namespace: host_operator_namespace.into(),
        }
    }

    /// Create an approved UserSignup, which makes the host operator provision a Space
    #[instrument(skip(self))]
    pub async fn create_appstudio_sandbox_workspace_user_signup(
        &self,
        account: &str,
        namespace: &str,
    ) -> Result<UserSignup> {
        let signups: Api<UserSignup> = Api::namespaced(self.client.clone(), namespace);
        let created = signups
            .create(&PostParams::default(), &UserSignup::approved(account, namespace))
            .await?;

        info!("Created UserSignup {}/{}", namespace, created.name_any());
        Ok(created)
    }

    /// Delete the UserSignup; the toolchain operators clear the Space with it
    #[instrument(skip(self))]
    pub async fn delete_appstudio_sandbox_workspace_user_signup(
        &self,
        account: &str,
        namespace: &str,
    ) -> Result<()> {
        let signups: Api<UserSignup> = Api::namespaced(self.client.clone(), namespace);
        delete_if_present(&signups, account, namespace).await
    }

    /// Check if the Space for `account` exists in the host operator namespace
    #[instrument(skip(self))]
    pub async fn check_if_appstudio_space_exists(&self, account: &str) -> bool {
        let spaces: Api<Space> =
            Api::namespaced(self.client.clone(), &self.host_operator_namespace);

        match spaces.get(account).await {
            Ok(_) => true,
            Err(e) => {
                debug!("Space {} not available yet: {}", account, e);
                false
            }
        }
    }

    /// Check if a ManagedClusterSet named after `account` exists
    #[instrument(skip(self))]
    pub async fn check_if_cluster_set_exists(&self, account: &str) -> bool {
        let sets: Api<ManagedClusterSet> = Api::all(self.client.clone());

        match sets.get(account).await {
            Ok(_) => true,
            Err(e) => {
                debug!("ClusterSet {} not available yet: {}", account, e);
                false
            }
        }
    }

    /// Create a RegisteredCluster inside the user's workspace namespace
    #[instrument(skip(self))]
    pub async fn create_registered_cluster_cr(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<RegisteredCluster> {
        let clusters: Api<RegisteredCluster> = Api::namespaced(self.client.clone(), namespace);

        let mut cluster = RegisteredCluster::new(name, RegisteredClusterSpec::default());
        cluster.metadata.namespace = Some(namespace.to_string());

        let created = clusters.create(&PostParams::default(), &cluster).await?;
        info!("Created RegisteredCluster {}/{}", namespace, created.name_any());
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete_registered_cluster_cr(&self, name: &str, namespace: &str) -> Result<()> {
        let clusters: Api<RegisteredCluster> = Api::namespaced(self.client.clone(), namespace);
        delete_if_present(&clusters, name, namespace).await
    }

    /// Check if the RegisteredCluster reports ManagedClusterJoined=True
    #[instrument(skip(self))]
    pub async fn check_if_registered_cluster_has_joined(&self, name: &str, namespace: &str) -> bool {
        let clusters: Api<RegisteredCluster> = Api::namespaced(self.client.clone(), namespace);

        match clusters.get(name).await {
            Ok(cluster) => {
                let joined = cluster.has_joined();
                debug!("RegisteredCluster {}/{} joined={}", namespace, name, joined);
                joined
            }
            Err(e) => {
                debug!("RegisteredCluster {}/{} not readable: {}", namespace, name, e);
                false
            }
        }
    }

    /// Run the import command against the cluster described by `kubeconfig_path`
    #[instrument(skip(self, import_command))]
    pub async fn execute_import_command(
        &self,
        kubeconfig_path: &Path,
        import_command: &str,
    ) -> Result<()> {
        run_import_command(kubeconfig_path, import_command).await
    }
}

async fn delete_if_present<K>(api: &Api<K>, name: &str, namespace: &str) -> Result<()>
where
    K: kube::Resource + Clone + serde::de::DeserializeOwned + std::fmt::Debug,
    <K as kube::Resource>::DynamicType: Default,
{
    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => {
            info!("Deleted {} {}/{}", K::kind(&Default::default()), namespace, name);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!(
                "{} {}/{} already gone",
                K::kind(&Default::default()),
                namespace,
                name
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Run `import_command` through `sh -c` with KUBECONFIG pointing at `kubeconfig_path`
pub async fn run_import_command(kubeconfig_path: &Path, import_command: &str) -> Result<()> {
    info!("Running import command against {}", kubeconfig_path.display());

    let output = Command::new("sh")
        .arg("-c")
        .arg(import_command)
        .env("KUBECONFIG", kubeconfig_path)
        .output()
        .await?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stdout.trim().is_empty() {
        info!("Import command output: {}", stdout.trim());
    }

    if !output.status.success() {
        warn!("Import command failed: {}", output.status);
        return Err(E2eError::ImportCommandError {
            status: output.status.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(())
}

/// Write the managed cluster kubeconfig held by `secret` into `dir`
pub async fn write_managed_kubeconfig(secret: &Secret, dir: &Path) -> Result<PathBuf> {
    let kubeconfig = secret
        .data
        .as_ref()
        .and_then(|d| d.get(MANAGED_CLUSTER_SECRET_KEY))
        .ok_or_else(|| {
            E2eError::MissingData(format!(
                "Secret {}/{} does not contain '{}' key",
                secret.namespace().unwrap_or_default(),
                secret.name_any(),
                MANAGED_CLUSTER_SECRET_KEY
            ))
        })?;

    let path = dir.join(MANAGED_KUBECONFIG_FILE);
    tokio::fs::write(&path, &kubeconfig.0).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).await?;
    }

    info!("Wrote managed cluster kubeconfig to {}", path.display());
    Ok(path)
}
