// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Register a cluster into a sandboxed AppStudio workspace and wait for it to join.

use crate::constants::{singapore::*, timeouts, SINGAPORE_LABEL};
use crate::controllers::singapore::write_managed_kubeconfig;
use crate::error::{E2eError, Result};
use crate::framework::Framework;
use crate::poll::{eventually, eventually_ok};
use crate::suite::Suite;
use crate::types::registered_cluster::import_configmap_name;
use futures::FutureExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollWindow {
    pub timeout: Duration,
    pub interval: Duration,
}

impl PollWindow {
    const fn from_secs((timeout, interval): (u64, u64)) -> Self {
        Self {
            timeout: Duration::from_secs(timeout),
            interval: Duration::from_secs(interval),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub space_created: PollWindow,
    pub cluster_set_created: PollWindow,
    pub import_configmap: PollWindow,
    pub cluster_joined: PollWindow,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            space_created: PollWindow::from_secs(timeouts::SPACE_CREATED),
            cluster_set_created: PollWindow::from_secs(timeouts::CLUSTER_SET_CREATED),
            import_configmap: PollWindow::from_secs(timeouts::IMPORT_CONFIGMAP),
            cluster_joined: PollWindow::from_secs(timeouts::CLUSTER_JOINED),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClusterRegistration {
    /// Sandbox account; also names the Space, ClusterSet and workspace namespace
    pub account: String,
    /// Namespace the UserSignup lives in
    pub account_namespace: String,
    pub cluster: String,
    /// Namespace the RegisteredCluster is removed from on teardown
    pub cluster_namespace: String,
    pub timings: Timings,
}

impl Default for ClusterRegistration {
    fn default() -> Self {
        Self {
            account: USER_ACCOUNT_NAME.to_string(),
            account_namespace: USER_ACCOUNT_NAMESPACE.to_string(),
            cluster: IMPORTED_USER_CLUSTER_NAME.to_string(),
            cluster_namespace: IMPORTED_USER_CLUSTER_NAMESPACE.to_string(),
            timings: Timings::default(),
        }
    }
}

impl ClusterRegistration {
    pub fn into_suite(self) -> Suite<Framework> {
        let s = Arc::new(self);
        let (s1, s2, s3, s4, s5, s6, s7, s8) = (
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s,
        );

        Suite::new("Cluster Registration tests")
            .label(SINGAPORE_LABEL)
            .it("Create Appstudio workspace", move |fw: &Framework| {
                let s = s1.clone();
                async move { s.create_workspace(fw).await }.boxed()
            })
            .it("Check if Appstudio workspace was created", move |fw: &Framework| {
                let s = s2.clone();
                async move { s.space_created(fw).await }.boxed()
            })
            .it("Check if a ClusterSet was created", move |fw: &Framework| {
                let s = s3.clone();
                async move { s.cluster_set_created(fw).await }.boxed()
            })
            .it("Create Registered Cluster CR", move |fw: &Framework| {
                let s = s4.clone();
                async move { s.create_registered_cluster(fw).await }.boxed()
            })
            .it("Importing cluster in AppStudio", move |fw: &Framework| {
                let s = s5.clone();
                async move { s.import_cluster(fw).await }.boxed()
            })
            .it("Checking imported cluster health", move |fw: &Framework| {
                let s = s6.clone();
                async move { s.cluster_joined(fw).await }.boxed()
            })
            // deleting the UserSignup clears all Space resources
            .after_all("Delete UserSignup", move |fw: &Framework| {
                let s = s7.clone();
                async move {
                    fw.singapore
                        .delete_appstudio_sandbox_workspace_user_signup(
                            &s.account,
                            &s.account_namespace,
                        )
                        .await
                }
                .boxed()
            })
            .after_all("Delete Registered Cluster CR", move |fw: &Framework| {
                let s = s8.clone();
                async move {
                    fw.singapore
                        .delete_registered_cluster_cr(&s.cluster, &s.cluster_namespace)
                        .await
                }
                .boxed()
            })
    }

    async fn create_workspace(&self, fw: &Framework) -> Result<()> {
        fw.singapore
            .create_appstudio_sandbox_workspace_user_signup(&self.account, &self.account_namespace)
            .await?;
        Ok(())
    }

    async fn space_created(&self, fw: &Framework) -> Result<()> {
        let window = self.timings.space_created;
        eventually(
            window.timeout,
            window.interval,
            &format!("{} Appstudio Space not created", self.account),
            || fw.singapore.check_if_appstudio_space_exists(&self.account),
        )
        .await
    }

    async fn cluster_set_created(&self, fw: &Framework) -> Result<()> {
        let window = self.timings.cluster_set_created;
        eventually(
            window.timeout,
            window.interval,
            &format!("{} Cluster Set not created", self.account),
            || fw.singapore.check_if_cluster_set_exists(&self.account),
        )
        .await
    }

    /// The cluster is registered inside the user's workspace so it lands in the right cluster set
    async fn create_registered_cluster(&self, fw: &Framework) -> Result<()> {
        fw.singapore
            .create_registered_cluster_cr(&self.cluster, &self.account)
            .await?;
        Ok(())
    }

    async fn import_cluster(&self, fw: &Framework) -> Result<()> {
        let secret = fw
            .common
            .get_secret(MANAGED_CLUSTER_SECRET_NAME, MANAGED_CLUSTER_SECRET_NAMESPACE)
            .await?;
        let kubeconfig = write_managed_kubeconfig(&secret, &fw.config.work_dir).await?;

        let configmap_name = import_configmap_name(&self.cluster);
        let window = self.timings.import_configmap;
        let configmap = eventually_ok(
            window.timeout,
            window.interval,
            "import secret not found",
            || fw.common.get_config_map(&configmap_name, &self.account),
        )
        .await?;

        let import_command = configmap
            .data
            .as_ref()
            .and_then(|d| d.get(IMPORT_COMMAND_KEY))
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| E2eError::StepFailed("importCommand data is empty".to_string()))?;

        info!("Importing cluster {} using {}", self.cluster, configmap_name);
        fw.singapore
            .execute_import_command(&kubeconfig, import_command)
            .await
    }

    async fn cluster_joined(&self, fw: &Framework) -> Result<()> {
        let window = self.timings.cluster_joined;
        eventually(
            window.timeout,
            window.interval,
            &format!("{} Cluster has not joined", self.cluster),
            || {
                fw.singapore
                    .check_if_registered_cluster_has_joined(&self.cluster, &self.account)
            },
        )
        .await
    }
}
