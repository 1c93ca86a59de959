// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! KCP workspace accessor.

use crate::error::Result;
use crate::types::Workspace;
use kube::{
    api::{DeleteParams, ListParams, ObjectList},
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

/// Workspace accessor shared by every suite.
///
/// Calls go straight to the API server without retries; the runner uses
/// the listing at startup to report which workspaces the client can see.
pub struct KcpController {
    client: Client,
}

impl KcpController {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List every workspace visible to the client
    #[instrument(skip(self))]
    pub async fn list_kcp_workspaces(&self) -> Result<ObjectList<Workspace>> {
        let workspaces: Api<Workspace> = Api::all(self.client.clone());
        let list = workspaces.list(&ListParams::default()).await?;

        for ws in &list.items {
            debug!("Workspace {} is {}", ws.name_any(), ws.phase());
        }

        Ok(list)
    }

    #[instrument(skip(self, workspace), fields(workspace = %workspace.name_any()))]
    pub async fn delete_kcp_workspace(&self, workspace: &Workspace) -> Result<()> {
        let workspaces: Api<Workspace> = Api::all(self.client.clone());
        workspaces
            .delete(&workspace.name_any(), &DeleteParams::default())
            .await?;

        info!("Deleted workspace {}", workspace.name_any());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::E2eError;
    use crate::test_utils::{internal_error_json, to_json, MockService};
    use crate::types::workspace::WorkspaceSpec;

    const WORKSPACES_PATH: &str = "/apis/tenancy.kcp.dev/v1beta1/workspaces";

    fn workspace_list_json(names: &[&str]) -> String {
        let items: Vec<Workspace> = names
            .iter()
            .map(|n| Workspace::new(n, WorkspaceSpec::default()))
            .collect();
        serde_json::json!({
            "apiVersion": "tenancy.kcp.dev/v1beta1",
            "kind": "WorkspaceList",
            "metadata": { "resourceVersion": "1" },
            "items": items,
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_list_kcp_workspaces_returns_all_items() {
        let client = MockService::new()
            .on_get(WORKSPACES_PATH, 200, &workspace_list_json(&["root", "appstudio"]))
            .into_client();

        let list = KcpController::new(client).list_kcp_workspaces().await.unwrap();

        let names: Vec<String> = list.items.iter().map(|w| w.name_any()).collect();
        assert_eq!(names, vec!["root".to_string(), "appstudio".to_string()]);
    }

    #[tokio::test]
    async fn test_list_kcp_workspaces_propagates_api_error() {
        let client = MockService::new()
            .on_get(WORKSPACES_PATH, 500, &internal_error_json("etcd unavailable"))
            .into_client();

        let err = KcpController::new(client)
            .list_kcp_workspaces()
            .await
            .unwrap_err();

        assert!(matches!(err, E2eError::KubeError(kube::Error::Api(ref e)) if e.code == 500));
    }

    #[tokio::test]
    async fn test_delete_kcp_workspace_by_name() {
        let ws = Workspace::new("appstudio", WorkspaceSpec::default());
        let mock = MockService::new().on_delete(
            &format!("{}/appstudio", WORKSPACES_PATH),
            200,
            &to_json(&ws),
        );
        let controller = KcpController::new(mock.clone().into_client());

        controller.delete_kcp_workspace(&ws).await.unwrap();

        assert_eq!(
            mock.count("DELETE", "/apis/tenancy.kcp.dev/v1beta1/workspaces/appstudio"),
            1
        );
    }

    #[tokio::test]
    async fn test_delete_missing_kcp_workspace_is_an_error() {
        let ws = Workspace::new("gone", WorkspaceSpec::default());
        let controller = KcpController::new(MockService::new().into_client());

        let err = controller.delete_kcp_workspace(&ws).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
