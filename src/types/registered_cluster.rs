// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{conditions::MANAGED_CLUSTER_JOINED, singapore::IMPORT_CONFIGMAP_SUFFIX};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use super::{condition::has_true_condition, Condition};

/// A cluster imported into AppStudio; status tracks join progress
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "singapore.open-cluster-management.io",
    version = "v1alpha1",
    kind = "RegisteredCluster"
)]
#[kube(namespaced)]
#[kube(status = "RegisteredClusterStatus")]
#[serde(rename_all = "camelCase")]
pub struct RegisteredClusterSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredClusterStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    #[serde(rename = "apiURL", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl RegisteredCluster {
    /// Check if the cluster reports ManagedClusterJoined=True
    pub fn has_joined(&self) -> bool {
        has_true_condition(
            self.status.as_ref().and_then(|s| s.conditions.as_deref()),
            MANAGED_CLUSTER_JOINED,
        )
    }
}

/// Conventional import ConfigMap name for cluster `cluster_name`
pub fn import_configmap_name(cluster_name: &str) -> String {
    format!("{}{}", cluster_name, IMPORT_CONFIGMAP_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::api::ObjectMeta;

    fn make_cluster(name: &str, status: Option<RegisteredClusterStatus>) -> RegisteredCluster {
        RegisteredCluster {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some("managed-cluster-vcluster".to_string()),
                ..Default::default()
            },
            spec: RegisteredClusterSpec::default(),
            status,
        }
    }

    fn make_condition(condition_type: &str, status: &str) -> Condition {
        Condition {
            condition_type: condition_type.to_string(),
            status: status.to_string(),
            reason: None,
            message: None,
            last_transition_time: None,
        }
    }

    fn with_conditions(conditions: Vec<Condition>) -> Option<RegisteredClusterStatus> {
        Some(RegisteredClusterStatus {
            conditions: Some(conditions),
            ..Default::default()
        })
    }

    #[test]
    fn test_has_joined_with_joined_condition() {
        let cluster = make_cluster(
            "imported",
            with_conditions(vec![make_condition("ManagedClusterJoined", "True")]),
        );
        assert!(cluster.has_joined());
    }

    #[test]
    fn test_has_joined_false_status() {
        let cluster = make_cluster(
            "imported",
            with_conditions(vec![make_condition("ManagedClusterJoined", "False")]),
        );
        assert!(!cluster.has_joined());
    }

    #[test]
    fn test_has_joined_other_condition_true() {
        let cluster = make_cluster(
            "imported",
            with_conditions(vec![
                make_condition("ManagedClusterConditionAvailable", "True"),
                make_condition("HubAcceptedManagedCluster", "True"),
            ]),
        );
        assert!(!cluster.has_joined());
    }

    #[test]
    fn test_has_joined_no_status() {
        assert!(!make_cluster("imported", None).has_joined());
    }

    #[test]
    fn test_has_joined_status_without_conditions() {
        let cluster = make_cluster("imported", Some(RegisteredClusterStatus::default()));
        assert!(!cluster.has_joined());
    }

    #[test]
    fn test_import_configmap_name_appends_suffix() {
        assert_eq!(
            import_configmap_name("my-imported-cluster"),
            "my-imported-cluster-import"
        );
    }

    #[test]
    fn test_status_deserializes_from_operator_json() {
        let cluster: RegisteredCluster = serde_json::from_value(serde_json::json!({
            "apiVersion": "singapore.open-cluster-management.io/v1alpha1",
            "kind": "RegisteredCluster",
            "metadata": { "name": "imported", "namespace": "ws" },
            "spec": {},
            "status": {
                "apiURL": "https://10.0.0.1:6443",
                "conditions": [{
                    "type": "ManagedClusterJoined",
                    "status": "True",
                    "reason": "ManagedClusterJoined",
                    "message": "Managed cluster joined",
                    "lastTransitionTime": "2022-06-01T10:00:00Z"
                }]
            }
        }))
        .unwrap();

        assert!(cluster.has_joined());
        assert_eq!(
            cluster.status.unwrap().api_url.as_deref(),
            Some("https://10.0.0.1:6443")
        );
    }
}
