// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Fixed names used by the cluster registration scenario
pub mod singapore {
    pub const IMPORTED_USER_CLUSTER_NAME: &str = "my-imported-cluster";
    pub const IMPORTED_USER_CLUSTER_NAMESPACE: &str = "cluster-reg-config";
    pub const USER_ACCOUNT_NAME: &str = "managed-cluster-vcluster";
    pub const USER_ACCOUNT_NAMESPACE: &str = "toolchain-host-operator";

    /// Secret holding the kubeconfig of the cluster being imported
    pub const MANAGED_CLUSTER_SECRET_NAME: &str = "vc-vcluster";
    pub const MANAGED_CLUSTER_SECRET_NAMESPACE: &str = "managed-cluster";
    pub const MANAGED_CLUSTER_SECRET_KEY: &str = "config";
    pub const MANAGED_KUBECONFIG_FILE: &str = "managedKubeconfig";

    pub const IMPORT_CONFIGMAP_SUFFIX: &str = "-import";
    pub const IMPORT_COMMAND_KEY: &str = "importCommand";
}

/// Annotation and label keys understood by the toolchain operators
pub mod toolchain {
    pub const USER_EMAIL_ANNOTATION: &str = "toolchain.dev.openshift.com/user-email";
    pub const EMAIL_DOMAIN: &str = "user.us";
    pub const APPROVED_STATE: &str = "approved";
}

/// Condition types reported by the cluster registration operator
pub mod conditions {
    pub const MANAGED_CLUSTER_JOINED: &str = "ManagedClusterJoined";
    pub const STATUS_TRUE: &str = "True";
}

/// Environment variables read by the runner
pub mod env {
    pub const APPSTUDIO_KUBECONFIG: &str = "APPSTUDIO_KUBECONFIG";
    pub const WORK_DIR: &str = "E2E_WORK_DIR";
    pub const LABEL_FILTER: &str = "E2E_LABEL_FILTER";
    pub const HOST_OPERATOR_NAMESPACE: &str = "E2E_HOST_OPERATOR_NAMESPACE";
}

/// Polling windows in seconds, as (timeout, interval)
pub mod timeouts {
    pub const SPACE_CREATED: (u64, u64) = (2 * 60, 5);
    pub const CLUSTER_SET_CREATED: (u64, u64) = (2 * 60, 5);
    pub const IMPORT_CONFIGMAP: (u64, u64) = (60, 5);
    pub const CLUSTER_JOINED: (u64, u64) = (20 * 60, 15);
}

/// Label attached to every suite in this crate
pub const SINGAPORE_LABEL: &str = "singapore";
