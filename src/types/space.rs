// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use super::Condition;

/// Sandbox-provisioned workspace tied to a UserSignup
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "toolchain.dev.openshift.com", version = "v1alpha1", kind = "Space")]
#[kube(namespaced)]
#[kube(status = "SpaceStatus")]
#[serde(rename_all = "camelCase")]
pub struct SpaceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cluster: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpaceStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}
