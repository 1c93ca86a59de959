// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::toolchain::{APPROVED_STATE, EMAIL_DOMAIN, USER_EMAIL_ANNOTATION};
use kube::{api::ObjectMeta, CustomResource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Condition;

/// Sandbox onboarding request; once approved the host operator provisions a Space
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "toolchain.dev.openshift.com", version = "v1alpha1", kind = "UserSignup")]
#[kube(namespaced)]
#[kube(status = "UserSignupStatus")]
#[serde(rename_all = "camelCase")]
pub struct UserSignupSpec {
    pub userid: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSignupStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliant_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

impl UserSignup {
    /// Build an already approved signup for `account` in `namespace`
    pub fn approved(account: &str, namespace: &str) -> Self {
        UserSignup {
            metadata: ObjectMeta {
                name: Some(account.to_string()),
                namespace: Some(namespace.to_string()),
                annotations: Some(BTreeMap::from([(
                    USER_EMAIL_ANNOTATION.to_string(),
                    format!("{}@{}", account, EMAIL_DOMAIN),
                )])),
                ..Default::default()
            },
            spec: UserSignupSpec {
                userid: account.to_string(),
                username: account.to_string(),
                states: vec![APPROVED_STATE.to_string()],
            },
            status: None,
        }
    }
}
