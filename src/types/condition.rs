// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::conditions::STATUS_TRUE;
use serde::{Deserialize, Serialize};

/// Status condition as reported by the toolchain and cluster registration operators
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// Check whether `conditions` holds `condition_type` with status "True"
pub fn has_true_condition(conditions: Option<&[Condition]>, condition_type: &str) -> bool {
    conditions.is_some_and(|conditions| {
        conditions
            .iter()
            .any(|c| c.condition_type == condition_type && c.status == STATUS_TRUE)
    })
}
