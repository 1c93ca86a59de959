// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as keys, singapore::USER_ACCOUNT_NAMESPACE};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Runner configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Kubeconfig used by the framework; inferred from the environment when unset
    pub appstudio_kubeconfig: Option<PathBuf>,
    /// Directory the managed cluster kubeconfig is written to
    pub work_dir: PathBuf,
    /// Only suites carrying one of these labels run; empty runs everything
    pub label_filter: Vec<String>,
    /// Namespace where the toolchain host operator keeps Spaces
    pub host_operator_namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let work_dir = match env::var(keys::WORK_DIR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => env::current_dir().context("Unable to determine current directory")?,
        };

        Ok(Config {
            appstudio_kubeconfig: env::var(keys::APPSTUDIO_KUBECONFIG)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            work_dir,
            label_filter: parse_label_filter(&env::var(keys::LABEL_FILTER).unwrap_or_default()),
            host_operator_namespace: env::var(keys::HOST_OPERATOR_NAMESPACE)
                .unwrap_or_else(|_| USER_ACCOUNT_NAMESPACE.to_string()),
        })
    }

    /// Whether a suite with the given labels is selected by the filter
    pub fn selects(&self, labels: &[&str]) -> bool {
        self.label_filter.is_empty()
            || labels
                .iter()
                .any(|l| self.label_filter.iter().any(|f| f == l))
    }
}

fn parse_label_filter(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
