// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Import command failed with {status}: {stderr}")]
    ImportCommandError { status: String, stderr: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Timed out after {elapsed:?}: {message}")]
    Timeout { elapsed: Duration, message: String },

    #[error("Step failed: {0}")]
    StepFailed(String),
}

impl E2eError {
    /// True when the API server answered 404 for the request
    pub fn is_not_found(&self) -> bool {
        matches!(self, E2eError::KubeError(kube::Error::Api(err)) if err.code == 404)
    }
}

pub type Result<T> = std::result::Result<T, E2eError>;
