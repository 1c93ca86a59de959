// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Getters for core resources shared by every suite.

use crate::error::Result;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::{Api, Client};
use tracing::instrument;

pub struct CommonController {
    client: Client,
}

impl CommonController {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_secret(&self, name: &str, namespace: &str) -> Result<Secret> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        Ok(secrets.get(name).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_config_map(&self, name: &str, namespace: &str) -> Result<ConfigMap> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        Ok(config_maps.get(name).await?)
    }
}
