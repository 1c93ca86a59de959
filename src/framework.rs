// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Controllers bundled behind one shared client.

use crate::config::Config;
use crate::controllers::{CommonController, KcpController, SingaporeController};
use crate::error::Result;
use crate::kubernetes::create_client;
use kube::Client;
use tracing::info;

pub struct Framework {
    pub kcp: KcpController,
    pub common: CommonController,
    pub singapore: SingaporeController,
    pub config: Config,
}

impl Framework {
    /// Connect to the cluster described by `config` and set up every controller
    pub async fn new(config: Config) -> Result<Self> {
        let client = create_client(&config).await?;
        info!("Connected to Kubernetes cluster");
        Ok(Self::from_client(client, config))
    }

    pub fn from_client(client: Client, config: Config) -> Self {
        Self {
            kcp: KcpController::new(client.clone()),
            common: CommonController::new(client.clone()),
            singapore: SingaporeController::new(client, config.host_operator_namespace.clone()),
            config,
        }
    }
}
