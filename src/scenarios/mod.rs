// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! End-to-end user journeys.

pub mod cluster_registration;

use crate::framework::Framework;
use crate::suite::Suite;

pub use cluster_registration::ClusterRegistration;

/// Every suite known to the runner
pub fn all() -> Vec<Suite<Framework>> {
    vec![ClusterRegistration::default().into_suite()]
}
