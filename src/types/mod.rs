// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed views of the external custom resources the suite reads and writes.

pub mod cluster_set;
pub mod condition;
pub mod registered_cluster;
pub mod space;
pub mod user_signup;
pub mod workspace;

pub use cluster_set::ManagedClusterSet;
pub use condition::Condition;
pub use registered_cluster::RegisteredCluster;
pub use space::Space;
pub use user_signup::UserSignup;
pub use workspace::Workspace;
