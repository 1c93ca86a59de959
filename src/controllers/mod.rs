// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Thin accessors that adapt the shared client to the resources each suite touches.

pub mod common;
pub mod kcp;
pub mod singapore;

pub use common::CommonController;
pub use kcp::KcpController;
pub use singapore::SingaporeController;
