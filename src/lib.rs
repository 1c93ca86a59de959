// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod controllers;
pub mod error;
pub mod framework;
pub mod kubernetes;
pub mod poll;
pub mod scenarios;
pub mod suite;
pub mod types;

#[cfg(test)]
mod test_utils;
