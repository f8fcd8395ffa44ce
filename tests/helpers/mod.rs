// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the Axum request driver and an in-memory schedule store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod memory_store;
