// ABOUTME: Configuration module for the booking administration server
// ABOUTME: Environment-only configuration loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

/// Environment variable parsing into a typed `ServerConfig`
pub mod environment;
