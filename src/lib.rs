// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // manifest loading
pub mod errors;     // error handling
pub mod forwarder;  // output port -> stdout relay
pub mod observability;
pub mod pipeline;   // load -> initialize -> subscribe -> forward
pub mod traits;     // unit boundary
pub mod units;      // computation units
