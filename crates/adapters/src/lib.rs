// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: request replay and connectivity probing

pub mod connectivity;
mod env;
pub mod http;
pub mod traced;

pub use connectivity::{ConnectivityProbe, HttpProbe, StaticProbe};
pub use http::{HttpAdapter, HttpError, HttpResponse, ReqwestHttpAdapter};
pub use traced::TracedHttp;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use connectivity::FakeProbe;
#[cfg(any(test, feature = "test-support"))]
pub use http::{FakeHttpAdapter, FakeOutcome, HttpCall};
