// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Tessera engine framework.
//!
//! The gateway owns no routes of its own: it drives every registered
//! engine's route hook to assemble an axum router, layers middleware on
//! top, and serves. The built-in status engine living here illustrates the
//! contract concrete engines fulfill.

pub mod router;
pub mod server;
pub mod status;

pub use router::AppRouter;
pub use server::{ServerConfig, build_router, start_server};
pub use status::status_engine;
