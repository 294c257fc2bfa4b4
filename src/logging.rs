// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagnostic logging setup.
//!
//! Events always go to stderr: in stdio mode stdout carries the MCP framing.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives (takes precedence over `RUST_LOG`).
pub const LOG_ENV: &str = "BLOBGUARD_LOG";

pub const DEFAULT_DIRECTIVES: &str = "info";

/// Chatty dependency targets capped at `warn` unless a directive names them.
const NOISY_MODULES: &[&str] = &["hyper", "h2", "tower", "axum", "rmcp"];

pub fn build_filter(raw: Option<&str>) -> EnvFilter {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(default_directives())),
        None => EnvFilter::new(default_directives()),
    }
}

/// First non-blank source wins: `BLOBGUARD_LOG`, then `RUST_LOG`.
fn pick_directives(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    let usable = |raw: &String| !raw.trim().is_empty();
    primary.filter(usable).or_else(|| fallback.filter(usable))
}

fn default_directives() -> String {
    let mut directives = String::from(DEFAULT_DIRECTIVES);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{module}=warn"));
    }
    directives
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init_logging() {
    let raw = pick_directives(std::env::var(LOG_ENV).ok(), std::env::var("RUST_LOG").ok());
    let filter = build_filter(raw.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);
    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
