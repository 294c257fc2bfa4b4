// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! BlobGuard CLI entrypoint.
//!
//! By default this serves MCP over stdio. Use `--http` to serve streamable HTTP at
//! `http://<bind>:<port>/mcp` instead, where every MCP session gets its own blob store.

use std::error::Error;
use std::net::IpAddr;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};

const DEFAULT_HTTP_PORT: u16 = 27436;
const DEFAULT_BIND: IpAddr = IpAddr::V4(std::net::Ipv4Addr::LOCALHOST);

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--enable-reset]\n  {program} --http [--port <port>] [--bind <ip>] [--enable-reset]\n\nWithout --http, MCP is served over stdio and all calls share one session.\n--http serves streamable HTTP at `http://<bind>:<port>/mcp` (default 127.0.0.1:{DEFAULT_HTTP_PORT}; port 0 = ephemeral).\n--enable-reset exposes the `_reset_state` tool (testing only).\n\nLog filtering follows BLOBGUARD_LOG (or RUST_LOG); logs are written to stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    http: bool,
    port: Option<u16>,
    bind: Option<IpAddr>,
    enable_reset: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--http" => {
                if options.http {
                    return Err(());
                }
                options.http = true;
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--bind" => {
                if options.bind.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let bind: IpAddr = raw.parse().map_err(|_| ())?;
                options.bind = Some(bind);
            }
            "--enable-reset" => {
                if options.enable_reset {
                    return Err(());
                }
                options.enable_reset = true;
            }
            _ => return Err(()),
        }
    }

    if !options.http && (options.port.is_some() || options.bind.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn build_server(options: &CliOptions) -> blobguard::mcp::BlobGuardMcp {
    let mcp = blobguard::mcp::BlobGuardMcp::new();
    if options.enable_reset {
        mcp.with_reset_tool()
    } else {
        mcp
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "blobguard".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        blobguard::logging::init_logging();
        let mcp = build_server(&options);

        if !options.http {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            tracing::info!(reset_tool = options.enable_reset, "serving MCP over stdio");
            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let bind = options.bind.unwrap_or(DEFAULT_BIND);
        let port = options.port.unwrap_or(DEFAULT_HTTP_PORT);
        let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind((bind, port)).await?;

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();
            let server_shutdown = shutdown_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service =
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

            let router = Router::new().nest_service("/mcp", mcp_service);
            let addr = listener.local_addr()?;
            tracing::info!(
                %addr,
                reset_tool = options.enable_reset,
                "serving MCP over streamable HTTP at /mcp"
            );

            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    server_shutdown.cancelled().await;
                });
                if let Err(err) = serve.await {
                    tracing::error!(%err, "MCP HTTP server error");
                }
            });

            tokio::signal::ctrl_c().await?;
            tracing::info!("shutting down");
            shutdown_token.cancel();
            let _ = server_handle.await;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("blobguard: {err}");
        std::process::exit(1);
    }
}
