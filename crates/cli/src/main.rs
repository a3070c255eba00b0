// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! UTK test suite validator binary entry point.

use tracing_subscriber::EnvFilter;

use utk_validator::{env, runtime};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env::log_filter()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let code = runtime::run(std::env::args_os()).await;
    std::process::exit(code);
}
