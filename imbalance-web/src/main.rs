#![doc = include_str!("../../README.md")]

mod app;
mod calculator;
mod cli;
mod form;
mod page;
mod prelude;

use clap::{Parser, crate_version};
use tokio::net::TcpListener;

use crate::{cli::Args, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    let args = Args::parse();
    info!(
        version = crate_version!(),
        args.bind_address,
        ?args.input_policy,
        %args.request_timeout,
        "starting…"
    );

    let listener =
        TcpListener::bind(&args.bind_address).await.context("failed to bind to the address")?;
    let app = app::router(args.input_policy, args.request_timeout.into());

    info!("serving…");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("done!");
    Ok(())
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
