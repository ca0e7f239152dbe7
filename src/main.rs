use std::sync::Arc;

use clap::Parser;

mod cli;
mod config;
mod handler;
mod http;
mod logger;
mod server;
mod store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Cli::parse();
    let cfg = config::Config::load(&args)?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing the thread pool from the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let note_store = store::NoteStore::open(&cfg.store.dir)?;
    logger::log_store_ready(note_store.dir());

    let listener = server::bind_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, note_store));
    server::run(listener, state).await
}
