mod api;
mod config;
mod handler;
mod http;
mod logger;
mod sentiment;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; real environment always wins
    dotenvy::dotenv().ok();

    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, honoring the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    // A missing entry document is fatal; refuse to start
    cfg.validate_static_root()?;

    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = std::sync::Arc::new(config::AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);
    logger::log_api_key_status(std::env::var("OPENAI_API_KEY").is_ok());

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state)).await
}
