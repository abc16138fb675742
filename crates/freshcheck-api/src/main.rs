use freshcheck_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let (_state, router) = freshcheck_api::setup::initialize_app(config.clone())?;

    freshcheck_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
