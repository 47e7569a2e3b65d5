use anyhow::{Context, Result};
use value_screener::config::Config;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().context("loading configuration")?;

    value_screener::web::run(config)
        .await
        .context("running HTTP server")
}
