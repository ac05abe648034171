use anyhow::Result;

use quiz_pilot::app::App;
use quiz_pilot::config::Config;
use quiz_pilot::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before reading the environment
    dotenv::dotenv().ok();

    logger::init();

    let config = Config::from_env();

    App::new(config).run().await
}
