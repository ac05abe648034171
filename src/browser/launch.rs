use std::path::Path;
use std::time::Duration;

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{BrowserError, Result};

/// Launch a visible browser session and open a blank page.
///
/// The caller owns both handles and must release them through
/// [`QuizAutomator::close`](crate::browser::QuizAutomator::close) on every
/// exit path.
pub async fn launch_browser(config: &Config) -> Result<(Browser, Page)> {
    info!("launching browser...");

    let mut builder = BrowserConfig::builder()
        .with_head()
        .args(vec!["--start-maximized", "--disable-notifications"]);

    if let Some(executable) = &config.browser_executable {
        debug!("using browser executable {}", executable);
        builder = builder.chrome_executable(Path::new(executable));
    }

    let browser_config = builder.build().map_err(|message| {
        error!("failed to configure browser: {}", message);
        BrowserError::Configuration(message)
    })?;

    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|source| {
        error!("failed to launch browser: {}", source);
        BrowserError::Launch { source }
    })?;
    debug!("browser launched");

    // Drive browser events in the background
    tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    // Brief pause for the browser state to settle
    sleep(Duration::from_millis(300)).await;

    let page = browser.new_page("about:blank").await?;
    debug!("blank page created");

    Ok((browser, page))
}
