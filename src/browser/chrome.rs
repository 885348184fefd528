// src/browser/chrome.rs

//! Chromium-backed browser session.
//!
//! Launches a headless Chromium via CDP, keeps the event handler alive on a
//! background task, and exposes the narrow [`BrowserPage`] surface the
//! pipeline needs.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig as CdpConfig};
use chromiumoxide::cdp::browser_protocol::network::SetUserAgentOverrideParams;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::browser::{BrowserPage, ClickOutcome};
use crate::error::{AppError, Result};
use crate::models::BrowserConfig;

impl From<CdpError> for AppError {
    fn from(e: CdpError) -> Self {
        AppError::Browser(e.to_string())
    }
}

/// A single Chromium page, opened once and closed exactly once.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    navigation_timeout: Duration,
    closed: bool,
}

impl ChromeSession {
    /// Launch a browser process and open the working page.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let mut builder = CdpConfig::builder().args(vec![
            "--no-sandbox",
            "--disable-setuid-sandbox",
            "--disable-blink-features=AutomationControlled",
        ]);
        if !config.headless {
            builder = builder.with_head();
        }
        let cdp_config = builder.build().map_err(AppError::Browser)?;

        let (browser, mut handler) = Browser::launch(cdp_config).await?;

        // The handler stream must be polled for the browser to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    log::warn!("browser handler event error: {e}");
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        let override_params = SetUserAgentOverrideParams::builder()
            .user_agent(config.user_agent.clone())
            .accept_language(config.accept_language.clone())
            .build()
            .map_err(AppError::Browser)?;
        page.set_user_agent(override_params).await?;

        Ok(Self {
            browser,
            page,
            handler_task,
            navigation_timeout: Duration::from_secs(config.navigation_timeout_secs),
            closed: false,
        })
    }
}

#[async_trait]
impl BrowserPage for ChromeSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        let navigation = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            Ok::<(), AppError>(())
        };
        tokio::time::timeout(self.navigation_timeout, navigation)
            .await
            .map_err(|_| AppError::NavigationTimeout(self.navigation_timeout.as_secs()))??;
        Ok(())
    }

    async fn content(&self) -> Result<String> {
        // Page::content can race with client-side re-renders; the JS snapshot
        // is the more reliable first attempt.
        if let Ok(value) = self.page.evaluate("document.documentElement.outerHTML").await {
            if let Ok(html) = value.into_value::<String>() {
                if !html.is_empty() {
                    return Ok(html);
                }
            }
        }
        Ok(self.page.content().await?)
    }

    async fn click_next(&self, selectors: &[String]) -> Result<ClickOutcome> {
        for selector in selectors {
            let Ok(element) = self.page.find_element(selector.as_str()).await else {
                continue;
            };

            let disabled = element.attribute("disabled").await?.is_some()
                || element
                    .attribute("aria-disabled")
                    .await?
                    .is_some_and(|v| v == "true");
            if disabled {
                return Ok(ClickOutcome::Disabled);
            }

            element.click().await?;
            return Ok(ClickOutcome::Clicked);
        }
        Ok(ClickOutcome::NotFound)
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let result = self.browser.close().await;
        self.handler_task.abort();
        result?;
        Ok(())
    }
}
