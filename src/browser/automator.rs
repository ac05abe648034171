//! Quiz automator
//!
//! Logs into the e-learning platform and mechanically fills quiz forms from
//! a precomputed question-id -> answer-text mapping. Login and submission
//! surface as booleans at the call site; every element lookup, page- or
//! question-scoped, retries under the same bounded wait, so a page that
//! renders progressively is given the full bound before anything fails.

use std::collections::HashMap;
use std::time::Duration;

use chromiumoxide::{Browser, Element, Page};
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, BrowserError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Drives one browser session against the quiz pages.
pub struct QuizAutomator {
    browser: Browser,
    page: Page,
    login_url: String,
    max_wait: Duration,
}

impl QuizAutomator {
    pub fn new(browser: Browser, page: Page, config: &Config) -> Self {
        Self {
            browser,
            page,
            login_url: config.login_url.clone(),
            max_wait: Duration::from_secs(config.max_wait_secs),
        }
    }

    /// Log into the platform. Failures are logged and reported as `false`.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        match self.try_login(username, password).await {
            Ok(()) => {
                info!("login succeeded");
                true
            }
            Err(e) => {
                warn!("login failed: {}", e);
                false
            }
        }
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<()> {
        self.goto(&self.login_url).await?;

        let username_field = self.wait_for_element("#username").await?;
        username_field.type_str(username).await?;

        let password_field = self.wait_for_element("#password").await?;
        password_field.type_str(password).await?;

        let login_button = self.wait_for_element("#loginbtn").await?;
        login_button.click().await?;

        // Dashboard appearing means the login round-trip completed
        self.wait_for_element(".dashboard").await?;
        Ok(())
    }

    /// Fill and submit one quiz. Failures are logged and reported as `false`.
    pub async fn submit_quiz(&self, quiz_url: &str, answers: &HashMap<String, String>) -> bool {
        match self.try_submit_quiz(quiz_url, answers).await {
            Ok(()) => {
                info!("quiz submitted");
                true
            }
            Err(e) => {
                warn!("quiz submission failed: {}", e);
                false
            }
        }
    }

    async fn try_submit_quiz(
        &self,
        quiz_url: &str,
        answers: &HashMap<String, String>,
    ) -> Result<()> {
        self.goto(quiz_url).await?;

        let questions = self.wait_for_elements("div.que").await?;
        info!("found {} questions on the page", questions.len());

        for question in &questions {
            let Some(question_id) = question.attribute("id").await? else {
                continue;
            };
            if let Some(answer) = answers.get(&question_id) {
                self.answer_question(question, &question_id, answer).await?;
            } else {
                debug!("no answer prepared for {}", question_id);
            }
        }

        // Two-step submit: the quiz form, then the confirmation page
        let submit_button = self.wait_for_element("input[name='submit']").await?;
        submit_button.click().await?;

        let confirm_button = self
            .wait_for_element("input[type='submit'][value='Submit all and finish']")
            .await?;
        confirm_button.click().await?;

        Ok(())
    }

    /// Dispatch on the question element's type class.
    ///
    /// The second class token names the kind (`que multichoice ...`).
    /// Unrecognized kinds are skipped without error.
    async fn answer_question(
        &self,
        question: &Element,
        question_id: &str,
        answer: &str,
    ) -> Result<()> {
        let class = question.attribute("class").await?.unwrap_or_default();
        let kind = class.split_whitespace().nth(1).unwrap_or_default().to_string();

        match kind.as_str() {
            "multichoice" => self.answer_multichoice(question, answer).await?,
            "shortanswer" => self.answer_shortanswer(question, answer).await?,
            other => {
                debug!("skipping {} with unrecognized kind '{}'", question_id, other);
            }
        }
        Ok(())
    }

    /// Click the option whose input value equals the answer text.
    async fn answer_multichoice(&self, question: &Element, answer: &str) -> Result<()> {
        let inputs = self.wait_all_within(question, ".answer input").await?;
        for input in &inputs {
            if input.attribute("value").await?.as_deref() == Some(answer) {
                input.click().await?;
                break;
            }
        }
        Ok(())
    }

    /// Type the answer into the question's text area.
    async fn answer_shortanswer(&self, question: &Element, answer: &str) -> Result<()> {
        let textarea = self.wait_within(question, "textarea").await?;
        textarea.type_str(answer).await?;
        Ok(())
    }

    async fn goto(&self, url: &str) -> Result<()> {
        self.page.goto(url).await.map_err(|source| BrowserError::Navigation {
            url: url.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Page-scoped bounded lookup for a single element.
    async fn wait_for_element(&self, selector: &str) -> Result<Element> {
        poll_until(self.max_wait, || {
            self.page.find_element(selector).map(|found| found.ok()).boxed()
        })
        .await
        .ok_or_else(|| self.timeout(selector))
    }

    /// Page-scoped bounded lookup for a non-empty element list.
    async fn wait_for_elements(&self, selector: &str) -> Result<Vec<Element>> {
        poll_until(self.max_wait, || {
            self.page
                .find_elements(selector)
                .map(|found| found.ok().filter(|els| !els.is_empty()))
                .boxed()
        })
        .await
        .ok_or_else(|| self.timeout(selector))
    }

    /// Bounded lookup for a single element inside `root`.
    async fn wait_within(&self, root: &Element, selector: &str) -> Result<Element> {
        poll_until(self.max_wait, || {
            root.find_element(selector).map(|found| found.ok()).boxed()
        })
        .await
        .ok_or_else(|| self.timeout(selector))
    }

    /// Bounded lookup for a non-empty element list inside `root`.
    async fn wait_all_within(&self, root: &Element, selector: &str) -> Result<Vec<Element>> {
        poll_until(self.max_wait, || {
            root.find_elements(selector)
                .map(|found| found.ok().filter(|els| !els.is_empty()))
                .boxed()
        })
        .await
        .ok_or_else(|| self.timeout(selector))
    }

    fn timeout(&self, selector: &str) -> AppError {
        BrowserError::ElementTimeout {
            selector: selector.to_string(),
            waited: self.max_wait,
        }
        .into()
    }

    /// Release the browser session. Must run on every exit path.
    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        info!("browser session closed");
        Ok(())
    }
}

/// Retry `lookup` until it yields a value or `max_wait` elapses.
async fn poll_until<'a, T>(
    max_wait: Duration,
    mut lookup: impl FnMut() -> BoxFuture<'a, Option<T>>,
) -> Option<T> {
    let deadline = Instant::now() + max_wait;
    loop {
        if let Some(found) = lookup().await {
            return Some(found);
        }
        if Instant::now() >= deadline {
            return None;
        }
        sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn lookup_is_retried_while_the_page_renders() {
        let mut attempts = 0;
        let found = poll_until(Duration::from_secs(10), || {
            attempts += 1;
            let rendered = attempts >= 3;
            async move { rendered.then_some("element") }.boxed()
        })
        .await;

        assert_eq!(found, Some("element"));
        assert!(attempts >= 3, "lookup must poll, not fail on first miss");
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_gives_up_once_the_bound_elapses() {
        let mut attempts = 0;
        let found: Option<()> = poll_until(Duration::from_secs(2), || {
            attempts += 1;
            async { None }.boxed()
        })
        .await;

        assert!(found.is_none());
        // 2 s bound at 250 ms intervals: first attempt plus eight retries
        assert_eq!(attempts, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn late_render_just_inside_the_bound_still_succeeds() {
        let mut attempts = 0;
        let found = poll_until(Duration::from_secs(2), || {
            attempts += 1;
            let rendered = attempts == 9;
            async move { rendered.then_some(()) }.boxed()
        })
        .await;

        assert_eq!(found, Some(()));
    }
}
