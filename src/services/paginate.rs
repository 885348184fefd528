// src/services/paginate.rs

//! Result-page pagination.
//!
//! Explicit state machine instead of error-as-control-flow: a missing,
//! disabled, or unclickable next-page control means end of results, never an
//! error. A hard page ceiling bounds extraction cycles even if the exhaustion
//! signal never fires.

use std::time::Duration;

use crate::browser::{BrowserPage, ClickOutcome};

/// Pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No page visited yet
    Ready,
    /// Advanced to a further page after a successful click
    HasNext,
    /// No further pages; terminal
    Exhausted,
}

/// Drives the browser to successive result pages.
pub struct Paginator {
    state: PageState,
    pages_visited: usize,
    max_pages: usize,
    settle: Duration,
}

impl Paginator {
    /// Create a paginator bounded by `max_pages` extraction cycles, pausing
    /// `settle` after each successful next-page click.
    pub fn new(max_pages: usize, settle: Duration) -> Self {
        Self {
            state: PageState::Ready,
            pages_visited: 0,
            max_pages,
            settle,
        }
    }

    /// Whether another extraction cycle may start; counts the cycle if so.
    ///
    /// Returns false once the ceiling is reached, regardless of state.
    pub fn begin_cycle(&mut self) -> bool {
        if self.state == PageState::Exhausted || self.pages_visited >= self.max_pages {
            return false;
        }
        self.pages_visited += 1;
        true
    }

    /// Pages visited so far.
    pub fn pages_visited(&self) -> usize {
        self.pages_visited
    }

    /// Current state.
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Try to move to the next results page.
    ///
    /// Clicks the first enabled next-page control and waits the settle delay
    /// for the client-side re-render. Any click failure transitions to
    /// `Exhausted`.
    pub async fn advance(&mut self, page: &dyn BrowserPage, selectors: &[String]) -> PageState {
        self.state = match page.click_next(selectors).await {
            Ok(ClickOutcome::Clicked) => {
                if !self.settle.is_zero() {
                    tokio::time::sleep(self.settle).await;
                }
                PageState::HasNext
            }
            Ok(ClickOutcome::Disabled) | Ok(ClickOutcome::NotFound) => PageState::Exhausted,
            Err(e) => {
                log::warn!("next-page click failed, treating as end of results: {e}");
                PageState::Exhausted
            }
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::error::{AppError, Result};

    /// Scripted browser whose next-page control always behaves the same way.
    struct FixedPage {
        outcome: Option<ClickOutcome>,
    }

    #[async_trait]
    impl BrowserPage for FixedPage {
        async fn navigate(&self, _url: &str) -> Result<()> {
            Ok(())
        }

        async fn content(&self) -> Result<String> {
            Ok(String::new())
        }

        async fn click_next(&self, _selectors: &[String]) -> Result<ClickOutcome> {
            self.outcome
                .ok_or_else(|| AppError::browser("click failed"))
        }

        async fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    async fn run_cycles(outcome: Option<ClickOutcome>, max_pages: usize) -> usize {
        let page = FixedPage { outcome };
        let mut paginator = Paginator::new(max_pages, Duration::ZERO);
        let mut cycles = 0;
        while paginator.begin_cycle() {
            cycles += 1;
            if paginator.advance(&page, &[]).await == PageState::Exhausted {
                break;
            }
        }
        cycles
    }

    #[tokio::test]
    async fn test_ceiling_bounds_cycles_when_never_exhausted() {
        for n in 1..=5 {
            assert_eq!(run_cycles(Some(ClickOutcome::Clicked), n).await, n);
        }
    }

    #[tokio::test]
    async fn test_missing_control_is_terminal() {
        assert_eq!(run_cycles(Some(ClickOutcome::NotFound), 10).await, 1);
    }

    #[tokio::test]
    async fn test_disabled_control_is_terminal() {
        assert_eq!(run_cycles(Some(ClickOutcome::Disabled), 10).await, 1);
    }

    #[tokio::test]
    async fn test_click_failure_is_end_of_results_not_error() {
        assert_eq!(run_cycles(None, 10).await, 1);
    }

    #[tokio::test]
    async fn test_exhausted_blocks_further_cycles() {
        let page = FixedPage {
            outcome: Some(ClickOutcome::NotFound),
        };
        let mut paginator = Paginator::new(10, Duration::ZERO);
        assert!(paginator.begin_cycle());
        paginator.advance(&page, &[]).await;
        assert_eq!(paginator.state(), PageState::Exhausted);
        assert!(!paginator.begin_cycle());
        assert_eq!(paginator.pages_visited(), 1);
    }

    #[tokio::test]
    async fn test_state_transitions() {
        let page = FixedPage {
            outcome: Some(ClickOutcome::Clicked),
        };
        let mut paginator = Paginator::new(3, Duration::ZERO);
        assert_eq!(paginator.state(), PageState::Ready);
        paginator.begin_cycle();
        assert_eq!(paginator.advance(&page, &[]).await, PageState::HasNext);
    }
}
