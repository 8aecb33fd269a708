//! Lazy, forward-only paging over list endpoints.
//!
//! # Design
//! - A [`PageSource`] knows how to fetch one page for a token; the [`Pager`]
//!   owns the iteration state and decides when to fetch.
//! - The first fetch uses an empty token; later fetches use the token
//!   returned by the previous page.
//! - Iteration ends on an error, an empty page, or after a page that carried
//!   no further token has been consumed. Once done it stays done.
//! - `advance` only mutates state after a fetch resolves, so dropping its
//!   future mid-fetch leaves the pager where it was.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::{ClientError, ClientResult};

/// One page returned by a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Token for the following page; `None` or empty when this is the last page.
    pub next_page_token: Option<String>,
}

/// Fetches pages for a [`Pager`].
#[async_trait]
pub trait PageSource: Send {
    /// Record type yielded by the pager.
    type Item: Send;

    /// Fetch the page identified by `token` (empty for the first page).
    async fn fetch_page(&mut self, token: &str) -> ClientResult<Page<Self::Item>>;
}

/// Forward-only iterator over the records of a [`PageSource`].
pub struct Pager<S: PageSource> {
    source: S,
    buffer: VecDeque<S::Item>,
    current: Option<S::Item>,
    next_token: String,
    fetched: bool,
    done: bool,
    error: Option<ClientError>,
    cancel: Option<CancellationToken>,
}

impl<S: PageSource> Pager<S> {
    /// Wrap `source`; nothing is fetched until the first [`Pager::advance`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: VecDeque::new(),
            current: None,
            next_token: String::new(),
            fetched: false,
            done: false,
            error: None,
            cancel: None,
        }
    }

    /// Bound fetches by `token`; cancellation ends iteration with
    /// [`ClientError::Cancelled`].
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Move to the next record, fetching a page when the current one is used up.
    ///
    /// Returns `false` once iteration is over; check [`Pager::last_error`]
    /// to tell exhaustion from failure.
    pub async fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if let Some(item) = self.buffer.pop_front() {
            self.current = Some(item);
            return true;
        }
        if self.fetched && self.next_token.is_empty() {
            self.finish(None);
            return false;
        }

        let token = self.next_token.clone();
        let result = match self.cancel.clone() {
            Some(cancel) => {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => Err(ClientError::Cancelled { operation: "fetch page" }),
                    result = self.source.fetch_page(&token) => result,
                }
            }
            None => self.source.fetch_page(&token).await,
        };

        match result {
            Err(error) => {
                tracing::debug!(error = %error, "page fetch failed");
                self.finish(Some(error));
                false
            }
            Ok(page) if page.items.is_empty() => {
                self.finish(None);
                false
            }
            Ok(page) => {
                self.fetched = true;
                self.next_token = page.next_page_token.unwrap_or_default();
                self.buffer = page.items.into();
                self.current = self.buffer.pop_front();
                true
            }
        }
    }

    /// Record at the current position, if iteration has not ended.
    #[must_use]
    pub const fn current(&self) -> Option<&S::Item> {
        self.current.as_ref()
    }

    /// Take ownership of the record at the current position.
    pub fn take_current(&mut self) -> Option<S::Item> {
        self.current.take()
    }

    /// Error that ended iteration, if any.
    #[must_use]
    pub const fn last_error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    /// Take the error that ended iteration.
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.error.take()
    }

    /// Whether iteration has ended.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Drain every remaining record.
    ///
    /// # Errors
    ///
    /// Returns the error that ended iteration, discarding records collected so far.
    pub async fn try_collect(mut self) -> ClientResult<Vec<S::Item>> {
        let mut items = Vec::new();
        while self.advance().await {
            if let Some(item) = self.take_current() {
                items.push(item);
            }
        }
        self.take_error().map_or(Ok(items), Err)
    }

    fn finish(&mut self, error: Option<ClientError>) {
        self.done = true;
        self.current = None;
        self.buffer.clear();
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Scripted {
        pages: VecDeque<ClientResult<Page<u32>>>,
        tokens: Vec<String>,
        calls: Arc<AtomicUsize>,
    }

    impl Scripted {
        fn new(pages: Vec<ClientResult<Page<u32>>>) -> Self {
            Self {
                pages: pages.into(),
                tokens: Vec::new(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl PageSource for Scripted {
        type Item = u32;

        async fn fetch_page(&mut self, token: &str) -> ClientResult<Page<u32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.tokens.push(token.to_string());
            self.pages.pop_front().unwrap_or_else(|| {
                Ok(Page {
                    items: Vec::new(),
                    next_page_token: None,
                })
            })
        }
    }

    fn page(items: &[u32], next: Option<&str>) -> ClientResult<Page<u32>> {
        Ok(Page {
            items: items.to_vec(),
            next_page_token: next.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn walks_pages_in_order_with_tokens() {
        let mut pager = Pager::new(Scripted::new(vec![
            page(&[1, 2], Some("t1")),
            page(&[3], Some("t2")),
            page(&[], None),
        ]));
        let mut seen = Vec::new();
        while pager.advance().await {
            seen.push(*pager.current().expect("current"));
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(pager.last_error().is_none());
        assert_eq!(pager.source.tokens, vec!["", "t1", "t2"]);
    }

    #[tokio::test]
    async fn stops_after_last_page_without_refetching() {
        let source = Scripted::new(vec![page(&[1], None)]);
        let calls = Arc::clone(&source.calls);
        let mut pager = Pager::new(source);
        assert!(pager.advance().await);
        assert!(!pager.advance().await);
        assert!(!pager.advance().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(pager.current().is_none());
    }

    #[tokio::test]
    async fn empty_first_page_ends_without_error() {
        let mut pager = Pager::new(Scripted::new(vec![page(&[], Some("ignored"))]));
        assert!(!pager.advance().await);
        assert!(pager.is_done());
        assert!(pager.last_error().is_none());
    }

    #[tokio::test]
    async fn error_is_terminal_and_recorded() {
        let source = Scripted::new(vec![
            page(&[7], Some("t1")),
            Err(ClientError::Status {
                operation: "find domains",
                status: 500,
                body: Bytes::new(),
            }),
            page(&[8], None),
        ]);
        let calls = Arc::clone(&source.calls);
        let mut pager = Pager::new(source);
        assert!(pager.advance().await);
        assert_eq!(pager.current(), Some(&7));
        assert!(!pager.advance().await);
        assert!(pager.current().is_none());
        assert_eq!(pager.last_error().and_then(ClientError::status), Some(500));
        assert!(!pager.advance().await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cancelled_token_ends_iteration() {
        let token = CancellationToken::new();
        token.cancel();
        let source = Scripted::new(vec![page(&[1], None)]);
        let calls = Arc::clone(&source.calls);
        let mut pager = Pager::new(source).with_cancellation(token);
        assert!(!pager.advance().await);
        assert!(pager.last_error().is_some_and(ClientError::is_cancelled));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn try_collect_surfaces_errors() {
        let items = Pager::new(Scripted::new(vec![page(&[1, 2], Some("a")), page(&[3], None)]))
            .try_collect()
            .await
            .expect("collect");
        assert_eq!(items, vec![1, 2, 3]);

        let err = Pager::new(Scripted::new(vec![
            page(&[1], Some("a")),
            Err(ClientError::Cancelled {
                operation: "find domains",
            }),
        ]))
        .try_collect()
        .await
        .expect_err("error");
        assert!(err.is_cancelled());
    }
}
