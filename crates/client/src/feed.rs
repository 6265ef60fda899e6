//! Feed controller: the in-memory post list and its page cursor.
//!
//! All state lives in `RefCell`s and no borrow survives an `.await`, which
//! makes the in-flight guards safe on the single-threaded UI executor: they
//! are checked and set before the request future is first polled.

use std::cell::RefCell;
use std::time::Duration;

use gratitude_shared::{ApiError, Post, PostsQuery};

use crate::api_client::PostsApi;
use crate::config::Pagination;
use crate::error::FeedError;
use crate::timer;
use crate::{log_debug, log_error};

/// Read-only copy of the feed state, handed to the view.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub posts: Vec<Post>,
    /// Last page successfully loaded.
    pub page: u32,
    pub has_more: bool,
    pub loading_more: bool,
    /// A page-1 load is in flight.
    pub refreshing: bool,
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            page: 1,
            has_more: true,
            loading_more: false,
            refreshing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The last page came back short.
    Exhausted,
    /// Another load-more is still running.
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { page: u32, received: usize },
    /// No request was made.
    Skipped(SkipReason),
    /// The response arrived after a newer refresh started, after a refresh
    /// moved the cursor under a pending append, or after the controller was
    /// closed, and was dropped.
    Discarded,
}

type Observer = Box<dyn Fn(&FeedSnapshot)>;

/// Where the feed stood when a request left.
#[derive(Debug, Clone, Copy)]
struct Issued {
    generation: u64,
    cursor: u32,
}

struct FeedState {
    posts: Vec<Post>,
    page: u32,
    has_more: bool,
    loading_more: bool,
    refreshing: usize,
    /// Bumped by every page-1 load; responses from older generations are stale.
    generation: u64,
    closed: bool,
}

impl FeedState {
    fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            posts: self.posts.clone(),
            page: self.page,
            has_more: self.has_more,
            loading_more: self.loading_more,
            refreshing: self.refreshing > 0,
        }
    }
}

pub struct FeedController<A> {
    api: A,
    pagination: Pagination,
    state: RefCell<FeedState>,
    observer: RefCell<Option<Observer>>,
}

impl<A: PostsApi> FeedController<A> {
    pub fn new(api: A, pagination: Pagination) -> Self {
        Self {
            api,
            pagination,
            state: RefCell::new(FeedState {
                posts: Vec::new(),
                page: 1,
                has_more: true,
                loading_more: false,
                refreshing: 0,
                generation: 0,
                closed: false,
            }),
            observer: RefCell::new(None),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Called with a fresh snapshot after every state change.
    pub fn set_observer(&self, observer: impl Fn(&FeedSnapshot) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn has_more(&self) -> bool {
        self.state.borrow().has_more
    }

    pub fn is_loading_more(&self) -> bool {
        self.state.borrow().loading_more
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }

    /// Detach from the view. Responses that arrive later are dropped and the
    /// observer is never called again.
    pub fn close(&self) {
        self.state.borrow_mut().closed = true;
        self.observer.borrow_mut().take();
    }

    /// Fetch `page`. Page 1 replaces the list; later pages append.
    ///
    /// On failure the list and cursor are left as they were.
    pub async fn load(&self, page: u32) -> Result<LoadOutcome, FeedError> {
        if page == 0 {
            return Err(FeedError::InvalidPage);
        }

        let issued = {
            let mut state = self.state.borrow_mut();
            if state.closed {
                return Ok(LoadOutcome::Discarded);
            }
            if page == 1 {
                state.generation += 1;
                state.refreshing += 1;
            }
            Issued {
                generation: state.generation,
                cursor: state.page,
            }
        };
        self.notify();

        let result = self.fetch(page).await;

        if page == 1 {
            let mut state = self.state.borrow_mut();
            state.refreshing = state.refreshing.saturating_sub(1);
        }
        self.finish(page, issued, result)
    }

    /// Fetch the page after the cursor and append it.
    ///
    /// At most one load-more runs at a time; overlapping calls return
    /// [`LoadOutcome::Skipped`] without touching the network.
    pub async fn load_more(&self) -> Result<LoadOutcome, FeedError> {
        let (next, issued) = {
            let mut state = self.state.borrow_mut();
            if state.closed {
                return Ok(LoadOutcome::Discarded);
            }
            if !state.has_more {
                return Ok(LoadOutcome::Skipped(SkipReason::Exhausted));
            }
            if state.loading_more {
                return Ok(LoadOutcome::Skipped(SkipReason::InFlight));
            }
            state.loading_more = true;
            let issued = Issued {
                generation: state.generation,
                cursor: state.page,
            };
            (state.page + 1, issued)
        };
        self.notify();

        let result = self.fetch(next).await;

        self.state.borrow_mut().loading_more = false;
        self.finish(next, issued, result)
    }

    async fn fetch(&self, page: u32) -> Result<Vec<Post>, ApiError> {
        match self.pagination {
            Pagination::Paged { limit } => {
                self.api
                    .fetch_page(PostsQuery::page(page).with_limit(limit))
                    .await
            }
            Pagination::Unpaged => self.api.fetch_all().await,
        }
    }

    fn finish(
        &self,
        page: u32,
        issued: Issued,
        result: Result<Vec<Post>, ApiError>,
    ) -> Result<LoadOutcome, FeedError> {
        let outcome = match result {
            Err(e) => {
                log_error!("failed to load page {page}: {}", e.summary());
                Err(FeedError::Api(e))
            }
            Ok(posts) => {
                let mut state = self.state.borrow_mut();
                // An append is only valid on top of the cursor it was issued
                // against; a refresh that landed in between moved it.
                let cursor_moved = page > 1 && state.page != issued.cursor;
                if state.closed || state.generation != issued.generation || cursor_moved {
                    log_debug!("dropping stale response for page {page}");
                    Ok(LoadOutcome::Discarded)
                } else {
                    let received = posts.len();
                    match self.pagination {
                        Pagination::Paged { limit } => {
                            if page == 1 {
                                state.posts = posts;
                            } else {
                                state.posts.extend(posts);
                            }
                            state.has_more = received >= limit;
                        }
                        Pagination::Unpaged => {
                            state.posts = posts;
                            state.has_more = false;
                        }
                    }
                    state.page = page;
                    log_debug!(
                        "loaded page {page}: {received} posts, {} total",
                        state.posts.len()
                    );
                    Ok(LoadOutcome::Loaded { page, received })
                }
            }
        };
        self.notify();
        outcome
    }

    fn notify(&self) {
        let snapshot = {
            let state = self.state.borrow();
            if state.closed {
                return;
            }
            state.snapshot()
        };
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }
}

/// Load page 1 now, then keep reloading it every `interval` when one is set.
///
/// Returns once the first load is done if polling is off, otherwise when the
/// controller is closed.
pub async fn keep_fresh<A: PostsApi>(feed: &FeedController<A>, interval: Option<Duration>) {
    if let Err(e) = feed.load(1).await {
        log_debug!("initial load failed: {e}");
    }
    if let Some(every) = interval {
        refresh_every(feed, every).await;
    }
}

/// Reload page 1 every `every` until the controller is closed.
///
/// The first reload happens one full interval after the call.
pub async fn refresh_every<A: PostsApi>(feed: &FeedController<A>, every: Duration) {
    loop {
        timer::sleep(every).await;
        if feed.is_closed() {
            return;
        }
        if let Err(e) = feed.load(1).await {
            log_debug!("periodic refresh failed: {e}");
        }
    }
}
