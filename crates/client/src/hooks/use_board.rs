//! Board context: the feed and submitter controllers plus the signals that
//! mirror them.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::config::{AuthorPolicy, BoardConfig};
use crate::feed::{self, FeedController, FeedSnapshot};
use crate::submit::{FormState, PostSubmitter, SubmitStatus};
use crate::{log_debug, log_info};

/// Shared with every board component through the context API.
///
/// The controllers own the state; `feed` and `status` are read-only mirrors
/// refreshed by the controllers' observers.
#[derive(Clone)]
pub struct BoardContext {
    feed_controller: Rc<FeedController<ApiClient>>,
    submitter: Rc<PostSubmitter>,
    pub feed: Signal<FeedSnapshot>,
    pub status: Signal<SubmitStatus>,
}

impl BoardContext {
    pub fn author_policy(&self) -> AuthorPolicy {
        self.submitter.policy()
    }

    /// Append the next page in the background. Ignored while one is running.
    pub fn load_more(&self) {
        let feed = self.feed_controller.clone();
        spawn(async move {
            match feed.load_more().await {
                Ok(outcome) => log_debug!("load more: {outcome:?}"),
                Err(e) => log_debug!("load more failed: {e}"),
            }
        });
    }

    pub fn edit(&self, change: impl FnOnce(&mut FormState)) {
        self.submitter.edit(change);
    }

    /// Post the draft, then keep the banner up for its window.
    pub fn submit(&self) {
        let feed = self.feed_controller.clone();
        let submitter = self.submitter.clone();
        spawn(async move {
            match submitter.submit(&feed).await {
                Ok(submitted) => {
                    submitter.dismiss_after(submitted.ticket).await;
                }
                Err(e) => log_debug!("submit not completed: {e}"),
            }
        });
    }
}

/// Create the board controllers, provide them as context, and run
/// [`feed::keep_fresh`] for the initial load and, when configured, the
/// periodic refresh.
///
/// Everything started here belongs to the calling component and stops when it
/// unmounts.
pub fn use_board_provider(config: BoardConfig) -> BoardContext {
    let feed = use_signal(FeedSnapshot::default);
    let status = use_signal(SubmitStatus::default);

    let board = use_context_provider(|| {
        log_info!("board backend: {}", config.api_base);
        let client = ApiClient::new().with_base_url(config.api_base.clone());

        let feed_controller = Rc::new(FeedController::new(client, config.pagination));
        feed_controller.set_observer(move |snapshot| {
            let mut feed = feed;
            feed.set(snapshot.clone());
        });

        let submitter = Rc::new(PostSubmitter::new(
            config.author_policy,
            config.banner_duration,
        ));
        submitter.set_observer(move |next| {
            let mut status = status;
            status.set(next.clone());
        });

        BoardContext {
            feed_controller,
            submitter,
            feed,
            status,
        }
    });

    let interval = config.refresh_interval;
    let poller = board.clone();
    use_future(move || {
        let controller = poller.feed_controller.clone();
        async move { feed::keep_fresh(&*controller, interval).await }
    });

    let closing = board.clone();
    use_drop(move || {
        closing.feed_controller.close();
        closing.submitter.close();
    });

    board
}
