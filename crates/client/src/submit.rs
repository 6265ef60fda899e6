//! Post submitter: owns the draft, posts it, and flashes a success banner.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use gratitude_shared::{format_hashtags, NewPost, Post, ANONYMOUS_AUTHOR};

use crate::api_client::PostsApi;
use crate::config::AuthorPolicy;
use crate::error::{MissingField, SubmitError};
use crate::feed::FeedController;
use crate::{log_debug, log_error, log_info, timer};

/// Values of the unsubmitted post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub author: String,
    pub message: String,
    /// Raw comma-separated tags as typed.
    pub hashtags: String,
    /// College label, empty when none is selected.
    pub college: String,
}

impl FormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the request body, or name the first required field that is blank.
    pub fn to_new_post(&self, policy: AuthorPolicy) -> Result<NewPost, MissingField> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(MissingField::Message);
        }

        let author = self.author.trim();
        let author = match (author.is_empty(), policy) {
            (false, _) => author.to_string(),
            (true, AuthorPolicy::Optional) => ANONYMOUS_AUTHOR.to_string(),
            (true, AuthorPolicy::Required) => return Err(MissingField::Author),
        };

        Ok(NewPost {
            author,
            message: message.to_string(),
            hashtags: format_hashtags(&self.hashtags),
            college: (!self.college.is_empty()).then(|| self.college.clone()),
        })
    }
}

/// Identifies one raise of the success flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTicket(u64);

/// The transient "posted" banner. Only the most recent raise can clear it.
#[derive(Debug)]
pub struct SuccessFlash {
    window: Duration,
    generation: Cell<u64>,
    visible: Cell<bool>,
}

impl SuccessFlash {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Cell::new(0),
            visible: Cell::new(false),
        }
    }

    pub fn raise(&self) -> FlashTicket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        self.visible.set(true);
        FlashTicket(next)
    }

    /// Hide the banner if `ticket` is still the latest raise.
    pub fn dismiss(&self, ticket: FlashTicket) -> bool {
        if self.generation.get() != ticket.0 {
            return false;
        }
        self.visible.set(false);
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// What the view mirrors from the submitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitStatus {
    pub draft: FormState,
    pub submitting: bool,
    pub success_visible: bool,
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    /// Echo of the created post, when the backend sent one.
    pub created: Option<Post>,
    /// Pass to [`PostSubmitter::dismiss_after`] to expire the banner.
    pub ticket: FlashTicket,
    /// Whether the follow-up feed refresh succeeded.
    pub refreshed: bool,
}

type StatusObserver = Box<dyn Fn(&SubmitStatus)>;

pub struct PostSubmitter {
    policy: AuthorPolicy,
    draft: RefCell<FormState>,
    submitting: Cell<bool>,
    flash: SuccessFlash,
    observer: RefCell<Option<StatusObserver>>,
}

impl PostSubmitter {
    pub fn new(policy: AuthorPolicy, banner_duration: Duration) -> Self {
        Self {
            policy,
            draft: RefCell::new(FormState::default()),
            submitting: Cell::new(false),
            flash: SuccessFlash::new(banner_duration),
            observer: RefCell::new(None),
        }
    }

    pub fn policy(&self) -> AuthorPolicy {
        self.policy
    }

    pub fn set_observer(&self, observer: impl Fn(&SubmitStatus) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn close(&self) {
        self.observer.borrow_mut().take();
    }

    pub fn status(&self) -> SubmitStatus {
        SubmitStatus {
            draft: self.draft.borrow().clone(),
            submitting: self.submitting.get(),
            success_visible: self.flash.is_visible(),
        }
    }

    pub fn draft(&self) -> FormState {
        self.draft.borrow().clone()
    }

    /// Change the draft in place.
    pub fn edit(&self, change: impl FnOnce(&mut FormState)) {
        change(&mut self.draft.borrow_mut());
        self.notify();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn is_success_visible(&self) -> bool {
        self.flash.is_visible()
    }

    /// Post the current draft.
    ///
    /// On success the draft is cleared, the banner is raised and page 1 of
    /// `feed` is reloaded. On failure the draft is kept.
    pub async fn submit<A: PostsApi>(
        &self,
        feed: &FeedController<A>,
    ) -> Result<Submitted, SubmitError> {
        if self.submitting.get() {
            return Err(SubmitError::InFlight);
        }
        let post = self.draft.borrow().to_new_post(self.policy).map_err(|field| {
            log_debug!("not submitting: {field} is blank");
            SubmitError::Incomplete(field)
        })?;

        self.submitting.set(true);
        self.notify();

        let result = feed.api().create_post(&post).await;
        self.submitting.set(false);

        let created = match result {
            Ok(created) => created,
            Err(e) => {
                log_error!("failed to submit post: {}", e.summary());
                self.notify();
                return Err(SubmitError::Api(e));
            }
        };

        log_info!("posted gratitude from {}", post.author);
        self.draft.borrow_mut().clear();
        let ticket = self.flash.raise();
        self.notify();

        let refreshed = feed.load(1).await.is_ok();
        Ok(Submitted {
            created,
            ticket,
            refreshed,
        })
    }

    /// Wait out the banner window, then hide it unless a newer post raised it again.
    pub async fn dismiss_after(&self, ticket: FlashTicket) -> bool {
        timer::sleep(self.flash.window()).await;
        let dismissed = self.flash.dismiss(ticket);
        if dismissed {
            self.notify();
        }
        dismissed
    }

    fn notify(&self) {
        let status = self.status();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&status);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gratitude_shared::ApiError;

    use super::*;
    use crate::config::Pagination;
    use crate::testing::{post, posts, ScriptedApi};

    const BANNER: Duration = Duration::from_secs(3);

    fn feed(api: ScriptedApi) -> FeedController<ScriptedApi> {
        FeedController::new(api, Pagination::Paged { limit: 10 })
    }

    fn filled(submitter: &PostSubmitter) {
        submitter.edit(|f| {
            f.author = "  HuskyHockey ".into();
            f.message = "Cheering at Matthews Arena always brightens my day.".into();
            f.hashtags = "HowlinHuskies, #GoNU ,".into();
            f.college = "College of Science".into();
        });
    }

    #[test]
    fn payload_formats_tags_and_trims_author() {
        let form = FormState {
            author: " LibraryLover ".into(),
            message: "Snell is open 24/7".into(),
            hashtags: "grateful, #husky ,  ,northeastern".into(),
            college: String::new(),
        };
        let post = form.to_new_post(AuthorPolicy::Optional).unwrap();
        assert_eq!(post.author, "LibraryLover");
        assert_eq!(post.hashtags, "#grateful #husky #northeastern");
        assert_eq!(post.college, None);
    }

    #[test]
    fn blank_author_depends_on_policy() {
        let form = FormState {
            message: "Thanks, NU!".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_new_post(AuthorPolicy::Optional).unwrap().author,
            ANONYMOUS_AUTHOR
        );
        assert_eq!(
            form.to_new_post(AuthorPolicy::Required),
            Err(MissingField::Author)
        );
        assert_eq!(
            FormState::default().to_new_post(AuthorPolicy::Optional),
            Err(MissingField::Message)
        );
    }

    #[tokio::test]
    async fn success_clears_draft_raises_flash_and_refreshes() {
        let created = post("new-1");
        let feed = feed(
            ScriptedApi::new()
                .page(1, vec![created.clone()])
                .create_response(Ok(Some(created.clone()))),
        );
        let submitter = PostSubmitter::new(AuthorPolicy::Optional, BANNER);
        filled(&submitter);

        let submitted = submitter.submit(&feed).await.unwrap();

        assert_eq!(submitted.created, Some(created));
        assert!(submitted.refreshed);
        assert_eq!(submitter.draft(), FormState::default());
        assert!(submitter.is_success_visible());
        assert!(!submitter.is_submitting());

        let sent = feed.api().created.borrow().clone();
        assert_eq!(
            sent,
            [NewPost {
                author: "HuskyHockey".into(),
                message: "Cheering at Matthews Arena always brightens my day.".into(),
                hashtags: "#HowlinHuskies #GoNU".into(),
                college: Some("College of Science".into()),
            }]
        );
        assert_eq!(feed.snapshot().posts.len(), 1);
        assert_eq!(feed.api().page_calls.borrow()[0].page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn flash_clears_after_the_window() {
        let feed = feed(ScriptedApi::new().page(1, posts("p1", 3)));
        let submitter = PostSubmitter::new(AuthorPolicy::Optional, BANNER);
        filled(&submitter);

        let submitted = submitter.submit(&feed).await.unwrap();
        assert!(submitter.is_success_visible());

        let mut dismiss = std::pin::pin!(submitter.dismiss_after(submitted.ticket));
        assert!(futures_util::poll!(dismiss.as_mut()).is_pending());

        tokio::time::advance(Duration::from_millis(2_999)).await;
        assert!(futures_util::poll!(dismiss.as_mut()).is_pending());
        assert!(submitter.is_success_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(dismiss.await);
        assert!(!submitter.is_success_visible());
    }

    #[test]
    fn older_ticket_does_not_hide_a_newer_flash() {
        let flash = SuccessFlash::new(BANNER);
        let first = flash.raise();
        let second = flash.raise();

        assert!(!flash.dismiss(first));
        assert!(flash.is_visible());
        assert!(flash.dismiss(second));
        assert!(!flash.is_visible());
    }

    #[tokio::test]
    async fn failure_keeps_draft_and_never_flashes() {
        let feed = feed(ScriptedApi::new().create_response(Err(ApiError::Http {
            status: 500,
            body: "boom".into(),
        })));
        let submitter = PostSubmitter::new(AuthorPolicy::Optional, BANNER);
        filled(&submitter);
        let before = submitter.draft();

        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        submitter.set_observer(move |s| sink.borrow_mut().push(s.success_visible));

        let err = submitter.submit(&feed).await.unwrap_err();

        assert!(matches!(err, SubmitError::Api(ApiError::Http { status: 500, .. })));
        assert_eq!(submitter.draft(), before);
        assert!(!submitter.is_success_visible());
        assert!(!submitter.is_submitting());
        assert!(seen.borrow().iter().all(|visible| !visible));
        assert!(feed.api().page_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn network_failure_keeps_draft() {
        let feed = feed(
            ScriptedApi::new().create_response(Err(ApiError::Network("offline".into()))),
        );
        let submitter = PostSubmitter::new(AuthorPolicy::Optional, BANNER);
        filled(&submitter);
        let before = submitter.draft();

        assert!(submitter.submit(&feed).await.is_err());
        assert_eq!(submitter.draft(), before);
        assert!(!submitter.is_success_visible());
    }

    #[tokio::test]
    async fn incomplete_draft_is_not_sent() {
        let feed = feed(ScriptedApi::new());
        let submitter = PostSubmitter::new(AuthorPolicy::Required, BANNER);
        submitter.edit(|f| f.message = "Grateful for co-op".into());

        assert_eq!(
            submitter.submit(&feed).await.unwrap_err(),
            SubmitError::Incomplete(MissingField::Author)
        );
        assert!(feed.api().created.borrow().is_empty());
        assert_eq!(submitter.draft().message, "Grateful for co-op");
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_refused() {
        let feed = feed(ScriptedApi::new().page(1, posts("p1", 1)));
        let submitter = PostSubmitter::new(AuthorPolicy::Optional, BANNER);
        filled(&submitter);

        let (a, b) = tokio::join!(submitter.submit(&feed), submitter.submit(&feed));

        let refused = [&a, &b]
            .iter()
            .filter(|r| matches!(r, Err(SubmitError::InFlight)))
            .count();
        assert_eq!(refused, 1);
        assert!(a.is_ok() || b.is_ok());
        assert_eq!(feed.api().created.borrow().len(), 1);
    }
}
