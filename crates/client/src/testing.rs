//! Scripted [`PostsApi`] used by the controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use gratitude_shared::{ApiError, NewPost, Post, PostsQuery};

use crate::api_client::PostsApi;

pub fn post(id: impl Into<String>) -> Post {
    let id = id.into();
    Post {
        message: format!("grateful for #{id}"),
        id,
        author: "HuskyFan22".to_string(),
        hashtags: None,
        college: None,
        created_at: None,
    }
}

/// `count` posts with ids `{prefix}-0 .. {prefix}-{count-1}`.
pub fn posts(prefix: &str, count: usize) -> Vec<Post> {
    (0..count).map(|i| post(format!("{prefix}-{i}"))).collect()
}

/// Answers are fixed per page. Every call yields once before answering so
/// overlapping calls really overlap.
#[derive(Default)]
pub struct ScriptedApi {
    pages: RefCell<HashMap<u32, Result<Vec<Post>, ApiError>>>,
    all: RefCell<Vec<Post>>,
    create_responses: RefCell<VecDeque<Result<Option<Post>, ApiError>>>,
    pub page_calls: RefCell<Vec<PostsQuery>>,
    pub all_calls: Cell<usize>,
    pub created: RefCell<Vec<NewPost>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, page: u32, posts: Vec<Post>) -> Self {
        self.pages.borrow_mut().insert(page, Ok(posts));
        self
    }

    pub fn failing_page(self, page: u32, error: ApiError) -> Self {
        self.pages.borrow_mut().insert(page, Err(error));
        self
    }

    pub fn all(self, posts: Vec<Post>) -> Self {
        *self.all.borrow_mut() = posts;
        self
    }

    pub fn create_response(self, response: Result<Option<Post>, ApiError>) -> Self {
        self.create_responses.borrow_mut().push_back(response);
        self
    }

    /// Replace what `page` answers from now on.
    pub fn set_page(&self, page: u32, posts: Vec<Post>) {
        self.set_page_result(page, Ok(posts));
    }

    pub fn set_page_result(&self, page: u32, result: Result<Vec<Post>, ApiError>) {
        self.pages.borrow_mut().insert(page, result);
    }

    pub fn call_count(&self) -> usize {
        self.page_calls.borrow().len() + self.all_calls.get()
    }
}

#[async_trait(?Send)]
impl PostsApi for ScriptedApi {
    async fn fetch_page(&self, query: PostsQuery) -> Result<Vec<Post>, ApiError> {
        self.page_calls.borrow_mut().push(query);
        let answer = self
            .pages
            .borrow()
            .get(&query.page)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()));
        tokio::task::yield_now().await;
        answer
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, ApiError> {
        self.all_calls.set(self.all_calls.get() + 1);
        let answer = self.all.borrow().clone();
        tokio::task::yield_now().await;
        Ok(answer)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Option<Post>, ApiError> {
        self.created.borrow_mut().push(post.clone());
        let answer = self
            .create_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(None));
        tokio::task::yield_now().await;
        answer
    }
}
