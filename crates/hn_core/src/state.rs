use crate::view_model::{AppViewModel, StoryRowView};
use crate::Story;

pub type RequestId = u64;

/// Topic every query is anchored to.
pub const DEFAULT_TOPIC: &str = "LLMs";

/// Which user action issued a request; selects the error notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    DefaultLoad,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRequest {
    id: RequestId,
    kind: RequestKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    topic: String,
    stories: Vec<Story>,
    favorites: Vec<Story>,
    search_term: String,
    last_request_id: RequestId,
    pending: Option<PendingRequest>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_topic(DEFAULT_TOPIC)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            stories: Vec::new(),
            favorites: Vec::new(),
            search_term: String::new(),
            last_request_id: 0,
            pending: None,
            dirty: false,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn favorites(&self) -> &[Story] {
        &self.favorites
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// True while the most recently issued request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_favorite(&self, object_id: &str) -> bool {
        self.favorites.iter().any(|fav| fav.object_id == object_id)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            topic: self.topic.clone(),
            search_term: self.search_term.clone(),
            loading: self.is_loading(),
            stories: self
                .stories
                .iter()
                .map(|story| StoryRowView {
                    story: story.clone(),
                    is_favorite: self.is_favorite(&story.object_id),
                })
                .collect(),
            favorite_count: self.favorites.len(),
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.search_term != term {
            self.search_term = term;
            self.dirty = true;
        }
    }

    /// Query sent for `kind`: the bare topic, or topic, a space and the raw term.
    pub(crate) fn query_for(&self, kind: RequestKind) -> String {
        match kind {
            RequestKind::DefaultLoad => self.topic.clone(),
            RequestKind::Search => format!("{} {}", self.topic, self.search_term),
        }
    }

    /// Allocates a fresh id; any request still pending becomes stale.
    pub(crate) fn begin_request(&mut self, kind: RequestKind) -> RequestId {
        self.last_request_id += 1;
        let id = self.last_request_id;
        self.pending = Some(PendingRequest { id, kind });
        self.dirty = true;
        id
    }

    /// Closes the pending request if `id` is current, returning its kind.
    /// Stale ids yield `None` and leave the state untouched.
    pub(crate) fn finish_request(&mut self, id: RequestId) -> Option<RequestKind> {
        match self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                self.dirty = true;
                Some(pending.kind)
            }
            _ => None,
        }
    }

    pub(crate) fn replace_stories(&mut self, stories: Vec<Story>) {
        self.stories = stories;
        self.dirty = true;
    }

    /// Appends `story` unless its id is already present. Returns whether it was added.
    pub(crate) fn insert_favorite(&mut self, story: Story) -> bool {
        if self.is_favorite(&story.object_id) {
            return false;
        }
        self.favorites.push(story);
        self.dirty = true;
        true
    }
}
