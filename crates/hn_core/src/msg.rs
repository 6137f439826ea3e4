use crate::{RequestId, Story};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished starting up; triggers the default topic query.
    AppStarted,
    /// User edited the search box.
    SearchInputChanged(String),
    /// User asked to search with the current search term.
    SearchSubmitted,
    /// Engine finished a request.
    SearchCompleted {
        request_id: RequestId,
        outcome: SearchOutcome,
    },
    /// User clicked the heart on a story.
    AddToFavorites(Story),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Loaded(Vec<Story>),
    /// Transport, status or decode failure, carrying the raw message.
    Failed(String),
}
