use crate::{Notification, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a search request; the result comes back as `Msg::SearchCompleted`.
    FetchStories { request_id: RequestId, query: String },
    /// Show a transient notification.
    Notify(Notification),
}
