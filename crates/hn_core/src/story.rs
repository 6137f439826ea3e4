/// A search hit as the rest of the app sees it.
///
/// Only `object_id` is required; the API returns `null` for some titles and
/// urls (Ask HN posts have no url).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Story {
    pub object_id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
}

impl Story {
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
