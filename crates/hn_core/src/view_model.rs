use crate::Story;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub topic: String,
    pub search_term: String,
    pub loading: bool,
    pub stories: Vec<StoryRowView>,
    pub favorite_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowView {
    pub story: Story,
    pub is_favorite: bool,
}
