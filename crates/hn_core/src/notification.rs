use std::time::Duration;

const ERROR_DURATION: Duration = Duration::from_secs(9);
const FAVORITE_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    FetchError,
    SearchError,
    FavoriteAdded,
    AlreadyFavorite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Error,
    Success,
    Info,
}

/// A toast: shown by the platform, dismissed after `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: Option<String>,
    pub status: NotificationStatus,
    pub duration: Duration,
}

impl Notification {
    pub fn fetch_error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::FetchError,
            title: "Error fetching stories",
            description: Some(message.into()),
            status: NotificationStatus::Error,
            duration: ERROR_DURATION,
        }
    }

    pub fn search_error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::SearchError,
            title: "Error searching stories",
            description: Some(message.into()),
            status: NotificationStatus::Error,
            duration: ERROR_DURATION,
        }
    }

    pub fn favorite_added() -> Self {
        Self {
            kind: NotificationKind::FavoriteAdded,
            title: "Added to Favorites",
            description: None,
            status: NotificationStatus::Success,
            duration: FAVORITE_DURATION,
        }
    }

    pub fn already_favorite() -> Self {
        Self {
            kind: NotificationKind::AlreadyFavorite,
            title: "Already in Favorites",
            description: None,
            status: NotificationStatus::Info,
            duration: FAVORITE_DURATION,
        }
    }
}
