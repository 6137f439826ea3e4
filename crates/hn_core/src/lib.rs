//! hn core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod notification;
mod state;
mod story;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, SearchOutcome};
pub use notification::{Notification, NotificationKind, NotificationStatus};
pub use state::{AppState, RequestId, RequestKind, DEFAULT_TOPIC};
pub use story::Story;
pub use update::update;
pub use view_model::{AppViewModel, StoryRowView};
