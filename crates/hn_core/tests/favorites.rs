use std::sync::Once;

use hn_core::{
    update, AppState, Effect, Msg, NotificationKind, NotificationStatus, SearchOutcome, Story,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hn_logging::initialize_for_tests);
}

fn add(state: AppState, story: Story) -> (AppState, NotificationKind) {
    let (state, effects) = update(state, Msg::AddToFavorites(story));
    match effects.as_slice() {
        [Effect::Notify(notification)] => (state, notification.kind),
        other => panic!("expected one notification, got {other:?}"),
    }
}

#[test]
fn adding_twice_keeps_one_entry() {
    init_logging();
    let story = Story::new("1").with_title("LLMs are cool");

    let (state, first) = add(AppState::new(), story.clone());
    assert_eq!(first, NotificationKind::FavoriteAdded);

    let (state, second) = add(state, story.clone());
    assert_eq!(second, NotificationKind::AlreadyFavorite);
    assert_eq!(state.favorites(), &[story]);
}

#[test]
fn duplicate_keeps_first_story_and_state() {
    init_logging();
    let original = Story::new("7").with_title("first");
    let (state, _) = add(AppState::new(), original.clone());
    let before = state.clone();

    let (state, kind) = add(state, Story::new("7").with_title("renamed"));

    assert_eq!(kind, NotificationKind::AlreadyFavorite);
    assert_eq!(state, before);
    assert_eq!(state.favorites()[0], original);
}

#[test]
fn repeated_ids_dedupe_in_insertion_order() {
    init_logging();
    let ids = ["a", "b", "a", "c", "b", "b", "d", "a"];
    let mut state = AppState::new();
    for (i, id) in ids.iter().enumerate() {
        let story = Story::new(*id).with_title(format!("take {i}"));
        state = add(state, story).0;
    }

    let favorites: Vec<(&str, Option<&str>)> = state
        .favorites()
        .iter()
        .map(|s| (s.object_id.as_str(), s.title.as_deref()))
        .collect();
    assert_eq!(
        favorites,
        vec![
            ("a", Some("take 0")),
            ("b", Some("take 1")),
            ("c", Some("take 3")),
            ("d", Some("take 6")),
        ]
    );
}

#[test]
fn notification_statuses_match_outcome() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::AddToFavorites(Story::new("1")));
    let Effect::Notify(added) = &effects[0] else {
        panic!("expected notification");
    };
    assert_eq!(added.status, NotificationStatus::Success);
    assert_eq!(added.title, "Added to Favorites");

    let (_state, effects) = update(state, Msg::AddToFavorites(Story::new("1")));
    let Effect::Notify(present) = &effects[0] else {
        panic!("expected notification");
    };
    assert_eq!(present.status, NotificationStatus::Info);
    assert_eq!(present.title, "Already in Favorites");
}

#[test]
fn favorites_survive_new_results_and_mark_rows() {
    init_logging();
    let (state, _) = add(AppState::new(), Story::new("2"));
    let (state, effects) = update(state, Msg::AppStarted);
    let Effect::FetchStories { request_id, .. } = effects[0].clone() else {
        panic!("expected fetch");
    };
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            outcome: SearchOutcome::Loaded(vec![Story::new("1"), Story::new("2")]),
        },
    );

    let view = state.view();
    assert_eq!(view.favorite_count, 1);
    let marks: Vec<bool> = view.stories.iter().map(|row| row.is_favorite).collect();
    assert_eq!(marks, vec![false, true]);
}
