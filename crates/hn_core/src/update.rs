use crate::{AppState, Effect, Msg, Notification, RequestKind, SearchOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted => vec![issue_request(&mut state, RequestKind::DefaultLoad)],
        Msg::SearchInputChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::SearchSubmitted => vec![issue_request(&mut state, RequestKind::Search)],
        Msg::SearchCompleted {
            request_id,
            outcome,
        } => {
            // Superseded requests are dropped whole: no stories, no toast.
            let Some(kind) = state.finish_request(request_id) else {
                return (state, Vec::new());
            };
            match outcome {
                SearchOutcome::Loaded(stories) => {
                    state.replace_stories(stories);
                    Vec::new()
                }
                SearchOutcome::Failed(message) => {
                    let notification = match kind {
                        RequestKind::DefaultLoad => Notification::fetch_error(message),
                        RequestKind::Search => Notification::search_error(message),
                    };
                    vec![Effect::Notify(notification)]
                }
            }
        }
        Msg::AddToFavorites(story) => {
            let notification = if state.insert_favorite(story) {
                Notification::favorite_added()
            } else {
                Notification::already_favorite()
            };
            vec![Effect::Notify(notification)]
        }
    };

    (state, effects)
}

fn issue_request(state: &mut AppState, kind: RequestKind) -> Effect {
    let query = state.query_for(kind);
    let request_id = state.begin_request(kind);
    Effect::FetchStories { request_id, query }
}
