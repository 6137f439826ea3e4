use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use hn_core::{update, AppState, Msg};
use hn_engine::SearchSettings;
use hn_logging::{hn_info, hn_warn};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::input::{self, Action};
use super::logging::{self, LogDestination};
use super::toasts::ToastQueue;
use super::ui;

const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    hn_info!("hn_app starting");

    let runner = EffectRunner::new(SearchSettings::default())?;
    let mut terminal = ratatui::init();
    let result = App::new(runner).run(&mut terminal);
    ratatui::restore();

    if let Err(err) = &result {
        hn_warn!("hn_app exited with error: {}", err);
    }
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
    toasts: ToastQueue,
    selected: Option<usize>,
    tick: u64,
    needs_render: bool,
    should_quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            toasts: ToastQueue::new(),
            selected: None,
            tick: 0,
            needs_render: true,
            should_quit: false,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        self.dispatch_msg(Msg::AppStarted);

        while !self.should_quit {
            self.pump_engine();
            if self.toasts.prune(Instant::now()) {
                self.needs_render = true;
            }
            // The spinner animates only while loading.
            if self.state.is_loading() {
                self.tick = self.tick.wrapping_add(1);
                self.needs_render = true;
            }

            if self.needs_render {
                let view = self.state.view();
                terminal.draw(|frame| {
                    ui::render::render(frame, &view, self.selected, self.toasts.visible(), self.tick)
                })?;
                self.needs_render = false;
            }

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(action) = input::map_key(key, self.state.search_term()) {
                            self.handle_action(action);
                        }
                    }
                    Event::Resize(..) => self.needs_render = true,
                    _ => {}
                }
            }
        }

        hn_info!("hn_app quitting");
        Ok(())
    }

    fn pump_engine(&mut self) {
        for msg in self.runner.poll_events() {
            self.dispatch_msg(msg);
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Dispatch(msg) => self.dispatch_msg(msg),
            Action::SelectPrevious => self.move_selection(-1),
            Action::SelectNext => self.move_selection(1),
            Action::FavoriteSelected => {
                if let Some(story) = self.selected_story().cloned() {
                    self.dispatch_msg(Msg::AddToFavorites(story));
                }
            }
            Action::OpenSelected => {
                let url = self.selected_story().and_then(|story| story.url.clone());
                if let Some(url) = url {
                    if let Err(err) = open::that(&url) {
                        hn_warn!("Could not open {}: {}", url, err);
                    }
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if !effects.is_empty() {
            self.runner.run(effects, &mut self.toasts);
            self.needs_render = true;
        }
        if state.consume_dirty() {
            self.clamp_selection(state.stories().len());
            self.needs_render = true;
        }
        self.state = state;
    }

    fn selected_story(&self) -> Option<&hn_core::Story> {
        // The list is hidden behind the spinner while loading.
        if self.state.is_loading() {
            return None;
        }
        self.selected.and_then(|index| self.state.stories().get(index))
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.state.stories().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(current) => (current as isize + delta).clamp(0, len as isize - 1) as usize,
        };
        self.selected = Some(next);
        self.needs_render = true;
    }

    fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), len) => Some(index.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use hn_core::NotificationKind;
    use hn_engine::{SearchClient, SearchError, SearchHit};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Canned hits per query; `"LLMs slow"` answers late so loading can be observed.
    struct ScriptedClient;

    #[async_trait::async_trait]
    impl SearchClient for ScriptedClient {
        async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
            let ids: &[&str] = match query {
                "LLMs" => &["a", "b", "c"],
                "LLMs one" => &["x"],
                "LLMs slow" => {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    &["s"]
                }
                _ => &[],
            };
            Ok(ids
                .iter()
                .map(|id| SearchHit {
                    object_id: id.to_string(),
                    title: Some(format!("story {id}")),
                    author: None,
                    url: None,
                })
                .collect())
        }
    }

    fn started_app() -> App {
        let runner = EffectRunner::with_client(Arc::new(ScriptedClient)).expect("runner");
        let mut app = App::new(runner);
        app.dispatch_msg(Msg::AppStarted);
        wait_until_idle(&mut app);
        app
    }

    fn wait_until_idle(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.state.is_loading() && Instant::now() < deadline {
            app.pump_engine();
            thread::sleep(Duration::from_millis(10));
        }
        assert!(!app.state.is_loading(), "request never completed");
    }

    fn search(app: &mut App, term: &str) {
        app.dispatch_msg(Msg::SearchInputChanged(term.to_string()));
        app.dispatch_msg(Msg::SearchSubmitted);
    }

    fn toast_kinds(app: &App) -> Vec<NotificationKind> {
        app.toasts.visible().map(|n| n.kind).collect()
    }

    #[test]
    fn first_load_selects_the_top_story() {
        let app = started_app();

        assert_eq!(app.state.stories().len(), 3);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn favorite_key_adds_selected_story_once() {
        let mut app = started_app();
        app.handle_action(Action::SelectNext);

        app.handle_action(Action::FavoriteSelected);
        app.handle_action(Action::FavoriteSelected);

        let favorites: Vec<&str> = app
            .state
            .favorites()
            .iter()
            .map(|s| s.object_id.as_str())
            .collect();
        assert_eq!(favorites, vec!["b"]);
        assert_eq!(
            toast_kinds(&app),
            vec![
                NotificationKind::FavoriteAdded,
                NotificationKind::AlreadyFavorite
            ]
        );
    }

    #[test]
    fn favorite_key_does_nothing_while_loading() {
        let mut app = started_app();
        search(&mut app, "slow");
        assert!(app.state.is_loading());

        app.handle_action(Action::FavoriteSelected);

        assert!(app.state.favorites().is_empty());
        assert!(toast_kinds(&app).is_empty());
        wait_until_idle(&mut app);
    }

    #[test]
    fn selection_clamps_to_shorter_results_and_clears_on_empty() {
        let mut app = started_app();
        app.handle_action(Action::SelectNext);
        app.handle_action(Action::SelectNext);
        app.handle_action(Action::SelectNext);
        assert_eq!(app.selected, Some(2));

        search(&mut app, "one");
        wait_until_idle(&mut app);
        assert_eq!(app.selected, Some(0));

        search(&mut app, "none");
        wait_until_idle(&mut app);
        assert!(app.state.stories().is_empty());
        assert_eq!(app.selected, None);

        app.handle_action(Action::SelectNext);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn first_move_from_no_selection_lands_on_top_row() {
        let mut app = started_app();
        app.selected = None;

        app.handle_action(Action::SelectNext);
        assert_eq!(app.selected, Some(0));

        app.handle_action(Action::SelectPrevious);
        assert_eq!(app.selected, Some(0));
    }
}
