use hn_core::{AppViewModel, Notification, NotificationStatus, StoryRowView};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::constants::*;
use super::layout;

/// Draws one frame. `selected` indexes `view.stories`; `tick` drives the spinner.
pub fn render<'a>(
    frame: &mut Frame,
    view: &AppViewModel,
    selected: Option<usize>,
    toasts: impl Iterator<Item = &'a Notification>,
    tick: u64,
) {
    let areas = layout::split(frame.area());

    let header = Line::from(vec![
        Span::from(HEADING).bold(),
        Span::raw(format!("  ({} favorites)", view.favorite_count)).dark_gray(),
    ]);
    frame.render_widget(Paragraph::new(header), areas.header);

    let search_text = if view.search_term.is_empty() {
        Span::from(SEARCH_PLACEHOLDER).dark_gray()
    } else {
        Span::raw(view.search_term.as_str())
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", view.topic)),
    );
    frame.render_widget(search, areas.search);

    if view.loading {
        let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
        let loading = Paragraph::new(format!("{spinner} Loading stories"))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, areas.stories);
    } else {
        let items: Vec<ListItem> = view.stories.iter().map(story_item).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, areas.stories, &mut state);
    }

    frame.render_widget(Paragraph::new(KEY_HELP).dark_gray(), areas.help);

    render_toasts(frame, toasts);
}

fn story_item(row: &StoryRowView) -> ListItem<'static> {
    let heart = if row.is_favorite {
        Span::from("♥ ").fg(Color::Red)
    } else {
        Span::from("♡ ").fg(Color::Gray)
    };
    let title = row.story.title.clone().unwrap_or_default();
    let author = row.story.author.clone().unwrap_or_default();
    let link = match &row.story.url {
        Some(url) => Line::from(vec![
            Span::raw("  "),
            Span::from(READ_MORE).fg(Color::Cyan).underlined(),
            Span::raw(format!(" {url}")).dark_gray(),
        ]),
        None => Line::default(),
    };
    ListItem::new(vec![
        Line::from(vec![heart, Span::from(title).bold()]),
        Line::from(format!("  {author}")),
        link,
    ])
}

fn render_toasts<'a>(frame: &mut Frame, toasts: impl Iterator<Item = &'a Notification>) {
    let toasts: Vec<&Notification> = toasts.take(MAX_VISIBLE_TOASTS).collect();
    if toasts.is_empty() {
        return;
    }
    let area = layout::toast_area(frame.area(), toasts.len());
    let rows = Layout::vertical(vec![Constraint::Length(3); toasts.len()]).split(area);
    for (notification, row) in toasts.into_iter().zip(rows.iter()) {
        let color = match notification.status {
            NotificationStatus::Error => Color::Red,
            NotificationStatus::Success => Color::Green,
            NotificationStatus::Info => Color::Blue,
        };
        let body = notification.description.clone().unwrap_or_default();
        let toast = Paragraph::new(body).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(notification.title),
        );
        frame.render_widget(Clear, *row);
        frame.render_widget(toast, *row);
    }
}

#[cfg(test)]
mod tests {
    use hn_core::Story;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn view_with_story(loading: bool) -> AppViewModel {
        AppViewModel {
            topic: "LLMs".to_string(),
            loading,
            stories: vec![StoryRowView {
                story: Story::new("1")
                    .with_title("LLMs are cool")
                    .with_author("alice")
                    .with_url("http://x"),
                is_favorite: true,
            }],
            favorite_count: 1,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn renders_stories_when_idle() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let view = view_with_story(false);
        terminal
            .draw(|frame| render(frame, &view, Some(0), std::iter::empty(), 0))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("LLMs are cool"));
        assert!(text.contains("alice"));
        assert!(text.contains(READ_MORE));
        assert!(text.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn spinner_replaces_list_while_loading() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let view = view_with_story(true);
        terminal
            .draw(|frame| render(frame, &view, None, std::iter::empty(), 3))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Loading stories"));
        assert!(!text.contains("LLMs are cool"));
    }

    #[test]
    fn toasts_show_title_and_description() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let view = AppViewModel::default();
        let toasts = [Notification::fetch_error("network down")];
        terminal
            .draw(|frame| render(frame, &view, None, toasts.iter(), 0))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Error fetching stories"));
        assert!(text.contains("network down"));
    }
}
