pub const HEADING: &str = "Hacker News - LLM Stories";
pub const SEARCH_PLACEHOLDER: &str = "Search stories...";
pub const READ_MORE: &str = "Read more";
pub const KEY_HELP: &str =
    "Enter search | Up/Down select | Ctrl-F favorite | Ctrl-O read more | Esc quit";
pub const SPINNER_FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];
/// Toast stack rows shown at once; older ones wait their turn.
pub const MAX_VISIBLE_TOASTS: usize = 3;
