use crate::ui::app::{App, Screen};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

type Hint = (&'static str, &'static str);

const LIST_HINTS: &[Hint] = &[
    ("↑↓", "Move"),
    ("Enter", "Details"),
    ("f", "Favourite"),
    ("/", "Search"),
    ("r", "Refresh"),
    ("q", "Quit"),
];
const SEARCH_HINTS: &[Hint] = &[("Type", "Filter"), ("Backspace", "Delete"), ("Enter/Esc", "Done")];
const DETAIL_HINTS: &[Hint] = &[("Esc", "Back"), ("f", "Favourite"), ("q", "Quit")];

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    fn hints(app: &App) -> &'static [Hint] {
        match app.screen() {
            Screen::List if app.search_focused() => SEARCH_HINTS,
            Screen::List => LIST_HINTS,
            Screen::Detail => DETAIL_HINTS,
        }
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(ACCENT);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (idx, (key, action)) in Self::hints(app).iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator_style));
                used += 3;
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {action}"), text_style));
            used += key.chars().count() + action.chars().count() + 2;
        }

        // Right-align the version inside the borders.
        let version = format!("v{VERSION} ");
        let inner_width = area.width.saturating_sub(2) as usize;
        let padding = inner_width.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
