use crate::ui::app::{App, Screen};
use crate::ui::theme::{ACCENT, FAVORITE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let catalog = app.catalog();

        let title = match app.screen() {
            Screen::List => "Products",
            Screen::Detail => "Product Details",
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} / {} loaded", catalog.products().len(), catalog.total()),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("♥ {}", app.store().favorite_count()),
                Style::default().fg(FAVORITE),
            ),
        ];

        if let Some(status) = status_text(app) {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(status, text_style));
        }
        if let Some(error) = app.last_command_error() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                error.to_string(),
                Style::default().fg(STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_text(app: &App) -> Option<String> {
    let catalog = app.catalog();
    let label = if catalog.is_refreshing() {
        "Refreshing"
    } else if catalog.is_initial_loading() {
        "Loading"
    } else if catalog.is_loading_more() {
        "Fetching page"
    } else if !catalog.has_more() && !catalog.products().is_empty() {
        return Some("All products loaded".to_string());
    } else {
        return None;
    };
    let frame = SPINNER[app.spinner() % SPINNER.len()];
    Some(format!("{label} {frame}"))
}
