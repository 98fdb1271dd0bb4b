use crate::api::{is_valid_image, Product};
use crate::ui::app::{App, Screen};
use crate::ui::carousel::CarouselState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, list_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SKELETON,
    STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const SKELETON_ROWS: usize = 15;
const ERROR_TEXT: &str = "Error loading products. Please try again.";
const NO_MATCHES_TEXT: &str = "No products match your search";
const NO_PRODUCTS_TEXT: &str = "No products available";
const LOADING_MORE_TEXT: &str = "Loading more products...";
const SEARCH_PLACEHOLDER: &str = "Search products...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::List => draw_list_screen(frame, app, body),
        Screen::Detail => draw_detail_screen(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(app, footer), footer);
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(title, Style::default().fg(HEADER_TEXT)))
}

// ============================================================================
// List screen
// ============================================================================

fn draw_list_screen(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let (search_area, list_area) = list_regions(body);
    draw_search_bar(frame, app, search_area);

    let catalog = app.catalog();
    let block = bordered("Catalog");
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    if catalog.is_initial_loading() {
        frame.render_widget(skeleton_list(inner.height as usize), inner);
        return;
    }

    if catalog.error().is_some() {
        let lines = vec![
            Line::from(Span::styled(ERROR_TEXT, Style::default().fg(STATUS_ERROR))),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to refresh",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            vertically_centered(inner, 3),
        );
        return;
    }

    if catalog.filtered().is_empty() {
        let text = if catalog.query().is_empty() {
            NO_PRODUCTS_TEXT
        } else {
            NO_MATCHES_TEXT
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(MUTED_TEXT)))
                .alignment(Alignment::Center),
            vertically_centered(inner, 1),
        );
        return;
    }

    let (rows_area, footer_area) = if catalog.is_loading_more() && inner.height > 1 {
        let [rows, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        (rows, Some(footer))
    } else {
        (inner, None)
    };

    let items: Vec<ListItem> = catalog
        .filtered()
        .iter()
        .map(|product| product_row(product, app.store().is_favorite(product.id)))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(catalog.cursor()));
    frame.render_stateful_widget(list, rows_area, &mut state);

    if let Some(footer_area) = footer_area {
        frame.render_widget(
            Paragraph::new(Span::styled(LOADING_MORE_TEXT, Style::default().fg(ACCENT)))
                .alignment(Alignment::Center),
            footer_area,
        );
    }
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let query = app.catalog().query();
    let block = bordered("Search").border_style(Style::default().fg(if app.search_focused() {
        ACCENT
    } else {
        GLOBAL_BORDER
    }));
    let inner = block.inner(area);

    let text = if query.is_empty() && !app.search_focused() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(query.to_string(), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    if app.search_focused() && inner.width > 0 && inner.height > 0 {
        let offset = (query.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

fn product_row(product: &Product, favorite: bool) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(product.title.clone(), Style::default().fg(HEADER_TEXT)),
        Span::raw("  "),
        Span::styled(format_price(product.price), Style::default().fg(ACCENT)),
    ];
    if favorite {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Favourite",
            Style::default().fg(FAVORITE).add_modifier(Modifier::BOLD),
        ));
    }
    if is_valid_image(&product.thumbnail) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            product.thumbnail.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn skeleton_list(height: usize) -> Paragraph<'static> {
    let style = Style::default().fg(SKELETON);
    let lines: Vec<Line> = (0..SKELETON_ROWS.min(height))
        .map(|row| {
            let width = if row % 2 == 0 { 32 } else { 24 };
            Line::from(Span::styled("█".repeat(width), style))
        })
        .collect();
    Paragraph::new(lines)
}

// ============================================================================
// Detail screen
// ============================================================================

fn draw_detail_screen(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let Some(product) = app.store().selected() else {
        frame.render_widget(
            Paragraph::new("No product selected").alignment(Alignment::Center),
            vertically_centered(body, 1),
        );
        return;
    };

    let block = bordered("Product");
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let [image_area, text_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(inner);
    draw_carousel(frame, app.carousel(), image_area);

    let favorite = app.store().is_favorite(product.id);
    let button = if favorite {
        Span::styled(
            "[ Remove from Favourites ]",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "[ Add to Favourites ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(format!("Stock: {}", product.stock)),
        Line::from(format!("Price: {}", format_price(product.price))),
        Line::from(""),
        Line::from(button),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        text_area,
    );
}

fn draw_carousel(frame: &mut Frame<'_>, carousel: &CarouselState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if carousel.show_skeleton() {
        Line::from(Span::styled(
            "█".repeat(inner.width as usize),
            Style::default().fg(SKELETON),
        ))
    } else {
        match carousel.display_image() {
            Some(url) => Line::from(vec![
                Span::styled("Image: ", Style::default().fg(MUTED_TEXT)),
                Span::styled(url.to_string(), Style::default().fg(ACCENT)),
            ]),
            None => Line::from(Span::styled(
                "No image available",
                Style::default().fg(MUTED_TEXT),
            )),
        }
    };
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        vertically_centered(inner, 1),
    );
}

fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

/// Formats a price the way the catalog shows it: `$` followed by the
/// shortest decimal form.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}
