use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
/// Bordered search input above the product list.
const SEARCH_HEIGHT: u16 = 3;
/// Top and bottom border of the list block.
const LIST_CHROME: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the list screen body into the search bar and the list itself.
pub fn list_regions(body: Rect) -> (Rect, Rect) {
    let search_height = body.height.min(SEARCH_HEIGHT);
    let search = Rect {
        height: search_height,
        ..body
    };
    let list = Rect {
        y: body.y + search_height,
        height: body.height.saturating_sub(search_height),
        ..body
    };
    (search, list)
}

/// Number of product rows visible for a terminal of the given size.
pub fn list_viewport_rows(cols: u16, rows: u16) -> u16 {
    let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
    let (_, list) = list_regions(body);
    list.height.saturating_sub(LIST_CHROME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_whole_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn viewport_rows_exclude_chrome() {
        // 24 - header 3 - footer 3 - search 3 - list borders 2
        assert_eq!(list_viewport_rows(80, 24), 13);
    }

    #[test]
    fn tiny_terminal_has_no_rows() {
        assert_eq!(list_viewport_rows(80, 5), 0);
    }
}
