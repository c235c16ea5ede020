//! Drawing a grid into a [`Buffer`].

use hrconsole_lib::{Alignment, Grid, GridRow, PageSelection, SortDirection};

use crate::ui::text::{display_width, fit};
use crate::ui::{Buffer, Rect, Theme};

use super::GridUi;
use super::layout::{SlotKind, action_labels, layout_columns};

const SEPARATOR: &str = "  │  ";
const SEARCH_WIDTH: usize = 28;

/// Everything besides the grid that affects drawing.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub ui: &'a GridUi,
    /// The search box is being edited.
    pub searching: bool,
}

/// Draw toolbar, header, body and footer of `grid` into `area`.
pub fn render_grid<T: GridRow>(grid: &Grid<T>, ctx: &RenderContext<'_>, buf: &mut Buffer, area: Rect) {
    if area.height < 4 {
        return;
    }
    buf.fill(area, ctx.theme.base());

    let (toolbar, rest) = area.split_top(1);
    let (header, rest) = rest.split_top(1);
    let (body, footer) = rest.split_bottom(1);

    render_toolbar(grid, ctx, buf, toolbar);
    render_header(grid, ctx, buf, header);
    render_body(grid, ctx, buf, body);
    render_footer(grid, ctx, buf, footer);
}

fn render_toolbar<T: GridRow>(grid: &Grid<T>, ctx: &RenderContext<'_>, buf: &mut Buffer, area: Rect) {
    let theme = ctx.theme;
    let style = theme.surface();
    buf.fill(area, style);
    let max_x = area.right();

    let search = grid.state().search_text();
    let (text, search_style) = if search.is_empty() && !ctx.searching {
        (grid.options().placeholder().to_string(), style.fg(theme.muted))
    } else if ctx.searching {
        (format!("{}▏", search), style.fg(theme.accent))
    } else {
        (search.to_string(), style)
    };
    let mut x = buf.put_str(area.x + 1, area.y, "/ ", style.fg(theme.muted), max_x);
    x = buf.put_str(
        x,
        area.y,
        &fit(&text, SEARCH_WIDTH, Alignment::Left),
        search_style,
        max_x,
    );

    for filter in grid.filters() {
        let active = grid
            .state()
            .filter_value(&filter.key)
            .and_then(|value| filter.find_option(value))
            .map(|option| option.label.as_str());
        x = buf.put_str(x, area.y, SEPARATOR, style.fg(theme.muted), max_x);
        x = buf.put_str(x, area.y, &format!("{}: ", filter.label), style.fg(theme.muted), max_x);
        let value_style = match active {
            Some(_) => style.fg(theme.accent).bold(),
            None => style,
        };
        x = buf.put_str(x, area.y, &format!("{} ▾", active.unwrap_or("All")), value_style, max_x);
    }

    x = buf.put_str(x, area.y, SEPARATOR, style.fg(theme.muted), max_x);
    x = buf.put_str(
        x,
        area.y,
        &format!("Rows: {} ▾", grid.state().page_size()),
        style,
        max_x,
    );

    for action in grid.options().toolbar() {
        x = buf.put_str(x, area.y, SEPARATOR, style.fg(theme.muted), max_x);
        let label = match action.hotkey {
            Some(key) => format!("[{}] {}", key, action.label),
            None => action.label.clone(),
        };
        x = buf.put_str(x, area.y, &label, style.fg(theme.accent), max_x);
    }
}

fn render_header<T: GridRow>(grid: &Grid<T>, ctx: &RenderContext<'_>, buf: &mut Buffer, area: Rect) {
    let theme = ctx.theme;
    let style = theme.surface().bold();
    buf.fill(area, style);

    for slot in layout_columns(grid, area) {
        let max_x = slot.x + slot.width;
        match slot.kind {
            SlotKind::Checkbox => {
                let glyph = match grid.page_selection() {
                    PageSelection::All => "[x]",
                    PageSelection::Partial => "[-]",
                    PageSelection::None => "[ ]",
                };
                buf.put_str(slot.x, area.y, glyph, style, max_x);
            }
            SlotKind::Column(index) => {
                let column = &grid.columns()[index];
                let indicator = match grid.state().sort() {
                    Some(sort) if sort.key == column.key => match sort.direction {
                        SortDirection::Asc => " ▲",
                        SortDirection::Desc => " ▼",
                    },
                    _ => "",
                };
                let label = format!("{}{}", column.header, indicator);
                let mut label_style = style;
                if ctx.ui.focused_column == Some(index) && !ctx.searching {
                    label_style = label_style.fg(theme.accent).underline();
                }
                buf.put_str(
                    slot.x,
                    area.y,
                    &fit(&label, slot.width as usize, column.align),
                    label_style,
                    max_x,
                );
            }
            SlotKind::Actions => {
                buf.put_str(slot.x, area.y, "Actions", style, max_x);
            }
        }
    }
}

fn render_body<T: GridRow>(grid: &Grid<T>, ctx: &RenderContext<'_>, buf: &mut Buffer, area: Rect) {
    let theme = ctx.theme;
    let view = grid.view();

    if view.is_empty() {
        let message = "No records found";
        if let Some(line) = area.row(area.height / 2) {
            let x = line.x + line.width.saturating_sub(display_width(message) as u16) / 2;
            buf.put_str(x, line.y, message, theme.muted(), line.right());
        }
        return;
    }

    let slots = layout_columns(grid, area);
    let actions = action_labels(grid.options().actions());
    let top = ctx
        .ui
        .scroll_into_view(area.height as usize, view.visible_rows.len());

    for (offset, row) in view.visible_rows.iter().enumerate().skip(top) {
        let Some(line) = area.row((offset - top) as u16) else {
            break;
        };
        let selected = grid.is_selected(&row.row_id());
        let mut style = theme.base();
        if selected {
            style = style.bg(theme.selected);
        }
        if offset == ctx.ui.cursor && !ctx.searching {
            style = style.bg(theme.cursor);
        }
        buf.fill(line, style);

        for slot in &slots {
            let max_x = slot.x + slot.width;
            match slot.kind {
                SlotKind::Checkbox => {
                    let glyph = if selected { "[x]" } else { "[ ]" };
                    buf.put_str(slot.x, line.y, glyph, style, max_x);
                }
                SlotKind::Column(index) => {
                    let column = &grid.columns()[index];
                    let cell = column.cell(row);
                    buf.put_str(
                        slot.x,
                        line.y,
                        &fit(&cell.text, slot.width as usize, column.align),
                        style.fg(theme.tone(cell.tone)),
                        max_x,
                    );
                }
                SlotKind::Actions => {
                    buf.put_str(slot.x, line.y, &actions, style.fg(theme.muted), max_x);
                }
            }
        }
    }
}

fn render_footer<T: GridRow>(grid: &Grid<T>, ctx: &RenderContext<'_>, buf: &mut Buffer, area: Rect) {
    let theme = ctx.theme;
    let style = theme.surface();
    buf.fill(area, style);
    buf.put_str(area.x + 1, area.y, &footer_text(grid), style, area.right());
}

/// `Showing 11–20 of 42 · Page 2 / 5 · 3 selected`.
pub(crate) fn footer_text<T: GridRow>(grid: &Grid<T>) -> String {
    let view = grid.view();
    let showing = match view.showing() {
        Some((start, end)) => format!("Showing {}–{} of {}", start, end, view.total_filtered_count),
        None => format!("Showing 0 of {}", view.total_filtered_count),
    };
    let page = if view.total_page_count == 0 {
        "Page 0 / 0".to_string()
    } else {
        format!(
            "Page {} / {}",
            grid.state().page_index() + 1,
            view.total_page_count
        )
    };
    let mut parts = vec![showing, page];
    if grid.options().is_selectable() {
        parts.push(format!("{} selected", grid.state().selection().len()));
    }
    parts.join(" · ")
}
