//! Modal boxes drawn over the page.

use hrconsole_lib::{ActionKind, RowId};

use crate::input::HELP;
use crate::pages::{AnyPage, EditField};
use crate::ui::text::{display_width, truncate_to_width};
use crate::ui::{Buffer, Rect, Style, Theme};

/// An action waiting for the operator to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    Action { kind: ActionKind, id: RowId },
    BulkDelete,
}

/// A modal over the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Confirm {
        message: String,
        pending: Pending,
    },
    Detail {
        title: String,
        rows: Vec<(String, String)>,
    },
    /// Single-field edit form.
    Prompt {
        title: String,
        id: RowId,
        field: EditField,
    },
    /// Filter chooser. `option` 0 means no filter.
    Filters {
        filter: usize,
        option: usize,
    },
    Help,
}

impl Overlay {
    /// Open the filter chooser on the first filter's active option.
    pub fn filters(page: &dyn AnyPage) -> Option<Self> {
        let first = page.filters().first()?;
        Some(Overlay::Filters {
            filter: 0,
            option: active_option(page, &first.key),
        })
    }

    pub fn render(&self, page: &dyn AnyPage, buf: &mut Buffer, area: Rect, theme: &Theme) {
        match self {
            Overlay::Confirm { message, .. } => {
                let lines = vec![
                    Line::plain(message.clone()),
                    Line::blank(),
                    Line::muted("[y] Confirm   [n] Cancel"),
                ];
                draw_box(buf, area, "Confirm", &lines, theme);
            }
            Overlay::Detail { title, rows } => {
                let label_width = rows.iter().map(|(k, _)| display_width(k)).max().unwrap_or(0);
                let mut lines: Vec<Line> = rows
                    .iter()
                    .map(|(k, v)| {
                        Line::plain(format!("{:<width$}  {}", k, v, width = label_width))
                    })
                    .collect();
                lines.push(Line::blank());
                lines.push(Line::muted("Esc close"));
                draw_box(buf, area, title, &lines, theme);
            }
            Overlay::Prompt { title, field, .. } => {
                let lines = vec![
                    Line::muted(field.label),
                    Line::accent(format!("{}▏", field.value)),
                    Line::blank(),
                    Line::muted("Enter save   Esc cancel"),
                ];
                draw_box(buf, area, title, &lines, theme);
            }
            Overlay::Filters { filter, option } => {
                let mut lines = Vec::new();
                for (i, descriptor) in page.filters().iter().enumerate() {
                    let chosen = if i == *filter {
                        *option
                    } else {
                        active_option(page, &descriptor.key)
                    };
                    let value = match chosen {
                        0 => "All",
                        n => descriptor
                            .options
                            .get(n - 1)
                            .map(|o| o.label.as_str())
                            .unwrap_or("All"),
                    };
                    let text = format!("{:<14} ◂ {} ▸", descriptor.label, value);
                    lines.push(if i == *filter {
                        Line::accent(text)
                    } else {
                        Line::plain(text)
                    });
                }
                lines.push(Line::blank());
                lines.push(Line::muted("↑↓ filter   ←→ value   Esc close"));
                draw_box(buf, area, "Filters", &lines, theme);
            }
            Overlay::Help => {
                let lines: Vec<Line> = HELP
                    .iter()
                    .map(|(keys, what)| Line::plain(format!("{:<22} {}", keys, what)))
                    .collect();
                draw_box(buf, area, "Keys", &lines, theme);
            }
        }
    }
}

/// Position of the active option of filter `key`, 0 when unset.
pub fn active_option(page: &dyn AnyPage, key: &str) -> usize {
    let Some(value) = page.filter_value(key) else {
        return 0;
    };
    page.filters()
        .iter()
        .find(|f| f.key == key)
        .and_then(|f| f.options.iter().position(|o| o.value == value))
        .map_or(0, |i| i + 1)
}

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Plain,
    Muted,
    Accent,
}

struct Line {
    text: String,
    style: LineStyle,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Plain,
        }
    }

    fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Muted,
        }
    }

    fn accent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Accent,
        }
    }

    fn blank() -> Self {
        Self::plain("")
    }
}

/// Draw a bordered box centered in `area`, sized to its content.
fn draw_box(buf: &mut Buffer, area: Rect, title: &str, lines: &[Line], theme: &Theme) {
    let content_width = lines
        .iter()
        .map(|l| display_width(&l.text))
        .chain(std::iter::once(display_width(title) + 2))
        .max()
        .unwrap_or(0) as u16;
    let outer = area.centered(content_width + 4, lines.len() as u16 + 2);
    if outer.width < 4 || outer.height < 2 {
        return;
    }
    let base = theme.surface();
    let border = Style::new(theme.accent, theme.surface);
    buf.fill(outer, base);

    let inner_width = outer.width - 2;
    let horizontal = "─".repeat(inner_width as usize);
    buf.put_str(outer.x, outer.y, &format!("┌{}┐", horizontal), border, outer.right());
    buf.put_str(
        outer.x,
        outer.bottom() - 1,
        &format!("└{}┘", horizontal),
        border,
        outer.right(),
    );
    for y in outer.y + 1..outer.bottom() - 1 {
        buf.put_str(outer.x, y, "│", border, outer.right());
        buf.put_str(outer.right() - 1, y, "│", border, outer.right());
    }
    let title = truncate_to_width(title, inner_width.saturating_sub(2) as usize);
    buf.put_str(outer.x + 2, outer.y, &format!(" {} ", title), border.bold(), outer.right() - 1);

    let text_x = outer.x + 2;
    let max_x = outer.right() - 2;
    for (i, line) in lines.iter().enumerate() {
        let y = outer.y + 1 + i as u16;
        if y >= outer.bottom() - 1 {
            break;
        }
        let style = match line.style {
            LineStyle::Plain => base,
            LineStyle::Muted => base.fg(theme.muted),
            LineStyle::Accent => base.fg(theme.accent).bold(),
        };
        buf.put_str(text_x, y, &line.text, style, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::build_pages;
    use crate::presentation::Gesture;
    use crate::settings::Settings;

    fn screen(overlay: &Overlay, page: &dyn AnyPage) -> Vec<String> {
        let mut buf = Buffer::new(70, 20);
        let area = buf.area();
        overlay.render(page, &mut buf, area, &Theme::default());
        (0..20).map(|y| buf.line(y)).collect()
    }

    #[test]
    fn test_confirm_box() {
        let pages = build_pages(&Settings::default()).unwrap();
        let overlay = Overlay::Confirm {
            message: "Delete 3 selected records?".into(),
            pending: Pending::BulkDelete,
        };
        let lines = screen(&overlay, pages[0].as_ref());
        assert!(lines.iter().any(|l| l.contains("┌─ Confirm ─")));
        assert!(lines.iter().any(|l| l.contains("│ Delete 3 selected records?")));
        assert!(lines.iter().any(|l| l.contains("[y] Confirm   [n] Cancel")));
    }

    #[test]
    fn test_filter_picker_shows_active_value() {
        let mut pages = build_pages(&Settings::default()).unwrap();
        let page = &mut pages[0];
        page.gesture(Gesture::SetFilter {
            key: "status".into(),
            value: Some("Inactive".into()),
        })
        .unwrap();
        let overlay = Overlay::filters(page.as_ref()).unwrap();
        assert_eq!(
            overlay,
            Overlay::Filters {
                filter: 0,
                option: 0
            }
        );
        assert_eq!(active_option(page.as_ref(), "status"), 3);
        let lines = screen(&overlay, page.as_ref());
        assert!(lines.iter().any(|l| l.contains("Status         ◂ Inactive ▸")));
        assert!(lines.iter().any(|l| l.contains("Department     ◂ All ▸")));
    }
}
