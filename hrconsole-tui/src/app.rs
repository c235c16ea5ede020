//! Event loop and mode handling.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};

use hrconsole_lib::ActionKind;
use hrconsole_lib::error::ActionError;

use crate::error::AppError;
use crate::input::{Command, browse_command};
use crate::overlay::{Overlay, Pending, active_option};
use crate::pages::{AnyPage, PageId, build_pages};
use crate::presentation::Gesture;
use crate::settings::Settings;
use crate::toast::{Toast, Toasts};
use crate::ui::{Buffer, Rect, Terminal, Theme};

/// How long to wait for input before redrawing.
const TICK: Duration = Duration::from_millis(250);

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Browse,
    /// Editing the search box. Holds the text to restore on Esc.
    Search { previous: String },
    Overlay(Overlay),
}

/// The console application.
pub struct App {
    pages: Vec<Box<dyn AnyPage>>,
    current: usize,
    settings: Settings,
    settings_path: Option<PathBuf>,
    theme: Theme,
    toasts: Toasts,
    mode: Mode,
    quit: bool,
}

impl App {
    pub fn new(
        settings: Settings,
        settings_path: Option<PathBuf>,
        start: PageId,
    ) -> Result<Self, AppError> {
        let pages = build_pages(&settings)?;
        let current = pages.iter().position(|p| p.id() == start).unwrap_or(0);
        info!("Starting on {}", start);
        Ok(Self {
            pages,
            current,
            toasts: Toasts::new(settings.toast_duration()),
            settings,
            settings_path,
            theme: Theme::default(),
            mode: Mode::Browse,
            quit: false,
        })
    }

    /// Run until the operator quits.
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        while !self.should_quit() {
            self.toasts.expire(Instant::now());
            terminal.draw(|buf| self.render(buf))?;
            for event in terminal.poll(TICK)? {
                self.handle_event(event);
            }
        }
        info!("Quit");
        Ok(())
    }

    pub fn current_page(&self) -> &dyn AnyPage {
        self.pages[self.current].as_ref()
    }

    fn page_mut(&mut self) -> &mut dyn AnyPage {
        self.pages[self.current].as_mut()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[cfg(test)]
    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Browse => {
                if let Some(command) = browse_command(key) {
                    self.run_command(command);
                }
            }
            Mode::Search { previous } => self.search_key(key, previous),
            Mode::Overlay(overlay) => self.overlay_key(key, overlay),
        }
    }

    // -------------------------------------------------------------------------
    // Browse mode
    // -------------------------------------------------------------------------

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit = true,
            Command::NextPage => self.switch_to((self.current + 1) % self.pages.len()),
            Command::PreviousPage => {
                self.switch_to((self.current + self.pages.len() - 1) % self.pages.len())
            }
            Command::GoTo(index) => {
                if index < self.pages.len() {
                    self.switch_to(index);
                }
            }
            Command::Grid(gesture) => self.gesture(gesture),
            Command::StartSearch => {
                self.mode = Mode::Search {
                    previous: self.current_page().search_text().to_string(),
                };
            }
            Command::OpenFilters => match Overlay::filters(self.current_page()) {
                Some(overlay) => self.mode = Mode::Overlay(overlay),
                None => self.toasts.push(Toast::info("This page has no filters")),
            },
            Command::Action(kind) => self.row_action(kind),
            Command::BulkDelete => {
                let count = self.current_page().selected_count();
                if count == 0 {
                    self.toasts.push(Toast::warning("No rows selected"));
                } else {
                    let noun = if count == 1 { "record" } else { "records" };
                    self.mode = Mode::Overlay(Overlay::Confirm {
                        message: format!("Delete {} selected {}?", count, noun),
                        pending: Pending::BulkDelete,
                    });
                }
            }
            Command::ClearSelection => {
                if self.current_page().selected_count() > 0 {
                    self.gesture(Gesture::ClearSelection);
                }
            }
            Command::Help => self.mode = Mode::Overlay(Overlay::Help),
            Command::Hotkey(c) => {
                let action = self
                    .current_page()
                    .toolbar_actions()
                    .iter()
                    .find(|a| a.hotkey == Some(c))
                    .map(|a| a.id.clone());
                if let Some(id) = action {
                    let outcome = self.page_mut().run_toolbar(&id);
                    self.toasts.push(Toast::from_outcome(&outcome));
                }
            }
        }
    }

    fn switch_to(&mut self, index: usize) {
        if index != self.current {
            self.current = index;
            info!("Switched to {}", self.current_page().id());
        }
    }

    fn gesture(&mut self, gesture: Gesture) {
        let resizes = matches!(gesture, Gesture::PageSizeUp | Gesture::PageSizeDown);
        let before = self.current_page().page_size();
        if let Err(err) = self.page_mut().gesture(gesture) {
            debug!("Gesture refused: {}", err);
            self.toasts.push(Toast::warning(err.to_string()));
            return;
        }
        let after = self.current_page().page_size();
        if resizes && after != before {
            self.remember_page_size(after);
        }
    }

    /// Store the new page size as the default for the next session.
    fn remember_page_size(&mut self, size: usize) {
        if !self.settings.remember_page_size || self.settings.default_page_size == size {
            return;
        }
        self.settings.default_page_size = size;
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(err) = self.settings.save(path) {
            warn!("Could not save settings: {}", err);
            self.toasts.push(Toast::error(format!("Could not save settings: {}", err)));
        }
    }

    fn row_action(&mut self, kind: ActionKind) {
        let page = self.current_page();
        let Some(id) = page.cursor_id() else {
            self.toasts.push(Toast::info("No record on this page"));
            return;
        };
        if !page.row_actions().contains(&kind) {
            self.toasts
                .push(Toast::from_outcome(&Err(ActionError::Unsupported(kind))));
            return;
        }
        let name = page.describe(&id).unwrap_or_else(|| id.to_string());

        match kind {
            ActionKind::View => {
                let rows = page.details(&id).unwrap_or_default();
                self.mode = Mode::Overlay(Overlay::Detail { title: name, rows });
            }
            ActionKind::Edit => match page.edit_field(&id) {
                Some(field) => {
                    self.mode = Mode::Overlay(Overlay::Prompt {
                        title: format!("Edit {}", name),
                        id,
                        field,
                    });
                }
                None => self
                    .toasts
                    .push(Toast::from_outcome(&Err(ActionError::Unsupported(kind)))),
            },
            kind if kind.is_destructive() => {
                self.mode = Mode::Overlay(Overlay::Confirm {
                    message: format!("{} {}?", kind.label(), name),
                    pending: Pending::Action { kind, id },
                });
            }
            kind => {
                let outcome = self.page_mut().dispatch(&kind, &id);
                self.toasts.push(Toast::from_outcome(&outcome));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Search mode
    // -------------------------------------------------------------------------

    fn search_key(&mut self, key: KeyEvent, previous: String) {
        let mut text = self.current_page().search_text().to_string();
        match key.code {
            KeyCode::Enter => return,
            KeyCode::Esc => {
                self.gesture(Gesture::Search(previous));
                return;
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => text.push(c),
            _ => {}
        }
        self.gesture(Gesture::Search(text));
        self.mode = Mode::Search { previous };
    }

    // -------------------------------------------------------------------------
    // Overlays
    // -------------------------------------------------------------------------

    fn overlay_key(&mut self, key: KeyEvent, overlay: Overlay) {
        match overlay {
            Overlay::Confirm { message, pending } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm(pending),
                KeyCode::Char('n') | KeyCode::Esc => debug!("Cancelled: {}", message),
                _ => self.mode = Mode::Overlay(Overlay::Confirm { message, pending }),
            },
            Overlay::Prompt {
                title,
                id,
                mut field,
            } => match key.code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    let outcome = self.page_mut().submit_edit(&id, &field.value);
                    let invalid = matches!(outcome, Err(ActionError::Validation { .. }));
                    self.toasts.push(Toast::from_outcome(&outcome));
                    if invalid {
                        self.mode = Mode::Overlay(Overlay::Prompt { title, id, field });
                    }
                }
                code => {
                    match code {
                        KeyCode::Backspace => {
                            field.value.pop();
                        }
                        KeyCode::Char(c) => field.value.push(c),
                        _ => {}
                    }
                    self.mode = Mode::Overlay(Overlay::Prompt { title, id, field });
                }
            },
            Overlay::Filters { filter, option } => self.filters_key(key, filter, option),
            Overlay::Detail { .. } | Overlay::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v') => {}
                _ => self.mode = Mode::Overlay(overlay),
            },
        }
    }

    fn confirm(&mut self, pending: Pending) {
        let outcome = match pending {
            Pending::Action { kind, id } => self.page_mut().dispatch(&kind, &id),
            Pending::BulkDelete => self.page_mut().delete_selected(),
        };
        self.toasts.push(Toast::from_outcome(&outcome));
    }

    fn filters_key(&mut self, key: KeyEvent, filter: usize, option: usize) {
        let page = self.current_page();
        let filters = page.filters();
        let count = filters.len();
        let Some(descriptor) = filters.get(filter) else {
            return;
        };
        let choices = descriptor.options.len() + 1;
        let key_name = descriptor.key.clone();

        let (filter, option) = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') | KeyCode::Char('q') => return,
            KeyCode::Up | KeyCode::Char('k') => {
                let next = (filter + count - 1) % count;
                (next, active_option(page, &filters[next].key))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = (filter + 1) % count;
                (next, active_option(page, &filters[next].key))
            }
            KeyCode::Left | KeyCode::Char('h') => {
                let option = (option + choices - 1) % choices;
                self.apply_filter_choice(&key_name, filter, option);
                (filter, option)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let option = (option + 1) % choices;
                self.apply_filter_choice(&key_name, filter, option);
                (filter, option)
            }
            _ => (filter, option),
        };
        self.mode = Mode::Overlay(Overlay::Filters { filter, option });
    }

    fn apply_filter_choice(&mut self, key: &str, filter: usize, option: usize) {
        let value = match option {
            0 => None,
            n => self.current_page().filters()[filter]
                .options
                .get(n - 1)
                .map(|o| o.value.clone()),
        };
        self.gesture(Gesture::SetFilter {
            key: key.to_string(),
            value,
        });
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub fn render(&self, buf: &mut Buffer) {
        let theme = &self.theme;
        let area = buf.area();
        buf.fill(area, theme.base());
        if area.height < 6 {
            return;
        }

        let (tabs, rest) = area.split_top(1);
        let (body, hints) = rest.split_bottom(1);
        self.render_tabs(buf, tabs);

        let searching = matches!(self.mode, Mode::Search { .. });
        let page = self.current_page();
        page.render(buf, body, theme, searching);

        let hint = match &self.mode {
            Mode::Browse => "q quit  / search  f filters  [ ] column  s sort  space select  ? keys",
            Mode::Search { .. } => "type to search  Enter keep  Esc restore",
            Mode::Overlay(_) => "",
        };
        buf.put_str(hints.x + 1, hints.y, hint, theme.muted(), hints.right());

        if let Mode::Overlay(overlay) = &self.mode {
            overlay.render(page, buf, body, theme);
        }
        self.toasts.render(buf, body, theme);
    }

    fn render_tabs(&self, buf: &mut Buffer, area: Rect) {
        let theme = &self.theme;
        buf.fill(area, theme.surface());
        let mut x = area.x + 1;
        for (i, page) in self.pages.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, page.id().title());
            let style = if i == self.current {
                theme.surface().fg(theme.accent).bold().underline()
            } else {
                theme.surface().fg(theme.muted)
            };
            x = buf.put_str(x, area.y, &label, style, area.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Settings::default(), None, PageId::Leave).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &App) -> Vec<String> {
        let mut buf = Buffer::new(120, 24);
        app.render(&mut buf);
        (0..24).map(|y| buf.line(y)).collect()
    }

    #[test]
    fn test_starts_on_requested_page() {
        let app = app();
        assert_eq!(app.current_page().id(), PageId::Leave);
        let tabs = screen(&app)[0].clone();
        assert!(tabs.contains(" 2 Leave requests "));
    }

    #[test]
    fn test_tab_and_digit_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page().id(), PageId::Shifts);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_page().id(), PageId::Employees);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_page().id(), PageId::Payslips);
        type_str(&mut app, "4");
        assert_eq!(app.current_page().id(), PageId::Billing);
    }

    #[test]
    fn test_search_mode_live_and_escape_restores() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "chen");
        assert_eq!(app.current_page().search_text(), "chen");
        assert!(screen(&app)[1].contains("chen"));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_page().search_text(), "");
        assert_eq!(app.mode, Mode::Browse);

        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "grace");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_page().search_text(), "grace");
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn test_approve_from_keyboard() {
        let mut app = app();
        press(&mut app, KeyCode::Char('y'));
        let toast = app.toasts().messages().next().unwrap();
        assert_eq!(toast.message, "Annual leave for Priya Nair: approved");
        press(&mut app, KeyCode::Char('y'));
        let toast = app.toasts().messages().next().unwrap();
        assert_eq!(toast.level, crate::toast::ToastLevel::Warning);
    }

    #[test]
    fn test_reject_needs_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert!(matches!(app.mode, Mode::Overlay(Overlay::Confirm { .. })));
        assert!(screen(&app).iter().any(|l| l.contains("Reject Annual leave for Priya Nair?")));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.toasts().is_empty());

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('y'));
        let toast = app.toasts().messages().next().unwrap();
        assert_eq!(toast.message, "Annual leave for Priya Nair: rejected");
    }

    #[test]
    fn test_unsupported_action_toast() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Browse);
        let toast = app.toasts().messages().next().unwrap();
        assert_eq!(toast.message, "action 'Edit' is not supported here");
    }

    #[test]
    fn test_edit_prompt_round_trip() {
        let mut app = App::new(Settings::default(), None, PageId::Expenses).unwrap();
        press(&mut app, KeyCode::Char('e'));
        for _ in 0..6 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, Mode::Overlay(Overlay::Prompt { .. })));
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "60000");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Browse);
        let toast = app.toasts().messages().next().unwrap();
        assert_eq!(toast.message, "Updated category 'Travel'");
    }

    #[test]
    fn test_filter_picker_applies_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.current_page().filter_value("status"), Some("Pending"));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.current_page().filter_value("type"), Some("Sick"));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Browse);
        let footer = screen(&app)[22].clone();
        assert!(footer.contains("Showing 1–1 of 1"), "{}", footer);
    }

    #[test]
    fn test_bulk_delete_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('D'));
        assert_eq!(app.mode, Mode::Browse);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.current_page().selected_count(), 2);
        press(&mut app, KeyCode::Char('D'));
        press(&mut app, KeyCode::Enter);
        let toast = app.toasts().messages().next().unwrap();
        assert_eq!(toast.message, "Deleted 2 records");
        assert_eq!(app.current_page().selected_count(), 0);
    }

    #[test]
    fn test_page_size_kept_in_settings() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.current_page().page_size(), 25);
        assert_eq!(app.settings.default_page_size, 25);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
