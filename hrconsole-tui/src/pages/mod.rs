//! Admin pages.
//!
//! Each page is a [`PageSpec`]: its record type, columns, filters, sample
//! data and action handler. [`AdminPage`] wires a spec to a grid and a
//! repository, and [`AnyPage`] erases the record type so the app can keep
//! every page in one list.

mod billing;
mod employees;
mod expenses;
mod leave;
mod letters;
mod payslips;
mod shifts;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hrconsole_lib::error::{ActionError, GridError};
use hrconsole_lib::{
    ActionKind, ColumnDescriptor, FilterDescriptor, Grid, GridOptions, GridRow,
    InMemoryRepository, Outcome, Repository, RowAction, RowId, Success, Tone, ToolbarAction,
};

use crate::error::AppError;
use crate::presentation::{Gesture, GridUi, RenderContext, apply, render_grid};
use crate::settings::Settings;
use crate::ui::{Buffer, Rect, Theme};

pub use billing::BillingPage;
pub use employees::EmployeesPage;
pub use expenses::ExpensesPage;
pub use leave::LeavePage;
pub use letters::LettersPage;
pub use payslips::PayslipsPage;
pub use shifts::ShiftsPage;

/// Identifies a page, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Employees,
    Leave,
    Shifts,
    Billing,
    Letters,
    Expenses,
    Payslips,
}

impl PageId {
    pub const ALL: [PageId; 7] = [
        PageId::Employees,
        PageId::Leave,
        PageId::Shifts,
        PageId::Billing,
        PageId::Letters,
        PageId::Expenses,
        PageId::Payslips,
    ];

    /// Name used on the command line and in the settings file.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Employees => "employees",
            PageId::Leave => "leave",
            PageId::Shifts => "shifts",
            PageId::Billing => "billing",
            PageId::Letters => "letters",
            PageId::Expenses => "expenses",
            PageId::Payslips => "payslips",
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            PageId::Employees => "Employees",
            PageId::Leave => "Leave requests",
            PageId::Shifts => "Shift swaps",
            PageId::Billing => "Billing requests",
            PageId::Letters => "Letter templates",
            PageId::Expenses => "Expense categories",
            PageId::Payslips => "Payslips",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PageId::ALL
            .into_iter()
            .find(|id| id.slug() == wanted)
            .ok_or_else(|| AppError::UnknownPage(s.to_string()))
    }
}

/// Field changed by a page's edit prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditField {
    pub label: &'static str,
    pub value: String,
}

/// Definition of one admin page.
pub trait PageSpec {
    type Row: GridRow + 'static;

    const ID: PageId;

    fn columns() -> Vec<ColumnDescriptor<Self::Row>>;

    /// Filters, placeholder, row actions and toolbar actions. Page size is
    /// applied from settings afterwards.
    fn options() -> GridOptions;

    /// Sample records the repository starts with.
    fn seed() -> Vec<Self::Row>;

    /// Short name of a record for messages ("Priya Nair", "INV-1042").
    fn describe(row: &Self::Row) -> String;

    /// Handle a row action other than delete.
    fn handle(_repo: &mut dyn Repository<Self::Row>, action: &RowAction<Self::Row>) -> Outcome {
        Err(ActionError::Unsupported(action.kind.clone()))
    }

    /// Field the edit prompt offers for `row`, if the page supports editing.
    fn edit_field(_row: &Self::Row) -> Option<EditField> {
        None
    }

    /// Validate `value` and write it into `row`.
    fn apply_edit(_row: &mut Self::Row, _value: &str) -> Result<(), ActionError> {
        Err(ActionError::Unsupported(ActionKind::Edit))
    }

    /// Handle a toolbar action.
    fn toolbar(_repo: &mut dyn Repository<Self::Row>, id: &str) -> Outcome {
        Err(ActionError::Unsupported(ActionKind::Custom(id.to_string())))
    }
}

/// A page spec bound to its grid, repository and cursor.
pub struct AdminPage<S: PageSpec> {
    grid: Grid<S::Row>,
    repo: InMemoryRepository<S::Row>,
    ui: GridUi,
}

impl<S: PageSpec> AdminPage<S> {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let repo = InMemoryRepository::new(S::seed());
        let options = S::options()
            .page_size(settings.default_page_size)
            .page_size_options(settings.page_size_options.iter().copied());
        let grid = Grid::with_rows(S::columns(), options, repo.fetch_rows()?)?;
        let ui = GridUi::new(&grid);
        Ok(Self { grid, repo, ui })
    }

    pub fn grid(&self) -> &Grid<S::Row> {
        &self.grid
    }

    fn find(&self, id: &RowId) -> Option<&S::Row> {
        self.grid().rows().iter().find(|row| &row.row_id() == id)
    }

    /// Log the outcome and refresh the grid from the repository.
    fn finish(&mut self, what: &str, outcome: Outcome) -> Outcome {
        match &outcome {
            Ok(success) => info!("{} on {}: {}", what, S::ID, success.message),
            Err(err) => warn!("{} on {} refused: {}", what, S::ID, err),
        }
        let rows = self.repo.fetch_rows()?;
        self.grid.set_rows(rows);
        self.ui.clamp(self.grid.view().visible_rows.len());
        outcome
    }
}

/// An admin page with its record type erased.
pub trait AnyPage {
    fn id(&self) -> PageId;

    fn gesture(&mut self, gesture: Gesture) -> Result<(), GridError>;

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme, searching: bool);

    fn search_text(&self) -> &str;

    fn filters(&self) -> &[FilterDescriptor];

    fn filter_value(&self, key: &str) -> Option<&str>;

    fn row_actions(&self) -> &[ActionKind];

    fn toolbar_actions(&self) -> &[ToolbarAction];

    fn page_size(&self) -> usize;

    fn selected_count(&self) -> usize;

    /// Id of the record under the cursor.
    fn cursor_id(&self) -> Option<RowId>;

    /// Short name of record `id`.
    fn describe(&self, id: &RowId) -> Option<String>;

    /// Header and cell text of every column for record `id`.
    fn details(&self, id: &RowId) -> Option<Vec<(String, String)>>;

    fn edit_field(&self, id: &RowId) -> Option<EditField>;

    fn dispatch(&mut self, kind: &ActionKind, id: &RowId) -> Outcome;

    fn submit_edit(&mut self, id: &RowId, value: &str) -> Outcome;

    fn delete_selected(&mut self) -> Outcome;

    fn run_toolbar(&mut self, id: &str) -> Outcome;
}

impl<S: PageSpec> AnyPage for AdminPage<S> {
    fn id(&self) -> PageId {
        S::ID
    }

    fn gesture(&mut self, gesture: Gesture) -> Result<(), GridError> {
        apply(&mut self.grid, &mut self.ui, gesture)
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme, searching: bool) {
        let ctx = RenderContext {
            theme,
            ui: &self.ui,
            searching,
        };
        render_grid(&self.grid, &ctx, buf, area);
    }

    fn search_text(&self) -> &str {
        self.grid.state().search_text()
    }

    fn filters(&self) -> &[FilterDescriptor] {
        self.grid.filters()
    }

    fn filter_value(&self, key: &str) -> Option<&str> {
        self.grid.state().filter_value(key)
    }

    fn row_actions(&self) -> &[ActionKind] {
        self.grid.options().actions()
    }

    fn toolbar_actions(&self) -> &[ToolbarAction] {
        self.grid.options().toolbar()
    }

    fn page_size(&self) -> usize {
        self.grid.state().page_size()
    }

    fn selected_count(&self) -> usize {
        self.grid.state().selection().len()
    }

    fn cursor_id(&self) -> Option<RowId> {
        self.ui.cursor_row(&self.grid).map(GridRow::row_id)
    }

    fn describe(&self, id: &RowId) -> Option<String> {
        self.find(id).map(S::describe)
    }

    fn details(&self, id: &RowId) -> Option<Vec<(String, String)>> {
        let row = self.find(id)?;
        Some(
            self.grid
                .columns()
                .iter()
                .map(|column| (column.header.clone(), column.cell(row).text))
                .collect(),
        )
    }

    fn edit_field(&self, id: &RowId) -> Option<EditField> {
        self.find(id).and_then(S::edit_field)
    }

    fn dispatch(&mut self, kind: &ActionKind, id: &RowId) -> Outcome {
        if !self.grid.options().actions().contains(kind) {
            return Err(ActionError::Unsupported(kind.clone()));
        }
        let row = self.repo.get_row(id)?;
        let outcome = match kind {
            ActionKind::Delete => self
                .repo
                .delete_rows(std::slice::from_ref(id))
                .map(|_| Success::new(format!("Deleted {}", S::describe(&row))))
                .map_err(ActionError::from),
            _ => S::handle(&mut self.repo, &RowAction::new(kind.clone(), row)),
        };
        self.finish(kind.label(), outcome)
    }

    fn submit_edit(&mut self, id: &RowId, value: &str) -> Outcome {
        let mut row = self.repo.get_row(id)?;
        let outcome = match S::apply_edit(&mut row, value) {
            Ok(()) => self
                .repo
                .mutate_row(id, Box::new(move |stored: &mut S::Row| *stored = row))
                .map(|updated| Success::new(format!("Updated {}", S::describe(&updated))))
                .map_err(ActionError::from),
            Err(err) => Err(err),
        };
        self.finish("Edit", outcome)
    }

    fn delete_selected(&mut self) -> Outcome {
        let ids = self.grid.state().selection().ids();
        if ids.is_empty() {
            return Err(ActionError::validation("selection", "no rows selected"));
        }
        let outcome = self
            .repo
            .delete_rows(&ids)
            .map(|removed| {
                let noun = if removed == 1 { "record" } else { "records" };
                Success::new(format!("Deleted {} {}", removed, noun))
            })
            .map_err(ActionError::from);
        self.finish("Bulk delete", outcome)
    }

    fn run_toolbar(&mut self, id: &str) -> Outcome {
        let outcome = S::toolbar(&mut self.repo, id);
        self.finish(id, outcome)
    }
}

/// Build every page in navigation order.
pub fn build_pages(settings: &Settings) -> Result<Vec<Box<dyn AnyPage>>, AppError> {
    Ok(vec![
        Box::new(AdminPage::<EmployeesPage>::new(settings)?),
        Box::new(AdminPage::<LeavePage>::new(settings)?),
        Box::new(AdminPage::<ShiftsPage>::new(settings)?),
        Box::new(AdminPage::<BillingPage>::new(settings)?),
        Box::new(AdminPage::<LettersPage>::new(settings)?),
        Box::new(AdminPage::<ExpensesPage>::new(settings)?),
        Box::new(AdminPage::<PayslipsPage>::new(settings)?),
    ])
}

/// Records that wait for an approve or reject decision.
pub(crate) trait Decidable: GridRow {
    type Status: fmt::Display + Copy + 'static;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// Whether the record may still be approved or rejected.
    fn awaiting_decision(&self) -> bool;

    fn approved() -> Self::Status;

    /// `None` if the page cannot reject.
    fn rejected() -> Option<Self::Status>;
}

/// Move a record out of its pending state.
pub(crate) fn decide<T: Decidable>(
    repo: &mut dyn Repository<T>,
    action: &RowAction<T>,
    name: &str,
) -> Outcome {
    let unsupported = || ActionError::Unsupported(action.kind.clone());
    let status = match action.kind {
        ActionKind::Approve => T::approved(),
        ActionKind::Reject => T::rejected().ok_or_else(unsupported)?,
        _ => return Err(unsupported()),
    };
    if !action.row.awaiting_decision() {
        return Err(ActionError::invalid_transition(
            &action.kind,
            action.row.status().to_string().to_lowercase(),
        ));
    }
    repo.mutate_row(
        &action.row.row_id(),
        Box::new(move |row: &mut T| row.set_status(status)),
    )?;
    Ok(Success::new(format!(
        "{}: {}",
        name,
        status.to_string().to_lowercase()
    )))
}

/// Workflow state of leave and shift swap requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const LABELS: [&'static str; 3] = ["Pending", "Approved", "Rejected"];

    pub fn tone(self) -> Tone {
        match self {
            RequestStatus::Pending => Tone::Warning,
            RequestStatus::Approved => Tone::Success,
            RequestStatus::Rejected => Tone::Danger,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::LABELS[*self as usize])
    }
}

/// `1234567.5` as `1,234,567.50`.
pub(crate) fn money(amount: Decimal) -> String {
    let text = format!("{:.2}", amount.round_dp(2));
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match int.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac)
}

/// Parse a positive amount typed into an edit prompt.
pub(crate) fn parse_amount(field: &str, value: &str) -> Result<Decimal, ActionError> {
    let amount: Decimal = value
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| ActionError::validation(field, format!("'{}' is not a number", value.trim())))?;
    if amount <= Decimal::ZERO {
        return Err(ActionError::validation(field, "must be greater than zero"));
    }
    Ok(amount.round_dp(2))
}

/// Trimmed, non-empty text of at most `max` characters.
pub(crate) fn parse_text(field: &str, value: &str, max: usize) -> Result<String, ActionError> {
    let text = value.trim();
    if text.is_empty() {
        return Err(ActionError::validation(field, "cannot be empty"));
    }
    if text.chars().count() > max {
        return Err(ActionError::validation(
            field,
            format!("must be at most {} characters", max),
        ));
    }
    Ok(text.to_string())
}

/// Calendar date for sample data.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_parse() {
        assert_eq!("leave".parse::<PageId>().unwrap(), PageId::Leave);
        assert_eq!(" Payslips ".parse::<PageId>().unwrap(), PageId::Payslips);
        assert!(matches!(
            "timesheets".parse::<PageId>(),
            Err(AppError::UnknownPage(name)) if name == "timesheets"
        ));
    }

    #[test]
    fn test_money_groups_thousands() {
        assert_eq!(money(Decimal::new(123456750, 2)), "1,234,567.50");
        assert_eq!(money(Decimal::new(999, 0)), "999.00");
        assert_eq!(money(Decimal::new(-100000, 0)), "-100,000.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("budget", " 2,500 ").unwrap(), Decimal::new(2500, 0));
        assert!(matches!(
            parse_amount("budget", "lots"),
            Err(ActionError::Validation { field, .. }) if field == "budget"
        ));
        assert!(parse_amount("budget", "0").is_err());
    }

    #[test]
    fn test_pages_without_edit_or_toolbar_refuse_them() {
        let mut pages = build_pages(&Settings::default()).unwrap();
        let leave = &mut pages[1];
        assert_eq!(leave.id(), PageId::Leave);
        let id = RowId::Int(1);
        assert!(leave.edit_field(&id).is_none());
        assert!(matches!(
            leave.submit_edit(&id, "anything"),
            Err(ActionError::Unsupported(ActionKind::Edit))
        ));
        assert!(matches!(
            leave.run_toolbar("export"),
            Err(ActionError::Unsupported(ActionKind::Custom(name))) if name == "export"
        ));
        let err = leave.dispatch(&ActionKind::Approve, &RowId::Int(2)).unwrap_err();
        assert_eq!(err.to_string(), "cannot approve a record that is approved");
    }

    #[test]
    fn test_page_order_matches_ids() {
        let pages = build_pages(&Settings::default()).unwrap();
        let ids: Vec<PageId> = pages.iter().map(|p| p.id()).collect();
        assert_eq!(ids, PageId::ALL.to_vec());
    }

    #[test]
    fn test_settings_page_size_applied() {
        let settings = Settings {
            default_page_size: 5,
            ..Settings::default()
        };
        let pages = build_pages(&settings).unwrap();
        assert!(pages.iter().all(|p| p.page_size() == 5));
    }
}
