use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use hrconsole_lib::error::ActionError;
use hrconsole_lib::{
    ActionKind, Alignment, CellContent, CellValue, ColumnDescriptor, FilterDescriptor,
    GridOptions, GridRow, RowId, Tone,
};

use super::{EditField, PageId, PageSpec, money, parse_amount};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCategory {
    pub id: i64,
    pub name: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub active: bool,
}

impl ExpenseCategory {
    /// Spent share of the budget in percent.
    pub fn utilization(&self) -> Option<f64> {
        if self.budget.is_zero() {
            return None;
        }
        (self.spent / self.budget * Decimal::ONE_HUNDRED).to_f64()
    }

    fn status(&self) -> &'static str {
        if self.active { "Active" } else { "Archived" }
    }
}

impl GridRow for ExpenseCategory {
    fn row_id(&self) -> RowId {
        RowId::Int(self.id)
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "budget" => self.budget.into(),
            "spent" => self.spent.into(),
            "utilization" => self.utilization().into(),
            "status" => self.status().into(),
            _ => CellValue::Null,
        }
    }
}

fn utilization_cell(category: &ExpenseCategory) -> CellContent {
    match category.utilization() {
        Some(pct) => {
            let tone = if pct > 100.0 {
                Tone::Danger
            } else if pct >= 80.0 {
                Tone::Warning
            } else {
                Tone::Default
            };
            CellContent::toned(format!("{:.0}%", pct), tone)
        }
        None => CellContent::toned("n/a", Tone::Muted),
    }
}

/// Budget lines for reimbursable expenses.
pub struct ExpensesPage;

impl PageSpec for ExpensesPage {
    type Row = ExpenseCategory;

    const ID: PageId = PageId::Expenses;

    fn columns() -> Vec<ColumnDescriptor<ExpenseCategory>> {
        vec![
            ColumnDescriptor::new("name", "Category").searchable(),
            ColumnDescriptor::new("budget", "Budget")
                .width(12)
                .align(Alignment::Right)
                .render(|c: &ExpenseCategory| CellContent::plain(money(c.budget))),
            ColumnDescriptor::new("spent", "Spent")
                .width(12)
                .align(Alignment::Right)
                .render(|c: &ExpenseCategory| CellContent::plain(money(c.spent))),
            ColumnDescriptor::new("utilization", "Used")
                .width(6)
                .align(Alignment::Right)
                .render(utilization_cell),
            ColumnDescriptor::new("status", "Status").width(8).render(|c: &ExpenseCategory| {
                let tone = if c.active { Tone::Success } else { Tone::Muted };
                CellContent::toned(c.status(), tone)
            }),
        ]
    }

    fn options() -> GridOptions {
        GridOptions::new()
            .filter(FilterDescriptor::new("status", "Status").values(["Active", "Archived"]))
            .search_placeholder("Search categories...")
            .row_actions([ActionKind::Edit, ActionKind::Delete])
    }

    fn seed() -> Vec<ExpenseCategory> {
        [
            ("Travel", 50_000, 42_000, true),
            ("Meals & entertainment", 12_000, 13_480, true),
            ("Training", 80_000, 22_900, true),
            ("Home office", 15_000, 9_300, true),
            ("Software subscriptions", 30_000, 28_800, true),
            ("Relocation", 40_000, 0, false),
            ("Conferences", 25_000, 11_000, true),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, budget, spent, active))| ExpenseCategory {
            id: i as i64 + 1,
            name: name.to_string(),
            budget: Decimal::from(budget),
            spent: Decimal::from(spent),
            active,
        })
        .collect()
    }

    fn describe(row: &ExpenseCategory) -> String {
        format!("category '{}'", row.name)
    }

    fn edit_field(row: &ExpenseCategory) -> Option<EditField> {
        Some(EditField {
            label: "Budget",
            value: row.budget.to_string(),
        })
    }

    fn apply_edit(row: &mut ExpenseCategory, value: &str) -> Result<(), ActionError> {
        row.budget = parse_amount("budget", value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{AdminPage, AnyPage};
    use crate::presentation::Gesture;
    use crate::settings::Settings;

    fn page() -> AdminPage<ExpensesPage> {
        AdminPage::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_utilization_cell_tones() {
        let rows = ExpensesPage::seed();
        assert_eq!(utilization_cell(&rows[0]), CellContent::toned("84%", Tone::Warning));
        assert_eq!(utilization_cell(&rows[1]).tone, Tone::Danger);
        assert_eq!(utilization_cell(&rows[5]), CellContent::toned("0%", Tone::Default));
    }

    #[test]
    fn test_edit_budget() {
        let mut page = page();
        let outcome = page.submit_edit(&RowId::Int(2), "15,000");
        assert_eq!(outcome.unwrap().message, "Updated category 'Meals & entertainment'");
        let row = &page.grid().rows()[1];
        assert_eq!(row.budget, Decimal::from(15_000));
    }

    #[test]
    fn test_edit_budget_validation() {
        let mut page = page();
        let err = page.submit_edit(&RowId::Int(2), "-5").unwrap_err();
        assert_eq!(
            err,
            ActionError::validation("budget", "must be greater than zero")
        );
        assert_eq!(page.grid().rows()[1].budget, Decimal::from(12_000));
    }

    #[test]
    fn test_sort_by_utilization() {
        let mut page = page();
        page.gesture(Gesture::FocusColumn(3)).unwrap();
        page.gesture(Gesture::SortFocused).unwrap();
        page.gesture(Gesture::SortFocused).unwrap();
        let first = page.grid().view().visible_rows[0].name.clone();
        assert_eq!(first, "Meals & entertainment");
    }

    #[test]
    fn test_view_not_offered() {
        let mut page = page();
        assert_eq!(
            page.dispatch(&ActionKind::View, &RowId::Int(1)).unwrap_err(),
            ActionError::Unsupported(ActionKind::View)
        );
    }
}
