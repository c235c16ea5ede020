use chrono::{Local, NaiveDate};

use hrconsole_lib::error::ActionError;
use hrconsole_lib::{
    ActionKind, CellContent, CellValue, ColumnDescriptor, FilterDescriptor, GridOptions, GridRow,
    RowId, Tone,
};

use super::{EditField, PageId, PageSpec, date, parse_text};

const CATEGORIES: [&str; 4] = ["Offer", "Onboarding", "Policy", "Exit"];

#[derive(Debug, Clone, PartialEq)]
pub struct LetterTemplate {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub updated: NaiveDate,
}

impl GridRow for LetterTemplate {
    fn row_id(&self) -> RowId {
        RowId::Text(self.slug.clone())
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "updated" => self.updated.into(),
            "slug" => self.slug.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

pub struct LettersPage;

impl PageSpec for LettersPage {
    type Row = LetterTemplate;

    const ID: PageId = PageId::Letters;

    fn columns() -> Vec<ColumnDescriptor<LetterTemplate>> {
        vec![
            ColumnDescriptor::new("name", "Template").searchable(),
            ColumnDescriptor::new("category", "Category")
                .searchable()
                .width(11)
                .render(|t: &LetterTemplate| CellContent::toned(t.category.clone(), Tone::Accent)),
            ColumnDescriptor::new("slug", "Key")
                .unsortable()
                .render(|t: &LetterTemplate| CellContent::toned(t.slug.clone(), Tone::Muted)),
            ColumnDescriptor::new("updated", "Last updated").width(12),
        ]
    }

    fn options() -> GridOptions {
        GridOptions::new()
            .filter(FilterDescriptor::new("category", "Category").values(CATEGORIES))
            .search_placeholder("Search templates...")
            .selectable(true)
            .row_actions([ActionKind::View, ActionKind::Edit, ActionKind::Delete])
    }

    fn seed() -> Vec<LetterTemplate> {
        [
            ("offer-standard", "Standard offer letter", "Offer", date(2026, 6, 2)),
            ("offer-contractor", "Contractor offer", "Offer", date(2026, 2, 17)),
            ("welcome-pack", "Welcome pack cover letter", "Onboarding", date(2025, 11, 30)),
            ("probation-confirm", "Probation confirmation", "Onboarding", date(2026, 8, 9)),
            ("remote-work", "Remote work policy acknowledgement", "Policy", date(2026, 1, 22)),
            ("code-of-conduct", "Code of conduct update", "Policy", date(2025, 9, 14)),
            ("experience", "Experience certificate", "Exit", date(2026, 4, 5)),
            ("relieving", "Relieving letter", "Exit", date(2026, 7, 19)),
        ]
        .into_iter()
        .map(|(slug, name, category, updated)| LetterTemplate {
            slug: slug.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            updated,
        })
        .collect()
    }

    fn describe(row: &LetterTemplate) -> String {
        format!("template '{}'", row.name)
    }

    fn edit_field(row: &LetterTemplate) -> Option<EditField> {
        Some(EditField {
            label: "Template name",
            value: row.name.clone(),
        })
    }

    fn apply_edit(row: &mut LetterTemplate, value: &str) -> Result<(), ActionError> {
        row.name = parse_text("name", value, 60)?;
        row.updated = Local::now().date_naive();
        Ok(())
    }
}
