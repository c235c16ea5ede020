use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use hrconsole_lib::error::ActionError;
use hrconsole_lib::{
    ActionKind, Alignment, CellContent, CellValue, ColumnDescriptor, FilterDescriptor,
    GridOptions, GridRow, RowId, Tone,
};

use super::{EditField, PageId, PageSpec, date, money, parse_text};

const DEPARTMENTS: [&str; 5] = ["Engineering", "Finance", "HR", "Operations", "Sales"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    const LABELS: [&'static str; 3] = ["Active", "On leave", "Inactive"];

    fn tone(self) -> Tone {
        match self {
            EmployeeStatus::Active => Tone::Success,
            EmployeeStatus::OnLeave => Tone::Warning,
            EmployeeStatus::Inactive => Tone::Muted,
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::LABELS[*self as usize])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub designation: String,
    pub status: EmployeeStatus,
    pub joined: NaiveDate,
    pub salary: Decimal,
}

impl GridRow for Employee {
    fn row_id(&self) -> RowId {
        RowId::Int(self.id)
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "department" => self.department.as_str().into(),
            "designation" => self.designation.as_str().into(),
            "status" => self.status.to_string().into(),
            "joined" => self.joined.into(),
            "salary" => self.salary.into(),
            _ => CellValue::Null,
        }
    }
}

/// Staff directory.
pub struct EmployeesPage;

impl PageSpec for EmployeesPage {
    type Row = Employee;

    const ID: PageId = PageId::Employees;

    fn columns() -> Vec<ColumnDescriptor<Employee>> {
        vec![
            ColumnDescriptor::new("id", "ID").width(5).align(Alignment::Right),
            ColumnDescriptor::new("name", "Name").searchable(),
            ColumnDescriptor::new("department", "Department").searchable(),
            ColumnDescriptor::new("designation", "Designation").searchable(),
            ColumnDescriptor::new("status", "Status")
                .width(9)
                .render(|e: &Employee| CellContent::toned(e.status.to_string(), e.status.tone())),
            ColumnDescriptor::new("joined", "Joined").width(10),
            ColumnDescriptor::new("salary", "Salary")
                .width(12)
                .align(Alignment::Right)
                .render(|e: &Employee| CellContent::plain(money(e.salary))),
        ]
    }

    fn options() -> GridOptions {
        GridOptions::new()
            .filter(FilterDescriptor::new("department", "Department").values(DEPARTMENTS))
            .filter(FilterDescriptor::new("status", "Status").values(EmployeeStatus::LABELS))
            .search_placeholder("Search employees...")
            .selectable(true)
            .row_actions([ActionKind::View, ActionKind::Edit, ActionKind::Delete])
    }

    fn seed() -> Vec<Employee> {
        use EmployeeStatus::*;
        let rows = [
            ("Priya Nair", "Engineering", "Staff Engineer", Active, date(2019, 3, 11), 142_000),
            ("Marcus Webb", "Sales", "Account Executive", Active, date(2021, 7, 1), 78_500),
            ("Aiko Tanaka", "HR", "HR Business Partner", OnLeave, date(2020, 1, 20), 91_000),
            ("Daniel Okafor", "Finance", "Controller", Active, date(2017, 9, 4), 128_000),
            ("Sofia Alvarez", "Engineering", "Frontend Engineer", Active, date(2022, 5, 16), 104_000),
            ("Liam O'Brien", "Operations", "Facilities Lead", Inactive, date(2016, 11, 28), 69_000),
            ("Chen Wei", "Engineering", "Engineering Manager", Active, date(2018, 2, 5), 165_000),
            ("Hannah Schmidt", "HR", "Recruiter", Active, date(2023, 8, 21), 64_000),
            ("Omar Haddad", "Sales", "Sales Director", Active, date(2015, 4, 13), 172_500),
            ("Grace Kim", "Finance", "Payroll Specialist", OnLeave, date(2021, 10, 18), 72_000),
            ("Noah Fischer", "Operations", "Logistics Coordinator", Active, date(2024, 1, 8), 58_000),
            ("Amara Mensah", "Engineering", "Site Reliability Engineer", Active, date(2020, 6, 29), 131_000),
            ("Lucas Moreau", "Sales", "Sales Development Rep", Inactive, date(2022, 3, 7), 52_000),
            ("Isabel Costa", "HR", "People Operations Lead", Active, date(2019, 12, 2), 98_000),
        ];
        rows.into_iter()
            .enumerate()
            .map(
                |(i, (name, department, designation, status, joined, salary))| Employee {
                    id: 1001 + i as i64,
                    name: name.to_string(),
                    department: department.to_string(),
                    designation: designation.to_string(),
                    status,
                    joined,
                    salary: Decimal::from(salary),
                },
            )
            .collect()
    }

    fn describe(row: &Employee) -> String {
        row.name.clone()
    }

    fn edit_field(row: &Employee) -> Option<EditField> {
        Some(EditField {
            label: "Designation",
            value: row.designation.clone(),
        })
    }

    fn apply_edit(row: &mut Employee, value: &str) -> Result<(), ActionError> {
        row.designation = parse_text("designation", value, 40)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{AdminPage, AnyPage};
    use crate::settings::Settings;

    fn page() -> AdminPage<EmployeesPage> {
        AdminPage::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_edit_designation() {
        let mut page = page();
        let id = RowId::Int(1002);
        let outcome = page.submit_edit(&id, "  Senior Account Executive ");
        assert_eq!(outcome.unwrap().message, "Updated Marcus Webb");
        let row = page.grid().rows().iter().find(|e| e.id == 1002).unwrap();
        assert_eq!(row.designation, "Senior Account Executive");
    }

    #[test]
    fn test_edit_rejects_blank() {
        let mut page = page();
        let err = page.submit_edit(&RowId::Int(1002), "   ").unwrap_err();
        assert_eq!(err, ActionError::validation("designation", "cannot be empty"));
    }

    #[test]
    fn test_delete_removes_row_and_selection() {
        let mut page = page();
        let id = RowId::Int(1001);
        page.gesture(crate::presentation::Gesture::ToggleRow).unwrap();
        assert_eq!(page.selected_count(), 1);
        let outcome = page.dispatch(&ActionKind::Delete, &id);
        assert_eq!(outcome.unwrap().message, "Deleted Priya Nair");
        assert_eq!(page.grid().rows().len(), 13);
        assert_eq!(page.selected_count(), 0);
    }

    #[test]
    fn test_approve_not_offered() {
        let mut page = page();
        let err = page
            .dispatch(&ActionKind::Approve, &RowId::Int(1001))
            .unwrap_err();
        assert_eq!(err, ActionError::Unsupported(ActionKind::Approve));
    }

    #[test]
    fn test_filter_on_status_label() {
        let mut page = page();
        page.gesture(crate::presentation::Gesture::SetFilter {
            key: "status".into(),
            value: Some("On leave".into()),
        })
        .unwrap();
        let names: Vec<&str> = page
            .grid()
            .filtered_rows()
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Aiko Tanaka", "Grace Kim"]);
    }

    #[test]
    fn test_details_use_rendered_cells() {
        let page = page();
        let details = page.details(&RowId::Int(1001)).unwrap();
        assert!(details.contains(&("Salary".to_string(), "142,000.00".to_string())));
        assert!(details.contains(&("Status".to_string(), "Active".to_string())));
    }
}
