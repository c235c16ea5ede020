use std::fmt;

use chrono::NaiveDate;

use hrconsole_lib::{
    ActionKind, Alignment, CellContent, CellValue, ColumnDescriptor, FilterDescriptor,
    GridOptions, GridRow, Outcome, Repository, RowAction, RowId,
};

use super::{Decidable, PageId, PageSpec, RequestStatus, date, decide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveType {
    Annual,
    Sick,
    Parental,
    Unpaid,
}

impl LeaveType {
    const LABELS: [&'static str; 4] = ["Annual", "Sick", "Parental", "Unpaid"];
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::LABELS[*self as usize])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee: String,
    pub kind: LeaveType,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub status: RequestStatus,
}

impl LeaveRequest {
    /// Calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

impl GridRow for LeaveRequest {
    fn row_id(&self) -> RowId {
        RowId::Int(self.id)
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "employee" => self.employee.as_str().into(),
            "type" => self.kind.to_string().into(),
            "from" => self.from.into(),
            "to" => self.to.into(),
            "days" => self.days().into(),
            "status" => self.status.to_string().into(),
            _ => CellValue::Null,
        }
    }
}

impl Decidable for LeaveRequest {
    type Status = RequestStatus;

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    fn awaiting_decision(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    fn approved() -> RequestStatus {
        RequestStatus::Approved
    }

    fn rejected() -> Option<RequestStatus> {
        Some(RequestStatus::Rejected)
    }
}

/// Time-off requests waiting for a manager.
pub struct LeavePage;

impl PageSpec for LeavePage {
    type Row = LeaveRequest;

    const ID: PageId = PageId::Leave;

    fn columns() -> Vec<ColumnDescriptor<LeaveRequest>> {
        vec![
            ColumnDescriptor::new("id", "#").width(4).align(Alignment::Right),
            ColumnDescriptor::new("employee", "Employee").searchable(),
            ColumnDescriptor::new("type", "Type").searchable().width(9),
            ColumnDescriptor::new("from", "From").width(10),
            ColumnDescriptor::new("to", "To").width(10),
            ColumnDescriptor::new("days", "Days").width(6).align(Alignment::Right),
            ColumnDescriptor::new("status", "Status")
                .width(9)
                .render(|r: &LeaveRequest| {
                    CellContent::toned(r.status.to_string(), r.status.tone())
                }),
        ]
    }

    fn options() -> GridOptions {
        GridOptions::new()
            .filter(FilterDescriptor::new("status", "Status").values(RequestStatus::LABELS))
            .filter(FilterDescriptor::new("type", "Leave type").values(LeaveType::LABELS))
            .search_placeholder("Search leave requests...")
            .selectable(true)
            .row_actions([ActionKind::View, ActionKind::Approve, ActionKind::Reject])
    }

    fn seed() -> Vec<LeaveRequest> {
        use LeaveType::*;
        use RequestStatus::*;
        let rows = [
            ("Priya Nair", Annual, date(2026, 11, 2), date(2026, 11, 6), Pending),
            ("Marcus Webb", Sick, date(2026, 10, 12), date(2026, 10, 13), Approved),
            ("Aiko Tanaka", Parental, date(2026, 9, 1), date(2026, 12, 31), Approved),
            ("Chen Wei", Annual, date(2026, 12, 21), date(2027, 1, 2), Pending),
            ("Hannah Schmidt", Unpaid, date(2026, 11, 16), date(2026, 11, 20), Rejected),
            ("Grace Kim", Sick, date(2026, 10, 14), date(2026, 10, 17), Pending),
            ("Omar Haddad", Annual, date(2026, 11, 23), date(2026, 11, 27), Pending),
            ("Noah Fischer", Annual, date(2026, 12, 28), date(2026, 12, 30), Approved),
            ("Isabel Costa", Unpaid, date(2027, 1, 12), date(2027, 1, 14), Pending),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (employee, kind, from, to, status))| LeaveRequest {
                id: i as i64 + 1,
                employee: employee.to_string(),
                kind,
                from,
                to,
                status,
            })
            .collect()
    }

    fn describe(row: &LeaveRequest) -> String {
        format!("{} leave for {}", row.kind, row.employee)
    }

    fn handle(repo: &mut dyn Repository<LeaveRequest>, action: &RowAction<LeaveRequest>) -> Outcome {
        decide(repo, action, &Self::describe(&action.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{AdminPage, AnyPage};
    use crate::settings::Settings;
    use hrconsole_lib::error::ActionError;

    fn page() -> AdminPage<LeavePage> {
        AdminPage::new(&Settings::default()).unwrap()
    }

    fn status(page: &AdminPage<LeavePage>, id: i64) -> RequestStatus {
        page.grid()
            .rows()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.status)
            .unwrap()
    }

    #[test]
    fn test_days_inclusive() {
        let rows = LeavePage::seed();
        assert_eq!(rows[0].days(), 5);
        assert_eq!(rows[3].days(), 13);
    }

    #[test]
    fn test_approve_pending() {
        let mut page = page();
        let outcome = page.dispatch(&ActionKind::Approve, &RowId::Int(1));
        assert_eq!(
            outcome.unwrap().message,
            "Annual leave for Priya Nair: approved"
        );
        assert_eq!(status(&page, 1), RequestStatus::Approved);
    }

    #[test]
    fn test_approve_only_from_pending() {
        let mut page = page();
        let err = page
            .dispatch(&ActionKind::Approve, &RowId::Int(5))
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::InvalidTransition {
                action: "approve".into(),
                state: "rejected".into(),
            }
        );
        assert_eq!(status(&page, 5), RequestStatus::Rejected);
    }

    #[test]
    fn test_reject_then_approve_refused() {
        let mut page = page();
        page.dispatch(&ActionKind::Reject, &RowId::Int(6)).unwrap();
        assert_eq!(status(&page, 6), RequestStatus::Rejected);
        assert!(page.dispatch(&ActionKind::Approve, &RowId::Int(6)).is_err());
    }

    #[test]
    fn test_status_filter_follows_decisions() {
        let mut page = page();
        page.gesture(crate::presentation::Gesture::SetFilter {
            key: "status".into(),
            value: Some("Pending".into()),
        })
        .unwrap();
        assert_eq!(page.grid().view().total_filtered_count, 5);
        page.dispatch(&ActionKind::Approve, &RowId::Int(4)).unwrap();
        assert_eq!(page.grid().view().total_filtered_count, 4);
    }

    #[test]
    fn test_missing_request() {
        let mut page = page();
        let err = page
            .dispatch(&ActionKind::Approve, &RowId::Int(99))
            .unwrap_err();
        assert_eq!(err, ActionError::NotFound(RowId::Int(99)));
    }
}
