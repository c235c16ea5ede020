use std::fmt;

use chrono::NaiveDate;

use hrconsole_lib::{
    ActionKind, CellContent, CellValue, ColumnDescriptor, FilterDescriptor, GridOptions, GridRow,
    Outcome, Repository, RowAction, RowId,
};

use super::{Decidable, PageId, PageSpec, RequestStatus, date, decide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Morning,
    Evening,
    Night,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shift::Morning => "Morning 06-14",
            Shift::Evening => "Evening 14-22",
            Shift::Night => "Night 22-06",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSwap {
    pub id: i64,
    pub requester: String,
    pub counterpart: String,
    pub from_shift: Shift,
    pub to_shift: Shift,
    pub date: NaiveDate,
    pub status: RequestStatus,
}

impl GridRow for ShiftSwap {
    fn row_id(&self) -> RowId {
        RowId::Int(self.id)
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "requester" => self.requester.as_str().into(),
            "counterpart" => self.counterpart.as_str().into(),
            "from_shift" => self.from_shift.to_string().into(),
            "to_shift" => self.to_shift.to_string().into(),
            "date" => self.date.into(),
            "status" => self.status.to_string().into(),
            _ => CellValue::Null,
        }
    }
}

impl Decidable for ShiftSwap {
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

pub struct ShiftsPage;

impl PageSpec for ShiftsPage {
    type Row = ShiftSwap;

    const ID: PageId = PageId::Shifts;

    fn columns() -> Vec<ColumnDescriptor<ShiftSwap>> {
        vec![
            ColumnDescriptor::new("requester", "Requester").searchable(),
            ColumnDescriptor::new("counterpart", "Swap with").searchable(),
            ColumnDescriptor::new("from_shift", "From shift").unsortable(),
            ColumnDescriptor::new("to_shift", "To shift").unsortable(),
            ColumnDescriptor::new("date", "Date").width(10),
            ColumnDescriptor::new("status", "Status")
                .width(9)
                .render(|s: &ShiftSwap| CellContent::toned(s.status.to_string(), s.status.tone())),
        ]
    }

    fn options() -> GridOptions {
        GridOptions::new()
            .filter(FilterDescriptor::new("status", "Status").values(RequestStatus::LABELS))
            .search_placeholder("Search by name...")
            .row_actions([ActionKind::View, ActionKind::Approve, ActionKind::Reject])
    }

    fn seed() -> Vec<ShiftSwap> {
        use RequestStatus::*;
        use Shift::*;
        let rows = [
            ("Noah Fischer", "Liam O'Brien", Night, Morning, date(2026, 10, 20), Pending),
            ("Sofia Alvarez", "Amara Mensah", Evening, Morning, date(2026, 10, 22), Approved),
            ("Hannah Schmidt", "Isabel Costa", Morning, Evening, date(2026, 10, 24), Pending),
            ("Amara Mensah", "Chen Wei", Night, Evening, date(2026, 10, 29), Rejected),
            ("Marcus Webb", "Lucas Moreau", Morning, Night, date(2026, 11, 3), Pending),
            ("Grace Kim", "Daniel Okafor", Evening, Night, date(2026, 11, 5), Pending),
        ];
        rows.into_iter()
            .enumerate()
            .map(
                |(i, (requester, counterpart, from_shift, to_shift, date, status))| ShiftSwap {
                    id: i as i64 + 1,
                    requester: requester.to_string(),
                    counterpart: counterpart.to_string(),
                    from_shift,
                    to_shift,
                    date,
                    status,
                },
            )
            .collect()
    }

    fn describe(row: &ShiftSwap) -> String {
        format!("Swap {} ↔ {}", row.requester, row.counterpart)
    }

    fn handle(repo: &mut dyn Repository<ShiftSwap>, action: &RowAction<ShiftSwap>) -> Outcome {
        decide(repo, action, &Self::describe(&action.row))
    }
}
