use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use hrconsole_lib::error::ActionError;
use hrconsole_lib::{
    ActionKind, Alignment, CellContent, CellValue, ColumnDescriptor, FilterDescriptor,
    GridOptions, GridRow, Outcome, Repository, RowAction, RowId, Success, Tone, ToolbarAction,
};

use super::{PageId, PageSpec, date, money};

/// Toolbar action that generates every draft at once.
pub const GENERATE_ALL: &str = "generate-all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayslipStatus {
    Draft,
    Generated,
}

impl fmt::Display for PayslipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PayslipStatus::Draft => "Draft",
            PayslipStatus::Generated => "Generated",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payslip {
    pub id: i64,
    pub employee: String,
    /// First day of the pay month.
    pub month: NaiveDate,
    pub gross: Decimal,
    pub net: Decimal,
    pub status: PayslipStatus,
}

impl Payslip {
    fn period(&self) -> String {
        self.month.format("%b %Y").to_string()
    }
}

impl GridRow for Payslip {
    fn row_id(&self) -> RowId {
        RowId::Int(self.id)
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "employee" => self.employee.as_str().into(),
            "month" => self.month.into(),
            "gross" => self.gross.into(),
            "net" => self.net.into(),
            "status" => self.status.to_string().into(),
            _ => CellValue::Null,
        }
    }
}

/// Monthly payslips. Drafts become downloadable once generated.
pub struct PayslipsPage;

impl PageSpec for PayslipsPage {
    type Row = Payslip;

    const ID: PageId = PageId::Payslips;

    fn columns() -> Vec<ColumnDescriptor<Payslip>> {
        vec![
            ColumnDescriptor::new("employee", "Employee").searchable(),
            ColumnDescriptor::new("month", "Month")
                .width(8)
                .render(|p: &Payslip| CellContent::plain(p.period())),
            ColumnDescriptor::new("gross", "Gross")
                .width(12)
                .align(Alignment::Right)
                .render(|p: &Payslip| CellContent::plain(money(p.gross))),
            ColumnDescriptor::new("net", "Net")
                .width(12)
                .align(Alignment::Right)
                .render(|p: &Payslip| CellContent::plain(money(p.net))),
            ColumnDescriptor::new("status", "Status")
                .width(9)
                .render(|p: &Payslip| {
                    let tone = match p.status {
                        PayslipStatus::Draft => Tone::Muted,
                        PayslipStatus::Generated => Tone::Success,
                    };
                    CellContent::toned(p.status.to_string(), tone)
                }),
        ]
    }

    fn options() -> GridOptions {
        GridOptions::new()
            .filter(FilterDescriptor::new("status", "Status").values(["Draft", "Generated"]))
            .search_placeholder("Search payslips...")
            .toolbar_action(ToolbarAction::new(GENERATE_ALL, "Generate drafts").hotkey('G'))
            .row_actions([ActionKind::View, ActionKind::Generate, ActionKind::Download])
    }

    fn seed() -> Vec<Payslip> {
        use PayslipStatus::*;
        let mut rows = Vec::new();
        let staff = [
            ("Priya Nair", 1_183_333),
            ("Daniel Okafor", 1_066_667),
            ("Chen Wei", 1_375_000),
            ("Grace Kim", 600_000),
        ];
        for (month, status) in [(date(2026, 8, 1), Generated), (date(2026, 9, 1), Draft)] {
            for (employee, gross_cents) in staff {
                let gross = Decimal::new(gross_cents, 2);
                rows.push(Payslip {
                    id: rows.len() as i64 + 1,
                    employee: employee.to_string(),
                    month,
                    gross,
                    net: (gross * Decimal::new(72, 2)).round_dp(2),
                    status,
                });
            }
        }
        rows
    }

    fn describe(row: &Payslip) -> String {
        format!("{} payslip for {}", row.period(), row.employee)
    }

    fn handle(repo: &mut dyn Repository<Payslip>, action: &RowAction<Payslip>) -> Outcome {
        let payslip = &action.row;
        match (&action.kind, payslip.status) {
            (ActionKind::Generate, PayslipStatus::Draft) => {
                repo.mutate_row(
                    &payslip.row_id(),
                    Box::new(|p: &mut Payslip| p.status = PayslipStatus::Generated),
                )?;
                Ok(Success::new(format!("Generated {}", Self::describe(payslip))))
            }
            (ActionKind::Download, PayslipStatus::Generated) => Ok(Success::new(format!(
                "{} queued for download",
                Self::describe(payslip)
            ))),
            (ActionKind::Generate | ActionKind::Download, status) => Err(
                ActionError::invalid_transition(&action.kind, status.to_string().to_lowercase()),
            ),
            (kind, _) => Err(ActionError::Unsupported(kind.clone())),
        }
    }

    fn toolbar(repo: &mut dyn Repository<Payslip>, id: &str) -> Outcome {
        if id != GENERATE_ALL {
            return Err(ActionError::Unsupported(ActionKind::Custom(id.to_string())));
        }
        let drafts: Vec<RowId> = repo
            .fetch_rows()?
            .iter()
            .filter(|p| p.status == PayslipStatus::Draft)
            .map(GridRow::row_id)
            .collect();
        for id in &drafts {
            repo.mutate_row(
                id,
                Box::new(|p: &mut Payslip| p.status = PayslipStatus::Generated),
            )?;
        }
        Ok(Success::new(match drafts.len() {
            0 => "No draft payslips".to_string(),
            1 => "Generated 1 payslip".to_string(),
            n => format!("Generated {} payslips", n),
        }))
    }
}
