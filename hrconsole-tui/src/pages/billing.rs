use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use hrconsole_lib::{
    ActionKind, Alignment, CellContent, CellValue, ColumnDescriptor, FilterDescriptor,
    GridOptions, GridRow, Outcome, Repository, RowAction, RowId, Tone,
};

use super::{Decidable, PageId, PageSpec, date, decide, money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Overdue,
    Paid,
}

impl InvoiceStatus {
    const LABELS: [&'static str; 3] = ["Pending", "Overdue", "Paid"];

    fn tone(self) -> Tone {
        match self {
            InvoiceStatus::Pending => Tone::Warning,
            InvoiceStatus::Overdue => Tone::Danger,
            InvoiceStatus::Paid => Tone::Success,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::LABELS[*self as usize])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingRequest {
    pub invoice: String,
    pub client: String,
    pub amount: Decimal,
    pub due: NaiveDate,
    pub status: InvoiceStatus,
}

impl GridRow for BillingRequest {
    fn row_id(&self) -> RowId {
        RowId::Text(self.invoice.clone())
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "invoice" => self.invoice.as_str().into(),
            "client" => self.client.as_str().into(),
            "amount" => self.amount.into(),
            "due" => self.due.into(),
            "status" => self.status.to_string().into(),
            _ => CellValue::Null,
        }
    }
}

/// Approving an invoice marks it paid. Overdue invoices can still be paid.
impl Decidable for BillingRequest {
    type Status = InvoiceStatus;

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn set_status(&mut self, status: InvoiceStatus) {
        self.status = status;
    }

    fn awaiting_decision(&self) -> bool {
        self.status != InvoiceStatus::Paid
    }

    fn approved() -> InvoiceStatus {
        InvoiceStatus::Paid
    }

    fn rejected() -> Option<InvoiceStatus> {
        None
    }
}

/// Client invoices awaiting payment.
pub struct BillingPage;

impl PageSpec for BillingPage {
    type Row = BillingRequest;

    const ID: PageId = PageId::Billing;

    fn columns() -> Vec<ColumnDescriptor<BillingRequest>> {
        vec![
            ColumnDescriptor::new("invoice", "Invoice").searchable().width(10),
            ColumnDescriptor::new("client", "Client").searchable(),
            ColumnDescriptor::new("amount", "Amount")
                .width(12)
                .align(Alignment::Right)
                .render(|b: &BillingRequest| CellContent::plain(money(b.amount))),
            ColumnDescriptor::new("due", "Due").width(10),
            ColumnDescriptor::new("status", "Status")
                .width(8)
                .sticky()
                .render(|b: &BillingRequest| {
                    CellContent::toned(b.status.to_string(), b.status.tone())
                }),
        ]
    }

    fn options() -> GridOptions {
        GridOptions::new()
            .filter(FilterDescriptor::new("status", "Status").values(InvoiceStatus::LABELS))
            .search_placeholder("Search invoices or clients...")
            .selectable(true)
            .row_actions([ActionKind::View, ActionKind::Approve, ActionKind::Delete])
    }

    fn seed() -> Vec<BillingRequest> {
        use InvoiceStatus::*;
        let rows = [
            ("INV-1038", "Northwind Traders", 1_250_000, date(2026, 9, 30), Paid),
            ("INV-1039", "Contoso Ltd", 480_050, date(2026, 10, 5), Overdue),
            ("INV-1040", "Globex Corporation", 2_100_000, date(2026, 10, 31), Pending),
            ("INV-1041", "Initech", 95_000, date(2026, 11, 15), Pending),
            ("INV-1042", "Umbrella Health", 3_375_025, date(2026, 10, 1), Overdue),
            ("INV-1043", "Stark Logistics", 760_000, date(2026, 11, 30), Pending),
            ("INV-1044", "Wayne Foods", 1_120_000, date(2026, 9, 15), Paid),
        ];
        rows.into_iter()
            .map(|(invoice, client, cents, due, status)| BillingRequest {
                invoice: invoice.to_string(),
                client: client.to_string(),
                amount: Decimal::new(cents, 2),
                due,
                status,
            })
            .collect()
    }

    fn describe(row: &BillingRequest) -> String {
        format!("{} ({})", row.invoice, row.client)
    }

    fn handle(
        repo: &mut dyn Repository<BillingRequest>,
        action: &RowAction<BillingRequest>,
    ) -> Outcome {
        decide(repo, action, &Self::describe(&action.row))
    }
}
