//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod account;
mod report;
mod transfer;

pub use account::AccountService;
pub use report::{Report, ReportLine, ReportService, StatementStatus};
pub use transfer::{TransferService, TransferSummary};
