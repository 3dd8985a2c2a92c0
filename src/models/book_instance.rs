//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Availability of a copy, stored as a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoanStatus {
    #[serde(rename = "m")]
    Maintenance,
    #[serde(rename = "o")]
    OnLoan,
    #[serde(rename = "a")]
    Available,
    #[serde(rename = "r")]
    Reserved,
}

impl LoanStatus {
    /// Code persisted in `book_instances.status`
    pub fn as_code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        }
    }
}

impl From<&str> for LoanStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "o" => LoanStatus::OnLoan,
            "a" => LoanStatus::Available,
            "r" => LoanStatus::Reserved,
            _ => LoanStatus::Maintenance,
        }
    }
}

/// Book instance record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Option<i32>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub status: String,
}

impl BookInstance {
    pub fn loan_status(&self) -> LoanStatus {
        LoanStatus::from(self.status.as_str())
    }

    /// A copy is overdue once its due date has passed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_back.map_or(false, |due| due < today)
    }
}

/// Copy as presented on a book's detail page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookCopy {
    pub id: Uuid,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub status: LoanStatus,
    pub status_label: String,
    pub is_overdue: bool,
}

impl BookCopy {
    pub fn from_instance(instance: BookInstance, today: NaiveDate) -> Self {
        let status = instance.loan_status();
        let is_overdue = instance.is_overdue(today);
        Self {
            id: instance.id,
            imprint: instance.imprint,
            due_back: instance.due_back,
            status,
            status_label: status.label().to_string(),
            is_overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(status: &str, due_back: Option<NaiveDate>) -> BookInstance {
        BookInstance {
            id: Uuid::nil(),
            book_id: Some(1),
            imprint: "Parnassus, 1968".to_string(),
            due_back,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(LoanStatus::from("a"), LoanStatus::Available);
        assert_eq!(LoanStatus::from("o"), LoanStatus::OnLoan);
        assert_eq!(LoanStatus::from("r"), LoanStatus::Reserved);
        assert_eq!(LoanStatus::from("m"), LoanStatus::Maintenance);
        assert_eq!(LoanStatus::from("x"), LoanStatus::Maintenance);
        assert_eq!(LoanStatus::Available.as_code(), "a");
        assert_eq!(serde_json::to_string(&LoanStatus::OnLoan).unwrap(), "\"o\"");
    }

    #[test]
    fn test_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 3, 9);

        assert!(instance("o", yesterday).is_overdue(today));
        assert!(!instance("o", Some(today)).is_overdue(today));
        assert!(!instance("a", None).is_overdue(today));
    }

    #[test]
    fn test_copy_view() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let copy = BookCopy::from_instance(instance("o", NaiveDate::from_ymd_opt(2024, 1, 1)), today);
        assert_eq!(copy.status, LoanStatus::OnLoan);
        assert_eq!(copy.status_label, "On loan");
        assert!(copy.is_overdue);
    }
}
