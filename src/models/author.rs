//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::BookSummary;

/// Author record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Name as shown in listings: "last_name, first_name"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Life dates as "1929-10-21 - 2018-01-22", with open ends left blank.
    pub fn lifespan(&self) -> Option<String> {
        match (self.date_of_birth, self.date_of_death) {
            (None, None) => None,
            (born, died) => Some(format!(
                "{} - {}",
                born.map(|d| d.to_string()).unwrap_or_default(),
                died.map(|d| d.to_string()).unwrap_or_default()
            )
            .trim()
            .to_string()),
        }
    }
}

/// Author with the books they wrote
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorDetail {
    #[serde(flatten)]
    pub author: Author,
    pub books: Vec<BookSummary>,
}
