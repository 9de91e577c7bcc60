//! Query-parameter and response shapes owned by the HTTP layer.
//!
//! Entity bodies reuse the core models directly; only the parameter
//! envelopes live here.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_ROWS_PER_PAGE: u32 = 5;

/// `?page=&rowsPerPage=` with the historical defaults 0 and 5.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(rename = "rowsPerPage", default)]
    pub rows_per_page: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page.unwrap_or(DEFAULT_ROWS_PER_PAGE)
    }
}

/// `?msg=` for the diagnostic echo endpoint.
#[derive(Debug, Deserialize)]
pub struct EchoParams {
    #[serde(default)]
    pub msg: Option<String>,
}

/// `?name=&lastname=` for the or-match lookup.
#[derive(Debug, Deserialize)]
pub struct NameOrLastnameParams {
    pub name: String,
    pub lastname: String,
}

/// `?pattern=` for the regex lookup.
#[derive(Debug, Deserialize)]
pub struct RegexParams {
    pub pattern: String,
}

/// `?ageGT=&ageLT=`; both bounds are exclusive.
#[derive(Debug, Deserialize)]
pub struct AgeBetweenParams {
    #[serde(rename = "ageGT")]
    pub age_gt: i64,
    #[serde(rename = "ageLT")]
    pub age_lt: i64,
}

/// Response body for multi-document deletes.
#[derive(Debug, Serialize)]
pub struct DeletedCount {
    pub deleted: usize,
}
