use chrono::NaiveDate;
use serde::Deserialize;

use super::task::{Priority, Status};

// Login / registration credentials. Both fields stay optional so an omitted
// field reaches the service as an absent credential instead of being rejected
// by the JSON extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

// Inbound task body for create and update. Status and priority stay optional so
// their absence surfaces as a validation failure instead of a deserialization
// error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPayload {
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<i64>,
    pub category_id: Option<i64>,
    pub due_date: Option<NaiveDate>,
}

// Sparse filter template for task search; unset fields are unconstrained.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFilter {
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub category_id: Option<i64>,
    pub due_date: Option<NaiveDate>,
}

// Query parameters of the search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub offset: u64,
    #[serde(rename = "orderBy")]
    pub order_by: String,
    pub ascending: bool,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            offset: 0,
            order_by: String::new(),
            ascending: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}
