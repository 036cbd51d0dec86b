//! Shift API DTOs

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ShiftListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(alias = "employee-id")]
    pub employee_id: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ShiftRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
