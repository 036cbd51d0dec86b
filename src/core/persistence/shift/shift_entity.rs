use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::persistence::collection_fs_adapter_trait::Identified;

/// One employee working one interval on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEntity {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    /// Minutes since midnight of `date`.
    pub start: u32,
    /// Minutes since midnight of `date`; may exceed 1440.
    pub end: u32,
    /// Template the times were taken from, if any.
    pub shift_model_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ShiftEntity {
    pub fn new(
        employee_id: String,
        date: NaiveDate,
        start: u32,
        end: u32,
        shift_model_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id,
            date,
            start,
            end,
            shift_model_id,
            created_at: Utc::now(),
        }
    }

    pub fn is_within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.map_or(true, |f| self.date >= f) && to.map_or(true, |t| self.date <= t)
    }
}

impl Identified for ShiftEntity {
    fn id(&self) -> &str {
        &self.id
    }
}
