use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::persistence::collection_fs_adapter_trait::Identified;

/// Reusable start/end preset, e.g. "Early" 06:00-14:00.
///
/// Times are minutes since midnight; `end` past 1440 runs into the next day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftModelEntity {
    pub id: String,
    pub name: String,
    pub start: u32,
    pub end: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShiftModelEntity {
    pub fn new(name: String, start: u32, end: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            start,
            end,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, name: String, start: u32, end: u32) {
        self.name = name;
        self.start = start;
        self.end = end;
        self.updated_at = Utc::now();
    }
}

impl Identified for ShiftModelEntity {
    fn id(&self) -> &str {
        &self.id
    }
}
