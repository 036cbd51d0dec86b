use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::persistence::collection_fs_adapter_trait::Identified;

/// A staff member shifts can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeEntity {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeEntity {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}

impl Identified for EmployeeEntity {
    fn id(&self) -> &str {
        &self.id
    }
}
