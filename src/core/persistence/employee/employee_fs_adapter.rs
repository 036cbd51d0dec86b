use chrono::{DateTime, Utc};

use crate::core::persistence::row_file_fs_adapter::{RowCodec, RowFileFsAdapter};

use super::employee_entity::EmployeeEntity;

/// `employees.rcd` rows: `ID|NAME|CREATED_AT|UPDATED_AT`
pub type EmployeeFsAdapter = RowFileFsAdapter<EmployeeEntity>;

impl RowCodec for EmployeeEntity {
    fn encode_row(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.id,
            self.name,
            self.created_at.to_rfc3339(),
            self.updated_at.to_rfc3339(),
        )
    }

    fn decode_row(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 4 {
            return None;
        }

        Some(EmployeeEntity {
            id: parts[0].to_string(),
            name: parts[1].to_string(),
            created_at: parts[2].parse::<DateTime<Utc>>().ok()?,
            updated_at: parts[3].parse::<DateTime<Utc>>().ok()?,
        })
    }
}
