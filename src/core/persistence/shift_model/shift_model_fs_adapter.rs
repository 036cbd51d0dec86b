use chrono::{DateTime, Utc};

use crate::core::persistence::row_file_fs_adapter::{RowCodec, RowFileFsAdapter};

use super::shift_model_entity::ShiftModelEntity;

/// `shift_models.rcd` rows: `ID|NAME|START|END|CREATED_AT|UPDATED_AT`
pub type ShiftModelFsAdapter = RowFileFsAdapter<ShiftModelEntity>;

impl RowCodec for ShiftModelEntity {
    fn encode_row(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id,
            self.name,
            self.start,
            self.end,
            self.created_at.to_rfc3339(),
            self.updated_at.to_rfc3339(),
        )
    }

    fn decode_row(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 6 {
            return None;
        }

        Some(ShiftModelEntity {
            id: parts[0].to_string(),
            name: parts[1].to_string(),
            start: parts[2].parse().ok()?,
            end: parts[3].parse().ok()?,
            created_at: parts[4].parse::<DateTime<Utc>>().ok()?,
            updated_at: parts[5].parse::<DateTime<Utc>>().ok()?,
        })
    }
}
