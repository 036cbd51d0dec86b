use chrono::{DateTime, NaiveDate, Utc};

use crate::core::persistence::row_file_fs_adapter::{
    opt_field, parse_opt_field, RowCodec, RowFileFsAdapter,
};

use super::shift_entity::ShiftEntity;

/// `shifts.rcd` rows: `ID|EMPLOYEE_ID|DATE|START|END|SHIFT_MODEL_ID|CREATED_AT`
pub type ShiftFsAdapter = RowFileFsAdapter<ShiftEntity>;

impl RowCodec for ShiftEntity {
    fn encode_row(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.id,
            self.employee_id,
            self.date.format("%Y-%m-%d"),
            self.start,
            self.end,
            opt_field(&self.shift_model_id),
            self.created_at.to_rfc3339(),
        )
    }

    fn decode_row(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 7 {
            return None;
        }

        Some(ShiftEntity {
            id: parts[0].to_string(),
            employee_id: parts[1].to_string(),
            date: NaiveDate::parse_from_str(parts[2], "%Y-%m-%d").ok()?,
            start: parts[3].parse().ok()?,
            end: parts[4].parse().ok()?,
            shift_model_id: parse_opt_field(parts[5]),
            created_at: parts[6].parse::<DateTime<Utc>>().ok()?,
        })
    }
}
