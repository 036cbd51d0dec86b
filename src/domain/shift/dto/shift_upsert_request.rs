use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::common::validation::check_interval;

/// Create/replace payload for a shift assignment.
///
/// Times come either from `start`/`end` (minutes since midnight) or, when both
/// are omitted, from the referenced shift model.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_shift_times"))]
pub struct ShiftUpsertRequest {
    #[validate(length(min = 1))]
    pub employee_id: String,
    pub date: NaiveDate,
    pub shift_model_id: Option<String>,
    #[validate(range(max = 1439))]
    pub start: Option<u32>,
    #[validate(range(min = 1, max = 2880))]
    pub end: Option<u32>,
}

impl ShiftUpsertRequest {
    pub fn model_id(&self) -> Option<&str> {
        self.shift_model_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

fn validate_shift_times(req: &ShiftUpsertRequest) -> Result<(), ValidationError> {
    match (req.start, req.end) {
        (Some(start), Some(end)) => check_interval(start, end),
        (None, None) if req.model_id().is_some() => Ok(()),
        (None, None) => Err(ValidationError::new("missing_times")
            .with_message("either shift_model_id or start and end are required".into())),
        _ => Err(ValidationError::new("partial_times")
            .with_message("start and end must be given together".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> ShiftUpsertRequest {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn explicit_times_or_model_are_required() {
        let base = json!({ "employee_id": "e1", "date": "2026-10-19" });
        assert!(parse(base.clone()).validate().is_err());

        let mut with_model = base.clone();
        with_model["shift_model_id"] = json!("m1");
        assert!(parse(with_model).validate().is_ok());

        let mut blank_model = base.clone();
        blank_model["shift_model_id"] = json!("  ");
        assert!(parse(blank_model).validate().is_err());

        let mut with_times = base;
        with_times["start"] = json!(480);
        with_times["end"] = json!(960);
        assert!(parse(with_times).validate().is_ok());
    }

    #[test]
    fn half_an_interval_is_rejected() {
        let req = parse(json!({ "employee_id": "e1", "date": "2026-10-19", "start": 480 }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn overnight_end_is_allowed() {
        let req = parse(json!({
            "employee_id": "e1", "date": "2026-10-19", "start": 1320, "end": 1800
        }));
        assert!(req.validate().is_ok());
    }
}
