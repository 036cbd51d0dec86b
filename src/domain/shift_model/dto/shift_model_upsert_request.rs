use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::common::validation::{check_interval, plain_text};

/// Create/replace payload for a shift template. Times are minutes since midnight.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_model_interval"))]
pub struct ShiftModelUpsertRequest {
    #[validate(length(min = 1, max = 50), custom(function = "plain_text"))]
    pub name: String,
    #[validate(range(max = 1439))]
    pub start: u32,
    #[validate(range(min = 1, max = 2880))]
    pub end: u32,
}

fn validate_model_interval(req: &ShiftModelUpsertRequest) -> Result<(), ValidationError> {
    check_interval(req.start, req.end)
}
