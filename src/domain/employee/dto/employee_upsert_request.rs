use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::common::validation::plain_text;

/// Create/rename payload for an employee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeUpsertRequest {
    #[validate(length(min = 1, max = 100), custom(function = "plain_text"))]
    pub name: String,
}
