use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::persistence::setting::theme::Theme;
use crate::domain::common::validation::{email_or_blank, plain_text};

/// Partial update of the account settings; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SettingUpsertRequest {
    #[validate(length(min = 1, max = 100), custom(function = "plain_text"))]
    pub display_name: Option<String>,

    /// An empty string clears the stored address.
    #[validate(length(max = 254), custom(function = "email_or_blank"))]
    pub email: Option<String>,

    pub theme: Option<Theme>,

    #[validate(length(min = 2, max = 5), custom(function = "plain_text"))]
    pub language: Option<String>,
}
