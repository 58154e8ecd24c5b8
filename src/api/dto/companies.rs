//! DTOs for company endpoints.

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/companies`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1 to 128 characters"))]
    pub name: String,
}
