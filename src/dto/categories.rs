use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::category::Category;

/// Read model of a [`Category`] handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_string(),
            description: value.description().to_string(),
            is_active: value.is_active(),
            created_at: value.created_at(),
        }
    }
}
