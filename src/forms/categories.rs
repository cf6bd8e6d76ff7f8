use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::clock::{Clock, IdGenerator};
use crate::domain::types::{CategoryDescription, CategoryName, EntityValidationError};

/// Raw input for creating a category. Any field may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategoryForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryFormPayload {
    pub name: CategoryName,
    pub description: CategoryDescription,
    pub is_active: bool,
}

impl CreateCategoryFormPayload {
    pub fn into_category<C, G>(self, clock: &C, ids: &G) -> Result<Category, EntityValidationError>
    where
        C: Clock + ?Sized,
        G: IdGenerator + ?Sized,
    {
        Category::create(self.name, self.description, self.is_active, clock, ids)
    }
}

impl TryFrom<CreateCategoryForm> for CreateCategoryFormPayload {
    type Error = EntityValidationError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: CategoryName::from_optional(value.name)?,
            description: CategoryDescription::from_optional(value.description)?,
            is_active: value.is_active.unwrap_or(true),
        })
    }
}

/// Raw input for renaming a category. A missing description keeps the
/// current one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryForm {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    pub name: CategoryName,
    pub description: Option<CategoryDescription>,
}

impl UpdateCategoryFormPayload {
    pub fn apply_to(self, category: &mut Category) {
        category.apply_update(self.name, self.description);
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryFormPayload {
    type Error = EntityValidationError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: CategoryName::from_optional(value.name)?,
            description: value.description.map(CategoryDescription::new).transpose()?,
        })
    }
}
