use crate::domain::category::Category;
use crate::domain::clock::{Clock, IdGenerator};
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{
    CreateCategoryForm, CreateCategoryFormPayload, UpdateCategoryForm, UpdateCategoryFormPayload,
};

use super::{ServiceError, ServiceResult};

/// Validates the form and builds a new category stamped by `clock` and `ids`.
pub fn create_category<C, G>(
    form: CreateCategoryForm,
    clock: &C,
    ids: &G,
) -> ServiceResult<Category>
where
    C: Clock + ?Sized,
    G: IdGenerator + ?Sized,
{
    let payload = CreateCategoryFormPayload::try_from(form).map_err(|e| {
        log::warn!("Rejected category creation: {e}");
        ServiceError::from(e)
    })?;

    match payload.into_category(clock, ids) {
        Ok(category) => {
            log::info!("Created category {} ({})", category.id(), category.name());
            Ok(category)
        }
        Err(e) => {
            log::error!("Failed to stamp new category: {e}");
            Err(e.into())
        }
    }
}

/// Validates the form and applies it to `category`. On error the category is
/// left as it was.
pub fn update_category(
    category: &mut Category,
    form: UpdateCategoryForm,
) -> ServiceResult<CategoryDto> {
    let payload = match UpdateCategoryFormPayload::try_from(form) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Rejected update of category {}: {e}", category.id());
            return Err(e.into());
        }
    };

    payload.apply_to(category);
    log::info!("Updated category {}", category.id());
    Ok(CategoryDto::from(&*category))
}

pub fn activate_category(category: &mut Category) -> CategoryDto {
    category.activate();
    log::debug!("Activated category {}", category.id());
    CategoryDto::from(&*category)
}

pub fn deactivate_category(category: &mut Category) -> CategoryDto {
    category.deactivate();
    log::debug!("Deactivated category {}", category.id());
    CategoryDto::from(&*category)
}
