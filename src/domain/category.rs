use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::clock::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use crate::domain::types::{CategoryDescription, CategoryId, CategoryName, EntityValidationError};

/// Catalog category with identity, activation flag and creation time.
///
/// Fields are private so that name and description can only change through
/// [`Category::update`], which validates before mutating. Deserialization
/// validates every field through the value object wrappers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    description: CategoryDescription,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Creates an active category stamped with the system clock and a random id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, EntityValidationError> {
        Self::new_with_status(name, description, true)
    }

    /// Creates a category with an explicit activation flag.
    pub fn new_with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, EntityValidationError> {
        let name = CategoryName::new(name)?;
        let description = CategoryDescription::new(description)?;
        Self::create(
            name,
            description,
            is_active,
            &SystemClock,
            &RandomIdGenerator,
        )
    }

    /// Creates a category from validated values using the given providers.
    pub fn create<C, G>(
        name: CategoryName,
        description: CategoryDescription,
        is_active: bool,
        clock: &C,
        ids: &G,
    ) -> Result<Self, EntityValidationError>
    where
        C: Clock + ?Sized,
        G: IdGenerator + ?Sized,
    {
        let id = CategoryId::new(ids.next_id())?;
        Ok(Self {
            id,
            name,
            description,
            is_active,
            created_at: clock.now(),
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces name and, when given, description.
    ///
    /// Both values are validated before anything is assigned, so a failure
    /// leaves the category untouched.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let name = CategoryName::new(name)?;
        let description = description.map(CategoryDescription::new).transpose()?;
        self.apply_update(name, description);
        Ok(())
    }

    /// Replaces only the name.
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        self.update(name, None)
    }

    /// Assigns already validated values; `None` keeps the current description.
    pub fn apply_update(&mut self, name: CategoryName, description: Option<CategoryDescription>) {
        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
