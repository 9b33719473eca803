use chrono::{DateTime, Utc};
use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, Error};

const MIN_DESCRIPTION_LEN: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Coordinates,
    pub image: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the create request, with the image already written
/// to blob storage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub image: String,
}

/// The two mutable fields of a place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacePatch {
    pub title: String,
    pub description: String,
}

impl PlaceDraft {
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() || self.address.trim().is_empty() {
            return Err(invalid_input_error());
        }

        if self.description.len() < MIN_DESCRIPTION_LEN {
            return Err(invalid_input_error());
        }

        Ok(())
    }
}

impl PlacePatch {
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() || self.description.len() < MIN_DESCRIPTION_LEN {
            return Err(invalid_input_error());
        }

        Ok(())
    }
}

impl Place {
    pub fn new(draft: PlaceDraft, location: Coordinates, creator: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            address: draft.address,
            location,
            image: draft.image,
            creator,
            created_at: Utc::now(),
        }
    }

    /// Applies the patch to the two editable fields, leaving everything
    /// else untouched.
    pub fn edit(&mut self, patch: PlacePatch) {
        self.title = patch.title;
        self.description = patch.description;
    }
}

impl PolarClass for Place {
    fn get_polar_class_builder() -> oso::ClassBuilder<Place> {
        oso::Class::builder()
            .name("Place")
            .add_attribute_getter("id", |recv: &Place| recv.id.to_string())
            .add_attribute_getter("creator", |recv: &Place| recv.creator.to_string())
    }

    fn get_polar_class() -> oso::Class {
        let builder = Place::get_polar_class_builder();
        builder.build()
    }
}
