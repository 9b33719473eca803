use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The owning user record, as far as this service is concerned: an id and
/// the ordered list of place ids the user created. Provisioning members is
/// the user service's job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub places: Vec<Uuid>,
}

impl Member {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            places: Vec::new(),
        }
    }

    pub fn attach(&mut self, place_id: Uuid) {
        self.places.push(place_id);
    }

    pub fn detach(&mut self, place_id: Uuid) {
        self.places.retain(|id| id != &place_id);
    }
}
