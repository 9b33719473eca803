use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{Place, PlaceDraft, PlacePatch};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    async fn find_place(&self, user: User, id: Uuid) -> Result<Place, Error>;

    async fn find_places_by_creator(
        &self,
        user: User,
        creator_id: Uuid,
    ) -> Result<Vec<Place>, Error>;

    async fn create_place(&self, user: User, draft: PlaceDraft) -> Result<Place, Error>;

    async fn update_place(&self, user: User, id: Uuid, patch: PlacePatch) -> Result<Place, Error>;

    async fn delete_place(&self, user: User, id: Uuid) -> Result<(), Error>;
}

pub trait API: PlaceAPI {}
