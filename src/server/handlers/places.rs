use axum::body::Bytes;
use axum::extract::{Extension, Json, Multipart, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{Place, PlaceDraft, PlacePatch};
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;
use crate::storage;

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    title: String,
    description: String,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<Place>, Error> {
    let place = api.find_place(user, id).await?;

    Ok(place.into())
}

pub async fn find_by_user(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Place>>, Error> {
    let places = api.find_places_by_creator(user, user_id).await?;

    Ok(places.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Place>), Error> {
    let mut title = String::new();
    let mut description = String::new();
    let mut address = String::new();
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => title = field.text().await?,
            "description" => description = field.text().await?,
            "address" => address = field.text().await?,
            "image" => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let data = field.bytes().await?;
                upload = Some((file_name, data));
            }
            _ => continue,
        }
    }

    let (file_name, data) = upload.ok_or_else(|| invalid_input_error())?;
    let image = storage::store_image(&file_name, &data).await?;

    let draft = PlaceDraft {
        title,
        description,
        address,
        image: image.clone(),
    };

    let place = match api.create_place(user, draft).await {
        Ok(place) => place,
        Err(err) => {
            // nothing was committed, so the stored blob is an orphan
            if let Err(cleanup_err) = storage::remove_image(&image).await {
                tracing::warn!("failed to remove image {}: {}", image, cleanup_err);
            }
            return Err(err);
        }
    };

    Ok((StatusCode::CREATED, place.into()))
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<Place>, Error> {
    let patch = PlacePatch {
        title: params.title,
        description: params.description,
    };

    let place = api.update_place(user, id, patch).await?;

    Ok(place.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    api.delete_place(user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
