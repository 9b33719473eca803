use super::Database;

use sqlx::{types::Json, Executor, Row, Transaction};
use uuid::Uuid;

use crate::{
    entities::{Member, Place},
    error::{not_found_error, Error},
};

#[tracing::instrument(skip(tx))]
pub async fn fetch_place_for_update(
    tx: &mut Transaction<'_, Database>,
    id: &Uuid,
) -> Result<Place, Error> {
    let Json(place): Json<Place> = tx
        .fetch_optional(sqlx::query("SELECT data FROM places WHERE id = $1 FOR UPDATE").bind(id))
        .await?
        .ok_or_else(|| not_found_error())?
        .try_get("data")?;

    Ok(place)
}

#[tracing::instrument(skip(tx))]
pub async fn fetch_member_for_update(
    tx: &mut Transaction<'_, Database>,
    id: &Uuid,
) -> Result<Member, Error> {
    let Json(member): Json<Member> = tx
        .fetch_optional(sqlx::query("SELECT data FROM members WHERE id = $1 FOR UPDATE").bind(id))
        .await?
        .ok_or_else(|| not_found_error())?
        .try_get("data")?;

    Ok(member)
}

#[tracing::instrument(skip(tx))]
pub async fn insert_place(tx: &mut Transaction<'_, Database>, place: &Place) -> Result<(), Error> {
    tx.execute(
        sqlx::query("INSERT INTO places (id, creator, data) VALUES ($1, $2, $3)")
            .bind(&place.id)
            .bind(&place.creator)
            .bind(Json(place)),
    )
    .await?;

    Ok(())
}

#[tracing::instrument(skip(tx))]
pub async fn update_place(tx: &mut Transaction<'_, Database>, place: &Place) -> Result<(), Error> {
    tx.execute(
        sqlx::query("UPDATE places SET data = $2 WHERE id = $1")
            .bind(&place.id)
            .bind(Json(place)),
    )
    .await?;

    Ok(())
}

#[tracing::instrument(skip(tx))]
pub async fn delete_place(tx: &mut Transaction<'_, Database>, id: &Uuid) -> Result<(), Error> {
    tx.execute(sqlx::query("DELETE FROM places WHERE id = $1").bind(id))
        .await?;

    Ok(())
}

#[tracing::instrument(skip(tx))]
pub async fn update_member(
    tx: &mut Transaction<'_, Database>,
    member: &Member,
) -> Result<(), Error> {
    tx.execute(
        sqlx::query("UPDATE members SET data = $2 WHERE id = $1")
            .bind(&member.id)
            .bind(Json(member)),
    )
    .await?;

    Ok(())
}
