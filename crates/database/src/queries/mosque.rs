use directory::database::Result;
use model::{location::Location, mosque::Mosque, WithId};
use sqlx::{Executor, Postgres};
use utility::id::Id;

use crate::data_model::{mosque::MosqueRow, with_id, with_ids};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Mosque>) -> Result<WithId<Mosque>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, location_id, name, first_prayer_time, second_prayer_time,
            address, created_at
        FROM mosques
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: MosqueRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Mosque>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, location_id, name, first_prayer_time, second_prayer_time,
            address, created_at
        FROM mosques
        ORDER BY name COLLATE \"C\" ASC, id ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map(|rows: Vec<MosqueRow>| with_ids(rows))
    .map_err(convert_error)
}

// The prayer-time labels are free text and stay unparsed; COLLATE "C" pins
// the ordering to plain byte order so it matches string ordering in Rust.
pub async fn get_by_location<'c, E>(
    executor: E,
    location_id: &Id<Location>,
) -> Result<Vec<WithId<Mosque>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, location_id, name, first_prayer_time, second_prayer_time,
            address, created_at
        FROM mosques
        WHERE location_id = $1
        ORDER BY first_prayer_time COLLATE \"C\" ASC, name COLLATE \"C\" ASC;
        ",
    )
    .bind(location_id.raw())
    .fetch_all(executor)
    .await
    .map(|rows: Vec<MosqueRow>| with_ids(rows))
    .map_err(convert_error)
}

pub async fn find_by_name<'c, E, S>(
    executor: E,
    fragment: S,
    limit: i64,
) -> Result<Vec<WithId<Mosque>>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    let fragment: String = fragment.into().replace('%', "").replace('_', "");
    let pattern = format!("%{}%", fragment);
    sqlx::query_as(
        "
        SELECT
            id, location_id, name, first_prayer_time, second_prayer_time,
            address, created_at
        FROM mosques
        WHERE name ILIKE $1
        ORDER BY name COLLATE \"C\" ASC, id ASC
        LIMIT $2;
        ",
    )
    .bind(pattern)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map(|rows: Vec<MosqueRow>| with_ids(rows))
    .map_err(convert_error)
}

pub async fn insert<'c, E>(executor: E, mosque: Mosque) -> Result<WithId<Mosque>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO mosques(
            location_id,
            name,
            first_prayer_time,
            second_prayer_time,
            address
        )
        VALUES ($1, $2, $3, $4, $5)
        RETURNING
            id, location_id, name, first_prayer_time, second_prayer_time,
            address, created_at;
        ",
    )
    .bind(mosque.location_id.raw())
    .bind(&mosque.name)
    .bind(&mosque.first_prayer_time)
    .bind(&mosque.second_prayer_time)
    .bind(&mosque.address)
    .fetch_one(executor)
    .await
    .map(|row: MosqueRow| with_id(row))
    .map_err(convert_error)
}

pub async fn update<'c, E>(
    executor: E,
    mosque: WithId<Mosque>,
) -> Result<WithId<Mosque>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        UPDATE mosques
        SET location_id = $1,
            name = $2,
            first_prayer_time = $3,
            second_prayer_time = $4,
            address = $5
        WHERE id = $6
        RETURNING
            id, location_id, name, first_prayer_time, second_prayer_time,
            address, created_at;
        ",
    )
    .bind(mosque.content.location_id.raw())
    .bind(&mosque.content.name)
    .bind(&mosque.content.first_prayer_time)
    .bind(&mosque.content.second_prayer_time)
    .bind(&mosque.content.address)
    .bind(mosque.id.raw())
    .fetch_one(executor)
    .await
    .map(|row: MosqueRow| with_id(row))
    .map_err(convert_error)
}

pub async fn delete<'c, E>(executor: E, id: Id<Mosque>) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    let result = sqlx::query(
        "
        DELETE FROM mosques
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .execute(executor)
    .await
    .map_err(convert_error)?;

    if result.rows_affected() == 0 {
        return Err(directory::database::DatabaseError::NotFound);
    }
    Ok(())
}
