use directory::database::Result;
use model::{location::Location, WithId};
use sqlx::{Executor, Postgres};
use utility::id::Id;

use crate::data_model::{location::LocationRow, with_id, with_ids};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Location>) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, zip_code, city, state, created_at
        FROM locations
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, zip_code, city, state, created_at
        FROM locations
        ORDER BY state ASC, city ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map(|rows: Vec<LocationRow>| with_ids(rows))
    .map_err(convert_error)
}

pub async fn get_by_zip_code<'c, E, S>(
    executor: E,
    zip_code: S,
) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    sqlx::query_as(
        "
        SELECT id, zip_code, city, state, created_at
        FROM locations
        WHERE zip_code = $1;
        ",
    )
    .bind(zip_code.into())
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn insert<'c, E>(executor: E, location: Location) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO locations(zip_code, city, state)
        VALUES ($1, $2, $3)
        RETURNING id, zip_code, city, state, created_at;
        ",
    )
    .bind(&location.zip_code)
    .bind(&location.city)
    .bind(&location.state)
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn update<'c, E>(
    executor: E,
    location: WithId<Location>,
) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        UPDATE locations
        SET zip_code = $1,
            city = $2,
            state = $3
        WHERE id = $4
        RETURNING id, zip_code, city, state, created_at;
        ",
    )
    .bind(&location.content.zip_code)
    .bind(&location.content.city)
    .bind(&location.content.state)
    .bind(location.id.raw())
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn delete<'c, E>(executor: E, id: Id<Location>) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    let result = sqlx::query(
        "
        DELETE FROM locations
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
