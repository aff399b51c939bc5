use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directory::database::{LocationRepo, Repo, Result};
use model::{location::Location, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::{
    queries::location::{delete, get, get_all, get_by_zip_code, insert, update},
    PgDatabaseAutocommit, PgDatabaseTransaction,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl DatabaseRow for LocationRow {
    type Model = Location;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Location {
            zip_code: self.zip_code,
            city: self.city,
            state: self.state,
            created_at: self.created_at,
        }
    }
}

// Repo

#[async_trait]
impl Repo<Location> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Location>) -> Result<WithId<Location>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Location>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Location) -> Result<WithId<Location>> {
        insert(&self.pool, element).await
    }

    async fn update(&mut self, element: WithId<Location>) -> Result<WithId<Location>> {
        update(&self.pool, element).await
    }

    async fn delete(&mut self, id: Id<Location>) -> Result<()> {
        delete(&self.pool, id).await
    }
}

#[async_trait]
impl<'a> Repo<Location> for PgDatabaseTransaction<'a> {
    async fn get(&mut self, id: Id<Location>) -> Result<WithId<Location>> {
        get(&mut *self.tx, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Location>>> {
        get_all(&mut *self.tx).await
    }

    async fn insert(&mut self, element: Location) -> Result<WithId<Location>> {
        insert(&mut *self.tx, element).await
    }

    async fn update(&mut self, element: WithId<Location>) -> Result<WithId<Location>> {
        update(&mut *self.tx, element).await
    }

    async fn delete(&mut self, id: Id<Location>) -> Result<()> {
        delete(&mut *self.tx, id).await
    }
}

// Location Repo

#[async_trait]
impl LocationRepo for PgDatabaseAutocommit {
    async fn get_by_zip_code<S: Into<String> + Send>(
        &mut self,
        zip_code: S,
    ) -> Result<WithId<Location>> {
        get_by_zip_code(&self.pool, zip_code).await
    }
}

#[async_trait]
impl<'a> LocationRepo for PgDatabaseTransaction<'a> {
    async fn get_by_zip_code<S: Into<String> + Send>(
        &mut self,
        zip_code: S,
    ) -> Result<WithId<Location>> {
        get_by_zip_code(&mut *self.tx, zip_code).await
    }
}
