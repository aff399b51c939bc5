use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directory::database::{MosqueRepo, Repo, Result};
use model::{location::Location, mosque::Mosque, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::{
    queries::mosque::{
        delete, find_by_name, get, get_all, get_by_location, insert, update,
    },
    PgDatabaseAutocommit, PgDatabaseTransaction,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct MosqueRow {
    pub id: String,
    pub location_id: String,
    pub name: String,
    pub first_prayer_time: String,
    pub second_prayer_time: String,
    pub address: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl DatabaseRow for MosqueRow {
    type Model = Mosque;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Mosque {
            location_id: Id::new(self.location_id),
            name: self.name,
            first_prayer_time: self.first_prayer_time,
            second_prayer_time: self.second_prayer_time,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

// Repo

#[async_trait]
impl Repo<Mosque> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Mosque>) -> Result<WithId<Mosque>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Mosque>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Mosque) -> Result<WithId<Mosque>> {
        insert(&self.pool, element).await
    }

    async fn update(&mut self, element: WithId<Mosque>) -> Result<WithId<Mosque>> {
        update(&self.pool, element).await
    }

    async fn delete(&mut self, id: Id<Mosque>) -> Result<()> {
        delete(&self.pool, id).await
    }
}

#[async_trait]
impl<'a> Repo<Mosque> for PgDatabaseTransaction<'a> {
    async fn get(&mut self, id: Id<Mosque>) -> Result<WithId<Mosque>> {
        get(&mut *self.tx, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Mosque>>> {
        get_all(&mut *self.tx).await
    }

    async fn insert(&mut self, element: Mosque) -> Result<WithId<Mosque>> {
        insert(&mut *self.tx, element).await
    }

    async fn update(&mut self, element: WithId<Mosque>) -> Result<WithId<Mosque>> {
        update(&mut *self.tx, element).await
    }

    async fn delete(&mut self, id: Id<Mosque>) -> Result<()> {
        delete(&mut *self.tx, id).await
    }
}

// Mosque Repo

#[async_trait]
impl MosqueRepo for PgDatabaseAutocommit {
    async fn get_by_location(
        &mut self,
        location_id: &Id<Location>,
    ) -> Result<Vec<WithId<Mosque>>> {
        get_by_location(&self.pool, location_id).await
    }

    async fn find_by_name<S: Into<String> + Send>(
        &mut self,
        fragment: S,
        limit: i64,
    ) -> Result<Vec<WithId<Mosque>>> {
        find_by_name(&self.pool, fragment, limit).await
    }
}

#[async_trait]
impl<'a> MosqueRepo for PgDatabaseTransaction<'a> {
    async fn get_by_location(
        &mut self,
        location_id: &Id<Location>,
    ) -> Result<Vec<WithId<Mosque>>> {
        get_by_location(&mut *self.tx, location_id).await
    }

    async fn find_by_name<S: Into<String> + Send>(
        &mut self,
        fragment: S,
        limit: i64,
    ) -> Result<Vec<WithId<Mosque>>> {
        find_by_name(&mut *self.tx, fragment, limit).await
    }
}
