use std::{error, fmt::Debug, result};

use async_trait::async_trait;
use model::{location::Location, mosque::Mosque, WithId};
use serde::Serialize;
use utility::id::{HasId, Id};

#[derive(Debug)]
pub enum DatabaseError {
    NotFound,
    Other(Box<dyn error::Error + Send + Sync>),
}

pub type Result<T> = result::Result<T, DatabaseError>;

#[async_trait]
pub trait Repo<T: Serialize + HasId>
where
    <T as HasId>::IdType: Debug + Clone + Serialize,
{
    async fn get(&mut self, id: Id<T>) -> Result<WithId<T>>;
    async fn get_all(&mut self) -> Result<Vec<WithId<T>>>;
    async fn insert(&mut self, element: T) -> Result<WithId<T>>;
    async fn update(&mut self, element: WithId<T>) -> Result<WithId<T>>;
    async fn delete(&mut self, id: Id<T>) -> Result<()>;
}

#[async_trait]
pub trait LocationRepo: Repo<Location> {
    /// Exact zip-code lookup. Fails with [`DatabaseError::NotFound`] when no
    /// location carries the code.
    async fn get_by_zip_code<S: Into<String> + Send>(
        &mut self,
        zip_code: S,
    ) -> Result<WithId<Location>>;
}

#[async_trait]
pub trait MosqueRepo: Repo<Mosque> {
    /// All mosques of a location, ordered ascending by the raw
    /// first-prayer-time label (byte-wise string order).
    async fn get_by_location(
        &mut self,
        location_id: &Id<Location>,
    ) -> Result<Vec<WithId<Mosque>>>;

    /// Case-insensitive substring search over mosque names. Results are
    /// ordered ascending by name before the limit applies, so the first
    /// match is reproducible.
    async fn find_by_name<S: Into<String> + Send>(
        &mut self,
        fragment: S,
        limit: i64,
    ) -> Result<Vec<WithId<Mosque>>>;
}

pub trait DatabaseOperations: LocationRepo + MosqueRepo {}

#[async_trait]
pub trait DatabaseTransaction: DatabaseOperations {
    async fn commit(self) -> Result<()>;
}

pub trait DatabaseAutocommit: DatabaseOperations {}

/// trait to implement a directory record store.
/// multiple concurrent accesses should be possible by e.g. cloning the
/// database object.
#[async_trait]
pub trait Database: Clone + Send + Sync + Sized {
    type Transaction: DatabaseTransaction + Send;
    type Autocommit: DatabaseAutocommit + Send;

    async fn transaction(&self) -> Result<Self::Transaction>;

    fn auto(&self) -> Self::Autocommit;
}
