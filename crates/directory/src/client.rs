use model::{location::Location, mosque::Mosque, search::SearchResult, WithId};
use utility::id::Id;

use crate::{
    database::{Database, DatabaseTransaction, MosqueRepo, Repo},
    resolver, RequestResult,
};

/// The façade the presentation layer talks to: search resolution plus the
/// administrative pass-through surface for both record kinds.
#[derive(Debug, Clone)]
pub struct Client<D>
where
    D: Database + Send + Sync + Sized + 'static,
{
    pub database: D,
}

impl<D> Client<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    /// Resolves a raw search query. `Ok(None)` means nothing matched.
    pub async fn search(&self, query: &str) -> RequestResult<Option<SearchResult>> {
        resolver::resolve(&mut self.database.auto(), query).await
    }
}

impl<D> Client<D>
where
    D: Database,
{
    /// All locations, ordered by state code then city.
    pub async fn get_locations(&self) -> RequestResult<Vec<WithId<Location>>> {
        Ok(Repo::<Location>::get_all(&mut self.database.auto()).await?)
    }

    pub async fn get_location(
        &self,
        id: Id<Location>,
    ) -> RequestResult<WithId<Location>> {
        Ok(Repo::<Location>::get(&mut self.database.auto(), id).await?)
    }

    pub async fn create_location(
        &self,
        location: Location,
    ) -> RequestResult<WithId<Location>> {
        log::info!("creating location for zip code {}", location.zip_code);
        Ok(Repo::<Location>::insert(&mut self.database.auto(), location).await?)
    }

    pub async fn update_location(
        &self,
        location: WithId<Location>,
    ) -> RequestResult<WithId<Location>> {
        log::info!("updating location {}", location.id);
        Ok(Repo::<Location>::update(&mut self.database.auto(), location).await?)
    }

    /// Deletes a location. The store cascades the delete to its mosques.
    pub async fn delete_location(&self, id: Id<Location>) -> RequestResult<()> {
        log::info!("deleting location {}", id);
        Ok(Repo::<Location>::delete(&mut self.database.auto(), id).await?)
    }
}

impl<D> Client<D>
where
    D: Database,
{
    /// All mosques, ordered by name.
    pub async fn get_mosques(&self) -> RequestResult<Vec<WithId<Mosque>>> {
        Ok(Repo::<Mosque>::get_all(&mut self.database.auto()).await?)
    }

    /// The mosques of one location, ordered ascending by the raw
    /// first-prayer-time label.
    pub async fn get_mosques_at(
        &self,
        location_id: &Id<Location>,
    ) -> RequestResult<Vec<WithId<Mosque>>> {
        Ok(self.database.auto().get_by_location(location_id).await?)
    }

    pub async fn get_mosque(&self, id: Id<Mosque>) -> RequestResult<WithId<Mosque>> {
        Ok(Repo::<Mosque>::get(&mut self.database.auto(), id).await?)
    }

    /// Creates a mosque after checking its owning location exists. Both
    /// steps run in one transaction.
    pub async fn create_mosque(&self, mosque: Mosque) -> RequestResult<WithId<Mosque>> {
        log::info!("creating mosque \"{}\"", mosque.name);
        let mut tx = self.database.transaction().await?;
        Repo::<Location>::get(&mut tx, mosque.location_id.clone()).await?;
        let result = Repo::<Mosque>::insert(&mut tx, mosque).await?;
        tx.commit().await?;
        Ok(result)
    }

    pub async fn update_mosque(
        &self,
        mosque: WithId<Mosque>,
    ) -> RequestResult<WithId<Mosque>> {
        log::info!("updating mosque {}", mosque.id);
        Ok(Repo::<Mosque>::update(&mut self.database.auto(), mosque).await?)
    }

    pub async fn delete_mosque(&self, id: Id<Mosque>) -> RequestResult<()> {
        log::info!("deleting mosque {}", id);
        Ok(Repo::<Mosque>::delete(&mut self.database.auto(), id).await?)
    }
}
