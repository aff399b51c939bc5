//! In-memory record store used by the crate's tests. Clones share state,
//! mirroring the pool-backed handle of the real store.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard,
};

use async_trait::async_trait;
use model::{location::Location, mosque::Mosque, WithId};
use tokio::sync::Semaphore;
use utility::id::Id;

use crate::database::{
    Database, DatabaseAutocommit, DatabaseError, DatabaseOperations,
    DatabaseTransaction, LocationRepo, MosqueRepo, Repo, Result,
};

#[derive(Debug, Default)]
struct State {
    locations: Vec<WithId<Location>>,
    mosques: Vec<WithId<Mosque>>,
    next_id: u64,
}

impl State {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("id-{}", self.next_id)
    }
}

/// Lets a test hold a query open: the store signals `entered` when a name
/// search begins and waits for `release` before answering.
#[derive(Clone)]
pub struct Pause {
    pub entered: Arc<Semaphore>,
    pub release: Arc<Semaphore>,
}

impl Pause {
    pub fn new() -> Self {
        Self {
            entered: Arc::new(Semaphore::new(0)),
            release: Arc::new(Semaphore::new(0)),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<Mutex<State>>,
    calls: Arc<AtomicUsize>,
    pause: Option<Pause>,
}

impl MemoryDatabase {
    pub fn paused(pause: Pause) -> Self {
        Self {
            pause: Some(pause),
            ..Default::default()
        }
    }

    /// Number of store queries issued so far (seeding not counted).
    pub fn store_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seed_location(&self, zip_code: &str, city: &str, state: &str) -> Id<Location> {
        let mut guard = self.state.lock().unwrap();
        let id: Id<Location> = Id::new(guard.next_id());
        guard.locations.push(WithId::new(
            id.clone(),
            Location {
                zip_code: zip_code.to_owned(),
                city: city.to_owned(),
                state: state.to_owned(),
                created_at: None,
            },
        ));
        id
    }

    pub fn seed_mosque(
        &self,
        location_id: &Id<Location>,
        name: &str,
        first_prayer_time: &str,
        second_prayer_time: &str,
        address: &str,
    ) -> Id<Mosque> {
        let mut guard = self.state.lock().unwrap();
        let id: Id<Mosque> = Id::new(guard.next_id());
        guard.mosques.push(WithId::new(
            id.clone(),
            Mosque {
                location_id: location_id.clone(),
                name: name.to_owned(),
                first_prayer_time: first_prayer_time.to_owned(),
                second_prayer_time: second_prayer_time.to_owned(),
                address: address.to_owned(),
                created_at: None,
            },
        ));
        id
    }

    fn executor(&self) -> MemoryExecutor {
        MemoryExecutor {
            state: self.state.clone(),
            calls: self.calls.clone(),
            pause: self.pause.clone(),
        }
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    type Transaction = MemoryExecutor;
    type Autocommit = MemoryExecutor;

    async fn transaction(&self) -> Result<Self::Transaction> {
        Ok(self.executor())
    }

    fn auto(&self) -> Self::Autocommit {
        self.executor()
    }
}

pub struct MemoryExecutor {
    state: Arc<Mutex<State>>,
    calls: Arc<AtomicUsize>,
    pause: Option<Pause>,
}

impl MemoryExecutor {
    fn count_call(&self) -> MutexGuard<'_, State> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.state.lock().unwrap()
    }

    async fn gate(&self) {
        if let Some(pause) = &self.pause {
            pause.entered.add_permits(1);
            pause
                .release
                .acquire()
                .await
                .expect("release semaphore closed")
                .forget();
        }
    }
}

impl DatabaseOperations for MemoryExecutor {}

impl DatabaseAutocommit for MemoryExecutor {}

#[async_trait]
impl DatabaseTransaction for MemoryExecutor {
    // Writes apply eagerly; rollback is not modelled.
    async fn commit(self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl Repo<Location> for MemoryExecutor {
    async fn get(&mut self, id: Id<Location>) -> Result<WithId<Location>> {
        let guard = self.count_call();
        guard
            .locations
            .iter()
            .find(|location| location.id == id)
            .cloned()
            .ok_or(DatabaseError::NotFound)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Location>>> {
        let guard = self.count_call();
        let mut locations = guard.locations.clone();
        locations.sort_by(|a, b| {
            (&a.content.state, &a.content.city).cmp(&(&b.content.state, &b.content.city))
        });
        Ok(locations)
    }

    async fn insert(&mut self, element: Location) -> Result<WithId<Location>> {
        let mut guard = self.count_call();
        let id: Id<Location> = Id::new(guard.next_id());
        let entry = WithId::new(id, element);
        guard.locations.push(entry.clone());
        Ok(entry)
    }

    async fn update(&mut self, element: WithId<Location>) -> Result<WithId<Location>> {
        let mut guard = self.count_call();
        let existing = guard
            .locations
            .iter_mut()
            .find(|location| location.id == element.id)
            .ok_or(DatabaseError::NotFound)?;
        existing.content = element.content.clone();
        Ok(element)
    }

    async fn delete(&mut self, id: Id<Location>) -> Result<()> {
        let mut guard = self.count_call();
        let before = guard.locations.len();
        guard.locations.retain(|location| location.id != id);
        if guard.locations.len() == before {
            return Err(DatabaseError::NotFound);
        }
        // The real store cascades over the foreign key.
        guard.mosques.retain(|mosque| mosque.content.location_id != id);
        Ok(())
    }
}

#[async_trait]
impl LocationRepo for MemoryExecutor {
    async fn get_by_zip_code<S: Into<String> + Send>(
        &mut self,
        zip_code: S,
    ) -> Result<WithId<Location>> {
        let zip_code = zip_code.into();
        let guard = self.count_call();
        guard
            .locations
            .iter()
            .find(|location| location.content.zip_code == zip_code)
            .cloned()
            .ok_or(DatabaseError::NotFound)
    }
}

#[async_trait]
impl Repo<Mosque> for MemoryExecutor {
    async fn get(&mut self, id: Id<Mosque>) -> Result<WithId<Mosque>> {
        let guard = self.count_call();
        guard
            .mosques
            .iter()
            .find(|mosque| mosque.id == id)
            .cloned()
            .ok_or(DatabaseError::NotFound)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Mosque>>> {
        let guard = self.count_call();
        let mut mosques = guard.mosques.clone();
        mosques.sort_by(|a, b| a.content.name.cmp(&b.content.name));
        Ok(mosques)
    }

    async fn insert(&mut self, element: Mosque) -> Result<WithId<Mosque>> {
        let mut guard = self.count_call();
        let id: Id<Mosque> = Id::new(guard.next_id());
        let entry = WithId::new(id, element);
        guard.mosques.push(entry.clone());
        Ok(entry)
    }

    async fn update(&mut self, element: WithId<Mosque>) -> Result<WithId<Mosque>> {
        let mut guard = self.count_call();
        let existing = guard
            .mosques
            .iter_mut()
            .find(|mosque| mosque.id == element.id)
            .ok_or(DatabaseError::NotFound)?;
        existing.content = element.content.clone();
        Ok(element)
    }

    async fn delete(&mut self, id: Id<Mosque>) -> Result<()> {
        let mut guard = self.count_call();
        let before = guard.mosques.len();
        guard.mosques.retain(|mosque| mosque.id != id);
        if guard.mosques.len() == before {
            return Err(DatabaseError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MosqueRepo for MemoryExecutor {
    async fn get_by_location(
        &mut self,
        location_id: &Id<Location>,
    ) -> Result<Vec<WithId<Mosque>>> {
        let guard = self.count_call();
        let mut mosques = guard
            .mosques
            .iter()
            .filter(|mosque| mosque.content.location_id == *location_id)
            .cloned()
            .collect::<Vec<_>>();
        mosques.sort_by(|a, b| {
            (&a.content.first_prayer_time, &a.content.name)
                .cmp(&(&b.content.first_prayer_time, &b.content.name))
        });
        Ok(mosques)
    }

    async fn find_by_name<S: Into<String> + Send>(
        &mut self,
        fragment: S,
        limit: i64,
    ) -> Result<Vec<WithId<Mosque>>> {
        let fragment = fragment.into().to_lowercase();
        self.gate().await;
        let guard = self.count_call();
        let mut matches = guard
            .mosques
            .iter()
            .filter(|mosque| mosque.content.name.to_lowercase().contains(&fragment))
            .cloned()
            .collect::<Vec<_>>();
        matches.sort_by(|a, b| {
            a.content
                .name
                .cmp(&b.content.name)
                .then_with(|| a.id.raw().cmp(&b.id.raw()))
        });
        matches.truncate(limit as usize);
        Ok(matches)
    }
}
