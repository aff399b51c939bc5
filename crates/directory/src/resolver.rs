use std::sync::atomic::{AtomicU64, Ordering};

use model::{
    location::Location,
    search::{SearchKind, SearchResult},
};

use crate::{
    database::{DatabaseOperations, Repo},
    not_found_to_none, RequestError, RequestResult,
};

/// How a raw search string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Empty,
    ZipCode,
    MosqueName,
}

/// Classifies a raw query string. Exactly five ASCII decimal digits (after
/// trimming) select the zip-code path; any other non-empty string is a name
/// query. "1234" and "123456" are name queries.
pub fn classify(query: &str) -> QueryKind {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        QueryKind::Empty
    } else if is_zip_code(trimmed) {
        QueryKind::ZipCode
    } else {
        QueryKind::MosqueName
    }
}

fn is_zip_code(trimmed: &str) -> bool {
    trimmed.len() == 5 && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Resolves a raw query into a search result.
///
/// `Ok(None)` is the no-match outcome. Empty and whitespace-only input
/// resolves to no match without touching the store. Any store failure aborts
/// the whole resolution; nothing is cached or retried.
pub async fn resolve<O>(
    ops: &mut O,
    query: &str,
) -> RequestResult<Option<SearchResult>>
where
    O: DatabaseOperations + Send,
{
    let trimmed = query.trim();
    let kind = classify(trimmed);
    log::debug!("resolving {:?} query", kind);
    match kind {
        QueryKind::Empty => Ok(None),
        QueryKind::ZipCode => resolve_zip_code(ops, trimmed).await,
        QueryKind::MosqueName => resolve_mosque_name(ops, trimmed).await,
    }
}

async fn resolve_zip_code<O>(
    ops: &mut O,
    zip_code: &str,
) -> RequestResult<Option<SearchResult>>
where
    O: DatabaseOperations + Send,
{
    let location = match not_found_to_none(
        ops.get_by_zip_code(zip_code).await.map_err(RequestError::from),
    )? {
        Some(location) => location,
        None => return Ok(None),
    };
    let mosques = ops.get_by_location(&location.id).await?;
    Ok(Some(SearchResult {
        kind: SearchKind::Zip,
        location,
        mosques,
        matched_mosque: None,
    }))
}

async fn resolve_mosque_name<O>(
    ops: &mut O,
    name: &str,
) -> RequestResult<Option<SearchResult>>
where
    O: DatabaseOperations + Send,
{
    let matched = match ops.find_by_name(name, 1).await?.into_iter().next() {
        Some(mosque) => mosque,
        None => return Ok(None),
    };
    // A dangling location_id is a store inconsistency and propagates as an
    // error rather than a no-match.
    let location =
        Repo::<Location>::get(ops, matched.content.location_id.clone()).await?;
    let mosques = ops.get_by_location(&location.id).await?;
    Ok(Some(SearchResult {
        kind: SearchKind::Mosque,
        location,
        mosques,
        matched_mosque: Some(matched),
    }))
}

/// A sequence number handed out for one resolution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Outcome of a sequenced resolution.
#[derive(Debug)]
pub enum SearchOutcome {
    Match(SearchResult),
    NoMatch,
    /// A newer request was issued while this one was in flight; the caller
    /// must discard this outcome.
    Superseded,
}

/// Orders overlapping resolutions from one caller.
///
/// Every request draws a monotonically increasing ticket. A resolution that
/// completes after a newer ticket was issued reports
/// [`SearchOutcome::Superseded`], so stale results never reach the screen.
/// The in-flight store request itself is not cancelled.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: AtomicU64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    pub async fn resolve<O>(
        &self,
        ops: &mut O,
        query: &str,
    ) -> RequestResult<SearchOutcome>
    where
        O: DatabaseOperations + Send,
    {
        let ticket = self.begin();
        let result = resolve(ops, query).await?;
        if !self.is_current(ticket) {
            return Ok(SearchOutcome::Superseded);
        }
        Ok(match result {
            Some(result) => SearchOutcome::Match(result),
            None => SearchOutcome::NoMatch,
        })
    }
}
