//! Daily faal assignment.
//!
//! Each user receives at most one randomly selected ghazal per local calendar
//! day. A new assignment is only made once the daily gate has opened; after
//! that, every call for the same user and day returns the same assignment.
//!
//! The assigner never touches storage or the wall clock directly. It is wired
//! to a [`PoemCatalog`] and an [`AssignmentLedger`], and the caller passes the
//! current instant in.

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::schedule::FaalSchedule;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Message returned alongside a freshly created assignment.
pub const MSG_NEWLY_ASSIGNED: &str = "Your personal Hafez Faal for today has been assigned!";

/// Message returned when the catalog has no ghazals to choose from.
pub const MSG_CATALOG_EMPTY: &str = "No ghazals available.";

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Why a [`FaalOutcome`] does or does not carry an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaalStatus {
    /// An assignment for today already existed (including one created by a
    /// concurrent request that won the insert).
    AlreadyAssigned,
    /// This call created today's assignment.
    NewlyAssigned,
    /// No assignment exists yet and the gate has not opened.
    NotYetAvailable,
    /// The gate is open but the catalog holds no ghazals.
    CatalogEmpty,
}

impl FaalStatus {
    /// Whether an assignment accompanies this status.
    pub fn is_available(self) -> bool {
        matches!(self, Self::AlreadyAssigned | Self::NewlyAssigned)
    }
}

/// Result of [`DailyFaalAssigner::get_or_assign`].
#[derive(Debug, Clone)]
pub struct FaalOutcome<A> {
    pub status: FaalStatus,
    pub assignment: Option<A>,
    pub message: Option<String>,
}

impl<A> FaalOutcome<A> {
    fn assigned(status: FaalStatus, assignment: A, message: Option<String>) -> Self {
        Self {
            status,
            assignment: Some(assignment),
            message,
        }
    }

    fn unavailable(status: FaalStatus, message: String) -> Self {
        Self {
            status,
            assignment: None,
            message: Some(message),
        }
    }
}

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Read-only view of the ghazal catalog.
///
/// Rows are addressed by a zero-based index into a stable ordering so that
/// random selection is a plain uniform draw over `[0, count)`.
#[async_trait]
pub trait PoemCatalog: Send + Sync {
    type Poem: Send + Sync;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of ghazals currently in the catalog.
    async fn count(&self) -> Result<i64, Self::Error>;

    /// The ghazal at `index` in catalog order, if it still exists.
    async fn poem_at(&self, index: i64) -> Result<Option<Self::Poem>, Self::Error>;

    /// Pick one ghazal uniformly at random, or `None` for an empty catalog.
    async fn pick_random(&self) -> Result<Option<Self::Poem>, Self::Error> {
        let count = self.count().await?;
        match random_index(count) {
            Some(index) => self.poem_at(index).await,
            None => Ok(None),
        }
    }
}

/// Result of [`AssignmentLedger::create_if_absent`].
#[derive(Debug, Clone)]
pub struct LedgerWrite<A> {
    /// The row stored for the `(user, date)` pair after the call.
    pub assignment: A,
    /// `false` when another writer had already stored a row for the pair.
    pub created: bool,
}

/// The append-only record of which ghazal each user received on each day.
///
/// Implementations must enforce uniqueness of `(user_id, date)`.
#[async_trait]
pub trait AssignmentLedger: Send + Sync {
    type Poem: Send + Sync;
    type Assignment: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn find(
        &self,
        user_id: DbId,
        date: NaiveDate,
    ) -> Result<Option<Self::Assignment>, Self::Error>;

    /// Atomically store `poem` for `(user_id, date)` unless a row already
    /// exists, in which case the existing row is returned untouched.
    async fn create_if_absent(
        &self,
        user_id: DbId,
        date: NaiveDate,
        poem: &Self::Poem,
    ) -> Result<LedgerWrite<Self::Assignment>, Self::Error>;
}

/// Draw a uniform index in `[0, count)`. Returns `None` when `count <= 0`.
pub fn random_index(count: i64) -> Option<i64> {
    if count <= 0 {
        return None;
    }
    Some(rand::rng().random_range(0..count))
}

// ---------------------------------------------------------------------------
// DailyFaalAssigner
// ---------------------------------------------------------------------------

/// Decides which ghazal, if any, a user sees today.
pub struct DailyFaalAssigner<C, L> {
    catalog: C,
    ledger: L,
    schedule: FaalSchedule,
}

impl<C, L> DailyFaalAssigner<C, L>
where
    C: PoemCatalog,
    L: AssignmentLedger<Poem = C::Poem, Error = C::Error>,
{
    pub fn new(catalog: C, ledger: L, schedule: FaalSchedule) -> Self {
        Self {
            catalog,
            ledger,
            schedule,
        }
    }

    /// Return today's assignment for `user_id`, creating it if the gate has
    /// opened and none exists yet.
    ///
    /// Safe to call concurrently for the same user: the ledger's
    /// create-if-absent guarantees every caller observes the same row.
    /// Storage errors are returned as-is and never retried here.
    pub async fn get_or_assign(
        &self,
        user_id: DbId,
        now: Timestamp,
    ) -> Result<FaalOutcome<L::Assignment>, C::Error> {
        let today = self.schedule.local_date(now);

        if let Some(existing) = self.ledger.find(user_id, today).await? {
            return Ok(FaalOutcome::assigned(
                FaalStatus::AlreadyAssigned,
                existing,
                None,
            ));
        }

        if !self.schedule.is_open(now) {
            return Ok(FaalOutcome::unavailable(
                FaalStatus::NotYetAvailable,
                format!(
                    "Your personal Hafez Faal for today will be available after {}",
                    self.schedule.gate_label()
                ),
            ));
        }

        let Some(poem) = self.catalog.pick_random().await? else {
            return Ok(FaalOutcome::unavailable(
                FaalStatus::CatalogEmpty,
                MSG_CATALOG_EMPTY.to_string(),
            ));
        };

        let write = self.ledger.create_if_absent(user_id, today, &poem).await?;
        if write.created {
            Ok(FaalOutcome::assigned(
                FaalStatus::NewlyAssigned,
                write.assignment,
                Some(MSG_NEWLY_ASSIGNED.to_string()),
            ))
        } else {
            Ok(FaalOutcome::assigned(
                FaalStatus::AlreadyAssigned,
                write.assignment,
                None,
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
