//! Postgres implementations of the assigner's catalog and ledger seams.

use async_trait::async_trait;
use chrono::NaiveDate;
use faal_core::faal::{AssignmentLedger, DailyFaalAssigner, LedgerWrite, PoemCatalog};
use faal_core::schedule::FaalSchedule;
use faal_core::types::DbId;

use crate::models::daily_faal::FaalAssignment;
use crate::models::ghazal::Ghazal;
use crate::repositories::{DailyFaalRepo, GhazalRepo};
use crate::DbPool;

/// The assigner as wired against Postgres.
pub type PgFaalAssigner = DailyFaalAssigner<PgPoemCatalog, PgAssignmentLedger>;

/// Build a [`PgFaalAssigner`] over `pool`.
pub fn assigner(pool: &DbPool, schedule: FaalSchedule) -> PgFaalAssigner {
    DailyFaalAssigner::new(
        PgPoemCatalog::new(pool.clone()),
        PgAssignmentLedger::new(pool.clone()),
        schedule,
    )
}

/// The `ghazals` table viewed as a [`PoemCatalog`].
#[derive(Clone)]
pub struct PgPoemCatalog {
    pool: DbPool,
}

impl PgPoemCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PoemCatalog for PgPoemCatalog {
    type Poem = Ghazal;
    type Error = sqlx::Error;

    async fn count(&self) -> Result<i64, sqlx::Error> {
        GhazalRepo::count(&self.pool).await
    }

    async fn poem_at(&self, index: i64) -> Result<Option<Ghazal>, sqlx::Error> {
        GhazalRepo::find_at_index(&self.pool, index).await
    }
}

/// The `daily_faals` table viewed as an [`AssignmentLedger`].
#[derive(Clone)]
pub struct PgAssignmentLedger {
    pool: DbPool,
}

impl PgAssignmentLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentLedger for PgAssignmentLedger {
    type Poem = Ghazal;
    type Assignment = FaalAssignment;
    type Error = sqlx::Error;

    async fn find(
        &self,
        user_id: DbId,
        date: NaiveDate,
    ) -> Result<Option<FaalAssignment>, sqlx::Error> {
        DailyFaalRepo::find_for_day(&self.pool, user_id, date).await
    }

    async fn create_if_absent(
        &self,
        user_id: DbId,
        date: NaiveDate,
        poem: &Ghazal,
    ) -> Result<LedgerWrite<FaalAssignment>, sqlx::Error> {
        let (assignment, created) =
            DailyFaalRepo::create_if_absent(&self.pool, user_id, date, poem.id).await?;
        Ok(LedgerWrite {
            assignment,
            created,
        })
    }
}
