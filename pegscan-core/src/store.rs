use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::PegscanError;
use crate::types::PricePoint;

/// A key-ordered table of [`PricePoint`]s keyed by `(symbol, date)`.
///
/// The store enforces row-level uniqueness on the key but is not trusted to
/// be atomic across a batch; the reconciler inserts rows independently and
/// treats a [`PegscanError::DuplicateRow`] on any one row as skippable.
/// Reconciliation is additive-only: there is no update or delete path.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// All stored rows for `symbol`, in no guaranteed order.
    async fn all_for_symbol(&self, symbol: &str) -> Result<Vec<PricePoint>, PegscanError>;

    /// Insert one row.
    ///
    /// # Errors
    /// - `DuplicateRow` when `(symbol, date)` already exists; the existing
    ///   row is left untouched.
    /// - `Store` for any other persistence failure.
    async fn insert(&self, point: &PricePoint) -> Result<(), PegscanError>;

    /// The row at exactly `(symbol, date)`, if present.
    async fn point_at(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<PricePoint>, PegscanError>;
}
