//! Transposition cache for memoizing search results.
//!
//! Entries are keyed by `(signature key, depth, side)` and are only ever valid
//! for that exact depth and side. There is no eviction: the owner clears the
//! cache whenever the authoritative position changes outside the search's own
//! apply/undo pairs, which bounds the size to the nodes of a single search.

use log::trace;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::traits::{Score, Side, Signature};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoundType {
    /// The score was computed with the full window and is exact.
    Exact,
    /// The search failed high; the true score is at least this value.
    Lower,
    /// The search failed low; the true score is at most this value.
    Upper,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CacheEntry {
    pub score: Score,
    pub bound_type: BoundType,
    verification: u64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("signature collision: key {key:#018x} is shared by two distinct positions")]
    SignatureCollision { key: u64 },
}

type CacheKey = (u64, u8, Side);

#[derive(Default)]
pub struct TranspositionCache {
    table: FxHashMap<CacheKey, CacheEntry>,
    hits: usize,
    misses: usize,
    stores: usize,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the entry stored for this exact signature, depth and side.
    pub fn get(
        &self,
        signature: Signature,
        depth: u8,
        side: Side,
    ) -> Result<Option<CacheEntry>, CacheError> {
        match self.table.get(&(signature.key, depth, side)) {
            Some(entry) if entry.verification != signature.verification => {
                Err(CacheError::SignatureCollision { key: signature.key })
            }
            Some(entry) => Ok(Some(*entry)),
            None => Ok(None),
        }
    }

    pub fn put(
        &mut self,
        signature: Signature,
        depth: u8,
        side: Side,
        score: Score,
        bound_type: BoundType,
    ) -> Result<(), CacheError> {
        let key = (signature.key, depth, side);
        if let Some(existing) = self.table.get(&key) {
            if existing.verification != signature.verification {
                return Err(CacheError::SignatureCollision { key: signature.key });
            }
        }

        self.table.insert(
            key,
            CacheEntry {
                score,
                bound_type,
                verification: signature.verification,
            },
        );
        self.stores += 1;
        Ok(())
    }

    /// Returns a cached score if it can stand in for a search of this node
    /// with the given window.
    pub fn probe(
        &mut self,
        signature: Signature,
        depth: u8,
        side: Side,
        alpha: Score,
        beta: Score,
    ) -> Result<Option<Score>, CacheError> {
        let usable = self
            .get(signature, depth, side)?
            .and_then(|entry| match entry.bound_type {
                BoundType::Exact => Some(entry.score),
                BoundType::Lower if entry.score >= beta => Some(entry.score),
                BoundType::Upper if entry.score <= alpha => Some(entry.score),
                _ => None,
            });

        match usable {
            Some(score) => {
                trace!(
                    "cache hit key={:#018x} depth={} side={:?} score={}",
                    signature.key,
                    depth,
                    side,
                    score
                );
                self.hits += 1;
            }
            None => self.misses += 1,
        }
        Ok(usable)
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
        self.stores = 0;
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn stores(&self) -> usize {
        self.stores
    }
}
