//! Bounded swap history, most recent first

use crate::state::Token;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of swaps retained.
pub const MAX_SWAP_RECORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapStatus {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub id: u64,
    pub from: Token,
    pub to: Token,
    pub amount: f64,
    pub timestamp: String,
    pub status: SwapStatus,
}

/// Window over the last [`MAX_SWAP_RECORDS`] swaps, newest at index 0.
#[derive(Debug, Clone, Default)]
pub struct SwapHistory {
    records: VecDeque<SwapRecord>,
}

impl SwapHistory {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(MAX_SWAP_RECORDS),
        }
    }

    /// Prepend a record, evicting the oldest once the window is full.
    pub fn record(&mut self, record: SwapRecord) {
        if self.records.len() == MAX_SWAP_RECORDS {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &SwapRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&SwapRecord> {
        self.records.front()
    }
}
