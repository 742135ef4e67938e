//! Display-order generation.
//!
//! Maps grid slot -> roster index. Slot 4 always shows the human (roster index 4);
//! the remaining eight roster indices are shuffled uniformly over the other slots.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::infographic::roster::{HUMAN_INDEX, ROSTER_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayOrder([usize; ROSTER_SIZE]);

impl DisplayOrder {
    /// Fisher-Yates over the non-human indices, then splice the human back in.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut others: Vec<usize> = (0..ROSTER_SIZE).filter(|&i| i != HUMAN_INDEX).collect();
        others.shuffle(rng);
        others.insert(HUMAN_INDEX, HUMAN_INDEX);

        let mut slots = [0; ROSTER_SIZE];
        slots.copy_from_slice(&others);
        tracing::debug!("Display order: {:?}", slots);
        Self(slots)
    }

    /// Build from an explicit slot table; `None` unless it is a valid order.
    pub fn from_slots(slots: [usize; ROSTER_SIZE]) -> Option<Self> {
        let order = Self(slots);
        order.is_valid().then_some(order)
    }

    /// A permutation of 0..9 with the human fixed at the centre.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; ROSTER_SIZE];
        for &index in &self.0 {
            if index >= ROSTER_SIZE || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        self.0[HUMAN_INDEX] == HUMAN_INDEX
    }

    pub fn roster_index(&self, slot: usize) -> Option<usize> {
        self.0.get(slot).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// (slot, roster index) pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().copied().enumerate()
    }
}
