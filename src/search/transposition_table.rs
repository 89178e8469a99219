//! Transposition table with two-tier slots.
//!
//! Each index holds a depth-preferred entry and a most-recent entry. A new
//! result claims the preferred tier when it searched at least as deep as the
//! resident, or when the resident is left over from an earlier search; the
//! displaced or shallower result lands in the recent tier, which is always
//! overwritten. Probes verify the full 64-bit key on both tiers, so a hash
//! collision can only cost a re-search, never return a foreign entry.

use crate::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub key: u64,
    pub depth: i32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableStats {
    pub lookups: u64,
    pub matches: u64,
    pub writes: u64,
}

#[derive(Debug, Clone, Copy)]
struct Stored {
    entry: TTEntry,
    search_id: u8,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    preferred: Option<Stored>,
    recent: Option<Stored>,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    slots: Vec<Slot>,
    index_mask: usize,
    search_id: u8,
    stats: TableStats,
}

impl TranspositionTable {
    /// Build a table that fits within roughly `size_mb` megabytes. The slot
    /// count is the largest power of two whose storage stays under that
    /// budget, and never less than one.
    pub fn with_size_mb(size_mb: usize) -> Self {
        let budget = size_mb.max(1) * 1024 * 1024;
        let per_slot = std::mem::size_of::<Slot>().max(1);
        let mut slot_count = 1usize;
        while slot_count * 2 * per_slot <= budget {
            slot_count *= 2;
        }
        Self {
            slots: vec![Slot::default(); slot_count],
            index_mask: slot_count - 1,
            search_id: 0,
            stats: TableStats::default(),
        }
    }

    /// Mark the start of a new search; residents from earlier searches lose
    /// their claim on the preferred tier.
    #[inline]
    pub fn begin_search(&mut self) {
        self.search_id = self.search_id.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.slots.fill(Slot::default());
        self.search_id = 0;
        self.stats = TableStats::default();
    }

    #[inline]
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.lookups += 1;
        let slot = &mut self.slots[(key as usize) & self.index_mask];

        for tier in [&mut slot.preferred, &mut slot.recent] {
            if let Some(stored) = tier {
                if stored.entry.key == key {
                    stored.search_id = self.search_id;
                    self.stats.matches += 1;
                    return Some(stored.entry);
                }
            }
        }
        None
    }

    pub fn store(&mut self, entry: TTEntry) {
        self.stats.writes += 1;
        let search_id = self.search_id;
        let slot = &mut self.slots[(entry.key as usize) & self.index_mask];
        let incoming = Stored { entry, search_id };

        match slot.preferred {
            Some(resident) if resident.entry.key == entry.key => {
                // Re-stores of the same position keep the deeper result in
                // the preferred tier.
                if entry.depth >= resident.entry.depth {
                    slot.preferred = Some(incoming);
                } else {
                    slot.recent = Some(incoming);
                }
            }
            Some(resident)
                if entry.depth >= resident.entry.depth || resident.search_id != search_id =>
            {
                // Displaced residents stay reachable in the recent tier.
                slot.recent = Some(resident);
                slot.preferred = Some(incoming);
            }
            Some(_) => slot.recent = Some(incoming),
            None => slot.preferred = Some(incoming),
        }
    }
}
