//! Cycle ring
//!
//! The ring is a fixed array indexed by [`CycleId`]; "next" and "previous"
//! are index arithmetic modulo [`CYCLE_COUNT`], so every node always has a
//! consistent successor and predecessor.

use super::preset::Cycle;

/// Number of cycles in the ring
pub const CYCLE_COUNT: usize = 5;

/// Cycle identifiers in ring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CycleId {
    Quick = 0,
    Daily = 1,
    Heavy = 2,
    Rinse = 3,
    Spin = 4,
}

impl CycleId {
    /// All cycles in ring order
    pub const ALL: [CycleId; CYCLE_COUNT] = [
        CycleId::Quick,
        CycleId::Daily,
        CycleId::Heavy,
        CycleId::Rinse,
        CycleId::Spin,
    ];

    /// Nominal entry point of the ring
    pub const ENTRY: CycleId = CycleId::Daily;

    /// Selection shown after power-up (one hop past the entry)
    pub const START: CycleId = Self::ENTRY.next();

    /// Position in the ring
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cycle at a ring position (taken modulo the ring size)
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % CYCLE_COUNT]
    }

    /// Successor in the ring
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Predecessor in the ring
    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + CYCLE_COUNT - 1)
    }
}

/// The five cycles plus the current-selection cursor
#[derive(Debug, Clone)]
pub struct CycleRing {
    cycles: [Cycle; CYCLE_COUNT],
    current: CycleId,
}

impl CycleRing {
    /// Build the ring from presets in [`CycleId`] order
    ///
    /// The cursor starts at [`CycleId::START`].
    pub const fn new(presets: [Cycle; CYCLE_COUNT]) -> Self {
        Self {
            cycles: presets,
            current: CycleId::START,
        }
    }

    /// Currently selected cycle id
    pub fn current_id(&self) -> CycleId {
        self.current
    }

    /// Currently selected cycle
    pub fn current(&self) -> &Cycle {
        &self.cycles[self.current.index()]
    }

    /// Currently selected cycle, for in-place attribute edits
    pub fn current_mut(&mut self) -> &mut Cycle {
        &mut self.cycles[self.current.index()]
    }

    /// Cycle by id
    pub fn get(&self, id: CycleId) -> &Cycle {
        &self.cycles[id.index()]
    }

    /// Move the cursor to the successor
    pub fn go_next(&mut self) -> &Cycle {
        self.current = self.current.next();
        self.current()
    }

    /// Move the cursor to the predecessor
    pub fn go_previous(&mut self) -> &Cycle {
        self.current = self.current.previous();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PRESETS;

    #[test]
    fn test_links_are_consistent() {
        for id in CycleId::ALL {
            assert_eq!(id.next().previous(), id);
            assert_eq!(id.previous().next(), id);
            assert_ne!(id.next(), id);
        }
    }

    #[test]
    fn test_ring_order() {
        assert_eq!(CycleId::Quick.next(), CycleId::Daily);
        assert_eq!(CycleId::Spin.next(), CycleId::Quick);
        assert_eq!(CycleId::Quick.previous(), CycleId::Spin);
        assert_eq!(CycleId::Rinse.previous(), CycleId::Heavy);
    }

    #[test]
    fn test_start_is_one_hop_past_entry() {
        let ring = CycleRing::new(DEFAULT_PRESETS);
        assert_ne!(ring.current_id(), CycleId::ENTRY);
        assert_eq!(ring.current_id(), CycleId::ENTRY.next());
        assert_eq!(ring.current().name, "Heavy");
    }

    #[test]
    fn test_full_lap_returns_home() {
        let mut ring = CycleRing::new(DEFAULT_PRESETS);
        let home = ring.current_id();

        for _ in 0..CYCLE_COUNT {
            ring.go_next();
        }
        assert_eq!(ring.current_id(), home);

        for _ in 0..CYCLE_COUNT {
            ring.go_previous();
        }
        assert_eq!(ring.current_id(), home);
    }

    #[test]
    fn test_directions_are_inverse() {
        let mut ring = CycleRing::new(DEFAULT_PRESETS);
        let home = ring.current_id();

        ring.go_next();
        assert_eq!(ring.current_id(), CycleId::Rinse);
        ring.go_previous();
        assert_eq!(ring.current_id(), home);

        ring.go_previous();
        assert_eq!(ring.current_id(), CycleId::Daily);
        ring.go_next();
        assert_eq!(ring.current_id(), home);
    }

    #[test]
    fn test_edits_stay_with_their_cycle() {
        let mut ring = CycleRing::new(DEFAULT_PRESETS);
        ring.current_mut().increment_rinse_count();
        let edited = ring.current_id();

        ring.go_next();
        let neighbour = ring.current_id();
        assert_eq!(
            ring.current().rinse_count,
            DEFAULT_PRESETS[neighbour.index()].rinse_count
        );

        ring.go_previous();
        assert_eq!(ring.current_id(), edited);
        assert_eq!(
            ring.current().rinse_count,
            DEFAULT_PRESETS[edited.index()].rinse_count + 1
        );
    }

    #[test]
    fn test_ids_index_presets_in_ring_order() {
        let ring = CycleRing::new(DEFAULT_PRESETS);
        let names: heapless::Vec<&str, CYCLE_COUNT> =
            CycleId::ALL.iter().map(|&id| ring.get(id).name).collect();
        assert_eq!(
            names.as_slice(),
            &["Quick", "Daily", "Heavy", "Rinse", "Spin"]
        );
    }
}
