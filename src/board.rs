//! Ranking board state and the drag-and-drop transitions over it.
//!
//! The board is a plain value: 32 slots, each holding at most one team id,
//! with no id ever occupying two slots. An in-flight drag is modelled as an
//! explicit [`Gesture`] rather than ambient fields, so a drop is a pure
//! function of (board, gesture, target) and every input is handled without
//! erroring.

use crate::catalog;

pub const SLOT_COUNT: usize = 32;

/// One in-flight drag, from drag-start until the drop (or abandonment)
/// resolves it. `Idle` doubles as the resting state and the "drop arrived
/// with no preceding drag" guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    FromPool {
        team: &'static str,
    },
    FromSlot {
        team: &'static str,
        source: usize,
    },
}

impl Gesture {
    /// Begin dragging a team out of the sidebar pool. Placed teams are shown
    /// dimmed and undraggable there, so an already-placed or unknown id
    /// yields no gesture.
    pub fn from_pool(board: &Board, id: &str) -> Option<Gesture> {
        let team = catalog::team_by_id(id)?;
        if board.is_placed(team.id) {
            return None;
        }
        Some(Gesture::FromPool { team: team.id })
    }

    /// Begin dragging a slot's occupant. Empty slots have nothing to drag.
    pub fn from_slot(board: &Board, slot: usize) -> Option<Gesture> {
        let team = board.occupant(slot)?;
        Some(Gesture::FromSlot { team, source: slot })
    }

    pub fn team(self) -> Option<&'static str> {
        match self {
            Gesture::Idle => None,
            Gesture::FromPool { team } | Gesture::FromSlot { team, .. } => Some(team),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Option<&'static str>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            slots: vec![None; SLOT_COUNT],
        }
    }

    /// Rebuild from a persisted occupant list. Empty entries, ids unknown to
    /// the catalog, and repeats of an already-placed id are dropped so a
    /// tampered record cannot produce a duplicate occupant.
    pub fn from_slots(stored: &[String]) -> Self {
        let mut board = Board::new();
        for (slot, raw) in stored.iter().take(SLOT_COUNT).enumerate() {
            if raw.is_empty() {
                continue;
            }
            let Some(team) = catalog::team_by_id(raw) else {
                continue;
            };
            if board.is_placed(team.id) {
                continue;
            }
            board.slots[slot] = Some(team.id);
        }
        board
    }

    pub fn occupant(&self, slot: usize) -> Option<&'static str> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|occupant| *occupant == Some(id))
    }

    pub fn is_placed(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn placed_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().filter_map(|occupant| *occupant)
    }

    /// Resolve a drop onto `target`. Returns whether the board changed; the
    /// caller clears the gesture in either case.
    ///
    /// A pool drop replaces the target occupant outright (the bumped team
    /// returns to the pool), while a slot-to-slot drop swaps the two
    /// occupants so nothing leaves the board unless the target was empty.
    pub fn apply_drop(&mut self, gesture: Gesture, target: usize) -> bool {
        if target >= SLOT_COUNT {
            return false;
        }
        match gesture {
            Gesture::Idle => false,
            Gesture::FromPool { team } => {
                // Pool cards for placed teams are undraggable, but clear any
                // existing placement anyway so the unique-occupant invariant
                // survives even if that gating is bypassed.
                if let Some(existing) = self.position_of(team) {
                    self.slots[existing] = None;
                }
                self.slots[target] = Some(team);
                true
            }
            Gesture::FromSlot { source, .. } if source == target || source >= SLOT_COUNT => false,
            Gesture::FromSlot { source, .. } => {
                self.slots.swap(source, target);
                true
            }
        }
    }

    pub fn remove(&mut self, slot: usize) {
        if let Some(occupant) = self.slots.get_mut(slot) {
            *occupant = None;
        }
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Occupant list in rank order, empty string for an open slot.
    pub fn to_stored(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|occupant| occupant.unwrap_or("").to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_no_duplicates(board: &Board) {
        let ids: Vec<&str> = board.placed_ids().collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len(), "duplicate occupant in {ids:?}");
    }

    fn pool_drop(board: &mut Board, id: &str, target: usize) {
        let gesture = Gesture::from_pool(board, id).expect("team should be draggable");
        assert!(board.apply_drop(gesture, target));
    }

    fn slot_drop(board: &mut Board, source: usize, target: usize) -> bool {
        let gesture = Gesture::from_slot(board, source).expect("slot should be occupied");
        board.apply_drop(gesture, target)
    }

    #[test]
    fn pool_drop_places_team() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        assert_eq!(board.occupant(0), Some("buf"));
        assert!(board.is_placed("buf"));
    }

    #[test]
    fn pool_drop_evicts_previous_occupant() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        pool_drop(&mut board, "mia", 0);

        assert_eq!(board.occupant(0), Some("mia"));
        assert!(!board.is_placed("buf"), "evicted team returns to the pool");
        assert_no_duplicates(&board);
    }

    #[test]
    fn pool_drop_clears_stale_placement_of_same_team() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 5);

        // Bypass the draggability gate to exercise the defensive path.
        let gesture = Gesture::FromPool { team: "buf" };
        assert!(board.apply_drop(gesture, 0));

        assert_eq!(board.occupant(0), Some("buf"));
        assert_eq!(board.occupant(5), None);
        assert_no_duplicates(&board);
    }

    #[test]
    fn slot_drop_swaps_occupants() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        pool_drop(&mut board, "mia", 1);

        assert!(slot_drop(&mut board, 0, 1));
        assert_eq!(board.occupant(0), Some("mia"));
        assert_eq!(board.occupant(1), Some("buf"));
        assert_no_duplicates(&board);
    }

    #[test]
    fn swap_twice_restores_arrangement() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        pool_drop(&mut board, "mia", 1);
        let before = board.clone();

        assert!(slot_drop(&mut board, 0, 1));
        assert!(slot_drop(&mut board, 1, 0));
        assert_eq!(board, before);
    }

    #[test]
    fn slot_drop_onto_empty_slot_moves_team() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);

        assert!(slot_drop(&mut board, 0, 7));
        assert_eq!(board.occupant(0), None);
        assert_eq!(board.occupant(7), Some("buf"));
    }

    #[test]
    fn drop_on_own_slot_is_a_noop() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 3);
        let before = board.clone();

        assert!(!slot_drop(&mut board, 3, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn drop_without_active_gesture_is_a_noop() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        let before = board.clone();

        assert!(!board.apply_drop(Gesture::Idle, 4));
        assert_eq!(board, before);
    }

    #[test]
    fn drop_outside_the_board_is_a_noop() {
        let mut board = Board::new();
        let gesture = Gesture::from_pool(&board, "buf").unwrap();
        assert!(!board.apply_drop(gesture, SLOT_COUNT));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn placed_team_is_not_draggable_from_pool() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        assert!(Gesture::from_pool(&board, "buf").is_none());
        assert!(Gesture::from_pool(&board, "nonsense").is_none());
    }

    #[test]
    fn empty_slot_yields_no_drag_gesture() {
        let mut board = Board::new();
        assert!(Gesture::from_slot(&board, 2).is_none());

        pool_drop(&mut board, "kc", 2);
        assert_eq!(
            Gesture::from_slot(&board, 2),
            Some(Gesture::FromSlot {
                team: "kc",
                source: 2
            })
        );
    }

    #[test]
    fn remove_clears_a_single_slot() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        pool_drop(&mut board, "mia", 1);

        board.remove(0);
        assert_eq!(board.occupant(0), None);
        assert_eq!(board.occupant(1), Some("mia"));

        // Removing an empty or out-of-range slot is harmless.
        board.remove(0);
        board.remove(SLOT_COUNT + 3);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        pool_drop(&mut board, "mia", 31);

        board.clear();
        assert_eq!(board, Board::new());
        assert_eq!(board.placed_ids().count(), 0);
    }

    #[test]
    fn stored_form_round_trips() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        pool_drop(&mut board, "sea", 31);

        let stored = board.to_stored();
        assert_eq!(stored.len(), SLOT_COUNT);
        assert_eq!(stored[0], "buf");
        assert_eq!(stored[1], "");
        assert_eq!(stored[31], "sea");

        assert_eq!(Board::from_slots(&stored), board);
    }

    #[test]
    fn restore_drops_unknown_and_duplicate_ids() {
        let mut stored = vec![String::new(); SLOT_COUNT];
        stored[0] = "buf".to_string();
        stored[1] = "not-a-team".to_string();
        stored[2] = "buf".to_string();
        stored[3] = "mia".to_string();

        let board = Board::from_slots(&stored);
        assert_eq!(board.occupant(0), Some("buf"));
        assert_eq!(board.occupant(1), None);
        assert_eq!(board.occupant(2), None, "first placement wins");
        assert_eq!(board.occupant(3), Some("mia"));
        assert_no_duplicates(&board);
    }

    #[test]
    fn restore_ignores_entries_past_the_last_slot() {
        let mut stored = vec![String::new(); SLOT_COUNT + 8];
        stored[SLOT_COUNT + 1] = "buf".to_string();
        let board = Board::from_slots(&stored);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn invariant_holds_across_a_mixed_gesture_sequence() {
        let mut board = Board::new();
        pool_drop(&mut board, "buf", 0);
        assert_no_duplicates(&board);
        pool_drop(&mut board, "mia", 1);
        assert_no_duplicates(&board);
        pool_drop(&mut board, "kc", 0);
        assert_no_duplicates(&board);
        slot_drop(&mut board, 0, 1);
        assert_no_duplicates(&board);
        slot_drop(&mut board, 1, 9);
        assert_no_duplicates(&board);
        board.remove(9);
        assert_no_duplicates(&board);
        pool_drop(&mut board, "buf", 9);
        assert_no_duplicates(&board);
        board.clear();
        assert_no_duplicates(&board);
    }
}
