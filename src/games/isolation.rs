//! Knight's Isolation reference game.
//!
//! Two knights on a rectangular board. The first two plies place each knight
//! on any open cell; afterwards a player moves like a chess knight, and every
//! cell a knight lands on is burned off the board for the rest of the game.
//! A player with no move left loses. Mobility (open knight targets from a
//! location) doubles as the positional heuristic the search scores rollouts
//! with.
//!
//! Open cells are kept in a `u128` bitboard, so states are cheap to clone
//! during rollouts.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerPair};
use crate::game::engine::GameEngine;

/// Board cell index: `row * width + col`.
pub type Cell = u8;

/// The eight knight-move offsets as (row, col) deltas.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// One Isolation position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsolationState {
    /// Bitboard of open cells (bit set = still open).
    open: u128,

    /// Each knight's current cell, absent before its opening placement.
    locations: PlayerPair<Option<Cell>>,

    /// Plies played so far.
    ply: u32,
}

/// Knight's Isolation rules on a `width x height` board.
#[derive(Clone, Copy, Debug)]
pub struct Isolation {
    width: u8,
    height: u8,
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new(11, 9)
    }
}

impl Isolation {
    /// Create a game on a `width x height` board. Panics if the board does
    /// not fit in the 128-cell bitboard or is degenerate.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width >= 3 && height >= 3, "board too small for knight moves");
        assert!(
            (width as u32) * (height as u32) <= 128,
            "board exceeds bitboard capacity"
        );
        Self { width, height }
    }

    /// The empty-board starting position.
    #[must_use]
    pub fn initial_state(&self) -> IsolationState {
        let cells = self.width as u32 * self.height as u32;
        let open = if cells == 128 {
            u128::MAX
        } else {
            (1u128 << cells) - 1
        };
        IsolationState {
            open,
            locations: PlayerPair::with_value(None),
            ply: 0,
        }
    }

    /// Board width.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Board height.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether `cell` is still open in `state`.
    #[must_use]
    pub fn is_open(&self, state: &IsolationState, cell: Cell) -> bool {
        state.open & (1u128 << cell) != 0
    }

    /// Number of open cells left on the board.
    #[must_use]
    pub fn open_count(&self, state: &IsolationState) -> u32 {
        state.open.count_ones()
    }

    /// Open knight-move targets from `cell`.
    fn knight_targets(&self, state: &IsolationState, cell: Cell) -> Vec<Cell> {
        let row = (cell / self.width) as i8;
        let col = (cell % self.width) as i8;

        KNIGHT_DELTAS
            .iter()
            .filter_map(|&(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                if r < 0 || c < 0 || r >= self.height as i8 || c >= self.width as i8 {
                    return None;
                }
                let target = (r as u8) * self.width + c as u8;
                self.is_open(state, target).then_some(target)
            })
            .collect()
    }

    /// All open cells, used for the opening placements.
    fn open_cells(&self, state: &IsolationState) -> Vec<Cell> {
        let cells = self.width as u32 * self.height as u32;
        (0..cells as u8)
            .filter(|&c| self.is_open(state, c))
            .collect()
    }

    /// Whether `player` has at least one legal continuation: a knight move if
    /// placed, any open cell if not.
    fn has_liberties(&self, state: &IsolationState, player: PlayerId) -> bool {
        match state.locations[player] {
            Some(cell) => !self.knight_targets(state, cell).is_empty(),
            None => state.open != 0,
        }
    }
}

impl GameEngine for Isolation {
    type State = IsolationState;
    type Action = Cell;
    type Location = Cell;

    fn actions(&self, state: &IsolationState) -> Vec<Cell> {
        let to_move = self.to_move(state);
        match state.locations[to_move] {
            Some(cell) => self.knight_targets(state, cell),
            None => self.open_cells(state),
        }
    }

    fn result(&self, state: &IsolationState, action: &Cell) -> IsolationState {
        assert!(self.is_open(state, *action), "move to a closed cell");

        let to_move = self.to_move(state);
        let mut next = *state;
        next.open &= !(1u128 << *action);
        next.locations[to_move] = Some(*action);
        next.ply += 1;
        next
    }

    fn terminal(&self, state: &IsolationState) -> bool {
        !(self.has_liberties(state, PlayerId::new(0))
            && self.has_liberties(state, PlayerId::new(1)))
    }

    fn legal_move_count(&self, state: &IsolationState, location: Cell) -> usize {
        self.knight_targets(state, location).len()
    }

    fn player_locations(&self, state: &IsolationState) -> PlayerPair<Option<Cell>> {
        state.locations
    }

    fn ply_count(&self, state: &IsolationState) -> u32 {
        state.ply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(game: &Isolation, state: &IsolationState, cell: Cell) -> IsolationState {
        game.result(state, &cell)
    }

    #[test]
    fn test_initial_state() {
        let game = Isolation::default();
        let state = game.initial_state();

        assert_eq!(game.open_count(&state), 99);
        assert_eq!(game.ply_count(&state), 0);
        assert!(game.player_locations(&state)[PlayerId::new(0)].is_none());
        assert!(game.player_locations(&state)[PlayerId::new(1)].is_none());
        assert!(!game.terminal(&state));
    }

    #[test]
    fn test_opening_placements_cover_open_cells() {
        let game = Isolation::new(5, 5);
        let state = game.initial_state();

        let actions = game.actions(&state);
        assert_eq!(actions.len(), 25);

        // Second placement excludes the first knight's cell.
        let state = place(&game, &state, 12);
        let actions = game.actions(&state);
        assert_eq!(actions.len(), 24);
        assert!(!actions.contains(&12));
    }

    #[test]
    fn test_alternating_to_move() {
        let game = Isolation::new(5, 5);
        let state = game.initial_state();

        assert_eq!(game.to_move(&state), PlayerId::new(0));
        let state = place(&game, &state, 0);
        assert_eq!(game.to_move(&state), PlayerId::new(1));
        let state = place(&game, &state, 24);
        assert_eq!(game.to_move(&state), PlayerId::new(0));
    }

    #[test]
    fn test_knight_moves_from_center() {
        let game = Isolation::new(5, 5);
        let state = game.initial_state();
        // Knight at the center of an empty 5x5 board has all 8 targets.
        let state = place(&game, &state, 12);

        assert_eq!(game.legal_move_count(&state, 12), 8);
    }

    #[test]
    fn test_knight_moves_from_corner() {
        let game = Isolation::new(5, 5);
        let state = game.initial_state();
        let state = place(&game, &state, 0);

        // Corner knight reaches only (1,2) and (2,1).
        let mut targets = game.knight_targets(&state, 0);
        targets.sort_unstable();
        assert_eq!(targets, vec![7, 11]);
    }

    #[test]
    fn test_landing_burns_cell() {
        let game = Isolation::new(5, 5);
        let state = game.initial_state();
        let state = place(&game, &state, 0); // player 0 at a1
        let state = place(&game, &state, 24); // player 1 at e5
        let state = place(&game, &state, 7); // player 0 knight-moves

        assert!(!game.is_open(&state, 0));
        assert!(!game.is_open(&state, 24));
        assert!(!game.is_open(&state, 7));
        assert_eq!(game.open_count(&state), 22);
        assert_eq!(game.player_locations(&state)[PlayerId::new(0)], Some(7));
    }

    #[test]
    #[should_panic(expected = "closed cell")]
    fn test_illegal_move_panics() {
        let game = Isolation::new(5, 5);
        let state = game.initial_state();
        let state = place(&game, &state, 12);
        place(&game, &state, 12);
    }

    #[test]
    fn test_terminal_when_a_player_is_stuck() {
        // 3x3 board: a knight in the center has zero targets, so placing
        // there loses immediately once the opponent is placed.
        let game = Isolation::new(3, 3);
        let state = game.initial_state();
        let state = place(&game, &state, 4); // center
        assert!(game.terminal(&state));
    }

    #[test]
    fn test_random_game_reaches_terminal() {
        use crate::core::SearchRng;

        let game = Isolation::new(5, 5);
        let mut state = game.initial_state();
        let mut rng = SearchRng::new(42);

        let mut plies = 0;
        while !game.terminal(&state) {
            let actions = game.actions(&state);
            assert!(!actions.is_empty());
            let idx = rng.gen_range_usize(0..actions.len());
            state = game.result(&state, &actions[idx]);
            plies += 1;
            assert!(plies <= 25, "game ran past the cell budget");
        }

        // Post-placement states always carry both locations.
        if plies >= 2 {
            let locations = game.player_locations(&state);
            assert!(locations[PlayerId::new(0)].is_some());
            assert!(locations[PlayerId::new(1)].is_some());
        }
    }

    #[test]
    fn test_state_serialization() {
        let game = Isolation::new(5, 5);
        let state = place(&game, &game.initial_state(), 12);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: IsolationState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
