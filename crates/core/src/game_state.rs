//! Game state module - the state machine driven by ticks and actions
//!
//! Ties together the board, the shape catalog and the randomizer. A driver
//! calls [`GameState::tick`] at a fixed cadence and the action methods when
//! input arrives; everything else is read-only.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::{get_shape, next_rotation, Board, GameSnapshot, PieceRandomizer, Shape};
use crate::types::*;

/// Falling piece: kind, rotation index and top-left position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A piece of `kind` at the spawn position in rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Occupancy matrix for the current rotation
    pub fn shape(&self) -> Shape {
        get_shape(self.kind, self.rotation)
    }

    fn collides(&self, board: &Board) -> bool {
        board.is_collision(&self.shape(), self.x, self.y)
    }
}

/// Most undrained events kept; older ones are dropped first.
pub const EVENT_CAPACITY: usize = 32;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    randomizer: PieceRandomizer,
    status: GameStatus,
    score: u32,
    lines: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Transitions not yet drained by an observer.
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a running game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_randomizer(PieceRandomizer::new(seed))
    }

    /// Create a running game seeded from the OS's random data source
    pub fn from_os_rng() -> Self {
        Self::with_randomizer(PieceRandomizer::from_os_rng())
    }

    fn with_randomizer(mut randomizer: PieceRandomizer) -> Self {
        let active = ActivePiece::spawn(randomizer.draw());
        let next = randomizer.draw();
        Self {
            board: Board::new(),
            active,
            next,
            randomizer,
            status: GameStatus::Running,
            score: 0,
            lines: 0,
            episode_id: 0,
            events: ArrayVec::new(),
        }
    }

    /// Build a game on a prepared board
    ///
    /// `active` spawns at the spawn position in rotation 0 and `next` is the
    /// preview piece; later pieces come from a randomizer seeded with `seed`.
    /// Used for scenarios and replays; the board is taken as given.
    ///
    /// If `active` already overlaps the stack at the spawn position the game
    /// starts in `GameOver`, the same outcome as a blocked spawn during play.
    pub fn from_parts(board: Board, active: PieceKind, next: PieceKind, seed: u64) -> Self {
        let active = ActivePiece::spawn(active);
        let status = if active.collides(&board) {
            GameStatus::GameOver
        } else {
            GameStatus::Running
        };
        Self {
            board,
            active,
            next,
            randomizer: PieceRandomizer::new(seed),
            status,
            score: 0,
            lines: 0,
            episode_id: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.into();
        out.next = self.next;
        out.status = self.status;
        out.score = self.score;
        out.lines = self.lines;
        out.episode_id = self.episode_id;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take the transitions recorded since the last call
    ///
    /// At most [`EVENT_CAPACITY`] are kept between calls; when an observer
    /// falls behind, the oldest are discarded.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    fn record(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Start a new game in place
    ///
    /// Empties the board, draws a fresh active and next piece, zeroes the
    /// counters and returns to `Running`. Valid from any state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = ActivePiece::spawn(self.randomizer.draw());
        self.next = self.randomizer.draw();
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.record(GameEvent::Reset);
        info!(
            episode = self.episode_id,
            active = ?self.active.kind,
            next = ?self.next,
            "game reset"
        );
    }

    /// Advance the simulation by one fixed step
    ///
    /// Moves the piece down a row, or locks it and promotes the next piece
    /// when it cannot fall. Full rows are cleared at the end of every tick
    /// unless this tick ended the game.
    pub fn tick(&mut self) {
        if self.status.is_game_over() {
            return;
        }

        if !self.try_move(0, 1) {
            self.lock_active();

            let spawned = ActivePiece::spawn(self.next);
            if spawned.collides(&self.board) {
                self.status = GameStatus::GameOver;
                self.record(GameEvent::GameOver {
                    score: self.score,
                    lines: self.lines,
                });
                info!(
                    episode = self.episode_id,
                    score = self.score,
                    lines = self.lines,
                    "game over"
                );
                return;
            }

            self.active = spawned;
            self.next = self.randomizer.draw();
        }

        let rows = self.board.clear_full_rows() as u32;
        if rows > 0 {
            self.lines += rows;
            self.score += LINE_CLEAR_POINTS * rows;
            self.record(GameEvent::RowsCleared { rows });
            debug!(rows, score = self.score, lines = self.lines, "rows cleared");
        }
    }

    fn lock_active(&mut self) {
        let ActivePiece { kind, x, y, .. } = self.active;
        self.board.place(&self.active.shape(), x, y, kind);
        self.record(GameEvent::PieceLocked { kind });
        debug!(?kind, x, y, rotation = self.active.rotation, "piece locked");
    }

    /// Shift the active piece by (dx, dy) if the target is free
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = ActivePiece {
            x: self.active.x + dx,
            y: self.active.y + dy,
            ..self.active
        };
        if moved.collides(&self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.status.is_running() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.status.is_running() && self.try_move(1, 0)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.status.is_running() && self.try_move(0, 1)
    }

    /// Move the active piece to the lowest free row
    ///
    /// Does not lock; the piece locks on the next tick because it can no
    /// longer fall. Returns whether the piece moved at all.
    pub fn hard_drop(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        let mut dropped = false;
        while self.try_move(0, 1) {
            dropped = true;
        }
        dropped
    }

    /// Advance to the next rotation state if it fits in place
    ///
    /// No wall kicks: a rotation that would collide is simply rejected.
    pub fn rotate(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        let rotated = ActivePiece {
            rotation: next_rotation(self.active.kind, self.active.rotation),
            ..self.active
        };
        if rotated.rotation == self.active.rotation || rotated.collides(&self.board) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Apply a game action
    ///
    /// Returns whether the state changed; a rejected move is not an error.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
