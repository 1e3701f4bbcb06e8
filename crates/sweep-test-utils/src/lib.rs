//! Test utilities for Sweep development.
//!
//! Provides [`GridWorld`], a small deterministic simulator that plays
//! the environment side of the [`Agent`] seam, maze [`fixtures`], and
//! [`run_episode`] to drive an agent through a world for a fixed number
//! of ticks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::error::Error;
use std::fmt;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sweep_core::{Action, Agent, Percept, Position};

/// Dirt units removed by one `Suck`.
pub const CLEAN_PER_TIME: u32 = 10;

// ── MazeError ──────────────────────────────────────────────────────

/// Errors from [`GridWorld::parse`] and [`GridWorld::place_agent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// No rows in the maze text.
    Empty,
    /// A row has a different width from the first.
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a known tile.
    UnknownGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },
    /// No `S` marker.
    MissingStart,
    /// More than one `S` marker.
    DuplicateStart { line: usize, column: usize },
    /// The agent was placed on an obstacle or off the grid.
    StartBlocked { position: Position },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no rows"),
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} tiles, found {found}"),
            Self::UnknownGlyph {
                line,
                column,
                glyph,
            } => write!(f, "line {line}, column {column}: unknown tile {glyph:?}"),
            Self::MissingStart => write!(f, "maze has no start marker"),
            Self::DuplicateStart { line, column } => {
                write!(f, "line {line}, column {column}: second start marker")
            }
            Self::StartBlocked { position } => write!(f, "start {position} is not a floor tile"),
        }
    }
}

impl Error for MazeError {}

// ── GridWorld ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tile {
    Obstacle,
    Floor { dirt: u32 },
}

/// A rectangular world of obstacles and dirty floor.
///
/// Moving into an obstacle or off the grid is a bump: the agent stays
/// where it is and the next percept reports it. `Suck` removes up to
/// [`CLEAN_PER_TIME`] units from the agent's cell. Dirt appears through
/// [`accumulate`](Self::accumulate), one unit per floor cell with
/// probability `dirt_probability`, drawn from a seeded ChaCha8 stream so
/// runs are reproducible.
#[derive(Clone, Debug)]
pub struct GridWorld {
    rows: u32,
    cols: u32,
    tiles: Vec<Tile>,
    visits: Vec<u32>,
    agent: Position,
    bumped: bool,
    dirt_probability: f64,
    rng: ChaCha8Rng,
    cleaned: u64,
    bumps: u64,
}

impl GridWorld {
    /// Parse a maze drawn as text, one line per row.
    ///
    /// `#` or `O` is an obstacle, `.` or `-` is floor, `S` is the floor
    /// cell the agent starts on. Spaces inside a line and blank lines are
    /// ignored, so both `#.#` and `O - O` layouts are accepted.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut tiles = Vec::new();
        let mut start = None;
        let mut rows = 0u32;
        let mut width = None;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut found = 0usize;
            for (column, glyph) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let tile = match glyph {
                    '#' | 'O' => Tile::Obstacle,
                    '.' | '-' => Tile::Floor { dirt: 0 },
                    'S' => {
                        if start.is_some() {
                            return Err(MazeError::DuplicateStart {
                                line: line_no + 1,
                                column: column + 1,
                            });
                        }
                        start = Some(Position::new(rows as i32, column as i32));
                        Tile::Floor { dirt: 0 }
                    }
                    other => {
                        return Err(MazeError::UnknownGlyph {
                            line: line_no + 1,
                            column: column + 1,
                            glyph: other,
                        })
                    }
                };
                tiles.push(tile);
                found += 1;
            }
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(MazeError::RaggedRow {
                    line: line_no + 1,
                    expected,
                    found,
                });
            }
            rows += 1;
        }

        let cols = width.ok_or(MazeError::Empty)? as u32;
        let agent = start.ok_or(MazeError::MissingStart)?;
        let cell_count = tiles.len();
        Ok(Self {
            rows,
            cols,
            tiles,
            visits: vec![0; cell_count],
            agent,
            bumped: false,
            dirt_probability: 0.0,
            rng: ChaCha8Rng::seed_from_u64(0),
            cleaned: 0,
            bumps: 0,
        })
    }

    /// Reseed the dirt stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Per-cell, per-tick chance of a new unit of dirt, clamped to `[0, 1]`.
    pub fn with_dirt_probability(mut self, p: f64) -> Self {
        self.dirt_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The larger dimension: a safe `maze_size` for an agent in this world.
    pub fn side(&self) -> u32 {
        self.rows.max(self.cols)
    }

    /// Where the agent is.
    pub fn agent(&self) -> Position {
        self.agent
    }

    /// Move the agent to `pos`, which must be floor.
    pub fn place_agent(&mut self, pos: Position) -> Result<(), MazeError> {
        if self.is_blocked(pos) {
            return Err(MazeError::StartBlocked { position: pos });
        }
        self.agent = pos;
        self.bumped = false;
        Ok(())
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let inside = pos.row >= 0
            && pos.col >= 0
            && (pos.row as u32) < self.rows
            && (pos.col as u32) < self.cols;
        inside.then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Obstacle or off the grid.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.index(pos).is_none_or(|i| self.tiles[i] == Tile::Obstacle)
    }

    /// Every floor position, row-major.
    pub fn floor_cells(&self) -> Vec<Position> {
        let cols = self.cols as i32;
        (0..self.rows as i32)
            .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
            .filter(|&pos| !self.is_blocked(pos))
            .collect()
    }

    /// Dirt on `pos`; zero for obstacles and off-grid positions.
    pub fn dirt(&self, pos: Position) -> u32 {
        match self.index(pos).map(|i| self.tiles[i]) {
            Some(Tile::Floor { dirt }) => dirt,
            _ => 0,
        }
    }

    /// Overwrite the dirt on a floor cell. Ignored elsewhere.
    pub fn set_dirt(&mut self, pos: Position, amount: u32) {
        if let Some(i) = self.index(pos) {
            if let Tile::Floor { dirt } = &mut self.tiles[i] {
                *dirt = amount;
            }
        }
    }

    /// Dirt summed over the whole world.
    pub fn total_dirt(&self) -> u64 {
        self.tiles
            .iter()
            .map(|t| match t {
                Tile::Floor { dirt } => u64::from(*dirt),
                Tile::Obstacle => 0,
            })
            .sum()
    }

    /// Dirt units removed so far.
    pub fn cleaned(&self) -> u64 {
        self.cleaned
    }

    /// Bumps so far.
    pub fn bumps(&self) -> u64 {
        self.bumps
    }

    /// How many times the agent has moved onto `pos`.
    pub fn visits(&self, pos: Position) -> u32 {
        self.index(pos).map_or(0, |i| self.visits[i])
    }

    /// What the agent senses now.
    pub fn percept(&self) -> Percept {
        Percept::new(self.bumped, self.dirt(self.agent) > 0)
    }

    /// Apply the agent's action.
    pub fn accept(&mut self, action: Action) {
        self.bumped = false;
        if action == Action::Suck {
            let here = self.dirt(self.agent);
            let removed = here.min(CLEAN_PER_TIME);
            self.set_dirt(self.agent, here - removed);
            self.cleaned += u64::from(removed);
            return;
        }
        let Some(dir) = action.direction() else {
            return;
        };
        let target = self.agent.step(dir);
        match self.index(target) {
            Some(i) if self.tiles[i] != Tile::Obstacle => {
                self.agent = target;
                self.visits[i] += 1;
            }
            _ => {
                self.bumped = true;
                self.bumps += 1;
            }
        }
    }

    /// Scatter new dirt. Returns the number of units added.
    pub fn accumulate(&mut self) -> u32 {
        let p = self.dirt_probability;
        let mut added = 0;
        for tile in &mut self.tiles {
            if let Tile::Floor { dirt } = tile {
                if self.rng.random::<f64>() < p {
                    *dirt += 1;
                    added += 1;
                }
            }
        }
        added
    }
}

// ── Episode driver ─────────────────────────────────────────────────

/// Run `agent` in `world` for `ticks` ticks and return its actions.
///
/// Each tick: dirt accumulates, the agent perceives and decides, and
/// the world applies the action.
pub fn run_episode<A: Agent + ?Sized>(
    agent: &mut A,
    world: &mut GridWorld,
    ticks: usize,
) -> Vec<Action> {
    let mut actions = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        world.accumulate();
        agent.perceive(world.percept());
        let action = agent.think();
        world.accept(action);
        actions.push(action);
    }
    actions
}
