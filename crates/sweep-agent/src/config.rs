//! Agent configuration, validation, and error types.
//!
//! [`AgentConfig`] is fixed at construction. Every buffer the agent
//! allocates is sized from it, so [`validate()`](AgentConfig::validate)
//! runs before anything is allocated.

use std::error::Error;
use std::fmt;

use sweep_core::Position;
use sweep_space::SpaceError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`AgentConfig::validate()`] or agent construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `maze_size` is zero.
    EmptyMaze,
    /// `maze_size` exceeds [`AgentConfig::MAX_MAZE_SIZE`].
    MazeTooLarge {
        /// The configured size.
        size: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A grid buffer could not be allocated.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMaze => write!(f, "maze_size must be at least 1"),
            Self::MazeTooLarge { size, max } => {
                write!(f, "maze_size {size} exceeds maximum of {max}")
            }
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── AgentConfig ────────────────────────────────────────────────────

/// Construction parameters for a [`SweepAgent`](crate::SweepAgent).
///
/// `maze_size` is N, the side of the square environment measured in
/// traversable cells. The agent does not know where inside that square
/// it starts, so the discovery buffer is large enough to hold the
/// environment on any side of the start cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentConfig {
    /// Side length N of the environment. Default: 10.
    pub maze_size: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            maze_size: Self::DEFAULT_MAZE_SIZE,
        }
    }
}

impl AgentConfig {
    /// Default environment side.
    pub const DEFAULT_MAZE_SIZE: u32 = 10;

    /// Largest accepted environment side. The discovery buffer grows
    /// with `(2N + 1)²`, so this caps it near a hundred megabytes.
    pub const MAX_MAZE_SIZE: u32 = 1 << 10;

    /// Config for an environment of side `maze_size`.
    pub fn new(maze_size: u32) -> Self {
        Self { maze_size }
    }

    /// Check that the size is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maze_size == 0 {
            return Err(ConfigError::EmptyMaze);
        }
        if self.maze_size > Self::MAX_MAZE_SIZE {
            return Err(ConfigError::MazeTooLarge {
                size: self.maze_size,
                max: Self::MAX_MAZE_SIZE,
            });
        }
        Ok(())
    }

    /// Side of the square discovery buffer: `2N + 1`.
    ///
    /// The traversable region spans at most N cells on each axis and the
    /// walls that bound it sit one cell further out, so a start at the
    /// centre can probe every reachable cell without leaving the buffer.
    pub fn discovery_side(&self) -> u32 {
        2 * self.maze_size + 1
    }

    /// Where the agent places itself in the discovery buffer: its centre.
    pub fn discovery_start(&self) -> Position {
        let n = self.maze_size as i32;
        Position::new(n, n)
    }

    /// Search pool capacity: one slot per traversable cell, N².
    pub fn pool_capacity(&self) -> usize {
        self.maze_size as usize * self.maze_size as usize
    }
}
