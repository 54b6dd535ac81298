use crate::env::MapDimensions;
use crate::state::Team;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Board width in cells.
    pub board_width: u32,
    /// Board height in cells.
    pub board_height: u32,
    /// Energy granted to the acting team at the start of every turn.
    pub max_energy_per_turn: u32,
    /// Team that acts first.
    pub starting_team: Team,
}

impl GameConfig {
    // ===== rule constants =====
    /// Cost charged for every fixed-offset jump regardless of distance.
    pub const JUMP_COST: u32 = 2;
    /// Floor applied to every assembled move cost.
    pub const MIN_MOVE_COST: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIZE: u32 = 8;
    pub const DEFAULT_MAX_ENERGY: u32 = 6;

    pub fn new() -> Self {
        Self {
            board_width: Self::DEFAULT_BOARD_SIZE,
            board_height: Self::DEFAULT_BOARD_SIZE,
            max_energy_per_turn: Self::DEFAULT_MAX_ENERGY,
            starting_team: Team::White,
        }
    }

    pub fn with_max_energy(mut self, max_energy_per_turn: u32) -> Self {
        self.max_energy_per_turn = max_energy_per_turn;
        self
    }

    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.board_width, self.board_height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
