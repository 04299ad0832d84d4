use log::{debug, info};

use self::{
    engine::{Engine, TurnError},
    region::{compose_regions, RegionPaths},
    team::next_player,
};
use crate::config::RenderConfig;

pub mod engine;
pub mod region;
pub mod team;

/// A running game: the engine deciding the turns, and the drawable regions of its position
pub struct Game<E: Engine> {
    engine: E,
    config: RenderConfig,
    current_player: u8,
    regions: Vec<RegionPaths>,
}

impl<E: Engine> Game<E> {
    /// Player 0 moves first
    pub fn new(engine: E, config: RenderConfig) -> Self {
        let regions = compose_regions(engine.regions(), &config);
        let (height, width) = engine.dimensions();
        info!(
            "Game started on a {height}x{width} board with {} region(s)",
            regions.len()
        );
        Game {
            engine,
            config,
            current_player: 0,
            regions,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    /// Drawable regions, as of the last accepted turn
    pub fn regions(&self) -> &[RegionPaths] {
        &self.regions
    }

    pub fn score(&self, player: u8) -> usize {
        self.engine.score(player)
    }

    /// Plays the current player's turn on the cell at `index`.
    ///
    /// Once the engine accepts the turn every region is recomposed from scratch, and the other
    /// player comes next. A rejected turn changes nothing.
    pub fn play(&mut self, index: usize) -> Result<&[RegionPaths], TurnError> {
        self.engine.apply_turn(index, self.current_player)?;
        self.regions = compose_regions(self.engine.regions(), &self.config);
        debug!(
            "Player {} played cell {index}, {} region(s) on the board",
            self.current_player,
            self.regions.len()
        );
        self.current_player = next_player(self.current_player);
        Ok(&self.regions)
    }
}
