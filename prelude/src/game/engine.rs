//! The seam between the board geometry and whatever resolves the game's turns
//!
//! Capture detection and scoring belong to the engine; the geometry only reads what the engine
//! reports. [`Board`] is an engine which keeps whatever it is given, for tests and for drawing
//! saved positions.

use std::{collections::BTreeMap, error, fmt};

use log::debug;
use serde::{Deserialize, Serialize};

use super::region::Region;
use super::team::{cell_tag, teams};

/// A board position source
pub trait Engine {
    /// Cell owners, row-major: 0 for empty, `player + 1` for a player's cell
    fn field(&self) -> &[u8];

    /// `(height, width)` of the board
    fn dimensions(&self) -> (usize, usize);

    /// Captured regions, in the engine's order
    fn regions(&self) -> &[Region];

    fn score(&self, player: u8) -> usize;

    /// Places `player`'s mark on the cell at `index`
    fn apply_turn(&mut self, index: usize, player: u8) -> Result<(), TurnError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    OutOfBounds { index: usize, cells: usize },
    Occupied(usize),
    UnknownPlayer(u8),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use TurnError::*;
        match self {
            OutOfBounds { index, cells } => {
                write!(f, "Cell {index} is off the board, which has {cells} cells")
            }
            Occupied(index) => write!(f, "Cell {index} is already taken"),
            UnknownPlayer(player) => write!(f, "There is no player {player}"),
        }
    }
}

impl error::Error for TurnError {}

/// A saved position: the board, the scores, and the captured regions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub height: usize,
    pub width: usize,
    /// Empty for an empty board
    pub field: Vec<u8>,
    pub scores: Vec<usize>,
    pub regions: Vec<Region>,
}

impl Snapshot {
    pub fn from_json(s: &str) -> eyre::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Largest board a snapshot may describe
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    FieldSizeMismatch { expected: usize, found: usize },
    UnknownCellOwner { index: usize, owner: u8 },
    BoardTooLarge { height: usize, width: usize },
    TooManyScores { found: usize, players: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use SnapshotError::*;
        match self {
            FieldSizeMismatch { expected, found } => write!(
                f,
                "The field should have {expected} cells (height * width), but it has {found}"
            ),
            UnknownCellOwner { index, owner } => {
                write!(f, "Cell {index} is owned by {owner}, which is not a player")
            }
            BoardTooLarge { height, width } => write!(
                f,
                "A {height}x{width} board is over the limit of {MAX_CELLS} cells"
            ),
            TooManyScores { found, players } => {
                write!(f, "There are {found} scores, but only {players} players")
            }
        }
    }
}

impl error::Error for SnapshotError {}

/// Engine that stores the position as given. Turns only mark cells: nothing gets captured and
/// nobody scores unless told so through [`Board::capture`].
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    height: usize,
    width: usize,
    field: Vec<u8>,
    scores: BTreeMap<u8, usize>,
    regions: Vec<Region>,
    turns: usize,
}

impl Board {
    /// An empty board. The size is not checked, [`Board::from_snapshot`] does that.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            field: vec![0; height * width],
            scores: BTreeMap::new(),
            regions: Vec::new(),
            turns: 0,
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        use SnapshotError::*;
        let (height, width) = (snapshot.height, snapshot.width);
        if !matches!(height.checked_mul(width), Some(cells) if cells <= MAX_CELLS) {
            return Err(BoardTooLarge { height, width });
        }
        let players = teams().len();
        if snapshot.scores.len() > players {
            return Err(TooManyScores {
                found: snapshot.scores.len(),
                players,
            });
        }

        let mut board = Board::new(height, width);
        if !snapshot.field.is_empty() {
            if snapshot.field.len() != board.field.len() {
                return Err(FieldSizeMismatch {
                    expected: board.field.len(),
                    found: snapshot.field.len(),
                });
            }
            if let Some((index, &owner)) = snapshot
                .field
                .iter()
                .enumerate()
                .find(|&(_, &owner)| owner as usize > teams().len())
            {
                return Err(UnknownCellOwner { index, owner });
            }
            board.field = snapshot.field;
        }
        board.scores = (0..players as u8).zip(snapshot.scores).collect();
        board.regions = snapshot.regions;
        Ok(board)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            height: self.height,
            width: self.width,
            field: self.field.clone(),
            scores: (0..teams().len() as u8).map(|p| self.score(p)).collect(),
            regions: self.regions.clone(),
        }
    }

    /// Records a captured region, and the points it was worth to its owner
    pub fn capture(&mut self, region: Region, points: usize) {
        *self.scores.entry(region.owner()).or_default() += points;
        self.regions.push(region);
    }

    /// Number of turns applied since creation
    pub fn turns(&self) -> usize {
        self.turns
    }
}

impl Engine for Board {
    fn field(&self) -> &[u8] {
        &self.field
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn regions(&self) -> &[Region] {
        &self.regions
    }

    fn score(&self, player: u8) -> usize {
        self.scores.get(&player).copied().unwrap_or(0)
    }

    fn apply_turn(&mut self, index: usize, player: u8) -> Result<(), TurnError> {
        use TurnError::*;
        if player as usize >= teams().len() {
            return Err(UnknownPlayer(player));
        }
        let cells = self.field.len();
        let cell = self.field.get_mut(index).ok_or(OutOfBounds { index, cells })?;
        if *cell != 0 {
            return Err(Occupied(index));
        }
        *cell = cell_tag(player);
        self.turns += 1;
        debug!("Turn {}: player {player} took cell {index}", self.turns);
        Ok(())
    }
}
