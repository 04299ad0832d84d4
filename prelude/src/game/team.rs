//! Teams represent the players of the game
//!
//! Teams have a name, a color, and a fill pattern for the regions they capture. Region owners
//! are player numbers starting from 0, while the board marks a player's cells with the player
//! number plus one (0 meaning an empty cell).

use log::warn;
use serde::{Deserialize, Serialize};

use crate::draw::Color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    color: Color,
    pattern_id: String,
}

impl Team {
    pub fn new(name: String, color: Color, pattern_id: String) -> Self {
        Team {
            name,
            color,
            pattern_id,
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pattern_id(&self) -> &str {
        &self.pattern_id
    }

    pub fn style(&self) -> Style {
        Style {
            fill_pattern_id: self.pattern_id.clone(),
            stroke_color: self.color,
        }
    }
}

/// The two players, in owner order
pub fn teams() -> [Team; 2] {
    [
        Team::new("red".into(), Color::red(), "player-1-pattern".into()),
        Team::new("blue".into(), Color::blue(), "player-2-pattern".into()),
    ]
}

/// The team of a region owner, None for anything but the two players
pub fn team(owner: u8) -> Option<Team> {
    teams().into_iter().nth(owner as usize)
}

/// The player whose turn comes after `owner`'s
pub fn next_player(owner: u8) -> u8 {
    ((owner as usize + 1) % teams().len()) as u8
}

/// The board's mark for `player`'s cells
pub fn cell_tag(player: u8) -> u8 {
    player + 1
}

/// The player whose mark is `tag`, None for empty cells
pub fn cell_owner(tag: u8) -> Option<u8> {
    tag.checked_sub(1)
}

/// How a region is filled and outlined
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub fill_pattern_id: String,
    pub stroke_color: Color,
}

impl Style {
    /// Gray outline over a neutral pattern, for owners no team corresponds to
    pub fn neutral() -> Self {
        Style {
            fill_pattern_id: "neutral-pattern".into(),
            stroke_color: Color::gray(),
        }
    }
}

/// Style of the regions of `owner`. Owners other than the two players get [`Style::neutral`].
pub fn style_for(owner: u8) -> Style {
    match team(owner) {
        Some(team) => team.style(),
        None => {
            warn!("No team for region owner {owner}, using the neutral style");
            Style::neutral()
        }
    }
}
