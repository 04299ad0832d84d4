use std::fs;
use std::path::Path;

use dots_prelude::{
    engine::{Board, Snapshot},
    RenderConfig,
};
use eyre::{eyre, Result, WrapErr};
use log::{debug, info};

pub const DEFAULT_SIDE: usize = 48;

/// Reads the render config, falling back to the defaults when no file is given
pub fn get_config(path: Option<&Path>) -> Result<RenderConfig> {
    let config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("Couldn't read config {}", path.display()))?;
            RenderConfig::from_json(&json)?
        }
        None => RenderConfig::default(),
    };
    config.validate()?;
    debug!("Using {config:?}");
    Ok(config)
}

/// Loads a saved position, or sets up an empty board of the given size
pub fn get_board(snapshot: Option<&Path>, height: usize, width: usize) -> Result<Board> {
    let Some(path) = snapshot else {
        if height == 0 || width == 0 {
            return Err(eyre!("Can't start on a {height}x{width} board"));
        }
        info!("Starting on an empty {height}x{width} board");
        return Ok(Board::from_snapshot(Snapshot {
            height,
            width,
            ..Default::default()
        })?);
    };

    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("Couldn't read snapshot {}", path.display()))?;
    let snapshot = Snapshot::from_json(&json)?;
    let board = Board::from_snapshot(snapshot)?;
    info!("Loaded board from {}", path.display());
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dots_prelude::engine::Engine;
    use std::io::Write;

    #[test]
    fn missing_files_mean_defaults() {
        assert_eq!(get_config(None).unwrap(), RenderConfig::default());
        let board = get_board(None, 3, 5).unwrap();
        assert_eq!(board.dimensions(), (3, 5));
    }

    #[test]
    fn zero_sized_boards_are_refused() {
        assert!(get_board(None, 0, 5).is_err());
    }

    #[test]
    fn oversized_empty_boards_are_refused() {
        assert!(get_board(None, usize::MAX, 2).is_err());
    }

    #[test]
    fn invalid_configs_are_refused() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cell_spacing": 0 }}"#).unwrap();
        assert!(get_config(Some(file.path())).is_err());
    }

    #[test]
    fn snapshots_are_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "height": 2, "width": 2, "field": [0, 1, 2, 0] }}"#).unwrap();
        let board = get_board(Some(file.path()), DEFAULT_SIDE, DEFAULT_SIDE).unwrap();
        assert_eq!(board.field(), &[0, 1, 2, 0]);
    }
}
