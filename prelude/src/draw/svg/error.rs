use std::{error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    FieldSizeMismatchError { expected: usize, found: usize },
    EmptyBoardError,
    BoardTooLargeError { height: usize, width: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use RenderError::*;
        match self {
            FieldSizeMismatchError { expected, found } => write!(
                f,
                "The engine's field has {found} cells, but its dimensions call for {expected}"
            ),
            EmptyBoardError => write!(f, "A board with no cells can't be drawn"),
            BoardTooLargeError { height, width } => {
                write!(f, "A {height}x{width} board has more cells than can be counted")
            }
        }
    }
}

impl error::Error for RenderError {}
