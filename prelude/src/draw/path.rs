//! Drawable paths: a minimal `M`/`L`/`Q`/`Z` command grammar over [`Point`]s

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    error,
    fmt::{self, Display},
};
use svg::node::element::path::{Command, Data, Parameters, Position};

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadCurveTo { control: Point, end: Point },
    Close,
}

impl PathCommand {
    /// Every point the command references, control points included
    pub fn points(&self) -> Vec<Point> {
        use PathCommand::*;
        match *self {
            MoveTo(p) | LineTo(p) => vec![p],
            QuadCurveTo { control, end } => vec![control, end],
            Close => vec![],
        }
    }
}

impl Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PathCommand::*;
        match self {
            MoveTo(p) => write!(f, "M {} {}", p.x(), p.y()),
            LineTo(p) => write!(f, "L {} {}", p.x(), p.y()),
            QuadCurveTo { control, end } => write!(
                f,
                "Q {} {} {} {}",
                control.x(),
                control.y(),
                end.x(),
                end.y()
            ),
            Close => write!(f, "Z"),
        }
    }
}

/// Ordered drawing commands. Empty when there is nothing to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path(Vec<PathCommand>);

impl Path {
    pub fn new() -> Self {
        Path(Vec::new())
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    pub fn push(&mut self, command: PathCommand) {
        self.0.push(command)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Starts with a move, and ends with a close back to it
    pub fn is_closed(&self) -> bool {
        matches!(
            (self.0.first(), self.0.last()),
            (Some(PathCommand::MoveTo(_)), Some(PathCommand::Close))
        )
    }

    pub fn start(&self) -> Option<Point> {
        match self.0.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Number of rounded corners
    pub fn curve_count(&self) -> usize {
        self.0
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadCurveTo { .. }))
            .count()
    }

    /// Number of straight runs, the opening move included
    pub fn segment_count(&self) -> usize {
        self.0
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_) | PathCommand::LineTo(_)))
            .count()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().flat_map(PathCommand::points)
    }

    pub fn is_finite(&self) -> bool {
        self.points().all(|p| p.is_finite())
    }

    /// Parses a single closed path, like the ones older engines rendered themselves
    pub fn parse(d: &str) -> Result<Path, PathFromDataError> {
        let data = Data::parse(d).map_err(PathFromDataError::SyntaxError)?;
        data.try_into()
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Path(commands)
    }
}

impl Display for Path {
    /// SVG path syntax, absolute commands only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl From<&Path> for Data {
    fn from(path: &Path) -> Data {
        let mut data = Data::new();
        for command in path.commands() {
            use PathCommand::*;
            data = match *command {
                MoveTo(p) => data.move_to::<Parameters>(p.into()),
                LineTo(p) => data.line_to::<Parameters>(p.into()),
                QuadCurveTo { control, end } => data.quadratic_curve_to(vec![
                    control.x(),
                    control.y(),
                    end.x(),
                    end.y(),
                ]),
                Close => data.close(),
            };
        }
        data
    }
}

fn absolute(position: &Position, pos: Point, x: f32, y: f32) -> Point {
    match position {
        Position::Absolute => Point::new(x, y),
        Position::Relative => pos + Point::new(x, y),
    }
}

fn push_command(
    command: &Command,
    pos: &mut Point,
    start: &mut Point,
    vec: &mut Vec<PathCommand>,
) -> Result<(), PathFromDataError> {
    use Command::*;
    use PathFromDataError::*;
    match command {
        Move(position, params) | Line(position, params) => {
            if params.len() % 2 != 0 {
                return Err(OddParamsErr(command.clone()));
            }
            let is_move = matches!(command, Move(..));
            for (i, (&x, &y)) in params.iter().tuples().enumerate() {
                *pos = absolute(position, *pos, x, y);
                // only the first pair of a move moves, the rest are implicit lines
                if is_move && i == 0 {
                    *start = *pos;
                    vec.push(PathCommand::MoveTo(*pos));
                } else {
                    vec.push(PathCommand::LineTo(*pos));
                }
            }
        }
        HorizontalLine(position, params) => {
            for &param in params.iter() {
                match position {
                    Position::Absolute => pos.move_abs_x(param),
                    Position::Relative => pos.move_rel(param, 0.),
                }
                vec.push(PathCommand::LineTo(*pos));
            }
        }
        VerticalLine(position, params) => {
            for &param in params.iter() {
                match position {
                    Position::Absolute => pos.move_abs_y(param),
                    Position::Relative => pos.move_rel(0., param),
                }
                vec.push(PathCommand::LineTo(*pos));
            }
        }
        QuadraticCurve(position, params) => {
            if params.len() % 4 != 0 {
                return Err(QuadParamsErr(command.clone()));
            }
            for (&cx, &cy, &x, &y) in params.iter().tuples() {
                let control = absolute(position, *pos, cx, cy);
                let end = absolute(position, *pos, x, y);
                *pos = end;
                vec.push(PathCommand::QuadCurveTo { control, end });
            }
        }
        Close => {
            *pos = *start;
            vec.push(PathCommand::Close);
        }
        cmd => return Err(UnsupportedCommandError(cmd.clone())),
    }
    Ok(())
}

impl TryFrom<Data> for Path {
    type Error = PathFromDataError;
    fn try_from(data: Data) -> Result<Self, Self::Error> {
        use PathFromDataError::*;
        let mut pos = Point::new(0., 0.);
        let mut start = pos;
        let mut vec = Vec::new();
        let len = data.len();
        for (i, command) in data.iter().enumerate() {
            use Command::*;
            // Ensures that first command is a move
            if i == 0 {
                if let Move(_, params) = command {
                    if params.len() < 2 {
                        return Err(NoFirstParamsError);
                    }
                } else {
                    return Err(FirstNotMoveError);
                }
            } else if let Move(_, _) = command {
                return Err(NonFirstMoveError(i));
            }
            if let Close = command {
                if i + 1 != len {
                    return Err(EarlyCloseError);
                }
            } else if i + 1 == len {
                return Err(LastNotCloseError);
            }
            push_command(command, &mut pos, &mut start, &mut vec)?;
        }
        let path = Path(vec);
        if !path.is_finite() {
            return Err(NonFiniteError);
        }
        Ok(path)
    }
}

#[derive(Debug)]
pub enum PathFromDataError {
    SyntaxError(svg::parser::Error),
    FirstNotMoveError,
    LastNotCloseError,
    NonFirstMoveError(usize),
    NoFirstParamsError,
    EarlyCloseError,
    UnsupportedCommandError(Command),
    OddParamsErr(Command),
    QuadParamsErr(Command),
    NonFiniteError,
}

impl fmt::Display for PathFromDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use PathFromDataError::*;
        match self {
            SyntaxError(err) => write!(f, "Malformed path data: {err}"),
            FirstNotMoveError => write!(f, "First path command is not a move"),
            LastNotCloseError => write!(f, "Last path command is not a close"),
            NonFirstMoveError(pos) => write!(
                f,
                "The {pos}th command is a move, but only the first command can be a move"
            ),
            NoFirstParamsError => write!(f, "The first parameter(s) of a command can't be found"),
            EarlyCloseError => write!(f, "There is a Close command too early in the SVG path"),
            UnsupportedCommandError(cmd) => write!(f, "This command is unsupported: {:?}", cmd),
            OddParamsErr(cmd) => write!(
                f,
                "This command type needs an even number of parameters: {:?}",
                cmd
            ),
            QuadParamsErr(cmd) => write!(
                f,
                "Quadratic curves need parameters in groups of four: {:?}",
                cmd
            ),
            NonFiniteError => write!(f, "The path has coordinates too large to draw"),
        }
    }
}

impl error::Error for PathFromDataError {}
