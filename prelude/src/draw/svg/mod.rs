//! Drawing a whole board position as an SVG document

use svg::node::element::path::Data;
use svg::node::element::{Circle, Definitions, Group, Path as SvgPath, Pattern, Polygon, Rectangle};
use svg::Document;

use super::{Color, GridPoint};
use crate::config::RenderConfig;
use crate::game::{
    engine::Engine,
    region::RegionPaths,
    team::{cell_owner, team, teams, Style},
};

mod error;

pub use error::RenderError;

const DOT_RADIUS: f32 = 2.;
const PLAYER_DOT_RADIUS: f32 = 6.;
const PATTERN_SIZE: f32 = 16.;

/// Light background of each player's fill pattern, in owner order
const PATTERN_BACKGROUNDS: [Color; 2] = [
    Color::new(0xfe, 0xca, 0xca),
    Color::new(0xdb, 0xea, 0xfe),
];

fn pattern(owner: usize, style: &Style) -> Pattern {
    let background = PATTERN_BACKGROUNDS
        .get(owner)
        .copied()
        .unwrap_or(Color::new(0xe5, 0xe7, 0xeb));
    let pattern = Pattern::new()
        .set("id", style.fill_pattern_id.as_str())
        .set("patternUnits", "userSpaceOnUse")
        .set("width", PATTERN_SIZE)
        .set("height", PATTERN_SIZE)
        .add(
            Rectangle::new()
                .set("width", PATTERN_SIZE)
                .set("height", PATTERN_SIZE)
                .set("fill", background.to_string()),
        );
    let color = style.stroke_color.to_string();
    match owner {
        0 => pattern.set("patternTransform", "rotate(45)").add(
            Circle::new()
                .set("cx", 8)
                .set("cy", 8)
                .set("r", 4)
                .set("fill", color),
        ),
        1 => pattern.add(
            Polygon::new()
                .set("points", "8,4 12,8 8,12 4,8")
                .set("fill", color)
                .set("opacity", 0.7),
        ),
        _ => pattern,
    }
}

fn definitions() -> Definitions {
    teams()
        .iter()
        .enumerate()
        .map(|(owner, team)| pattern(owner, &team.style()))
        .chain(std::iter::once(pattern(usize::MAX, &Style::neutral())))
        .fold(Definitions::new(), |defs, pattern| defs.add(pattern))
}

/// A player's mark is a circle for the first player, and a rhombus for the second one
fn dot(cell: GridPoint, value: u8, config: &RenderConfig) -> Group {
    let (cx, cy) = cell.to_plane(config.cell_spacing).get();
    let group = Group::new();
    match cell_owner(value).and_then(team) {
        None => group.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", DOT_RADIUS)
                .set("fill", "#d1d5db"),
        ),
        Some(team) if value == 1 => group.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", PLAYER_DOT_RADIUS)
                .set("fill", team.color().to_string()),
        ),
        Some(team) => {
            let r = PLAYER_DOT_RADIUS;
            let points = format!(
                "{},{} {},{} {},{} {},{}",
                cx,
                cy - r,
                cx + r,
                cy,
                cx,
                cy + r,
                cx - r,
                cy
            );
            group.add(
                Polygon::new()
                    .set("points", points)
                    .set("fill", team.color().to_string()),
            )
        }
    }
}

/// The halo under the filled core outline. Regions with nothing to draw give an empty group.
fn region(paths: &RegionPaths) -> Group {
    let stroke = paths.style.stroke_color.to_string();
    let mut group = Group::new().set("id", format!("region-{}", paths.id));
    if !paths.halo_path.is_empty() {
        group = group.add(
            SvgPath::new()
                .set("d", Data::from(&paths.halo_path))
                .set("fill", "none")
                .set("stroke", stroke.as_str())
                .set("stroke-width", 4)
                .set("opacity", 0.7),
        );
    }
    if !paths.core_path.is_empty() {
        group = group.add(
            SvgPath::new()
                .set("d", Data::from(&paths.core_path))
                .set("fill", format!("url(#{})", paths.style.fill_pattern_id))
                .set("stroke", stroke.as_str())
                .set("stroke-width", 2),
        );
    }
    group
}

/// Draws every cell of the engine's board, and the given regions over them
pub fn render_board<E: Engine>(
    engine: &E,
    regions: &[RegionPaths],
    config: &RenderConfig,
) -> Result<Document, RenderError> {
    use RenderError::*;
    let (height, width) = engine.dimensions();
    let field = engine.field();
    let cells = height
        .checked_mul(width)
        .ok_or(BoardTooLargeError { height, width })?;
    if cells == 0 {
        return Err(EmptyBoardError);
    }
    if field.len() != cells {
        return Err(FieldSizeMismatchError {
            expected: cells,
            found: field.len(),
        });
    }

    let (w, h) = (
        width as f32 * config.cell_spacing,
        height as f32 * config.cell_spacing,
    );
    let dots = field
        .iter()
        .enumerate()
        .map(|(i, &value)| dot(GridPoint::from_index(i, width), value, config))
        .fold(Group::new().set("id", "dots"), |g, dot| g.add(dot));
    let regions = regions
        .iter()
        .map(region)
        .fold(Group::new().set("id", "regions"), |g, region| g.add(region));

    Ok(Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", format!("0 0 {w} {h}"))
        .add(definitions())
        .add(dots)
        .add(regions))
}
