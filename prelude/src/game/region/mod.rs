//! Captured regions, and the composition of their drawable outlines

use log::warn;
use serde::{Deserialize, Serialize};

use super::team::{style_for, Style};
use crate::config::RenderConfig;
use crate::draw::{grid, offset_outward, round_corners, GridPoint, Path, PathFromDataError};

/// What the engine reports a region's outline as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Boundary {
    /// The cells along the edge, in loop order
    Vertices(Vec<GridPoint>),
    /// An already rendered path, as older engines produced them
    Rendered(String),
}

/// A captured region, as reported by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    id: usize,
    owner: u8,
    boundary: Boundary,
}

impl Region {
    pub fn new(id: usize, owner: u8, boundary: Boundary) -> Self {
        Region {
            id,
            owner,
            boundary,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn owner(&self) -> u8 {
        self.owner
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Outlines of the region. Rendered boundaries are passed through as the core path, with
    /// no halo.
    pub fn compose(&self, config: &RenderConfig) -> Result<RegionPaths, PathFromDataError> {
        match &self.boundary {
            Boundary::Vertices(points) => Ok(compose_region(
                &Polygon {
                    id: self.id,
                    points: points.clone(),
                    owner: self.owner,
                },
                config,
            )),
            Boundary::Rendered(d) => Ok(RegionPaths {
                id: self.id,
                core_path: Path::parse(d)?,
                halo_path: Path::new(),
                style: style_for(self.owner),
            }),
        }
    }
}

/// A region boundary on the board: an implicitly closed loop of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: usize,
    pub points: Vec<GridPoint>,
    pub owner: u8,
}

/// Everything needed to draw one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPaths {
    pub id: usize,
    pub core_path: Path,
    pub halo_path: Path,
    pub style: Style,
}

/// Rounded outline of the polygon, its rounded halo, and its owner's style
pub fn compose_region(polygon: &Polygon, config: &RenderConfig) -> RegionPaths {
    let mapped = grid::to_plane(&polygon.points, config.cell_spacing);
    let core_path = round_corners(&mapped, config.corner_radius);
    let halo_path = round_corners(
        &offset_outward(&mapped, config.halo_distance),
        config.corner_radius,
    );
    RegionPaths {
        id: polygon.id,
        core_path,
        halo_path,
        style: style_for(polygon.owner),
    }
}

/// Composes every region independently, keeping their order.
///
/// A rendered boundary that can't be parsed is drawn as nothing.
pub fn compose_regions(regions: &[Region], config: &RenderConfig) -> Vec<RegionPaths> {
    regions
        .iter()
        .map(|region| {
            region.compose(config).unwrap_or_else(|err| {
                warn!("Region {} has an unreadable outline: {err}", region.id());
                RegionPaths {
                    id: region.id(),
                    core_path: Path::new(),
                    halo_path: Path::new(),
                    style: style_for(region.owner()),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{PathCommand, Point};

    fn cells(points: &[(usize, usize)]) -> Vec<GridPoint> {
        points.iter().copied().map(GridPoint::from).collect()
    }

    #[test]
    fn five_cell_region_owned_by_red() {
        let polygon = Polygon {
            id: 3,
            points: cells(&[(10, 10), (11, 10), (12, 10), (11, 11), (10, 11)]),
            owner: 0,
        };
        let paths = compose_region(&polygon, &RenderConfig::default());

        assert_eq!(paths.id, 3);
        for path in [&paths.core_path, &paths.halo_path] {
            assert!(path.is_closed());
            assert!(path.is_finite());
            assert_eq!(path.curve_count(), 5);
        }
        assert_eq!(paths.style.fill_pattern_id, "player-1-pattern");
        assert_eq!(paths.style.stroke_color.to_string(), "#ef4444");
    }

    #[test]
    fn core_corners_are_the_cell_centers() {
        let polygon = Polygon {
            id: 0,
            points: cells(&[(0, 0), (0, 1), (1, 1)]),
            owner: 1,
        };
        let paths = compose_region(&polygon, &RenderConfig::default());
        let controls: Vec<Point> = paths
            .core_path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::QuadCurveTo { control, .. } => Some(*control),
                _ => None,
            })
            .collect();
        assert_eq!(
            controls,
            vec![
                Point::new(12., 12.),
                Point::new(36., 12.),
                Point::new(36., 36.)
            ]
        );
    }

    #[test]
    fn small_regions_draw_nothing_but_keep_their_style() {
        let polygon = Polygon {
            id: 1,
            points: cells(&[(0, 0), (0, 1)]),
            owner: 1,
        };
        let paths = compose_region(&polygon, &RenderConfig::default());
        assert!(paths.core_path.is_empty());
        assert!(paths.halo_path.is_empty());
        assert_eq!(paths.style, style_for(1));
    }

    #[test]
    fn rendered_boundaries_pass_through() {
        let region = Region::new(
            9,
            1,
            Boundary::Rendered("M 12,12 l 24,0 l 0,24 Z".into()),
        );
        let paths = region.compose(&RenderConfig::default()).unwrap();
        assert_eq!(paths.core_path.to_string(), "M 12 12 L 36 12 L 36 36 Z");
        assert!(paths.halo_path.is_empty());
        assert_eq!(paths.style, style_for(1));
    }

    #[test]
    fn rendered_boundaries_out_of_range_are_refused() {
        let region = Region::new(0, 0, Boundary::Rendered("M 1e39,0 L 5,5 Z".into()));
        assert!(matches!(
            region.compose(&RenderConfig::default()),
            Err(PathFromDataError::NonFiniteError)
        ));

        let paths = compose_regions(&[region], &RenderConfig::default());
        assert!(paths[0].core_path.is_empty());
        assert!(paths[0].core_path.is_finite());
    }

    #[test]
    fn unreadable_outlines_do_not_stop_the_others() {
        let regions = [
            Region::new(0, 0, Boundary::Rendered("M 0,0 C 1,1 2,2 3,3 Z".into())),
            Region::new(1, 1, Boundary::Vertices(cells(&[(0, 0), (0, 2), (2, 2)]))),
        ];
        let paths = compose_regions(&regions, &RenderConfig::default());
        assert_eq!(paths.len(), 2);
        assert!(paths[0].core_path.is_empty());
        assert_eq!(paths[1].core_path.curve_count(), 3);
    }

    #[test]
    fn boundaries_deserialize_from_either_form() {
        let vertices: Region =
            serde_json::from_str(r#"{"id":0,"owner":0,"boundary":[[1,2],[3,4],[5,6]]}"#).unwrap();
        assert_eq!(
            vertices.boundary(),
            &Boundary::Vertices(cells(&[(1, 2), (3, 4), (5, 6)]))
        );
        let rendered: Region =
            serde_json::from_str(r#"{"id":1,"owner":1,"boundary":"M 0,0 Z"}"#).unwrap();
        assert_eq!(rendered.boundary(), &Boundary::Rendered("M 0,0 Z".into()));
    }
}
