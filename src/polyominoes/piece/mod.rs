use core::fmt;

use hashbrown::HashSet;

use super::{BoundingBox, Coord, Quadrant};

/// A polyomino at one fixed orientation.
///
/// Construction derives all of the boundary metadata the placement
/// rules need: which cells can participate in a diagonal touch
/// ("corners"), and which diagonal directions are open at each of
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    orientation: u8,
    name: String,
    coords: Vec<Coord>,
    corners: Vec<Coord>,
    directed_corners: [Vec<Coord>; 4],
    bounds: BoundingBox,
}

impl Piece {
    /// Build a piece from `coords` at orientation index `orientation`.
    ///
    /// Cell order is preserved. Panics if `coords` is empty: an empty
    /// shape is a block-definition error.
    pub fn new(orientation: u8, name: String, coords: Vec<Coord>) -> Piece {
        assert!(!coords.is_empty(), "piece {name} has no cells");

        let cells: HashSet<Coord> = coords.iter().copied().collect();
        let has = |x: i32, y: i32| cells.contains(&Coord { x, y });

        // A cell flanked on both sides along either axis sits in the
        // interior of a straight run and can never touch diagonally.
        let corners: Vec<Coord> = coords
            .iter()
            .copied()
            .filter(|c| {
                !((has(c.x - 1, c.y) && has(c.x + 1, c.y))
                    || (has(c.x, c.y - 1) && has(c.x, c.y + 1)))
            })
            .collect();

        let open = |c: Coord, quadrant: Quadrant| match quadrant {
            Quadrant::NorthWest => !has(c.x, c.y - 1) && !has(c.x - 1, c.y),
            Quadrant::NorthEast => !has(c.x, c.y - 1) && !has(c.x + 1, c.y),
            Quadrant::SouthWest => !has(c.x, c.y + 1) && !has(c.x - 1, c.y),
            Quadrant::SouthEast => !has(c.x, c.y + 1) && !has(c.x + 1, c.y),
        };

        let directed_corners = Quadrant::ALL
            .map(|quadrant| corners.iter().copied().filter(|&c| open(c, quadrant)).collect());

        let bounds = BoundingBox::of(&coords);

        Piece {
            orientation,
            name,
            coords,
            corners,
            directed_corners,
            bounds,
        }
    }

    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cells of this piece, in definition order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn size(&self) -> usize {
        self.coords.len()
    }

    /// Cells that can participate in a diagonal touch.
    pub fn corners(&self) -> &[Coord] {
        &self.corners
    }

    /// The corners open towards `quadrant`.
    pub fn directed_corners(&self, quadrant: Quadrant) -> &[Coord] {
        &self.directed_corners[quadrant.index()]
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Coordinates translated to the bounding-box minimum and sorted.
    ///
    /// Two pieces are translates of each other exactly when their
    /// normalized lists are element-wise equal; translation preserves
    /// the lexicographic order of the cells, so a positional compare
    /// is enough.
    pub fn normalized(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self
            .coords
            .iter()
            .map(|c| Coord::new(c.x - self.bounds.min_x, c.y - self.bounds.min_y))
            .collect();
        cells.sort_unstable();
        cells
    }
}

impl fmt::Display for Piece {
    // Render the occupied cells of the bounding box row by row,
    // northernmost row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: HashSet<Coord> = self.coords.iter().copied().collect();

        let mut grid = String::new();
        for y in self.bounds.min_y..=self.bounds.max_y {
            for x in self.bounds.min_x..=self.bounds.max_x {
                grid.push(if cells.contains(&Coord { x, y }) {
                    '#'
                } else {
                    '.'
                });
            }
            grid.push('\n');
        }

        write!(f, "{}", grid.trim_end())
    }
}

#[cfg(test)]
fn piece(coords: &[(i32, i32)]) -> Piece {
    let coords = coords.iter().map(|&(x, y)| Coord::new(x, y)).collect();
    Piece::new(0, "test_0".to_string(), coords)
}

#[test]
fn single_cell_is_open_in_every_direction() {
    let lone = piece(&[(0, 0)]);

    assert_eq!(lone.corners(), &[Coord::new(0, 0)]);
    for quadrant in Quadrant::ALL {
        assert_eq!(lone.directed_corners(quadrant), &[Coord::new(0, 0)]);
    }
}

#[test]
fn straight_run_interior_is_not_a_corner() {
    // A vertical 3-in-a-row. The middle cell is flanked on the y axis.
    let bar = piece(&[(0, -1), (0, 0), (0, 1)]);

    assert_eq!(bar.corners(), &[Coord::new(0, -1), Coord::new(0, 1)]);
}

#[test]
fn bent_tromino_corner_classification() {
    let bent = piece(&[(0, 0), (1, 0), (0, -1)]);

    // No cell is interior to a straight run.
    assert_eq!(bent.corners().len(), 3);

    assert_eq!(bent.directed_corners(Quadrant::NorthWest), &[Coord::new(0, -1)]);
    assert_eq!(
        bent.directed_corners(Quadrant::NorthEast),
        &[Coord::new(1, 0), Coord::new(0, -1)]
    );
    assert_eq!(bent.directed_corners(Quadrant::SouthWest), &[Coord::new(0, 0)]);
    assert_eq!(bent.directed_corners(Quadrant::SouthEast), &[Coord::new(1, 0)]);
}

#[test]
fn directed_corners_are_a_subset_of_corners() {
    let plus = piece(&[(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1)]);

    for quadrant in Quadrant::ALL {
        for corner in plus.directed_corners(quadrant) {
            assert!(plus.corners().contains(corner));
        }
    }
}

#[test]
fn bounding_box_covers_all_cells() {
    let bent = piece(&[(0, 0), (1, 0), (0, -1)]);
    let bounds = bent.bounds();

    assert_eq!((bounds.min_x, bounds.min_y), (0, -1));
    assert_eq!((bounds.max_x, bounds.max_y), (1, 0));
    assert_eq!((bounds.width(), bounds.height()), (2, 2));
}

#[test]
fn normalized_form_is_translation_invariant() {
    let bent = piece(&[(0, 0), (1, 0), (0, -1)]);
    let shifted = piece(&[(5, 7), (6, 7), (5, 6)]);

    assert_eq!(bent.normalized(), shifted.normalized());
}

#[test]
fn display_renders_the_cell_grid() {
    let bent = piece(&[(0, 0), (1, 0), (0, -1)]);

    assert_eq!(format!("{bent}"), "#.\n##");
}

#[test]
#[should_panic]
fn empty_piece_panics() {
    Piece::new(0, "empty_0".to_string(), Vec::new());
}
