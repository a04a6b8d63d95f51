pub mod rotate;

use self::rotate::next_orientation;
use super::piece::Piece;
use super::{Coord, NUM_ORIENTATIONS};

/// One entry of a block's rotation table: how to reach orientation `i`
/// from the canonical piece that represents it.
///
/// `piece` indexes into the owning block's canonical arena. `(dx, dy)`
/// is the translation from the canonical piece's placement onto the
/// footprint orientation `i` would have produced directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub dx: i32,
    pub dy: i32,
    pub piece: usize,
}

/// A named block together with every geometrically distinct
/// orientation it can take.
///
/// The canonical arena holds one piece per distinct orientation, in
/// the order the transform sequence first produced them. The rotation
/// table always holds 8 entries, one per transform step, each pointing
/// back into the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    name: String,
    size: usize,
    pieces: Vec<Piece>,
    rotations: [Rotation; NUM_ORIENTATIONS],
}

impl Block {
    /// Walk `base` through the 8 transform steps, deduplicating
    /// orientations that are pure translations of an earlier one.
    pub fn new(name: &str, base: &[Coord]) -> Block {
        let mut pieces: Vec<Piece> = Vec::new();
        let mut rotations = Vec::with_capacity(NUM_ORIENTATIONS);

        let mut coords = base.to_vec();
        for step in 0..NUM_ORIENTATIONS {
            let piece = Piece::new(step as u8, format!("{name}_{step}"), coords.clone());

            match find_translate(&pieces, &piece) {
                Some(rotation) => rotations.push(rotation),
                None => {
                    rotations.push(Rotation {
                        dx: 0,
                        dy: 0,
                        piece: pieces.len(),
                    });
                    pieces.push(piece);
                }
            }

            coords = next_orientation(coords, step);
        }

        let rotations = rotations.try_into().unwrap();

        Block {
            name: name.to_string(),
            size: base.len(),
            pieces,
            rotations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell count, shared by every piece of this block.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The canonical arena: one piece per distinct orientation.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn rotations(&self) -> &[Rotation; NUM_ORIENTATIONS] {
        &self.rotations
    }

    /// Resolve an arena index from a rotation entry.
    pub fn piece(&self, id: usize) -> &Piece {
        &self.pieces[id]
    }

    /// Translate a placement at `(x, y)` through the rotation table:
    /// where the canonical piece sits to realize `orientation` there.
    ///
    /// Panics if `orientation` is not in 0..8.
    pub fn rotate(&self, x: i32, y: i32, orientation: usize) -> (i32, i32, &Piece) {
        let entry = self.rotations[orientation];
        (x + entry.dx, y + entry.dy, &self.pieces[entry.piece])
    }
}

/// Find the first already-accepted piece that `candidate` is a pure
/// translation of.
///
/// Earlier orientations are preferred as canonical representatives, so
/// the scan runs in insertion order and stops at the first hit. The
/// transform sequence already produces every rotation and reflection
/// explicitly, so translation is the only congruence left to detect
/// here.
fn find_translate(pieces: &[Piece], candidate: &Piece) -> Option<Rotation> {
    let footprint = candidate.normalized();

    pieces.iter().enumerate().find_map(|(id, known)| {
        (known.normalized() == footprint).then(|| Rotation {
            dx: candidate.bounds().min_x - known.bounds().min_x,
            dy: candidate.bounds().min_y - known.bounds().min_y,
            piece: id,
        })
    })
}

#[cfg(test)]
fn coords(cells: &[(i32, i32)]) -> Vec<Coord> {
    cells.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

#[test]
fn square_collapses_to_one_piece() {
    let square = Block::new("o4", &coords(&[(0, 0), (1, 0), (0, 1), (1, 1)]));

    assert_eq!(square.pieces().len(), 1);

    // Only the translation offsets distinguish the 8 orientations.
    let offsets: Vec<(i32, i32)> = square.rotations().iter().map(|r| (r.dx, r.dy)).collect();
    assert!(square.rotations().iter().all(|r| r.piece == 0));
    assert_eq!(
        offsets,
        [
            (0, 0),
            (-1, 0),
            (-1, 0),
            (0, 0),
            (-1, -1),
            (0, -1),
            (0, -1),
            (-1, -1),
        ]
    );
}

#[test]
fn l_tetromino_has_no_symmetry() {
    use hashbrown::HashSet;

    let l4 = Block::new("l4", &coords(&[(0, 0), (0, -1), (0, 1), (-1, 1)]));

    assert_eq!(l4.pieces().len(), 8);

    // Each orientation has its own translation-normalized footprint.
    let footprints: HashSet<Vec<Coord>> = l4.pieces().iter().map(|p| p.normalized()).collect();
    assert_eq!(footprints.len(), 8);

    // With nothing deduplicated, every entry is a plain self-reference.
    for (step, rotation) in l4.rotations().iter().enumerate() {
        assert_eq!(*rotation, Rotation { dx: 0, dy: 0, piece: step });
    }
}

#[test]
fn bent_tromino_mirror_symmetry_halves_the_arena() {
    // Every tromino has a mirror symmetry; the bent one folds onto its
    // first four orientations.
    let bent = Block::new("l3", &coords(&[(0, 0), (1, 0), (0, -1)]));

    assert_eq!(bent.pieces().len(), 4);
    assert_eq!(bent.rotations().len(), NUM_ORIENTATIONS);
}

#[test]
fn first_match_wins() {
    // The single cell matches orientation 0 at every later step; the
    // table must never reference a later duplicate.
    let lone = Block::new("i1", &coords(&[(0, 0)]));

    assert_eq!(lone.pieces().len(), 1);
    for rotation in lone.rotations() {
        assert_eq!(*rotation, Rotation { dx: 0, dy: 0, piece: 0 });
    }
}

#[test]
fn rotate_carries_the_table_offset() {
    let square = Block::new("o4", &coords(&[(0, 0), (1, 0), (0, 1), (1, 1)]));

    // Orientation 1 of the square is the canonical piece shifted one
    // cell west.
    let (x, y, piece) = square.rotate(3, 5, 1);
    assert_eq!((x, y), (2, 5));
    assert_eq!(piece.name(), "o4_0");
}

#[test]
fn arena_ids_stay_in_bounds() {
    let t4 = Block::new("t4", &coords(&[(0, 0), (1, 0), (0, 1), (0, -1)]));

    assert!(t4.pieces().len() <= NUM_ORIENTATIONS);
    for rotation in t4.rotations() {
        assert!(rotation.piece < t4.pieces().len());
    }
}
