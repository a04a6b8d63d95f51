//! The incremental transform that walks a block through the 8
//! orientations of the square's dihedral group.

use crate::polyominoes::Coord;

/// Mirror across the vertical axis.
fn mirror(coords: &mut [Coord]) {
    for c in coords.iter_mut() {
        c.x = -c.x;
    }
}

/// Rotate a quarter turn.
fn rotate(coords: &mut [Coord]) {
    for c in coords.iter_mut() {
        *c = Coord::new(-c.y, c.x);
    }
}

/// Advance `coords` from orientation `step` to orientation `step + 1`.
///
/// Every step mirrors; odd steps additionally rotate. Starting from
/// the identity this visits each of the 8 dihedral elements exactly
/// once, and the eighth step lands back on the starting coordinates.
/// Orientation indices and the rotation-table offsets are assigned in
/// exactly this sequence, so it must not be reordered.
pub fn next_orientation(mut coords: Vec<Coord>, step: usize) -> Vec<Coord> {
    mirror(&mut coords);
    if step % 2 == 1 {
        rotate(&mut coords);
    }
    coords
}

#[test]
fn even_steps_mirror_only() {
    let base = vec![Coord::new(2, 1)];

    let stepped = next_orientation(base.clone(), 0);
    assert_eq!(stepped, vec![Coord::new(-2, 1)]);

    // A second mirror undoes the first.
    assert_eq!(next_orientation(stepped, 2), base);
}

#[test]
fn odd_steps_mirror_then_rotate() {
    // (2, 1) mirrors to (-2, 1), which rotates to (-1, -2).
    let stepped = next_orientation(vec![Coord::new(2, 1)], 1);

    assert_eq!(stepped, vec![Coord::new(-1, -2)]);
}

#[test]
fn eight_steps_return_to_the_start() {
    use crate::polyominoes::NUM_ORIENTATIONS;

    let base = vec![
        Coord::new(0, 0),
        Coord::new(1, 0),
        Coord::new(0, -1),
        Coord::new(-2, 3),
    ];

    let mut coords = base.clone();
    for step in 0..NUM_ORIENTATIONS {
        coords = next_orientation(coords, step);
    }

    assert_eq!(coords, base);
}
