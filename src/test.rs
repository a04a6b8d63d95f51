use crate::{
    blockset::{standard_block_set, STANDARD_BLOCKS},
    emit,
    polyominoes::{block::rotate::next_orientation, Piece, Quadrant, NUM_ORIENTATIONS},
};

#[test]
fn standard_set_totals() {
    let blocks = standard_block_set();

    assert_eq!(blocks.len(), 21);

    let oriented: usize = blocks.iter().map(|block| block.pieces().len()).sum();
    assert_eq!(oriented, 91);

    let mini: usize = blocks
        .iter()
        .filter(|block| block.size() <= emit::MINI_SIZE_LIMIT)
        .map(|block| block.pieces().len())
        .sum();
    assert_eq!(mini, 28);
}

#[test]
fn per_block_orientation_counts() {
    #[rustfmt::skip]
    let expected = [
        ("i1", 1), ("i2", 2),
        ("i3", 2), ("l3", 4),
        ("i4", 2), ("l4", 8), ("t4", 4), ("o4", 1), ("z4", 4),
        ("i5", 2), ("l5", 8), ("n5", 8), ("p5", 8), ("c5", 4), ("y5", 8),
        ("t5", 4), ("v5", 4), ("w5", 4), ("z5", 4), ("f5", 8), ("x5", 1),
    ];

    let blocks = standard_block_set();

    for (block, (name, count)) in blocks.iter().zip(expected) {
        assert_eq!(block.name(), name);
        assert_eq!(block.pieces().len(), count, "block {name}");
    }
}

/// A block with fewer than 8 canonical pieces has a non-trivial
/// symmetry, and vice versa.
#[test]
fn arena_size_matches_symmetry() {
    use hashbrown::HashSet;

    for block in standard_block_set() {
        assert!(block.pieces().len() <= NUM_ORIENTATIONS);

        let footprints: HashSet<_> = block
            .pieces()
            .iter()
            .map(|piece| piece.normalized())
            .collect();
        assert_eq!(footprints.len(), block.pieces().len(), "block {}", block.name());
    }
}

#[test]
fn corner_metadata_invariants() {
    for block in standard_block_set() {
        for piece in block.pieces() {
            assert_eq!(piece.size(), block.size());
            assert!(!piece.corners().is_empty(), "piece {}", piece.name());

            for quadrant in Quadrant::ALL {
                for corner in piece.directed_corners(quadrant) {
                    assert!(piece.corners().contains(corner), "piece {}", piece.name());
                }
            }
        }
    }
}

/// Translating a rotation entry's canonical piece by its offset must
/// land exactly on the footprint that orientation would have produced
/// directly from the transform sequence.
#[test]
fn rotation_offsets_recover_every_orientation() {
    for def in &STANDARD_BLOCKS {
        let block = def.build();

        let mut coords = def.coords();
        for step in 0..NUM_ORIENTATIONS {
            let direct = Piece::new(
                step as u8,
                format!("{}_{step}", def.name),
                coords.clone(),
            );

            let entry = block.rotations()[step];
            let canonical = block.piece(entry.piece);

            assert_eq!(
                canonical.normalized(),
                direct.normalized(),
                "{} orientation {step}",
                def.name
            );
            assert_eq!(
                canonical.bounds().min_x + entry.dx,
                direct.bounds().min_x,
                "{} orientation {step}",
                def.name
            );
            assert_eq!(
                canonical.bounds().min_y + entry.dy,
                direct.bounds().min_y,
                "{} orientation {step}",
                def.name
            );

            coords = next_orientation(coords, step);
        }
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(standard_block_set(), standard_block_set());
}

#[test]
fn emitted_tables_cover_the_standard_sets() {
    let blocks = standard_block_set();

    let mut out = Vec::new();
    emit::write_tables(&mut out, &blocks, emit::MINI_SIZE_LIMIT).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("pub static MINI_PIECE_SET: [&Piece; 28] = ["));
    assert!(text.contains("pub static FULL_PIECE_SET: [&Piece; 91] = ["));
    assert!(text.contains("pub static BLOCK_SET: [Block; 21] = ["));

    // The monomino never leaves its single canonical piece.
    assert!(text.contains("static I1_0: Piece = Piece {"));
    assert_eq!(
        text.matches("Rotation { dx: 0, dy: 0, piece: &I1_0 }").count(),
        8
    );

    // Last block, orientation 0: id 20 << 3.
    assert!(text.contains("    id: 0xa0,"));
}
