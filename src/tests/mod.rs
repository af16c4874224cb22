/*
ENSnano, a 3d graphical application for DNA nanostructures.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn row(active_line_count: usize, lines: &[(isize, isize)]) -> RowDescriptor {
    let lines = lines
        .iter()
        .map(|(start, end)| LineInterval::new(*start, *end).unwrap())
        .collect();
    RowDescriptor::new(active_line_count, lines).unwrap()
}

/// An outline spanning `[min, max)` on every helix.
fn rectangle(nb_helices: usize, min: isize, max: isize) -> OutlineModel {
    OutlineModel::new((0..nb_helices).map(|_| row(0, &[(min, max)])).collect()).unwrap()
}

#[test]
fn lattice_constants_lookup() {
    assert_eq!(
        lattice_constants("hex").unwrap(),
        LatticeConstants {
            periodicity: 7,
            pair_periodicity: 14
        }
    );
    assert_eq!(
        lattice_constants("square").unwrap(),
        LatticeConstants {
            periodicity: 8,
            pair_periodicity: 16
        }
    );
}

#[test]
fn unknown_lattice_is_rejected() {
    assert_eq!(
        lattice_constants("triangular"),
        Err(OutlineError::InvalidLatticeKind("triangular".to_string()))
    );
    assert!(LatticeKind::from_tag("Hex").is_err());
    assert!(serde_json::from_str::<LatticeKind>("\"triangular\"").is_err());
    assert_eq!(
        serde_json::from_str::<LatticeKind>("\"square\"").unwrap(),
        LatticeKind::Square
    );
}

#[test]
fn contains_active_lines() {
    let outline = OutlineModel::new(vec![
        row(0, &[(0, 10)]),
        row(1, &[(0, 10), (20, 30)]),
    ])
    .unwrap();
    assert!(outline.contains(0, 0).unwrap());
    assert!(outline.contains(0, 9).unwrap());
    assert!(!outline.contains(0, 10).unwrap());
    assert!(!outline.contains(0, -1).unwrap());
    assert!(outline.contains(1, 25).unwrap());
    assert!(!outline.contains(1, 15).unwrap());
}

#[test]
fn contains_ignores_padding_lines() {
    let outline = OutlineModel::new(vec![row(0, &[(0, 10), (20, 30)])]).unwrap();
    assert!(outline.contains(0, 5).unwrap());
    assert!(!outline.contains(0, 25).unwrap());
    assert!(!outline.contains(0, 15).unwrap());
}

#[test]
fn contains_helix_out_of_range() {
    let outline = rectangle(2, 0, 10);
    assert_eq!(
        outline.contains(-1, 5),
        Err(OutlineError::HelixOutOfRange {
            helix: -1,
            nb_helices: 2
        })
    );
    assert_eq!(
        outline.contains(2, 5),
        Err(OutlineError::HelixOutOfRange {
            helix: 2,
            nb_helices: 2
        })
    );
}

#[test]
fn extents_ignore_padding() {
    let outline = OutlineModel::new(vec![
        row(0, &[(4, 30), (-10, 100)]),
        row(1, &[(6, 12), (20, 41)]),
    ])
    .unwrap();
    assert_eq!(outline.min_extent(), Some(4));
    assert_eq!(outline.max_extent(), 41);
    assert_eq!(outline.center().unwrap(), 22);
}

#[test]
fn center_between_extents() {
    for (min, max) in [(0, 40), (3, 50), (-7, 8), (10, 11)] {
        let outline = rectangle(3, min, max);
        let center = outline.center().unwrap();
        assert!(outline.min_extent().unwrap() <= center);
        assert!(center <= outline.max_extent());
    }
    assert_eq!(rectangle(1, 0, 40).center().unwrap(), 20);
    assert_eq!(rectangle(1, 3, 50).center().unwrap(), 26);
}

#[test]
fn invalid_rows_are_rejected() {
    assert_eq!(
        LineInterval::new(5, 5),
        Err(OutlineError::InvalidInterval { start: 5, end: 5 })
    );
    assert_eq!(
        RowDescriptor::new(1, vec![LineInterval::new(0, 4).unwrap()]),
        Err(OutlineError::MissingLines {
            active_line_count: 1,
            nb_lines: 1
        })
    );
    assert_eq!(OutlineModel::new(vec![]), Err(OutlineError::EmptyOutline));
}

#[test]
fn aligned_hex_outline_has_no_warning() {
    let outline = rectangle(4, 0, 56);
    assert!(outline.validate(LatticeKind::Hex).unwrap().is_empty());
    assert!(validate_outline(&outline, "hex").unwrap().is_empty());
}

#[test]
fn misaligned_square_outline_has_all_warnings() {
    let outline = rectangle(2, 3, 50);
    let warnings = validate_outline(&outline, "square").unwrap();
    assert_eq!(
        warnings,
        vec![
            Warning::NonZeroMinimum { min: 3 },
            Warning::NotPeriodicityAligned {
                lattice: LatticeKind::Square,
                periodicity: 8,
                max: 50
            },
            Warning::SeamNotCrossoverAligned {
                pair_periodicity: 16,
                max: 50
            },
        ]
    );
}

#[test]
fn only_pair_periodicity_warning() {
    let outline = rectangle(2, 0, 21);
    assert_eq!(
        outline.validate(LatticeKind::Hex).unwrap(),
        vec![Warning::SeamNotCrossoverAligned {
            pair_periodicity: 14,
            max: 21
        }]
    );
}

#[test]
fn validate_with_unknown_lattice() {
    let outline = rectangle(2, 0, 56);
    assert_eq!(
        validate_outline(&outline, "triangular"),
        Err(OutlineError::InvalidLatticeKind("triangular".to_string()))
    );
}

#[test]
fn warning_messages_carry_values() {
    let message = Warning::NonZeroMinimum { min: 3 }.message();
    assert!(message.contains('3'));
    let message = Warning::NotPeriodicityAligned {
        lattice: LatticeKind::Square,
        periodicity: 8,
        max: 50,
    }
    .to_string();
    assert!(message.contains("square"));
    assert!(message.contains("50"));
    let message = Warning::SeamNotCrossoverAligned {
        pair_periodicity: 16,
        max: 50,
    }
    .message();
    assert!(message.contains("16"));
    assert!(message.contains("crossover"));
}

#[test]
fn helix_zero_searches_forward() {
    let outline = rectangle(3, 0, 40);
    let seams = SeamIndex::new(vec![
        SeamEntry::NoSeam,
        SeamEntry::NoSeam,
        SeamEntry::Offsets(vec![12]),
    ]);
    assert_eq!(seams.find_pattern_center(0, &outline).unwrap(), 12);
}

#[test]
fn other_helices_search_backward() {
    let outline = rectangle(2, 0, 40);
    let seams = SeamIndex::new(vec![SeamEntry::Offsets(vec![5]), SeamEntry::NoSeam]);
    assert_eq!(seams.find_pattern_center(1, &outline).unwrap(), 5);
}

#[test]
fn backward_search_wraps_to_the_end() {
    let outline = rectangle(3, 0, 40);
    let seams = SeamIndex::new(vec![
        SeamEntry::NoSeam,
        SeamEntry::NoSeam,
        SeamEntry::Offsets(vec![9, 30]),
    ]);
    assert_eq!(seams.find_pattern_center(1, &outline).unwrap(), 9);
}

#[test]
fn negative_helix_searches_backward_from_the_end() {
    let outline = rectangle(3, 0, 40);
    let seams = SeamIndex::new(vec![
        SeamEntry::Offsets(vec![5]),
        SeamEntry::NoSeam,
        SeamEntry::NoSeam,
    ]);
    assert_eq!(seams.find_pattern_center(-1, &outline).unwrap(), 20);
    let seams = SeamIndex::new(vec![
        SeamEntry::NoSeam,
        SeamEntry::NoSeam,
        SeamEntry::Offsets(vec![5]),
    ]);
    assert_eq!(seams.find_pattern_center(-1, &outline).unwrap(), 5);
    assert_eq!(seams.find_pattern_center(-3, &outline).unwrap(), 20);
}

#[test]
fn missing_lines_message_with_huge_line_count() {
    let error = OutlineError::MissingLines {
        active_line_count: usize::MAX,
        nb_lines: 1,
    };
    assert!(error.to_string().contains(&usize::MAX.to_string()));
}

#[test]
fn exhausted_search_uses_outline_center() {
    init_logger();
    let outline = rectangle(4, 0, 40);
    let seams = SeamIndex::new(vec![SeamEntry::NoSeam, SeamEntry::NoSeam]);
    assert_eq!(seams.find_pattern_center(3, &outline).unwrap(), 20);
    assert_eq!(seams.find_pattern_center(1, &outline).unwrap(), 20);
    assert_eq!(seams.find_pattern_center(0, &outline).unwrap(), 20);
    assert_eq!(
        SeamIndex::default().find_pattern_center(0, &outline).unwrap(),
        20
    );
}

#[test]
fn empty_seam_list_is_malformed() {
    let outline = rectangle(2, 0, 40);
    let seams = SeamIndex::new(vec![SeamEntry::Offsets(vec![]), SeamEntry::NoSeam]);
    assert_eq!(
        seams.find_pattern_center(1, &outline),
        Err(OutlineError::MalformedSeamEntry { helix: 0 })
    );
}

#[test]
fn pattern_center_of_every_helix() {
    let outline = rectangle(4, 0, 40);
    let seams = SeamIndex::new(vec![
        SeamEntry::NoSeam,
        SeamEntry::Offsets(vec![14]),
        SeamEntry::NoSeam,
        SeamEntry::Offsets(vec![28, 7]),
    ]);
    assert_eq!(seams.pattern_centers(&outline).unwrap(), vec![14, 14, 14, 28]);
}

#[test]
fn read_hex_design() {
    init_logger();
    let design = OutlineDesign::from_json_str(include_str!("./hex_rectangle.json")).unwrap();
    assert_eq!(design.lattice, LatticeKind::Hex);
    assert_eq!(design.outline.nb_helices(), 4);
    assert_eq!(design.outline.row(1).unwrap().active_lines().len(), 2);
    assert!(!design.outline.contains(2, 1).unwrap());
    assert_eq!(design.outline.min_extent(), Some(0));
    assert_eq!(design.outline.max_extent(), 56);
    assert!(design.validate().unwrap().is_empty());
    assert_eq!(
        design.seams.entries()[1],
        SeamEntry::Offsets(vec![28, 35])
    );
    assert_eq!(design.find_pattern_center(0).unwrap(), 28);
    assert_eq!(design.find_pattern_center(2).unwrap(), 28);
    assert_eq!(design.find_pattern_center(3).unwrap(), 21);
}

#[test]
fn read_design_without_seams() {
    let design = OutlineDesign::from_json_str(include_str!("./square_offset.json")).unwrap();
    assert!(design.seams.is_empty());
    assert_eq!(design.validate().unwrap().len(), 3);
    assert_eq!(design.find_pattern_center(1).unwrap(), 26);
}

#[test]
fn design_json_round_trip_keeps_markers() {
    let design = OutlineDesign::from_json_str(include_str!("./hex_rectangle.json")).unwrap();
    let json = design.to_json_string().unwrap();
    assert!(json.contains("\"no seam\""));
    let reread = OutlineDesign::from_json_str(&json).unwrap();
    assert_eq!(reread.outline, design.outline);
    assert_eq!(reread.seams, design.seams);
}

#[test]
fn malformed_designs_are_rejected() {
    let bad_lattice = r#"{"lattice": "triangular", "outline": [[0, [[0, 7]]]]}"#;
    let bad_interval = r#"{"lattice": "hex", "outline": [[0, [[7, 0]]]]}"#;
    let missing_line = r#"{"lattice": "hex", "outline": [[1, [[0, 7]]]]}"#;
    let empty_outline = r#"{"lattice": "hex", "outline": []}"#;
    let bad_marker = r#"{"lattice": "hex", "outline": [[0, [[0, 7]]]], "seams": ["none"]}"#;
    let huge_line_count =
        r#"{"lattice": "hex", "outline": [[18446744073709551615, [[0, 7]]]]}"#;
    for json in [
        bad_lattice,
        bad_interval,
        missing_line,
        empty_outline,
        bad_marker,
        huge_line_count,
    ] {
        match OutlineDesign::from_json_str(json) {
            Err(LoadDesignError::JsonError(_)) => (),
            other => panic!("expected a json error for {}, got {:?}", json, other),
        }
    }
}

#[test]
fn missing_design_file() {
    match OutlineDesign::read_file("this/file/does/not/exist.json") {
        Err(LoadDesignError::IoError(_)) => (),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn staple_sequence_at_pattern_center() {
    use ensnano_sequences::{complement, SequenceTable};
    let design = OutlineDesign::from_json_str(include_str!("./hex_rectangle.json")).unwrap();
    let center = design.find_pattern_center(3).unwrap() as usize;
    let mut table = SequenceTable::new();
    table.insert("scaffold", "ACGT".repeat(14));
    let scaffold = table.sequence("scaffold", center, center + 4).unwrap();
    assert_eq!(scaffold, "CGTA");
    assert_eq!(complement(scaffold).unwrap(), "GCAT");
}
