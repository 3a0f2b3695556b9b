//! Tests for maze validation rules and their ordering.

use super::*;

fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_valid_corridor() {
    assert_eq!(validate(&grid(&["#####", "#^  E", "#####"])), Ok(()));
}

#[test]
fn test_entrant_and_exit_allowed_in_top_and_bottom_rows() {
    let maze = grid(&["##^##", "#   #", "##E##"]);
    assert_eq!(validate(&maze), Ok(()));
}

#[test]
fn test_row_length_mismatch() {
    let err = validate(&grid(&["#####", "#^ E", "#####"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::RowLengthMismatch {
            row: 1,
            expected: 5,
            found: 4
        }
    );
}

#[test]
fn test_row_length_checked_before_everything_else() {
    // Also has invalid characters and no exit, but the ragged row wins.
    let err = validate(&grid(&["#x###", "#^  #", "###"])).unwrap_err();
    assert!(matches!(err, ValidationError::RowLengthMismatch { row: 2, .. }));
}

#[test]
fn test_side_walls_must_be_wall_or_exit() {
    let err = validate(&grid(&["#####", "^   E", "#####"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidBorderCell {
            row: 1,
            column: 0,
            found: '^'
        }
    );

    let err = validate(&grid(&["#####", "#^E  ", "#####"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidBorderCell {
            row: 1,
            column: 4,
            found: ' '
        }
    );
}

#[test]
fn test_exit_in_side_wall_is_valid() {
    assert_eq!(validate(&grid(&["#####", "E ^ #", "#####"])), Ok(()));
}

#[test]
fn test_invalid_character() {
    let err = validate(&grid(&["#####", "#^x E", "#####"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidCharacter {
            row: 1,
            column: 2,
            found: 'x'
        }
    );
}

#[test]
fn test_visited_marker_is_not_valid_input() {
    let err = validate(&grid(&["#####", "#^. E", "#####"])).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidCharacter { found: '.', .. }
    ));
}

#[test]
fn test_border_checked_before_characters_within_a_row() {
    // Row 1 has both a bad interior character and a bad last cell.
    let err = validate(&grid(&["#####", "#^x  ", "#####"])).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidBorderCell { .. }));
}

#[test]
fn test_earlier_row_reported_first() {
    let err = validate(&grid(&["##x##", "^   E", "#####"])).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidCharacter { row: 0, .. }
    ));
}

#[test]
fn test_missing_entrant() {
    let err = validate(&grid(&["#####", "#   E", "#####"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingEntrantOrExit {
            entrant_found: false,
            exit_found: true
        }
    );
    assert_eq!(err.to_string(), "maze has no entrant");
}

#[test]
fn test_missing_exit() {
    let err = validate(&grid(&["#####", "#^  #", "#####"])).unwrap_err();
    assert_eq!(err.to_string(), "maze has no exit");
}

#[test]
fn test_missing_both() {
    let err = validate(&grid(&["###", "# #", "###"])).unwrap_err();
    assert_eq!(err.to_string(), "maze has no entrant and no exit");
}

#[test]
fn test_missing_markers_checked_before_solid_rows() {
    // First row has an open cell, but there is no exit at all.
    let err = validate(&grid(&["# ###", "#^  #", "#####"])).unwrap_err();
    assert!(matches!(err, ValidationError::MissingEntrantOrExit { .. }));
}

#[test]
fn test_first_row_must_be_solid() {
    let err = validate(&grid(&["# ###", "#^  E", "#####"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidBorderCell {
            row: 0,
            column: 1,
            found: ' '
        }
    );
}

#[test]
fn test_last_row_must_be_solid() {
    let err = validate(&grid(&["#####", "#^  E", "### #"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidBorderCell {
            row: 2,
            column: 3,
            found: ' '
        }
    );
}

#[test]
fn test_single_row_maze() {
    assert_eq!(validate(&grid(&["#^E#"])), Ok(()));
}
