//! Tests for grid construction, loading and cell access.

use super::*;
use tempfile::TempDir;

#[test]
fn test_cell_symbols_round_trip() {
    for cell in [
        Cell::Wall,
        Cell::Open,
        Cell::Exit,
        Cell::Entrant,
        Cell::Visited,
    ] {
        assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
    }
    assert_eq!(Cell::from_symbol('x'), None);
}

#[test]
fn test_enterable_cells() {
    assert!(Cell::Open.is_enterable());
    assert!(Cell::Visited.is_enterable());
    assert!(Cell::Exit.is_enterable());
    assert!(!Cell::Wall.is_enterable());
    assert!(!Cell::Entrant.is_enterable());
}

#[test]
fn test_parse_strips_line_endings() {
    let grid = Grid::parse("#####\n#^  E\n#####\n", DEFAULT_MAX_LINE_LENGTH).unwrap();
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.lines(), vec!["#####", "#^  E", "#####"]);

    let crlf = Grid::parse("###\r\n#^E\r\n###\r\n", DEFAULT_MAX_LINE_LENGTH).unwrap();
    assert_eq!(crlf.lines(), vec!["###", "#^E", "###"]);
}

#[test]
fn test_parse_keeps_ragged_rows() {
    // Row length is the validator's concern, not the loader's.
    let grid = Grid::parse("####\n#^E\n####", DEFAULT_MAX_LINE_LENGTH).unwrap();
    assert_eq!(grid.row(1).map(<[char]>::len), Some(3));
    assert_eq!(grid.width(), 4);
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(Grid::parse("", 10), Err(LoadError::Empty));
    assert_eq!(Grid::parse("\n###\n", 10), Err(LoadError::Empty));
}

#[test]
fn test_parse_rejects_long_lines() {
    let err = Grid::parse("###\n#^#####E\n###", 5).unwrap_err();
    assert_eq!(
        err,
        LoadError::LineTooLong {
            row: 1,
            length: 8,
            max: 5
        }
    );
    assert!(err.to_string().contains("maximum is 5"));
}

#[test]
fn test_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("maze.txt");
    std::fs::write(&path, "#####\n#^  E\n#####\n").unwrap();

    let grid = load_file(&path, DEFAULT_MAX_LINE_LENGTH).unwrap();
    assert_eq!(grid.to_string(), "#####\n#^  E\n#####");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_file(dir.path().join("nope.txt"), DEFAULT_MAX_LINE_LENGTH).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_cell_access_is_bounds_checked() {
    let grid = Grid::from_rows(&["#####", "#^  E", "#####"]).unwrap();

    assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Entrant));
    assert_eq!(grid.cell(Position::new(4, 1)), Some(Cell::Exit));
    assert_eq!(grid.cell(Position::new(2, 1)), Some(Cell::Open));
    assert_eq!(grid.cell(Position::new(5, 1)), None);
    assert_eq!(grid.cell(Position::new(0, 3)), None);
    assert!(!grid.contains(Position::new(5, 0)));
}

#[test]
fn test_set_cell() {
    let mut grid = Grid::from_rows(&["###", "#^E", "###"]).unwrap();

    assert!(grid.set(Position::new(1, 1), Cell::Visited));
    assert_eq!(grid.symbol(Position::new(1, 1)), Some('.'));
    assert!(!grid.set(Position::new(9, 9), Cell::Wall));
}

#[test]
fn test_position_offset() {
    let pos = Position::new(1, 0);
    assert_eq!(pos.offset(-1, 0), Some(Position::new(0, 0)));
    assert_eq!(pos.offset(0, -1), None);
    assert_eq!(pos.offset(1, 1), Some(Position::new(2, 1)));
    assert_eq!(pos.to_string(), "column 1, row 0");
}
