use clipforge::config::PlanConfig;
use clipforge::design::Construct;
use clipforge::error::ClipForgeError;
use clipforge::loader::{load_constructs, load_constructs_from_reader};
use clipforge::plan::Planner;
use clipforge::script::{clip_transfers, CsvInventory, SourceInventory, StockLocation};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Write};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
    path
}

// --- CONSTRUCTS ---

#[test]
fn test_load_constructs_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "constructs.csv",
        &[
            "Well,Linker 1,Part 1,Linker 2,Part 2,Linker 3",
            "A1,LMS,Pro1,L1,CDS1,LMP",
            "A2,LMS,Pro2,L1,CDS1,LMP",
        ],
    );
    let rows = load_constructs(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "A1");
    assert_eq!(rows[1].elements, ["LMS", "Pro2", "L1", "CDS1", "LMP"]);
}

#[test]
fn test_blank_cells_dropped_and_ragged_rows() {
    let data = "id,a,b,c\n\
                pJ1, L1 ,,P1,L2\n\
                pJ2,L1,P1,L2,P2,L3\n";
    let rows = load_constructs_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(rows[0].elements, ["L1", "P1", "L2"]);
    assert_eq!(rows[1].elements.len(), 5);
}

#[test]
fn test_empty_row_ends_batch() {
    let data = "id,a,b,c\npJ1,L1,P1,L2\n,,,\npJ3,L1,P3,L2\n";
    let rows = load_constructs_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_blank_line_ends_batch() {
    let data = "Well,L1,P1,L2\npJ1,L1,P1,L2\n\npJ2,L1,P2,L2\n";
    let rows = load_constructs_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "pJ1");
}

#[test]
fn test_blank_line_after_header_yields_nothing() {
    let data = "Well,L1,P1,L2\n\npJ1,L1,P1,L2\n";
    let rows = load_constructs_from_reader(Cursor::new(data)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_blank_line_in_file_ends_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "constructs.csv",
        &[
            "Well,L1,P1,L2",
            "pJ1,L1,P1,L2",
            "pJ2,L1,P2,L2",
            "",
            "",
            "pJ3,L1,P3,L2",
        ],
    );
    let rows = load_constructs(&path).unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["pJ1", "pJ2"]);
}

#[test]
fn test_missing_file() {
    let err = load_constructs("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, ClipForgeError::Io(_)));
}

// --- SOURCE INVENTORY ---

#[test]
fn test_inventory_loads_plates_onto_slots() {
    let dir = tempfile::tempdir().unwrap();
    let linkers = write_file(
        &dir,
        "linkers.csv",
        &["Name,Well,Concentration", "L1-P,A1,", "L1-S,B1,", "L2-S,C1"],
    );
    let parts = write_file(
        &dir,
        "parts.csv",
        &["Name,Well,Concentration", "P1,A1,120.5", "P2,B1,n/a"],
    );

    let slots = vec!["2".to_string(), "5".to_string()];
    let inv = CsvInventory::load(&[&linkers, &parts], &slots).unwrap();
    assert_eq!(inv.len(), 5);

    let l1 = inv.locate("L1-P").unwrap();
    assert_eq!(l1.plate, "2");
    assert_eq!(l1.well.to_string(), "A1");
    assert_eq!(l1.concentration, None);

    let p1 = inv.locate("P1").unwrap();
    assert_eq!(p1.plate, "5");
    assert_eq!(p1.concentration, Some(120.5));

    // Unreadable concentration is dropped, not fatal.
    assert_eq!(inv.locate("P2").unwrap().concentration, None);
    assert!(inv.locate("P3").is_none());
}

#[test]
fn test_inventory_rejects_extra_plates() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.csv", &["Name,Well"]);
    let slots = vec!["2".to_string()];
    match CsvInventory::load(&[&a, &a], &slots) {
        Err(ClipForgeError::TooManySourcePlates { count, limit }) => {
            assert_eq!(count, 2);
            assert_eq!(limit, 1);
        }
        other => panic!("expected TooManySourcePlates, got {:?}", other),
    }
}

#[test]
fn test_inventory_bad_well() {
    let mut inv = CsvInventory::default();
    let data = "Name,Well\nP1,Z99\n";
    assert!(matches!(
        inv.add_from_reader(Cursor::new(data), "2"),
        Err(ClipForgeError::InvalidWell(_))
    ));
}

// --- TRANSFERS ---

fn stock(well: &str) -> StockLocation {
    StockLocation {
        well: well.parse().unwrap(),
        plate: "2".to_string(),
        concentration: None,
    }
}

#[test]
fn test_transfers_one_per_repeat_well() {
    let constructs = (0..16)
        .map(|i| Construct::from_names(i, "c", &["L1", "P1", "L2"]).unwrap())
        .collect::<Vec<_>>();
    let plan = Planner::new(PlanConfig::default())
        .unwrap()
        .plan(&constructs)
        .unwrap();

    let mut inv: HashMap<String, StockLocation> = HashMap::new();
    inv.insert("L1-P".into(), stock("A1"));
    inv.insert("P1".into(), stock("B1"));
    inv.insert("L1-S".into(), stock("C1"));

    let transfers = clip_transfers(&plan.unique_reactions, &inv).unwrap();
    assert_eq!(transfers.len(), 2);
    assert_eq!(transfers[0].destination.to_string(), "A7");
    assert_eq!(transfers[1].destination.to_string(), "B7");
    assert_eq!(transfers[0].part.well.to_string(), "B1");
    assert_eq!(transfers[0].suffix.well.to_string(), "C1");
}

#[test]
fn test_transfers_missing_source() {
    let constructs =
        vec![Construct::from_names(0, "c", &["L1", "P1", "L2"]).unwrap()];
    let plan = Planner::new(PlanConfig::default())
        .unwrap()
        .plan(&constructs)
        .unwrap();

    let mut inv = CsvInventory::default();
    inv.insert("L1-P", stock("A1"));
    inv.insert("P1", stock("B1"));

    match clip_transfers(&plan.unique_reactions, &inv) {
        Err(ClipForgeError::MissingSource(name)) => assert_eq!(name, "L1-S"),
        other => panic!("expected MissingSource, got {:?}", other),
    }
}
