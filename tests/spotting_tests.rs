mod common;

use clipforge::assembly::map_assemblies;
use clipforge::clips::ClipTable;
use clipforge::config::PlanConfig;
use clipforge::script::spotting_groups;
use common::batch;
use rstest::rstest;

fn plan_assemblies(n: usize) -> Vec<clipforge::assembly::FinalAssembly> {
    // Alternate one- and two-part constructs so part counts differ.
    let one: &[&str] = &["L1", "P1", "L2"];
    let two: &[&str] = &["L1", "P1", "L2", "P2", "L3"];
    let rows: Vec<&[&str]> = (0..n).map(|i| if i % 2 == 0 { one } else { two }).collect();
    let constructs = batch(&rows);
    let table = ClipTable::build(&constructs, &PlanConfig::default()).unwrap();
    map_assemblies(&constructs, &table).unwrap()
}

#[rstest]
#[case(1, &[1])]
#[case(8, &[8])]
#[case(9, &[8, 1])]
#[case(16, &[8, 8])]
fn test_groups_follow_plate_columns(#[case] n: usize, #[case] sizes: &[usize]) {
    let groups = spotting_groups(&plan_assemblies(n));
    let got: Vec<_> = groups.iter().map(|g| g.wells.len()).collect();
    assert_eq!(got, sizes);
    for g in &groups {
        assert_eq!(g.part_counts.len(), g.wells.len());
    }
}

#[test]
fn test_group_wells_match_target_wells() {
    let assemblies = plan_assemblies(9);
    let groups = spotting_groups(&assemblies);

    let first: Vec<_> = groups[0].wells.iter().map(|w| w.to_string()).collect();
    assert_eq!(first, ["A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1"]);
    assert_eq!(groups[1].wells[0].to_string(), "A2");
    assert_eq!(groups[0].part_counts, [1, 2, 1, 2, 1, 2, 1, 2]);
    assert_eq!(groups[1].part_counts, [1]);
}

#[test]
fn test_no_assemblies_no_groups() {
    assert!(spotting_groups(&[]).is_empty());
}
