use clap::{CommandFactory, FromArgMatches, Parser};
use clipforge::config::{Config, PlanConfig};
use clipforge::error::ClipForgeError;
use std::fs;

// Minimal parser wrapping Config the way the plan subcommand does.
#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.plan.max_clips, 48);
    assert_eq!(cfg.plan.assemblies_per_clip, 15);
    assert_eq!(cfg.plan.clip_well_offset, 48);
    assert_eq!(cfg.plan.max_constructs, 96);
    assert_eq!(cfg.plan.max_final_assembly_tipracks, 7);
    assert_eq!(
        cfg.sources.deck_positions(),
        ["2", "5", "8", "7", "10", "11"]
    );
}

#[test]
fn test_clap_defaults_match_struct_defaults() {
    let (cfg, _) = parse(&["test"]);
    assert_eq!(cfg.plan, PlanConfig::default());
}

#[test]
fn test_partial_json_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limits.json");
    fs::write(&path, r#"{ "plan": { "assemblies_per_clip": 10 } }"#).unwrap();

    let cfg = Config::load_from_file(&path).unwrap();
    assert_eq!(cfg.plan.assemblies_per_clip, 10);
    assert_eq!(cfg.plan.max_clips, 48);
    assert_eq!(cfg.sources.source_deck_positions, "2,5,8,7,10,11");
}

#[test]
fn test_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ plan: ").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(ClipForgeError::Json(_))
    ));
}

#[test]
fn test_cli_flags_override_file_values() {
    let mut from_file = Config {
        plan: PlanConfig {
            assemblies_per_clip: 10,
            max_clips: 20,
            ..Default::default()
        },
        ..Default::default()
    };
    let (cli, matches) = parse(&["test", "--max-clips", "12"]);
    from_file.merge_from_cli(&cli, &matches);

    // Typed on the command line: wins.
    assert_eq!(from_file.plan.max_clips, 12);
    // Only defaulted by clap: file value kept.
    assert_eq!(from_file.plan.assemblies_per_clip, 10);
}

#[test]
fn test_deck_positions_parse() {
    let (cli, _) = parse(&["test", "--source-deck-positions", " 1, 3 ,,4"]);
    assert_eq!(cli.sources.deck_positions(), ["1", "3", "4"]);
}

#[test]
fn test_validate() {
    assert!(PlanConfig::default().validate().is_ok());

    let zero_k = PlanConfig {
        assemblies_per_clip: 0,
        ..Default::default()
    };
    assert!(matches!(zero_k.validate(), Err(ClipForgeError::Config(_))));

    let no_room = PlanConfig {
        clip_well_offset: 96,
        ..Default::default()
    };
    assert!(no_room.validate().is_err());

    let oversized_batch = PlanConfig {
        max_constructs: 200,
        ..Default::default()
    };
    assert!(matches!(
        oversized_batch.validate(),
        Err(ClipForgeError::Config(_))
    ));

    let last_well = PlanConfig {
        clip_well_offset: 95,
        ..Default::default()
    };
    assert!(last_well.validate().is_ok());
}
