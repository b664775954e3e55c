//! Scripted sessions through the text loop.

use std::io::{Cursor, Write};

use cave_client::{CliApp, CliConfig, Session, SessionOutcome};
use cave_core::{GameConfig, Item, Position, RoomKind, WeaponKind};

fn corridor(rooms: &[RoomKind]) -> Vec<(Position, RoomKind)> {
    rooms
        .iter()
        .enumerate()
        .map(|(x, room)| (Position::new(x as i32, 0), *room))
        .collect()
}

fn play(session: &mut Session, script: &str) -> (SessionOutcome, String) {
    let mut output = Vec::new();
    let outcome = {
        let mut engine = session.engine();
        let mut app = CliApp::new(Cursor::new(script.as_bytes()), &mut output, false);
        app.run(&mut engine).unwrap()
    };
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn walking_out_wins() {
    let mut session = Session::new(
        corridor(&[RoomKind::StartingRoom, RoomKind::LeaveCave]),
        GameConfig::default(),
        1,
    )
    .unwrap();

    let (outcome, output) = play(&mut session, "d\n");

    assert_eq!(outcome, SessionOutcome::Victory);
    assert!(output.starts_with("You find yourself in a cave"));
    assert!(
        output.contains("Choose an action:\nd: Move east\ni: Display inventory\nq: Use potion\n")
    );
    assert!(output.contains("You have escaped the cave!"));
    assert!(output.trim_end().ends_with("Victory! You leave the cave with 15 gold."));
}

#[test]
fn stepping_into_the_death_trap_ends_the_game() {
    let mut session = Session::new(
        corridor(&[RoomKind::StartingRoom, RoomKind::DeathTrap]),
        GameConfig::default(),
        1,
    )
    .unwrap();

    let (outcome, output) = play(&mut session, "d\ni\n");

    assert_eq!(outcome, SessionOutcome::Defeated);
    assert!(output.contains("You have died."));
    assert!(output.trim_end().ends_with("Game over."));
    assert!(!output.contains("Gold\n====="), "no turns after death");
}

#[test]
fn unknown_hotkeys_reprompt_without_side_effects() {
    let mut session = Session::new(
        corridor(&[RoomKind::StartingRoom, RoomKind::WildDog, RoomKind::LeaveCave]),
        GameConfig::default(),
        1,
    )
    .unwrap();
    session.state.player.add_item(Item::Weapon(WeaponKind::Dagger));

    let (outcome, output) = play(&mut session, "d\nz\n\n  i\nx\n");

    assert_eq!(outcome, SessionOutcome::InputClosed);
    assert_eq!(output.matches("The Wild Dog does 2 damage.").count(), 1);
    // Entering, then "z", a blank line and "i" (not offered in combat) re-prompt.
    assert_eq!(output.matches("Choose an action:").count(), 6);
    assert!(output.contains("You use Dagger against the Wild Dog!"));
    assert!(output.contains("You killed the Wild Dog!"));
    assert_eq!(session.state.player.hp, 98);
}

#[test]
fn inventory_lists_the_starting_kit() {
    let mut session = Session::new(
        corridor(&[RoomKind::StartingRoom, RoomKind::EmptyCavePath]),
        GameConfig::default(),
        1,
    )
    .unwrap();

    let (outcome, output) = play(&mut session, "I\n");

    assert_eq!(outcome, SessionOutcome::InputClosed);
    assert!(output.contains("Gold\n=====\nA round coin with 15 stamped on the front.\nValue: 15"));
    assert!(output.contains("Rock\n=====\n"));
}

#[test]
fn empty_input_closes_the_session() {
    let mut session = Session::new(
        corridor(&[RoomKind::StartingRoom]),
        GameConfig::default(),
        1,
    )
    .unwrap();

    let (outcome, output) = play(&mut session, "");

    assert_eq!(outcome, SessionOutcome::InputClosed);
    assert_eq!(output.matches("Choose an action:").count(), 1);
}

#[test]
fn session_loads_layout_and_config_files() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("tiny.ron");
    let config_path = dir.path().join("config.toml");
    std::fs::File::create(&map_path)
        .unwrap()
        .write_all(b"#![enable(implicit_some)]\n(rows: [[LeaveCave], [StartingRoom]])")
        .unwrap();
    std::fs::write(&config_path, "starting_hp = 40\n").unwrap();

    let cli = CliConfig {
        seed: Some(3),
        map_path: Some(map_path),
        config_path: Some(config_path),
        ..CliConfig::default()
    };
    let mut session = Session::from_cli(&cli).unwrap();
    assert_eq!(session.state.player.hp, 40);
    assert_eq!(session.state.player.position, Position::new(0, 1));

    let (outcome, output) = play(&mut session, "w\n");
    assert_eq!(outcome, SessionOutcome::Victory);
    assert!(output.contains("w: Move north"));
}

#[test]
fn missing_layout_file_is_an_error() {
    let cli = CliConfig {
        map_path: Some("/definitely/not/here.ron".into()),
        ..CliConfig::default()
    };
    let error = Session::from_cli(&cli).err().unwrap();
    assert!(format!("{error:#}").contains("failed to load cave layout"));
}
