use std::collections::{HashSet, VecDeque};
use std::io::Write;

use cave_content::{ConfigLoader, MapLoader};
use cave_core::{CardinalDirection, Position, RoomKind, World, WorldError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn layout_file_builds_a_world() {
    let file = write_temp(
        "#![enable(implicit_some)]\n\
         (rows: [\n\
             [None, LeaveCave],\n\
             [StartingRoom, Trap],\n\
         ])\n",
    );

    let rooms = MapLoader::load(file.path()).unwrap();
    let world = World::from_rooms(rooms, &mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!(world.room_count(), 3);
    assert_eq!(world.starting_position(), Position::new(0, 1));
    assert!(world.tile_exists(Position::new(1, 0)));
    assert!(!world.tile_exists(Position::new(0, 0)));
}

#[test]
fn layout_without_a_start_is_rejected_by_the_world() {
    let file = write_temp("#![enable(implicit_some)]\n(rows: [[EmptyCavePath, LeaveCave]])");
    let rooms = MapLoader::load(file.path()).unwrap();
    assert_eq!(
        World::from_rooms(rooms, &mut StdRng::seed_from_u64(0)),
        Err(WorldError::MissingStart)
    );
}

#[test]
fn missing_files_report_their_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowhere.ron");
    let error = MapLoader::load(&path).unwrap_err();
    assert!(error.to_string().contains("nowhere.ron"));
}

#[test]
fn config_file_overrides_defaults() {
    let file = write_temp("starting_hp = 50\npotion_heal = 10\n");
    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(config.starting_hp, 50);
    assert_eq!(config.potion_heal, 10);
    assert_eq!(config.max_hp, 100);
}

#[test]
fn bundled_config_matches_the_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/config.toml");
    assert_eq!(ConfigLoader::load(&path).unwrap(), cave_core::GameConfig::default());
}

#[test]
fn default_cave_is_connected_and_winnable() {
    let rooms = MapLoader::default_cave().unwrap();
    let world = World::from_rooms(rooms.clone(), &mut StdRng::seed_from_u64(0)).unwrap();

    let start = world.starting_position();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(position) = queue.pop_front() {
        for direction in CardinalDirection::iter() {
            let next = direction.step(position);
            if world.tile_exists(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    assert_eq!(seen.len(), rooms.len(), "every room is reachable from the start");
    let exit = rooms
        .iter()
        .find(|(_, room)| *room == RoomKind::LeaveCave)
        .map(|(position, _)| *position)
        .unwrap();
    assert!(seen.contains(&exit));
}
