//! Room narration shown when the player enters a tile.

pub(crate) const STARTING_ROOM: &str = "\
You find yourself in a cave with a flickering torch on the wall.
You can make out four paths, each equally as dark and foreboding.";

pub(crate) const EMPTY_CAVE_PATH: &str =
    "Another unremarkable part of the cave. You must forge onwards.";

pub(crate) const LEAVE_CAVE: &str = "\
You see a light and walk closer to it... you must be nearing the exit!

You have escaped the cave!";

pub(crate) const DEATH_TRAP: &str = "You fall into a spiked pit! You have died.";

pub(crate) const FIND_DAGGER: &str = "\
You notice something shiny in the corner.
It's a dagger! You pick it up.";

pub(crate) const FIND_POTION: &str = "You find a red potion on the floor and pick it up.";

pub(crate) const WILD_DOG_ALIVE: &str = "A rabid wild dog lunges towards you!";
pub(crate) const WILD_DOG_DEAD: &str = "The corpse of a wild dog rots on the ground.";

pub(crate) const GIANT_LIZARD_ALIVE: &str = "\
Thsssss... a giant lizard crawls out from a crack in the cave wall \
and eyes you hungrily.";
pub(crate) const GIANT_LIZARD_DEAD: &str =
    "The corpse of a giant lizard lies rotting on the ground.";

pub(crate) const OGRE_ALIVE: &str = "RAAARGHH! A brutish ogre seeks your bones for dinner!";
pub(crate) const OGRE_DEAD: &str = "The dead ogre remains on the cave floor.";

pub(crate) const TRAP_SPIKED_PIT: &str = DEATH_TRAP;
pub(crate) const TRAP_TRIP_WIRE: &str =
    "You tripped a wire that shoots a bolt towards you. You suffer 5 damage.";
pub(crate) const TRAP_FLAME_JET: &str = "\
You step on a pressure plate and flames shoot from the wall at you. \
You suffer 10 damage.";
pub(crate) const TRAP_SNAKE_PIT: &str = "\
A bunch of venomous snakes bite at your heels. \
You are able to dispose of them with ease, but suffer 15 damage in the process.";
