// Library root for the squad recommendation engine.
//
// Pure and synchronous: given a catalog snapshot and a budget it builds one
// squad per scoring strategy. No I/O happens in this crate.

pub mod builder;
pub mod catalog;
pub mod player;
pub mod scoring;
pub mod squad;

pub use builder::{build_all_squads, build_squad, SquadSet};
pub use catalog::InputError;
pub use player::{FixtureDifficulty, Player, Position};
pub use scoring::Strategy;
pub use squad::formation::{FormationUsed, Lineup};
pub use squad::rules::Formation;
pub use squad::{Squad, SquadSummary};
