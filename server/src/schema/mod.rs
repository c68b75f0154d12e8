mod body_table;
mod mover_table;
mod player_table;
mod world_settings_table;

pub use body_table::*;
pub use mover_table::*;
pub use player_table::*;
pub use world_settings_table::*;
