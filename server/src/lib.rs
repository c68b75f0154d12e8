mod reducers {
    pub mod join;
    pub mod set_controls;
    pub(crate) mod tick;
}
pub mod schema;
pub mod types;
mod world;

use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) -> Result<(), String> {
    world::create_world(ctx)?;
    reducers::tick::init(ctx);
    Ok(())
}
