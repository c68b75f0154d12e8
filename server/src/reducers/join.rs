use crate::{schema::player, world};
use spacetimedb::ReducerContext;

/// Join the session as a new player.
///
/// Behavior:
/// - Rejects callers that already joined.
/// - Rejects new callers once the session is full.
/// - Spawns a player body at the next alternating spawn slot.
/// - `player_type` is wrapped into the cosmetic catalog, so any value is accepted.
#[spacetimedb::reducer]
pub fn join(ctx: &ReducerContext, player_type: i32) -> Result<(), String> {
    if ctx.db.player().identity().find(ctx.sender).is_some() {
        return Err("Player already joined".into());
    }

    let mut simulation = world::load_simulation(ctx)?;
    let Some(joined) = simulation.join(ctx.sender.to_string(), i64::from(player_type)).cloned() else {
        return Err("Session is full".into());
    };

    world::insert_player(ctx, ctx.sender, &joined);
    world::store_simulation(ctx, &simulation);

    log::info!("Player {:?} joined with body {}", ctx.sender, joined.body_id);
    Ok(())
}
