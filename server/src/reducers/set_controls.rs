use crate::schema::{player, Player};
use jumpdudes_shared::Controls;
use spacetimedb::ReducerContext;

/// Replace the caller's control intent. Takes effect on the next tick.
///
/// `turn` and `forward` are clamped to `[-1, 1]`; `jump` is held until cleared.
#[spacetimedb::reducer]
pub fn set_controls(ctx: &ReducerContext, turn: f32, forward: f32, jump: bool) -> Result<(), String> {
    let Some(row) = ctx.db.player().identity().find(ctx.sender) else {
        return Err("No player found! Call `join` first.".into());
    };

    let controls = Controls::new(turn, forward, jump);
    ctx.db.player().identity().update(Player {
        turn: controls.turn,
        forward: controls.forward,
        jump: controls.jump,
        ..row
    });
    Ok(())
}
