//! Lockstep simulation facade.
//!
//! A `Simulation` owns the world, its movers and the joined players. Hosts feed
//! it actions between ticks and a deterministic clock value per tick; two
//! instances given the same level, actions and clock values stay bit-identical.

use log::{info, warn};

use crate::{
    body::World,
    collision::{CollisionEvent, Vec3},
    config::SimulationConfig,
    error::Result,
    level::LevelData,
    motion::Mover,
    movement::{begin_tick, substep},
    player::{Controls, Player, wrap_player_type},
    snapshot::{BodySnapshot, PlayerSnapshot, WorldSnapshot},
};

#[derive(Clone, Debug)]
pub struct Simulation {
    world: World,
    movers: Vec<Mover>,
    players: Vec<Player>,
    config: SimulationConfig,
    tick: u64,
    time_ms: u64,
}

impl Simulation {
    pub fn new(world: World, movers: Vec<Mover>, config: SimulationConfig) -> Self {
        Self {
            world,
            movers,
            players: Vec::new(),
            config,
            tick: 0,
            time_ms: 0,
        }
    }

    /// Decode a level blob and build a fresh simulation from it.
    pub fn from_level(blob: &str, config: SimulationConfig) -> Result<Self> {
        let level = LevelData::from_blob(blob)?;
        let (world, movers) = level.build(config.allowed_step_size);
        Ok(Self::new(world, movers, config))
    }

    /// Rebuild a simulation from persisted state.
    pub fn restore(
        world: World,
        movers: Vec<Mover>,
        players: Vec<Player>,
        config: SimulationConfig,
        tick: u64,
        time_ms: u64,
    ) -> Self {
        Self {
            world,
            movers,
            players,
            config,
            tick,
            time_ms,
        }
    }

    /// Add a player at the next spawn slot. Slots alternate left and right of
    /// the spawn point. Joining with an id that is already present returns the
    /// existing player untouched; a new id is refused once the session holds
    /// `max_players`.
    pub fn join(&mut self, id: impl Into<String>, player_type: i64) -> Option<&Player> {
        let id = id.into();
        if let Some(index) = self.players.iter().position(|p| p.id == id) {
            warn!("player {id} already joined");
            return self.players.get(index);
        }
        if self.players.len() >= self.config.max_players {
            warn!("player {id} refused: session full ({} players)", self.players.len());
            return None;
        }

        let slot = self.players.len() % 2;
        let side = if slot == 0 { -1.0 } else { 1.0 };
        let spawn = self.config.spawn_point + Vec3::new(side * self.config.spawn_spacing, 0.0, 0.0);
        let diameter = self.config.player_radius * 2.0;
        let body_id = self
            .world
            .create_cylinder(
                spawn,
                Vec3::new(diameter, self.config.player_height, diameter),
                self.config.spawn_yaw,
                true,
                false,
            )
            .id;

        info!("player {id} joined: body {body_id}, spawn slot {slot}");
        self.players.push(Player::new(id, body_id, wrap_player_type(player_type), spawn, self.config.spawn_yaw));
        self.players.last()
    }

    /// Replace a player's control intent. Returns `false` for unknown players.
    pub fn set_controls(&mut self, id: &str, controls: Controls) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.controls = controls.clamped();
                true
            }
            None => {
                warn!("set_controls for unknown player {id}");
                false
            }
        }
    }

    /// Run one full tick at game clock `time_ms`. Returns every contact of
    /// every sub-step, in order.
    pub fn tick(&mut self, time_ms: u64) -> Vec<CollisionEvent> {
        let steps = begin_tick(&mut self.world, &self.movers, time_ms, &self.config);
        let mut events = Vec::new();
        for _ in 0..self.config.substeps {
            events.extend(substep(&mut self.world, &steps, &mut self.players, &self.config));
        }
        self.tick += 1;
        self.time_ms = time_ms;
        events
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            time_ms: self.time_ms,
            bodies: self.world.bodies().iter().map(BodySnapshot::from).collect(),
            players: self
                .players
                .iter()
                .map(|p| {
                    let vy = self.world.body(p.body_id).map_or(0.0, |b| b.vertical_velocity);
                    PlayerSnapshot::new(p, vy)
                })
                .collect(),
        }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Ticks run so far.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}
