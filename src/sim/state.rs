//! Session state and the phase machine
//!
//! The session owns every entity. Nothing here outlives a reset.

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::enemy::Enemy;
use super::pickup::{Pickup, PickupKind};
use super::player::Player;
use super::projectile::{Owner, Projectile};
use super::spawner::Spawner;
use super::world::World;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player is dead, waiting for the death audio to finish and a restart
    GameOver,
}

/// Discrete notifications for the audio and rendering collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { owner: Owner },
    EnemySpawned,
    PlayerHit { health: u32 },
    PlayerDied,
    EnemyKilled { kills: u32 },
    PickupCollected { kind: PickupKind },
    DifficultyRaised { level: u32 },
    SprintStarted,
    /// Death announcement finished, play the game-over jingle now
    DeathJingle,
    Restarted,
}

/// Two-flag gate that holds restart until the death audio has played out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathSequence {
    /// Jingle has been triggered
    pub announced: bool,
    /// Jingle has finished playing
    pub jingle_finished: bool,
}

impl DeathSequence {
    pub fn arm(&mut self) {
        *self = Self::default();
    }

    /// Advance with the current audio status. Returns true when the jingle
    /// should be triggered this tick.
    pub fn advance(&mut self, audio_busy: bool) -> bool {
        if audio_busy {
            return false;
        }
        if !self.announced {
            self.announced = true;
            true
        } else {
            self.jingle_finished = true;
            false
        }
    }

    pub fn restart_allowed(&self) -> bool {
        self.announced && self.jingle_finished
    }
}

/// Complete session state (deterministic given seed and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub world: World,
    pub camera: Camera,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Player-fired projectiles
    pub projectiles: Vec<Projectile>,
    /// Enemy-fired projectiles
    pub enemy_spits: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    pub spawner: Spawner,
    pub score: u64,
    pub kills: u32,
    pub phase: GamePhase,
    pub death: DeathSequence,
    /// Simulation tick counter (since last reset)
    pub time_ticks: u64,
    /// Events raised during the most recent tick
    pub events: Vec<GameEvent>,
    /// Fire key state last tick, for edge-triggered shooting
    pub(crate) fire_held: bool,
}

impl GameState {
    /// Fresh session. Rejects tuning the simulation cannot run with.
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::from_valid(tuning))
    }

    /// Build from tuning that has already passed `Tuning::validate`
    fn from_valid(tuning: Tuning) -> Self {
        let world = World::new(tuning.world_width, tuning.world_height);
        let player = Player::new(world.center(), &tuning);
        let mut camera = Camera::new(tuning.view_width, tuning.view_height);
        camera.follow(player.center(), &world);
        let spawner = Spawner::new(&tuning);

        Self {
            tuning,
            world,
            camera,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            enemy_spits: Vec::new(),
            pickups: Vec::new(),
            spawner,
            score: 0,
            kills: 0,
            phase: GamePhase::Playing,
            death: DeathSequence::default(),
            time_ticks: 0,
            events: Vec::new(),
            fire_held: false,
        }
    }

    /// Restore every counter, timer, and collection to its initial value
    pub fn reset(&mut self) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::from_valid(tuning);
    }

    pub fn difficulty_level(&self) -> u32 {
        self.spawner.difficulty_level
    }

    pub fn spawn_delay(&self) -> u32 {
        self.spawner.spawn_delay
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Switch to GameOver and arm the death audio gate
    pub(crate) fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.death.arm();
        self.events.push(GameEvent::PlayerDied);
        log::info!(
            "Game over: score {}, kills {}, difficulty {}",
            self.score,
            self.kills,
            self.difficulty_level()
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_valid(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_session() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.center(), state.world.center());
        assert_eq!(state.player.health, state.tuning.max_health);
        assert_eq!(state.difficulty_level(), 1);
        assert_eq!(state.spawn_delay(), state.tuning.initial_spawn_delay);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let tuning = state.tuning.clone();

        // Dirty everything
        state.score = 1234;
        state.kills = 77;
        state.time_ticks = 5000;
        state.spawner.raise_difficulty();
        state.spawner.raise_difficulty();
        state.spawner.spawn_timer = 13;
        state.player.rect.x = 10.0;
        state.player.take_damage(tuning.max_health);
        state
            .enemies
            .push(Enemy::new(Vec2::ZERO, &tuning, &mut rng));
        state.pickups.push(Pickup::new(PickupKind::Coin, Vec2::ZERO, &tuning));
        state.enter_game_over();
        state.death.advance(false);

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.kills, 0);
        assert_eq!(state.difficulty_level(), 1);
        assert_eq!(state.spawn_delay(), tuning.initial_spawn_delay);
        assert_eq!(state.spawner.spawn_timer, 0);
        assert_eq!(state.spawner.difficulty_timer, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(state.enemy_spits.is_empty());
        assert!(state.pickups.is_empty());
        assert_eq!(state.player.center(), state.world.center());
        assert_eq!(state.player.health, tuning.max_health);
        assert!(state.player.alive);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.death, DeathSequence::default());
        assert_eq!(state.tuning, tuning);
    }

    #[test]
    fn test_new_rejects_invalid_tuning() {
        let tuning = Tuning {
            potion_every: 0,
            ..Tuning::default()
        };
        assert!(matches!(
            GameState::new(tuning),
            Err(TuningError::Invalid {
                field: "potion_every",
                ..
            })
        ));

        let tuning = Tuning {
            shoot_delay_min: 120,
            shoot_delay_max: 120,
            ..Tuning::default()
        };
        assert!(GameState::new(tuning).is_err());

        let tuning = Tuning {
            enemy_speed: -1.0,
            ..Tuning::default()
        };
        assert!(GameState::new(tuning).is_err());
    }

    #[test]
    fn test_new_accepts_valid_tuning() {
        let tuning = Tuning {
            potion_every: 3,
            ..Tuning::default()
        };
        let state = GameState::new(tuning).unwrap();
        assert_eq!(state.tuning.potion_every, 3);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_death_sequence_waits_for_idle_audio() {
        let mut seq = DeathSequence::default();
        seq.arm();
        assert!(!seq.advance(true));
        assert!(!seq.announced);
        assert!(seq.advance(false));
        assert!(seq.announced && !seq.restart_allowed());
        // Jingle playing
        assert!(!seq.advance(true));
        assert!(!seq.restart_allowed());
        assert!(!seq.advance(false));
        assert!(seq.restart_allowed());
    }
}
