//! Fixed-step simulation tick
//!
//! One call advances the session by exactly one frame. Stage order is fixed:
//! scheduler, player, enemies, projectiles, pickups, collisions, camera.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::direction::Direction;
use super::projectile::{Owner, Projectile};
use super::state::{GameEvent, GameState};

/// Logical input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub sprint: bool,
    pub restart: bool,
}

/// Non-blocking view of the audio collaborator
pub trait AudioStatus {
    /// True while any sound is still playing
    fn is_busy(&self) -> bool;
}

/// Audio that is never busy (tests, muted runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioStatus for SilentAudio {
    fn is_busy(&self) -> bool {
        false
    }
}

/// Advance the session by one tick
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    audio: &dyn AudioStatus,
    rng: &mut R,
) {
    state.events.clear();

    if state.is_game_over() {
        tick_game_over(state, input, audio);
        state.fire_held = input.fire;
        return;
    }

    state.time_ticks += 1;

    // Scheduler
    let level = state.spawner.difficulty_level;
    if let Some(enemy) = state.spawner.update(&state.world, &state.tuning, rng) {
        state.enemies.push(enemy);
        state.events.push(GameEvent::EnemySpawned);
    }
    if state.spawner.difficulty_level != level {
        state.events.push(GameEvent::DifficultyRaised {
            level: state.spawner.difficulty_level,
        });
    }

    // Player
    let bounds = state.world.bounds();
    if state.player.update(input, &bounds).sprint_started {
        state.events.push(GameEvent::SprintStarted);
    }
    let fire_pressed = input.fire && !state.fire_held;
    state.fire_held = input.fire;
    if fire_pressed && state.player.alive {
        let shot = Projectile::spawn(
            Owner::Player,
            state.player.center(),
            state.player.facing,
            &state.tuning,
        );
        state.projectiles.push(shot);
        state.events.push(GameEvent::ProjectileFired {
            owner: Owner::Player,
        });
    }

    // Enemies: pursue, then spit only while on screen
    let target = state.player.center();
    for enemy in &mut state.enemies {
        enemy.update(target);
        if enemy.can_shoot() && state.camera.is_visible(&enemy.rect) {
            let aim = Direction::from_vector(target - enemy.center()).unwrap_or(enemy.facing);
            let spit = Projectile::spawn(Owner::Enemy, enemy.center(), aim, &state.tuning);
            state.enemy_spits.push(spit);
            state.events.push(GameEvent::ProjectileFired {
                owner: Owner::Enemy,
            });
        }
    }

    // Projectiles
    for projectile in state.projectiles.iter_mut().chain(state.enemy_spits.iter_mut()) {
        projectile.update();
    }
    state.projectiles.retain(|p| !p.is_expired(&bounds));
    state.enemy_spits.retain(|p| !p.is_expired(&bounds));

    // Pickups
    for pickup in &mut state.pickups {
        pickup.update();
    }

    resolve_collisions(state);

    state.camera.follow(state.player.center(), &state.world);

    log::trace!(
        "tick {}: enemies={} shots={} spits={} pickups={}",
        state.time_ticks,
        state.enemies.len(),
        state.projectiles.len(),
        state.enemy_spits.len(),
        state.pickups.len()
    );
}

/// GameOver: drive the death audio gate and accept restart once it has played
fn tick_game_over(state: &mut GameState, input: &TickInput, audio: &dyn AudioStatus) {
    if state.death.advance(audio.is_busy()) {
        state.events.push(GameEvent::DeathJingle);
    }

    if input.restart && state.death.restart_allowed() {
        state.reset();
        state.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }
}
