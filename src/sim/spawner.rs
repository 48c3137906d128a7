//! Enemy spawn cadence and difficulty escalation

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::world::World;
use crate::tuning::Tuning;

/// World edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub spawn_timer: u32,
    /// Ticks between spawns, never below `min_delay`
    pub spawn_delay: u32,
    pub difficulty_timer: u32,
    pub difficulty_level: u32,
    min_delay: u32,
    ratio: f32,
    interval: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_timer: 0,
            spawn_delay: tuning.initial_spawn_delay.max(tuning.min_spawn_delay),
            difficulty_timer: 0,
            difficulty_level: 1,
            min_delay: tuning.min_spawn_delay.max(1),
            ratio: tuning.spawn_delay_ratio,
            interval: tuning.difficulty_interval.max(1),
        }
    }

    /// Bump difficulty one level and shrink the spawn delay toward the floor
    pub fn raise_difficulty(&mut self) {
        self.difficulty_level += 1;
        let shrunk = (self.spawn_delay as f32 * self.ratio) as u32;
        self.spawn_delay = shrunk.max(self.min_delay);
        log::info!(
            "Difficulty {} (spawn delay {} ticks)",
            self.difficulty_level,
            self.spawn_delay
        );
    }

    /// Advance both timers one tick. Returns a new enemy when the spawn timer elapses.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        world: &World,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Enemy> {
        self.difficulty_timer += 1;
        if self.difficulty_timer >= self.interval {
            self.difficulty_timer = 0;
            self.raise_difficulty();
        }

        self.spawn_timer += 1;
        if self.spawn_timer < self.spawn_delay {
            return None;
        }
        self.spawn_timer = 0;

        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let pos = spawn_position(edge, world, tuning.enemy_size, rng);
        log::debug!("Spawning enemy at {:?} edge ({:.0}, {:.0})", edge, pos.x, pos.y);
        Some(Enemy::new(pos, tuning, rng))
    }
}

/// Top-left corner just outside `edge`, uniformly placed along it
fn spawn_position<R: Rng + ?Sized>(edge: Edge, world: &World, size: f32, rng: &mut R) -> Vec2 {
    match edge {
        Edge::Top => Vec2::new(rng.random_range(0.0..world.width()), -size),
        Edge::Right => Vec2::new(world.width(), rng.random_range(0.0..world.height())),
        Edge::Bottom => Vec2::new(rng.random_range(0.0..world.width()), world.height()),
        Edge::Left => Vec2::new(-size, rng.random_range(0.0..world.height())),
    }
}
