//! The player character: movement, sprint, animation, health

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::ANIM_FRAMES;
use crate::tuning::Tuning;

/// Sprint gate: available -> active -> cooling down -> available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SprintState {
    Available,
    Active { remaining: u32 },
    Cooldown { remaining: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub state: SprintState,
    multiplier: f32,
    duration: u32,
    cooldown: u32,
}

impl Sprint {
    pub fn new(multiplier: f32, duration: u32, cooldown: u32) -> Self {
        Self {
            state: SprintState::Available,
            multiplier,
            duration,
            cooldown,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SprintState::Active { .. })
    }

    pub fn is_available(&self) -> bool {
        self.state == SprintState::Available
    }

    /// Start sprinting if available. Returns true on activation.
    fn try_activate(&mut self) -> bool {
        if self.is_available() && self.duration > 0 {
            self.state = SprintState::Active {
                remaining: self.duration,
            };
            true
        } else {
            false
        }
    }

    /// Speed multiplier for the current tick
    fn multiplier(&self) -> f32 {
        if self.is_active() { self.multiplier } else { 1.0 }
    }

    /// Advance one tick
    fn advance(&mut self) {
        self.state = match self.state {
            SprintState::Available => SprintState::Available,
            SprintState::Active { remaining } if remaining > 1 => SprintState::Active {
                remaining: remaining - 1,
            },
            SprintState::Active { .. } if self.cooldown > 0 => SprintState::Cooldown {
                remaining: self.cooldown,
            },
            SprintState::Active { .. } => SprintState::Available,
            SprintState::Cooldown { remaining } if remaining > 1 => SprintState::Cooldown {
                remaining: remaining - 1,
            },
            SprintState::Cooldown { .. } => SprintState::Available,
        };
    }
}

/// What one tick of input did to the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStep {
    /// Any movement key was applied
    pub moved: bool,
    /// Sprint went from available to active this tick
    pub sprint_started: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub health: u32,
    pub max_health: u32,
    pub alive: bool,
    pub speed: f32,
    pub sprint: Sprint,
    /// Animation frame counter, counts down while moving
    pub frame: f32,
    pub facing: Direction,
    hitbox_inset: f32,
    anim_rate: f32,
    anim_max: f32,
}

impl Player {
    /// Fresh player centered on `center`
    pub fn new(center: Vec2, tuning: &Tuning) -> Self {
        Self {
            rect: Rect::from_center(center, tuning.player_size, tuning.player_size),
            health: tuning.max_health,
            max_health: tuning.max_health,
            alive: true,
            speed: tuning.player_speed,
            sprint: Sprint::new(
                tuning.sprint_multiplier,
                tuning.sprint_duration,
                tuning.sprint_cooldown,
            ),
            frame: tuning.player_anim_max,
            facing: Direction::Down,
            hitbox_inset: tuning.player_hitbox_inset,
            anim_rate: tuning.player_anim_rate,
            anim_max: tuning.player_anim_max,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Collision rectangle, smaller than the sprite
    pub fn hitbox(&self) -> Rect {
        self.rect.inset(self.hitbox_inset)
    }

    /// Apply one tick of input.
    ///
    /// Each held key moves a full `speed` on its axis; diagonals are not
    /// normalized. Opposite keys cancel out. The result is clamped to `bounds`.
    pub fn update(&mut self, input: &TickInput, bounds: &Rect) -> PlayerStep {
        if !self.alive {
            return PlayerStep::default();
        }

        let any_move = input.left || input.right || input.up || input.down;
        let sprint_started = any_move && input.sprint && self.sprint.try_activate();
        if sprint_started {
            log::trace!("Sprint started");
        }
        let speed = self.speed * self.sprint.multiplier();

        let mut moved = false;
        if input.left {
            self.rect.x -= speed;
            moved = true;
        }
        if input.right {
            self.rect.x += speed;
            moved = true;
        }
        if input.up {
            self.rect.y -= speed;
            moved = true;
        }
        if input.down {
            self.rect.y += speed;
            moved = true;
        }

        if let Some(facing) = Self::facing_for(input) {
            self.facing = facing;
        }
        self.rect.clamp_within(bounds);

        if moved {
            self.frame -= self.anim_rate;
            if self.frame <= 0.0 {
                self.frame = self.anim_max;
            }
        }

        self.sprint.advance();
        PlayerStep {
            moved,
            sprint_started,
        }
    }

    /// Facing from held keys: diagonals first, then left, right, up, down
    fn facing_for(input: &TickInput) -> Option<Direction> {
        if input.up && input.left {
            Some(Direction::UpLeft)
        } else if input.up && input.right {
            Some(Direction::UpRight)
        } else if input.down && input.left {
            Some(Direction::DownLeft)
        } else if input.down && input.right {
            Some(Direction::DownRight)
        } else if input.left {
            Some(Direction::Left)
        } else if input.right {
            Some(Direction::Right)
        } else if input.up {
            Some(Direction::Up)
        } else if input.down {
            Some(Direction::Down)
        } else {
            None
        }
    }

    /// Subtract health. Returns true only on the alive -> dead transition.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
            log::info!("Player died");
            return true;
        }
        false
    }

    /// Restore health up to the maximum. No effect once dead.
    pub fn heal(&mut self, amount: u32) {
        if self.alive {
            self.health = self.health.saturating_add(amount).min(self.max_health);
        }
    }

    /// Sprite sheet (row, column) for the current facing and frame
    pub fn sprite_cell(&self) -> (usize, usize) {
        (self.facing.sprite_row(), self.frame as usize % ANIM_FRAMES)
    }
}
