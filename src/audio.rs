//! Headless audio collaborator
//!
//! Maps simulation events to sound effects and tracks how long each one
//! plays, so the core can poll whether audio is still busy. Actual playback
//! belongs to the platform layer; this only keeps time.

use crate::sim::{AudioStatus, GameEvent, Owner, PickupKind};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player throws a projectile
    Shoot,
    /// Enemy spits
    Spit,
    /// Player takes a hit
    PlayerHit,
    /// Enemy destroyed
    EnemyDeath,
    /// Coin collected
    Coin,
    /// Potion collected
    Potion,
    /// Difficulty went up
    LevelUp,
    /// Player death announcement
    PlayerDeath,
    /// Game over jingle, played after the announcement
    GameOverJingle,
}

/// Mixer channel a sound plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Effects,
    Voice,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ProjectileFired {
                owner: Owner::Player,
            } => Some(SoundEffect::Shoot),
            GameEvent::ProjectileFired { owner: Owner::Enemy } => Some(SoundEffect::Spit),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::PlayerHit),
            GameEvent::EnemyKilled { .. } => Some(SoundEffect::EnemyDeath),
            GameEvent::PickupCollected {
                kind: PickupKind::Coin,
            } => Some(SoundEffect::Coin),
            GameEvent::PickupCollected {
                kind: PickupKind::Potion,
            } => Some(SoundEffect::Potion),
            GameEvent::DifficultyRaised { .. } => Some(SoundEffect::LevelUp),
            GameEvent::PlayerDied => Some(SoundEffect::PlayerDeath),
            GameEvent::DeathJingle => Some(SoundEffect::GameOverJingle),
            GameEvent::EnemySpawned | GameEvent::SprintStarted | GameEvent::Restarted => None,
        }
    }

    /// Playback length in ticks
    pub fn duration_ticks(self) -> u32 {
        match self {
            SoundEffect::Shoot | SoundEffect::Spit => 12,
            SoundEffect::PlayerHit => 15,
            SoundEffect::EnemyDeath => 24,
            SoundEffect::Coin => 10,
            SoundEffect::Potion => 20,
            SoundEffect::LevelUp => 45,
            SoundEffect::PlayerDeath => 90,
            SoundEffect::GameOverJingle => 150,
        }
    }

    pub fn channel(self) -> Channel {
        match self {
            SoundEffect::PlayerDeath | SoundEffect::GameOverJingle => Channel::Voice,
            _ => Channel::Effects,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Playing {
    effect: SoundEffect,
    remaining: u32,
}

/// Audio manager for the game
#[derive(Debug, Default)]
pub struct AudioManager {
    playing: Vec<Playing>,
    muted: bool,
}

impl AudioManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute all audio. Muting stops everything currently playing.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.playing.clear();
        }
    }

    /// Play a sound effect. Voice sounds replace whatever is on the voice channel.
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        if effect.channel() == Channel::Voice {
            self.playing.retain(|p| p.effect.channel() != Channel::Voice);
        }
        log::trace!("Playing {:?}", effect);
        self.playing.push(Playing {
            effect,
            remaining: effect.duration_ticks(),
        });
    }

    /// Play the sounds for a tick's events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Advance playback by one tick
    pub fn advance(&mut self) {
        for sound in &mut self.playing {
            sound.remaining = sound.remaining.saturating_sub(1);
        }
        self.playing.retain(|p| p.remaining > 0);
    }

    pub fn is_playing(&self, effect: SoundEffect) -> bool {
        self.playing.iter().any(|p| p.effect == effect)
    }
}

impl AudioStatus for AudioManager {
    fn is_busy(&self) -> bool {
        !self.playing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::EnemyKilled { kills: 3 }),
            Some(SoundEffect::EnemyDeath)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::ProjectileFired { owner: Owner::Enemy }),
            Some(SoundEffect::Spit)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::EnemySpawned), None);
    }

    #[test]
    fn test_busy_until_sound_finishes() {
        let mut audio = AudioManager::new();
        assert!(!audio.is_busy());
        audio.play(SoundEffect::Coin);
        for _ in 0..SoundEffect::Coin.duration_ticks() - 1 {
            audio.advance();
            assert!(audio.is_busy());
        }
        audio.advance();
        assert!(!audio.is_busy());
    }

    #[test]
    fn test_voice_channel_replaces() {
        let mut audio = AudioManager::new();
        audio.play(SoundEffect::PlayerDeath);
        audio.play(SoundEffect::GameOverJingle);
        assert!(!audio.is_playing(SoundEffect::PlayerDeath));
        assert!(audio.is_playing(SoundEffect::GameOverJingle));
    }

    #[test]
    fn test_muted_is_never_busy() {
        let mut audio = AudioManager::new();
        audio.set_muted(true);
        audio.handle_events(&[GameEvent::PlayerDied]);
        assert!(!audio.is_busy());
    }

    #[test]
    fn test_restart_waits_for_death_audio() {
        use crate::sim::{GamePhase, GameState, TickInput, tick};
        use rand::SeedableRng;
        use rand_pcg::Pcg32;

        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut audio = AudioManager::new();
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };

        let damage = state.player.max_health;
        state.player.take_damage(damage);
        state.enter_game_over();
        audio.handle_events(&state.events);
        assert!(audio.is_playing(SoundEffect::PlayerDeath));

        let mut ticks = 0;
        while state.phase == GamePhase::GameOver {
            tick(&mut state, &restart, &audio, &mut rng);
            audio.handle_events(&state.events);
            audio.advance();
            ticks += 1;
            assert!(ticks < 1000);
        }

        let expected = SoundEffect::PlayerDeath.duration_ticks()
            + SoundEffect::GameOverJingle.duration_ticks();
        assert!(ticks > expected);
        assert!(state.player.alive);
    }
}
