//! Collision and interaction resolution
//!
//! Runs once per tick after every entity has moved. Passes are ordered:
//! spits hit the player, the death check runs, the player collects pickups,
//! then player projectiles hit enemies. Each pass marks what to remove during
//! a read-only scan and removes it afterwards, so every test in a pass sees
//! the lists as they were when the pass began.

use super::pickup::{Pickup, PickupKind};
use super::state::{GameEvent, GameState};

/// Drop the items whose mark is set
fn remove_marked<T>(items: &mut Vec<T>, marked: &[bool]) {
    debug_assert_eq!(items.len(), marked.len());
    let mut marks = marked.iter();
    items.retain(|_| !marks.next().copied().unwrap_or(false));
}

/// Resolve every interaction for this tick
pub fn resolve_collisions(state: &mut GameState) {
    let was_alive = state.player.alive;

    spits_hit_player(state);

    if was_alive && !state.player.alive {
        state.enter_game_over();
    }

    if state.player.alive {
        collect_pickups(state);
    }

    projectiles_hit_enemies(state);
}

/// Every overlapping spit deals damage and is consumed; no per-tick cap
fn spits_hit_player(state: &mut GameState) {
    let hitbox = state.player.hitbox();
    let hits: Vec<bool> = state
        .enemy_spits
        .iter()
        .map(|spit| spit.rect.overlaps(&hitbox))
        .collect();

    for _ in hits.iter().filter(|&&hit| hit) {
        state.player.take_damage(state.tuning.spit_damage);
        state.events.push(GameEvent::PlayerHit {
            health: state.player.health,
        });
    }

    remove_marked(&mut state.enemy_spits, &hits);
}

fn collect_pickups(state: &mut GameState) {
    let hitbox = state.player.hitbox();
    let mut taken = vec![false; state.pickups.len()];

    for (i, pickup) in state.pickups.iter_mut().enumerate() {
        if !pickup.collected && pickup.rect.overlaps(&hitbox) {
            pickup.collected = true;
            taken[i] = true;
        }
    }

    for pickup in state.pickups.iter().filter(|p| p.collected) {
        match pickup.kind {
            PickupKind::Coin => state.score += u64::from(pickup.value),
            PickupKind::Potion => state.player.heal(pickup.value),
        }
        state.events.push(GameEvent::PickupCollected { kind: pickup.kind });
    }

    remove_marked(&mut state.pickups, &taken);
}

/// A projectile is consumed by the first enemy it overlaps. An enemy dies,
/// scores, and drops once no matter how many projectiles hit it.
fn projectiles_hit_enemies(state: &mut GameState) {
    let mut spent = vec![false; state.projectiles.len()];
    let mut killed = vec![false; state.enemies.len()];
    let mut drops = Vec::new();

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        let Some(ei) = state
            .enemies
            .iter()
            .position(|enemy| projectile.rect.overlaps(&enemy.hitbox()))
        else {
            continue;
        };

        spent[pi] = true;
        if killed[ei] {
            continue;
        }
        killed[ei] = true;

        state.kills += 1;
        state.score += state.tuning.kill_score;
        let kind = if state.kills % state.tuning.potion_every == 0 {
            PickupKind::Potion
        } else {
            PickupKind::Coin
        };
        drops.push(Pickup::new(kind, state.enemies[ei].center(), &state.tuning));
        state.events.push(GameEvent::EnemyKilled { kills: state.kills });
        log::debug!("Enemy killed (#{}), dropped {:?}", state.kills, kind);
    }

    remove_marked(&mut state.projectiles, &spent);
    remove_marked(&mut state.enemies, &killed);
    state.pickups.extend(drops);
}
