//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick. Velocities are expressed in
//! arena units per tick, so integration is a plain addition.

use hecs::World;

use skystrike_core::components::Particle;
use skystrike_core::constants::PARTICLE_LIFE_DECAY;
use skystrike_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0;
    }
}

/// Decay particle life. Expired particles are removed by cleanup.
pub fn fade_particles(world: &mut World) {
    for (_entity, particle) in world.query_mut::<&mut Particle>() {
        particle.life -= PARTICLE_LIFE_DECAY;
    }
}
