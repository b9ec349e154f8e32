//! Fighter archetypes and the attack table.
//!
//! Per-character differences are data: [`Archetype::tuning`] gives movement
//! and body numbers, and [`special_move_for`] gives the attack spec for a
//! move, with archetype-specific tweaks applied by variant.

use serde::{Deserialize, Serialize};

/// The two playable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Faster walker, longer lunge.
    Hero,
    /// Higher jump, wider body, harder anti-air.
    Rival,
}

/// Body box dimensions. `pad` is trimmed from both sides of the hurtbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
    /// Horizontal hurtbox inset.
    pub pad: f32,
}

/// Movement and presentation constants for an archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Display name.
    pub name: &'static str,
    /// Fallback render colour.
    pub color: &'static str,
    /// Horizontal acceleration per held frame.
    pub speed: f32,
    /// Vertical velocity applied on jump (negative is up).
    pub jump_velocity: f32,
    /// Body box.
    pub body: Body,
}

const HERO: Tuning = Tuning {
    name: "Hero",
    color: "#4ad",
    speed: 3.8,
    jump_velocity: -15.5,
    body: Body {
        w: 46.0,
        h: 84.0,
        pad: 6.0,
    },
};

const RIVAL: Tuning = Tuning {
    name: "Rival",
    color: "#d44",
    speed: 3.2,
    jump_velocity: -16.5,
    body: Body {
        w: 50.0,
        h: 88.0,
        pad: 8.0,
    },
};

impl Archetype {
    /// Movement and body constants.
    #[must_use]
    pub const fn tuning(self) -> &'static Tuning {
        match self {
            Self::Hero => &HERO,
            Self::Rival => &RIVAL,
        }
    }
}

/// Every move a fighter can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    /// Quick jab.
    Light,
    /// Slower, stronger strike.
    Heavy,
    /// Forward dash strike.
    Lunge,
    /// Rising strike.
    AntiAir,
    /// Thrown projectile, no melee hitbox.
    Projectile,
    /// Cross-plane dash strike.
    Homing,
}

/// Hitbox geometry and payload, relative to the fighter's anchor.
///
/// `dx` is measured toward the facing side; `dy` places the hitbox's
/// vertical centre relative to the body centre (negative is up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitSpec {
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
    /// Horizontal offset of the centre, toward the facing side.
    pub dx: f32,
    /// Vertical offset of the centre from the body centre.
    pub dy: f32,
    /// Health removed.
    pub damage: u32,
    /// Action-lock frames inflicted.
    pub stun: u32,
    /// Horizontal push.
    pub knockback: u32,
    /// Priority tier. Carried, never compared.
    pub priority: u8,
}

/// Velocity change applied when a move starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impulse {
    /// No change.
    None,
    /// `vx += facing * v`.
    AddForward(f32),
    /// `vx = facing * v`.
    SetForward(f32),
    /// `vy = v`.
    SetVertical(f32),
}

/// Everything needed to start a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackSpec {
    /// Which move.
    pub kind: AttackKind,
    /// Active frames.
    pub frames: u32,
    /// Melee hitbox; `None` for the projectile throw.
    pub hit: Option<HitSpec>,
    /// Forced animation rate while the attack pose plays.
    pub anim_fps: f32,
    /// Velocity change on start.
    pub impulse: Impulse,
    /// Announcement banner, if any.
    pub banner: Option<&'static str>,
    /// Whether starting the move throws a projectile.
    pub spawns_projectile: bool,
}

#[allow(clippy::too_many_arguments)]
const fn hit(
    w: f32,
    h: f32,
    dx: f32,
    dy: f32,
    damage: u32,
    stun: u32,
    knockback: u32,
    priority: u8,
) -> HitSpec {
    HitSpec {
        w,
        h,
        dx,
        dy,
        damage,
        stun,
        knockback,
        priority,
    }
}

fn base_spec(kind: AttackKind) -> AttackSpec {
    let plain = |frames: u32, hit: HitSpec, anim_fps: f32| AttackSpec {
        kind,
        frames,
        hit: Some(hit),
        anim_fps,
        impulse: Impulse::None,
        banner: None,
        spawns_projectile: false,
    };
    match kind {
        AttackKind::Light => plain(14, hit(30.0, 16.0, 36.0, -50.0, 6, 8, 6, 1), 12.0),
        AttackKind::Heavy => plain(20, hit(36.0, 22.0, 42.0, -48.0, 12, 12, 10, 2), 16.0),
        AttackKind::Lunge => AttackSpec {
            impulse: Impulse::AddForward(7.0),
            banner: Some("RUSH"),
            ..plain(22, hit(28.0, 22.0, 52.0, -46.0, 9, 12, 12, 2), 18.0)
        },
        AttackKind::AntiAir => AttackSpec {
            impulse: Impulse::SetVertical(-16.0),
            banner: Some("RISE"),
            ..plain(18, hit(26.0, 32.0, 20.0, -70.0, 11, 14, 8, 3), 14.0)
        },
        AttackKind::Projectile => AttackSpec {
            kind,
            frames: 12,
            hit: None,
            anim_fps: 10.0,
            impulse: Impulse::None,
            banner: Some("SPECIAL"),
            spawns_projectile: true,
        },
        AttackKind::Homing => AttackSpec {
            impulse: Impulse::SetForward(8.0),
            banner: Some("HOMING"),
            ..plain(16, hit(24.0, 18.0, 34.0, -52.0, 7, 8, 6, 2), 14.0)
        },
    }
}

/// What an archetype adds whenever it fires a special, on top of the move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialBonus {
    /// Nothing extra.
    None,
    /// `vx += facing * v`.
    ForwardVelocity(f32),
    /// Extra damage on the active hitbox.
    HitDamage(u32),
}

/// The bonus `archetype` gets when firing `kind`.
///
/// The bonus applies even when the special itself cannot start, in which
/// case it lands on whatever move is already active.
#[must_use]
pub const fn special_bonus(archetype: Archetype, kind: AttackKind) -> SpecialBonus {
    match (archetype, kind) {
        (Archetype::Hero, AttackKind::Lunge) => SpecialBonus::ForwardVelocity(1.0),
        (Archetype::Rival, AttackKind::AntiAir) => SpecialBonus::HitDamage(2),
        _ => SpecialBonus::None,
    }
}

/// The attack spec `archetype` uses for `kind`, with its
/// [`special_bonus`] folded in.
#[must_use]
pub fn special_move_for(archetype: Archetype, kind: AttackKind) -> AttackSpec {
    let mut spec = base_spec(kind);
    match special_bonus(archetype, kind) {
        SpecialBonus::None => {}
        SpecialBonus::ForwardVelocity(v) => {
            if let Impulse::AddForward(base) = spec.impulse {
                spec.impulse = Impulse::AddForward(base + v);
            }
        }
        SpecialBonus::HitDamage(extra) => {
            if let Some(hit) = spec.hit.as_mut() {
                hit.damage += extra;
            }
        }
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_attack_matches_table() {
        let spec = special_move_for(Archetype::Hero, AttackKind::Light);
        assert_eq!(spec.frames, 14);
        let hit = spec.hit.unwrap();
        assert_eq!((hit.damage, hit.stun, hit.knockback, hit.priority), (6, 8, 6, 1));
        assert!(spec.banner.is_none());
    }

    #[test]
    fn projectile_has_no_hitbox() {
        let spec = special_move_for(Archetype::Rival, AttackKind::Projectile);
        assert!(spec.hit.is_none());
        assert!(spec.spawns_projectile);
        assert_eq!(spec.banner, Some("SPECIAL"));
    }

    #[test]
    fn hero_lunge_dashes_further() {
        let hero = special_move_for(Archetype::Hero, AttackKind::Lunge);
        let rival = special_move_for(Archetype::Rival, AttackKind::Lunge);
        assert_eq!(hero.impulse, Impulse::AddForward(8.0));
        assert_eq!(rival.impulse, Impulse::AddForward(7.0));
        assert_eq!(hero.hit, rival.hit);
    }

    #[test]
    fn rival_anti_air_hits_harder() {
        let hero = special_move_for(Archetype::Hero, AttackKind::AntiAir);
        let rival = special_move_for(Archetype::Rival, AttackKind::AntiAir);
        assert_eq!(hero.hit.unwrap().damage, 11);
        assert_eq!(rival.hit.unwrap().damage, 13);
        assert_eq!(rival.impulse, Impulse::SetVertical(-16.0));
    }

    #[test]
    fn bonuses_only_on_signature_specials() {
        assert_eq!(
            special_bonus(Archetype::Hero, AttackKind::Lunge),
            SpecialBonus::ForwardVelocity(1.0)
        );
        assert_eq!(
            special_bonus(Archetype::Rival, AttackKind::AntiAir),
            SpecialBonus::HitDamage(2)
        );
        assert_eq!(special_bonus(Archetype::Hero, AttackKind::AntiAir), SpecialBonus::None);
        assert_eq!(special_bonus(Archetype::Rival, AttackKind::Lunge), SpecialBonus::None);
        assert_eq!(special_bonus(Archetype::Rival, AttackKind::Heavy), SpecialBonus::None);
    }

    #[test]
    fn tunings_differ_by_archetype() {
        let hero = Archetype::Hero.tuning();
        let rival = Archetype::Rival.tuning();
        assert!(hero.speed > rival.speed);
        assert!(rival.jump_velocity < hero.jump_velocity);
        assert!((rival.body.pad - 8.0).abs() < f32::EPSILON);
    }
}
