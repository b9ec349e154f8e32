//! Draw-list construction.
//!
//! The core never draws. [`build_draw_list`] turns a [`Match`] into an
//! ordered list of [`DrawCommand`]s that a canvas, terminal or test harness
//! can replay. Whether a character's sprite sheet has loaded is asked through
//! the [`SheetProvider`] seam; without a sheet the fighter falls back to a
//! flat body rectangle with an eye dot and a visible hitbox.
//!
//! Command order is stage, projectiles, then fighters sorted by plane and
//! then by y, so the back plane is painted over the front.

use serde::Serialize;

use crate::config::ArenaConfig;
use crate::fighter::{Archetype, Facing, Fighter, STANDARD_ATLAS};
use crate::geometry::Rect;
use crate::simulation::Match;

/// Colour of projectiles and fallback hitboxes.
pub const HIGHLIGHT: &str = "#f5d90a";
const STAGE_LINE: &str = "#ddd";
const SHADE: &str = "#000";
const EYE: &str = "#fff";
const PILLAR_COUNT: u16 = 18;

/// Reports whether a character's sprite sheet is ready to blit.
pub trait SheetProvider {
    /// Whether `archetype`'s sheet can be drawn.
    fn is_ready(&self, archetype: Archetype) -> bool;
}

/// A provider with no sheets loaded; every fighter uses the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSheets;

impl SheetProvider for NoSheets {
    fn is_ready(&self, _archetype: Archetype) -> bool {
        false
    }
}

/// One primitive for the host to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Solid rectangle.
    FillRect {
        /// Area.
        rect: Rect,
        /// CSS colour.
        color: &'static str,
        /// Opacity in `0..=1`.
        alpha: f32,
    },
    /// Solid axis-aligned ellipse.
    FillEllipse {
        /// Centre x.
        cx: f32,
        /// Centre y.
        cy: f32,
        /// Horizontal radius.
        rx: f32,
        /// Vertical radius.
        ry: f32,
        /// CSS colour.
        color: &'static str,
        /// Opacity in `0..=1`.
        alpha: f32,
    },
    /// A frame blitted from a character sheet.
    Sprite {
        /// Which sheet.
        sheet: Archetype,
        /// Source rectangle in the sheet.
        src: Rect,
        /// Destination rectangle on screen.
        dest: Rect,
        /// Mirror horizontally within `dest`.
        flip_x: bool,
    },
}

/// Where a fighter's current animation frame is taken from and drawn to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpritePlacement {
    /// Source rectangle in the sheet.
    pub src: Rect,
    /// Destination rectangle, rounded to whole pixels.
    pub dest: Rect,
    /// Mirror horizontally (facing left).
    pub flip_x: bool,
}

/// Computes the sheet blit for `fighter`'s current pose and frame.
///
/// The frame is anchored slightly behind the fighter's centre (55% of its
/// width to the back when facing right, 45% when facing left) and its bottom
/// is aligned with the body's feet even when the row is taller than the body.
#[must_use]
pub fn sprite_placement(fighter: &Fighter, arena: &ArenaConfig) -> SpritePlacement {
    let row = STANDARD_ATLAS.frames_for(fighter.pose());
    #[allow(clippy::cast_precision_loss)]
    let frame = fighter.animation().frame() as f32;
    let src = Rect::new(row.w * frame, row.y, row.w, row.h);

    let offset = arena.plane_offset(fighter.plane());
    let anchor = match fighter.facing() {
        Facing::Right => 0.55,
        Facing::Left => 0.45,
    };
    let body = fighter.body_rect();
    let dest = Rect::new(
        (fighter.position().x - row.w * anchor).round(),
        (body.y + offset - (row.h - body.h)).round(),
        row.w,
        row.h,
    );

    SpritePlacement {
        src,
        dest,
        flip_x: fighter.facing() == Facing::Left,
    }
}

/// Builds the full frame: stage, projectiles, fighters.
#[must_use]
pub fn build_draw_list(game: &Match, sheets: &dyn SheetProvider) -> Vec<DrawCommand> {
    let arena = &game.config().arena;
    let mut out = stage(arena);

    for projectile in game.projectiles() {
        out.push(DrawCommand::FillRect {
            rect: projectile.bounds(arena),
            color: HIGHLIGHT,
            alpha: 1.0,
        });
    }

    let mut fighters: Vec<&Fighter> = game.fighters().iter().collect();
    fighters.sort_by(|a, b| {
        a.plane()
            .cmp(&b.plane())
            .then(a.position().y.total_cmp(&b.position().y))
    });
    for fighter in fighters {
        push_fighter(&mut out, fighter, arena, sheets);
    }
    out
}

/// Ground stripes on each plane and the row of background pillars.
#[must_use]
pub fn stage(arena: &ArenaConfig) -> Vec<DrawCommand> {
    let ground = arena.ground_y();
    let mut out = Vec::new();

    for offset in arena.plane_offsets {
        let mut x = 40.0;
        while x < arena.width {
            out.push(DrawCommand::FillRect {
                rect: Rect::new(x, ground + offset, 40.0, 4.0),
                color: STAGE_LINE,
                alpha: 0.25,
            });
            x += 80.0;
        }
    }

    let spacing = (arena.width - 80.0) / f32::from(PILLAR_COUNT - 1);
    for i in 0..PILLAR_COUNT {
        let h = 16.0 + f32::from(i % 5) * 4.0;
        out.push(DrawCommand::FillRect {
            rect: Rect::new(40.0 + f32::from(i) * spacing, ground - 120.0, 10.0, h),
            color: SHADE,
            alpha: 0.12,
        });
    }
    out
}

fn push_fighter(
    out: &mut Vec<DrawCommand>,
    fighter: &Fighter,
    arena: &ArenaConfig,
    sheets: &dyn SheetProvider,
) {
    let offset = arena.plane_offset(fighter.plane());
    out.push(DrawCommand::FillEllipse {
        cx: fighter.position().x,
        cy: arena.ground_y() + 8.0 + offset,
        rx: 28.0,
        ry: 10.0,
        color: SHADE,
        alpha: 0.25,
    });

    if sheets.is_ready(fighter.archetype()) {
        let placement = sprite_placement(fighter, arena);
        out.push(DrawCommand::Sprite {
            sheet: fighter.archetype(),
            src: placement.src,
            dest: placement.dest,
            flip_x: placement.flip_x,
        });
        return;
    }

    let body = fighter.body_rect().shifted_y(offset);
    out.push(DrawCommand::FillRect {
        rect: body,
        color: fighter.tuning().color,
        alpha: 1.0,
    });
    let eye_dx = match fighter.facing() {
        Facing::Right => 10.0,
        Facing::Left => -14.0,
    };
    out.push(DrawCommand::FillRect {
        rect: Rect::new(fighter.position().x + eye_dx, body.y + 16.0, 4.0, 4.0),
        color: EYE,
        alpha: 1.0,
    });
    if let Some(hitbox) = fighter.hitbox(arena) {
        out.push(DrawCommand::FillRect {
            rect: hitbox.rect,
            color: HIGHLIGHT,
            alpha: 0.6,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{Plane, PlayerSlot};

    struct AllSheets;

    impl SheetProvider for AllSheets {
        fn is_ready(&self, _archetype: Archetype) -> bool {
            true
        }
    }

    fn fighter_commands(list: &[DrawCommand]) -> &[DrawCommand] {
        let stage_len = stage(&ArenaConfig::default()).len();
        &list[stage_len..]
    }

    #[test]
    fn stage_has_stripes_and_pillars() {
        let arena = ArenaConfig::default();
        let commands = stage(&arena);
        // 12 stripes per plane on a 960 wide arena
        assert_eq!(commands.len(), 2 * 12 + 18);
        match &commands[commands.len() - 1] {
            DrawCommand::FillRect { rect, alpha, .. } => {
                assert!((rect.x - 920.0).abs() < 0.001);
                assert!((rect.h - 24.0).abs() < 0.001);
                assert!((alpha - 0.12).abs() < f32::EPSILON);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn fallback_draws_body_eye_and_shadow() {
        let game = Match::default();
        let list = build_draw_list(&game, &NoSheets);
        let fighters = fighter_commands(&list);

        // shadow, body, eye for each fighter
        assert_eq!(fighters.len(), 6);
        assert!(matches!(fighters[0], DrawCommand::FillEllipse { rx, .. } if (rx - 28.0).abs() < f32::EPSILON));
        match &fighters[1] {
            DrawCommand::FillRect { rect, color, .. } => {
                assert_eq!(*color, "#4ad");
                assert!((rect.w - 46.0).abs() < f32::EPSILON);
            }
            other => panic!("unexpected {other:?}"),
        }
        match &fighters[2] {
            DrawCommand::FillRect { rect, color, .. } => {
                assert_eq!(*color, "#fff");
                assert!((rect.x - 298.0).abs() < 0.001);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn ready_sheets_blit_sprites() {
        let game = Match::default();
        let list = build_draw_list(&game, &AllSheets);
        let sprites: Vec<_> = list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sheet, flip_x, .. } => Some((*sheet, *flip_x)),
                _ => None,
            })
            .collect();
        assert_eq!(sprites, [(Archetype::Hero, false), (Archetype::Rival, true)]);
    }

    #[test]
    fn sprite_is_anchored_behind_centre() {
        let arena = ArenaConfig::default();
        let hero = Fighter::new(PlayerSlot::One, Archetype::Hero, 300.0, &arena);
        let placement = sprite_placement(&hero, &arena);

        // idle row is 64 wide, 96 tall; body is 84 tall with feet at 324
        assert!((placement.dest.x - 265.0).abs() < f32::EPSILON);
        assert!((placement.dest.y - 228.0).abs() < f32::EPSILON);
        assert!((placement.dest.bottom() - 324.0).abs() < f32::EPSILON);
        assert_eq!(placement.src, Rect::new(0.0, 0.0, 64.0, 96.0));
        assert!(!placement.flip_x);
    }

    #[test]
    fn back_plane_fighters_draw_last() {
        let mut game = Match::default();
        game.fighter_mut(PlayerSlot::One).set_plane(Plane::Back);
        let list = build_draw_list(&game, &NoSheets);
        let bodies: Vec<&str> = fighter_commands(&list)
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { color, .. } if *color != "#fff" => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(bodies, ["#d44", "#4ad"]);
    }
}
