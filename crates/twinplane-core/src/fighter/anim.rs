//! Animation poses, the sprite-sheet atlas and frame stepping.

use serde::{Deserialize, Serialize};

/// Frames per second of the simulation clock.
pub const TICKS_PER_SECOND: f32 = 60.0;

/// A named animation state. Each maps to one row of the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pose {
    /// Standing still.
    Idle,
    /// Moving on the ground.
    Walk,
    /// Airborne.
    Jump,
    /// Any active attack.
    Attack,
    /// Hit reaction or action lock.
    Hit,
    /// Blocking.
    Guard,
    /// Knocked out.
    Down,
}

impl Pose {
    /// Sheet row name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Attack => "atk",
            Self::Hit => "hit",
            Self::Guard => "guard",
            Self::Down => "down",
        }
    }
}

/// One row of a horizontal-strip sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseFrames {
    /// Top of the row in the sheet.
    pub y: f32,
    /// Frame width.
    pub w: f32,
    /// Frame height.
    pub h: f32,
    /// Frames in the row.
    pub frames: u32,
    /// Default playback rate.
    pub fps: f32,
}

/// Pose-to-row table shared by every sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteAtlas {
    /// Idle row.
    pub idle: PoseFrames,
    /// Walk row.
    pub walk: PoseFrames,
    /// Jump row.
    pub jump: PoseFrames,
    /// Attack row.
    pub attack: PoseFrames,
    /// Hit row.
    pub hit: PoseFrames,
    /// Guard row.
    pub guard: PoseFrames,
    /// Down row.
    pub down: PoseFrames,
}

const fn row(y: f32, w: f32, h: f32, frames: u32, fps: f32) -> PoseFrames {
    PoseFrames {
        y,
        w,
        h,
        frames,
        fps,
    }
}

/// The layout both character sheets use.
pub const STANDARD_ATLAS: SpriteAtlas = SpriteAtlas {
    idle: row(0.0, 64.0, 96.0, 4, 6.0),
    walk: row(96.0, 64.0, 96.0, 6, 10.0),
    jump: row(192.0, 64.0, 96.0, 1, 1.0),
    attack: row(288.0, 96.0, 96.0, 4, 12.0),
    hit: row(384.0, 64.0, 96.0, 2, 10.0),
    guard: row(480.0, 64.0, 96.0, 2, 8.0),
    down: row(576.0, 96.0, 64.0, 2, 6.0),
};

impl SpriteAtlas {
    /// The row for `pose`.
    #[must_use]
    pub const fn frames_for(&self, pose: Pose) -> &PoseFrames {
        match pose {
            Pose::Idle => &self.idle,
            Pose::Walk => &self.walk,
            Pose::Jump => &self.jump,
            Pose::Attack => &self.attack,
            Pose::Hit => &self.hit,
            Pose::Guard => &self.guard,
            Pose::Down => &self.down,
        }
    }
}

impl Default for SpriteAtlas {
    fn default() -> Self {
        STANDARD_ATLAS
    }
}

/// Current pose plus playback position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pose: Pose,
    frame: u32,
    timer: u32,
    forced_fps: Option<f32>,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            pose: Pose::Idle,
            frame: 0,
            timer: 0,
            forced_fps: None,
        }
    }
}

impl Animation {
    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current frame index within the pose's row.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Frame-rate override, if one is in force.
    #[must_use]
    pub fn forced_fps(&self) -> Option<f32> {
        self.forced_fps
    }

    /// Switches to `pose`. A no-op when already in it; otherwise playback
    /// restarts at frame 0 with the given override.
    pub fn set(&mut self, pose: Pose, forced_fps: Option<f32>) {
        if self.pose != pose {
            *self = Self {
                pose,
                frame: 0,
                timer: 0,
                forced_fps,
            };
        }
    }

    /// Advances one tick, stepping the frame once `60 / fps` ticks elapse.
    pub fn tick(&mut self, atlas: &SpriteAtlas) {
        let row = atlas.frames_for(self.pose);
        let fps = self.forced_fps.unwrap_or(row.fps);
        self.timer += 1;
        #[allow(clippy::cast_precision_loss)]
        let elapsed = self.timer as f32;
        if elapsed >= TICKS_PER_SECOND / fps {
            self.timer = 0;
            self.frame = (self.frame + 1) % row.frames.max(1);
        }
    }
}
