/// Layout math.  Every spatial constant is a percentage of the field
/// dimensions, so the game looks the same at any resolution.

use crate::config::GameConfig;

/// `round(p * n / 100)`, with halves rounded toward positive infinity.
pub fn percent_of(p: f64, n: i32) -> i32 {
    (p * n as f64 / 100.0 + 0.5).floor() as i32
}

/// Spatial constants derived once per `Game` and fixed for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub gun_width: i32,
    pub gun_height: i32,
    pub gun_step: i32,
    pub clamp_gun: bool,
    pub bullet_radius: i32,
    pub bullet_step: i32,
    pub targets_per_row: usize,
    pub target_gap: i32,
    /// Horizontal pitch of a row: target side plus one gap.
    pub target_pitch: i32,
    pub stats_x: i32,
    pub stats_y: i32,
}

impl Layout {
    pub fn from_config(config: &GameConfig) -> Self {
        let (width, height) = (config.width, config.height);
        let targets_per_row = config.target.per_row;

        let target_gap = percent_of(config.target.gap_pct, width);
        let target_pitch = if targets_per_row == 0 {
            0
        } else {
            ((width - target_gap) as f64 / targets_per_row as f64 + 0.5).floor() as i32
        };

        Layout {
            width,
            height,
            gun_width: percent_of(config.gun.width_pct, width),
            gun_height: percent_of(config.gun.height_pct, height),
            gun_step: percent_of(config.gun.step_pct, width),
            clamp_gun: config.gun.clamp_to_field,
            bullet_radius: percent_of(config.bullet.radius_pct, width),
            bullet_step: percent_of(config.bullet.step_pct, height),
            targets_per_row,
            target_gap,
            target_pitch,
            stats_x: percent_of(config.stats.x_pct, width),
            stats_y: percent_of(config.stats.y_pct, height),
        }
    }

    /// Side length of a (square) target.
    pub fn target_side(&self) -> i32 {
        self.target_pitch - self.target_gap
    }

    /// Left edge of a horizontally centred gun.
    pub fn gun_start_x(&self) -> i32 {
        (self.width - self.gun_width) / 2
    }

    /// Top edge of the gun: it sits on the bottom of the field.
    pub fn gun_y(&self) -> i32 {
        self.height - self.gun_height
    }
}
