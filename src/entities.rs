/// Game entity types.  Mostly plain data; the only logic here is geometry
/// and the forward-only status transitions.

// ── Gun ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Gun {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Optional horizontal bounds for the gun's left edge.
    pub min_x: Option<i32>,
    pub max_x: Option<i32>,
}

impl Gun {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Gun {
            x,
            y,
            width,
            height,
            min_x: None,
            max_x: None,
        }
    }

    pub fn with_bounds(mut self, min_x: i32, max_x: i32) -> Self {
        self.min_x = Some(min_x);
        self.max_x = Some(max_x.max(min_x));
        self
    }

    /// Reposition horizontally, respecting the bounds when set.
    pub fn move_to(&mut self, new_x: i32) {
        let mut x = new_x;
        if let Some(max) = self.max_x {
            x = x.min(max);
        }
        if let Some(min) = self.min_x {
            x = x.max(min);
        }
        self.x = x;
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }
}

// ── Bullets ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletStatus {
    InFlight,
    Hit,
    Miss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    /// Centre of the bullet.
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    status: BulletStatus,
}

impl Bullet {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Bullet {
            x,
            y,
            radius,
            status: BulletStatus::InFlight,
        }
    }

    pub fn status(&self) -> BulletStatus {
        self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == BulletStatus::InFlight
    }

    /// Resolve an in-flight bullet.  A bullet that already resolved keeps
    /// its outcome.
    pub fn retire(&mut self, outcome: BulletStatus) {
        if self.is_in_flight() {
            self.status = outcome;
        }
    }

    /// True once the whole bullet is above the top edge of the field.
    pub fn has_left_field(&self) -> bool {
        self.y + self.radius <= 0
    }
}

// ── Targets ───────────────────────────────────────────────────────────────────

/// Index of a target in `Field::targets`.  Stable for the whole session
/// because targets are never removed.
pub type TargetId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    hit: bool,
}

impl Target {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Target {
            x,
            y,
            width,
            height,
            hit: false,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn mark_hit(&mut self) {
        self.hit = true;
    }

    /// How far the target has descended: its bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Circle vs rectangle overlap, touching counts as a hit.
    pub fn hit_by_bullet(&self, bullet: &Bullet) -> bool {
        let nearest_x = clamp_between(bullet.x, self.x, self.x + self.width);
        let nearest_y = clamp_between(bullet.y, self.y, self.y + self.height);
        let dx = (bullet.x - nearest_x) as i64;
        let dy = (bullet.y - nearest_y) as i64;
        let r = bullet.radius as i64;
        dx * dx + dy * dy <= r * r
    }
}

/// Like `i32::clamp`, but tolerates `a > b` (negative-extent rectangles).
fn clamp_between(v: i32, a: i32, b: i32) -> i32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    v.max(lo).min(hi)
}

// ── Whole simulation state ────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub gun: Gun,
    /// Append-only, in firing order.
    pub bullets: Vec<Bullet>,
    /// Append-only, row by row.
    pub targets: Vec<Target>,
    /// Most advanced non-hit target as of the last tick.
    pub closest_target: Option<TargetId>,
    pub game_over: bool,
    /// Number of ticks executed.
    pub frame: u64,
}
