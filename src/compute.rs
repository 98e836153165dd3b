/// Simulation step functions.
///
/// Every function works in place on a `Field` and is total: degenerate
/// geometry (zero-size entities, an empty row) never panics, it just
/// produces a field where nothing can collide.

use crate::entities::{Bullet, BulletStatus, Field, Gun, Target, TargetId};
use crate::layout::Layout;

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh, empty field with the gun centred on the bottom edge.
pub fn init_field(layout: &Layout) -> Field {
    let mut gun = Gun::new(
        layout.gun_start_x(),
        layout.gun_y(),
        layout.gun_width,
        layout.gun_height,
    );
    if layout.clamp_gun {
        gun = gun.with_bounds(0, layout.width - layout.gun_width);
    }

    Field {
        width: layout.width,
        height: layout.height,
        gun,
        bullets: Vec::new(),
        targets: Vec::new(),
        closest_target: None,
        game_over: false,
        frame: 0,
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Push every active target down one row and append a new row at the top.
/// Hit targets stay where they were.
pub fn spawn_target_row(field: &mut Field, layout: &Layout) {
    let gap = layout.target_gap;
    let side = layout.target_side();

    for target in field.targets.iter_mut().filter(|t| !t.is_hit()) {
        target.y += target.height + gap;
    }

    let first = field.targets.len();
    for i in 0..layout.targets_per_row {
        let x = gap + i as i32 * (side + gap);
        field.targets.push(Target::new(x, gap, side, side));
    }
    log::debug!(
        "spawned row of {} targets (ids {}..{})",
        layout.targets_per_row,
        first,
        field.targets.len()
    );
}

/// Fire one bullet from the gun's current centre.
pub fn spawn_bullet(field: &mut Field, layout: &Layout) {
    let bullet = Bullet::new(field.gun.center_x(), field.gun.y, layout.bullet_radius);
    log::debug!("bullet {} fired at x={}", field.bullets.len(), bullet.x);
    field.bullets.push(bullet);
}

// ── Input-driven transitions ────────────────────────────────────────────────

pub fn move_gun_left(field: &mut Field, layout: &Layout) {
    let x = field.gun.x - layout.gun_step;
    field.gun.move_to(x);
}

pub fn move_gun_right(field: &mut Field, layout: &Layout) {
    let x = field.gun.x + layout.gun_step;
    field.gun.move_to(x);
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Does nothing once the game is over.
pub fn tick(field: &mut Field, layout: &Layout) {
    if field.game_over {
        return;
    }
    field.frame += 1;

    // ── 1. Move bullets ──────────────────────────────────────────────────────
    for (bi, bullet) in field.bullets.iter_mut().enumerate() {
        if !bullet.is_in_flight() {
            continue;
        }
        bullet.y -= layout.bullet_step;
        if bullet.has_left_field() {
            bullet.retire(BulletStatus::Miss);
            log::debug!("bullet {bi} missed");
        }
    }

    // ── 2. Collision: bullets ↔ targets, earliest bullet wins ────────────────
    let mut closest: Option<(TargetId, i32)> = None;

    for (ti, target) in field.targets.iter_mut().enumerate() {
        if target.is_hit() {
            continue;
        }

        let hit = field
            .bullets
            .iter_mut()
            .enumerate()
            .find(|(_, b)| b.is_in_flight() && target.hit_by_bullet(b));

        if let Some((bi, bullet)) = hit {
            bullet.retire(BulletStatus::Hit);
            target.mark_hit();
            log::debug!("target {ti} hit by bullet {bi}");
            continue;
        }

        let bottom = target.bottom();
        // Strictly greater: ties keep the earlier target.
        if closest.map_or(true, |(_, best)| bottom > best) {
            closest = Some((ti, bottom));
        }
    }

    field.closest_target = closest.map(|(ti, _)| ti);

    // ── 3. Terminal check ────────────────────────────────────────────────────
    if let Some((ti, bottom)) = closest {
        if bottom >= field.gun.y {
            field.game_over = true;
            log::info!("game over: target {ti} reached the gun at frame {}", field.frame);
        }
    }
}

// ── Tallying ────────────────────────────────────────────────────────────────

/// `(fired, hit, miss)` recomputed from the bullet list.
pub fn tally(field: &Field) -> (usize, usize, usize) {
    let count = |status| field.bullets.iter().filter(|b| b.status() == status).count();
    (
        field.bullets.len(),
        count(BulletStatus::Hit),
        count(BulletStatus::Miss),
    )
}

pub fn closest_target(field: &Field) -> Option<&Target> {
    field.closest_target.and_then(|ti| field.targets.get(ti))
}
