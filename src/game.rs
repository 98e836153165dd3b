/// The per-frame orchestrator: owns the field, the stats and the surface,
/// and exposes the commands the driver calls (spawn, fire, move, draw).

use crate::compute::{
    closest_target, init_field, move_gun_left, move_gun_right, spawn_bullet, spawn_target_row,
    tally, tick,
};
use crate::config::GameConfig;
use crate::entities::{Field, Target};
use crate::layout::Layout;
use crate::stats::Stats;
use crate::surface::Surface;

pub struct Game<S: Surface> {
    config: GameConfig,
    layout: Layout,
    field: Field,
    stats: Stats,
    surface: S,
}

impl<S: Surface> Game<S> {
    /// Derive the layout once.  The field stays empty until `new_game`.
    pub fn new(config: GameConfig, surface: S) -> Self {
        let layout = Layout::from_config(&config);
        let field = init_field(&layout);
        let stats = Stats::new(layout.stats_x, layout.stats_y);
        Game {
            config,
            layout,
            field,
            stats,
            surface,
        }
    }

    /// Start a fresh session: empty field, zeroed stats, one row of
    /// targets, one rendered frame.
    pub fn new_game(&mut self) -> Result<(), S::Error> {
        self.field = init_field(&self.layout);
        self.stats.reset();
        log::info!(
            "new game on a {}x{} field",
            self.layout.width,
            self.layout.height
        );
        self.spawn_targets();
        self.draw()
    }

    pub fn spawn_targets(&mut self) {
        spawn_target_row(&mut self.field, &self.layout);
    }

    pub fn spawn_bullet(&mut self) {
        spawn_bullet(&mut self.field, &self.layout);
    }

    pub fn move_gun_left(&mut self) {
        move_gun_left(&mut self.field, &self.layout);
    }

    pub fn move_gun_right(&mut self) {
        move_gun_right(&mut self.field, &self.layout);
    }

    /// One simulation step plus the stats update, without rendering.
    pub fn advance(&mut self) {
        tick(&mut self.field, &self.layout);
        let (fired, hit, miss) = tally(&self.field);
        self.stats.update(fired, hit, miss);
    }

    /// One frame: advance, then render.
    pub fn draw(&mut self) -> Result<(), S::Error> {
        self.advance();
        self.render()
    }

    fn render(&mut self) -> Result<(), S::Error> {
        let surface = &mut self.surface;
        surface.begin_frame(&self.config.background)?;

        for target in self.field.targets.iter().filter(|t| !t.is_hit()) {
            surface.draw_target(target)?;
        }
        for bullet in self.field.bullets.iter().filter(|b| b.is_in_flight()) {
            surface.draw_bullet(bullet)?;
        }
        surface.draw_gun(&self.field.gun)?;
        surface.draw_stats(&self.stats)?;

        if self.field.game_over {
            surface.draw_game_over(&self.stats.text())?;
        }
        surface.end_frame()
    }

    /// Release the surface.  The game can't be used afterwards.
    pub fn destroy(self) -> Result<(), S::Error> {
        log::info!("game destroyed after {} frames", self.field.frame);
        self.surface.release()
    }

    pub fn is_game_over(&self) -> bool {
        self.field.game_over
    }

    pub fn closest_target(&self) -> Option<&Target> {
        closest_target(&self.field)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
