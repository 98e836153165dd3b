/// The rendering seam.  `Game` calls these once per frame, in order:
/// `begin_frame`, every active target, every in-flight bullet, the gun,
/// the stats, the game-over overlay if needed, then `end_frame`.

use std::convert::Infallible;

use crate::entities::{Bullet, Gun, Target};
use crate::stats::Stats;

pub trait Surface {
    type Error;

    fn begin_frame(&mut self, background: &str) -> Result<(), Self::Error>;
    fn draw_target(&mut self, target: &Target) -> Result<(), Self::Error>;
    fn draw_bullet(&mut self, bullet: &Bullet) -> Result<(), Self::Error>;
    fn draw_gun(&mut self, gun: &Gun) -> Result<(), Self::Error>;
    fn draw_stats(&mut self, stats: &Stats) -> Result<(), Self::Error>;
    fn draw_game_over(&mut self, text: &str) -> Result<(), Self::Error>;
    fn end_frame(&mut self) -> Result<(), Self::Error>;

    /// Give the underlying handle back.  Nothing is drawn afterwards.
    fn release(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}

/// Draws nothing.  For headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    type Error = Infallible;

    fn begin_frame(&mut self, _: &str) -> Result<(), Infallible> {
        Ok(())
    }
    fn draw_target(&mut self, _: &Target) -> Result<(), Infallible> {
        Ok(())
    }
    fn draw_bullet(&mut self, _: &Bullet) -> Result<(), Infallible> {
        Ok(())
    }
    fn draw_gun(&mut self, _: &Gun) -> Result<(), Infallible> {
        Ok(())
    }
    fn draw_stats(&mut self, _: &Stats) -> Result<(), Infallible> {
        Ok(())
    }
    fn draw_game_over(&mut self, _: &str) -> Result<(), Infallible> {
        Ok(())
    }
    fn end_frame(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
    fn release(self) -> Result<(), Infallible> {
        Ok(())
    }
}
