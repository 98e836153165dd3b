/// Terminal surface: all terminal I/O lives here.
///
/// Field coordinates are length units; this module scales them to
/// terminal cells.  The bottom row is reserved for the controls hint.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use gallery_shooter::entities::{Bullet, Gun, Target};
use gallery_shooter::stats::Stats;
use gallery_shooter::Surface;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TARGET: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_GUN: Color = Color::White;
const C_STATS: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn background_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "blue" | "darkblue" | "navy" => Color::DarkBlue,
        "grey" | "gray" | "darkgrey" | "darkgray" => Color::DarkGrey,
        "green" | "darkgreen" => Color::DarkGreen,
        "magenta" | "purple" => Color::DarkMagenta,
        "cyan" | "teal" => Color::DarkCyan,
        "red" | "darkred" => Color::DarkRed,
        _ => Color::Reset,
    }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    field_width: i32,
    field_height: i32,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16, field_width: i32, field_height: i32) -> Self {
        TerminalSurface {
            out,
            cols,
            rows,
            field_width,
            field_height,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Rows available to the field (everything but the hint row).
    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    fn col(&self, x: i32) -> i64 {
        scale(x, self.field_width, self.cols)
    }

    fn row(&self, y: i32) -> i64 {
        scale(y, self.field_height, self.play_rows())
    }

    /// Print `text` at a cell, skipping cells outside the play area.
    fn put(&mut self, col: i64, row: i64, text: &str) -> io::Result<()> {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.play_rows() as i64 {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    /// Fill the cells covered by a field-space rectangle, at least one cell.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, glyph: char) -> io::Result<()> {
        let left = self.col(x);
        let top = self.row(y);
        let right = self.col(x + w).max(left + 1);
        let bottom = self.row(y + h).max(top + 1);

        let left = left.max(0);
        let right = right.min(self.cols as i64);
        if right <= left {
            return Ok(());
        }
        let line: String = std::iter::repeat(glyph).take((right - left) as usize).collect();
        for row in top..bottom {
            self.put(left, row, &line)?;
        }
        Ok(())
    }
}

/// Map `v` in `0..extent` onto `0..cells`.
fn scale(v: i32, extent: i32, cells: u16) -> i64 {
    if extent <= 0 {
        return 0;
    }
    v as i64 * cells as i64 / extent as i64
}

impl<W: Write> Surface for TerminalSurface<W> {
    type Error = io::Error;

    fn begin_frame(&mut self, background: &str) -> io::Result<()> {
        self.out.queue(style::SetBackgroundColor(background_color(background)))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_target(&mut self, target: &Target) -> io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_TARGET))?;
        self.fill_rect(target.x, target.y, target.width, target.height, '█')
    }

    fn draw_bullet(&mut self, bullet: &Bullet) -> io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_BULLET))?;
        let (col, row) = (self.col(bullet.x), self.row(bullet.y));
        self.put(col, row, "•")
    }

    fn draw_gun(&mut self, gun: &Gun) -> io::Result<()> {
        // Sprite: barrel tip over a solid base.
        //    ▲
        //   ███
        self.out.queue(style::SetForegroundColor(C_GUN))?;
        let half = gun.height / 2;
        self.fill_rect(gun.x, gun.y + half, gun.width, gun.height - half, '█')?;
        let (col, row) = (self.col(gun.center_x()), self.row(gun.y));
        self.put(col, row, "▲")
    }

    fn draw_stats(&mut self, stats: &Stats) -> io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_STATS))?;
        let col = self.col(stats.x);
        let row = self.row(stats.y).min(self.play_rows() as i64 - 1);
        self.put(col, row, &stats.text())
    }

    fn draw_game_over(&mut self, text: &str) -> io::Result<()> {
        let lines: &[(&str, Color)] = &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (text, Color::Yellow),
            ("R - Play Again  Q - Quit", Color::White),
        ];

        let cx = self.cols / 2;
        let start_row = (self.rows / 2).saturating_sub(lines.len() as u16 / 2);

        for (i, (msg, color)) in lines.iter().enumerate() {
            let row = start_row + i as u16;
            let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(*color))?;
            self.out.queue(Print(*msg))?;
        }
        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        // Controls hint on the last row, then park the cursor and flush
        self.out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }

    fn release(mut self) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.flush()
    }
}
