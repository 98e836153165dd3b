mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use display::TerminalSurface;
use gallery_shooter::{Game, GameConfig};

type TerminalGame = Game<TerminalSurface<BufWriter<Stdout>>>;

#[derive(Parser)]
#[command(name = "gallery_shooter")]
#[command(about = "Shoot down the descending target rows before they reach the gun")]
struct Args {
    /// JSON file overriding the default game options
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Frames between new target rows
    #[arg(long, default_value_t = 150)]
    spawn_every: u64,
    /// Frames per second
    #[arg(long, default_value_t = 30)]
    fps: u64,
}

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between gun movements while a direction key is held.
const MOVE_COOLDOWN: u32 = 2;

/// Min frames between shots while Space is held.
const SHOOT_COOLDOWN: u32 = 6;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn held_any(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drives the game: input, row-spawn cadence and one `draw` per frame.
/// Returns when the player quits.
///
/// Input model: `key_frame` records the frame of the last press/repeat event
/// for every key, and each frame applies the effects of all keys that are
/// still fresh.  Space and a direction can therefore be held together.
fn game_loop(game: &mut TerminalGame, rx: &mpsc::Receiver<Event>, args: &Args) -> Result<()> {
    let frame_time = Duration::from_millis(1000 / args.fps.max(1));
    let spawn_every = args.spawn_every.max(1);

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut move_cooldown: u32 = 0;
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;
    // Frames since the current session started; drives row spawning.
    let mut session_frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code.clone(), frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') if game.is_game_over() => {
                                game.new_game()?;
                                session_frame = 0;
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code.clone(), frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Resize(cols, rows) => game.surface_mut().resize(cols, rows),
                _ => {}
            }
        }

        if !game.is_game_over() {
            session_frame += 1;

            let left = held_any(
                &key_frame,
                &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
                frame,
            );
            let right = held_any(
                &key_frame,
                &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
                frame,
            );
            let shoot = is_held(&key_frame, &KeyCode::Char(' '), frame);

            if move_cooldown == 0 {
                if left {
                    game.move_gun_left();
                    move_cooldown = MOVE_COOLDOWN;
                } else if right {
                    game.move_gun_right();
                    move_cooldown = MOVE_COOLDOWN;
                }
            }

            if shoot_cooldown == 0 && shoot {
                game.spawn_bullet();
                shoot_cooldown = SHOOT_COOLDOWN;
            }

            if session_frame % spawn_every == 0 {
                game.spawn_targets();
            }
        }

        move_cooldown = move_cooldown.saturating_sub(1);
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        game.draw()?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut out = stdout();
    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without the kitty protocol fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads happen on their own thread so the game loop
    // never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(config, &rx, &args);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run(config: GameConfig, rx: &mpsc::Receiver<Event>, args: &Args) -> Result<()> {
    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let surface = TerminalSurface::new(
        BufWriter::new(stdout()),
        cols,
        rows,
        config.width,
        config.height,
    );

    let mut game = Game::new(config, surface);
    game.new_game()?;

    let result = game_loop(&mut game, rx, args);
    game.destroy()?;
    result
}
