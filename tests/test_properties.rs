use gallery_shooter::entities::BulletStatus;
use gallery_shooter::{Game, GameConfig, NullSurface};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Command {
    Fire,
    Left,
    Right,
    SpawnRow,
    Advance,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        2 => Just(Command::Fire),
        1 => Just(Command::Left),
        1 => Just(Command::Right),
        1 => Just(Command::SpawnRow),
        6 => Just(Command::Advance),
    ]
}

fn apply(game: &mut Game<NullSurface>, cmd: Command) {
    match cmd {
        Command::Fire => game.spawn_bullet(),
        Command::Left => game.move_gun_left(),
        Command::Right => game.move_gun_right(),
        Command::SpawnRow => game.spawn_targets(),
        Command::Advance => game.advance(),
    }
}

fn new_game(bullet_step_pct: f64) -> Game<NullSurface> {
    let mut config = GameConfig::default();
    config.bullet.step_pct = bullet_step_pct;
    let mut game = Game::new(config, NullSurface);
    let _ = game.new_game();
    game
}

proptest! {
    #[test]
    fn session_invariants_hold(
        cmds in prop::collection::vec(command(), 0..400),
        step in 1.0f64..20.0,
    ) {
        let mut game = new_game(step);
        let mut statuses: Vec<BulletStatus> = Vec::new();
        let mut hits: Vec<bool> = game.field().targets.iter().map(|t| t.is_hit()).collect();
        let mut was_over = game.is_game_over();

        for cmd in cmds {
            apply(&mut game, cmd);
            let field = game.field();

            // Collections only grow
            prop_assert!(field.bullets.len() >= statuses.len());
            prop_assert!(field.targets.len() >= hits.len());

            // Bullet status only moves forward
            for (old, bullet) in statuses.iter().zip(&field.bullets) {
                if *old != BulletStatus::InFlight {
                    prop_assert_eq!(*old, bullet.status());
                }
            }
            // Hit flags never clear
            for (old, target) in hits.iter().zip(&field.targets) {
                prop_assert!(!*old || target.is_hit());
            }

            // Stats mirror the bullets
            let stats = game.stats();
            if let Command::Advance = cmd {
                prop_assert_eq!(stats.fired, field.bullets.len());
            }
            prop_assert!(stats.hit + stats.miss <= stats.fired);

            // Closest target is active, game over implies it reached the gun
            if let Some(closest) = game.closest_target() {
                prop_assert!(!closest.is_hit());
            }
            if game.is_game_over() {
                let closest = game.closest_target();
                prop_assert!(closest.is_some());
                prop_assert!(closest.map_or(false, |t| t.bottom() >= field.gun.y));
            }
            prop_assert!(!was_over || game.is_game_over());

            statuses = field.bullets.iter().map(|b| b.status()).collect();
            hits = field.targets.iter().map(|t| t.is_hit()).collect();
            was_over = game.is_game_over();
        }
    }

    #[test]
    fn every_bullet_resolves_without_new_rows(
        shots in prop::collection::vec((0usize..30, 0usize..30), 1..20),
    ) {
        let mut game = new_game(2.0);
        for (lefts, rights) in shots {
            for _ in 0..lefts {
                game.move_gun_left();
            }
            for _ in 0..rights {
                game.move_gun_right();
            }
            game.spawn_bullet();
            game.advance();
        }
        // 752 / 16 frames is enough for any bullet to leave the field
        for _ in 0..60 {
            game.advance();
        }
        let stats = game.stats();
        prop_assert_eq!(stats.hit + stats.miss, stats.fired);
        prop_assert!(game.field().bullets.iter().all(|b| !b.is_in_flight()));
        prop_assert!(!game.is_game_over());
    }
}
