//! Random self-play for exercising the rules engine.
//!
//! Plays full games by choosing uniformly random legal placements and, at a
//! configurable rate, random follower deployments. Records every applied
//! turn and writes game records as JSONL for inspection.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::game::Game;
use crate::movegen::FollowerOption;

/// Configuration for self-play generation.
#[derive(Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of players per game.
    pub num_players: usize,
    /// Probability of deploying a follower when options exist.
    pub follower_rate: f64,
    /// Number of parallel threads (1 = sequential).
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            num_players: 2,
            follower_rate: 0.5,
            threads: 1,
            seed: 0,
            quiet: false,
        }
    }
}

/// One applied turn in a recorded game.
#[derive(Clone, Serialize)]
pub struct TurnRecord {
    pub player: u8,
    pub tile: &'static str,
    pub x: i32,
    pub y: i32,
    pub rotation: u8,
    /// Follower deployment as `role@position`, if any.
    pub follower: Option<String>,
}

/// A complete recorded game.
#[derive(Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub seed: u64,
    pub turns: Vec<TurnRecord>,
    pub tiles_placed: usize,
    pub tiles_discarded: usize,
    pub followers_deployed: usize,
}

/// Formats a chosen option as a compact `role@position` string.
fn format_option(option: FollowerOption) -> String {
    match option {
        FollowerOption::Monk => "monk".to_string(),
        FollowerOption::Thief { direction } => format!("thief@{}", direction.letter()),
        FollowerOption::Knight { direction } => format!("knight@{}", direction.letter()),
        FollowerOption::Farmer { segment } => format!("farmer@{}", segment.units()),
    }
}

/// Plays a single random game with the given seed and returns its record.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, game_seed: u64) -> GameRecord {
    let mut game = Game::new(config.num_players, game_seed);
    // Decisions draw from their own stream so the supply shuffle stays
    // independent of how many choices a turn consumes.
    let mut rng = SmallRng::seed_from_u64(game_seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut turns = Vec::new();
    let mut followers_deployed = 0usize;

    while !game.over() {
        let (player, tile, num_actions) = {
            let turn = game.turn().expect("pending turn while game is not over");
            (turn.player.0, turn.tile, turn.actions.len())
        };
        let action = rng.gen_range(0..num_actions);

        let mut follower = None;
        let has_supply = game.players()[player as usize].supply > 0;
        if has_supply && rng.gen::<f64>() < config.follower_rate {
            let options = game
                .follower_options(action)
                .expect("action index from the pending turn");
            if !options.is_empty() {
                follower = Some(options[rng.gen_range(0..options.len())]);
            }
        }

        let placement = game.turn().expect("pending turn").actions[action].placement;
        turns.push(TurnRecord {
            player,
            tile: tile.name(),
            x: placement.x,
            y: placement.y,
            rotation: placement.rotation,
            follower: follower.map(format_option),
        });
        if follower.is_some() {
            followers_deployed += 1;
        }
        game.play(action, follower)
            .expect("validated action must apply");
    }

    GameRecord {
        game_id,
        seed: game_seed,
        tiles_placed: game.board().len(),
        tiles_discarded: game.discarded().len(),
        followers_deployed,
        turns,
    }
}

/// Derives the per-game seed from the configured seed.
fn derive_seed(config: &SelfPlayConfig, game_id: usize) -> u64 {
    if config.seed != 0 {
        config.seed.wrapping_add(game_id as u64)
    } else {
        SmallRng::from_entropy().gen()
    }
}

/// Runs self-play generation, producing all game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| games.push(game));
    games
}

/// Runs self-play generation, calling `on_game` with each completed game
/// record so the caller can process games incrementally.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for game_id in 0..config.num_games {
        let game = play_game(config, game_id, derive_seed(config, game_id));
        if !config.quiet {
            report_progress(config, &game);
        }
        on_game(game);
    }
}

/// Parallel self-play: plays games concurrently under a rayon pool and
/// delivers them to the callback through a channel.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");
    let seeds: Vec<u64> = (0..config.num_games)
        .map(|game_id| derive_seed(config, game_id))
        .collect();

    let (tx, rx) = mpsc::channel::<GameRecord>();
    std::thread::scope(|scope| {
        scope.spawn(|| {
            pool.install(|| {
                seeds
                    .par_iter()
                    .enumerate()
                    .for_each_with(tx, |tx, (game_id, &seed)| {
                        let game = play_game(config, game_id, seed);
                        if !config.quiet {
                            report_progress(config, &game);
                        }
                        let _ = tx.send(game);
                    });
            });
        });
        for game in rx {
            on_game(game);
        }
    });
}

fn report_progress(config: &SelfPlayConfig, game: &GameRecord) {
    eprintln!(
        "game {}/{}: {} tiles placed, {} discarded, {} followers",
        game.game_id + 1,
        config.num_games,
        game.tiles_placed,
        game.tiles_discarded,
        game.followers_deployed,
    );
}

/// Writes one JSON object per line for each game record.
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints aggregate statistics across all games to stderr.
pub fn print_summary(games: &[GameRecord]) {
    if games.is_empty() {
        return;
    }
    let total = games.len() as f64;
    let placed: usize = games.iter().map(|g| g.tiles_placed).sum();
    let discarded: usize = games.iter().map(|g| g.tiles_discarded).sum();
    let followers: usize = games.iter().map(|g| g.followers_deployed).sum();
    eprintln!(
        "avg tiles placed {:.1}, avg discarded {:.1}, avg followers {:.1}",
        placed as f64 / total,
        discarded as f64 / total,
        followers as f64 / total,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> SelfPlayConfig {
        SelfPlayConfig {
            num_games: 2,
            seed: 5,
            quiet: true,
            ..SelfPlayConfig::default()
        }
    }

    #[test]
    fn seeded_games_replay_identically() {
        let config = quiet_config();
        let a = play_game(&config, 0, 1234);
        let b = play_game(&config, 0, 1234);
        assert_eq!(a.turns.len(), b.turns.len());
        for (ta, tb) in a.turns.iter().zip(&b.turns) {
            assert_eq!((ta.x, ta.y, ta.rotation, ta.tile), (tb.x, tb.y, tb.rotation, tb.tile));
            assert_eq!(ta.follower, tb.follower);
        }
    }

    #[test]
    fn all_tiles_are_accounted_for() {
        let game = play_game(&quiet_config(), 0, 77);
        // 71 drawn tiles plus the starting tile.
        assert_eq!(game.tiles_placed + game.tiles_discarded, 72);
        assert_eq!(game.turns.len() + 1, game.tiles_placed);
    }

    #[test]
    fn run_collects_every_game() {
        let games = run_self_play(&quiet_config());
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game_id, 0);
        assert_eq!(games[1].game_id, 1);
    }

    #[test]
    fn parallel_run_matches_game_count() {
        let config = SelfPlayConfig {
            threads: 2,
            ..quiet_config()
        };
        let mut games = run_self_play(&config);
        games.sort_by_key(|g| g.game_id);
        assert_eq!(games.len(), 2);
        // Same seeds as the sequential run produce the same records.
        let sequential = run_self_play(&quiet_config());
        for (p, s) in games.iter().zip(&sequential) {
            assert_eq!(p.turns.len(), s.turns.len());
            assert_eq!(p.tiles_placed, s.tiles_placed);
        }
    }

    #[test]
    fn jsonl_output_is_one_line_per_game() {
        let games = run_self_play(&quiet_config());
        let mut buffer = Vec::new();
        write_jsonl(&games, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.starts_with('{')));
    }
}
