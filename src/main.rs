//! othello-match: play Othello matches between search agents.
//!
//! ## Usage
//!
//! - `othello-match` - Alpha-beta (Dark) against MCTS (Light), one game
//! - `othello-match --dark minimax --light random --games 10 --quiet`
//! - `RUST_LOG=debug othello-match` - Also log per-search summaries

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use othello_search::agents::config::{ALPHABETA_DEPTH, EXPECTIMAX_DEPTH, MINIMAX_DEPTH};
use othello_search::{
    Agent, AlphaBetaAgent, Conclusion, ExpectimaxAgent, GameRng, GreedyAgent, Heuristic,
    LogObserver, MatchObserver, MctsAgent, MctsConfig, MinimaxAgent, NullObserver, Player,
    PlayerMap, RandomAgent, Referee, SearchConfig,
};

/// Agents selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Greedy,
    Minimax,
    AlphaBeta,
    Expectimax,
    Mcts,
}

/// Play Othello matches between search agents
#[derive(Parser, Debug)]
#[command(name = "othello-match")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Agent playing Dark (moves first)
    #[arg(long, value_enum, default_value_t = AgentKind::AlphaBeta)]
    dark: AgentKind,

    /// Agent playing Light
    #[arg(long, value_enum, default_value_t = AgentKind::Mcts)]
    light: AgentKind,

    /// Search depth for minimax, alpha-beta and expectimax (defaults per agent)
    #[arg(long)]
    depth: Option<u32>,

    /// MCTS iterations per move
    #[arg(long, default_value_t = 100)]
    iterations: u32,

    /// MCTS exploration constant
    #[arg(long, default_value_t = std::f64::consts::SQRT_2)]
    exploration: f64,

    /// Leaf evaluator for greedy, minimax, alpha-beta and expectimax
    #[arg(long, default_value_t = Heuristic::Comprehensive)]
    evaluator: Heuristic,

    /// Master seed; each agent gets its own fork
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Do not log moves and boards
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn search_config(&self, default_depth: u32, rng: &GameRng) -> SearchConfig {
        SearchConfig {
            depth: self.depth.unwrap_or(default_depth),
            seed: rng.seed(),
        }
    }

    fn build_agent(&self, kind: AgentKind, player: Player, rng: GameRng) -> Box<dyn Agent> {
        let evaluator = self.evaluator;
        match kind {
            AgentKind::Random => Box::new(RandomAgent::new(player, rng)),
            AgentKind::Greedy => Box::new(GreedyAgent::with_evaluator(player, evaluator)),
            AgentKind::Minimax => {
                let config = self.search_config(MINIMAX_DEPTH, &rng);
                Box::new(MinimaxAgent::with_evaluator(player, config, evaluator))
            }
            AgentKind::AlphaBeta => {
                let config = self.search_config(ALPHABETA_DEPTH, &rng);
                Box::new(AlphaBetaAgent::with_evaluator(player, config, evaluator))
            }
            AgentKind::Expectimax => {
                let config = self.search_config(EXPECTIMAX_DEPTH, &rng);
                Box::new(ExpectimaxAgent::with_evaluator(player, config, evaluator))
            }
            AgentKind::Mcts => {
                let config = MctsConfig::default()
                    .with_iterations(self.iterations)
                    .with_exploration(self.exploration);
                Box::new(MctsAgent::new(player, config).with_rng(rng))
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut master = GameRng::new(cli.seed);

    let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
    let mut draws = 0u32;
    let mut thinking: PlayerMap<Duration> = PlayerMap::with_value(Duration::ZERO);

    for index in 1..=cli.games {
        let dark = cli.build_agent(cli.dark, Player::Dark, master.fork());
        let light = cli.build_agent(cli.light, Player::Light, master.fork());
        let mut referee = Referee::new(dark, light);

        let mut observer: Box<dyn MatchObserver> = if cli.quiet {
            Box::new(NullObserver)
        } else {
            Box::new(LogObserver)
        };
        let conclusion = referee
            .run(observer.as_mut())
            .with_context(|| format!("game {index} aborted"))?;

        match conclusion {
            Conclusion::Winner(player) => wins[player] += 1,
            Conclusion::Draw => draws += 1,
        }
        let game = referee.game();
        for player in Player::ALL {
            thinking[player] += game.elapsed(player);
        }
        println!(
            "game {index}: {conclusion} ({} {} - {} {})",
            Player::Dark,
            game.piece_count(Player::Dark),
            game.piece_count(Player::Light),
            Player::Light,
        );
    }

    println!();
    println!("{:?} (Dark) wins:  {}", cli.dark, wins[Player::Dark]);
    println!("{:?} (Light) wins: {}", cli.light, wins[Player::Light]);
    println!("Draws: {draws}");
    for (player, total) in thinking.iter() {
        println!("{player} thinking time: {:.3}s", total.as_secs_f64());
    }
    Ok(())
}
