use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bonk_big_word::{
    FileStore, GameConfig, LandingController, PlayRoute, RoundController, RoundSummary, ScoreAction,
    Team, WordBank,
};

/// Why say lot word when few word do trick?
#[derive(Parser, Debug)]
#[command(name = "bonk", version, about)]
struct Cli {
    /// Where scores and the seen-word list are kept
    #[arg(long, default_value = "bonk-scores.json")]
    store: PathBuf,

    /// Directory with `orange/*.json` and `purple/*.json` word lists
    #[arg(long)]
    words: Option<PathBuf>,

    /// Round length in milliseconds (overrides GAME_TIME_MS / GAME_TIME)
    #[arg(long)]
    round_ms: Option<u64>,

    /// Fixed RNG seed (overrides BONK_SEED)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the running totals
    Scores,
    /// Set both totals to zero
    Reset,
    /// Jump straight into a round
    Play {
        /// Start with orange
        #[arg(long, conflicts_with = "purple")]
        orange: bool,
        /// Start with purple
        #[arg(long)]
        purple: bool,
    },
}

/// Everything a round needs besides the route.
struct Game {
    store: FileStore,
    bank: WordBank,
    config: GameConfig,
    input: Receiver<String>,
}

enum RoundEnd {
    Expired(RoundController<FileStore>, RoundSummary),
    Abandoned,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::from_env();
    if let Some(ms) = cli.round_ms {
        config = config.with_round_duration_ms(ms);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let bank = match &cli.words {
        Some(dir) => WordBank::load_dir(dir)
            .with_context(|| format!("loading word lists from {}", dir.display()))?,
        None => WordBank::builtin().context("loading bundled word lists")?,
    };

    let store = FileStore::new(&cli.store);
    log::debug!("using store {}", store.path().display());

    match cli.command {
        Some(Command::Scores) => {
            print_scores(&LandingController::open(store));
            Ok(())
        }
        Some(Command::Reset) => {
            LandingController::open(store).reset_scores()?;
            println!("Scores reset.");
            Ok(())
        }
        Some(Command::Play { orange, purple }) => {
            let route = if purple {
                PlayRoute::for_team(Team::Purple)
            } else if orange {
                PlayRoute::for_team(Team::Orange)
            } else {
                PlayRoute::plain()
            };
            let game = Game::new(store, bank, config);
            game.play_session(route)?;
            Ok(())
        }
        None => Game::new(store, bank, config).menu(),
    }
}

impl Game {
    fn new(store: FileStore, bank: WordBank, config: GameConfig) -> Self {
        Self {
            store,
            bank,
            config,
            input: spawn_input_reader(),
        }
    }

    /// The landing screen.
    fn menu(&self) -> Result<()> {
        loop {
            let mut landing = LandingController::open(self.store.clone());
            println!();
            println!("BONK BIG WORD");
            print_scores(&landing);
            prompt("[p]lay  [r]eset scores  [q]uit")?;

            let Some(line) = self.next_line() else {
                return Ok(());
            };
            match line.trim() {
                "p" | "play" => {
                    let route = landing.start_game()?;
                    self.play_session(route)?;
                }
                "r" | "reset" => landing.reset_scores()?,
                "q" | "quit" => return Ok(()),
                other => println!("Unknown choice `{other}`."),
            }
        }
    }

    /// Rounds back to back until the players go back to the menu.
    fn play_session(&self, route: PlayRoute) -> Result<()> {
        let mut round = RoundController::start(
            self.store.clone(),
            self.bank.clone(),
            self.config.clone(),
            route,
        );

        loop {
            let (finished, summary) = match self.play_round(round) {
                RoundEnd::Expired(finished, summary) => (finished, summary),
                RoundEnd::Abandoned => return Ok(()),
            };

            print_summary(&summary);
            prompt(&format!("[n]ext player ({})  [m]enu", summary.team.other()))?;

            loop {
                let Some(line) = self.next_line() else {
                    return Ok(());
                };
                match line.trim() {
                    "n" | "next" => break,
                    "m" | "menu" => return Ok(()),
                    _ => prompt("[n]ext player  [m]enu")?,
                }
            }

            round = finished.handoff()?;
        }
    }

    fn play_round(&self, mut round: RoundController<FileStore>) -> RoundEnd {
        println!();
        println!("{} team, go! [e]asy +1  [h]ard +3  [f]ail  [s]kip  [q]uit", round.team());
        show_word(&round);

        let tick = Duration::from_millis(round.config().tick_ms);
        let mut last = Instant::now();
        let mut last_announced = round.time_remaining_ms() / 10_000;

        loop {
            match self.input.recv_timeout(tick) {
                Ok(line) => match line.trim() {
                    "q" | "quit" => {
                        round.abandon();
                        return RoundEnd::Abandoned;
                    }
                    "" => {}
                    key => match key.parse::<ScoreAction>() {
                        Ok(action) => {
                            if round.press(action) {
                                show_word(&round);
                            }
                        }
                        Err(e) => println!("{e}"),
                    },
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    round.abandon();
                    return RoundEnd::Abandoned;
                }
            }

            let now = Instant::now();
            let expired = round.advance(now - last);
            last = now;

            if let Some(summary) = expired {
                return RoundEnd::Expired(round, summary);
            }

            let bucket = round.time_remaining_ms() / 10_000;
            if bucket < last_announced {
                last_announced = bucket;
                println!("  ... {}s left", round.time_remaining_ms().div_ceil(1_000));
            }
        }
    }

    fn next_line(&self) -> Option<String> {
        self.input.recv().ok()
    }
}

/// Forward stdin lines over a channel so the round loop can keep ticking
/// while waiting for input.
fn spawn_input_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn prompt(text: &str) -> Result<()> {
    print!("{text} > ");
    io::stdout().flush()?;
    Ok(())
}

fn print_scores(landing: &LandingController<FileStore>) {
    let scores = landing.scores();
    println!("  orange {:>4}   purple {:>4}", scores.orange, scores.purple);
}

fn show_word(round: &RoundController<FileStore>) {
    if let Some(pair) = round.current_word() {
        println!(
            "  [{:>5.1}s | {:+}]  easy: {:<16} hard: {}",
            round.time_remaining_ms() as f64 / 1_000.0,
            round.score(),
            pair.easy,
            pair.hard
        );
    }
}

fn print_summary(summary: &RoundSummary) {
    println!();
    println!("Time! {} scored {}", summary.team, summary.score);
    println!(
        "  {} words: {} easy, {} hard, {} failed, {} skipped",
        summary.words_played, summary.easy, summary.hard, summary.failed, summary.skipped
    );
    match summary.totals {
        Some(totals) => println!("  totals: orange {}  purple {}", totals.orange, totals.purple),
        None => println!("  (scores could not be saved)"),
    }
}
