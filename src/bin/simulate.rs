use anyhow::{anyhow, bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use knucklebones::ai::{Agent, Difficulty, RandomAgent};
use knucklebones::game::{Die, GameOutcome, GameState, Seat};

/// A match is all but guaranteed to end long before this; a capped match is
/// tallied as a draw rather than looping forever.
const MAX_TURNS: usize = 1_000;

/// Pit two AI tiers against each other without a terminal UI.
#[derive(Parser)]
#[command(name = "simulate", about = "Headless Knucklebones AI-vs-AI match runner")]
struct Cli {
    /// Number of matches to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Difficulty of the first player: easy, medium, or hard
    #[arg(long, default_value = "medium")]
    p1: String,

    /// Difficulty of the second player
    #[arg(long, default_value = "medium")]
    p2: String,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Default)]
struct Tally {
    wins: [usize; 2],
    draws: usize,
    score_sums: [u64; 2],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.games == 0 {
        bail!("--games must be at least 1");
    }
    let p1: Difficulty = cli.p1.parse().map_err(anyhow::Error::msg)?;
    let p2: Difficulty = cli.p2.parse().map_err(anyhow::Error::msg)?;

    let mut dice = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut tally = Tally::default();
    for game in 0..cli.games {
        // Alternate which tier opens so neither side banks the first-move
        // advantage across the run.
        let p1_seat = if game % 2 == 0 { Seat::One } else { Seat::Two };
        let tiers = match p1_seat {
            Seat::One => [p1, p2],
            Seat::Two => [p2, p1],
        };
        let mut agents = [
            make_agent(tiers[0], cli.seed, game as u64 * 2),
            make_agent(tiers[1], cli.seed, game as u64 * 2 + 1),
        ];

        let (outcome, scores) = run_match(&mut agents, &mut dice)?;
        match outcome {
            Some(GameOutcome::Winner(seat)) => {
                let tier_index = if seat == p1_seat { 0 } else { 1 };
                tally.wins[tier_index] += 1;
            }
            Some(GameOutcome::Draw) | None => tally.draws += 1,
        }
        tally.score_sums[0] += u64::from(scores[p1_seat.index()]);
        tally.score_sums[1] += u64::from(scores[p1_seat.other().index()]);
    }

    print_summary(&cli, p1, p2, &tally);
    Ok(())
}

/// Build the agent for a tier, seeding the easy tier's RNG when the run
/// itself is seeded.
fn make_agent(tier: Difficulty, seed: Option<u64>, salt: u64) -> Box<dyn Agent> {
    match (tier, seed) {
        (Difficulty::Easy, Some(seed)) => Box::new(RandomAgent::seeded(seed.wrapping_add(salt))),
        _ => tier.agent(),
    }
}

/// Play one match to completion, returning the outcome (None when the turn
/// cap was hit) and both final scores indexed by seat.
fn run_match(
    agents: &mut [Box<dyn Agent>; 2],
    dice: &mut StdRng,
) -> Result<(Option<GameOutcome>, [u32; 2])> {
    let mut state = GameState::initial();

    for _ in 0..MAX_TURNS {
        let roll = Die::roll(dice);
        let seat = state.current_player();
        let column = agents[seat.index()].select_column(&state, roll);
        state
            .apply_move_mut(column, roll)
            .map_err(|e| anyhow!("agent played an illegal move: {e:?}"))?;

        if state.is_terminal() {
            return Ok((state.outcome(), state.scores()));
        }
    }

    Ok((None, state.scores()))
}

fn print_summary(cli: &Cli, p1: Difficulty, p2: Difficulty, tally: &Tally) {
    let total = cli.games as f64;
    println!("{} matches, {} vs {}", cli.games, p1, p2);
    for (i, tier) in [p1, p2].iter().enumerate() {
        println!(
            "  p{} ({:<6})  {:>5} wins ({:>5.1}%)  mean score {:>5.1}",
            i + 1,
            tier.to_string(),
            tally.wins[i],
            tally.wins[i] as f64 / total * 100.0,
            tally.score_sums[i] as f64 / total,
        );
    }
    println!(
        "  draws        {:>5}      ({:>5.1}%)",
        tally.draws,
        tally.draws as f64 / total * 100.0
    );
}
