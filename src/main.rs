use anyhow::{bail, Result};

use pylos::ai::RolloutConfig;
use pylos::battle;
use pylos::players::{FirstFit, PlayerSpec, RandomPlayer, SearchPlayer};

fn spec(name: &str) -> Result<PlayerSpec> {
    let spec = match name {
        "random" => PlayerSpec::new(name, RandomPlayer::new),
        "firstfit" => PlayerSpec::new(name, FirstFit::new),
        "minimax2" => PlayerSpec::new(name, || SearchPlayer::minimax(2)),
        "minimax4" => PlayerSpec::new(name, || SearchPlayer::minimax(4)),
        "minimax6" => PlayerSpec::new(name, || SearchPlayer::minimax(6)),
        "table4" => PlayerSpec::new(name, || SearchPlayer::with_table(4)),
        "rollout" => PlayerSpec::new(name, || SearchPlayer::rollout(3, RolloutConfig::default())),
        other => bail!(
            "unknown player '{other}' (expected random, firstfit, \
             minimax2/4/6, table4 or rollout)"
        ),
    };
    Ok(spec)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (a, b) = match args.as_slice() {
        [a, b, ..] => (spec(a)?, spec(b)?),
        _ => bail!("usage: pylos <player-a> <player-b> [runs] [threads]"),
    };
    let runs = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => 10,
    };
    let threads = match args.get(3) {
        Some(raw) => raw.parse()?,
        None => 4,
    };

    let result = battle::play(&a, &b, runs, threads)?;
    result.print();
    Ok(())
}
