use anyhow::Context;
use clap::Parser;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tarot_rs::combinatorics::binomial;
use tarot_rs::deck::{Deck, DECK_SIZE, HAND_SIZE};
use tarot_rs::simulation;
use tarot_rs::stats::{decimal_ratio, scale_count, EstimateError};

/// Estimate the odds of petit sec and main imparable Tarot deals.
#[derive(Parser, Debug)]
#[command(name = "tarot-odds", version, about)]
struct Args {
    /// Number of random 18-card hands to classify.
    #[arg(long, default_value_t = 1_000_000, value_parser = clap::value_parser!(u64).range(1..))]
    hands: u64,

    /// Seed for the ChaCha8 generator; drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Fractional digits in reported rates.
    #[arg(long, default_value_t = 6)]
    digits: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let deck = Deck::tarot();
    let population = binomial(DECK_SIZE as u64, HAND_SIZE as u64)
        .context("deal population")?;

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    log::info!("sampling {} hands", args.hands);
    let started = Instant::now();
    let tally = simulation::run(&deck, args.hands, &mut rng)?;
    let elapsed = started.elapsed();

    println!(
        "Theoretical {HAND_SIZE}-card deals: {}",
        group_digits(&population.to_string())
    );
    println!("Hands sampled: {}", group_digits(&tally.hands.to_string()));
    println!();

    println!("Petit sec: {}", group_digits(&tally.petit_sec.to_string()));
    println!(
        "Petit sec rate per hand: {}%",
        percent(tally.petit_sec, 1, tally.hands, args.digits)?
    );
    println!(
        "Petit sec rate per four-player deal: {}%",
        percent(tally.petit_sec, 4, tally.hands, args.digits)?
    );
    let petit_deals = scale_count(tally.petit_sec, tally.hands, &population)?;
    println!(
        "Estimated petit sec deals: {} of {}",
        group_digits(&petit_deals.to_string()),
        group_digits(&population.to_string())
    );
    println!();

    println!(
        "Valid hands (petit sec excluded): {}",
        group_digits(&tally.valid_hands().to_string())
    );
    println!();

    println!("Main imparable: {}", group_digits(&tally.main_imparable.to_string()));
    println!(
        "Main imparable rate per valid hand: {}%",
        percent(tally.main_imparable, 1, tally.valid_hands(), args.digits + 1)?
    );
    let unstoppable_deals = scale_count(tally.main_imparable, tally.valid_hands(), &population)?;
    let valid_deals = &population - &petit_deals;
    println!(
        "Estimated main imparable deals: {} of {} valid deals",
        group_digits(&unstoppable_deals.to_string()),
        group_digits(&valid_deals.to_string())
    );
    println!();

    let seconds = elapsed.as_secs_f64();
    let throughput = if seconds > 0.0 { tally.hands as f64 / seconds } else { 0.0 };
    println!(
        "Elapsed: {seconds:.2}s ({} hands/s)",
        group_digits(&format!("{throughput:.0}"))
    );
    Ok(())
}

fn percent(count: u64, per_deal: u32, total: u64, digits: u32) -> Result<String, EstimateError> {
    let numerator = BigUint::from(count) * (100u32 * per_deal);
    decimal_ratio(&numerator, &BigUint::from(total), digits)
}

/// Group a digit string with `_` every three digits, from the right.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('_');
        }
        grouped.push(ch);
    }
    grouped
}
