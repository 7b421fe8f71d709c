//! tarot-rs: Tarot deal probability engine
//!
//! Estimates how often an 18-card hand dealt from the 78-card Tarot deck is
//! "petit sec" (the rank-1 trump with no other trump) or a "main imparable"
//! (at least ten major trumps including the 21, with every suited non-King
//! card backed by its immediate superior, up to its King).
//!
//! Goals:
//! - Exact combinatorics over the deck (`combinatorics`, big integers)
//! - Interchangeable exhaustive enumeration and Monte Carlo sampling
//!   without replacement (`subsets`)
//! - A pure, deterministic hand classifier (`classifier`)
//! - Drift-free rate and population estimates (`stats`)
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a dealt hand
//! ```
//! use tarot_rs::cards::parse_cards;
//! use tarot_rs::classifier::{classify, Verdict};
//!
//! let hand = parse_cards(
//!     "T1 Kd Qd Nd Jd 10d 9d 8d 7d 6d 5d 4d 3d 2d 1d Kh Qh Nh",
//! ).unwrap();
//! let result = classify(&hand).unwrap();
//! assert_eq!(result.verdict, Verdict::PetitSec);
//! ```
//!
//! ## CLI
//! Run the Monte Carlo estimator with:
//! ```sh
//! cargo run --release --bin tarot-odds -- --hands 10000000
//! ```

pub mod cards;
pub mod classifier;
pub mod combinatorics;
pub mod deck;
pub mod simulation;
pub mod stats;
pub mod subsets;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
