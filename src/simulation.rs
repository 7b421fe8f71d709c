use crate::classifier::{classify, ClassifyError};
use crate::deck::{Deck, HAND_SIZE};
use crate::stats::Tally;
use crate::subsets::{sample_subset, SubsetError};
use rand::Rng;

const PROGRESS_CHUNK: u64 = 1_000_000;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SimulationError {
    #[error(transparent)]
    Subset(#[from] SubsetError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error("subset index outside the deck")]
    SubsetOutOfRange,
}

/// Deal and classify `hands` random 18-card hands, tallying the verdicts.
///
/// One synchronous loop: draw a subset of deck indices without replacement,
/// materialize the cards, classify, record. The generator is injected, so a
/// seeded run replays exactly. For a parallel host, run one loop per worker
/// with independent generator streams and [`Tally::merge`] the results.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tarot_rs::deck::Deck;
/// use tarot_rs::simulation::run;
///
/// let deck = Deck::tarot();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let tally = run(&deck, 100, &mut rng).unwrap();
/// assert_eq!(tally.hands, 100);
/// ```
pub fn run<R: Rng + ?Sized>(
    deck: &Deck,
    hands: u64,
    rng: &mut R,
) -> Result<Tally, SimulationError> {
    let universe = deck.len() as u32;
    let mut tally = Tally::default();
    let mut hand = Vec::with_capacity(HAND_SIZE);

    for dealt in 0..hands {
        let subset = sample_subset(universe, HAND_SIZE as u32, rng)?;
        hand.clear();
        for index in subset.indices() {
            hand.push(deck.card(index).ok_or(SimulationError::SubsetOutOfRange)?);
        }
        let result = classify(&hand)?;
        tally.record(&result);

        if (dealt + 1) % PROGRESS_CHUNK == 0 {
            log::debug!(
                "classified {} of {} hands ({} petit sec, {} main imparable)",
                dealt + 1,
                hands,
                tally.petit_sec,
                tally.main_imparable
            );
        }
    }
    Ok(tally)
}
