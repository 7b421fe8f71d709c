mod profile;

use crate::cards::Card;
use crate::deck::HAND_SIZE;
use profile::HandProfile;
use std::collections::HashSet;

/// Ceiling on suited non-King cards that still admit a complete backing
/// chain; a bare ten-major candidate without the Excuse holds eight.
const MAX_UNBACKED_REMAINDER: u32 = 7;

/// Fewest non-Excuse major trumps an unstoppable hand can hold.
const MIN_MAJOR_TRUMPS: u32 = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClassifyError {
    #[error("a dealt hand holds exactly {HAND_SIZE} cards, got {0}")]
    WrongHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Final verdict for one dealt hand. The outcomes are mutually exclusive:
/// petit sec is decided first and suppresses the unstoppable-hand checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The Petit is the hand's only trump.
    PetitSec,
    /// At least ten major trumps including the 21, with every suited
    /// non-King card backed up to its King.
    MainImparable,
    /// Anything else.
    Ordinary,
}

/// Everything `classify` derives from a hand: the single-pass tallies plus
/// the verdict. Recomputed per hand, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct ClassificationResult {
    pub trump_count: u32,
    pub major_trump_count: u32,
    pub king_count: u32,
    pub has_petit: bool,
    pub has_21: bool,
    pub has_excuse: bool,
    pub verdict: Verdict,
}

impl ClassificationResult {
    pub const fn is_petit_sec(&self) -> bool {
        matches!(self.verdict, Verdict::PetitSec)
    }

    pub const fn is_main_imparable(&self) -> bool {
        matches!(self.verdict, Verdict::MainImparable)
    }
}

/// Classify one dealt hand as petit sec, main imparable or ordinary.
///
/// Pure and deterministic: one tally pass over the cards plus, for
/// unstoppable-hand candidates, a membership scan per suited card. A hand
/// of the wrong size or with a repeated card is a precondition violation
/// and errors out rather than misclassify.
///
/// ```
/// use tarot_rs::cards::parse_cards;
/// use tarot_rs::classifier::{classify, Verdict};
///
/// let hand = parse_cards(
///     "T21 T20 T19 T18 T17 T16 T15 T14 T13 T12 T11 Kd Qd Nd Jd Kh Qh Nh",
/// ).unwrap();
/// assert_eq!(classify(&hand).unwrap().verdict, Verdict::MainImparable);
/// ```
pub fn classify(hand: &[Card]) -> Result<ClassificationResult, ClassifyError> {
    if hand.len() != HAND_SIZE {
        return Err(ClassifyError::WrongHandSize(hand.len()));
    }
    let mut seen = HashSet::with_capacity(hand.len());
    for &card in hand {
        if !seen.insert(card) {
            return Err(ClassifyError::DuplicateCard(card));
        }
    }

    let profile = HandProfile::new(hand);
    let verdict = decide(&profile, hand);
    Ok(ClassificationResult {
        trump_count: profile.trump_count,
        major_trump_count: profile.major_trump_count,
        king_count: profile.king_count,
        has_petit: profile.has_petit,
        has_21: profile.has_21,
        has_excuse: profile.has_excuse,
        verdict,
    })
}

fn decide(profile: &HandProfile, hand: &[Card]) -> Verdict {
    // Petit sec pre-empts everything else.
    if profile.has_petit && profile.trump_count == 1 {
        return Verdict::PetitSec;
    }

    if profile.major_trump_count < MIN_MAJOR_TRUMPS || !profile.has_21 {
        return Verdict::Ordinary;
    }

    // Cards that must each sit in a complete backing chain: everything
    // except trumps and Kings, with the Excuse set aside as uncapturable.
    let mut remainder = HAND_SIZE as u32 - profile.trump_count - profile.king_count;
    if profile.has_excuse {
        remainder -= 1;
    }
    if remainder > MAX_UNBACKED_REMAINDER {
        return Verdict::Ordinary;
    }

    if chain_intact(hand) {
        Verdict::MainImparable
    } else {
        Verdict::Ordinary
    }
}

/// True when every held Queen, Knight, Jack and Minor has its immediate
/// suit-superior in the hand. Checking only the direct superior is enough:
/// the scan covers every held card, so a gap anywhere in a chain is caught
/// at the card directly below it.
fn chain_intact(hand: &[Card]) -> bool {
    hand.iter().all(|card| match card.suit_superior() {
        Some(superior) => hand.contains(&superior),
        None => true,
    })
}
