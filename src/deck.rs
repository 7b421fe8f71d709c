use crate::cards::{Card, Suit};
use crate::subsets::Subset;

/// Cards in a Tarot deck.
pub const DECK_SIZE: usize = 78;

/// Cards dealt to one player in a four-player game.
pub const HAND_SIZE: usize = 18;

/// The immutable 78-card Tarot catalog.
///
/// Catalog order is fixed: the Excuse, trumps 21 down to 1, then for each
/// suit the minors 10 down to 1 followed by King, Queen, Knight, Jack.
/// Deck indices are stable, so a [`Subset`] of indices identifies a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use tarot_rs::deck::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::tarot();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    pub fn tarot() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.push(Card::Excuse);
        for rank in (1..=21).rev() {
            cards.push(Card::Trump(rank));
        }
        for &suit in &Suit::ALL {
            for pip in (1..=10).rev() {
                cards.push(Card::Minor(suit, pip));
            }
            cards.push(Card::King(suit));
            cards.push(Card::Queen(suit));
            cards.push(Card::Knight(suit));
            cards.push(Card::Jack(suit));
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at a deck index, or `None` past the end.
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Materialize a subset of deck indices as cards, in index order.
    /// Returns `None` if any index falls outside the deck.
    pub fn pick(&self, subset: &Subset) -> Option<Vec<Card>> {
        subset.indices().map(|i| self.card(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use std::collections::HashSet;

    #[test]
    fn tarot_deck_has_78_distinct_cards() {
        let deck = Deck::tarot();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.as_slice().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn kind_census() {
        let deck = Deck::tarot();
        let count = |kind: CardKind| deck.as_slice().iter().filter(|c| c.kind() == kind).count();
        assert_eq!(count(CardKind::Excuse), 1);
        assert_eq!(count(CardKind::Trump), 21);
        assert_eq!(count(CardKind::King), 4);
        assert_eq!(count(CardKind::Queen), 4);
        assert_eq!(count(CardKind::Knight), 4);
        assert_eq!(count(CardKind::Jack), 4);
        assert_eq!(count(CardKind::Minor), 40);
    }

    #[test]
    fn all_trump_ranks_present() {
        let deck = Deck::tarot();
        let ranks: HashSet<u8> =
            deck.as_slice().iter().filter_map(|c| c.trump_rank()).collect();
        assert_eq!(ranks.len(), 21);
        assert!(ranks.contains(&1));
        assert!(ranks.contains(&21));
    }

    #[test]
    fn catalog_order_is_stable() {
        let deck = Deck::tarot();
        assert_eq!(deck.card(0), Some(Card::Excuse));
        assert_eq!(deck.card(1), Some(Card::Trump(21)));
        assert_eq!(deck.card(21), Some(Card::Trump(1)));
        assert_eq!(deck.card(22), Some(Card::Minor(Suit::Diamonds, 10)));
        assert_eq!(deck.card(32), Some(Card::King(Suit::Diamonds)));
        assert_eq!(deck.card(77), Some(Card::Jack(Suit::Clubs)));
        assert_eq!(deck.card(78), None);
    }

    #[test]
    fn pick_maps_indices_to_cards() {
        let deck = Deck::tarot();
        let subset = Subset::from_indices([0, 21, 77]).unwrap();
        let cards = deck.pick(&subset).unwrap();
        assert_eq!(cards, vec![Card::Excuse, Card::Trump(1), Card::Jack(Suit::Clubs)]);

        let out_of_range = Subset::from_indices([0, 100]).unwrap();
        assert_eq!(deck.pick(&out_of_range), None);
    }
}
