use std::fmt;
use std::str::FromStr;

/// The four suits; order matches the deck catalog: d < h < s < c.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() == 1 {
            return Suit::try_from(t.chars().next().unwrap());
        }
        match t.to_ascii_lowercase().as_str() {
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            "clubs" => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            'c' => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// The seven kinds of Tarot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Trump,
    Excuse,
    King,
    Queen,
    Knight,
    Jack,
    Minor,
}

/// A Tarot card: one of 21 ranked trumps, the Excuse, or a suited card.
///
/// Trump ranks run 1 (the Petit) to 21; minor pips run 1 to 10. The checked
/// constructors reject out-of-range ranks.
///
/// ```
/// use tarot_rs::cards::{Card, Suit};
///
/// assert_eq!(Card::PETIT.to_string(), "T1");
/// assert_eq!(Card::Knight(Suit::Hearts).to_string(), "Nh");
/// assert_eq!(Card::trump(22), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Trump(u8),
    Excuse,
    King(Suit),
    Queen(Suit),
    Knight(Suit),
    Jack(Suit),
    Minor(Suit, u8),
}

impl Card {
    /// The rank-1 trump.
    pub const PETIT: Card = Card::Trump(1);

    /// A trump of the given rank, or `None` outside 1..=21.
    pub const fn trump(rank: u8) -> Option<Card> {
        if rank >= 1 && rank <= 21 {
            Some(Card::Trump(rank))
        } else {
            None
        }
    }

    /// A minor card of the given pip, or `None` outside 1..=10.
    pub const fn minor(suit: Suit, pip: u8) -> Option<Card> {
        if pip >= 1 && pip <= 10 {
            Some(Card::Minor(suit, pip))
        } else {
            None
        }
    }

    pub const fn kind(self) -> CardKind {
        match self {
            Card::Trump(_) => CardKind::Trump,
            Card::Excuse => CardKind::Excuse,
            Card::King(_) => CardKind::King,
            Card::Queen(_) => CardKind::Queen,
            Card::Knight(_) => CardKind::Knight,
            Card::Jack(_) => CardKind::Jack,
            Card::Minor(..) => CardKind::Minor,
        }
    }

    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::King(s) | Card::Queen(s) | Card::Knight(s) | Card::Jack(s) | Card::Minor(s, _) => {
                Some(s)
            }
            Card::Trump(_) | Card::Excuse => None,
        }
    }

    pub const fn trump_rank(self) -> Option<u8> {
        match self {
            Card::Trump(rank) => Some(rank),
            _ => None,
        }
    }

    pub const fn is_trump(self) -> bool {
        matches!(self, Card::Trump(_))
    }

    pub const fn is_king(self) -> bool {
        matches!(self, Card::King(_))
    }

    /// The card directly above this one in the suit chain
    /// King > Queen > Knight > Jack > Minor.
    ///
    /// A held Queen, Knight, Jack or Minor is "backed" only if its superior
    /// is also held; every minor answers to the Jack of its suit. Kings sit
    /// at the top, and trumps and the Excuse are outside the chain.
    ///
    /// ```
    /// use tarot_rs::cards::{Card, Suit};
    ///
    /// let seven = Card::minor(Suit::Hearts, 7).unwrap();
    /// assert_eq!(seven.suit_superior(), Some(Card::Jack(Suit::Hearts)));
    /// assert_eq!(Card::King(Suit::Hearts).suit_superior(), None);
    /// ```
    pub const fn suit_superior(self) -> Option<Card> {
        match self {
            Card::Queen(s) => Some(Card::King(s)),
            Card::Knight(s) => Some(Card::Queen(s)),
            Card::Jack(s) => Some(Card::Knight(s)),
            Card::Minor(s, _) => Some(Card::Jack(s)),
            Card::Trump(_) | Card::Excuse | Card::King(_) => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Card::Trump(rank) => write!(f, "T{rank}"),
            Card::Excuse => write!(f, "Ex"),
            Card::King(s) => write!(f, "K{s}"),
            Card::Queen(s) => write!(f, "Q{s}"),
            Card::Knight(s) => write!(f, "N{s}"),
            Card::Jack(s) => write!(f, "J{s}"),
            Card::Minor(s, pip) => write!(f, "{pip}{s}"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("ex") {
            return Ok(Card::Excuse);
        }
        if t.len() < 2 {
            return Err(CardParseError::Invalid(s.to_string()));
        }

        let head = t.chars().next().unwrap();
        if head == 'T' || head == 't' {
            let rank: u8 = t[1..].parse().map_err(|_| CardParseError::Invalid(s.to_string()))?;
            return Card::trump(rank).ok_or_else(|| CardParseError::Invalid(s.to_string()));
        }

        // Suited cards end with the suit char.
        let suit = Suit::try_from(t.chars().last().unwrap())?;
        let body = &t[..t.len() - 1];
        let card = match body.to_ascii_uppercase().as_str() {
            "K" => Card::King(suit),
            "Q" => Card::Queen(suit),
            "N" => Card::Knight(suit),
            "J" => Card::Jack(suit),
            pips => {
                let pip: u8 =
                    pips.parse().map_err(|_| CardParseError::Invalid(s.to_string()))?;
                Card::minor(suit, pip).ok_or_else(|| CardParseError::Invalid(s.to_string()))?
            }
        };
        Ok(card)
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use tarot_rs::cards::{parse_cards, Card, Suit};
///
/// let cards = parse_cards("T21, Ex 10h Kd").unwrap();
/// assert_eq!(cards[0], Card::Trump(21));
/// assert_eq!(cards[1], Card::Excuse);
/// assert_eq!(cards[2], Card::Minor(Suit::Hearts, 10));
/// assert_eq!(cards[3], Card::King(Suit::Diamonds));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
