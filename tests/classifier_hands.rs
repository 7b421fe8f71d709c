use tarot_rs::cards::{parse_cards, Card};
use tarot_rs::classifier::{classify, Verdict};

fn verdict_of(cards: &[Card]) -> Verdict {
    classify(cards).expect("valid hand").verdict
}

fn imparable_base() -> Vec<Card> {
    parse_cards("T21 T20 T19 T18 T17 T16 T15 T14 T13 T12 T11 Kd Qd Nd Jd Kh Qh Nh")
        .expect("valid cards")
}

fn swap(hand: &[Card], remove: &str, insert: &str) -> Vec<Card> {
    let remove: Card = remove.parse().expect("valid card");
    let insert: Card = insert.parse().expect("valid card");
    hand.iter().map(|&c| if c == remove { insert } else { c }).collect()
}

#[test]
fn base_hand_is_main_imparable() {
    assert_eq!(verdict_of(&imparable_base()), Verdict::MainImparable);
}

#[test]
fn removing_a_load_bearing_superior_invalidates() {
    // Each of these cards backs another held card; with it gone, the card
    // below loses its chain and the whole hand falls.
    let base = imparable_base();
    for superior in ["Kd", "Qd", "Nd", "Kh", "Qh"] {
        let hand = swap(&base, superior, "T10");
        assert_eq!(
            verdict_of(&hand),
            Verdict::Ordinary,
            "hand should fall without {superior}"
        );
    }
}

#[test]
fn removing_an_unneeded_tail_card_does_not() {
    // Nothing held depends on the diamond Jack or the heart Knight, so
    // swapping either for a trump keeps the hand unstoppable.
    let base = imparable_base();
    for tail in ["Jd", "Nh"] {
        let hand = swap(&base, tail, "T10");
        assert_eq!(verdict_of(&hand), Verdict::MainImparable, "{tail} backs nothing held");
    }
}

#[test]
fn petit_sec_and_counts() {
    let hand = parse_cards("T1 Kd Qd Nd Jd 10d 9d 8d 7d 6d 5d 4d 3d 2d 1d Kh Qh Nh")
        .expect("valid cards");
    let result = classify(&hand).expect("valid hand");
    assert!(result.is_petit_sec());
    assert!(!result.is_main_imparable());
    assert_eq!(result.trump_count, 1);
    assert_eq!(result.king_count, 2);
    assert!(result.has_petit);
    assert!(!result.has_21);
    assert!(!result.has_excuse);
}

#[test]
fn ten_majors_with_excuse_can_still_qualify() {
    let hand = parse_cards("T21 T20 T19 T18 T17 T16 T15 T14 T13 T12 Ex Kd Qd Nd Jd Kh Qh Nh")
        .expect("valid cards");
    let result = classify(&hand).expect("valid hand");
    assert_eq!(result.verdict, Verdict::MainImparable);
    assert_eq!(result.major_trump_count, 10);
    assert!(result.has_excuse);
}

#[test]
fn ten_majors_without_excuse_or_kings_cannot() {
    // The unbacked remainder is eight suited cards; no chain arrangement
    // covers that many, so the hand is pruned before any scan.
    let hand = parse_cards("T21 T20 T19 T18 T17 T16 T15 T14 T13 T12 Qd Nd Jd 10d 9d 8d 7d 6d")
        .expect("valid cards");
    assert_eq!(verdict_of(&hand), Verdict::Ordinary);
}

#[test]
fn ordinary_hand_is_neither() {
    let hand = parse_cards("T5 T8 T14 Ex Kd 10d 7d 2d Qh 9h 5h Ns 8s 4s Jc 10c 6c 1c")
        .expect("valid cards");
    let result = classify(&hand).expect("valid hand");
    assert_eq!(result.verdict, Verdict::Ordinary);
    assert!(!result.is_petit_sec());
    assert!(!result.is_main_imparable());
}
