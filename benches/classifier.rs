use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tarot_rs::cards::parse_cards;
use tarot_rs::classifier::classify;
use tarot_rs::deck::{Deck, DECK_SIZE, HAND_SIZE};
use tarot_rs::subsets::sample_subset;

fn bench_classify(c: &mut Criterion) {
    let ordinary = parse_cards("T5 T8 T14 Ex Kd 10d 7d 2d Qh 9h 5h Ns 8s 4s Jc 10c 6c 1c")
        .expect("valid cards");
    let petit_sec = parse_cards("T1 Kd Qd Nd Jd 10d 9d 8d 7d 6d 5d 4d 3d 2d 1d Kh Qh Nh")
        .expect("valid cards");
    let unstoppable =
        parse_cards("T21 T20 T19 T18 T17 T16 T15 T14 T13 T12 T11 Kd Qd Nd Jd Kh Qh Nh")
            .expect("valid cards");

    let mut g = c.benchmark_group("classify");
    g.bench_function("ordinary", |b| b.iter(|| classify(black_box(&ordinary))));
    g.bench_function("petit_sec", |b| b.iter(|| classify(black_box(&petit_sec))));
    g.bench_function("main_imparable", |b| b.iter(|| classify(black_box(&unstoppable))));
    g.finish();
}

fn bench_sample_and_classify(c: &mut Criterion) {
    let deck = Deck::tarot();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    c.bench_function("sample_and_classify", |b| {
        b.iter(|| {
            let subset =
                sample_subset(DECK_SIZE as u32, HAND_SIZE as u32, &mut rng).expect("parameters");
            let hand = deck.pick(black_box(&subset)).expect("in range");
            classify(&hand).expect("valid hand")
        })
    });
}

criterion_group!(benches, bench_classify, bench_sample_and_classify);
criterion_main!(benches);
