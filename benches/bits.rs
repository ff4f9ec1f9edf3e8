use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use wordbits::{
    ShiftDirection, packer::pack_fixed_width, shift::shift_in_place, transfer::copy_range,
};

fn gen_words(count: usize) -> Vec<u64> {
    // Deterministic but non-trivial pattern
    (0..count as u64)
        .map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15))
        .collect()
}

fn bench_copy_range(c: &mut Criterion) {
    for &words in &[1usize, 16, 256] {
        let source = gen_words(words + 1);
        let mut dest = vec![0u64; words + 1];
        let len = words * 64;

        c.bench_function(&format!("copy_unaligned_{}_words", words), |b| {
            b.iter(|| copy_range(black_box(&source), 3, len, &mut dest, 61).unwrap())
        });
    }
}

fn bench_pack(c: &mut Criterion) {
    for &width in &[3usize, 12, 33] {
        let elements: Vec<u64> = (0..1024u64).map(|i| i & ((1 << width) - 1)).collect();
        let mut dest = vec![0u64; (elements.len() * width).div_ceil(64)];

        c.bench_function(&format!("pack_1024_x_{}_bits", width), |b| {
            b.iter(|| pack_fixed_width(&mut dest, width, black_box(&elements)).unwrap())
        });
    }
}

fn bench_shift(c: &mut Criterion) {
    for &amount in &[1usize, 64, 200] {
        c.bench_function(&format!("shift_256_words_by_{}", amount), |b| {
            b.iter_batched(
                || gen_words(256),
                |mut buffer| {
                    shift_in_place(&mut buffer, black_box(amount), ShiftDirection::Left);
                    shift_in_place(&mut buffer, black_box(amount), ShiftDirection::Right);
                    buffer
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_copy_range, bench_pack, bench_shift);
criterion_main!(benches);
