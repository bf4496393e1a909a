use core::cell::Cell;
use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use korder::{Clock, K, LogicalClock};

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

struct FixedMockClock {
    t: u64,
    seq: Cell<u64>,
}

impl Clock for FixedMockClock {
    fn location(&self) -> u32 {
        0xdead_beef
    }

    fn tick(&self) -> (u64, u64) {
        let s = self.seq.get();
        self.seq.set(s + 1);
        (self.t, s)
    }
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function("global/mock", |b| {
        let clock = FixedMockClock {
            t: 1 << 40,
            seq: Cell::new(0),
        };
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(K::global(&clock, None));
            }
        });
    });

    group.bench_function("local/mock", |b| {
        let clock = FixedMockClock {
            t: 1 << 40,
            seq: Cell::new(0),
        };
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(K::local(&clock, None));
            }
        });
    });

    group.bench_function("global/wall-clock", |b| {
        let clock = LogicalClock::new();
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(K::global(&clock, None));
            }
        });
    });

    group.finish();
}

fn bench_codecs(c: &mut Criterion) {
    let clock = LogicalClock::new();
    let id = K::global(&clock, None);

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(1));

    group.bench_function("bytes/encode", |b| {
        b.iter(|| black_box(black_box(&id).to_bytes()))
    });
    group.bench_function("bytes/decode", |b| {
        let bytes = id.to_bytes();
        b.iter(|| black_box(K::from_bytes(black_box(&bytes)).unwrap()))
    });
    group.bench_function("string/encode", |b| {
        b.iter(|| black_box(black_box(&id).to_string()))
    });
    group.bench_function("string/decode", |b| {
        let text = id.to_string();
        b.iter(|| black_box(text.parse::<K>().unwrap()))
    });
    group.bench_function("base62/encode", |b| {
        b.iter(|| black_box(black_box(&id).to_base62()))
    });
    group.bench_function("base62/decode", |b| {
        let text = id.to_base62();
        b.iter(|| black_box(K::from_base62(black_box(&text)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_allocation, bench_codecs);
criterion_main!(benches);
