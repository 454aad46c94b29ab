//! Benchmarks for the Enigma cipher engine.
//!
//! Measures machine construction, streaming encode throughput and the cost
//! of tracing relative to plain encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_sim::Machine;

const ROTORS: [&str; 3] = ["Rotor I", "Rotor II", "Rotor III"];
const PLUGBOARD: &str = "AB,CD,EF,GH,IJ,KL,MN,OP,QR,ST";

/// Builds a letters-only message of `len` bytes.
fn message(len: usize) -> String {
    "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Benchmarks `Machine::new()`, including catalog lookup and plugboard parsing.
fn bench_machine_new(c: &mut Criterion) {
    c.bench_function("machine_new", |b| {
        b.iter(|| Machine::new(black_box(ROTORS), black_box([3, 7, 11]), black_box(PLUGBOARD)).unwrap());
    });
}

/// Benchmarks `encode()` across message lengths.
///
/// The machine is built once and keeps stepping between iterations, like
/// a long streaming session.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &len in &[16usize, 256, 4096] {
        let text = message(len);
        let mut machine = Machine::new(ROTORS, [0, 0, 0], PLUGBOARD).unwrap();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| machine.encode(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmarks `trace()` on the same input as the 256-byte encode case.
fn bench_trace(c: &mut Criterion) {
    let text = message(256);
    let mut machine = Machine::new(ROTORS, [0, 0, 0], PLUGBOARD).unwrap();

    let mut group = c.benchmark_group("trace");
    group.throughput(Throughput::Bytes(256));
    group.bench_function("256", |b| {
        b.iter(|| machine.trace(black_box(&text)));
    });
    group.finish();
}

criterion_group!(benches, bench_machine_new, bench_encode, bench_trace);
criterion_main!(benches);
