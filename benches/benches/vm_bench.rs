//! # VM Benchmarks
//!
//! Measures performance of the Rainbow VM: decoding, construction, and
//! straight-line execution.
//!
//! Run: `cargo bench --bench vm_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rainbow_core::{Instruction, Interpreter, IoAdapter, OutputMode, VmConfig};
use std::io::Cursor;

fn silent_io() -> IoAdapter<Cursor<Vec<u8>>, Vec<u8>> {
    IoAdapter::new(Cursor::new(Vec::new()), Vec::new(), OutputMode::Ascii)
}

/// Benchmark instruction word decoding
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("immediate", |b| {
        b.iter(|| Instruction::decode(black_box("A0002A")).unwrap())
    });

    group.bench_function("indirect", |b| {
        b.iter(|| Instruction::decode(black_box("200104")).unwrap())
    });

    group.finish();
}

/// Benchmark interpreter construction with different tape sizes
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let program: Vec<String> = vec!["000000".to_string()];

    group.bench_function("default_tape", |b| {
        let config = VmConfig::default();
        b.iter(|| {
            black_box(Interpreter::with_io(
                program.clone(),
                &config,
                silent_io(),
            ))
        })
    });

    group.bench_function("small_tape", |b| {
        let config = VmConfig {
            tape_cells: 256,
            ..VmConfig::default()
        };
        b.iter(|| {
            black_box(Interpreter::with_io(
                program.clone(),
                &config,
                silent_io(),
            ))
        })
    });

    group.finish();
}

/// Benchmark straight-line arithmetic execution
fn bench_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution");

    let mut program: Vec<String> = Vec::with_capacity(1025);
    for _ in 0..1024 {
        program.push("A00001".to_string());
    }
    program.push("000000".to_string());

    let config = VmConfig::default();

    group.bench_function("add_1k", |b| {
        b.iter(|| {
            let mut vm =
                Interpreter::with_io(black_box(program.clone()), &config, silent_io());
            vm.execute().unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_construction, bench_execution);
criterion_main!(benches);
