//! # Resolver Benchmark
//!
//! Address resolution and selector lookup sit on every chain call.
//!
//! Run with: `cargo bench --package castquest_chain`

// Benchmarks don't need strict docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use castquest_chain::registry::interface;
use castquest_chain::{AddressBook, ChainId, ContractName};

fn bench_resolve(c: &mut Criterion) {
    let book = AddressBook::PLACEHOLDER;

    c.bench_function("resolve_known_chain", |b| {
        b.iter(|| book.resolve(black_box(ChainId::BASE), black_box(ContractName::GameManager)));
    });

    c.bench_function("resolve_fallback_chain", |b| {
        b.iter(|| book.resolve(black_box(ChainId(999_999)), black_box(ContractName::QuestGear)));
    });
}

fn bench_selector_lookup(c: &mut Criterion) {
    let iface = interface(ContractName::QuestGear);
    let selector = iface.operations[5].selector();

    c.bench_function("operation_by_selector", |b| {
        b.iter(|| iface.operation_by_selector(black_box(selector)));
    });
}

criterion_group!(benches, bench_resolve, bench_selector_lookup);
criterion_main!(benches);
