//! # Leader-Ack Benchmarks
//!
//! Throughput of the hot paths a follower runs for every received ack:
//!
//! | Path | Work |
//! |------|------|
//! | encode | fixed header + two short strings |
//! | decode | bounds-checked parse |
//! | sign | Ed25519 over the signable prefix |
//! | intake | decode + SHA-256 + dedup + verify |

use ack_codec::{
    encode_signed, AckIntake, AckIntakeApi, AckMessage, AckType, IntakeConfig,
    StaticKeyDirectory, PROTOCOL_VERSION,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use shared_crypto::{Ed25519KeyPair, MessageSigner};
use shared_types::Hash32;
use std::time::Duration;

fn random_ack(rng: &mut impl Rng, index: u32, addr_len: usize) -> AckMessage {
    AckMessage::builder(rng.gen(), index, AckType::FactoidTx)
        .chain_id(Hash32::from_bytes(rng.gen()))
        .affirmation(Hash32::from_bytes(rng.gen()))
        .serial_hash(rng.gen())
        .dblock_timestamp(rng.gen())
        .coinbase_timestamp(rng.gen())
        .source_node_id("leader1")
        .source_addr("a".repeat(addr_len))
        .build()
        .unwrap()
}

// ============================================================================
// Codec
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("ack-codec");
    group.measurement_time(Duration::from_secs(5));

    let key = Ed25519KeyPair::from_seed([0x01; 32]);
    let mut rng = rand::thread_rng();

    for addr_len in [0usize, 64, 255] {
        let mut ack = random_ack(&mut rng, 0, addr_len);
        ack.sign(&key).unwrap();
        let bytes = ack.encode(PROTOCOL_VERSION).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", addr_len), &ack, |b, ack| {
            b.iter(|| black_box(ack.encode(PROTOCOL_VERSION).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("decode", addr_len), &bytes, |b, bytes| {
            b.iter(|| black_box(AckMessage::decode(bytes, PROTOCOL_VERSION).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Signatures
// ============================================================================

fn bench_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("ack-signatures");

    let key = Ed25519KeyPair::from_seed([0x02; 32]);
    let public = key.public_key();
    let mut rng = rand::thread_rng();
    let mut ack = random_ack(&mut rng, 0, 16);

    group.bench_function("sign", |b| {
        b.iter(|| {
            ack.sign(&key).unwrap();
            black_box(&ack);
        })
    });

    ack.sign(&key).unwrap();
    group.bench_function("verify", |b| {
        b.iter(|| black_box(ack.verify(&public).is_ok()))
    });

    group.finish();
}

// ============================================================================
// Follower intake
// ============================================================================

fn bench_intake(c: &mut Criterion) {
    let mut group = c.benchmark_group("ack-intake");

    let key = Ed25519KeyPair::from_seed([0x03; 32]);
    let mut rng = rand::thread_rng();

    for batch in [100u32, 1_000] {
        let payloads: Vec<Vec<u8>> = (0..batch)
            .map(|i| {
                let mut ack = random_ack(&mut rng, i, 16);
                encode_signed(&mut ack, &key, PROTOCOL_VERSION).unwrap()
            })
            .collect();

        group.throughput(Throughput::Elements(u64::from(batch)));
        group.bench_with_input(BenchmarkId::new("receive", batch), &payloads, |b, payloads| {
            b.iter(|| {
                let directory = StaticKeyDirectory::new();
                directory.register("leader1", key.public_key());
                let intake = AckIntake::new(directory, IntakeConfig::default());
                for payload in payloads {
                    black_box(intake.receive(payload).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_signatures, bench_intake);
criterion_main!(benches);
