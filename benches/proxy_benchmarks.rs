// Performance benchmarks for the announce proxy
// Run with: cargo bench

use std::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ratio_ghost::bencode::bencode::decode;
use ratio_ghost::config::structs::policy_config::PolicyConfig;
use ratio_ghost::proxy::proxy::intercept;
use ratio_ghost::swarm::structs::swarm_id::SwarmId;
use ratio_ghost::swarm::structs::swarm_state::SwarmState;

const ANNOUNCE: &str = "GET http://tracker.example:6969/announce?info_hash=%12%34%56%78%9A%BC%DE%F0%12%34%56%78%9A%BC%DE%F0%12%34%56%78&peer_id=-UT3500-abcdefghijkl&port=6881&uploaded=123456789&downloaded=987654321&left=0&corrupt=0&key=ABCDEF&event=started&numwant=200&compact=1&no_peer_id=1 HTTP/1.1\r\nHost: tracker.example:6969\r\nUser-Agent: uTorrent/3500\r\nAccept-Encoding: gzip\r\nConnection: Close\r\n\r\n";

fn bench_intercept(c: &mut Criterion) {
    let policy = PolicyConfig::default();
    let mut group = c.benchmark_group("intercept");
    for known in [0usize, 1_000, 100_000] {
        let swarms = SwarmState::new();
        for index in 0..known {
            swarms.set(SwarmId(format!("swarm-{index}")), index as i64);
        }
        group.bench_with_input(BenchmarkId::new("known_swarms", known), &swarms, |b, swarms| {
            b.iter(|| intercept(black_box(ANNOUNCE), swarms, &policy))
        });
    }
    group.finish();
}

fn bench_decode_reply(c: &mut Criterion) {
    let mut reply = b"d8:completei120e10:incompletei33e8:intervali1800e12:min intervali900e5:peers".to_vec();
    let peers = vec![7u8; 6 * 200];
    reply.extend_from_slice(format!("{}:", peers.len()).as_bytes());
    reply.extend_from_slice(&peers);
    reply.push(b'e');

    c.bench_function("decode_reply", |b| b.iter(|| decode(black_box(&reply))));
}

criterion_group!(benches, bench_intercept, bench_decode_reply);
criterion_main!(benches);
