use criterion::{black_box, criterion_group, Criterion, Throughput};

use ast_builder::{NodeBuilder, Options, ParserState};
use ast_common::{BytePos, Position};

const NODES: u32 = 10_000;

fn bench(c: &mut Criterion) {
    let configs = [
        ("plain", Options::default()),
        (
            "ranges",
            Options {
                ranges: true,
                ..Options::default()
            },
        ),
        (
            "lenient",
            Options {
                lenient: true,
                ..Options::default()
            },
        ),
    ];

    let mut group = c.benchmark_group("node_builder");
    group.throughput(Throughput::Elements(NODES as u64));

    for (id, opts) in configs.iter() {
        group.bench_with_input(*id, opts, |b, opts| {
            b.iter(|| {
                let mut builder = NodeBuilder::new(opts.clone());
                let mut state = ParserState::default();
                for i in 0..NODES {
                    state.start = BytePos(i * 8);
                    state.start_loc = Position::new(i + 1, 0);
                    state.last_tok_end = state.start + BytePos(7);
                    state.last_tok_end_loc = Position::new(i + 1, 7);

                    let node = builder.start_node(&state);
                    black_box(builder.finish_node(&state, node, "Identifier"));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
