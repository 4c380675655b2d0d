use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tagver::prelude::*;

fn canonical_inputs() -> Vec<&'static str> {
    vec![
        "1.2.3",
        "0.101.9561",
        "1.2.3-alpha4+aabbccd",
        "1.2.3-alpha4+aabbccd.dirty",
    ]
}

fn parse_canonical_ok(inputs: &[&str]) {
    for input in inputs {
        let res = Canonical::parse(input);
        assert!(res.is_ok());
    }
}

fn porcelain_inputs() -> Vec<&'static str> {
    vec![
        "v1.2.3",
        "v0.101.9561",
        "v1.2.3-4-gaabbccd",
        "v1.2.3-4-gaabbccd.dirty",
    ]
}

fn parse_porcelain_ok(inputs: &[&str]) {
    for input in inputs {
        let res = GitPorcelain::parse(input);
        assert!(res.is_ok());
    }
}

fn serialize_canonical(versions: &[Version]) {
    for version in versions {
        let text = Canonical::serialize(version);
        assert!(!text.is_empty());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_canonical_ok", |b| {
        b.iter(|| parse_canonical_ok(black_box(&canonical_inputs())))
    });
    c.bench_function("parse_porcelain_ok", |b| {
        b.iter(|| parse_porcelain_ok(black_box(&porcelain_inputs())))
    });

    let versions = vec![
        Version::release(1, 2, 3),
        Version::pre_release(Release::new(1, 2, 3), 4, "aabbccd").unwrap(),
        Version::dirty(Version::pre_release(Release::new(1, 2, 3), 4, "aabbccd").unwrap()),
    ];
    c.bench_function("serialize_canonical", |b| {
        b.iter(|| serialize_canonical(black_box(&versions)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
