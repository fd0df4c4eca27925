use criterion::{criterion_group, criterion_main, Criterion};
use mangler::{mangle_content, rng_from_seed, Dictionary, MangleConfig, VecBuffer};

pub fn bench_mangle(c: &mut Criterion) {
    let dict = Dictionary::new(vec![b"GET / HTTP/1.1".to_vec(), b"\xff\xff\xff\xff".to_vec()]);
    let config = MangleConfig::default();
    let mut rng = rng_from_seed(0);

    c.bench_function("mangle_content 4KiB", |b| {
        b.iter(|| {
            let mut buf = VecBuffer::new(vec![0x41; 4096], 8192).unwrap();
            mangle_content(&mut buf, &mut rng, &dict, &config);
        })
    });
}

criterion_group!(benches, bench_mangle);
criterion_main!(benches);
