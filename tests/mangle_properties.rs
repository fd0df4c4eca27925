//! End-to-end property tests for `mangle_content`, driving it only through
//! the public API the way an external caller would.

use mangler::{mangle_content, rng_from_seed, Dictionary, MangleConfig, VecBuffer};

fn is_printable(buf: &[u8]) -> bool {
    buf.iter().all(|&b| (0x20..=0x7E).contains(&b))
}

#[test]
fn p1_size_invariant_holds_after_many_runs() {
    let dict = Dictionary::new(vec![b"token".to_vec()]);
    let config = MangleConfig {
        mutations_per_run: 6,
        only_printable: false,
    };
    for seed in 0..300u64 {
        let mut rng = rng_from_seed(seed);
        let mut buf = VecBuffer::new(vec![0; 20], 200).unwrap();
        mangle_content(&mut buf, &mut rng, &dict, &config);
        assert!(buf.size() >= 1);
        assert!(buf.size() <= buf.max_size());
    }
}

#[test]
fn p2_clamped_inputs_never_panic_on_tiny_buffers() {
    // a 1-byte buffer at its own max_size exercises every operator's
    // smallest legal offset/length range.
    let dict = Dictionary::new(vec![b"XY".to_vec()]);
    let config = MangleConfig {
        mutations_per_run: 6,
        only_printable: false,
    };
    for seed in 0..300u64 {
        let mut rng = rng_from_seed(seed);
        let mut buf = VecBuffer::new(vec![0x5A], 1).unwrap();
        mangle_content(&mut buf, &mut rng, &dict, &config);
        assert_eq!(buf.size(), 1);
    }
}

#[test]
fn p3_printable_seed_stays_printable_across_ten_thousand_runs() {
    let dict = Dictionary::new(vec![b"seed".to_vec(), b"!!!".to_vec()]);
    let config = MangleConfig {
        mutations_per_run: 6,
        only_printable: true,
    };
    let mut rng = rng_from_seed(4242);
    let mut buf = VecBuffer::new(vec![b'A'; 48], 256).unwrap();
    for _ in 0..10_000 {
        mangle_content(&mut buf, &mut rng, &dict, &config);
        assert!(is_printable(buf.as_slice()), "{:?}", buf.as_slice());
    }
}

#[test]
fn p4_zero_mutations_per_run_never_touches_the_buffer() {
    let dict = Dictionary::default();
    let config = MangleConfig {
        mutations_per_run: 0,
        only_printable: false,
    };
    let mut rng = rng_from_seed(1);
    let mut buf = VecBuffer::new(b"unchanged".to_vec(), 64).unwrap();
    mangle_content(&mut buf, &mut rng, &dict, &config);
    assert_eq!(buf.as_slice(), b"unchanged");
}

#[test]
fn p5_empty_dictionary_never_panics_and_never_grows_via_splice() {
    let dict = Dictionary::default();
    let config = MangleConfig {
        mutations_per_run: 6,
        only_printable: false,
    };
    for seed in 0..300u64 {
        let mut rng = rng_from_seed(seed);
        let mut buf = VecBuffer::new(vec![0; 10], 64).unwrap();
        mangle_content(&mut buf, &mut rng, &dict, &config);
        assert!(buf.size() >= 1 && buf.size() <= 64);
    }
}

#[test]
fn repeated_runs_never_exceed_max_size_even_from_near_ceiling() {
    let dict = Dictionary::new(vec![b"abcdefgh".to_vec()]);
    let config = MangleConfig {
        mutations_per_run: 6,
        only_printable: false,
    };
    for seed in 0..300u64 {
        let mut rng = rng_from_seed(seed);
        let mut buf = VecBuffer::new(vec![1; 30], 32).unwrap();
        for _ in 0..20 {
            mangle_content(&mut buf, &mut rng, &dict, &config);
            assert!(buf.size() <= 32);
        }
    }
}

#[test]
fn same_seed_same_config_is_deterministic() {
    let dict = Dictionary::new(vec![b"dict".to_vec()]);
    let config = MangleConfig::default();

    let mut rng_a = rng_from_seed(917);
    let mut buf_a = VecBuffer::new(vec![7; 16], 64).unwrap();
    mangle_content(&mut buf_a, &mut rng_a, &dict, &config);

    let mut rng_b = rng_from_seed(917);
    let mut buf_b = VecBuffer::new(vec![7; 16], 64).unwrap();
    mangle_content(&mut buf_b, &mut rng_b, &dict, &config);

    assert_eq!(buf_a.as_slice(), buf_b.as_slice());
}
