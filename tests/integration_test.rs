use poly_real_roots::{
    __testing::{check_real_roots, is_strictly_ascending},
    poly,
    roots::Config,
    Error, Poly, Poly64,
};

fn init_logging() {
    // tests run in parallel, only the first one gets to install the logger
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init();
}

/// the examples everybody tries first
#[test]
fn small_degrees() {
    init_logging();
    assert!(matches!(poly![0.0].real_roots(), Err(Error::InfiniteRoots)));
    assert!(poly![5.0].real_roots().unwrap().is_empty());
    assert_eq!(poly![-6.0, 2.0].real_roots().unwrap(), vec![3.0]);
    assert!(poly![1.0, 0.0, 1.0].real_roots().unwrap().is_empty());
    assert_eq!(poly![-6.0, 1.0, 1.0].real_roots().unwrap(), vec![-3.0, 2.0]);
    assert_eq!(poly![0.0, 0.0, 0.0, 1.0].real_roots().unwrap(), vec![0.0]);
}

#[test]
fn trailing_zeros_are_ignored() {
    init_logging();
    let p = Poly::new(&[-6.0, 2.0, 0.0, 0.0]);
    assert_eq!(p.degree(), 1);
    assert_eq!(p.real_roots().unwrap(), vec![3.0]);
}

#[test]
fn composed_polynomial() {
    init_logging();
    // (x - 2)^3 * (x + 1)
    let p = poly![-2.0, 1.0].try_pow(3).unwrap() * poly![1.0, 1.0];
    assert_eq!(p.degree(), 4);
    assert_eq!(p.to_string(), "-8 + 4*X^1 + 6*X^2 - 5*X^3 + 1*X^4");
    let roots = p.real_roots().unwrap();
    assert!(check_real_roots(&roots, &[-1.0, 2.0], 1E-6), "{roots:?}");
}

#[test]
fn complex_factors_are_skipped() {
    init_logging();
    // (x^2 + 1)^2 * (x - 0.5) * (x - 3)
    let p = poly![1.0, 0.0, 1.0].pow(2) * Poly::from_roots(&[0.5, 3.0]);
    let roots = p.real_roots().unwrap();
    assert!(check_real_roots(&roots, &[0.5, 3.0], 1E-10), "{roots:?}");
}

#[test]
fn wilkinson() {
    init_logging();
    for n in 1..=10 {
        let expected = (1..=n).map(f64::from).collect::<Vec<_>>();
        let p = Poly64::from_roots(&expected);
        let roots = p.real_roots().unwrap();
        assert!(is_strictly_ascending(&roots), "{roots:?}");
        assert!(check_real_roots(&roots, &expected, 1E-8), "n = {n}: {roots:?}");
    }
}

#[test]
fn idempotent() {
    init_logging();
    let p = Poly::from_roots(&[-7.25, -0.5, 1.0 / 3.0, 4.0]) * poly![2.0, 1.0, 1.0];
    let first = p.real_roots().unwrap();
    for _ in 0..10 {
        assert_eq!(p.real_roots().unwrap(), first);
    }
}

#[test]
fn roots_are_zeros_or_sign_changes() {
    init_logging();
    let p: Poly64 = Poly::from_roots(&[-2.5, -1.0 / 7.0, 0.3, 6.0]).scaled(-1.5);
    for r in p.real_roots().unwrap() {
        let (below, at, above) = (p.eval(r - 1E-9), p.eval(r), p.eval(r + 1E-9));
        assert!(
            at == 0.0 || below.signum() != above.signum(),
            "{r} is not a root of {p}"
        );
    }
}

#[test]
fn explicit_config() {
    init_logging();
    let p = Poly::from_roots(&[-100.0, 250.0]);
    let roots = p
        .real_roots_with(&Config::new().with_max_iter(1000))
        .unwrap();
    assert!(check_real_roots(&roots, &[-100.0, 250.0], 1E-9), "{roots:?}");
}
