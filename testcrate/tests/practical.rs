use msqrt::{
    bw,
    msqrt_engine::{
        select_digit, Advisory, ConfigError, IndexOverride, PracticalEngine, Samples,
    },
    run_practical, EngineError, PracticalConfig, Problem, Register, Step,
};
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

#[test]
fn practical_set_one() {
    let config = PracticalConfig::default();
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let runs = 256;
    let mut aborted = 0;
    for _ in 0..runs {
        let problem = Problem::random(20, &mut rng).unwrap();
        let report = match run_practical(&config, &problem, &mut ()) {
            Ok(report) => report,
            // set 1 stores digits of 4, which in rare cases get selected
            Err(EngineError::DigitOutOfRange { digit, .. }) => {
                assert_eq!(digit.abs(), 4);
                aborted += 1;
                continue
            }
            Err(e) => panic!("{problem:?}: {e:?}"),
        };
        assert_eq!(report.residuals_agree(), Some(true));
        let oracle = report.oracle.as_ref().unwrap();
        assert!(oracle.residual_zero && oracle.root_recovered);
        assert!(!(oracle.overflow || oracle.underflow));
        if !report.is_success() || report.is_degraded() {
            panic!("{problem:?}: {report:?}");
        }
        assert_eq!(report.digits.len(), 13);
        assert!(report.digits.iter().all(|d| (-3..=3).contains(d)));
        // digits before delta are zero, the one at delta is positive
        assert_eq!(&report.digits[..2], &[0, 0]);
        assert!(report.digits[2] > 0);
        assert_eq!(report.advisories, vec![Advisory::RootDigitCount {
            expected: 13,
            found: 12
        }]);
    }
    assert!(aborted < runs / 32);
}

#[test]
fn practical_trace() {
    let config = PracticalConfig::default();
    let x = Register::from_u128(bw(10), 0b11_0101_1001);
    let y = Register::from_u128(bw(10), 0b10_1110_0111);
    let problem = Problem::from_seeds(bw(20), &x, &y).unwrap();
    let mut steps: Vec<Step> = vec![];
    let report = run_practical(&config, &problem, &mut steps).unwrap();
    assert!(report.is_success());
    assert_eq!(steps.len(), 13);
    assert_eq!(report.digits.as_slice(), &[0, 0, 2, 2, -1, -1, 2, -1, 1, 1, -1, 3, 0]);
    assert_eq!(report.root.to_u128(), Some(857 * 743));
    for (step, d) in steps.iter().zip(report.digits.iter()) {
        assert_eq!(step.selected_digit, Some(*d));
        assert!(step.practical_residual.is_some() && step.practical_root.is_some());
    }
    let last = steps.last().unwrap();
    assert!(last.residual.is_zero());
    assert!(last.practical_residual.as_ref().unwrap().is_zero());
    // the converted root is the precomputed root, both padded by one digit
    assert_eq!(
        last.practical_root.as_ref().unwrap().compare(&last.root),
        std::cmp::Ordering::Equal
    );

    let mut engine = PracticalEngine::new(&config, &problem).unwrap();
    while !engine.is_done() {
        engine.step(&mut ()).unwrap();
    }
    assert!(engine.residual().is_zero());
    assert_eq!(engine.root().compare(&last.root), std::cmp::Ordering::Equal);
    assert_eq!(engine.run(&mut ()).unwrap(), report);
}

#[test]
fn practical_wide_storage() {
    let config = PracticalConfig::default();
    let x = Register::from_u128(bw(10), 0b11_0101_1001);
    let y = Register::from_u128(bw(10), 0b10_1110_0111);
    let narrow = Problem::from_seeds(bw(20), &x, &y).unwrap();
    let widened = |r: &Register| {
        let mut res = Register::zero(bw(64));
        res.load(r, 0).unwrap();
        res
    };
    let wide = Problem::new(widened(narrow.a()), widened(narrow.b()), widened(narrow.s()));
    assert!(wide.verify().unwrap());
    let expected = run_practical(&config, &narrow, &mut ()).unwrap();
    let report = run_practical(&config, &wide, &mut ()).unwrap();
    assert!(report.is_success());
    assert_eq!(report.residuals_agree(), Some(true));
    assert_eq!(report.digits, expected.digits);
    assert_eq!(report.root.to_u128(), Some(857 * 743));
}

fn samples(region: i128, root: u128) -> Samples {
    Samples {
        residual: Register::from_i128(bw(7), region),
        root: Register::from_u128(bw(4), root),
        leading: Register::zero(bw(3)),
    }
}

#[test]
fn table_bounds() {
    let mut config = PracticalConfig::default();
    // the symmetric fold negates the mirrored digit
    assert_eq!(select_digit(&config, 3, 4, &samples(13, 0b010)), Ok(2));
    assert_eq!(select_digit(&config, 3, 4, &samples(-13, 0b010)), Ok(-2));
    // region 31 lands on row 1, which stores a 4 in the first column
    assert_eq!(
        select_digit(&config, 3, 4, &samples(31, 0b000)),
        Err(EngineError::DigitOutOfRange {
            iteration: 4,
            digit: 4
        })
    );
    config.beta = 4;
    assert_eq!(select_digit(&config, 3, 4, &samples(31, 0b000)), Ok(4));

    config.symmetric = false;
    assert_eq!(
        select_digit(&config, 3, 4, &samples(-11, 0b011)),
        Err(EngineError::TableIndex {
            iteration: 4,
            row: 43,
            col: 3
        })
    );
    assert_eq!(select_digit(&config, 3, 4, &samples(11, 0b011)), Ok(1));
}

#[test]
fn overrides() {
    let mut config = PracticalConfig::default();
    // row 21 is [3, 2, 2, 1]
    assert_eq!(select_digit(&config, 3, 6, &samples(11, 0b011)), Ok(1));
    config.overrides = vec![IndexOverride::new(6, 4, 1)];
    assert_eq!(select_digit(&config, 3, 6, &samples(11, 0b011)), Ok(3));
    // only on the named iteration
    assert_eq!(select_digit(&config, 3, 5, &samples(11, 0b011)), Ok(1));
    // an override past the table is a table index fault
    config.overrides = vec![IndexOverride::new(6, 4, 5)];
    assert_eq!(
        select_digit(&config, 3, 6, &samples(11, 0b011)),
        Err(EngineError::TableIndex {
            iteration: 6,
            row: 21,
            col: 4
        })
    );
}

#[test]
fn practical_contract_errors() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(1);
    let problem = Problem::random(20, &mut rng).unwrap();
    let config = PracticalConfig {
        z: 1,
        ..Default::default()
    };
    assert_eq!(
        run_practical(&config, &problem, &mut ()),
        Err(EngineError::Config(ConfigError::GuardBelowRadix { z: 1, m: 2 }))
    );
    let config = PracticalConfig {
        ns: 1,
        ..Default::default()
    };
    assert_eq!(
        run_practical(&config, &problem, &mut ()),
        Err(EngineError::Config(ConfigError::SampleTooNarrow))
    );
}
