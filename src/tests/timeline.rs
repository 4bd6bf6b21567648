use crate::{
    prelude::{AngleKind, Duration, Error, Timeline},
    tests::{
        cosmos_target, init_logger, reference_epoch, t80s_site, FailingEphemeris,
        LinearEphemeris,
    },
};

use rstest::*;

#[rstest]
#[case(-100.0, 100.0, 201)]
#[case(-100.0, 1000.0, 1101)]
#[case(-1800.0, 1800.0, 1800)]
#[case(0.0, 3600.0, 2)]
#[case(-3.0, -1.0, 7)]
#[case(-0.5, 0.25, 3)]
fn linspace(#[case] t_min_s: f64, #[case] t_max_s: f64, #[case] n: usize) {
    let center = reference_epoch();
    let (t_min, t_max) = (
        Duration::from_seconds(t_min_s),
        Duration::from_seconds(t_max_s),
    );

    let instants = Timeline::linspace(center, t_min, t_max, n).unwrap();

    assert_eq!(instants.len(), n);
    assert_eq!(instants[0], center + t_min, "invalid first instant");
    assert_eq!(instants[n - 1], center + t_max, "invalid last instant");

    for pair in instants.windows(2) {
        assert!(pair[1] > pair[0], "instants should be strictly increasing");
    }

    // evenly spaced, to the nanosecond
    let step_s = (t_max_s - t_min_s) / (n - 1) as f64;
    for (i, t) in instants.iter().enumerate() {
        let expected_s = t_min_s + step_s * i as f64;
        let err_s = ((*t - center).to_seconds() - expected_s).abs();
        assert!(err_s < 1.0E-8, "instant #{} is off by {}s", i, err_s);
    }
}

#[rstest]
#[case(-100.0, 100.0, 0)]
#[case(-100.0, 100.0, 1)]
#[case(100.0, 100.0, 10)]
#[case(100.0, -100.0, 10)]
#[case(0.0, 1.0E-8, 100)]
fn invalid_window(#[case] t_min_s: f64, #[case] t_max_s: f64, #[case] n: usize) {
    let result = Timeline::linspace(
        reference_epoch(),
        Duration::from_seconds(t_min_s),
        Duration::from_seconds(t_max_s),
        n,
    );
    assert_eq!(result, Err(Error::InvalidWindow));
}

#[test]
fn aligned_samples() {
    init_logger();

    let center = reference_epoch();
    let half = Duration::from_seconds(100.0);
    let ephemeris = LinearEphemeris::centered(center, half, (40.0, 50.0), (100.0, 120.0));

    let timeline = Timeline::build(
        &ephemeris,
        &t80s_site(),
        &cosmos_target(),
        center,
        -half,
        half,
        201,
    )
    .unwrap();

    assert_eq!(timeline.len(), 201);
    assert_eq!(timeline.samples().len(), 201);
    assert_eq!(timeline.spacing(), Duration::from_seconds(1.0));

    let altitudes = timeline.angles(AngleKind::Altitude);
    let azimuths = timeline.angles(AngleKind::Azimuth);

    assert!((altitudes[0] - 40.0).abs() < 1.0E-9);
    assert!((altitudes[100] - 45.0).abs() < 1.0E-9);
    assert!((altitudes[200] - 50.0).abs() < 1.0E-9);
    assert!((azimuths[100] - 110.0).abs() < 1.0E-9);

    assert_eq!(timeline.instant(100), Some(center));
    assert_eq!(timeline.instant(201), None);
}

#[test]
fn ephemeris_failure() {
    init_logger();

    let result = Timeline::build(
        &FailingEphemeris {},
        &t80s_site(),
        &cosmos_target(),
        reference_epoch(),
        Duration::from_seconds(-10.0),
        Duration::from_seconds(10.0),
        21,
    );

    assert!(matches!(result, Err(Error::EphemerisFailure(_))));
}
