use crate::prelude::{AngleKind, BracketOpts, Config, Duration, Error, GridFitOpts, Strategy};

use rstest::*;

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.angle, AngleKind::Altitude);
    assert_eq!(cfg.strategy, Strategy::GridFit(GridFitOpts::narrow()));
    assert!(cfg.validate().is_ok());
}

#[test]
fn presets() {
    let narrow = GridFitOpts::narrow();
    assert_eq!(
        narrow.time_range,
        (Duration::from_seconds(-100.0), Duration::from_seconds(100.0))
    );
    assert_eq!(narrow.samples, 201);
    assert_eq!(narrow.degree, 2);
    assert_eq!(narrow, GridFitOpts::default().per_second(-100, 100));

    let wide = GridFitOpts::wide();
    assert_eq!(
        wide.time_range,
        (Duration::from_seconds(-1800.0), Duration::from_seconds(1800.0))
    );
    assert_eq!(wide.samples, 1800);
    assert_eq!(wide.degree, 3);

    let bracket = BracketOpts::default();
    assert_eq!(bracket.anchor_spacing, Duration::from_seconds(600.0));
    assert_eq!(bracket.n_grid_points, 1800);

    let cfg = Config::bracketed_root_preset();
    assert_eq!(cfg.angle, AngleKind::Altitude);
    assert!(cfg.validate().is_ok());
}

#[test]
fn asymmetric_per_second() {
    let opts = GridFitOpts::wide().per_second(-100, 1000);
    assert_eq!(opts.samples, 1101);
    assert_eq!(opts.degree, 3);
    assert!(Config::grid_fit_preset(AngleKind::Azimuth, opts)
        .validate()
        .is_ok());
}

#[rstest]
#[case(GridFitOpts::narrow().per_second(0, 0), Error::InvalidWindow)]
#[case(GridFitOpts::narrow().per_second(100, -100), Error::InvalidWindow)]
#[case(GridFitOpts::narrow().with_degree(0), Error::InvalidDegree)]
#[case(GridFitOpts::narrow().with_degree(201), Error::InvalidDegree)]
#[case(GridFitOpts::narrow().per_second(0, 2).with_degree(3), Error::InvalidDegree)]
fn invalid_grid_fit(#[case] opts: GridFitOpts, #[case] expected: Error) {
    let cfg = Config::grid_fit_preset(AngleKind::Altitude, opts);
    assert_eq!(cfg.validate(), Err(expected));
}

#[test]
fn invalid_bracketed() {
    let mut cfg = Config::bracketed_root_preset();
    cfg.angle = AngleKind::Azimuth;
    assert_eq!(cfg.validate(), Err(Error::InvalidStrategy));

    let cfg = Config {
        angle: AngleKind::Altitude,
        strategy: Strategy::BracketedRoot(BracketOpts {
            anchor_spacing: Duration::ZERO,
            n_grid_points: 1800,
        }),
    };
    assert_eq!(cfg.validate(), Err(Error::InvalidWindow));
}

#[test]
#[cfg(feature = "serde")]
fn deserialize() {
    let content = r#"{
        "angle": "Azimuth",
        "strategy": {
            "GridFit": {
                "degree": 3
            }
        }
    }"#;

    let cfg: Config = serde_json::from_str(content).unwrap();
    assert_eq!(cfg.angle, AngleKind::Azimuth);
    assert_eq!(
        cfg.strategy,
        Strategy::GridFit(GridFitOpts::narrow().with_degree(3))
    );

    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());

    let cfg: Config = serde_json::from_str(r#"{"strategy": {"BracketedRoot": {}}}"#).unwrap();
    assert_eq!(cfg, Config::bracketed_root_preset());
}
