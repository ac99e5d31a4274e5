use super::*;

fn lookup<'a>(pairs: &'a [(&str, &str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |var| {
        pairs
            .iter()
            .find(|(name, _)| *name == var)
            .map(|(_, value)| value.to_string())
    }
}

#[test]
fn unset_variables_keep_defaults() {
    let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, DemoConfig::default());
    assert_eq!(config.rows, 3);
}

#[test]
fn reads_every_variable() {
    let config = DemoConfig::from_lookup(lookup(&[
        (ROWS_VAR, "5"),
        (WIDTH_VAR, " 800 "),
        (HEIGHT_VAR, "600.5"),
    ]))
    .unwrap();

    assert_eq!(config, DemoConfig::default().with_rows(5).with_size(800.0, 600.5));
}

#[test]
fn zero_rows_are_rejected() {
    let err = DemoConfig::from_lookup(lookup(&[(ROWS_VAR, "0")])).unwrap_err();
    assert_eq!(err, ConfigError::ZeroRows { var: ROWS_VAR });
}

#[test]
fn negative_rows_do_not_parse() {
    let err = DemoConfig::from_lookup(lookup(&[(ROWS_VAR, "-2")])).unwrap_err();
    assert!(matches!(err, ConfigError::Unparsable { var: ROWS_VAR, .. }));
    assert_eq!(err.to_string(), "COMPOSELAB_ROWS=\"-2\" is not a valid row count");
}

#[test]
fn sizes_must_be_positive_and_finite() {
    for bad in ["0", "-10", "inf", "NaN"] {
        let err = DemoConfig::from_lookup(lookup(&[(WIDTH_VAR, bad)])).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidSize { var: WIDTH_VAR, .. }),
            "{bad}: {err}"
        );
    }
}

#[test]
fn garbage_size_is_unparsable() {
    let err = DemoConfig::from_lookup(lookup(&[(HEIGHT_VAR, "tall")])).unwrap_err();
    assert!(matches!(err, ConfigError::Unparsable { var: HEIGHT_VAR, .. }));
}
