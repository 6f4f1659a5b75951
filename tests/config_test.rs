use anyhow::Result;
use tdd_drills::config::MAX_START;
use tdd_drills::utils::validation::Validate;
use tdd_drills::{CountdownOverrides, CountdownSettings, DrillError, DrillsConfig, Sleeper};
use tempfile::TempDir;

struct NoopSleeper;

impl Sleeper for NoopSleeper {
    fn sleep(&mut self) {}
}

#[derive(Default)]
struct CountingSleeper {
    calls: usize,
}

impl Sleeper for CountingSleeper {
    fn sleep(&mut self) {
        self.calls += 1;
    }
}

#[test]
fn test_config_file_drives_the_countdown() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("drills.toml");
    std::fs::write(
        &config_path,
        r#"
[countdown]
start = 4
final_word = "Lift off"
pause_ms = 0
"#,
    )?;

    let file = DrillsConfig::from_file(&config_path)?;
    let settings = CountdownSettings::resolve(Some(&file), CountdownOverrides::default());
    settings.validate()?;

    let mut buffer = Vec::new();
    settings.countdown().run(&mut buffer, &mut NoopSleeper)?;

    assert_eq!(String::from_utf8(buffer)?, "4\n3\n2\n1\nLift off");
    Ok(())
}

#[test]
fn test_environment_placeholders_are_substituted() -> Result<()> {
    std::env::set_var("TDD_DRILLS_TEST_FINAL_WORD", "Blast off");

    let file = DrillsConfig::from_toml_str(
        r#"
[countdown]
final_word = "${TDD_DRILLS_TEST_FINAL_WORD}"
"#,
    )?;

    assert_eq!(file.countdown.final_word.as_deref(), Some("Blast off"));
    Ok(())
}

#[test]
fn test_missing_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = DrillsConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();

    assert!(matches!(err, DrillError::ConfigError { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_values_fail_validation() -> Result<()> {
    let file = DrillsConfig::from_toml_str("[countdown]\nstart = 0\n")?;
    let settings = CountdownSettings::resolve(Some(&file), CountdownOverrides::default());

    let err = settings.validate().unwrap_err();
    match err {
        DrillError::InvalidConfigValueError { field, .. } => assert_eq!(field, "countdown.start"),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn test_start_above_limit_is_rejected() {
    let settings = CountdownSettings::resolve(
        None,
        CountdownOverrides {
            start: Some(u32::MAX),
            pause_ms: Some(0),
            ..Default::default()
        },
    );

    match settings.validate().unwrap_err() {
        DrillError::InvalidConfigValueError { field, value, .. } => {
            assert_eq!(field, "countdown.start");
            assert_eq!(value, u32::MAX.to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_start_at_limit_is_accepted() -> Result<()> {
    let settings = CountdownSettings::resolve(
        None,
        CountdownOverrides {
            start: Some(MAX_START),
            pause_ms: Some(0),
            ..Default::default()
        },
    );
    settings.validate()?;

    let mut sleeper = CountingSleeper::default();
    settings.countdown().run(&mut std::io::sink(), &mut sleeper)?;

    assert_eq!(sleeper.calls, MAX_START as usize);
    Ok(())
}
