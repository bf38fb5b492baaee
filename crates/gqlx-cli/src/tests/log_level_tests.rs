use crate::DEFAULT_LOG_LEVEL;
use crate::choose_log_level;
use pretty_assertions::assert_eq;
use tracing::Level;

/// Verifies that `-v` selects debug output whatever `LOG_LEVEL` says.
#[test]
fn verbose_flag_wins() {
    assert_eq!(choose_log_level(true, Some("error")), (Level::DEBUG, None));
    assert_eq!(choose_log_level(true, None), (Level::DEBUG, None));
}

/// Verifies that `LOG_LEVEL` is read case-insensitively, with `VERBOSE` as
/// an alias for debug.
#[test]
fn reads_env_level() {
    assert_eq!(choose_log_level(false, Some("trace")), (Level::TRACE, None));
    assert_eq!(choose_log_level(false, Some(" Debug ")), (Level::DEBUG, None));
    assert_eq!(choose_log_level(false, Some("VERBOSE")), (Level::DEBUG, None));
    assert_eq!(choose_log_level(false, Some("warn")), (Level::WARN, None));
}

/// Verifies that a missing or unknown value falls back to the default, and
/// only the unknown one warns.
#[test]
fn falls_back_to_default() {
    assert_eq!(choose_log_level(false, None), (DEFAULT_LOG_LEVEL, None));
    assert_eq!(choose_log_level(false, Some("")), (DEFAULT_LOG_LEVEL, None));
    assert_eq!(
        choose_log_level(false, Some("loud")),
        (
            DEFAULT_LOG_LEVEL,
            Some("Invalid `LOG_LEVEL` environment variable value: `loud`".to_string()),
        ),
    );
}
