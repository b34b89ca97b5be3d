//! Unit tests for session configuration parsing.

use std::collections::HashMap;

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

fn key_file(len: usize) -> NamedTempFile {
    let file = NamedTempFile::new().expect("create key file");
    std::fs::write(file.path(), vec![b'k'; len]).expect("write key file");
    file
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn release_vars(key_path: &std::path::Path) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key_path.to_string_lossy().into_owned()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

#[fixture]
fn release_key() -> NamedTempFile {
    key_file(SESSION_KEY_MIN_LEN)
}

#[rstest]
fn release_accepts_complete_configuration(release_key: NamedTempFile) {
    let env = mock_env(release_vars(release_key.path()));
    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("valid release settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_rejects_missing_toggles(release_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(release_key.path());
    vars.remove(missing);

    let result = session_settings_from_env(&mock_env(vars), BuildMode::Release);
    assert!(matches!(
        result,
        Err(SessionConfigError::MissingEnv { name }) if name == missing
    ));
}

#[rstest]
#[case("maybe")]
#[case("")]
fn release_rejects_malformed_booleans(release_key: NamedTempFile, #[case] value: &str) {
    let mut vars = release_vars(release_key.path());
    vars.insert(COOKIE_SECURE_ENV, value.to_owned());

    let result = session_settings_from_env(&mock_env(vars), BuildMode::Release);
    assert!(matches!(result, Err(SessionConfigError::InvalidEnv { .. })));
}

#[rstest]
fn release_rejects_insecure_same_site_none(release_key: NamedTempFile) {
    let mut vars = release_vars(release_key.path());
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());

    let result = session_settings_from_env(&mock_env(vars), BuildMode::Release);
    assert!(matches!(result, Err(SessionConfigError::InsecureSameSiteNone)));
}

#[rstest]
fn release_rejects_ephemeral_keys(release_key: NamedTempFile) {
    let mut vars = release_vars(release_key.path());
    vars.insert(ALLOW_EPHEMERAL_ENV, "1".to_owned());

    let result = session_settings_from_env(&mock_env(vars), BuildMode::Release);
    assert!(matches!(result, Err(SessionConfigError::EphemeralNotAllowed)));
}

#[rstest]
fn release_rejects_short_keys() {
    let short = key_file(SESSION_KEY_MIN_LEN - 1);
    let result = session_settings_from_env(&mock_env(release_vars(short.path())), BuildMode::Release);
    assert!(matches!(
        result,
        Err(SessionConfigError::KeyTooShort { length, .. }) if length == SESSION_KEY_MIN_LEN - 1
    ));
}

#[rstest]
fn release_requires_a_readable_key_file() {
    let missing = std::env::temp_dir().join("blog-session-key-that-does-not-exist");
    let result =
        session_settings_from_env(&mock_env(release_vars(&missing)), BuildMode::Release);
    assert!(matches!(result, Err(SessionConfigError::KeyRead { .. })));
}

#[rstest]
fn debug_defaults_fill_every_gap() {
    let mut vars = HashMap::new();
    vars.insert(
        KEY_FILE_ENV,
        std::env::temp_dir()
            .join("blog-session-key-that-does-not-exist")
            .to_string_lossy()
            .into_owned(),
    );

    let settings = session_settings_from_env(&mock_env(vars), BuildMode::Debug)
        .expect("debug settings fall back");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_honours_explicit_ephemeral_opt_out() {
    let vars = HashMap::from([
        (
            KEY_FILE_ENV,
            std::env::temp_dir()
                .join("blog-session-key-that-does-not-exist")
                .to_string_lossy()
                .into_owned(),
        ),
        (ALLOW_EPHEMERAL_ENV, "no".to_owned()),
    ]);

    let result = session_settings_from_env(&mock_env(vars), BuildMode::Debug);
    assert!(matches!(result, Err(SessionConfigError::KeyRead { .. })));
}

#[rstest]
#[case("lax", SameSite::Lax)]
#[case("STRICT", SameSite::Strict)]
#[case("bogus", SameSite::Lax)]
fn debug_same_site_parsing(release_key: NamedTempFile, #[case] raw: &str, #[case] expected: SameSite) {
    let mut vars = release_vars(release_key.path());
    vars.insert(SAMESITE_ENV, raw.to_owned());

    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug settings");
    assert_eq!(settings.same_site, expected);
}
