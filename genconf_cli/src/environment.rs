//! Environment assembly from process variables and flags.

use figment::providers::Env;
use genconf::Environment;

/// Prefix of process variables that contribute dimensions.
pub const DIMENSION_PREFIX: &str = "GENCONF_DIM_";

/// Collects `GENCONF_DIM_*` variables as lower-cased dimension names.
///
/// `GENCONF_DIM_ENV=prod` contributes `env=prod`. Variables with an empty name
/// after the prefix are ignored.
#[must_use]
pub fn from_process() -> Vec<(String, String)> {
    Env::prefixed(DIMENSION_PREFIX)
        .iter()
        .map(|(key, value)| (key.as_str().to_lowercase(), value))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Overlays `flags` onto `process` entries; flags win per dimension.
///
/// # Examples
///
/// ```
/// use genconf_cli::environment::resolve;
/// let env = resolve(
///     vec![("env".into(), "qa".into()), ("color".into(), "green".into())],
///     &[("env".into(), "prod".into())],
/// );
/// assert_eq!(env.get("env"), Some("prod"));
/// assert_eq!(env.get("color"), Some("green"));
/// ```
#[must_use]
pub fn resolve<I>(process: I, flags: &[(String, String)]) -> Environment
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut environment: Environment = process.into_iter().collect();
    environment.extend(flags.iter().cloned());
    environment
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[rstest]
    #[case::flags_only(&[], &[("env", "prod")], &[("env", "prod")])]
    #[case::process_only(&[("env", "qa")], &[], &[("env", "qa")])]
    #[case::flag_overrides(&[("env", "qa"), ("color", "green")], &[("env", "prod")], &[("color", "green"), ("env", "prod")])]
    #[case::last_flag_wins(&[], &[("env", "qa"), ("env", "prod")], &[("env", "prod")])]
    fn flags_overlay_process(
        #[case] process: &[(&str, &str)],
        #[case] flags: &[(&str, &str)],
        #[case] expected: &[(&str, &str)],
    ) {
        let environment = resolve(pairs(process), &pairs(flags));
        let actual: Vec<(&str, &str)> = environment.iter().collect();
        assert_eq!(actual, expected);
    }
}
