//! Enumerated option resolution
//!
//! Resolves a value that must belong to a closed set from an explicit option,
//! an environment variable fallback, or a built-in default, in that order.
//! Invalid values are attributed to the source they came from.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const PHPCS_STANDARD_OPTION: &str = "phpcs-standard";
pub const PHPCS_STANDARD_ENV_VAR: &str = "ORCA_PHPCS_STANDARD";

/// Named PHP_CodeSniffer rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhpcsStandard {
    AcquiaPhp,
    AcquiaDrupalStrict,
    #[default]
    AcquiaDrupalTransitional,
}

impl PhpcsStandard {
    pub const ALL: [PhpcsStandard; 3] = [
        PhpcsStandard::AcquiaPhp,
        PhpcsStandard::AcquiaDrupalStrict,
        PhpcsStandard::AcquiaDrupalTransitional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhpcsStandard::AcquiaPhp => "AcquiaPHP",
            PhpcsStandard::AcquiaDrupalStrict => "AcquiaDrupalStrict",
            PhpcsStandard::AcquiaDrupalTransitional => "AcquiaDrupalTransitional",
        }
    }
}

impl fmt::Display for PhpcsStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value \"{0}\"")]
pub struct UnknownValue(pub String);

impl FromStr for PhpcsStandard {
    type Err = UnknownValue;

    // Matching is exact; "acquiaphp" is not a standard.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|standard| standard.as_str() == value)
            .ok_or_else(|| UnknownValue(value.to_string()))
    }
}

/// Where an effective option value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    ExplicitOption,
    EnvironmentVariable,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Invalid value for \"--{option}\" option: \"{value}\".")]
    InvalidOption { option: &'static str, value: String },

    #[error("Invalid value for ${variable} environment variable: \"{value}\".")]
    InvalidEnvVar { variable: &'static str, value: String },
}

/// Names of the two sources an enumerated option can be read from
#[derive(Debug, Clone, Copy)]
pub struct EnumeratedOption {
    pub option_name: &'static str,
    pub env_var: &'static str,
}

pub const PHPCS_STANDARD: EnumeratedOption = EnumeratedOption {
    option_name: PHPCS_STANDARD_OPTION,
    env_var: PHPCS_STANDARD_ENV_VAR,
};

/// An effective value together with its source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: OptionSource,
}

impl EnumeratedOption {
    /// Resolve the effective value: explicit option, then fallback, then default.
    ///
    /// The default is trusted as-is; only values from the two external sources
    /// are validated.
    pub fn resolve<T: FromStr>(
        &self,
        explicit: Option<&str>,
        fallback: Option<&str>,
        default: T,
    ) -> Result<Resolved<T>, OptionError> {
        if let Some(value) = explicit {
            let value = value.parse::<T>().map_err(|_| OptionError::InvalidOption {
                option: self.option_name,
                value: value.to_string(),
            })?;
            return Ok(Resolved {
                value,
                source: OptionSource::ExplicitOption,
            });
        }

        if let Some(value) = fallback {
            let value = value.parse::<T>().map_err(|_| OptionError::InvalidEnvVar {
                variable: self.env_var,
                value: value.to_string(),
            })?;
            return Ok(Resolved {
                value,
                source: OptionSource::EnvironmentVariable,
            });
        }

        Ok(Resolved {
            value: default,
            source: OptionSource::Default,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("AcquiaPHP", PhpcsStandard::AcquiaPhp)]
    #[case("AcquiaDrupalStrict", PhpcsStandard::AcquiaDrupalStrict)]
    #[case("AcquiaDrupalTransitional", PhpcsStandard::AcquiaDrupalTransitional)]
    fn test_explicit_option_wins(#[case] explicit: &str, #[case] expected: PhpcsStandard) {
        let resolved = PHPCS_STANDARD
            .resolve(Some(explicit), Some("AcquiaPHP"), PhpcsStandard::default())
            .unwrap();
        assert_eq!(resolved.value, expected);
        assert_eq!(resolved.source, OptionSource::ExplicitOption);
    }

    #[rstest]
    #[case("AcquiaPHP", PhpcsStandard::AcquiaPhp)]
    #[case("AcquiaDrupalStrict", PhpcsStandard::AcquiaDrupalStrict)]
    #[case("AcquiaDrupalTransitional", PhpcsStandard::AcquiaDrupalTransitional)]
    fn test_env_var_fallback(#[case] fallback: &str, #[case] expected: PhpcsStandard) {
        let resolved = PHPCS_STANDARD
            .resolve(None, Some(fallback), PhpcsStandard::default())
            .unwrap();
        assert_eq!(resolved.value, expected);
        assert_eq!(resolved.source, OptionSource::EnvironmentVariable);
    }

    #[test]
    fn test_default_used_when_no_source() {
        let resolved = PHPCS_STANDARD
            .resolve(None, None, PhpcsStandard::AcquiaDrupalStrict)
            .unwrap();
        assert_eq!(resolved.value, PhpcsStandard::AcquiaDrupalStrict);
        assert_eq!(resolved.source, OptionSource::Default);
    }

    #[test]
    fn test_invalid_explicit_option_message() {
        let err = PHPCS_STANDARD
            .resolve::<PhpcsStandard>(Some("invalid"), None, PhpcsStandard::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid value for "--phpcs-standard" option: "invalid"."#
        );
    }

    #[test]
    fn test_invalid_env_var_message() {
        let err = PHPCS_STANDARD
            .resolve::<PhpcsStandard>(None, Some("invalid"), PhpcsStandard::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid value for $ORCA_PHPCS_STANDARD environment variable: "invalid"."#
        );
    }

    #[test]
    fn test_same_value_attributed_per_source() {
        let from_option = PHPCS_STANDARD
            .resolve::<PhpcsStandard>(Some("PSR2"), None, PhpcsStandard::default())
            .unwrap_err();
        let from_env = PHPCS_STANDARD
            .resolve::<PhpcsStandard>(None, Some("PSR2"), PhpcsStandard::default())
            .unwrap_err();
        assert_ne!(from_option.to_string(), from_env.to_string());
        assert!(from_option.to_string().contains("\"PSR2\""));
        assert!(from_env.to_string().contains("\"PSR2\""));
    }

    #[test]
    fn test_valid_explicit_option_masks_invalid_env_var() {
        let resolved = PHPCS_STANDARD
            .resolve(Some("AcquiaPHP"), Some("invalid"), PhpcsStandard::default())
            .unwrap();
        assert_eq!(resolved.value, PhpcsStandard::AcquiaPhp);
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert!("acquiaphp".parse::<PhpcsStandard>().is_err());
        assert_eq!(PhpcsStandard::default().to_string(), "AcquiaDrupalTransitional");
    }
}
