use std::fmt;

/// Enforcement strength assigned to a rule.
///
/// Levels form a total order `Off < Warn < Error` matching the numeric
/// codes 0/1/2 used by external lint engines. Comparisons go through the
/// derived variant order, never through string representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The rule is disabled.
    Off,
    /// Violations are reported but do not fail the run.
    Warn,
    /// Violations fail the run.
    Error,
}

impl Severity {
    /// Numeric code understood by external lint engines (0/1/2).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// The build environment a policy is resolved for.
///
/// Consumed exactly once per resolution; for a fixed environment the
/// resolver is a pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    /// Default severity for environment-sensitive rules: strict in
    /// production, advisory everywhere else. Never [`Severity::Off`].
    #[must_use]
    pub fn default_severity(self) -> Severity {
        if self.is_production() {
            Severity::Error
        } else {
            Severity::Warn
        }
    }
}

/// Declaration-side severity of a rule: either a literal level, or a
/// sentinel asking for the resolver's environment default.
///
/// The sentinel is substituted when the registry is built; a registry
/// built with one default is not affected by later resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeveritySpec {
    Fixed(Severity),
    EnvironmentDefault,
}

impl SeveritySpec {
    pub(crate) fn resolve(self, default: Severity) -> Severity {
        match self {
            SeveritySpec::Fixed(level) => level,
            SeveritySpec::EnvironmentDefault => default,
        }
    }
}

impl From<Severity> for SeveritySpec {
    fn from(level: Severity) -> Self {
        SeveritySpec::Fixed(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_total_order() {
        assert!(Severity::Off < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Off < Severity::Error);
    }

    #[test]
    fn severity_codes() {
        assert_eq!(Severity::Off.code(), 0);
        assert_eq!(Severity::Warn.code(), 1);
        assert_eq!(Severity::Error.code(), 2);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Off.to_string(), "off");
        assert_eq!(Severity::Warn.to_string(), "warn");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn production_defaults_to_error() {
        assert_eq!(Environment::Production.default_severity(), Severity::Error);
    }

    #[test]
    fn development_defaults_to_warn() {
        assert_eq!(Environment::Development.default_severity(), Severity::Warn);
    }

    #[test]
    fn fixed_spec_ignores_default() {
        let spec = SeveritySpec::Fixed(Severity::Off);
        assert_eq!(spec.resolve(Severity::Error), Severity::Off);
    }

    #[test]
    fn sentinel_spec_takes_default() {
        let spec = SeveritySpec::EnvironmentDefault;
        assert_eq!(spec.resolve(Severity::Error), Severity::Error);
        assert_eq!(spec.resolve(Severity::Warn), Severity::Warn);
    }
}
