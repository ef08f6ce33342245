use std::fmt;

use serde::Deserialize;

macro_rules! parameter_enum {
    ($name:ident, $field:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const FIELD: &'static str = $field;

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn allowed() -> Vec<&'static str> {
                Self::ALL.iter().map(|value| value.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

parameter_enum!(Tone, "tone", {
    Professional => "professional",
    Friendly => "friendly",
    Technical => "technical",
    Casual => "casual",
});

parameter_enum!(Complexity, "complexity", {
    Basic => "basic",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

parameter_enum!(Format, "format", {
    Concise => "concise",
    Detailed => "detailed",
    Comprehensive => "comprehensive",
});

parameter_enum!(Examples, "examples", {
    None => "none",
    Few => "few",
    Many => "many",
});

parameter_enum!(Constraints, "constraints", {
    Minimal => "minimal",
    Moderate => "moderate",
    Strict => "strict",
});

/// The five choices that steer template expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptParameters {
    pub tone: Tone,
    pub complexity: Complexity,
    pub format: Format,
    pub examples: Examples,
    pub constraints: Constraints,
}

impl Default for PromptParameters {
    fn default() -> Self {
        Self {
            tone: Tone::Professional,
            complexity: Complexity::Intermediate,
            format: Format::Detailed,
            examples: Examples::Few,
            constraints: Constraints::Moderate,
        }
    }
}

/// Parameters exactly as they arrive on the wire. Nothing here is trusted
/// until [`RawParameters::validate`] has accepted it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameters {
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub examples: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterViolation {
    Missing {
        field: &'static str,
    },
    Unknown {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },
}

impl fmt::Display for ParameterViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::Unknown {
                field,
                value,
                allowed,
            } => write!(
                f,
                "{field} must be one of {} (got \"{value}\")",
                allowed.join(", ")
            ),
        }
    }
}

impl RawParameters {
    /// Checks every field and reports all violations at once, so a caller can
    /// fix the whole request in one round trip.
    pub fn validate(&self) -> Result<PromptParameters, Vec<ParameterViolation>> {
        let mut violations = Vec::new();

        let tone = check(
            self.tone.as_deref(),
            Tone::FIELD,
            Tone::parse,
            Tone::allowed,
            &mut violations,
        );
        let complexity = check(
            self.complexity.as_deref(),
            Complexity::FIELD,
            Complexity::parse,
            Complexity::allowed,
            &mut violations,
        );
        let format = check(
            self.format.as_deref(),
            Format::FIELD,
            Format::parse,
            Format::allowed,
            &mut violations,
        );
        let examples = check(
            self.examples.as_deref(),
            Examples::FIELD,
            Examples::parse,
            Examples::allowed,
            &mut violations,
        );
        let constraints = check(
            self.constraints.as_deref(),
            Constraints::FIELD,
            Constraints::parse,
            Constraints::allowed,
            &mut violations,
        );

        match (tone, complexity, format, examples, constraints) {
            (Some(tone), Some(complexity), Some(format), Some(examples), Some(constraints)) => {
                Ok(PromptParameters {
                    tone,
                    complexity,
                    format,
                    examples,
                    constraints,
                })
            }
            _ => Err(violations),
        }
    }
}

impl From<PromptParameters> for RawParameters {
    fn from(params: PromptParameters) -> Self {
        Self {
            tone: Some(params.tone.as_str().to_string()),
            complexity: Some(params.complexity.as_str().to_string()),
            format: Some(params.format.as_str().to_string()),
            examples: Some(params.examples.as_str().to_string()),
            constraints: Some(params.constraints.as_str().to_string()),
        }
    }
}

fn check<T>(
    value: Option<&str>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    allowed: fn() -> Vec<&'static str>,
    violations: &mut Vec<ParameterViolation>,
) -> Option<T> {
    let Some(value) = value else {
        violations.push(ParameterViolation::Missing { field });
        return None;
    };

    let parsed = parse(value);
    if parsed.is_none() {
        violations.push(ParameterViolation::Unknown {
            field,
            value: value.to_string(),
            allowed: allowed(),
        });
    }
    parsed
}
