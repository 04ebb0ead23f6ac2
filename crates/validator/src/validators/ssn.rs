//! Social security number format rule.
//!
//! Checks that a value is written in one of the accepted SSN layouts. The
//! layouts in play are picked per rule from [`SsnOptions`]; a custom regex can
//! be added on top. This is a format check only: area, group and serial
//! numbers are not inspected.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationComplexity, ValidationError, ValidatorMetadata};

// ASCII digits only.
static DASHED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$").unwrap());

static PLAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9}$").unwrap());

static SPACED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3} [0-9]{2} [0-9]{4}$").unwrap());

// ============================================================================
// BUILT-IN FORMATS
// ============================================================================

/// One of the built-in SSN layouts, numbered 1..=3 in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SsnFormat {
    /// `format1`: `123-45-6789`
    Dashed,
    /// `format2`: `123456789`
    Plain,
    /// `format3`: `123 45 6789`
    Spaced,
}

impl SsnFormat {
    /// All built-in formats in configuration order.
    pub const ALL: [Self; 3] = [Self::Dashed, Self::Plain, Self::Spaced];

    /// The 1-based position used by the `formatN` option keys.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Dashed => 1,
            Self::Plain => 2,
            Self::Spaced => 3,
        }
    }

    /// Looks up a format by its 1-based position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    /// The compiled, anchored expression for this format.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Dashed => &DASHED_REGEX,
            Self::Plain => &PLAIN_REGEX,
            Self::Spaced => &SPACED_REGEX,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashed => "dashed",
            Self::Plain => "plain",
            Self::Spaced => "spaced",
        }
    }

    /// A sample value in this layout.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::Dashed => "123-45-6789",
            Self::Plain => "123456789",
            Self::Spaced => "123 45 6789",
        }
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Configuration of an [`Ssn`] rule.
///
/// Every flag defaults to off. With nothing set, the rule accepts the dashed
/// layout only. Deserializes from the rule's JSON options object:
///
/// ```
/// use idcheck_validator::validators::SsnOptions;
///
/// let options: SsnOptions =
///     serde_json::from_str(r#"{ "format2": true, "with": "/^\\d{4}$/" }"#).unwrap();
/// assert!(options.format2);
/// assert_eq!(options.with.as_deref(), Some(r"/^\d{4}$/"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SsnOptions {
    /// Accept `123-45-6789`.
    pub format1: bool,
    /// Accept `123456789`.
    pub format2: bool,
    /// Accept `123 45 6789`.
    pub format3: bool,
    /// Accept every built-in layout.
    pub all: bool,
    /// Extra pattern, either a bare regex or a `/body/flags` literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with: Option<String>,
}

impl SsnOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables one built-in format.
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: SsnFormat) -> Self {
        match format {
            SsnFormat::Dashed => self.format1 = true,
            SsnFormat::Plain => self.format2 = true,
            SsnFormat::Spaced => self.format3 = true,
        }
        self
    }

    /// Enables every built-in format.
    #[must_use = "builder methods must be chained or built"]
    pub fn all(mut self) -> Self {
        self.all = true;
        self
    }

    /// Adds a custom pattern to the accepted set.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.with = Some(pattern.into());
        self
    }

    /// Whether a built-in format is selected, either directly or via `all`.
    #[must_use]
    pub fn selects(&self, format: SsnFormat) -> bool {
        let flag = match format {
            SsnFormat::Dashed => self.format1,
            SsnFormat::Plain => self.format2,
            SsnFormat::Spaced => self.format3,
        };
        flag || self.all
    }

    // An empty `with` string carries no pattern.
    fn custom_pattern(&self) -> Option<&str> {
        self.with.as_deref().filter(|p| !p.is_empty())
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// One entry of a rule's active pattern set.
#[derive(Debug, Clone)]
pub enum Pattern {
    Builtin(SsnFormat),
    Custom(Regex),
}

impl Pattern {
    /// Compiles a user-supplied pattern.
    ///
    /// Accepts a bare expression (`^\d{4}$`) or a slash-delimited literal
    /// (`/^\d{4}$/`). Literal flags: `i` turns on case-insensitive matching,
    /// `m` lets `^`/`$` match at line breaks, `s` lets `.` match `\n`, and
    /// `u` is a no-op. The stateful `g` and `y` flags are rejected.
    ///
    /// Custom patterns are Unicode-aware: `\d` matches any decimal digit,
    /// not just `0-9`. Write `[0-9]` to accept ASCII digits only.
    pub fn custom(source: &str) -> Result<Self, RuleError> {
        let invalid = |reason: String| RuleError::InvalidPattern {
            pattern: source.to_owned(),
            reason,
        };

        let (body, flags) = split_literal(source);
        if body.is_empty() {
            return Err(invalid("pattern is empty".into()));
        }

        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'u' => {}
                other => return Err(invalid(format!("unsupported flag '{other}'"))),
            }
        }

        builder
            .build()
            .map(Self::Custom)
            .map_err(|err| invalid(err.to_string()))
    }

    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Builtin(format) => format.regex().is_match(value),
            Self::Custom(regex) => regex.is_match(value),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Builtin(format) => format.label(),
            Self::Custom(_) => "custom",
        }
    }

    /// The expression source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Builtin(format) => format.regex().as_str(),
            Self::Custom(regex) => regex.as_str(),
        }
    }
}

fn split_literal(source: &str) -> (&str, &str) {
    if let Some(rest) = source.strip_prefix('/')
        && let Some(end) = rest.rfind('/')
    {
        return (&rest[..end], &rest[end + 1..]);
    }
    (source, "")
}

// ============================================================================
// SSN VALIDATOR
// ============================================================================

/// Validates that a string is written in an accepted SSN layout.
///
/// The active pattern set is resolved once from [`SsnOptions`]: every selected
/// built-in in `formatN` order, then the custom pattern. With nothing
/// selected the dashed layout is used.
///
/// # Examples
///
/// ```
/// use idcheck_validator::validators::{Ssn, SsnFormat, SsnOptions};
/// use idcheck_validator::foundation::Validate;
///
/// let dashed = Ssn::default();
/// assert!(dashed.is_match("123-45-6789"));
/// assert!(!dashed.is_match("123456789"));
///
/// let plain_or_four = Ssn::new(
///     &SsnOptions::new().format(SsnFormat::Plain).with_pattern(r"^\d{4}$"),
/// )
/// .unwrap();
/// assert!(plain_or_four.validate("123456789").is_ok());
/// assert!(plain_or_four.validate("1234").is_ok());
/// assert!(plain_or_four.validate("123-45-6789").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Ssn {
    patterns: Vec<Pattern>,
}

impl Ssn {
    /// Builds the rule, compiling the custom pattern if one is configured.
    pub fn new(options: &SsnOptions) -> Result<Self, RuleError> {
        let mut patterns: Vec<Pattern> = SsnFormat::ALL
            .into_iter()
            .filter(|format| options.selects(*format))
            .map(Pattern::Builtin)
            .collect();

        if let Some(source) = options.custom_pattern() {
            patterns.push(Pattern::custom(source)?);
        }

        let fallback = patterns.is_empty();
        if fallback {
            patterns.push(Pattern::Builtin(SsnFormat::Dashed));
        }

        let ssn = Self { patterns };
        tracing::debug!(
            patterns = %ssn.labels(),
            fallback,
            "resolved ssn pattern set"
        );
        Ok(ssn)
    }

    /// The active pattern set, in evaluation order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Tests a value against the active pattern set.
    ///
    /// Every pattern is evaluated; the value is accepted if any matched.
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        let matched = self
            .patterns
            .iter()
            .fold(false, |acc, pattern| pattern.is_match(value) || acc);
        tracing::trace!(matched, "ssn rule evaluated");
        matched
    }

    fn labels(&self) -> String {
        self.patterns
            .iter()
            .map(Pattern::label)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn has_custom(&self) -> bool {
        self.patterns
            .iter()
            .any(|pattern| matches!(pattern, Pattern::Custom(_)))
    }
}

impl Default for Ssn {
    fn default() -> Self {
        Self {
            patterns: vec![Pattern::Builtin(SsnFormat::Dashed)],
        }
    }
}

impl Validate for Ssn {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "ssn",
                "Value is not a valid social security number",
            )
            .with_param("formats", self.labels()))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata {
            name: "Ssn".into(),
            description: Some(format!("Accepts SSN layouts: {}", self.labels()).into()),
            complexity: if self.has_custom() {
                ValidationComplexity::Expensive
            } else {
                ValidationComplexity::Linear
            },
            tags: vec![
                Cow::Borrowed("text"),
                Cow::Borrowed("identifier"),
                Cow::Borrowed("ssn"),
            ],
        }
    }
}

/// Creates an SSN rule from options.
pub fn ssn(options: &SsnOptions) -> Result<Ssn, RuleError> {
    Ssn::new(options)
}

/// One-shot check of a value against an options object.
///
/// The `Err` case is reserved for configuration problems; a value that does
/// not match yields `Ok(false)`.
///
/// ```
/// use idcheck_validator::validators::{ssn, SsnOptions};
///
/// assert_eq!(ssn::validate("123-45-6789", &SsnOptions::default()), Ok(true));
/// assert_eq!(ssn::validate("123-45-6789", &SsnOptions::new().all()), Ok(true));
/// assert!(ssn::validate("1", &SsnOptions::new().with_pattern("(")).is_err());
/// ```
pub fn validate(value: &str, options: &SsnOptions) -> Result<bool, RuleError> {
    Ssn::new(options).map(|rule| rule.is_match(value))
}

// ============================================================================
// TESTS
// ============================================================================
