/// Default ceiling on the magnitude of a result.
pub const DEFAULT_CEILING: f64 = 1_000_000.0;
/// Default limit on parenthesis nesting depth.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Selects which optional pipeline stages run and with which limits.
///
/// Lexing, parsing and evaluation always run. The structural check (with or
/// without its literal-zero-divisor part) and the bound check can be turned
/// off independently.
///
/// ## Example
/// ```
/// use reckon::config::{AnalyzerConfig, DEFAULT_CEILING};
///
/// let config = AnalyzerConfig::new().with_ceiling(10.0);
/// assert_eq!(config.ceiling, 10.0);
/// assert!(config.bound_check);
///
/// let unchecked = AnalyzerConfig::unchecked();
/// assert!(!unchecked.structural_check && !unchecked.bound_check);
/// assert_eq!(unchecked.ceiling, DEFAULT_CEILING);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Run the pre-parse structural check.
    pub structural_check:      bool,
    /// Let the structural check reject `/` followed by a zero literal.
    pub zero_divisor_literals: bool,
    /// Run the post-evaluation bound check.
    pub bound_check:           bool,
    /// Largest accepted magnitude of a result, inclusive.
    pub ceiling:               f64,
    /// How deeply parentheses may nest.
    pub max_nesting:           usize,
}

impl AnalyzerConfig {
    /// Creates a configuration with every check enabled and the default
    /// limits.
    #[must_use]
    pub const fn new() -> Self {
        Self { structural_check:      true,
               zero_divisor_literals: true,
               bound_check:           true,
               ceiling:               DEFAULT_CEILING,
               max_nesting:           DEFAULT_MAX_NESTING, }
    }

    /// Creates a configuration that runs only lexing, parsing and evaluation.
    #[must_use]
    pub const fn unchecked() -> Self {
        Self { structural_check: false,
               bound_check: false,
               ..Self::new() }
    }

    /// Replaces the magnitude ceiling.
    ///
    /// The ceiling should be finite and non-negative: no magnitude exceeds a
    /// NaN ceiling, and every magnitude exceeds a negative one. Text from
    /// outside goes through [`parse_ceiling`] first.
    #[must_use]
    pub const fn with_ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Replaces the nesting limit.
    #[must_use]
    pub const fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a magnitude ceiling from text, accepting only finite values `>= 0`.
///
/// # Errors
/// A readable message when the text is not a number, is NaN or infinite, or
/// is negative.
///
/// ## Example
/// ```
/// use reckon::config::parse_ceiling;
///
/// assert_eq!(parse_ceiling("2500"), Ok(2500.0));
/// assert_eq!(parse_ceiling("0"), Ok(0.0));
/// assert!(parse_ceiling("NaN").is_err());
/// assert!(parse_ceiling("-1").is_err());
/// ```
pub fn parse_ceiling(text: &str) -> Result<f64, String> {
    let ceiling = text.trim()
                      .parse::<f64>()
                      .map_err(|_| format!("'{text}' is not a number."))?;

    if !ceiling.is_finite() {
        return Err(format!("The ceiling must be finite, found '{text}'."));
    }
    if ceiling < 0.0 {
        return Err(format!("The ceiling must not be negative, found '{text}'."));
    }

    Ok(ceiling)
}
