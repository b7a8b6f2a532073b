// WHY: Orchestrates the dual-cursor scan and the binding table into the
// single validation contract: match or no-match. Diagnostics are carried as
// data on the detailed report without changing the boolean result.

use tracing::debug;

pub mod bindings;
pub mod scanner;

// Re-export core types
pub use bindings::{BindConflict, BindOutcome, BindingTable};
pub use scanner::{DualCursorScanner, ScanStep};

/// 0-based character position in candidate or template text
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct CharPos(pub usize);

/// Configuration for template matching
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Character that opens and closes a placeholder span in templates
    pub marker: char,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        // WHY: underscore survives unescaped in every target language the
        // templates are written for, so it is the conventional marker
        Self { marker: '_' }
    }
}

/// Why a validation run failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchFailure {
    /// Characters disagree and neither cursor can skip or capture.
    /// Also covers one side exhausting while the other still holds
    /// non-skippable content.
    Mismatch {
        candidate_pos: CharPos,
        template_pos: CharPos,
    },
    /// A placeholder span was opened but never closed
    TemplateMalformed { template_pos: CharPos },
    /// A placeholder binding violated consistency or injectivity
    BindingConflict {
        name: String,
        token: String,
        conflict: BindConflict,
    },
}

/// Result of a detailed validation run
///
/// `is_match()` agrees with [`TemplateMatcher::validate`] on every input;
/// the failure detail is a pure enhancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    failure: Option<MatchFailure>,
    /// Number of placeholder bindings recorded during the run
    pub bindings_recorded: usize,
}

impl MatchReport {
    pub fn is_match(&self) -> bool {
        self.failure.is_none()
    }

    pub fn failure(&self) -> Option<&MatchFailure> {
        self.failure.as_ref()
    }
}

/// Validates candidate text against a placeholder template.
///
/// The scan walks both texts in lockstep, tolerating whitespace differences
/// on either side independently. Each placeholder (`_name_` by default)
/// captures a maximal alphanumeric run from the candidate; every name must
/// resolve to exactly one token and every token may be claimed by at most
/// one name. The scan is greedy with no backtracking - a known constraint
/// on template authors, preserved deliberately.
///
/// Validation is a pure, deterministic function of its two inputs: no I/O,
/// no shared state, safe to run concurrently from any number of tasks.
#[derive(Debug, Clone, Default)]
pub struct TemplateMatcher {
    config: MatcherConfig,
}

impl TemplateMatcher {
    /// Create a matcher with custom configuration
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create a matcher with the default `_` marker
    pub fn with_default_config() -> Self {
        Self::new(MatcherConfig::default())
    }

    /// Validate a candidate against a template: `true` iff both cursors
    /// reach their ends together with all placeholder bindings consistent.
    ///
    /// A malformed template (unterminated placeholder) is a controlled
    /// `false`, never a panic or out-of-range read.
    pub fn validate(&self, candidate: &str, template: &str) -> bool {
        self.validate_detailed(candidate, template).is_match()
    }

    /// Validate and report the failure kind and cursor positions on
    /// mismatch. The boolean outcome is identical to [`validate`].
    ///
    /// [`validate`]: TemplateMatcher::validate
    pub fn validate_detailed(&self, candidate: &str, template: &str) -> MatchReport {
        let mut scanner = DualCursorScanner::new(candidate, template, self.config.marker);
        let mut table = BindingTable::new();

        loop {
            match scanner.next_step() {
                ScanStep::Literal
                | ScanStep::CandidateWhitespace
                | ScanStep::TemplateWhitespace => {}
                ScanStep::Placeholder { name, token } => {
                    match table.bind(&name, &token) {
                        BindOutcome::Bound | BindOutcome::Consistent | BindOutcome::Wildcard => {}
                        BindOutcome::Conflict(conflict) => {
                            debug!(name = %name, token = %token, "binding conflict");
                            return MatchReport {
                                failure: Some(MatchFailure::BindingConflict {
                                    name,
                                    token,
                                    conflict,
                                }),
                                bindings_recorded: table.len(),
                            };
                        }
                    }
                }
                ScanStep::Mismatch => {
                    return MatchReport {
                        failure: Some(MatchFailure::Mismatch {
                            candidate_pos: scanner.candidate_pos(),
                            template_pos: scanner.template_pos(),
                        }),
                        bindings_recorded: table.len(),
                    };
                }
                ScanStep::TemplateMalformed => {
                    return MatchReport {
                        failure: Some(MatchFailure::TemplateMalformed {
                            template_pos: scanner.template_pos(),
                        }),
                        bindings_recorded: table.len(),
                    };
                }
                ScanStep::Complete => {
                    return MatchReport {
                        failure: None,
                        bindings_recorded: table.len(),
                    };
                }
            }
        }
    }
}

/// Convenience function - validate with the default marker
/// WHY: Simplifies the common case for tests and external callers
pub fn validate(candidate: &str, template: &str) -> bool {
    TemplateMatcher::with_default_config().validate(candidate, template)
}
