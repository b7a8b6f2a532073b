// WHY: Dual-cursor scan over candidate and template with independent
// whitespace skipping. The scan is greedy and never backtracks: once a
// literal/whitespace/placeholder decision is made it is final, so template
// authors must avoid local ambiguity around placeholder boundaries.

use tracing::trace;

use super::CharPos;

/// One consumed unit of agreement between the two cursors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStep {
    /// Current characters are equal; both cursors advanced
    Literal,
    /// Candidate cursor skipped one whitespace character
    CandidateWhitespace,
    /// Template cursor skipped one whitespace character
    TemplateWhitespace,
    /// Template placeholder consumed, candidate token captured.
    /// Both `name` and `token` may be empty.
    Placeholder { name: String, token: String },
    /// Characters disagree and neither side can skip - scan is over
    Mismatch,
    /// Placeholder opened but never closed before end of template
    TemplateMalformed,
    /// Both cursors reached their ends simultaneously
    Complete,
}

/// Advances two independent read positions, one over the candidate text and
/// one over the template text.
///
/// End of input is an explicit bounds check on each side rather than an
/// appended sentinel character, so no reserved value is assumed absent from
/// real input. An exhausted side simply stops consuming; the other side may
/// still skip whitespace or capture an empty placeholder token, and anything
/// else left over is a mismatch.
#[derive(Debug)]
pub struct DualCursorScanner {
    candidate: Vec<char>,
    template: Vec<char>,
    candidate_pos: usize,
    template_pos: usize,
    marker: char,
}

impl DualCursorScanner {
    pub fn new(candidate: &str, template: &str, marker: char) -> Self {
        Self {
            candidate: candidate.chars().collect(),
            template: template.chars().collect(),
            candidate_pos: 0,
            template_pos: 0,
            marker,
        }
    }

    /// Current candidate cursor as a 0-based character position
    pub fn candidate_pos(&self) -> CharPos {
        CharPos(self.candidate_pos)
    }

    /// Current template cursor as a 0-based character position
    pub fn template_pos(&self) -> CharPos {
        CharPos(self.template_pos)
    }

    /// Consume the next unit of agreement and report what it was.
    ///
    /// Decision priority matches the scan contract exactly: literal match,
    /// candidate whitespace skip, template whitespace skip, placeholder
    /// capture, mismatch. After `Mismatch`, `TemplateMalformed` or
    /// `Complete` the cursors no longer move.
    pub fn next_step(&mut self) -> ScanStep {
        let cand = self.candidate.get(self.candidate_pos).copied();
        let tmpl = self.template.get(self.template_pos).copied();

        match (cand, tmpl) {
            (None, None) => ScanStep::Complete,
            (Some(c), Some(t)) if c == t => {
                self.candidate_pos += 1;
                self.template_pos += 1;
                ScanStep::Literal
            }
            (Some(c), _) if c.is_whitespace() => {
                self.candidate_pos += 1;
                ScanStep::CandidateWhitespace
            }
            (_, Some(t)) if t.is_whitespace() => {
                self.template_pos += 1;
                ScanStep::TemplateWhitespace
            }
            (_, Some(t)) if t == self.marker => self.capture_placeholder(),
            _ => ScanStep::Mismatch,
        }
    }

    /// Read the placeholder name between markers, then capture the maximal
    /// alphanumeric run from the candidate at its current position.
    fn capture_placeholder(&mut self) -> ScanStep {
        let open_pos = self.template_pos;
        self.template_pos += 1;

        let mut name = String::new();
        loop {
            match self.template.get(self.template_pos).copied() {
                Some(ch) if ch == self.marker => {
                    self.template_pos += 1;
                    break;
                }
                Some(ch) => {
                    name.push(ch);
                    self.template_pos += 1;
                }
                None => {
                    // Park the cursor on the opening marker so diagnostics
                    // point at the offending span
                    self.template_pos = open_pos;
                    return ScanStep::TemplateMalformed;
                }
            }
        }

        // WHY: captured tokens are maximal alphanumeric runs and nothing
        // else - capture happens only at placeholder boundaries, and a
        // zero-length run is a valid (degenerate) capture
        let mut token = String::new();
        while let Some(ch) = self.candidate.get(self.candidate_pos).copied() {
            if !ch.is_alphanumeric() {
                break;
            }
            token.push(ch);
            self.candidate_pos += 1;
        }

        trace!(name = %name, token = %token, "captured placeholder");
        ScanStep::Placeholder { name, token }
    }
}
