//! Fill-in-the-blank problems: a snippet with some tokens replaced by
//! underscores; the answer lists the missing tokens in reading order.
//!
//! ## Pipeline
//!
//! 1. **Literal protection.** Quoted spans (`"..."`, `'...'`, `` `...` ``,
//!    shortest match, no escapes, no line breaks) are swapped for
//!    `STRING_LITERAL_REPLACEMENT_<n>` placeholders so the tokenizer never
//!    splits inside them. Their positions are remembered, which lets a
//!    literal be blanked and restored as one unit.
//! 2. **Tokenizing.** Word-break characters and spaces separate tokens;
//!    tokens are trimmed and empty ones dropped. Duplicates are kept.
//! 3. **Blank count.** [`BlankScale`] maps the token count to the number of
//!    blanks per problem (`floor(log2(n))` by default).
//! 4. **Blank sets.** A [`SequenceGenerator`] with the [`Combination`] policy
//!    picks a distinct token subset for every problem.
//!
//! Each selected token blanks the first not-yet-blanked token with the same
//! text. Blanks are as wide as the text they hide; for a literal that is the
//! original quoted text, not its placeholder. Every placeholder left in the
//! question is turned back into its literal.

use std::ops::Range;

use rand::Rng;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::problem_engine::{
    helpers,
    models::{BlankScale, LineTuple, Problem},
    sequence::{Combination, SequenceGenerator},
};

pub const STRING_LITERAL_REPLACEMENT_TOKEN: &str = "STRING_LITERAL_REPLACEMENT";

/// Characters that end a token, in addition to the plain space.
pub const WORD_BREAKS: [char; 17] = [
    ';', ',', '(', ')', '{', '}', '[', ']', ':', '=', '.', '+', '/', '-', '*', '?', '\n',
];

const LITERAL_PATTERN: &str = r#"(".*?"|'.*?'|`.*?`)"#;

/// A quoted literal lifted out of the code.
#[derive(Debug, Clone)]
struct Literal {
    /// Where the placeholder sits in the protected code.
    span: Range<usize>,
    /// The literal as written, quotes included.
    text: String,
}

#[derive(Debug, Clone)]
pub struct FillInTheBlankProblemGenerator {
    line_tuples: Vec<LineTuple>,
    max_num_to_generate: usize,
    blank_scale: BlankScale,
    /// The input with every literal replaced by its placeholder.
    protected: String,
    literals: Vec<Literal>,
}

impl FillInTheBlankProblemGenerator {
    pub fn new(
        code: impl AsRef<str>, line_tuples: Vec<LineTuple>, max_num_to_generate: usize,
    ) -> Result<Self> {
        let (protected, literals) = extract_literals(code.as_ref())?;
        Ok(FillInTheBlankProblemGenerator {
            line_tuples,
            max_num_to_generate,
            blank_scale: BlankScale::default(),
            protected,
            literals,
        })
    }

    pub fn with_blank_scale(mut self, blank_scale: BlankScale) -> Self {
        self.blank_scale = blank_scale;
        self
    }

    pub fn line_tuples(&self) -> &[LineTuple] {
        &self.line_tuples
    }

    /// The code as the tokenizer sees it, literals swapped for placeholders.
    pub fn protected_code(&self) -> &str {
        &self.protected
    }

    /// Tokens in document order, placeholders standing in for literals.
    pub fn tokens(&self) -> Vec<&str> {
        self.token_spans().into_iter().map(|span| &self.protected[span]).collect()
    }

    /// Generate up to `max_num_to_generate` problems, each blanking a distinct
    /// token subset. Code without tokens yields no problems.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Problem>> {
        let tokens = self.token_spans();
        if tokens.is_empty() {
            debug!(requested = self.max_num_to_generate, "no tokens to blank");
            return Ok(Vec::new());
        }

        let blank_count = self.blank_scale.blank_count(tokens.len());
        let mut subsets = SequenceGenerator::new(tokens.len() as i64, blank_count as i64, Combination)?;

        let mut problems = Vec::with_capacity(self.max_num_to_generate.min(1024));
        for i in 0..self.max_num_to_generate {
            let Some(selection) = subsets.random_sequence(rng) else {
                break;
            };
            let (question, answer) = self.blank_out(&tokens, &selection);
            problems.push(helpers::fill_in_the_blank_problem(i, question, answer));
        }

        if problems.len() < self.max_num_to_generate {
            warn!(
                tokens = tokens.len(),
                blanks = blank_count,
                requested = self.max_num_to_generate,
                generated = problems.len(),
                "ran out of distinct blank sets"
            );
        }
        debug!(
            tokens = tokens.len(),
            literals = self.literals.len(),
            blanks = blank_count,
            generated = problems.len(),
            "generated fill-in-the-blank problems"
        );
        Ok(problems)
    }

    /// Byte ranges of the tokens within the protected code.
    fn token_spans(&self) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut push_trimmed = |start: usize, end: usize| {
            let chunk = &self.protected[start..end];
            let trimmed = chunk.trim();
            if !trimmed.is_empty() {
                let lead = chunk.len() - chunk.trim_start().len();
                spans.push(start + lead..start + lead + trimmed.len());
            }
        };

        let mut chunk_start = 0;
        for (i, c) in self.protected.char_indices() {
            if c == ' ' || WORD_BREAKS.contains(&c) {
                push_trimmed(chunk_start, i);
                chunk_start = i + c.len_utf8();
            }
        }
        push_trimmed(chunk_start, self.protected.len());
        spans
    }

    /// Build the question and the reading-order answer list for one selection.
    fn blank_out(&self, tokens: &[Range<usize>], selection: &[usize]) -> (String, Vec<String>) {
        let text_of = |t: usize| &self.protected[tokens[t].clone()];

        let mut blanked = vec![false; tokens.len()];
        for &pick in selection {
            let wanted = text_of(pick);
            if let Some(slot) = (0..tokens.len()).find(|&t| !blanked[t] && text_of(t) == wanted) {
                blanked[slot] = true;
            }
        }

        let mut question = String::with_capacity(self.protected.len());
        let mut answer = Vec::with_capacity(selection.len());
        let mut cursor = 0;
        for (t, span) in tokens.iter().enumerate() {
            question.push_str(&self.restore(cursor..span.start));
            let original = self.restore(span.clone());
            if blanked[t] {
                question.push_str(&helpers::blank_for(&original));
                answer.push(original);
            } else {
                question.push_str(&original);
            }
            cursor = span.end;
        }
        question.push_str(&self.restore(cursor..self.protected.len()));

        (question, answer)
    }

    /// The original text behind a range of the protected code.
    fn restore(&self, range: Range<usize>) -> String {
        let mut out = String::with_capacity(range.len());
        let mut cursor = range.start;
        for literal in self
            .literals
            .iter()
            .filter(|l| l.span.start >= range.start && l.span.end <= range.end)
        {
            out.push_str(&self.protected[cursor..literal.span.start]);
            out.push_str(&literal.text);
            cursor = literal.span.end;
        }
        out.push_str(&self.protected[cursor..range.end]);
        out
    }
}

/// Replace each quoted literal, left to right, with a numbered placeholder.
fn extract_literals(code: &str) -> Result<(String, Vec<Literal>)> {
    let re = Regex::new(LITERAL_PATTERN)?;

    let mut protected = String::with_capacity(code.len());
    let mut literals = Vec::new();
    let mut cursor = 0;
    for m in re.find_iter(code) {
        protected.push_str(&code[cursor..m.start()]);
        let start = protected.len();
        protected.push_str(&format!("{}_{}", STRING_LITERAL_REPLACEMENT_TOKEN, literals.len()));
        literals.push(Literal { span: start..protected.len(), text: m.as_str().to_string() });
        cursor = m.end();
    }
    protected.push_str(&code[cursor..]);

    Ok((protected, literals))
}
