use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Source primitives
// ---------------------------------------------------------------------------

/// A contiguous, inclusive, zero-based range of source lines the user marked
/// as one semantic unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTuple {
    pub start: usize,
    pub end: usize,
}

impl LineTuple {
    pub fn new(start: usize, end: usize) -> Self {
        LineTuple { start, end }
    }

    /// `start <= end`; negative bounds are ruled out by `usize`.
    pub fn is_valid(self) -> bool {
        self.start <= self.end
    }

    /// Number of lines covered by the tuple.
    pub fn line_count(self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }
}

impl fmt::Display for LineTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Problem types
// ---------------------------------------------------------------------------

/// Kinds of exercise. `MultipleChoice` is declared but has no generator and
/// never produces problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    Reorder,
    MultipleChoice,
    FillInTheBlank,
}

impl ProblemType {
    /// Every declared type in processing order.
    pub const ALL: [ProblemType; 3] = [
        ProblemType::Reorder,
        ProblemType::MultipleChoice,
        ProblemType::FillInTheBlank,
    ];

    /// Prefix of the problem IDs produced for this type (`"reorder-0"`, ...).
    pub fn id_prefix(self) -> &'static str {
        match self {
            ProblemType::Reorder         => "reorder",
            ProblemType::MultipleChoice  => "multiple_choice",
            ProblemType::FillInTheBlank  => "fill_in_the_blank",
        }
    }

    /// Whether a generator exists for this type.
    pub fn is_implemented(self) -> bool {
        !matches!(self, ProblemType::MultipleChoice)
    }

    /// Upper-case tag used in JSON and error messages.
    pub fn tag(self) -> &'static str {
        match self {
            ProblemType::Reorder         => "REORDER",
            ProblemType::MultipleChoice  => "MULTIPLE_CHOICE",
            ProblemType::FillInTheBlank  => "FILL_IN_THE_BLANK",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProblemType::Reorder         => "Reorder",
            ProblemType::MultipleChoice  => "Multiple Choice",
            ProblemType::FillInTheBlank  => "Fill in the Blank",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Problem payloads
// ---------------------------------------------------------------------------

/// The answer half of a reorder problem: the untouched code plus the line
/// tuples the user selected, carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderAnswer {
    pub code: String,
    pub line_tuples: Vec<LineTuple>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderProblemData {
    /// The source lines in shuffled order.
    pub question: Vec<String>,
    pub answer: ReorderAnswer,
}

impl ReorderProblemData {
    /// An attempt is correct when its lines, joined back together, spell the
    /// original code exactly.
    pub fn is_correct(&self, attempt: &[String]) -> bool {
        attempt.join("\n") == self.answer.code
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillInTheBlankProblemData {
    /// The code with every blanked token replaced by underscores.
    pub question: String,
    /// Blanked tokens in reading order.
    pub answer: Vec<String>,
}

impl FillInTheBlankProblemData {
    pub fn blank_count(&self) -> usize {
        self.answer.len()
    }

    /// Responses must match the blanked tokens one for one, in reading order.
    pub fn is_correct(&self, responses: &[String]) -> bool {
        responses == self.answer.as_slice()
    }
}

/// Question/answer payload of a problem. The shapes differ (`question` is a
/// line list for reorder, a single string for fill-in-the-blank), so the
/// JSON form carries no extra tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemData {
    Reorder(ReorderProblemData),
    FillInTheBlank(FillInTheBlankProblemData),
}

// ---------------------------------------------------------------------------
// Problems and problem sets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// `"<kind>-<index>"`; the index restarts at 0 for every generator batch.
    pub id: String,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    pub data: ProblemData,
}

impl Problem {
    pub fn as_reorder(&self) -> Option<&ReorderProblemData> {
        match &self.data {
            ProblemData::Reorder(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_fill_in_the_blank(&self) -> Option<&FillInTheBlankProblemData> {
        match &self.data {
            ProblemData::FillInTheBlank(d) => Some(d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSet {
    pub name: String,
    /// RFC 3339 UTC creation time, e.g. `2022-11-27T04:40:12.367Z`.
    pub generated_at: String,
    /// The types the caller asked for, echoed verbatim.
    pub problem_types: Vec<ProblemType>,
    /// All generated problems, grouped by type in processing order.
    pub problems: Vec<Problem>,
}

impl ProblemSet {
    /// Problems of one type, in batch order.
    pub fn problems_of(&self, problem_type: ProblemType) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(move |p| p.problem_type == problem_type)
    }
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// How many tokens a fill-in-the-blank problem blanks out, as a function of
/// the snippet's token count `n`. The result is always capped at `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankScale {
    /// `floor(log2(n))`
    #[default]
    Log2,
    /// `floor(2 * log2(n))`
    DoubleLog2,
}

impl BlankScale {
    pub fn blank_count(self, token_count: usize) -> usize {
        if token_count == 0 {
            return 0;
        }
        let count = match self {
            BlankScale::Log2       => token_count.ilog2() as usize,
            BlankScale::DoubleLog2 => ((token_count as f64).log2() * 2.0).floor() as usize,
        };
        count.min(token_count)
    }
}

/// Everything the façade needs to build one problem set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSetRequest {
    /// The types the caller asked for; echoed into [`ProblemSet::problem_types`].
    pub problem_types: Vec<ProblemType>,
    pub code: String,
    #[serde(default)]
    pub line_tuples: Vec<LineTuple>,
    /// Requested count per type. Types absent from the map are skipped.
    /// Signed so that negative counts from a caller are reported, not wrapped.
    pub num_of_probs_per_type: BTreeMap<ProblemType, i64>,
    pub name: String,
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub blank_scale: BlankScale,
}

impl ProblemSetRequest {
    /// Minimal constructor: code and name only. Add counts with [`Self::with_count`].
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        ProblemSetRequest {
            problem_types: Vec::new(),
            code: code.into(),
            line_tuples: Vec::new(),
            num_of_probs_per_type: BTreeMap::new(),
            name: name.into(),
            rng_seed: None,
            blank_scale: BlankScale::default(),
        }
    }

    /// Request `count` problems of `problem_type`, registering the type in
    /// `problem_types` if it is not listed yet.
    pub fn with_count(mut self, problem_type: ProblemType, count: i64) -> Self {
        if !self.problem_types.contains(&problem_type) {
            self.problem_types.push(problem_type);
        }
        self.num_of_probs_per_type.insert(problem_type, count);
        self
    }

    pub fn with_line_tuples(mut self, line_tuples: Vec<LineTuple>) -> Self {
        self.line_tuples = line_tuples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
