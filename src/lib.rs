//! # code_drill_gen
//!
//! Turns a source-code file into auto-graded practice problems.
//!
//! Two problem types are generated from the same snippet:
//!
//! - **Reorder**: the snippet's lines in shuffled order; the student restores
//!   the original order. Every problem in a batch is a different permutation.
//! - **Fill in the blank**: the snippet with some tokens replaced by
//!   underscores; the student supplies the missing tokens. String, char and
//!   template literals are blanked as whole units, and every problem in a
//!   batch blanks a different token subset.
//!
//! `MultipleChoice` is a declared problem type without a generator.
//!
//! ## How it works
//!
//! 1. Build a [`ProblemSetRequest`]: the code, the line tuples the user marked
//!    as interchangeable, a count per problem type, a name, and optionally an
//!    RNG seed.
//! 2. Call [`generate_problem_set`]. It validates the request, runs each
//!    requested generator, and assembles a named, timestamped [`ProblemSet`].
//! 3. Hand the set to a UI, or write it out with [`export::write_problem_set`].
//!
//! Uniqueness inside a batch comes from [`SequenceGenerator`], which samples
//! index sequences without replacement and reports when the space of
//! permutations or combinations is used up. Asking for more problems than
//! exist is fine: the batch just ends early.
//!
//! ## Quick start
//!
//! ```rust
//! use code_drill_gen::{generate_problem_set, LineTuple, ProblemSetRequest, ProblemType};
//!
//! let request = ProblemSetRequest::new("x = 2\ny = x\nprint(x+y)", "mock_problem_set")
//!     .with_line_tuples(vec![LineTuple::new(0, 2)])
//!     .with_count(ProblemType::Reorder, 2)
//!     .with_count(ProblemType::FillInTheBlank, 2)
//!     .with_seed(42);
//!
//! let set = generate_problem_set(&request).unwrap();
//! assert_eq!(set.problems.len(), 4);
//! for problem in &set.problems {
//!     println!("{} ({})", problem.id, problem.problem_type);
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod problem_engine;
pub mod source;

// Convenience re-exports so callers can use `code_drill_gen::generate_problem_set`
// directly without reaching into `problem_engine::`.
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use problem_engine::{
    generate_problem_set, generate_problem_set_with_rng, BlankScale, Combination,
    FillInTheBlankProblemData, FillInTheBlankProblemGenerator, LineTuple, Permutation, Problem,
    ProblemData, ProblemSet, ProblemSetRequest, ProblemType, ReorderAnswer, ReorderProblemData,
    ReorderProblemGenerator, SequenceGenerator, SequencePolicy,
};

#[cfg(test)]
mod tests;
