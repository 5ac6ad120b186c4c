//! Core problem engine: sequence sampling and per-type problem generation.
//!
//! ## Module overview
//!
//! | Module              | Purpose |
//! |---------------------|---------|
//! | `models`            | Shared types: line tuples, problems, problem sets, requests |
//! | `sequence`          | Unique random index sequences with pluggable policies |
//! | `helpers`           | Shared builders for problem IDs and payloads |
//! | `reorder`           | Shuffled-line problems |
//! | `fill_in_the_blank` | Literal-aware tokenizer and blanked-token problems |
//! | `generator`         | Entry point `generate_problem_set()`, dispatches to the generators |

pub mod fill_in_the_blank;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod reorder;
pub mod sequence;

pub use fill_in_the_blank::FillInTheBlankProblemGenerator;
pub use generator::{generate_problem_set, generate_problem_set_with_rng};
pub use models::{
    BlankScale, FillInTheBlankProblemData, LineTuple, Problem, ProblemData, ProblemSet,
    ProblemSetRequest, ProblemType, ReorderAnswer, ReorderProblemData,
};
pub use reorder::ReorderProblemGenerator;
pub use sequence::{Combination, Permutation, SequenceGenerator, SequencePolicy};
