//! Shared builder functions used by the per-type generators.
//!
//! Every generator ends the same way: number the problem within its batch,
//! wrap its payload, and tag it with its type. These helpers keep that in one
//! place so the generator files only hold the selection logic.

use crate::problem_engine::models::*;

/// `"<kind>-<index>"`, e.g. `"reorder-3"`.
pub fn problem_id(problem_type: ProblemType, index: usize) -> String {
    format!("{}-{}", problem_type.id_prefix(), index)
}

/// Split source code into lines on `\n`. Carriage returns stay on their line
/// so that joining with `\n` gives the input back. Empty code has no lines.
pub fn split_lines(code: &str) -> Vec<String> {
    if code.is_empty() {
        return Vec::new();
    }
    code.split('\n').map(str::to_string).collect()
}

/// A blank as wide as `text`, counted in characters.
pub fn blank_for(text: &str) -> String {
    "_".repeat(text.chars().count())
}

/// Build one reorder problem. The answer keeps the original code and line
/// tuples verbatim.
pub fn reorder_problem(
    index: usize, question: Vec<String>, code: &str, line_tuples: &[LineTuple],
) -> Problem {
    Problem {
        id: problem_id(ProblemType::Reorder, index),
        problem_type: ProblemType::Reorder,
        data: ProblemData::Reorder(ReorderProblemData {
            question,
            answer: ReorderAnswer {
                code: code.to_string(),
                line_tuples: line_tuples.to_vec(),
            },
        }),
    }
}

/// Build one fill-in-the-blank problem.
pub fn fill_in_the_blank_problem(index: usize, question: String, answer: Vec<String>) -> Problem {
    Problem {
        id: problem_id(ProblemType::FillInTheBlank, index),
        problem_type: ProblemType::FillInTheBlank,
        data: ProblemData::FillInTheBlank(FillInTheBlankProblemData { question, answer }),
    }
}
