//! Reorder problems: the student receives the lines of a snippet in shuffled
//! order and must restore the original order.
//!
//! Each problem is a distinct full-length permutation of the line indices,
//! drawn from a [`SequenceGenerator`] with the [`Permutation`] policy, so a
//! snippet of `n` lines yields at most `n!` problems.
//!
//! The line tuples are carried into every answer unchanged. They do not
//! constrain the shuffle: the whole line set is permuted as one sequence,
//! regardless of tuple boundaries.

use rand::Rng;
use tracing::{debug, warn};

use crate::error::Result;
use crate::problem_engine::{
    helpers,
    models::{LineTuple, Problem},
    sequence::{Permutation, SequenceGenerator},
};

#[derive(Debug, Clone)]
pub struct ReorderProblemGenerator {
    code: String,
    line_tuples: Vec<LineTuple>,
    max_num_to_generate: usize,
}

impl ReorderProblemGenerator {
    pub fn new(code: impl Into<String>, line_tuples: Vec<LineTuple>, max_num_to_generate: usize) -> Self {
        ReorderProblemGenerator {
            code: code.into(),
            line_tuples,
            max_num_to_generate,
        }
    }

    /// Generate up to `max_num_to_generate` unique reorder problems, fewer if
    /// the snippet runs out of distinct permutations.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Problem>> {
        let lines = helpers::split_lines(&self.code);
        if lines.is_empty() {
            debug!(requested = self.max_num_to_generate, "no lines to reorder");
            return Ok(Vec::new());
        }

        let line_count = lines.len() as i64;
        let mut permutations = SequenceGenerator::new(line_count, line_count, Permutation)?;

        let mut problems = Vec::with_capacity(self.max_num_to_generate.min(1024));
        for i in 0..self.max_num_to_generate {
            let Some(permutation) = permutations.random_sequence(rng) else {
                break;
            };
            let question: Vec<String> = permutation.iter().map(|&l| lines[l].clone()).collect();
            problems.push(helpers::reorder_problem(i, question, &self.code, &self.line_tuples));
        }

        if problems.len() < self.max_num_to_generate {
            warn!(
                lines = lines.len(),
                requested = self.max_num_to_generate,
                generated = problems.len(),
                "ran out of distinct line orders"
            );
        }
        debug!(lines = lines.len(), generated = problems.len(), "generated reorder problems");
        Ok(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_engine::models::{ProblemData, ProblemType};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const COMPONENT: &str = r#"import React, { useState } from "react";

function Example() {
const [count, setCount] = useState(0);

  return (
    <div>
      <p>You clicked {count} times</p>
      <button onClick={() => setCount(count + 1)}>
        Click me
      </button>
    </div>
  );
}"#;

    const SMALL: &str = "let x = 1;\nlet y = 1;";

    fn sorted(mut lines: Vec<String>) -> Vec<String> {
        lines.sort();
        lines
    }

    fn run(code: &str, tuples: Vec<LineTuple>, max: usize, seed: u64) -> Vec<Problem> {
        let mut rng = StdRng::seed_from_u64(seed);
        ReorderProblemGenerator::new(code, tuples, max).generate(&mut rng).unwrap()
    }

    #[test]
    fn generates_a_single_reorder_problem() {
        let problems = run(COMPONENT, vec![LineTuple::new(0, 5)], 1, 1);
        assert_eq!(problems.len(), 1);
        let problem = &problems[0];
        assert_eq!(problem.problem_type, ProblemType::Reorder);
        assert_eq!(problem.id, "reorder-0");

        let data = problem.as_reorder().expect("reorder payload");
        assert_eq!(data.answer.code, COMPONENT);
        assert_eq!(data.answer.line_tuples, vec![LineTuple::new(0, 5)]);
        assert_eq!(sorted(data.question.clone()), sorted(helpers::split_lines(COMPONENT)));
    }

    #[test]
    fn generated_problems_are_unique_permutations() {
        let tuples = vec![LineTuple::new(0, 2), LineTuple::new(4, 6)];
        let problems = run(COMPONENT, tuples.clone(), 10, 2);
        assert_eq!(problems.len(), 10);

        let mut seen = HashSet::new();
        for (i, problem) in problems.iter().enumerate() {
            assert_eq!(problem.id, format!("reorder-{i}"));
            let ProblemData::Reorder(data) = &problem.data else {
                panic!("expected a reorder payload for {}", problem.id);
            };
            assert_eq!(data.answer.code, COMPONENT);
            assert_eq!(data.answer.line_tuples, tuples);
            assert_eq!(sorted(data.question.clone()), sorted(helpers::split_lines(COMPONENT)));
            assert!(seen.insert(data.question.join("\n")), "duplicate question {}", problem.id);
        }
    }

    #[test]
    fn requesting_more_than_possible_caps_at_line_count_factorial() {
        let problems = run(SMALL, vec![LineTuple::new(0, 1)], 10, 3);
        assert_eq!(problems.len(), 2);

        let three = run("a\nb\nc", vec![], 100, 3);
        assert_eq!(three.len(), 6);
    }

    #[test]
    fn zero_requested_gives_nothing() {
        assert!(run(SMALL, vec![], 0, 4).is_empty());
    }

    #[test]
    fn empty_code_gives_nothing() {
        assert!(run("", vec![], 5, 5).is_empty());
    }

    #[test]
    fn original_order_is_graded_correct() {
        let problems = run(SMALL, vec![], 2, 6);
        let data = problems[0].as_reorder().unwrap();
        assert!(data.is_correct(&helpers::split_lines(SMALL)));
        let reversed: Vec<String> = helpers::split_lines(SMALL).into_iter().rev().collect();
        assert!(!data.is_correct(&reversed));
    }
}
