//! Unit tests for the `code_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical problems; entropy seed smoke test |
//! | Façade | Name, counts, echoed problem types, type grouping and order |
//! | Validation | Blank names, negative counts, inverted line tuples |
//! | Skipping | Types absent from the count map, multiple choice, zero counts |
//! | Timestamp | `generatedAt` is RFC 3339 UTC |

use std::collections::BTreeMap;

use chrono::DateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::problem_engine::{
    generate_problem_set, generate_problem_set_with_rng, BlankScale, LineTuple, ProblemSet,
    ProblemSetRequest, ProblemType,
};
use crate::Error;

// ── helpers ──────────────────────────────────────────────────────────────────

const MOCK_CODE: &str = "x = 2\ny = x\nprint(x+y)";

fn mock_tuples() -> Vec<LineTuple> {
    vec![LineTuple::new(0, 2)]
}

/// Call the façade directly, the way a UI collaborator would.
fn generate(
    problem_types: &[ProblemType],
    counts: &[(ProblemType, i64)],
    name: &str,
    seed: u64,
) -> crate::Result<ProblemSet> {
    let counts: BTreeMap<ProblemType, i64> = counts.iter().copied().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    generate_problem_set_with_rng(
        problem_types,
        MOCK_CODE,
        &mock_tuples(),
        &counts,
        name,
        BlankScale::Log2,
        &mut rng,
    )
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── façade ───────────────────────────────────────────────────────────────────

#[test]
fn successfully_generates_a_problem_set() {
    let set = generate(
        &[ProblemType::Reorder],
        &[(ProblemType::Reorder, 2)],
        "mock_problem_set",
        1,
    )
    .unwrap();
    assert_eq!(set.name, "mock_problem_set");
    assert_eq!(set.problems.len(), 2);
    assert_eq!(set.problem_types, vec![ProblemType::Reorder]);
}

#[test]
fn mixed_types_give_two_of_each() {
    for seed in SEEDS {
        let set = generate(
            &[ProblemType::Reorder, ProblemType::FillInTheBlank],
            &[(ProblemType::Reorder, 2), (ProblemType::FillInTheBlank, 2)],
            "mixed",
            seed,
        )
        .unwrap();
        assert_eq!(set.problems.len(), 4, "seed={seed}");
        assert_eq!(set.problems_of(ProblemType::Reorder).count(), 2);
        assert_eq!(set.problems_of(ProblemType::FillInTheBlank).count(), 2);
    }
}

#[test]
fn problems_are_grouped_by_type_with_batch_local_ids() {
    // Map insertion order must not matter: reorder always comes first.
    let set = generate(
        &[ProblemType::FillInTheBlank, ProblemType::Reorder],
        &[(ProblemType::FillInTheBlank, 2), (ProblemType::Reorder, 2)],
        "grouped",
        3,
    )
    .unwrap();
    let ids: Vec<&str> = set.problems.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["reorder-0", "reorder-1", "fill_in_the_blank-0", "fill_in_the_blank-1"]);
    assert_eq!(
        set.problem_types,
        vec![ProblemType::FillInTheBlank, ProblemType::Reorder],
        "problem_types must be echoed as given"
    );
}

#[test]
fn problem_types_are_echoed_not_recomputed() {
    let set = generate(
        &[ProblemType::MultipleChoice, ProblemType::Reorder],
        &[(ProblemType::Reorder, 1)],
        "echo",
        4,
    )
    .unwrap();
    assert_eq!(set.problem_types, vec![ProblemType::MultipleChoice, ProblemType::Reorder]);
    assert_eq!(set.problems.len(), 1);
}

#[test]
fn multiple_choice_contributes_nothing() {
    let set = generate(
        &[ProblemType::MultipleChoice],
        &[(ProblemType::MultipleChoice, 5)],
        "mcq",
        5,
    )
    .unwrap();
    assert!(set.problems.is_empty());
}

#[test]
fn types_missing_from_counts_are_skipped() {
    let set = generate(&[ProblemType::Reorder, ProblemType::FillInTheBlank], &[], "empty", 6).unwrap();
    assert!(set.problems.is_empty());

    let set = generate(&[ProblemType::Reorder], &[(ProblemType::Reorder, 0)], "zero", 6).unwrap();
    assert!(set.problems.is_empty());
}

#[test]
fn reorder_batch_is_capped_by_line_permutations() {
    // 3 lines → at most 3! = 6 reorder problems
    let set = generate(&[ProblemType::Reorder], &[(ProblemType::Reorder, 50)], "capped", 8).unwrap();
    assert_eq!(set.problems.len(), 6);
}

// ── validation ───────────────────────────────────────────────────────────────

#[test]
fn blank_name_is_rejected() {
    for name in ["", "   ", "\t\n"] {
        let err = generate(&[ProblemType::Reorder], &[(ProblemType::Reorder, 10)], name, 1).unwrap_err();
        assert!(
            err.to_string().contains("name cannot be an empty or a blank string"),
            "unexpected error for {name:?}: {err}"
        );
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}

#[test]
fn negative_count_is_rejected() {
    let err = generate(
        &[ProblemType::Reorder],
        &[(ProblemType::Reorder, -1)],
        "Negative Problem Set",
        1,
    )
    .unwrap_err();
    assert!(err.to_string().contains("number of REORDER problems cannot be negative"), "{err}");
}

#[test]
fn inverted_line_tuple_is_rejected() {
    let request = ProblemSetRequest::new(MOCK_CODE, "bad tuples")
        .with_line_tuples(vec![LineTuple::new(2, 1)])
        .with_count(ProblemType::Reorder, 1);
    let err = generate_problem_set(&request).unwrap_err();
    assert!(err.to_string().contains("line tuple start cannot be greater than end"), "{err}");
}

// ── determinism ──────────────────────────────────────────────────────────────

fn request(seed: Option<u64>) -> ProblemSetRequest {
    let mut req = ProblemSetRequest::new(MOCK_CODE, "deterministic")
        .with_line_tuples(mock_tuples())
        .with_count(ProblemType::Reorder, 4)
        .with_count(ProblemType::FillInTheBlank, 4);
    req.rng_seed = seed;
    req
}

#[test]
fn same_seed_produces_identical_problems() {
    for seed in SEEDS {
        let a = generate_problem_set(&request(Some(seed))).unwrap();
        let b = generate_problem_set(&request(Some(seed))).unwrap();
        assert_eq!(a.problems, b.problems, "problems differ for seed={seed}");
    }
}

#[test]
fn entropy_seed_produces_a_valid_set() {
    let set = generate_problem_set(&request(None)).unwrap();
    assert_eq!(set.problems_of(ProblemType::Reorder).count(), 4);
    assert_eq!(set.problems_of(ProblemType::FillInTheBlank).count(), 4);
}

// ── timestamp ────────────────────────────────────────────────────────────────

#[test]
fn generated_at_is_rfc3339_utc() {
    let set = generate_problem_set(&request(Some(1))).unwrap();
    assert!(set.generated_at.ends_with('Z'), "{}", set.generated_at);
    assert!(
        DateTime::parse_from_rfc3339(&set.generated_at).is_ok(),
        "not RFC 3339: {}",
        set.generated_at
    );
}

// ── request shape ────────────────────────────────────────────────────────────

#[test]
fn request_deserializes_from_camel_case_json() {
    let req: ProblemSetRequest = serde_json::from_str(
        r#"{
            "problemTypes": ["REORDER", "FILL_IN_THE_BLANK"],
            "code": "a = 1\nb = 2",
            "lineTuples": [{ "start": 0, "end": 1 }],
            "numOfProbsPerType": { "REORDER": 2, "FILL_IN_THE_BLANK": 1 },
            "name": "from json",
            "rngSeed": 5
        }"#,
    )
    .unwrap();
    assert_eq!(req.blank_scale, BlankScale::Log2);
    let set = generate_problem_set(&req).unwrap();
    assert_eq!(set.problems.len(), 3);
}

#[test]
fn line_tuple_bounds_are_inclusive() {
    let tuple = LineTuple::new(4, 6);
    assert!(tuple.is_valid());
    assert_eq!(tuple.line_count(), 3);
    assert_eq!(tuple.to_string(), "4:6");
    assert!(!LineTuple::new(3, 2).is_valid());
}
