use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::problem_engine::{
    fill_in_the_blank::FillInTheBlankProblemGenerator,
    models::{BlankScale, LineTuple, Problem, ProblemSet, ProblemSetRequest, ProblemType},
    reorder::ReorderProblemGenerator,
};

/// Build a problem set from a request, seeding the RNG from `rng_seed` when
/// one is given and from OS entropy otherwise.
pub fn generate_problem_set(request: &ProblemSetRequest) -> Result<ProblemSet> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    generate_problem_set_with_rng(
        &request.problem_types,
        &request.code,
        &request.line_tuples,
        &request.num_of_probs_per_type,
        &request.name,
        request.blank_scale,
        &mut rng,
    )
}

/// Core dispatch: validate everything up front, then run the generator of
/// every requested type that has one, in `ProblemType` order.
///
/// `problem_types` is echoed into the result as given; it does not decide
/// which generators run. Types missing from `num_of_probs_per_type` are
/// skipped and `MultipleChoice` contributes nothing.
pub fn generate_problem_set_with_rng<R: Rng + ?Sized>(
    problem_types: &[ProblemType],
    code: &str,
    line_tuples: &[LineTuple],
    num_of_probs_per_type: &BTreeMap<ProblemType, i64>,
    name: &str,
    blank_scale: BlankScale,
    rng: &mut R,
) -> Result<ProblemSet> {
    if name.trim().is_empty() {
        return Err(Error::invalid("name cannot be an empty or a blank string"));
    }
    if let Some((problem_type, _)) = num_of_probs_per_type.iter().find(|(_, count)| **count < 0) {
        return Err(Error::invalid(format!(
            "number of {} problems cannot be negative",
            problem_type.tag()
        )));
    }
    if line_tuples.iter().any(|t| !t.is_valid()) {
        return Err(Error::invalid("line tuple start cannot be greater than end"));
    }

    let mut problems: Vec<Problem> = Vec::new();
    for (&problem_type, &count) in num_of_probs_per_type {
        let count = count as usize;
        let batch = match problem_type {
            ProblemType::Reorder =>
                ReorderProblemGenerator::new(code, line_tuples.to_vec(), count).generate(rng)?,

            ProblemType::FillInTheBlank =>
                FillInTheBlankProblemGenerator::new(code, line_tuples.to_vec(), count)?
                    .with_blank_scale(blank_scale)
                    .generate(rng)?,

            ProblemType::MultipleChoice => {
                debug!(requested = count, "multiple choice has no generator, skipping");
                Vec::new()
            }
        };
        debug!(%problem_type, requested = count, generated = batch.len(), "batch done");
        problems.extend(batch);
    }

    info!(
        name,
        types = problem_types.len(),
        problems = problems.len(),
        "generated problem set"
    );

    Ok(ProblemSet {
        name: name.to_string(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        problem_types: problem_types.to_vec(),
        problems,
    })
}
