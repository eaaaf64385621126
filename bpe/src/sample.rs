use std::time::Instant;

use binpack::entities::{PENALTY, Problem};
use log::{debug, info};
use rand::Rng;
use thousands::Separable;

/// Summary of a batch of random solutions drawn from a [`Problem`].
#[derive(Debug, Clone)]
pub struct SampleSummary<S> {
    pub n_samples: usize,
    /// Number of samples that scored below the penalty
    pub n_feasible: usize,
    /// [`PENALTY`] if no sample was feasible
    pub best_score: f64,
    /// First feasible sample that reached `best_score`, `None` if no sample was feasible
    pub best: Option<S>,
}

/// Draws `n_samples` random solutions and keeps track of the best scoring one.
/// Purely diagnostic: it shows how the random seeding of a search process behaves on an instance.
pub fn sample_solutions<P, R>(problem: &P, n_samples: usize, rng: &mut R) -> SampleSummary<P::Solution>
where
    P: Problem,
    R: Rng + ?Sized,
{
    let start = Instant::now();
    let mut summary = SampleSummary {
        n_samples,
        n_feasible: 0,
        best_score: PENALTY,
        best: None,
    };

    for i in 0..n_samples {
        let solution = problem.random_solution(rng);
        let score = problem.evaluate(&solution);
        if score >= PENALTY {
            continue;
        }
        summary.n_feasible += 1;
        if score < summary.best_score {
            debug!("[SAMPLE] new best score {score} at sample {i}");
            summary.best_score = score;
            summary.best = Some(solution);
        }
    }

    info!(
        "[SAMPLE] drew {} solutions in {:.3}ms, {} feasible, best score {}",
        n_samples.separate_with_commas(),
        start.elapsed().as_secs_f64() * 1000.0,
        summary.n_feasible.separate_with_commas(),
        summary.best_score
    );

    summary
}
