use rand::Rng;

/// Contract between a problem definition and any external search process.
///
/// The search process only needs to be able to score candidates and to draw random ones.
/// It never has to understand what a candidate represents.
/// Construction is not part of the trait: every implementor offers its own fallible constructors.
pub trait Problem {
    /// Representation of a candidate solution
    type Solution;

    /// Scores a candidate, lower is better.
    /// Must be total: out-of-contract candidates are scored, never rejected.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Draws a random candidate from the search space, not necessarily feasible.
    fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Solution;
}
