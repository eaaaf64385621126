use serde_json::Value;

use crate::entities::{BPInstance, PENALTY};

/// Interprets an arbitrary JSON value as an assignment.
/// Only an array of non-negative integers that fit in a `usize` qualifies.
pub fn assignment_from_json(value: &Value) -> Option<Vec<usize>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_u64().and_then(|b| usize::try_from(b).ok()))
        .collect()
}

/// Scores a loosely-typed solution.
/// Anything that is not a sequence of bin indices receives the [`PENALTY`], the rest is
/// delegated to [`BPInstance::evaluate`].
pub fn evaluate_json(instance: &BPInstance, value: &Value) -> f64 {
    match assignment_from_json(value) {
        Some(assignment) => instance.evaluate(&assignment),
        None => PENALTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instance() -> BPInstance {
        BPInstance::new(3, 10, vec![4, 5, 6]).unwrap()
    }

    #[test]
    fn scores_well_formed_arrays() {
        assert_eq!(evaluate_json(&instance(), &json!([0, 0, 1])), 2.0);
        assert_eq!(evaluate_json(&instance(), &json!([0, 0, 0])), PENALTY);
        assert_eq!(evaluate_json(&instance(), &json!([0, 1])), PENALTY);
    }

    #[test]
    fn penalizes_other_shapes() {
        let instance = instance();
        for value in [
            json!(null),
            json!(3),
            json!("0 0 1"),
            json!({"assignment": [0, 0, 1]}),
            json!([0, 0, 1.5]),
            json!([0, 0, 1.0]),
            json!([0, -1, 1]),
            json!([0, "0", 1]),
            json!([[0], 0, 1]),
        ] {
            assert_eq!(evaluate_json(&instance, &value), PENALTY, "{value}");
        }
    }

    #[test]
    fn extracts_assignment() {
        assert_eq!(assignment_from_json(&json!([2, 0, 1])), Some(vec![2, 0, 1]));
        assert_eq!(assignment_from_json(&json!([])), Some(vec![]));
        assert_eq!(assignment_from_json(&json!([1, -1])), None);
    }
}
