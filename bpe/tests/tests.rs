#[cfg(test)]
mod tests {
    use std::path::Path;

    use anyhow::Result;
    use binpack::BPError;
    use binpack::entities::{BPInstance, PENALTY, Problem};
    use binpack::io::export::export_solution;
    use binpack::io::json_solution::evaluate_json;
    use bpe::config::BPEConfig;
    use bpe::io;
    use bpe::sample::sample_solutions;
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test_case("assets/scenario_a.txt", 3, 10, 2, 3; "scenario_a_text")]
    #[test_case("assets/scenario_a.json", 3, 10, 2, 3; "scenario_a_json")]
    #[test_case("assets/scenario_e.txt", 4, 10, 2, 4; "scenario_e")]
    #[test_case("assets/u20.txt", 20, 150, 8, 16; "u20")]
    fn test_instance(
        instance_path: &str,
        item_count: usize,
        bin_capacity: u64,
        min_bins: usize,
        max_bins: usize,
    ) {
        init_logger();
        let instance = io::read_instance(Path::new(instance_path)).unwrap();

        assert_eq!(instance.item_count(), item_count);
        assert_eq!(instance.bin_capacity(), bin_capacity);
        assert_eq!(instance.min_bins(), min_bins);
        assert_eq!(instance.max_bins(), max_bins);

        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let solution = instance.random_solution(&mut rng);
            assert_eq!(solution.len(), item_count);
            assert!(solution.iter().all(|&b| b < max_bins));
        }
    }

    #[test_case("assets/truncated.txt"; "truncated")]
    #[test_case("assets/non_integer.txt"; "non_integer")]
    fn test_malformed_instance(instance_path: &str) {
        init_logger();
        let err = io::read_instance(Path::new(instance_path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BPError>(),
            Some(BPError::MalformedInstance(_))
        ));
    }

    #[test]
    fn test_missing_instance_file() {
        assert!(io::read_instance(Path::new("assets/does_not_exist.txt")).is_err());
    }

    #[test]
    fn test_text_and_json_agree() -> Result<()> {
        let text = io::read_instance(Path::new("assets/scenario_a.txt"))?;
        let json = io::read_instance(Path::new("assets/scenario_a.json"))?;
        assert_eq!(text, json);
        Ok(())
    }

    #[test_case("assets/scenario_a_feasible.json", 2.0; "feasible")]
    #[test_case("assets/scenario_a_overloaded.json", PENALTY; "overloaded")]
    #[test_case("assets/scenario_a_wrong_shape.json", PENALTY; "wrong_shape")]
    fn test_solution_file(solution_path: &str, expected: f64) {
        init_logger();
        let instance = io::read_instance(Path::new("assets/scenario_a.txt")).unwrap();
        let value = io::read_solution(Path::new(solution_path)).unwrap();
        assert!(approx_eq!(
            f64,
            evaluate_json(&instance, &value),
            expected,
            ulps = 2
        ));
    }

    #[test]
    fn test_instance_dir_resolution() -> Result<()> {
        let config = BPEConfig {
            instance_dir: Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")),
            ..BPEConfig::default()
        };
        let path = io::resolve_path(Path::new("scenario_e.txt"), config.instance_dir.as_deref());
        let instance = io::read_instance(&path)?;
        assert_eq!(instance.weights(), &[3, 3, 3, 3]);
        Ok(())
    }

    /// Stand-in for an external heuristic that produces assignments for the instance.
    fn first_fit_decreasing(instance: &BPInstance) -> Vec<usize> {
        let mut assignment = vec![0; instance.item_count()];
        let mut loads: Vec<u64> = vec![];
        let order = (0..instance.item_count())
            .sorted_by_key(|&i| std::cmp::Reverse(instance.weight(i)))
            .collect_vec();
        for item_id in order {
            let w = instance.weight(item_id);
            let bin = match loads.iter().position(|&l| l + w <= instance.bin_capacity()) {
                Some(bin) => bin,
                None => {
                    loads.push(0);
                    loads.len() - 1
                }
            };
            loads[bin] += w;
            assignment[item_id] = bin;
        }
        assignment
    }

    #[test]
    fn test_external_heuristic_is_scored() -> Result<()> {
        init_logger();
        let instance = io::read_instance(Path::new("assets/u20.txt"))?;
        let assignment = first_fit_decreasing(&instance);
        let n_bins = assignment.iter().unique().count();

        assert_eq!(Problem::evaluate(&instance, &assignment), n_bins as f64);
        assert!(n_bins >= instance.min_bins());

        let ext = export_solution(&instance, &assignment);
        assert!(ext.feasible);
        assert!(
            ext.bin_loads
                .unwrap()
                .iter()
                .all(|&l| l <= instance.bin_capacity())
        );
        Ok(())
    }

    #[test]
    fn test_sampling() -> Result<()> {
        init_logger();
        let instance = io::read_instance(Path::new("assets/scenario_e.txt"))?;
        let config = BPEConfig::default();
        let mut rng = SmallRng::seed_from_u64(config.prng_seed.unwrap_or(0));
        let summary = sample_solutions(&instance, 1_000, &mut rng);

        assert_eq!(summary.n_samples, 1_000);
        assert!(summary.n_feasible > 0);
        assert!(summary.best_score >= instance.min_bins() as f64);
        assert!(summary.best_score <= instance.max_bins() as f64);
        Ok(())
    }

    #[test]
    fn test_config_partial_file() -> Result<()> {
        let config: BPEConfig = serde_json::from_str(r#"{"prng_seed": 3, "n_samples": 50}"#)?;
        assert_eq!(config.prng_seed, Some(3));
        assert_eq!(config.n_samples, 50);
        assert_eq!(config.instance_dir, None);
        Ok(())
    }
}
