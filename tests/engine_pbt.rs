mod common;
use common::NetworkBuilder;
use proptest::prelude::*;
use wormbrain_core::AdExParams;

prop_compose! {
    fn arb_fan_in(max_sources: usize)(
        weights in prop::collection::vec(-50.0f64..50.0, 1..max_sources)
    ) -> Vec<f64> {
        weights
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_fan_in_conserved(weights in arb_fan_in(24), reverse in any::<bool>()) {
        // Every source is driven over threshold by the same stimulus.
        let mut names: Vec<String> = (0..weights.len()).map(|i| format!("S{i:02}")).collect();
        if reverse {
            names.reverse();
        }
        let mut builder = NetworkBuilder::new();
        for (name, w) in names.iter().zip(&weights) {
            builder = builder.synapse("DRIVE", name, 200.0).synapse(name, "T", *w);
        }
        let mut engine = builder.build();

        engine.stimulate("DRIVE", 1.0);
        engine.run_tick();
        let report = engine.run_tick();
        prop_assert_eq!(report.fired.len(), weights.len());

        let t = engine.connectome().id("T").unwrap();
        let expected: f64 = weights.iter().sum();
        prop_assert!((engine.incoming_signal(t) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_membrane_step_is_finite(
        v in -1.0e6f64..1.0e6,
        w in -1.0e4f64..1.0e4,
        i_syn in -1.0e6f64..1.0e6,
    ) {
        let params = AdExParams::default();
        let next = params.step_membrane(v, w, i_syn);
        prop_assert!(next.is_finite());
        prop_assert!(params.exponential_current(v) <= params.g_l * params.delta_t * params.exp_clamp.exp());
        prop_assert!(params.step_adaptation(v, w).is_finite());
    }

    #[test]
    fn test_random_networks_stay_finite(seed in any::<u64>(), ticks in 1usize..60) {
        use rand::SeedableRng;
        let mut engine = common::random_network(seed, 40, 8).build();
        engine.bootstrap(&mut rand_chacha::ChaCha8Rng::seed_from_u64(seed), 40);
        for _ in 0..ticks {
            let report = engine.run_tick();
            prop_assert!(report.output.left.is_finite() && report.output.right.is_finite());
        }
        prop_assert!(engine.voltages().iter().all(|v| v.is_finite()));
    }
}
