use nerf_velocity::core::kinematics::{HeightInput, LaunchParameters, solve};
use nerf_velocity::core::trajectory::{sample, sample_path};
use proptest::prelude::*;

prop_compose! {
    fn shot_strategy()(
        range_m in 0.1f64..100.0,
        spring_compression_m in 0.01f64..1.0,
        start_m in 0.1f64..10.0,
        drop_fraction in 0.01f64..1.0,
        dart_mass_kg in 0.001f64..0.5,
    ) -> LaunchParameters {
        LaunchParameters::new(
            range_m,
            spring_compression_m,
            HeightInput::StartEnd {
                start_m,
                end_m: start_m * (1.0 - drop_fraction),
            },
        )
        .with_dart_mass(dart_mass_kg)
    }
}

proptest! {
    #[test]
    fn positive_inputs_give_positive_results(params in shot_strategy()) {
        let result = solve(&params).expect("positive inputs solve");

        prop_assert!(result.time_of_flight_s > 0.0);
        prop_assert!(result.muzzle_velocity_mps > 0.0);
        prop_assert!(result.spring_constant_n_per_m > 0.0);
        let expected_t = (2.0 * params.heights.vertical_drop_m() / 10.0).sqrt();
        prop_assert!((result.time_of_flight_s - expected_t).abs() <= 1e-12 * expected_t.max(1.0));
    }

    #[test]
    fn solving_is_repeatable(params in shot_strategy()) {
        prop_assert_eq!(solve(&params), solve(&params));
    }

    #[test]
    fn samples_span_the_flight_monotonically(
        params in shot_strategy(),
        sample_count in 2usize..500,
    ) {
        let result = solve(&params).expect("positive inputs solve");
        let samples = sample(&result, &params, sample_count);

        prop_assert_eq!(samples.len(), sample_count);
        prop_assert_eq!(samples[0].time_s, 0.0);
        prop_assert_eq!(samples[0].x_m, 0.0);
        prop_assert_eq!(samples[0].y_m, params.heights.launch_height_m());
        prop_assert_eq!(samples[sample_count - 1].time_s, result.time_of_flight_s);
        for pair in samples.windows(2) {
            prop_assert!(pair[1].time_s > pair[0].time_s);
            prop_assert!(pair[1].x_m > pair[0].x_m);
        }
    }

    #[test]
    fn length_does_not_depend_on_magnitude(
        velocity in -1e12f64..1e12,
        reference in -1e6f64..1e6,
        flight in 0.0f64..1e6,
        sample_count in 0usize..300,
    ) {
        let sampler = sample_path(velocity, reference, flight, 10.0, sample_count);
        prop_assert_eq!(sampler.count(), sample_count);
    }
}
