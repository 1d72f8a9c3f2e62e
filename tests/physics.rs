use approx::assert_relative_eq;
use proptest::prelude::*;

use paygap_engine::sim::{SimConfig, Simulation};

const W: u32 = 800;
const H: u32 = 500;

fn running(seed: u32, step: u32) -> Simulation {
    let mut s = Simulation::with_defaults(W, H, seed).unwrap();
    s.set_active_step(step);
    s.start();
    s
}

#[test]
fn inactive_groups_do_not_move() {
    let mut s = running(11, 0);
    let before = s.particles().clone();
    for _ in 0..20 {
        s.step();
    }

    let p = s.particles();
    let mut checked = 0;
    for i in 0..p.len() {
        if p.group[i] != 0 {
            assert_eq!((p.x[i], p.y[i]), (before.x[i], before.y[i]));
            assert_eq!((p.vx[i], p.vy[i]), (before.vx[i], before.vy[i]));
            assert_eq!(p.alpha[i], before.alpha[i]);
            assert_relative_eq!(p.alpha[i], 0.85);
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn falling_particles_fade_by_fixed_factor_below_target() {
    let mut s = running(5, 2);
    let mut faded = 0;

    for _ in 0..400 {
        let alpha = s.particles().alpha.clone();
        s.step();

        let p = s.particles();
        for i in 0..p.len() {
            let g = &s.groups()[p.group[i]];
            if !(p.falling[i] && g.fall_away) {
                assert_eq!(p.alpha[i], alpha[i]);
                continue;
            }
            if p.y[i] > H as f32 * g.target_y {
                assert_relative_eq!(p.alpha[i], alpha[i] * 0.98);
                faded += 1;
            } else {
                assert_eq!(p.alpha[i], alpha[i]);
            }
        }
    }
    assert!(faded > 0);
}

#[test]
fn converging_particles_close_in_on_attractor() {
    let mut s = running(3, 0);
    let (ax, ay) = s.attractor();

    let mean_dist = |s: &Simulation| {
        let p = s.particles();
        let idx: Vec<usize> = p.of_group(0).collect();
        idx.iter()
            .map(|&i| ((p.x[i] - ax).powi(2) + (p.y[i] - ay).powi(2)).sqrt())
            .sum::<f32>()
            / idx.len() as f32
    };

    let start = mean_dist(&s);
    let mut max_speed = 0.0f32;
    for _ in 0..600 {
        s.step();
        let p = s.particles();
        for i in p.of_group(0) {
            max_speed = max_speed.max((p.vx[i] * p.vx[i] + p.vy[i] * p.vy[i]).sqrt());
        }
    }

    assert!(mean_dist(&s) < start * 0.5);
    assert!(max_speed < 1.0, "speed {max_speed}");
}

#[test]
fn active_step_is_idempotent() {
    let mut s = running(1, 2);
    let active = |s: &Simulation| s.groups().iter().filter(|g| g.active).count();

    assert!(s.set_active_step(0));
    assert!(s.set_active_step(0));
    assert_eq!(active(&s), 1);

    assert!(s.set_active_step(2));
    assert!(s.set_active_step(2));
    assert_eq!(active(&s), 4);
}

#[test]
fn growing_fade_config_is_refused() {
    assert!(SimConfig::from_json(r#"{"fade": 1.5, "initial_alpha": 2.0}"#).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn accepted_configs_keep_alpha_in_unit_range(
        fade in 0.01f32..=1.0,
        initial_alpha in 0.0f32..=1.0,
        damping in 0.01f32..=1.0,
        seed in 1u32..u32::MAX,
    ) {
        let json = format!(r#"{{"fade": {fade}, "initial_alpha": {initial_alpha}, "damping": {damping}}}"#);
        let config = SimConfig::from_json(&json).unwrap();
        let mut s = Simulation::new(config, &paygap_engine::data::PARTICLE_GROUPS, 400, 300, seed).unwrap();
        s.set_active_step(2);
        s.start();
        for _ in 0..300 {
            s.step();
        }
        prop_assert!(s.particles().alpha.iter().all(|a| (0.0..=1.0).contains(a)));
    }

    #[test]
    fn alpha_never_increases_and_x_stays_on_canvas(
        seed in 1u32..u32::MAX,
        w in 50u32..1200,
        h in 50u32..900,
        dt in 0.1f32..3.0,
        steps in 1usize..120,
    ) {
        let mut s = Simulation::with_defaults(w, h, seed).unwrap();
        s.set_active_step(2);
        s.start();

        for _ in 0..steps {
            let before = s.particles().alpha.clone();
            s.tick(dt);
            let p = s.particles();
            for i in 0..p.len() {
                prop_assert!(p.alpha[i] <= before[i]);
                prop_assert!(p.x[i] >= 0.0 && p.x[i] <= w as f32);
            }
        }
    }

    #[test]
    fn seeding_is_deterministic(seed in 1u32..u32::MAX) {
        let a = Simulation::with_defaults(W, H, seed).unwrap();
        let b = Simulation::with_defaults(W, H, seed).unwrap();
        prop_assert_eq!(&a.particles().x, &b.particles().x);
        prop_assert_eq!(&a.particles().y, &b.particles().y);
    }
}
