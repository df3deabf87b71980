// Host-side tests for per-frame particle motion and the field that owns it.

use glam::DVec2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;
use valor_core::*;

fn resting_particle(x: f64, y: f64) -> Particle {
    Particle {
        position: DVec2::new(x, y),
        origin: DVec2::new(x, y),
        size: 1.0,
        velocity: DVec2::ZERO,
        color: Rgba::new(200, 20, 200, 0.5),
        pulse_phase: 0.0,
        pulse_speed: 0.02,
        connection_color: PaletteIndex(0),
        connection_width: 0.5,
    }
}

fn pointer_at(x: f64, y: f64, inside: bool) -> PointerState {
    PointerState {
        position: DVec2::new(x, y),
        inside,
    }
}

const BOUNDS: DVec2 = DVec2::new(800.0, 600.0);

#[test]
fn resting_particle_far_from_pointer_stays_put() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut p = resting_particle(10.0, 10.0);
    p.update(pointer_at(400.0, 300.0, true).attractor(), BOUNDS, &params, &mut rng);
    assert_eq!(p.position, DVec2::new(10.0, 10.0));
}

#[test]
fn attraction_pulls_towards_pointer_with_linear_falloff() {
    // halfway into the radius: half the force
    let d = attraction(DVec2::ZERO, DVec2::new(60.0, 0.0), 120.0, 0.5);
    assert!((d.x - 0.25).abs() < 1e-12);
    assert!(d.y.abs() < 1e-12);

    let d = attraction(DVec2::new(10.0, 10.0), DVec2::new(10.0, 40.0), 120.0, 0.5);
    assert!(d.x.abs() < 1e-12);
    assert!((d.y - 0.5 * 90.0 / 120.0).abs() < 1e-12);
}

#[test]
fn attraction_is_zero_at_and_beyond_radius() {
    assert_eq!(attraction(DVec2::ZERO, DVec2::new(120.0, 0.0), 120.0, 0.5), DVec2::ZERO);
    assert_eq!(attraction(DVec2::ZERO, DVec2::new(0.0, 500.0), 120.0, 0.5), DVec2::ZERO);
}

#[test]
fn pointer_inside_moves_a_resting_particle() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(2);
    let mut p = resting_particle(100.0, 100.0);
    p.update(pointer_at(130.0, 100.0, true).attractor(), BOUNDS, &params, &mut rng);
    assert!(p.position.x > 100.0);
}

#[test]
fn pointer_leaving_disables_attraction_next_frame() {
    let mut pointer = PointerState::default();
    pointer.moved_to(110.0, 100.0);
    pointer.entered();
    pointer.left();
    assert_eq!(pointer.attractor(), None);

    let params = FieldParams::default();
    let mut field = ParticleField::from_particles(vec![resting_particle(100.0, 100.0)], params, BOUNDS);
    field.update(pointer, &mut StdRng::seed_from_u64(3));
    assert_eq!(field.particles()[0].position, DVec2::new(100.0, 100.0));
}

#[test]
fn spring_pulls_back_one_percent_per_frame() {
    let params = FieldParams::default();
    let mut p = resting_particle(100.0, 100.0);
    p.position = DVec2::new(200.0, 100.0);
    p.update(None, BOUNDS, &params, &mut StdRng::seed_from_u64(4));
    assert!((p.position.x - 199.0).abs() < 1e-9);
    assert_eq!(p.position.y, 100.0);
}

#[test]
fn velocity_is_applied_before_the_spring() {
    let params = FieldParams::default();
    let mut p = resting_particle(100.0, 100.0);
    p.velocity = DVec2::new(0.2, -0.1);
    p.update(None, BOUNDS, &params, &mut StdRng::seed_from_u64(5));
    // (100.2 + (100 - 100.2) * 0.01, 99.9 + (100 - 99.9) * 0.01)
    assert!((p.position.x - 100.198).abs() < 1e-9);
    assert!((p.position.y - 99.901).abs() < 1e-9);
}

#[test]
fn wrap_teleports_to_the_opposite_buffered_edge() {
    let b = 50.0;
    assert_eq!(wrap(DVec2::new(851.0, 10.0), BOUNDS, b), DVec2::new(-50.0, 10.0));
    assert_eq!(wrap(DVec2::new(-51.0, 10.0), BOUNDS, b), DVec2::new(850.0, 10.0));
    assert_eq!(wrap(DVec2::new(10.0, 651.0), BOUNDS, b), DVec2::new(10.0, -50.0));
    assert_eq!(wrap(DVec2::new(10.0, -51.0), BOUNDS, b), DVec2::new(10.0, 650.0));
    // inside the buffer nothing happens
    assert_eq!(wrap(DVec2::new(-49.0, 649.0), BOUNDS, b), DVec2::new(-49.0, 649.0));
}

#[test]
fn pulse_phase_resets_at_full_turn() {
    let mut p = resting_particle(0.0, 0.0);
    p.pulse_phase = TAU - 0.005;
    p.pulse_speed = 0.01;
    p.advance_pulse();
    assert_eq!(p.pulse_phase, 0.0);

    p.advance_pulse();
    assert!((p.pulse_phase - 0.01).abs() < 1e-12);
}

#[test]
fn pulse_radius_never_negative() {
    let mut p = resting_particle(0.0, 0.0);
    p.size = valor_core::constants::SIZE_MIN;
    p.pulse_phase = 1.5 * std::f64::consts::PI; // sin = -1
    assert!(p.pulse_radius() >= 0.0);
    assert!(p.pulse_radius() < 1e-9);
}

#[test]
fn spawned_attributes_fall_in_their_ranges() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(9);
    let field = ParticleField::new(params, BOUNDS, &mut rng);
    assert_eq!(field.len(), 200);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < BOUNDS.x);
        assert!(p.position.y >= 0.0 && p.position.y < BOUNDS.y);
        assert_eq!(p.position, p.origin);
        assert!((0.5..2.5).contains(&p.size));
        assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
        assert!((0.0..TAU).contains(&p.pulse_phase));
        assert!((0.01..0.06).contains(&p.pulse_speed));
        assert!((0.2..1.0).contains(&p.connection_width));
        assert!((p.connection_color.0 as usize) < CONNECTION_PALETTE.len());
        assert!(p.color.r >= 155 && p.color.g < 50 && p.color.b >= 155);
        assert!((0.3..1.0).contains(&p.color.a));
    }
}

#[test]
fn resize_keeps_positions() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut field = ParticleField::new(FieldParams::default(), BOUNDS, &mut rng);
    let before: Vec<DVec2> = field.particles().iter().map(|p| p.position).collect();
    field.resize(DVec2::new(1920.0, 1080.0));
    assert_eq!(field.bounds(), DVec2::new(1920.0, 1080.0));
    let after: Vec<DVec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn shrinking_bounds_wraps_stragglers_on_next_update() {
    let params = FieldParams::default();
    let mut p = resting_particle(1500.0, 900.0);
    p.origin = DVec2::new(1500.0, 900.0);
    let mut field = ParticleField::from_particles(vec![p], params, DVec2::new(1920.0, 1080.0));
    field.resize(BOUNDS);
    field.update(PointerState::default(), &mut StdRng::seed_from_u64(11));
    assert_eq!(field.particles()[0].position, DVec2::new(-50.0, -50.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn positions_stay_in_buffered_bounds(
        seed in any::<u64>(),
        w in 1.0f64..2000.0,
        h in 1.0f64..2000.0,
        px in -100.0f64..2100.0,
        py in -100.0f64..2100.0,
        inside in any::<bool>(),
    ) {
        let params = FieldParams { particle_count: 40, ..FieldParams::default() };
        let buffer = params.wrap_buffer;
        let mut rng = StdRng::seed_from_u64(seed);
        let bounds = DVec2::new(w, h);
        let mut field = ParticleField::new(params, bounds, &mut rng);
        let pointer = pointer_at(px, py, inside);
        for _ in 0..60 {
            field.update(pointer, &mut rng);
            prop_assert_eq!(field.len(), 40);
            for p in field.particles() {
                prop_assert!(p.position.x >= -buffer && p.position.x <= w + buffer);
                prop_assert!(p.position.y >= -buffer && p.position.y <= h + buffer);
                prop_assert!(p.pulse_phase >= 0.0 && p.pulse_phase < TAU);
            }
        }
    }

    #[test]
    fn far_pointer_matches_absent_pointer(
        seed in any::<u64>(),
        angle in 0.0f64..TAU,
        extra in 0.001f64..500.0,
    ) {
        let params = FieldParams { particle_count: 1, ..FieldParams::default() };
        let mut spawn_rng = StdRng::seed_from_u64(seed);
        let base = Particle::spawn(&mut spawn_rng, BOUNDS, &params);
        // pointer measured from where the particle will be after drifting
        let drifted = base.position + base.velocity;
        let far = drifted + DVec2::new(angle.cos(), angle.sin()) * (params.attraction_radius + extra);

        let mut with_far = base.clone();
        let mut without = base;
        with_far.update(Some(far), BOUNDS, &params, &mut StdRng::seed_from_u64(seed ^ 1));
        without.update(None, BOUNDS, &params, &mut StdRng::seed_from_u64(seed ^ 1));
        prop_assert_eq!(with_far, without);
    }
}
