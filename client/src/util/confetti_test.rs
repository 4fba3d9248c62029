use super::*;

fn constant(value: f64) -> impl FnMut() -> f64 {
    move || value
}

fn cycling(values: &'static [f64]) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

#[test]
fn validation_burst_matches_celebration_parameters() {
    assert_eq!(VALIDATION_BURST.particle_count, 150);
    assert_eq!(VALIDATION_BURST.spread_deg, 70.0);
    assert_eq!(VALIDATION_BURST.origin.y, 0.6);
    assert_eq!(VALIDATION_BURST.colors, &["#e11d48", "#fda4af", "#fff1f2"]);
}

#[test]
fn burst_launches_configured_particle_count_from_origin() {
    let burst = Burst::new(&VALIDATION_BURST, 1000.0, 500.0, &mut constant(0.5));
    assert_eq!(burst.particles().len(), 150);
    for particle in burst.particles() {
        assert_eq!(particle.position(), (500.0, 300.0));
    }
}

#[test]
fn burst_cycles_palette_colors() {
    let burst = Burst::new(&VALIDATION_BURST, 100.0, 100.0, &mut constant(0.5));
    let colors = burst.particles().iter().take(4).map(Particle::color).collect::<Vec<_>>();
    assert_eq!(colors, vec!["#e11d48", "#fda4af", "#fff1f2", "#e11d48"]);
}

#[test]
fn burst_with_empty_palette_launches_nothing() {
    let config = BurstConfig { colors: &[], ..VALIDATION_BURST };
    let burst = Burst::new(&config, 100.0, 100.0, &mut constant(0.5));
    assert!(burst.particles().is_empty());
}

#[test]
fn centered_jitter_launches_straight_up() {
    let particle = Particle::launch(&VALIDATION_BURST, (0.0, 0.0), "#e11d48", &mut constant(0.5));
    assert!((particle.heading() + std::f64::consts::FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn headings_stay_inside_spread_cone() {
    let mut random = cycling(&[0.0, 0.25, 0.5, 0.75, 0.999]);
    let burst = Burst::new(&VALIDATION_BURST, 800.0, 600.0, &mut random);
    let lower = -(90.0_f64 + 35.0).to_radians() - 1e-9;
    let upper = -(90.0_f64 - 35.0).to_radians() + 1e-9;
    for particle in burst.particles() {
        let heading = particle.heading();
        assert!(heading >= lower && heading <= upper, "heading {heading} outside cone");
    }
}

#[test]
fn particle_rises_then_falls() {
    let mut particle = Particle::launch(&VALIDATION_BURST, (100.0, 100.0), "#e11d48", &mut constant(0.5));
    particle.step();
    let (_, after_first) = particle.position();
    assert!(after_first < 100.0);
    for _ in 0..180 {
        particle.step();
    }
    let (_, later) = particle.position();
    assert!(later > after_first);
}

#[test]
fn particle_fades_and_expires_after_lifetime() {
    let mut particle = Particle::launch(&VALIDATION_BURST, (0.0, 0.0), "#e11d48", &mut constant(0.5));
    assert_eq!(particle.opacity(), 1.0);
    for _ in 0..100 {
        assert!(particle.step());
    }
    assert!((particle.opacity() - 0.5).abs() < 1e-9);
    for _ in 0..99 {
        assert!(particle.step());
    }
    assert!(!particle.step());
    assert!(!particle.is_alive());
}

#[test]
fn burst_step_reports_done_once_every_particle_expired() {
    let mut burst = Burst::new(&VALIDATION_BURST, 400.0, 400.0, &mut constant(0.3));
    for _ in 0..199 {
        assert!(burst.step());
    }
    assert!(!burst.step());
    assert!(burst.particles().is_empty());
}

#[test]
fn corners_start_at_particle_position() {
    let particle = Particle::launch(&VALIDATION_BURST, (12.0, 34.0), "#fda4af", &mut constant(0.5));
    let [first, ..] = particle.corners();
    assert_eq!(first, (12.0, 34.0));
}

#[test]
fn canvas_extent_rounds_and_clamps() {
    assert_eq!(canvas_extent(1280.4), 1280);
    assert_eq!(canvas_extent(719.6), 720);
    assert_eq!(canvas_extent(-5.0), 0);
    assert_eq!(canvas_extent(f64::NAN), 0);
    assert_eq!(canvas_extent(f64::INFINITY), 0);
    assert_eq!(canvas_extent(1e12), u32::MAX);
}
