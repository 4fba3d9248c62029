//! One-shot confetti burst.
//!
//! SYSTEM CONTEXT
//! ==============
//! The physics (`Burst`, `Particle`) are plain Rust so they can be driven by
//! tests with a fixed random source. `fire` owns the browser side: it mounts a
//! full-viewport canvas, steps the burst once per animation frame, and removes
//! the canvas when the last particle expires.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use std::f64::consts::PI;

/// Launch direction in degrees (90 = straight up).
const LAUNCH_ANGLE_DEG: f64 = 90.0;
const START_VELOCITY: f64 = 45.0;
const VELOCITY_DECAY: f64 = 0.9;
/// Downward pull added every frame, in pixels.
const GRAVITY_PX: f64 = 3.0;
/// Frames a particle lives before it is dropped.
const LIFETIME_TICKS: u32 = 200;
const WOBBLE_RADIUS_PX: f64 = 10.0;
const TILT_STEP: f64 = 0.1;

/// Normalized launch point, `(0, 0)` is the top-left of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Parameters of a single burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstConfig {
    pub particle_count: u32,
    /// Full cone width in degrees, centered on the launch angle.
    pub spread_deg: f64,
    pub origin: Origin,
    pub colors: &'static [&'static str],
}

/// Burst fired when the findings are validated.
pub const VALIDATION_BURST: BurstConfig = BurstConfig {
    particle_count: 150,
    spread_deg: 70.0,
    origin: Origin { x: 0.5, y: 0.6 },
    colors: &["#e11d48", "#fda4af", "#fff1f2"],
};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    x: f64,
    y: f64,
    /// Heading in radians; negative values point up the screen.
    heading: f64,
    velocity: f64,
    wobble: f64,
    wobble_speed: f64,
    tilt: f64,
    flutter: f64,
    color: &'static str,
    tick: u32,
}

impl Particle {
    /// Launch a particle from `start` (pixels) using `random` for jitter.
    ///
    /// `random` must yield values in `[0, 1)`.
    pub fn launch(
        config: &BurstConfig,
        start: (f64, f64),
        color: &'static str,
        random: &mut impl FnMut() -> f64,
    ) -> Self {
        let launch = LAUNCH_ANGLE_DEG.to_radians();
        let spread = config.spread_deg.to_radians();
        let heading = -launch + (0.5 * spread - random() * spread);
        let velocity = START_VELOCITY * 0.5 + random() * START_VELOCITY;
        let wobble = random() * 10.0;
        let wobble_speed = (random() * 0.1 + 0.05).min(0.11);
        let tilt = (random() * 0.5 + 0.25) * PI;
        let flutter = random() + 2.0;

        Self {
            x: start.0,
            y: start.1,
            heading,
            velocity,
            wobble,
            wobble_speed,
            tilt,
            flutter,
            color,
            tick: 0,
        }
    }

    /// Advance one frame. Returns `false` once the particle has expired.
    pub fn step(&mut self) -> bool {
        self.x += self.heading.cos() * self.velocity;
        self.y += self.heading.sin() * self.velocity + GRAVITY_PX;
        self.velocity *= VELOCITY_DECAY;
        self.wobble += self.wobble_speed;
        self.tilt += TILT_STEP;
        self.tick = self.tick.saturating_add(1);
        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.tick < LIFETIME_TICKS
    }

    /// Fades linearly from 1 to 0 over the particle lifetime.
    pub fn opacity(&self) -> f64 {
        1.0 - f64::from(self.tick) / f64::from(LIFETIME_TICKS)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Quad outline of the fluttering paper piece, in drawing order.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let wobble_x = self.x + WOBBLE_RADIUS_PX * self.wobble.cos();
        let wobble_y = self.y + WOBBLE_RADIUS_PX * self.wobble.sin();
        let dx = self.flutter * self.tilt.cos();
        let dy = self.flutter * self.tilt.sin();
        [
            (self.x, self.y),
            (wobble_x, self.y + dy),
            (wobble_x + dx, wobble_y + dy),
            (self.x + dx, wobble_y),
        ]
    }
}

/// A set of live particles launched together.
#[derive(Clone, Debug, Default)]
pub struct Burst {
    particles: Vec<Particle>,
}

impl Burst {
    /// Launch `config.particle_count` particles inside a `width` x `height`
    /// viewport, cycling through the configured colors.
    pub fn new(config: &BurstConfig, width: f64, height: f64, random: &mut impl FnMut() -> f64) -> Self {
        let start = (config.origin.x * width, config.origin.y * height);
        let particles = (0..config.particle_count as usize)
            .filter_map(|i| {
                let color = config.colors.get(i % config.colors.len().max(1)).copied()?;
                Some(Particle::launch(config, start, color, &mut *random))
            })
            .collect();
        Self { particles }
    }

    /// Advance every particle one frame and drop the expired ones.
    ///
    /// Returns `true` while anything is left to draw.
    pub fn step(&mut self) -> bool {
        self.particles.retain_mut(Particle::step);
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Backing-store size for a viewport length in CSS pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn canvas_extent(px: f64) -> u32 {
    if px.is_finite() {
        px.round().clamp(0.0, f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(feature = "hydrate")]
type FrameSlot = std::rc::Rc<std::cell::RefCell<Option<wasm_bindgen::closure::Closure<dyn FnMut(f64)>>>>;

/// Play `config` over the current page.
#[cfg(feature = "hydrate")]
pub fn fire(config: &BurstConfig) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let canvas = match document
        .create_element("canvas")
        .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
    {
        Ok(Ok(canvas)) => canvas,
        _ => {
            log::warn!("confetti: could not create canvas");
            return;
        }
    };
    canvas.set_class_name("confetti-canvas");

    let width = window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    let height = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    canvas.set_width(canvas_extent(width));
    canvas.set_height(canvas_extent(height));

    let Ok(Some(ctx)) = canvas.get_context("2d") else {
        log::warn!("confetti: 2d context unavailable");
        return;
    };
    let Ok(ctx) = ctx.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        log::warn!("confetti: 2d context has unexpected type");
        return;
    };
    if let Err(err) = body.append_child(&canvas) {
        log::warn!("confetti: could not attach canvas: {err:?}");
        return;
    }

    let mut burst = Burst::new(config, width, height, &mut js_sys::Math::random);
    log::debug!("confetti: launched {} particles", burst.particles().len());

    let frame: FrameSlot = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let alive = burst.step();
        draw(&ctx, &burst, width, height);
        if !alive || !request_frame(&frame_for_cb) {
            canvas.remove();
            frame_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    if !request_frame(&frame) {
        frame.borrow_mut().take();
    }
}

/// Without a browser there is nothing to draw on.
#[cfg(not(feature = "hydrate"))]
pub fn fire(_config: &BurstConfig) {}

#[cfg(feature = "hydrate")]
fn request_frame(frame: &FrameSlot) -> bool {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let slot = frame.borrow();
    let Some(cb) = slot.as_ref() else {
        return false;
    };
    window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok()
}

#[cfg(feature = "hydrate")]
fn draw(ctx: &web_sys::CanvasRenderingContext2d, burst: &Burst, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for particle in burst.particles() {
        let [a, b, c, d] = particle.corners();
        ctx.set_fill_style_str(&crate::util::color::rgba_css(particle.color(), particle.opacity()));
        ctx.begin_path();
        ctx.move_to(a.0, a.1);
        ctx.line_to(b.0, b.1);
        ctx.line_to(c.0, c.1);
        ctx.line_to(d.0, d.1);
        ctx.close_path();
        ctx.fill();
    }
}
