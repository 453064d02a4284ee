// sim/ - Fountain simulation
//
// A fixed pool of droplet slots. Every frame droplets are spawned into
// empty slots, live ones are moved and drawn, and old ones are cleared so
// their slots can be reused.

mod droplet;

pub use droplet::Droplet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::FountainConfig;
use crate::input::{Command, InputEvent};
use crate::render::{Sprite, Surface};

// Physics constants
const GRAVITY: f32 = 0.3;
const JITTER: f32 = 3.0;       // spawn offset from origin, both axes
const SIZE_MIN: f32 = 4.0;
const SIZE_MAX: f32 = 11.0;
const VEL_X_MAX: f32 = 1.0;    // sideways, either direction
const VEL_Y_MIN: f32 = -10.0;  // upward launch
const VEL_Y_MAX: f32 = -5.0;

// Spawn head start so the fountain looks full right away
const START_AGE_MAX: u32 = 40;

const ALPHA_MIN: u8 = 32;
const ALPHA_MAX: u8 = 127;

/// Droplet pool manager
pub struct Fountain {
    config: FountainConfig,

    // Pool: None = free slot
    slots: Box<[Option<Droplet>]>,

    // Spawn anchor, also where the fountain image is drawn
    origin: (f32, f32),
    sprite: Option<Sprite>,

    rng: SmallRng,
}

impl Fountain {
    /// Fountain centred on a `width` x `height` surface, randomly seeded.
    pub fn new(config: FountainConfig, width: u32, height: u32) -> Self {
        Self::with_seed(config, width, height, entropy_seed())
    }

    pub fn with_seed(config: FountainConfig, width: u32, height: u32, seed: u64) -> Self {
        Self {
            slots: vec![None; config.capacity].into_boxed_slice(),
            origin: centre(width, height),
            sprite: None,
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    /// One frame: clear, draw the fountain, then spawn, step and evict.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.background(self.config.background);
        if let Some(sprite) = &self.sprite {
            surface.image(sprite, self.origin.0, self.origin.1);
        }

        self.spawn(self.config.spawn_per_frame);
        self.step(surface);
        self.evict(self.config.max_age);
    }

    /// Fill up to `count` empty slots, lowest index first.
    /// Returns how many droplets were actually spawned.
    pub fn spawn(&mut self, count: usize) -> usize {
        let mut spawned = 0;

        for i in 0..self.slots.len() {
            if spawned >= count { break; }
            if self.slots[i].is_some() { continue; }

            let droplet = self.new_droplet();
            self.slots[i] = Some(droplet);
            spawned += 1;
        }

        if spawned < count {
            trace!(requested = count, spawned, "droplet pool full");
        }
        spawned
    }

    /// Move and draw every live droplet, then age it by one frame.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for droplet in self.slots.iter_mut().flatten() {
            advance(droplet, surface);
            droplet.age = droplet.age.saturating_add(1);
        }
    }

    /// Move and draw the droplet in slot `index` without aging it.
    pub fn update_droplet<S: Surface + ?Sized>(&mut self, index: usize, surface: &mut S) {
        if let Some(Some(droplet)) = self.slots.get_mut(index) {
            advance(droplet, surface);
        }
    }

    /// Clear every droplet older than `max_age`. Returns how many were cleared.
    pub fn evict(&mut self, max_age: u32) -> usize {
        let mut evicted = 0;

        for slot in self.slots.iter_mut() {
            if matches!(slot, Some(d) if d.age > max_age) {
                *slot = None;
                evicted += 1;
            }
        }

        if evicted > 0 {
            trace!(evicted, max_age, "droplets evicted");
        }
        evicted
    }

    pub fn retarget(&mut self, x: f32, y: f32) {
        debug!(x, y, "fountain moved");
        self.origin = (x, y);
    }

    /// Apply an input event; returns whatever the host still has to do.
    pub fn handle(&mut self, event: InputEvent) -> Option<Command> {
        if let Some((x, y)) = event.target() {
            self.retarget(x, y);
        }
        event.command()
    }

    /// New surface size: re-centre and start from an empty pool.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.origin = centre(width, height);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    pub fn set_sprite(&mut self, sprite: Option<Sprite>) {
        self.sprite = sprite;
    }

    /// Put `droplet` into slot `index`, returning what was there.
    /// Out-of-range indices are ignored.
    pub fn insert(&mut self, index: usize, droplet: Droplet) -> Option<Droplet> {
        self.slots.get_mut(index)?.replace(droplet)
    }

    // Accessors
    pub fn config(&self) -> &FountainConfig { &self.config }
    pub fn origin(&self) -> (f32, f32) { self.origin }
    pub fn capacity(&self) -> usize { self.slots.len() }
    pub fn slots(&self) -> &[Option<Droplet>] { &self.slots }
    pub fn live(&self) -> usize { self.slots.iter().flatten().count() }

    pub fn droplet(&self, index: usize) -> Option<&Droplet> {
        self.slots.get(index)?.as_ref()
    }

    pub fn droplet_mut(&mut self, index: usize) -> Option<&mut Droplet> {
        self.slots.get_mut(index)?.as_mut()
    }

    fn new_droplet(&mut self) -> Droplet {
        let (ox, oy) = self.origin;
        let rng = &mut self.rng;

        Droplet {
            position_x: ox + rng.gen_range(-JITTER..JITTER),
            position_y: oy + rng.gen_range(-JITTER..JITTER),
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            velocity_x: rng.gen_range(-VEL_X_MAX..VEL_X_MAX),
            velocity_y: rng.gen_range(VEL_Y_MIN..VEL_Y_MAX),
            age: rng.gen_range(0..=START_AGE_MAX),
            transparency: rng.gen_range(ALPHA_MIN..=ALPHA_MAX),
            color: self.config.start_color.lerp(self.config.end_color, rng.gen_range(0.0..1.0)),
        }
    }
}

// Gravity, then move, then draw at the new position
#[inline]
fn advance<S: Surface + ?Sized>(d: &mut Droplet, surface: &mut S) {
    d.velocity_y += GRAVITY;
    d.position_x += d.velocity_x;
    d.position_y += d.velocity_y;

    surface.fill(d.color, d.transparency);
    surface.circle(d.position_x, d.position_y, d.size);
}

fn centre(width: u32, height: u32) -> (f32, f32) {
    ((width / 2) as f32, (height / 2) as f32)
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}
