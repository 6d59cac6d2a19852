//! Fixed-capacity ring buffer of particles.
//!
//! The active range is `[first_active, first_free)` modulo capacity. Spawning
//! into a full pool overwrites the oldest particle: the pool never grows and
//! `spawn` never fails. That eviction is the memory bound of the whole engine,
//! so it is part of the contract and covered by tests.

use crate::curve::Point;
use crate::particle::Particle;
use std::ops::Range;

pub struct ParticlePool {
    particles: Vec<Particle>,
    first_active: usize,
    first_free: usize,
    active: usize,
    evicted: u64,
}

impl ParticlePool {
    pub fn new(capacity: usize, trail_len: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            particles: (0..capacity).map(|_| Particle::new(trail_len)).collect(),
            first_active: 0,
            first_free: 0,
            active: 0,
            evicted: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.active == self.capacity()
    }

    /// Total particles dropped to make room since construction or `clear`.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn first_active(&self) -> usize {
        self.first_active
    }

    pub fn first_free(&self) -> usize {
        self.first_free
    }

    /// Write the next free slot and return it for further setup.
    pub fn spawn(&mut self, position: Point, velocity: Point) -> &mut Particle {
        let cap = self.capacity();
        let slot = self.first_free;
        self.first_free = (self.first_free + 1) % cap;
        if self.active == cap {
            self.first_active = (self.first_active + 1) % cap;
            self.evicted += 1;
        } else {
            self.active += 1;
        }
        let p = &mut self.particles[slot];
        p.reset(position, velocity);
        p
    }

    /// Slot ranges of the active particles, oldest first. The second range
    /// is empty unless the active range wraps past the end of storage.
    pub fn active_ranges(&self) -> (Range<usize>, Range<usize>) {
        if self.active == 0 {
            return (0..0, 0..0);
        }
        let cap = self.capacity();
        let end = self.first_active + self.active;
        if end <= cap {
            (self.first_active..end, 0..0)
        } else {
            (self.first_active..cap, 0..end - cap)
        }
    }

    /// Active particles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        let (a, b) = self.active_ranges();
        self.particles[a].iter().chain(self.particles[b].iter())
    }

    pub fn for_each_active_mut(&mut self, mut f: impl FnMut(&mut Particle)) {
        let (a, b) = self.active_ranges();
        for p in &mut self.particles[a] {
            f(p);
        }
        for p in &mut self.particles[b] {
            f(p);
        }
    }

    /// Drop leading particles whose age reached `lifetime`. Returns how many
    /// were retired.
    pub fn retire_expired(&mut self, lifetime: f32) -> usize {
        let cap = self.capacity();
        let mut retired = 0;
        while self.active > 0 && self.particles[self.first_active].age >= lifetime {
            self.first_active = (self.first_active + 1) % cap;
            self.active -= 1;
            retired += 1;
        }
        retired
    }

    pub fn clear(&mut self) {
        self.first_active = 0;
        self.first_free = 0;
        self.active = 0;
        self.evicted = 0;
    }
}
