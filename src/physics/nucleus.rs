use crate::config::AtomConfig;
use crate::constants::{
    NEUTRON_CORE_BIAS, NEUTRON_CORE_FRACTION, NEUTRON_CORE_PROBABILITY, PROTON_RADIAL_BIAS,
};
use crate::physics::particle::Particle;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, UnitSphere};

#[derive(Clone, Debug)]
pub struct Proton {
    position: Vec3,
}

#[derive(Clone, Debug)]
pub struct Neutron {
    position: Vec3,
}

impl Proton {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl Neutron {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl Particle for Proton {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl Particle for Neutron {
    fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Clone, Debug)]
pub struct Nucleus {
    radius: f32,
    pub protons: Vec<Proton>,
    pub neutrons: Vec<Neutron>,
}

impl Nucleus {
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn proton_count(&self) -> usize {
        self.protons.len()
    }

    pub fn neutron_count(&self) -> usize {
        self.neutrons.len()
    }
}

/// Visual nucleus radius, growing with the cube root of the proton count.
pub fn nucleus_radius(atomic_number: u32, config: &AtomConfig) -> f32 {
    config.nucleus_base_radius + (atomic_number as f32).cbrt() * config.nucleus_growth
}

pub struct NucleusBuilder {
    proton_count: usize,
    neutron_count: usize,
    radius: f32,
}

impl NucleusBuilder {
    pub fn new(proton_count: usize, neutron_count: usize, radius: f32) -> Self {
        Self {
            proton_count,
            neutron_count,
            radius,
        }
    }

    /// Protons are drawn first, then neutrons, from the same sampler stream.
    pub fn build<R: Rng>(&self, sampler: &mut NucleonSampler<R>) -> Nucleus {
        let protons = sampler
            .sample_protons(self.proton_count, self.radius)
            .into_iter()
            .map(Proton::new)
            .collect();
        let neutrons = sampler
            .sample_neutrons(self.neutron_count, self.radius)
            .into_iter()
            .map(Neutron::new)
            .collect();

        Nucleus {
            radius: self.radius,
            protons,
            neutrons,
        }
    }
}

/// Places nucleons inside a sphere with a center-weighted radial bias.
pub struct NucleonSampler<R = ChaCha8Rng> {
    rng: R,
}

impl NucleonSampler<ChaCha8Rng> {
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_config(config: &AtomConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for NucleonSampler<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NucleonSampler<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// `r = R * U^2`. A lone proton sits exactly at the center.
    pub fn sample_protons(&mut self, count: usize, nucleus_radius: f32) -> Vec<Vec3> {
        if count == 1 {
            return vec![Vec3::ZERO];
        }

        (0..count)
            .map(|_| {
                let u: f32 = self.rng.gen_range(0.0..1.0);
                let r = nucleus_radius * u.powf(PROTON_RADIAL_BIAS);
                random_unit_vector(&mut self.rng) * r
            })
            .collect()
    }

    /// Mixture of a dense core (`r < 0.6 R`) and an outer fill (`0.6 R <= r < R`).
    pub fn sample_neutrons(&mut self, count: usize, nucleus_radius: f32) -> Vec<Vec3> {
        (0..count)
            .map(|_| {
                let in_core = self.rng.gen_bool(NEUTRON_CORE_PROBABILITY);
                let u: f32 = self.rng.gen_range(0.0..1.0);
                let r = if in_core {
                    NEUTRON_CORE_FRACTION * nucleus_radius * u.powf(NEUTRON_CORE_BIAS)
                } else {
                    nucleus_radius * (NEUTRON_CORE_FRACTION + (1.0 - NEUTRON_CORE_FRACTION) * u)
                };
                random_unit_vector(&mut self.rng) * r
            })
            .collect()
    }
}

fn random_unit_vector<R: Rng>(rng: &mut R) -> Vec3 {
    let [x, y, z]: [f32; 3] = UnitSphere.sample(rng);
    Vec3::new(x, y, z)
}
