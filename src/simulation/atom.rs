use crate::config::AtomConfig;
use crate::constants::{NUCLEUS_WOBBLE_AMPLITUDE, NUCLEUS_WOBBLE_RATE};
use crate::error::Result;
use crate::physics::electron::{ElectronOrbits, ElectronState};
use crate::physics::nucleus::{NucleonSampler, Nucleus, NucleusBuilder, nucleus_radius};
use crate::physics::particle::Particle;
use crate::physics::shells::{self, ShellDistribution, ValenceShell};
use crate::simulation::session::ElementSelected;
use glam::Vec3;
use rand::Rng;

/// A generated atom: a sampled nucleus plus its orbiting electrons.
#[derive(Clone, Debug)]
pub struct Atom {
    atomic_number: u32,
    neutron_count: u32,
    is_noble_gas: bool,
    distribution: ShellDistribution,
    valence: ValenceShell,
    nucleus: Nucleus,
    orbits: ElectronOrbits,
}

impl Atom {
    pub fn generate<R: Rng>(
        selection: &ElementSelected,
        config: &AtomConfig,
        sampler: &mut NucleonSampler<R>,
    ) -> Result<Self> {
        let distribution = shells::distribute(selection.atomic_number)?;
        let valence = distribution.valence_shell(selection.is_noble_gas);
        let radius = nucleus_radius(selection.atomic_number, config);

        let nucleus = NucleusBuilder::new(
            selection.atomic_number as usize,
            selection.neutrons as usize,
            radius,
        )
        .build(sampler);
        let orbits = ElectronOrbits::build(&distribution, &valence, radius, config);

        log::debug!(
            "Generated atom Z={} N={} shells={:?} valence={:?}",
            selection.atomic_number,
            selection.neutrons,
            distribution.occupancy(),
            valence.index()
        );

        Ok(Self {
            atomic_number: selection.atomic_number,
            neutron_count: selection.neutrons,
            is_noble_gas: selection.is_noble_gas,
            distribution,
            valence,
            nucleus,
            orbits,
        })
    }

    /// Advance every electron by one tick.
    pub fn tick(&mut self) {
        self.orbits.update();
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn neutron_count(&self) -> u32 {
        self.neutron_count
    }

    pub fn is_noble_gas(&self) -> bool {
        self.is_noble_gas
    }

    pub fn distribution(&self) -> &ShellDistribution {
        &self.distribution
    }

    pub fn valence_shell(&self) -> &ValenceShell {
        &self.valence
    }

    pub fn nucleus(&self) -> &Nucleus {
        &self.nucleus
    }

    pub fn electrons(&self) -> &[ElectronState] {
        self.orbits.electrons()
    }

    pub fn shell_radii(&self) -> &[f32] {
        self.orbits.shell_radii()
    }

    pub fn proton_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.nucleus.protons.iter().map(Particle::position)
    }

    pub fn neutron_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.nucleus.neutrons.iter().map(Particle::position)
    }

    pub fn electron_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.orbits.positions()
    }

    /// Yaw (radians) for the nucleus sway at `elapsed_ms` since start-up.
    pub fn nucleus_yaw(elapsed_ms: f64) -> f32 {
        (elapsed_ms * NUCLEUS_WOBBLE_RATE).sin() as f32 * NUCLEUS_WOBBLE_AMPLITUDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn selection(atomic_number: u32, neutrons: u32, is_noble_gas: bool) -> ElementSelected {
        ElementSelected {
            atomic_number,
            neutrons,
            is_noble_gas,
        }
    }

    #[test]
    fn hydrogen_atom() {
        let mut sampler = NucleonSampler::with_seed(1);
        let atom = Atom::generate(&selection(1, 0, false), &AtomConfig::default(), &mut sampler)
            .unwrap();

        assert_eq!(atom.proton_positions().collect::<Vec<_>>(), vec![Vec3::ZERO]);
        assert_eq!(atom.neutron_positions().count(), 0);
        assert_eq!(atom.electrons().len(), 1);
        assert!(atom.electrons()[0].is_valence_shell);
        assert_eq!(atom.valence_shell().index(), Some(0));
    }

    #[test]
    fn argon_atom() {
        let mut sampler = NucleonSampler::with_seed(2);
        let atom = Atom::generate(&selection(18, 22, true), &AtomConfig::default(), &mut sampler)
            .unwrap();

        assert_eq!(atom.distribution().occupancy(), &[2, 8, 8]);
        assert_eq!(atom.nucleus().proton_count(), 18);
        assert_eq!(atom.nucleus().neutron_count(), 22);
        assert_eq!(atom.shell_radii().len(), 3);
        assert!(atom.electrons().iter().all(|e| !e.is_valence_shell));

        let radius = atom.nucleus().radius();
        assert!(
            atom.proton_positions()
                .chain(atom.neutron_positions())
                .all(|p| p.length() <= radius + 1e-5)
        );
    }

    #[test]
    fn tick_moves_electrons() {
        let mut sampler = NucleonSampler::with_seed(3);
        let mut atom =
            Atom::generate(&selection(6, 6, false), &AtomConfig::default(), &mut sampler).unwrap();
        let before: Vec<Vec3> = atom.electron_positions().collect();
        atom.tick();
        let after: Vec<Vec3> = atom.electron_positions().collect();
        assert!(before.iter().zip(&after).all(|(a, b)| a != b));
    }

    #[test]
    fn unsupported_atomic_number() {
        let mut sampler = NucleonSampler::with_seed(4);
        let err = Atom::generate(&selection(61, 90, false), &AtomConfig::default(), &mut sampler)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedAtomicNumber { .. }));
    }

    #[test]
    fn nucleus_sway_is_bounded() {
        assert_eq!(Atom::nucleus_yaw(0.0), 0.0);
        for ms in [10.0, 1_000.0, 5_236.0, 123_456.0] {
            assert!(Atom::nucleus_yaw(ms).abs() <= NUCLEUS_WOBBLE_AMPLITUDE);
        }
    }
}
