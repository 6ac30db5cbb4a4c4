use crate::config::AtomConfig;
use crate::error::Result;
use crate::physics::particle::Particle;
use crate::physics::shells::{self, ShellDistribution, ValenceShell};
use glam::Vec3;
use std::f32::consts::TAU;

/// An electron travelling a planar circular orbit around the nucleus.
#[derive(Clone, Debug, PartialEq)]
pub struct ElectronState {
    pub shell_index: usize,
    pub radius: f32,
    pub angle: f32,
    pub angular_speed: f32,
    pub is_valence_shell: bool,
}

impl ElectronState {
    pub fn new(
        shell_index: usize,
        radius: f32,
        angle: f32,
        angular_speed: f32,
        is_valence_shell: bool,
    ) -> Self {
        Self {
            shell_index,
            radius,
            angle,
            angular_speed,
            is_valence_shell,
        }
    }

    /// One tick. The angle is left unwrapped; cos/sin absorb the period.
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
    }
}

impl Particle for ElectronState {
    fn position(&self) -> Vec3 {
        orbit_position(self.radius, self.angle)
    }
}

fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

pub fn shell_radius(nucleus_radius: f32, shell_index: usize, config: &AtomConfig) -> f32 {
    nucleus_radius + config.shell_offset + shell_index as f32 * config.shell_spacing
}

/// Outer shells turn slower; the valence shell turns slightly faster than a
/// core shell at the same index.
pub fn angular_speed(shell_index: usize, is_valence_shell: bool, config: &AtomConfig) -> f32 {
    let base = if is_valence_shell {
        config.valence_speed
    } else {
        config.core_speed
    };
    base / (shell_index + 1) as f32
}

/// Every electron of the active atom, grouped shell by shell.
#[derive(Clone, Debug, Default)]
pub struct ElectronOrbits {
    electrons: Vec<ElectronState>,
    shell_radii: Vec<f32>,
}

impl ElectronOrbits {
    pub fn build(
        distribution: &ShellDistribution,
        valence: &ValenceShell,
        nucleus_radius: f32,
        config: &AtomConfig,
    ) -> Self {
        let mut electrons = Vec::with_capacity(distribution.total() as usize);
        let mut shell_radii = Vec::with_capacity(distribution.len());

        for (shell_index, count) in distribution.iter() {
            let radius = shell_radius(nucleus_radius, shell_index, config);
            let is_valence_shell = valence.is_valence(shell_index);
            let speed = angular_speed(shell_index, is_valence_shell, config);
            shell_radii.push(radius);

            for i in 0..count {
                let angle = (i as f32 / count as f32) * TAU;
                electrons.push(ElectronState::new(
                    shell_index,
                    radius,
                    angle,
                    speed,
                    is_valence_shell,
                ));
            }
        }

        Self {
            electrons,
            shell_radii,
        }
    }

    pub fn for_atom(
        atomic_number: u32,
        nucleus_radius: f32,
        is_noble_gas: bool,
        config: &AtomConfig,
    ) -> Result<Self> {
        let distribution = shells::distribute(atomic_number)?;
        let valence = distribution.valence_shell(is_noble_gas);
        Ok(Self::build(&distribution, &valence, nucleus_radius, config))
    }

    pub fn update(&mut self) {
        for electron in &mut self.electrons {
            electron.advance();
        }
    }

    pub fn electrons(&self) -> &[ElectronState] {
        &self.electrons
    }

    /// Orbit ring radius of each occupied shell, innermost first.
    pub fn shell_radii(&self) -> &[f32] {
        &self.shell_radii
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.electrons.iter().map(Particle::position)
    }

    pub fn len(&self) -> usize {
        self.electrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty()
    }
}
