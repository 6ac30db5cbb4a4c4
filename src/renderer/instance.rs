use crate::physics::particle::Particle;
use crate::simulation::atom::Atom;
use glam::Vec3;

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Proton = 0,
    Neutron = 1,
    Electron = 2,
    ValenceElectron = 3,
}

/// One drawable particle. Laid out for direct upload as an instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub kind: u32,
}

impl ParticleInstance {
    pub fn new(position: Vec3, kind: ParticleKind) -> Self {
        Self {
            position: position.to_array(),
            kind: kind as u32,
        }
    }
}

/// Protons, then neutrons, then electrons.
///
/// Nucleon entries never change for a given atom; only the electron tail needs
/// [`refresh_electrons`] after each tick.
pub fn build_instances(atom: &Atom) -> Vec<ParticleInstance> {
    let nucleons = atom.nucleus().proton_count() + atom.nucleus().neutron_count();
    let mut instances = Vec::with_capacity(nucleons + atom.electrons().len());

    instances.extend(
        atom.proton_positions()
            .map(|p| ParticleInstance::new(p, ParticleKind::Proton)),
    );
    instances.extend(
        atom.neutron_positions()
            .map(|p| ParticleInstance::new(p, ParticleKind::Neutron)),
    );
    instances.extend(atom.electrons().iter().map(|electron| {
        let kind = if electron.is_valence_shell {
            ParticleKind::ValenceElectron
        } else {
            ParticleKind::Electron
        };
        ParticleInstance::new(electron.position(), kind)
    }));

    instances
}

/// Overwrite the electron tail of `instances` with current positions.
///
/// Falls back to a full rebuild when `instances` was built for another atom.
pub fn refresh_electrons(instances: &mut Vec<ParticleInstance>, atom: &Atom) {
    let electron_count = atom.electrons().len();
    let nucleon_count = atom.nucleus().proton_count() + atom.nucleus().neutron_count();
    if instances.len() != nucleon_count + electron_count {
        *instances = build_instances(atom);
        return;
    }

    for (slot, position) in instances[nucleon_count..]
        .iter_mut()
        .zip(atom.electron_positions())
    {
        slot.position = position.to_array();
    }
}

pub fn as_bytes(instances: &[ParticleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
