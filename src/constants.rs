// Electron shells
pub const SHELL_CAPACITIES: [u32; 4] = [2, 8, 18, 32];
pub const MAX_SUPPORTED_ELECTRONS: u32 = total_capacity(&SHELL_CAPACITIES);

const fn total_capacity(capacities: &[u32]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < capacities.len() {
        total += capacities[i];
        i += 1;
    }
    total
}

// Nucleon sampling
pub const PROTON_RADIAL_BIAS: f32 = 2.0;
pub const NEUTRON_CORE_PROBABILITY: f64 = 0.65;
pub const NEUTRON_CORE_FRACTION: f32 = 0.6; // core regime stays inside 0.6 R
pub const NEUTRON_CORE_BIAS: f32 = 2.5;

// Nucleus sway, radians and radians per millisecond
pub const NUCLEUS_WOBBLE_AMPLITUDE: f32 = 0.05;
pub const NUCLEUS_WOBBLE_RATE: f64 = 0.0003;

// Group numbers the chemistry rules key off
pub const NOBLE_GAS_GROUP: u32 = 18;
