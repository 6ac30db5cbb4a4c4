use crate::constants::{MAX_SUPPORTED_ELECTRONS, SHELL_CAPACITIES};
use crate::error::{Error, Result};

/// Electron count per shell, innermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellDistribution {
    occupancy: Vec<u32>,
}

/// Fill shells in order, each taking as many electrons as its capacity allows.
///
/// Atomic numbers beyond the combined shell capacity are rejected rather than
/// truncated.
pub fn distribute(atomic_number: u32) -> Result<ShellDistribution> {
    if atomic_number > MAX_SUPPORTED_ELECTRONS {
        return Err(Error::UnsupportedAtomicNumber {
            atomic_number,
            capacity: MAX_SUPPORTED_ELECTRONS,
        });
    }

    let mut remaining = atomic_number;
    let mut occupancy = Vec::with_capacity(SHELL_CAPACITIES.len());
    for capacity in SHELL_CAPACITIES {
        if remaining == 0 {
            break;
        }
        let used = capacity.min(remaining);
        occupancy.push(used);
        remaining -= used;
    }

    Ok(ShellDistribution { occupancy })
}

impl ShellDistribution {
    pub fn occupancy(&self) -> &[u32] {
        &self.occupancy
    }

    /// Number of occupied shells.
    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.occupancy.iter().sum()
    }

    /// `(shell_index, electron_count)` pairs, innermost first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.occupancy.iter().copied().enumerate()
    }

    /// The outermost occupied shell, unless the caller flags a noble gas.
    pub fn valence_shell(&self, is_noble_gas: bool) -> ValenceShell {
        let index = if is_noble_gas {
            None
        } else {
            self.occupancy.len().checked_sub(1)
        };
        ValenceShell {
            index,
            shell_count: self.occupancy.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValenceShell {
    index: Option<usize>,
    shell_count: usize,
}

impl ValenceShell {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_valence(&self, shell_index: usize) -> bool {
        self.index == Some(shell_index)
    }

    pub fn flags(&self) -> Vec<bool> {
        (0..self.shell_count).map(|i| self.is_valence(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_limit_is_the_sum_of_shell_capacities() {
        assert_eq!(SHELL_CAPACITIES.iter().sum::<u32>(), MAX_SUPPORTED_ELECTRONS);
        assert_eq!(MAX_SUPPORTED_ELECTRONS, 60);
    }

    #[test]
    fn totals_and_capacities_hold_for_supported_range() {
        for z in 1..=MAX_SUPPORTED_ELECTRONS {
            let shells = distribute(z).unwrap();
            assert_eq!(shells.total(), z, "Z={z}");
            for (i, count) in shells.iter() {
                assert!(count > 0, "Z={z} shell {i} is empty");
                assert!(count <= SHELL_CAPACITIES[i], "Z={z} shell {i} overfilled");
            }
            // Minimal: every shell but the last is full.
            for (i, count) in shells.iter().take(shells.len() - 1) {
                assert_eq!(count, SHELL_CAPACITIES[i], "Z={z} shell {i}");
            }
        }
    }

    #[test]
    fn hydrogen() {
        let shells = distribute(1).unwrap();
        assert_eq!(shells.occupancy(), &[1]);
        assert_eq!(shells.valence_shell(false).index(), Some(0));
    }

    #[test]
    fn neon_has_no_valence_shell() {
        let shells = distribute(10).unwrap();
        assert_eq!(shells.occupancy(), &[2, 8]);
        let valence = shells.valence_shell(true);
        assert_eq!(valence.index(), None);
        assert_eq!(valence.flags(), vec![false, false]);
    }

    #[test]
    fn argon() {
        let shells = distribute(18).unwrap();
        assert_eq!(shells.occupancy(), &[2, 8, 8]);
        assert!(shells.valence_shell(true).flags().iter().all(|flag| !flag));
    }

    #[test]
    fn sodium_valence_is_outermost() {
        let shells = distribute(11).unwrap();
        assert_eq!(shells.occupancy(), &[2, 8, 1]);
        assert_eq!(shells.valence_shell(false).flags(), vec![false, false, true]);
    }

    #[test]
    fn zero_electrons() {
        let shells = distribute(0).unwrap();
        assert!(shells.is_empty());
        assert_eq!(shells.valence_shell(false).index(), None);
    }

    #[test]
    fn full_capacity_and_beyond() {
        assert_eq!(distribute(60).unwrap().occupancy(), &[2, 8, 18, 32]);
        assert_eq!(
            distribute(61).unwrap_err(),
            Error::UnsupportedAtomicNumber {
                atomic_number: 61,
                capacity: 60
            }
        );
    }
}
