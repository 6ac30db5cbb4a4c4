use crate::config::AtomConfig;
use crate::error::Result;
use crate::physics::elements::{ElementRecord, PeriodicTable};
use crate::physics::nucleus::NucleonSampler;
use crate::simulation::atom::Atom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Atomic number shown when a session starts.
pub const DEFAULT_ATOMIC_NUMBER: u32 = 1;

/// Request to replace the active atom.
///
/// Callers guarantee `atomic_number > 0`; generation rejects values above the
/// supported shell capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSelected {
    pub atomic_number: u32,
    pub neutrons: u32,
    pub is_noble_gas: bool,
}

impl From<&ElementRecord> for ElementSelected {
    fn from(record: &ElementRecord) -> Self {
        Self {
            atomic_number: record.atomic_number,
            neutrons: record.neutrons,
            is_noble_gas: record.is_noble_gas(),
        }
    }
}

/// Owns the dataset, the nucleon sampler and the single active atom.
pub struct Session<R = ChaCha8Rng> {
    table: PeriodicTable,
    config: AtomConfig,
    sampler: NucleonSampler<R>,
    active: Atom,
}

impl Session<ChaCha8Rng> {
    /// Start on hydrogen, seeding the sampler from `config.seed` when present.
    pub fn new(table: PeriodicTable, config: AtomConfig) -> Result<Self> {
        let sampler = NucleonSampler::from_config(&config);
        Self::with_sampler(table, config, sampler)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_sampler(
        table: PeriodicTable,
        config: AtomConfig,
        mut sampler: NucleonSampler<R>,
    ) -> Result<Self> {
        let selection = ElementSelected::from(table.require(DEFAULT_ATOMIC_NUMBER)?);
        let active = Atom::generate(&selection, &config, &mut sampler)?;

        Ok(Self {
            table,
            config,
            sampler,
            active,
        })
    }

    /// Build the requested atom, then swap it in.
    ///
    /// The previous atom is dropped in the same assignment, so there is never a
    /// moment where parts of both are reachable. On error the previous atom
    /// stays active.
    pub fn handle(&mut self, event: ElementSelected) -> Result<&Atom> {
        let atom = Atom::generate(&event, &self.config, &mut self.sampler)?;
        self.active = atom;
        log::info!(
            "Active atom is now Z={} N={}",
            event.atomic_number,
            event.neutrons
        );
        Ok(&self.active)
    }

    pub fn select(&mut self, atomic_number: u32) -> Result<&Atom> {
        let event = ElementSelected::from(self.table.require(atomic_number)?);
        self.handle(event)
    }

    pub fn tick(&mut self) {
        self.active.tick();
    }

    pub fn active(&self) -> &Atom {
        &self.active
    }

    /// Dataset record of the active atom, if it came from the table.
    pub fn active_element(&self) -> Option<&ElementRecord> {
        self.table.get(self.active.atomic_number())
    }

    pub fn table(&self) -> &PeriodicTable {
        &self.table
    }

    pub fn config(&self) -> &AtomConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::physics::elements::{Block, Valency};

    fn session() -> Session {
        Session::new(
            PeriodicTable::bundled().unwrap(),
            AtomConfig::default().with_seed(42),
        )
        .unwrap()
    }

    #[test]
    fn starts_on_hydrogen() {
        let session = session();
        assert_eq!(session.active().atomic_number(), 1);
        assert_eq!(session.active_element().unwrap().symbol, "H");
    }

    #[test]
    fn second_selection_replaces_the_first_atom() {
        let mut session = session();
        session.select(18).unwrap();
        session.tick();

        let atom = session.select(8).unwrap();
        assert_eq!(atom.atomic_number(), 8);
        assert_eq!(atom.electrons().len(), 8);
        assert_eq!(atom.nucleus().proton_count(), 8);
        assert_eq!(atom.nucleus().neutron_count(), 8);
        assert_eq!(atom.shell_radii().len(), 2);
    }

    #[test]
    fn failed_selection_keeps_previous_atom() {
        let mut session = session();
        session.select(6).unwrap();

        assert_eq!(session.select(99).unwrap_err(), Error::ElementNotFound(99));
        let too_big = ElementSelected {
            atomic_number: 61,
            neutrons: 84,
            is_noble_gas: false,
        };
        assert!(matches!(
            session.handle(too_big),
            Err(Error::UnsupportedAtomicNumber { .. })
        ));
        assert_eq!(session.active().atomic_number(), 6);
    }

    #[test]
    fn noble_flag_comes_from_the_record() {
        let mut session = session();
        let atom = session.select(10).unwrap();
        assert!(atom.is_noble_gas());
        assert_eq!(atom.valence_shell().index(), None);
    }

    #[test]
    fn seeded_sessions_agree() {
        let mut a = session();
        let mut b = session();
        let pa: Vec<_> = a.select(26).unwrap().neutron_positions().collect();
        let pb: Vec<_> = b.select(26).unwrap().neutron_positions().collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn table_without_hydrogen_is_fatal() {
        let helium = ElementRecord {
            atomic_number: 2,
            neutrons: 2,
            symbol: "He".into(),
            name: "Helium".into(),
            block: Block::S,
            period: 1,
            group: 18,
            valency: Valency::Fixed(0),
            configuration: "1s2".into(),
            series: None,
        };
        let table = PeriodicTable::from_records([helium]);
        assert!(matches!(
            Session::new(table, AtomConfig::default()),
            Err(Error::ElementNotFound(1))
        ));
    }
}
