use crate::config::AtomConfig;
use crate::physics::elements::PeriodicTable;
use crate::renderer::instance::{self, ParticleInstance};
use crate::simulation::atom::Atom;
use crate::simulation::session::{ElementSelected, Session};
use crate::ui::layout::{self, ElementFacts, GridPlacement};
use crate::ui::{UiState, selection_channel};
use std::sync::mpsc::Receiver;

pub type AppError = Box<dyn std::error::Error + Send + Sync>;
pub type AppResult<T> = Result<T, AppError>;

pub struct App {
    session: Session,
    ui_state: UiState,
    selections: Receiver<ElementSelected>,
    placements: Vec<GridPlacement>,
    instances: Vec<ParticleInstance>,
}

impl App {
    /// Lay out the selector and build the default atom. Any dataset problem is
    /// fatal here, before UI state exists.
    pub fn initialize(table: PeriodicTable, config: AtomConfig) -> AppResult<Self> {
        let placements = layout::layout(&table)?;
        let session = Session::new(table, config)?;
        let instances = instance::build_instances(session.active());

        let (sender, selections) = selection_channel();
        let ui_state = UiState::new(session.active().atomic_number(), sender);

        log::info!(
            "Periodic table ready: {} elements, starting on Z={}",
            placements.len(),
            session.active().atomic_number()
        );

        Ok(Self {
            session,
            ui_state,
            selections,
            placements,
            instances,
        })
    }

    /// One render-loop iteration: apply pending selections, then advance.
    pub fn frame(&mut self) {
        self.apply_ui_changes();
        self.session.tick();
        instance::refresh_electrons(&mut self.instances, self.session.active());
    }

    /// Simulate a click on the cell of `atomic_number`.
    pub fn click(&mut self, atomic_number: u32) -> AppResult<()> {
        let record = self.session.table().require(atomic_number)?;
        self.ui_state.click(record);
        Ok(())
    }

    /// Only the newest pending selection is built; older ones would be
    /// replaced within the same frame anyway.
    fn apply_ui_changes(&mut self) {
        let Some(event) = self.selections.try_iter().last() else {
            return;
        };

        match self.session.handle(event) {
            Ok(atom) => {
                self.instances = instance::build_instances(atom);
            }
            Err(err) => {
                log::error!("Failed to build atom Z={}: {err}", event.atomic_number);
                self.ui_state.selected_atomic_number = self.session.active().atomic_number();
            }
        }
    }

    pub fn atom(&self) -> &Atom {
        self.session.active()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn placements(&self) -> &[GridPlacement] {
        &self.placements
    }

    pub fn facts(&self) -> Option<ElementFacts> {
        self.session.active_element().map(ElementFacts::from_record)
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::elements::{Block, ElementRecord, Valency};

    fn app() -> App {
        App::initialize(
            PeriodicTable::bundled().unwrap(),
            AtomConfig::default().with_seed(42),
        )
        .unwrap()
    }

    #[test]
    fn starts_on_hydrogen() {
        let app = app();
        assert_eq!(app.atom().atomic_number(), 1);
        assert_eq!(app.instances().len(), 2);
        assert_eq!(app.placements().len(), 60);
        assert_eq!(app.facts().unwrap().symbol, "H");
        assert!(app.ui_state().is_active(1));
    }

    #[test]
    fn click_takes_effect_on_next_frame() {
        let mut app = app();
        app.click(18).unwrap();
        assert_eq!(app.atom().atomic_number(), 1);

        app.frame();
        assert_eq!(app.atom().atomic_number(), 18);
        assert_eq!(app.instances().len(), 18 + 22 + 18);
        assert_eq!(app.facts().unwrap().name, "Argon");
    }

    #[test]
    fn newest_click_wins() {
        let mut app = app();
        app.click(6).unwrap();
        app.click(11).unwrap();
        app.frame();
        assert_eq!(app.atom().atomic_number(), 11);
        assert!(app.ui_state().is_active(11));
    }

    #[test]
    fn unknown_cell_is_an_error() {
        let mut app = app();
        assert!(app.click(0).is_err());
    }

    #[test]
    fn colliding_dataset_is_fatal() {
        let make = |atomic_number: u32| ElementRecord {
            atomic_number,
            neutrons: 0,
            symbol: format!("X{atomic_number}"),
            name: String::new(),
            block: Block::S,
            period: 1,
            group: 1,
            valency: Valency::Fixed(1),
            configuration: String::new(),
            series: None,
        };
        let table = PeriodicTable::from_records([make(1), make(2)]);
        assert!(App::initialize(table, AtomConfig::default()).is_err());
    }
}
