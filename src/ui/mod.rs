pub mod layout;

use crate::physics::elements::ElementRecord;
use crate::simulation::session::ElementSelected;
use std::sync::mpsc::{self, Receiver, Sender};

pub fn selection_channel() -> (Sender<ElementSelected>, Receiver<ElementSelected>) {
    mpsc::channel()
}

/// Selector state: which cell is highlighted, and where clicks are sent.
#[derive(Clone, Debug)]
pub struct UiState {
    pub selected_atomic_number: u32,
    selections: Sender<ElementSelected>,
}

impl UiState {
    pub fn new(selected_atomic_number: u32, selections: Sender<ElementSelected>) -> Self {
        Self {
            selected_atomic_number,
            selections,
        }
    }

    /// Highlight the clicked cell and request its atom.
    ///
    /// Returns `false` when nobody is listening for selections any more.
    pub fn click(&mut self, record: &ElementRecord) -> bool {
        self.selected_atomic_number = record.atomic_number;
        match self.selections.send(ElementSelected::from(record)) {
            Ok(()) => true,
            Err(_) => {
                log::warn!(
                    "Selection of {} dropped: receiver is gone",
                    record.symbol
                );
                false
            }
        }
    }

    pub fn is_active(&self, atomic_number: u32) -> bool {
        self.selected_atomic_number == atomic_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::elements::PeriodicTable;

    #[test]
    fn click_sends_selection_and_moves_highlight() {
        let table = PeriodicTable::bundled().unwrap();
        let (sender, receiver) = selection_channel();
        let mut ui_state = UiState::new(1, sender);

        assert!(ui_state.click(table.get(10).unwrap()));
        assert!(ui_state.is_active(10));
        assert!(!ui_state.is_active(1));
        assert_eq!(
            receiver.try_recv().unwrap(),
            ElementSelected {
                atomic_number: 10,
                neutrons: 10,
                is_noble_gas: true
            }
        );
    }

    #[test]
    fn click_without_receiver_reports_failure() {
        let table = PeriodicTable::bundled().unwrap();
        let (sender, receiver) = selection_channel();
        drop(receiver);
        let mut ui_state = UiState::new(1, sender);
        assert!(!ui_state.click(table.get(2).unwrap()));
    }
}
