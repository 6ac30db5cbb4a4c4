//! Periodic-table grid placement and the chemistry facts shown next to it.
//!
//! Positions come straight from each record's period and group; nothing here
//! carries a per-element coordinate table.

use crate::constants::NOBLE_GAS_GROUP;
use crate::error::{Error, Result};
use crate::physics::elements::{Block, ElementRecord, PeriodicTable, Series, Valency};
use serde::Serialize;
use std::collections::HashMap;

/// Where one element sits in the selector grid (1-based row/column).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridPlacement {
    pub atomic_number: u32,
    pub symbol: String,
    pub row: u32,
    pub column: u32,
    pub block: Block,
    pub is_noble_gas: bool,
    pub series: Option<Series>,
}

impl GridPlacement {
    pub fn of(record: &ElementRecord) -> Self {
        Self {
            atomic_number: record.atomic_number,
            symbol: record.symbol.clone(),
            row: record.period,
            column: record.group,
            block: record.block,
            is_noble_gas: record.is_noble_gas(),
            series: record.series,
        }
    }
}

/// Place every element at `(period, group)`.
///
/// A cell may hold several elements only when all of them carry a series flag;
/// any other overlap is reported as [`Error::CellCollision`].
pub fn layout(table: &PeriodicTable) -> Result<Vec<GridPlacement>> {
    let mut occupied: HashMap<(u32, u32), &ElementRecord> = HashMap::new();
    let mut placements = Vec::with_capacity(table.len());

    for record in table.iter() {
        let cell = (record.period, record.group);
        if let Some(existing) = occupied.get(&cell) {
            if existing.series.is_none() || record.series.is_none() {
                return Err(Error::CellCollision {
                    row: cell.0,
                    column: cell.1,
                    first: existing.atomic_number,
                    second: record.atomic_number,
                });
            }
        } else {
            occupied.insert(cell, record);
        }
        placements.push(GridPlacement::of(record));
    }

    log::debug!(
        "Laid out {} elements over {} cells",
        placements.len(),
        occupied.len()
    );
    Ok(placements)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ValenceInfo {
    /// `None` where the group does not fix a count (transition metals).
    pub valence_electrons: Option<u8>,
    pub valency: Valency,
}

pub fn valence_info(record: &ElementRecord) -> ValenceInfo {
    let (valence_electrons, valency) = match record.group {
        NOBLE_GAS_GROUP => (Some(8), Valency::Fixed(0)),
        1 => (Some(1), Valency::Fixed(1)),
        2 => (Some(2), Valency::Fixed(2)),
        group @ 13..=17 => {
            let ve = (group - 10) as u8;
            let valency = if ve <= 4 { ve } else { 8 - ve };
            (Some(ve), Valency::Fixed(valency))
        }
        _ => (None, Valency::Indeterminate),
    };

    ValenceInfo {
        valence_electrons,
        valency,
    }
}

/// Everything the info panel shows for one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementFacts {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
    pub neutrons: u32,
    pub mass_number: u32,
    pub block: Block,
    pub period: u32,
    pub group: u32,
    pub valency: Valency,
    pub configuration: String,
    pub valence: ValenceInfo,
}

impl ElementFacts {
    pub fn from_record(record: &ElementRecord) -> Self {
        Self {
            name: record.name.clone(),
            symbol: record.symbol.clone(),
            atomic_number: record.atomic_number,
            neutrons: record.neutrons,
            mass_number: record.mass_number(),
            block: record.block,
            period: record.period,
            group: record.group,
            valency: record.valency,
            configuration: record.configuration.clone(),
            valence: valence_info(record),
        }
    }
}
