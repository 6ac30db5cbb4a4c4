use crate::constants::NOBLE_GAS_GROUP;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Periodic table bundled with the crate (Z = 1..=60).
const BUNDLED_TABLE_JSON: &str = include_str!("../../data/periodic_table.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Block::S => "s",
            Block::P => "p",
            Block::D => "d",
            Block::F => "f",
        };
        f.write_str(label)
    }
}

/// Combining capacity of an element. Variable-valence elements are `Indeterminate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValencyRepr", into = "ValencyRepr")]
pub enum Valency {
    Fixed(u8),
    Indeterminate,
}

const INDETERMINATE: &str = "indeterminate";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ValencyRepr {
    Number(u8),
    Text(String),
}

impl TryFrom<ValencyRepr> for Valency {
    type Error = String;

    fn try_from(repr: ValencyRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            ValencyRepr::Number(n) => Ok(Valency::Fixed(n)),
            ValencyRepr::Text(text) if text.eq_ignore_ascii_case(INDETERMINATE) => {
                Ok(Valency::Indeterminate)
            }
            ValencyRepr::Text(text) => Err(format!(
                "valency must be an integer or \"{INDETERMINATE}\", got \"{text}\""
            )),
        }
    }
}

impl From<Valency> for ValencyRepr {
    fn from(valency: Valency) -> Self {
        match valency {
            Valency::Fixed(n) => ValencyRepr::Number(n),
            Valency::Indeterminate => ValencyRepr::Text(INDETERMINATE.to_owned()),
        }
    }
}

impl fmt::Display for Valency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valency::Fixed(n) => write!(f, "{n}"),
            Valency::Indeterminate => f.write_str(INDETERMINATE),
        }
    }
}

/// Footnote series whose members intentionally share one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Lanthanide,
    Actinide,
}

/// Basic metadata describing a chemical element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub atomic_number: u32,
    pub neutrons: u32,
    pub symbol: String,
    pub name: String,
    pub block: Block,
    pub period: u32,
    pub group: u32,
    pub valency: Valency,
    pub configuration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
}

impl ElementRecord {
    pub fn is_noble_gas(&self) -> bool {
        self.group == NOBLE_GAS_GROUP
    }

    /// A = Z + N
    pub fn mass_number(&self) -> u32 {
        self.atomic_number + self.neutrons
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.atomic_number == 0 {
            return Err("atomic number must be positive".into());
        }
        if self.period == 0 {
            return Err("period must be positive".into());
        }
        if !(1..=18).contains(&self.group) {
            return Err(format!("group {} is outside 1..=18", self.group));
        }
        if self.symbol.is_empty() {
            return Err("symbol is empty".into());
        }
        Ok(())
    }
}

/// Validated element dataset keyed by atomic number.
#[derive(Clone, Debug, Default)]
pub struct PeriodicTable {
    elements: BTreeMap<u32, ElementRecord>,
}

impl PeriodicTable {
    /// Load the dataset shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_TABLE_JSON)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        log::info!("Loaded {} elements from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse a JSON object mapping atomic-number strings to element records.
    ///
    /// Any record whose key is not its own atomic number, or which fails
    /// [`ElementRecord::validate`], rejects the whole dataset.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, ElementRecord> = serde_json::from_str(json)?;
        let mut elements = BTreeMap::new();

        for (key, record) in raw {
            let atomic_number: u32 = key.trim().parse().map_err(|_| Error::MalformedRecord {
                key: key.clone(),
                reason: "key is not an atomic number".into(),
            })?;
            if atomic_number != record.atomic_number {
                return Err(Error::MalformedRecord {
                    key,
                    reason: format!("record carries atomic number {}", record.atomic_number),
                });
            }
            record
                .validate()
                .map_err(|reason| Error::MalformedRecord { key, reason })?;
            elements.insert(atomic_number, record);
        }

        Ok(Self { elements })
    }

    pub fn from_records(records: impl IntoIterator<Item = ElementRecord>) -> Self {
        Self {
            elements: records
                .into_iter()
                .map(|record| (record.atomic_number, record))
                .collect(),
        }
    }

    pub fn get(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.elements.get(&atomic_number)
    }

    pub fn require(&self, atomic_number: u32) -> Result<&ElementRecord> {
        self.get(atomic_number)
            .ok_or(Error::ElementNotFound(atomic_number))
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&ElementRecord> {
        self.elements
            .values()
            .find(|record| record.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Records in ascending atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
