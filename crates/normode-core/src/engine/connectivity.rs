use crate::core::models::geometry::Geometry;
use crate::core::models::topology::BondGraph;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    #[error("No bond count configured for element '{label}' (atom {index})")]
    MissingType { index: usize, label: String },
}

#[derive(Debug, Error)]
pub enum BondTableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Number of connections each element label should form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BondCountTable {
    counts: HashMap<String, usize>,
}

impl BondCountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a table from a TOML file of `LABEL = count` entries.
    pub fn load(path: &Path) -> Result<Self, BondTableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| BondTableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| BondTableLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn insert(&mut self, label: &str, count: usize) -> Option<usize> {
        self.counts.insert(label.to_string(), count)
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts.get(label).copied()
    }

    /// Overlays `other` on top of this table; entries of `other` win.
    pub fn merge(&mut self, other: BondCountTable) {
        self.counts.extend(other.counts);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for BondCountTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Infers a bond graph by greedy nearest-neighbour search.
///
/// Each atom, in geometry order, is connected to its `n` nearest other atoms,
/// where `n` comes from `bonds_per_type` for the atom's label. Neighbours are
/// ranked by squared distance with a stable sort, so equal distances resolve to
/// the lower atom index. A pair already recorded from the other atom's pass is
/// not added twice, which means an atom can end up with fewer than `n`
/// connections (or more, when it is popular with its neighbours).
///
/// # Errors
///
/// Returns [`ConnectivityError::MissingType`] for the first atom whose label has
/// no entry in `bonds_per_type`.
#[instrument(skip_all, name = "connectivity_task", fields(atoms = geometry.len()))]
pub fn resolve(
    geometry: &Geometry,
    bonds_per_type: &BondCountTable,
) -> Result<BondGraph, ConnectivityError> {
    let atoms = geometry.atoms();
    let mut graph = BondGraph::new();

    for (i, atom) in atoms.iter().enumerate() {
        let wanted = bonds_per_type
            .get(&atom.label)
            .ok_or_else(|| ConnectivityError::MissingType {
                index: i,
                label: atom.label.clone(),
            })?;

        let mut ranked: Vec<(f64, usize)> = atoms
            .iter()
            .enumerate()
            .map(|(j, other)| (nalgebra::distance_squared(&atom.position, &other.position), j))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, j) in ranked.into_iter().filter(|&(_, j)| j != i).take(wanted) {
            if graph.insert(i, j) {
                debug!(from = i, to = j, "Added connection.");
            }
        }
    }

    info!(connections = graph.len(), "Connectivity resolved.");
    Ok(graph)
}
