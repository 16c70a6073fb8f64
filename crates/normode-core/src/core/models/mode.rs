use super::geometry::Geometry;
use nalgebra::Vector3;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

/// The per-atom offset of one vibrational mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Displacement {
    /// Element label repeated from the report row; expected to match the geometry.
    pub label: String,
    /// Displacement vector in Cartesian coordinates.
    pub vector: Vector3<f64>,
}

impl Displacement {
    pub fn new(label: &str, vector: Vector3<f64>) -> Self {
        Self {
            label: label.to_string(),
            vector,
        }
    }
}

/// Describes why a mode cannot be applied to a geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlignmentError {
    #[error("Mode at {frequency} has {found} displacement rows but the geometry has {expected} atoms")]
    CountMismatch {
        frequency: f64,
        expected: usize,
        found: usize,
    },
    #[error(
        "Mode at {frequency}: displacement row {index} is labelled '{mode_label}' but geometry atom {index} is '{geometry_label}'"
    )]
    LabelMismatch {
        frequency: f64,
        index: usize,
        geometry_label: String,
        mode_label: String,
    },
}

/// A vibrational normal mode: a frequency and one displacement per atom.
///
/// Displacements are aligned by index with the atoms of the geometry they were
/// reported against.
#[derive(Debug, Clone, PartialEq)]
pub struct VibrationalMode {
    pub frequency: f64,
    displacements: Vec<Displacement>,
}

impl VibrationalMode {
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            displacements: Vec::new(),
        }
    }

    pub fn with_displacements(frequency: f64, displacements: Vec<Displacement>) -> Self {
        Self {
            frequency,
            displacements,
        }
    }

    pub fn push(&mut self, displacement: Displacement) {
        self.displacements.push(displacement);
    }

    pub fn displacements(&self) -> &[Displacement] {
        &self.displacements
    }

    /// Returns the bare displacement vectors, in atom order.
    pub fn vectors(&self) -> Vec<Vector3<f64>> {
        self.displacements.iter().map(|d| d.vector).collect()
    }

    pub fn len(&self) -> usize {
        self.displacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displacements.is_empty()
    }

    /// Checks that this mode has exactly one row per geometry atom and that every
    /// row carries the same element label as the atom at the same index.
    pub fn check_alignment(&self, geometry: &Geometry) -> Result<(), AlignmentError> {
        if self.len() != geometry.len() {
            return Err(AlignmentError::CountMismatch {
                frequency: self.frequency,
                expected: geometry.len(),
                found: self.len(),
            });
        }
        for (index, (atom, disp)) in geometry
            .atoms()
            .iter()
            .zip(&self.displacements)
            .enumerate()
        {
            if atom.label != disp.label {
                return Err(AlignmentError::LabelMismatch {
                    frequency: self.frequency,
                    index,
                    geometry_label: atom.label.clone(),
                    mode_label: disp.label.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Hashable view of a frequency. Compares by bit pattern, with `-0.0` folded
/// onto `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FrequencyKey(u64);

impl From<f64> for FrequencyKey {
    fn from(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        Self(value.to_bits())
    }
}

/// All vibrational modes of a report.
///
/// The table keeps the frequencies in file order as the stable index space and
/// resolves an index through a frequency-keyed mapping. Two modes reporting the
/// same frequency both occupy a slot in the ordered list, but the mapping only
/// remembers the later one, so both indices resolve to it.
#[derive(Debug, Clone, Default)]
pub struct ModeTable {
    frequencies: Vec<f64>,
    modes: HashMap<FrequencyKey, VibrationalMode>,
}

impl ModeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mode. Returns the mode previously stored under the same
    /// frequency, if any.
    pub fn insert(&mut self, mode: VibrationalMode) -> Option<VibrationalMode> {
        self.frequencies.push(mode.frequency);
        match self.modes.entry(FrequencyKey::from(mode.frequency)) {
            Entry::Occupied(mut slot) => Some(slot.insert(mode)),
            Entry::Vacant(slot) => {
                slot.insert(mode);
                None
            }
        }
    }

    /// Frequencies in file order, duplicates included.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Looks up the mode at `index` in file order.
    pub fn get(&self, index: usize) -> Option<&VibrationalMode> {
        let frequency = *self.frequencies.get(index)?;
        self.by_frequency(frequency)
    }

    pub fn by_frequency(&self, frequency: f64) -> Option<&VibrationalMode> {
        self.modes.get(&FrequencyKey::from(frequency))
    }

    /// Number of distinct frequencies held by the mapping.
    pub fn distinct_len(&self) -> usize {
        self.modes.len()
    }

    /// Iterates `(index, frequency, mode)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64, &VibrationalMode)> {
        self.frequencies
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| self.by_frequency(f).map(|m| (i, f, m)))
    }
}
