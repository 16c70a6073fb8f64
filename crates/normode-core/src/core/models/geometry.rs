use super::atom::Atom;
use nalgebra::Point3;

/// One structural snapshot: an ordered list of atoms.
///
/// A report usually contains several of these (input orientation, optimisation
/// steps, final structure). Only the last complete one is kept downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    atoms: Vec<Atom>,
}

impl Geometry {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn get(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns the rest positions of all atoms, in atom order.
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|a| a.label.as_str())
    }
}

impl FromIterator<Atom> for Geometry {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Geometry {
        vec![
            Atom::new("O", Point3::new(0.0, 0.0, 0.0)),
            Atom::new("H", Point3::new(0.76, 0.59, 0.0)),
            Atom::new("H", Point3::new(-0.76, 0.59, 0.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn accessors_preserve_atom_order() {
        let geometry = water();

        assert_eq!(geometry.len(), 3);
        assert!(!geometry.is_empty());
        assert_eq!(geometry.labels().collect::<Vec<_>>(), vec!["O", "H", "H"]);
        assert_eq!(geometry.get(1).unwrap().position.x, 0.76);
        assert!(geometry.get(3).is_none());
    }

    #[test]
    fn positions_returns_one_point_per_atom() {
        let positions = water().positions();

        assert_eq!(positions.len(), 3);
        assert_eq!(positions[2], Point3::new(-0.76, 0.59, 0.0));
    }

    #[test]
    fn default_geometry_is_empty() {
        let geometry = Geometry::default();
        assert!(geometry.is_empty());
        assert!(geometry.positions().is_empty());
    }
}
