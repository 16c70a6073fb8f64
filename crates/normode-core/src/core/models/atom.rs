use nalgebra::Point3;

/// A single atom of a geometry snapshot.
///
/// Atoms carry no identity of their own: their index inside the owning
/// [`Geometry`](super::geometry::Geometry) is what connections and mode
/// displacements refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element-type label as written in the report (e.g., "C", "H", "O").
    pub label: String,
    /// Cartesian coordinates, in the units of the report.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` from its label and position.
    pub fn new(label: &str, position: Point3<f64>) -> Self {
        Self {
            label: label.to_string(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_label_and_position() {
        let atom = Atom::new("O", Point3::new(0.0, 0.1, -0.2));

        assert_eq!(atom.label, "O");
        assert_eq!(atom.position, Point3::new(0.0, 0.1, -0.2));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new("H", Point3::new(1.0, 2.0, 3.0));
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);

        let mut moved = atom1.clone();
        moved.position.x += 0.5;
        assert_ne!(atom1, moved);
    }
}
