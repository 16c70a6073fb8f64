use nalgebra::Point3;
use std::collections::BTreeSet;

/// An undirected connection between two atoms, identified by index.
///
/// The pair is stored normalised (`first < second`), so `(i, j)` and `(j, i)`
/// are the same connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connection {
    first: usize,
    second: usize,
}

impl Connection {
    /// Returns `None` for a self-pair.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        if a == b {
            return None;
        }
        Some(Self {
            first: a.min(b),
            second: a.max(b),
        })
    }

    pub fn atoms(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first == index || self.second == index
    }
}

/// The set of connections inferred for one geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondGraph {
    connections: BTreeSet<Connection>,
}

impl BondGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the pair unless it is a self-pair or already present in either
    /// orientation. Returns whether the graph changed.
    pub fn insert(&mut self, a: usize, b: usize) -> bool {
        match Connection::new(a, b) {
            Some(conn) => self.connections.insert(conn),
            None => false,
        }
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        Connection::new(a, b).is_some_and(|c| self.connections.contains(&c))
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Number of connections touching `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.connections.iter().filter(|c| c.contains(index)).count()
    }

    /// Resolves every connection to its endpoint coordinates in `positions`.
    ///
    /// Used once per animation frame: the index pairs stay fixed while the
    /// coordinates move. Connections referring past the end of `positions` are
    /// skipped.
    pub fn segments(&self, positions: &[Point3<f64>]) -> Vec<(Point3<f64>, Point3<f64>)> {
        self.connections
            .iter()
            .filter_map(|c| Some((*positions.get(c.first)?, *positions.get(c.second)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_is_normalised_and_rejects_self_pairs() {
        assert_eq!(Connection::new(3, 1), Connection::new(1, 3));
        assert_eq!(Connection::new(3, 1).unwrap().atoms(), (1, 3));
        assert!(Connection::new(2, 2).is_none());
    }

    #[test]
    fn insert_ignores_reverse_duplicates_and_self_pairs() {
        let mut graph = BondGraph::new();

        assert!(graph.insert(0, 1));
        assert!(!graph.insert(1, 0));
        assert!(!graph.insert(2, 2));
        assert!(graph.insert(0, 2));

        assert_eq!(graph.len(), 2);
        assert!(graph.contains(1, 0));
        assert!(!graph.contains(1, 2));
    }

    #[test]
    fn degree_counts_both_orientations() {
        let mut graph = BondGraph::new();
        graph.insert(0, 1);
        graph.insert(2, 0);
        graph.insert(1, 2);

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(3), 0);
    }

    #[test]
    fn segments_follow_the_supplied_positions() {
        let mut graph = BondGraph::new();
        graph.insert(1, 0);
        graph.insert(1, 5);

        let positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let segments = graph.segments(&positions);

        assert_eq!(segments, vec![(positions[0], positions[1])]);
    }
}
