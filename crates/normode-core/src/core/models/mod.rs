//! Data structures describing a parsed calculation: the atoms of a geometry, the
//! vibrational modes attached to it, and the connections drawn between atoms.

pub mod atom;
pub mod geometry;
pub mod mode;
pub mod topology;
