pub mod alias;
pub mod markers;
pub mod normalize;
pub mod registry;
pub mod sample;
pub mod stories;

pub use registry::{CladeRecord, CladeRegistry};
pub use sample::{Coordinates, Lineage, PaternalLabels, Sample};
