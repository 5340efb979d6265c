pub mod anno;
pub mod curated;
pub mod schema;

pub use anno::{load_annotation_index, AnnotationIndex};
pub use schema::{ColumnMap, SchemaRelease};
