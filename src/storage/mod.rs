mod query;
mod repository;
mod schema;

pub use query::IngredientLookup;
pub use repository::{IngestStatus, Repository};
pub use schema::init_schema;
