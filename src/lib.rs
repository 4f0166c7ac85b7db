pub mod aggregate;
pub mod comments;
pub mod extract;
pub mod subquery;
pub mod synth;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use aggregate::{aggregate_fields, extract_and_aggregate, ObjectFieldSet};
pub use comments::strip_comments;
pub use extract::{extract_queries, ExtractError, RawQuery, MAX_SUBQUERY_DEPTH};
pub use subquery::{flatten_queries, FlatQuery};
pub use synth::{
    attachment_block, classify_fields, synthesize_test_body, wrap_test_class, ClassifiedFields,
    FieldDescriptor, FieldType, PicklistEntry, RawFieldMetadata, SynthesisError,
};
