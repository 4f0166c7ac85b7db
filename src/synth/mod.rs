//! Test-data synthesis from classified object metadata
//!
//! This module turns the extraction side's per-object field sets, combined
//! with field-describe metadata from an external schema service, into Apex
//! object-construction statements for seeding generated unit tests.
//!
//! # Overview
//!
//! The synthesis process involves:
//! 1. Classifying an object's describe metadata into required and
//!    non-required fields
//! 2. Selecting the fields to seed: every required field plus every
//!    non-required field the source queries actually referenced
//! 3. Emitting a typed construction statement with type-driven sample
//!    literals, followed by an insert statement
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use apexseed::{classify_fields, synthesize_test_body, RawFieldMetadata};
//! use apexseed::extract_and_aggregate;
//!
//! let sets = extract_and_aggregate(
//!     "List<Lead> hot = [SELECT Id, Company FROM Lead];",
//! )
//! .unwrap();
//!
//! // Metadata would come from a schema-describe service in practice
//! let classified = classify_fields(&[
//!     RawFieldMetadata::new("Company", "string"),
//!     RawFieldMetadata::new("LastName", "string").with_nillable(false),
//! ])
//! .unwrap();
//!
//! let mut by_object = HashMap::new();
//! by_object.insert("Lead".to_string(), classified);
//!
//! let body = synthesize_test_body(&sets, &by_object).unwrap();
//! assert!(body.contains("insert leadObj;"));
//! ```
//!
//! # Sentinels
//!
//! Nothing here raises a fault. Empty metadata, attachment-only inputs, and
//! metadata that matches no discovered object all come back as
//! distinguishable sentinel values ([`SynthesisError`]) for the orchestrator
//! to route to its fallback paths.

pub mod describe;
pub mod error;
pub mod generator;
pub mod literals;

// Re-export main types
pub use describe::{
    classify_fields, ClassifiedFields, FieldDescriptor, PicklistEntry, RawFieldMetadata,
};
pub use error::SynthesisError;
pub use generator::{attachment_block, synthesize_test_body, wrap_test_class};
pub use literals::{sample_literal, FieldType};
