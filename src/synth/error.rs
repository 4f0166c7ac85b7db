//! Sentinel outcomes for test-data synthesis

use thiserror::Error;

/// Expected "nothing to synthesize" outcomes.
///
/// The orchestrator checks these between stages and falls back to an empty
/// test body (or the built-in attachment block); none of them represents a
/// fault inside the core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisError {
    /// No object field sets were supplied.
    #[error("no queries or metadata to synthesize from")]
    NoInputData,
    /// Every object that could have produced a block was the reserved
    /// attachment object.
    #[error("only the built-in Attachment object was referenced")]
    OnlyAttachmentReferenced,
    /// No supplied metadata matched any discovered object.
    #[error("no object metadata matched the discovered queries")]
    NoServerDataFound,
}
