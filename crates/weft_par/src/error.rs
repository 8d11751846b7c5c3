//! Error types for the place-and-route engine.

use weft_graph::Label;

/// A fatal error that aborts a placement attempt before the first iteration.
///
/// Convergence failure is not an error — it is the
/// [`Unroutable`](crate::PlaceVerdict::Unroutable) verdict, with the best
/// placement found left in the mate fields. Likewise cancellation is a
/// distinct verdict. Only conditions that make the attempt meaningless up
/// front are reported here.
#[derive(Debug, thiserror::Error)]
pub enum ParError {
    /// The device graph cannot possibly host the netlist: some label is used
    /// by more netlist nodes than there are device nodes accepting it.
    #[error(
        "device cannot fit netlist: {required} node(s) need {name}, device has {available} site(s)"
    )]
    LabelCapacity {
        /// The offending label.
        label: Label,
        /// The label's human-readable name from the caller's label map.
        name: String,
        /// How many netlist nodes carry the label as primary.
        required: usize,
        /// How many device nodes accept the label (primary or alternate).
        available: usize,
    },
}

/// The standard result type for engine operations.
pub type ParResult<T> = Result<T, ParError>;
