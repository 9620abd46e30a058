use thiserror::Error;

/// Result type alias for fallible SparseSet operations.
pub type Result<T> = std::result::Result<T, SparseSetError>;

/// Errors reported by [`SparseSet`](crate::SparseSet) operations.
///
/// Every error is detected at the point of the call and leaves the set
/// exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SparseSetError {
    /// The requested maximum value does not fit in the chosen storage
    /// element type.
    #[error("maximum value {maximum_value} exceeds the largest value storable in a {element_bits}-bit element ({max_storable})")]
    MaximumValueTooLarge {
        maximum_value: usize,
        element_bits: u32,
        max_storable: usize,
    },

    /// The value is greater than the maximum value the set was created with.
    #[error("value {value} is outside the supported range 0..={maximum_value}")]
    ValueOutOfRange { value: usize, maximum_value: usize },

    /// The set already holds `capacity` elements.
    #[error("the set is full ({capacity} elements)")]
    CapacityExceeded { capacity: usize },

    /// The value is already present in the set.
    #[error("value {0} is already in the set")]
    DuplicateValue(usize),
}
