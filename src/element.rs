// Copyright (C) Pavel Grebnev 2026
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use num_traits::{PrimInt, Unsigned};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width unsigned integer types that can back the dense and sparse
/// buffers of a [`SparseSet`](crate::SparseSet).
///
/// The element type bounds both the values the set can hold and the
/// positions the sparse buffer can point at. Positions never outgrow the
/// element: a position is always at most `maximum_value`, which is
/// validated against [`MAX_STORABLE`](StorageElement::MAX_STORABLE) when
/// the set is created.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`; the trait is sealed.
pub trait StorageElement: PrimInt + Unsigned + sealed::Sealed {
    /// Width of the element type in bits.
    const BITS: u32;

    /// The largest value an element can hold.
    const MAX_STORABLE: usize;

    /// Narrows a value that is known to fit the element width.
    fn from_usize(value: usize) -> Self;

    /// Widens an element back to `usize`.
    fn to_usize(self) -> usize;
}

// `MAX as usize` truncates only for u64 on 32-bit targets, where nothing
// larger than usize::MAX can be stored or addressed anyway.
macro_rules! impl_storage_element {
    ($($element:ty),*) => {$(
        impl sealed::Sealed for $element {}

        impl StorageElement for $element {
            const BITS: u32 = <$element>::BITS;
            const MAX_STORABLE: usize = <$element>::MAX as usize;

            #[inline]
            fn from_usize(value: usize) -> Self {
                debug_assert!(value <= Self::MAX_STORABLE);
                value as $element
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }
        }
    )*};
}

impl_storage_element!(u8, u16, u32, u64);
