use crate::Error;
use ::core::{fmt, num::NonZeroUsize};

/// Highest ngram order used by a profile or a probability model, always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NgramOrder(NonZeroUsize);

impl NgramOrder {
    pub const UNI: Self = Self(NonZeroUsize::MIN);

    #[inline]
    pub fn new(order: usize) -> Result<Self, Error> {
        NonZeroUsize::new(order).map(Self).ok_or(Error::ZeroOrder)
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Orders `1..=self`
    #[inline]
    pub fn orders(self) -> ::core::ops::RangeInclusive<usize> {
        1..=self.get()
    }
}

impl TryFrom<usize> for NgramOrder {
    type Error = Error;

    #[inline]
    fn try_from(order: usize) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<NgramOrder> for usize {
    #[inline(always)]
    fn from(order: NgramOrder) -> Self {
        order.get()
    }
}

impl fmt::Display for NgramOrder {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
