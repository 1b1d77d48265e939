use crate::Error;
use ::core::{cmp::Ordering, fmt, num::NonZeroUsize};

/// Which scores the detector compares
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Out-of-place distance between the top `max_size` character ngrams
    RankDistance { max_size: NonZeroUsize },
    /// Word model perplexity
    Perplexity,
}

impl Mode {
    pub const DEFAULT_RANK_SIZE: NonZeroUsize = match NonZeroUsize::new(300) {
        Some(size) => size,
        None => unreachable!(),
    };

    #[inline]
    pub fn rank_distance(max_size: usize) -> Result<Self, Error> {
        NonZeroUsize::new(max_size)
            .map(|max_size| Self::RankDistance { max_size })
            .ok_or(Error::ZeroRankSize)
    }

    /// `0` selects [`Mode::Perplexity`], anything else is the rank table size
    #[inline]
    pub fn from_rank_size(rank_size: usize) -> Self {
        NonZeroUsize::new(rank_size)
            .map_or(Self::Perplexity, |max_size| Self::RankDistance { max_size })
    }
}

impl Default for Mode {
    #[inline]
    fn default() -> Self {
        Self::RankDistance {
            max_size: Self::DEFAULT_RANK_SIZE,
        }
    }
}

/// Lower is better
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    Distance(usize),
    Perplexity(f64),
}

impl Score {
    /// Lower is better. A detector only produces one variant, the `Distance`
    /// before `Perplexity` order across variants is arbitrary.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Distance(d1), Self::Distance(d2)) => d1.cmp(d2),
            (Self::Perplexity(p1), Self::Perplexity(p2)) => p1.total_cmp(p2),
            (Self::Distance(_), Self::Perplexity(_)) => Ordering::Less,
            (Self::Perplexity(_), Self::Distance(_)) => Ordering::Greater,
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Distance(d) => d as f64,
            Self::Perplexity(p) => p,
        }
    }
}

impl fmt::Display for Score {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance(d) => write!(f, "{d}"),
            Self::Perplexity(p) => write!(f, "{p}"),
        }
    }
}
