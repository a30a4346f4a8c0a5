use std::fmt::{self, Display};

use rand::RngCore;

use crate::error::GeneratorError;
use crate::exclusion::ExclusionSet;
use crate::games::GameConfig;
use crate::sampler::IndexSampler;
use crate::utils::format_numbers;

/// A generated game: distinct numbers in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    numbers: Vec<u32>,
    display_zero: bool,
}

impl Combination {
    pub fn from_numbers(mut numbers: Vec<u32>, display_zero: bool) -> Self {
        numbers.sort_unstable();
        numbers.dedup();
        Self {
            numbers,
            display_zero,
        }
    }

    /// Reads back two-digit labels such as `["01", "07"]`.
    pub fn from_labels<S: AsRef<str>>(labels: &[S], display_zero: bool) -> Result<Self, GeneratorError> {
        let numbers = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                label
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| GeneratorError::InvalidNumber(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_numbers(numbers, display_zero))
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        format_numbers(&self.numbers, self.display_zero)
    }

    pub fn display_zero(&self) -> bool {
        self.display_zero
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(" - "))
    }
}

/// Draws `count` distinct numbers of `game`, skipping anything in `exclusion`.
///
/// Each pick removes one element from the working pool, so every subset of
/// size `count` is equally likely. Fails without drawing anything when the
/// filtered pool is smaller than `count`.
pub fn generate<R: RngCore>(
    game: &GameConfig,
    count: usize,
    exclusion: Option<&ExclusionSet>,
    sampler: &mut IndexSampler<R>,
) -> Result<Combination, GeneratorError> {
    let mut pool: Vec<u32> = (game.lower()..=game.upper())
        .filter(|n| !exclusion.is_some_and(|set| set.contains(*n)))
        .collect();

    if pool.len() < count {
        return Err(GeneratorError::FilterTooRestrictive {
            requested: count,
            available: pool.len(),
        });
    }

    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = sampler.sample(pool.len())?;
        picked.push(pool.swap_remove(idx));
    }

    Ok(Combination::from_numbers(picked, game.display_zero()))
}
