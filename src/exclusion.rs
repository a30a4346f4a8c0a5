use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::history::History;

/// Numbers drawn within a window of the newest draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    numbers: BTreeSet<u32>,
}

impl ExclusionSet {
    /// Union of the numbers of the first `window` draws of `history`.
    pub fn from_history(history: &History, window: usize) -> Self {
        let numbers = history
            .recent(window)
            .iter()
            .flat_map(|draw| draw.numbers.iter().copied())
            .collect();
        Self { numbers }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.numbers.iter().copied()
    }
}

impl FromIterator<u32> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Numbers of the last few draws.
    Light,
    /// Numbers of a longer run of draws.
    Heavy,
}

impl Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Light => f.write_str("light"),
            Filter::Heavy => f.write_str("heavy"),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Filter::Light),
            "heavy" => Ok(Filter::Heavy),
            other => Err(format!("unknown filter {:?}, expected light or heavy", other)),
        }
    }
}

/// How many of the newest draws each filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterWindows {
    pub light: usize,
    pub heavy: usize,
}

impl Default for FilterWindows {
    fn default() -> Self {
        Self { light: 3, heavy: 18 }
    }
}

/// The exclusion sets of every filter, always rebuilt together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklists {
    light: ExclusionSet,
    heavy: ExclusionSet,
}

impl Blocklists {
    pub fn build(history: &History, windows: FilterWindows) -> Self {
        Self {
            light: ExclusionSet::from_history(history, windows.light),
            heavy: ExclusionSet::from_history(history, windows.heavy),
        }
    }

    pub fn get(&self, filter: Filter) -> &ExclusionSet {
        match filter {
            Filter::Light => &self.light,
            Filter::Heavy => &self.heavy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{DrawRecord, UNKNOWN_DATE};

    fn draw(id: u32, numbers: &[u32]) -> DrawRecord {
        DrawRecord {
            id,
            date: UNKNOWN_DATE.to_string(),
            numbers: numbers.to_vec(),
        }
    }

    fn sample_history() -> History {
        History::from_records(vec![
            draw(1, &[1, 2, 3]),
            draw(2, &[3, 4, 5]),
            draw(3, &[]),
            draw(4, &[5, 6, 7]),
        ])
    }

    #[test]
    fn test_window_takes_newest_draws() {
        let set = ExclusionSet::from_history(&sample_history(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![5, 6, 7]);

        let set = ExclusionSet::from_history(&sample_history(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_larger_than_history_uses_everything() {
        let set = ExclusionSet::from_history(&sample_history(), 18);
        assert_eq!(set.len(), 7);
        assert!(set.contains(1));
    }

    #[test]
    fn test_empty_history_blocks_nothing() {
        let lists = Blocklists::build(&History::default(), FilterWindows::default());
        assert!(lists.get(Filter::Light).is_empty());
        assert!(lists.get(Filter::Heavy).is_empty());
    }

    #[test]
    fn test_blocklists_use_their_windows() {
        let lists = Blocklists::build(&sample_history(), FilterWindows { light: 1, heavy: 4 });
        assert_eq!(lists.get(Filter::Light).len(), 3);
        assert_eq!(lists.get(Filter::Heavy).len(), 7);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("light".parse::<Filter>(), Ok(Filter::Light));
        assert_eq!("HEAVY".parse::<Filter>(), Ok(Filter::Heavy));
        assert!("medium".parse::<Filter>().is_err());
    }
}
