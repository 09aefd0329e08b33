//! Frequency Table Module
//! Occurrence counts of distinct values with derived percentages.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// One row of a rendered distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry<T> {
    pub value: T,
    pub count: usize,
    pub percentage: f64,
}

/// Counts of distinct values, remembering first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    counts: Vec<(T, usize)>,
    index: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: T) {
        match self.index.get(&value) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(value.clone(), self.counts.len());
                self.counts.push((value, 1));
            }
        }
    }

    pub fn count(&self, value: &T) -> usize {
        self.index.get(value).map(|&i| self.counts[i].1).unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Values ordered most frequent first. Equal counts keep first-seen order.
    pub fn most_common(&self) -> Vec<(T, usize)> {
        let mut ordered = self.counts.clone();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        ordered
    }

    /// Most-common-first entries with percentages of `denominator`.
    pub fn distribution(&self, denominator: usize, limit: Option<usize>) -> Vec<FrequencyEntry<T>> {
        self.most_common()
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(value, count)| Self::entry(value, count, denominator))
            .collect()
    }

    /// Entries ordered by value, with percentages of `denominator`.
    pub fn sorted_by_value(&self, denominator: usize) -> Vec<FrequencyEntry<T>>
    where
        T: Ord,
    {
        let mut ordered = self.counts.clone();
        ordered.sort_by(|a, b| a.0.cmp(&b.0));
        ordered
            .into_iter()
            .map(|(value, count)| Self::entry(value, count, denominator))
            .collect()
    }

    fn entry(value: T, count: usize, denominator: usize) -> FrequencyEntry<T> {
        FrequencyEntry {
            value,
            count,
            percentage: percentage(count, denominator),
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.add(value);
        }
        table
    }
}

/// `100 * count / denominator`, or 0 for an empty denominator.
pub fn percentage(count: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        100.0 * count as f64 / denominator as f64
    }
}
