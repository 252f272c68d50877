//! Collection wrapper for displaying groups of records.

use std::{fmt, ops::Index};

/// A list of records with an empty-state message.
///
/// ```rust
/// use coach_core::display::Listing;
///
/// let empty: Listing<String> = Listing::new(Vec::new(), "supplements");
/// assert_eq!(empty.to_string(), "No supplements found.\n");
/// ```
pub struct Listing<T> {
    items: Vec<T>,
    noun: &'static str,
}

impl<T> Listing<T> {
    /// `noun` is the plural used in the empty message.
    pub fn new(items: Vec<T>, noun: &'static str) -> Self {
        Self { items, noun }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Index<usize> for Listing<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Listing<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Listing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "No {} found.", self.noun);
        }
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
