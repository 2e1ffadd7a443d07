use crate::basic_types::Colour;

/// The ordered candidate colours still considered possible for one variable.
///
/// A fresh domain is `[1, 2, ..., K]`; removals preserve the relative order of the remaining
/// values, which is the order in which value selectors see them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Domain {
    values: Vec<Colour>,
}

impl Domain {
    /// Creates the full domain `1..=palette_size`.
    pub fn full(palette_size: u32) -> Domain {
        Domain {
            values: (1..=palette_size).collect(),
        }
    }

    pub fn values(&self) -> &[Colour] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: Colour) -> bool {
        self.values.contains(&value)
    }

    /// Returns whether the domain is non-empty and every remaining value equals `value`.
    pub fn consists_solely_of(&self, value: Colour) -> bool {
        !self.values.is_empty() && self.values.iter().all(|&candidate| candidate == value)
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: Colour) -> bool {
        match self.values.iter().position(|&candidate| candidate == value) {
            Some(position) => {
                let _ = self.values.remove(position);
                true
            }
            None => false,
        }
    }

    /// Removes every value except `value`, returning whether the domain changed.
    pub fn retain_only(&mut self, value: Colour) -> bool {
        let size_before = self.values.len();
        self.values.retain(|&candidate| candidate == value);
        self.values.len() != size_before
    }
}
