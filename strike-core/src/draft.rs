//! In-progress booking form state.

use serde::{Deserialize, Serialize};

/// Stable identity of a shoe row, assigned when the row is added.
///
/// Display numbering ("person 1", "person 2", ...) is derived from the row's
/// position and shifts when earlier rows are removed; the id never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShoeId(u32);

impl ShoeId {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeEntry {
    pub id: ShoeId,
    pub size: String,
}

impl ShoeEntry {
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.size.trim().is_empty()
    }
}

/// The four scalar inputs of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Date,
    Time,
    People,
    Lanes,
}

impl DraftField {
    pub const ALL: [Self; 4] = [Self::Date, Self::Time, Self::People, Self::Lanes];
}

/// Booking form contents exactly as typed.
///
/// `people` and `lanes` stay textual until validation so a half-typed value
/// can round-trip through the form untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub date: String,
    pub time: String,
    pub people: String,
    pub lanes: String,
    shoes: Vec<ShoeEntry>,
    next_shoe_id: u32,
}

impl BookingDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::People => &self.people,
            DraftField::Lanes => &self.lanes,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Date => self.date = value,
            DraftField::Time => self.time = value,
            DraftField::People => self.people = value,
            DraftField::Lanes => self.lanes = value,
        }
    }

    /// Builder-style setter used by tests and scripted scenarios.
    #[must_use]
    pub fn with_field(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    /// Append an empty shoe row and return its id.
    pub fn add_shoe(&mut self) -> ShoeId {
        let id = ShoeId(self.next_shoe_id);
        self.next_shoe_id = self.next_shoe_id.wrapping_add(1);
        self.shoes.push(ShoeEntry {
            id,
            size: String::new(),
        });
        id
    }

    /// Remove a shoe row. Returns `false` when the id is unknown.
    pub fn remove_shoe(&mut self, id: ShoeId) -> bool {
        let before = self.shoes.len();
        self.shoes.retain(|entry| entry.id != id);
        self.shoes.len() != before
    }

    /// Set the size typed into a shoe row. Returns `false` when the id is unknown.
    pub fn set_shoe_size(&mut self, id: ShoeId, size: impl Into<String>) -> bool {
        match self.shoes.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.size = size.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn shoes(&self) -> &[ShoeEntry] {
        &self.shoes
    }

    /// Shoe rows paired with their 1-based display number.
    pub fn shoe_rows(&self) -> impl Iterator<Item = (usize, &ShoeEntry)> {
        self.shoes.iter().enumerate().map(|(idx, entry)| (idx + 1, entry))
    }

    /// Id of the row currently shown as "person `number`".
    #[must_use]
    pub fn shoe_id_at(&self, number: usize) -> Option<ShoeId> {
        number
            .checked_sub(1)
            .and_then(|idx| self.shoes.get(idx))
            .map(|entry| entry.id)
    }

    /// Combined `YYYY-MM-DDTHH:mm` timestamp sent to the booking endpoint.
    #[must_use]
    pub fn when(&self) -> String {
        format!("{}T{}", self.date.trim(), self.time.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shoe_rows_renumber_after_removal_but_keep_ids() {
        let mut draft = BookingDraft::new();
        let first = draft.add_shoe();
        let second = draft.add_shoe();
        let third = draft.add_shoe();
        assert!(draft.set_shoe_size(third, "44"));

        assert!(draft.remove_shoe(second));
        let rows: Vec<_> = draft.shoe_rows().map(|(n, e)| (n, e.id)).collect();
        assert_eq!(rows, vec![(1, first), (2, third)]);
        assert_eq!(draft.shoe_id_at(2), Some(third));
        assert_eq!(draft.shoes()[1].size, "44");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut draft = BookingDraft::new();
        let first = draft.add_shoe();
        draft.remove_shoe(first);
        let next = draft.add_shoe();
        assert_ne!(first, next);
        assert!(!draft.remove_shoe(first));
        assert!(!draft.set_shoe_size(first, "40"));
    }

    #[test]
    fn when_joins_date_and_time() {
        let draft = BookingDraft::new()
            .with_field(DraftField::Date, "2025-12-24")
            .with_field(DraftField::Time, " 18:00 ");
        assert_eq!(draft.when(), "2025-12-24T18:00");
        assert_eq!(draft.field(DraftField::Time), " 18:00 ");
    }

    #[test]
    fn shoe_id_at_rejects_zero_and_out_of_range() {
        let mut draft = BookingDraft::new();
        draft.add_shoe();
        assert_eq!(draft.shoe_id_at(0), None);
        assert_eq!(draft.shoe_id_at(2), None);
    }
}
