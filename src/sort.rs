use std::cmp::Ordering;

use crate::record::ModuleRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Size,
    UserCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The resolved (field, direction) pair. Threaded from option parsing
/// down to the sort; there is no process-global comparator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSelection {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSelection {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSelection {
    /// Total order over records for this selection. Name compares
    /// byte-lexicographically, the numeric fields compare numerically;
    /// ties carry no secondary key.
    pub fn compare(&self, lhs: &ModuleRecord, rhs: &ModuleRecord) -> Ordering {
        let ord = match self.field {
            SortField::Name => lhs.name.cmp(&rhs.name),
            SortField::Size => lhs.size.cmp(&rhs.size),
            SortField::UserCount => lhs.user_count.cmp(&rhs.user_count),
        };
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Reorder the whole record set in place. Equal keys may land in any
/// order; empty and single-element slices are fine.
pub fn sort_records(records: &mut [ModuleRecord], selection: SortSelection) {
    records.sort_unstable_by(|a, b| selection.compare(a, b));
}
