use super::schema::Schema;
use super::value::{SortValue, Target};

/// A row of a list screen.
///
/// Implementors expose their filterable fields and sort keys by name, with
/// missing backend values already converted (see [`super::value`]). The
/// engine never touches record fields directly.
pub trait Record {
    /// The list schema this record type is shown with.
    fn schema() -> &'static Schema;

    fn id(&self) -> i64;

    /// The value the filter field `field` is tested against.
    fn target(&self, field: &str) -> Target<'_>;

    /// The comparable value for sort key `key`.
    ///
    /// Unknown keys fall back to the schema's default sort key.
    fn sort_value(&self, key: &str) -> SortValue;
}
