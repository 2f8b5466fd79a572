//! Capability flags and the [`table!`](crate::table) dispatch macro.
//!
//! Each storage variant answers to an OR-combination of the flags below
//! (see the `TAGS` constant on every table type). The [`table!`] macro maps
//! a recognized combination to its concrete type; an unrecognized
//! combination matches no rule and fails to compile.

/// Dense values with an indirection array.
pub const PACKED: u32 = 1;
/// The value type embeds a back-reference to its slot.
pub const BACKREF: u32 = 2;
/// Slot-based storage.
pub const SPARSE: u32 = 4;
/// Slots hold pointers to externally owned values.
pub const POINTER: u32 = 8;
/// No iteration support.
pub const NO_ITER: u32 = 16;
/// Occupancy tracked in an external bitmap.
pub const VALIDMAP: u32 = 32;
/// Free list kept in ascending slot order.
pub const SORTEDFREE: u32 = 64;

/// Select a table type from a combination of capability flags.
///
/// The recognized combinations, with their arguments:
///
/// | invocation | selected type |
/// |---|---|
/// | `table!(packed, T [, S])` | [`PackedTable`](crate::packed::PackedTable) |
/// | `table!(packed \| backref, T, B [, S])` | [`PackedTable`](crate::packed::PackedTable) |
/// | `table!(sparse \| backref, T, B [, S])` | [`SparseTable`](crate::sparse::SparseTable) |
/// | `table!(sparse \| validmap, T [, S])` | [`ValidMapTable`](crate::valid_map::ValidMapTable) |
/// | `table!(sparse \| validmap \| backref, T, B [, S])` | [`ValidMapTable`](crate::valid_map::ValidMapTable) |
/// | `table!(sparse \| sortedfree, T [, S])` | [`SortedFreeTable`](crate::sorted_free::SortedFreeTable) |
/// | `table!(sparse \| sortedfree \| backref, T, B [, S])` | [`SortedFreeTable`](crate::sorted_free::SortedFreeTable) |
/// | `table!(sparse \| no_iter, T [, S])` | [`NoIterTable`](crate::no_iter::NoIterTable) |
/// | `table!(sparse \| no_iter \| backref, T, B [, S])` | [`NoIterTable`](crate::no_iter::NoIterTable) |
/// | `table!(sparse \| pointer, T [, S])` | [`PtrTable`](crate::ptr_table::PtrTable) |
/// | `table!(sparse \| pointer \| backref, T, B [, S])` | [`PtrTable`](crate::ptr_table::PtrTable) |
///
/// `B` is a [`Backref`](crate::backref::Backref) policy and `S` the link
/// size type, defaulting to `u32`. Anything else is a compile-time error.
///
/// ```
/// use slot_table::table;
///
/// let mut names: table!(sparse | validmap, &str) = Default::default();
/// let link = names.insert("first");
/// assert_eq!(names[link], "first");
/// ```
#[macro_export]
macro_rules! table {
    (packed, $t:ty $(, $s:ty)?) => {
        $crate::packed::PackedTable<$t, $crate::backref::NoBackref $(, $s)?>
    };
    (packed | backref, $t:ty, $b:ty $(, $s:ty)?) => {
        $crate::packed::PackedTable<$t, $b $(, $s)?>
    };
    (sparse | backref, $t:ty, $b:ty $(, $s:ty)?) => {
        $crate::sparse::SparseTable<$t, $b $(, $s)?>
    };
    (sparse | validmap, $t:ty $(, $s:ty)?) => {
        $crate::valid_map::ValidMapTable<$t, $crate::backref::NoBackref $(, $s)?>
    };
    (sparse | validmap | backref, $t:ty, $b:ty $(, $s:ty)?) => {
        $crate::valid_map::ValidMapTable<$t, $b $(, $s)?>
    };
    (sparse | sortedfree, $t:ty $(, $s:ty)?) => {
        $crate::sorted_free::SortedFreeTable<$t, $crate::backref::NoBackref $(, $s)?>
    };
    (sparse | sortedfree | backref, $t:ty, $b:ty $(, $s:ty)?) => {
        $crate::sorted_free::SortedFreeTable<$t, $b $(, $s)?>
    };
    (sparse | no_iter, $t:ty $(, $s:ty)?) => {
        $crate::no_iter::NoIterTable<$t, $crate::backref::NoBackref $(, $s)?>
    };
    (sparse | no_iter | backref, $t:ty, $b:ty $(, $s:ty)?) => {
        $crate::no_iter::NoIterTable<$t, $b $(, $s)?>
    };
    (sparse | pointer, $t:ty $(, $s:ty)?) => {
        $crate::ptr_table::PtrTable<$t, $crate::backref::NoBackref $(, $s)?>
    };
    (sparse | pointer | backref, $t:ty, $b:ty $(, $s:ty)?) => {
        $crate::ptr_table::PtrTable<$t, $b $(, $s)?>
    };
}
