//! Back-reference policies: whether (and where) a value remembers the slot
//! holding it.
//!
//! A back-reference designates one integer field of the value type. While
//! the value is live the field holds its own link offset; while the slot is
//! vacant the same bytes hold the free-list link with the invalid bit set.
//! Because the field is touched through raw pointers, a policy works on
//! slots whose value is not (or no longer) initialized, which is what the
//! in-place free-list encodings rely on.
//!
//! Use [`backref_field!`](crate::backref_field) to derive a policy for a
//! named field, or [`NoBackref`] to opt out.

use crate::link::LinkSize;

/// A compile-time choice of back-reference field within `T`.
///
/// # Safety
///
/// When [`Backref::ENABLED`] is true, `set_raw`/`get_raw` must access a
/// properly aligned region of exactly `size_of::<S>()` bytes inside `T`'s
/// storage, and must not touch anything else.
pub unsafe trait Backref<T, S: LinkSize> {
    /// Whether this policy actually stores anything.
    const ENABLED: bool;

    /// Write `offset` into the designated field.
    ///
    /// # Safety
    ///
    /// `slot` must point to storage valid for a write of `T`'s designated
    /// field; the rest of the value need not be initialized.
    unsafe fn set_raw(slot: *mut T, offset: S);

    /// Read the designated field.
    ///
    /// # Safety
    ///
    /// `slot` must point to storage in which the designated field's bytes
    /// are initialized (a live value, or a vacant slot that was encoded
    /// with [`Backref::set_raw`]).
    unsafe fn get_raw(slot: *const T) -> S;

    /// Write `offset` into a live value's field.
    #[inline]
    fn set(value: &mut T, offset: S) {
        // SAFETY: a live value's storage is fully initialized
        unsafe { Self::set_raw(value, offset) }
    }

    /// Read a live value's field.
    #[inline]
    fn get(value: &T) -> S {
        // SAFETY: a live value's storage is fully initialized
        unsafe { Self::get_raw(value) }
    }
}

/// The policy for values that carry no back-reference.
///
/// Writes are dropped and reads return [`LinkSize::NULL`]; tables whose
/// free-list encoding needs a real field refuse this policy at compile
/// time.
pub struct NoBackref;

// SAFETY: ENABLED is false and neither accessor touches the slot
unsafe impl<T, S: LinkSize> Backref<T, S> for NoBackref {
    const ENABLED: bool = false;

    #[inline]
    unsafe fn set_raw(_slot: *mut T, _offset: S) {}

    #[inline]
    unsafe fn get_raw(_slot: *const T) -> S {
        S::NULL
    }
}

/// Derive a [`Backref`] policy for a named integer field.
///
/// The field must have exactly the link size type; this is checked at
/// compile time.
///
/// ```
/// use slot_table::backref_field;
///
/// struct Body {
///     position: [f32; 3],
///     slot: u32,
/// }
///
/// backref_field!(BodySlot for Body { slot: u32 });
/// ```
#[macro_export]
macro_rules! backref_field {
    ($(#[$meta:meta])* $vis:vis $name:ident for $owner:ty { $field:ident: $size:ty }) => {
        $(#[$meta])*
        $vis struct $name;

        const _: () = {
            // rejects fields whose type is not exactly $size
            const _FIELD_TYPE: fn(&$owner) -> $size = |owner| owner.$field;
        };

        // SAFETY: the accessors touch exactly the named field, whose type
        // is checked to be $size above, through its own properly aligned
        // address
        unsafe impl $crate::backref::Backref<$owner, $size> for $name {
            const ENABLED: bool = true;

            #[inline]
            unsafe fn set_raw(slot: *mut $owner, offset: $size) {
                // SAFETY: the caller promises the field's storage is valid
                // for writes
                unsafe { ::core::ptr::addr_of_mut!((*slot).$field).write(offset) }
            }

            #[inline]
            unsafe fn get_raw(slot: *const $owner) -> $size {
                // SAFETY: the caller promises the field's bytes are
                // initialized
                unsafe { ::core::ptr::addr_of!((*slot).$field).read() }
            }
        }
    };
}
