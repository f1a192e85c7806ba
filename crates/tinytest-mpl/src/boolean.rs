//! Type-level booleans.

use std::fmt;

use crate::identity::Identity;
use crate::select::exec_if;

/// A boolean known at compile time.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool<const B: bool>;

pub type True = Bool<true>;
pub type False = Bool<false>;

impl<const B: bool> Bool<B> {
    pub const VALUE: bool = B;

    pub const fn new() -> Self {
        Self
    }

    pub const fn value(self) -> bool {
        B
    }
}

impl<const B: bool> fmt::Debug for Bool<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bool<{B}>")
    }
}

impl<const B: bool> From<Bool<B>> for bool {
    fn from(_: Bool<B>) -> bool {
        B
    }
}

/// Implemented by [`True`] and [`False`] only.
///
/// Generic code cannot name every closure type a [`Select`](crate::Select)
/// bound would need, so this trait carries the branch as a method whose
/// two arms share a result type:
///
/// ```rust
/// use tinytest_mpl::{BoolType, False, True};
///
/// trait Kind {
///     type IsText: BoolType;
/// }
/// impl Kind for String {
///     type IsText = True;
/// }
/// impl Kind for i32 {
///     type IsText = False;
/// }
///
/// fn describe<T: Kind>() -> &'static str {
///     T::IsText::default().branch(|_| "text", |_| "other")
/// }
///
/// assert_eq!(describe::<String>(), "text");
/// assert_eq!(describe::<i32>(), "other");
/// ```
pub trait BoolType: Copy + Default + fmt::Debug {
    const VALUE: bool;

    /// Run `on_true` or `on_false` depending on `Self`.
    fn branch<R, T, F>(self, on_true: T, on_false: F) -> R
    where
        T: FnOnce(Identity) -> R,
        F: FnOnce(Identity) -> R;
}

impl BoolType for True {
    const VALUE: bool = true;

    fn branch<R, T, F>(self, on_true: T, on_false: F) -> R
    where
        T: FnOnce(Identity) -> R,
        F: FnOnce(Identity) -> R,
    {
        exec_if(self, on_true, on_false)
    }
}

impl BoolType for False {
    const VALUE: bool = false;

    fn branch<R, T, F>(self, on_true: T, on_false: F) -> R
    where
        T: FnOnce(Identity) -> R,
        F: FnOnce(Identity) -> R,
    {
        exec_if(self, on_true, on_false)
    }
}
