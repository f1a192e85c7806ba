//! Static if/else.

use crate::boolean::Bool;
use crate::identity::Identity;

/// Chooses between `T` and `F` at compile time.
pub trait Select<T, F> {
    type Output;

    fn select(self, on_true: T, on_false: F) -> Self::Output;
}

impl<T, F> Select<T, F> for Bool<true> {
    type Output = T;

    #[inline]
    fn select(self, on_true: T, _: F) -> T {
        on_true
    }
}

impl<T, F> Select<T, F> for Bool<false> {
    type Output = F;

    #[inline]
    fn select(self, _: T, on_false: F) -> F {
        on_false
    }
}

/// Return `on_true` when `cond` is [`True`](crate::True), else `on_false`.
///
/// The result has the type of the selected argument; the other is dropped.
#[inline]
pub fn if_static<C, T, F>(cond: C, on_true: T, on_false: F) -> C::Output
where
    C: Select<T, F>,
{
    cond.select(on_true, on_false)
}

/// Select a closure with [`if_static`] and call it with [`Identity`].
///
/// ```rust
/// use tinytest_mpl::{Bool, Identity, exec_if};
///
/// let input = 42;
/// let out = exec_if(
///     Bool::<false>,
///     |id: Identity| id.apply(input).to_string() + "!",
///     |id: Identity| id.apply(input).to_string(),
/// );
/// assert_eq!(out, "42");
/// ```
#[inline]
pub fn exec_if<C, T, F, R>(cond: C, on_true: T, on_false: F) -> R
where
    C: Select<T, F>,
    C::Output: FnOnce(Identity) -> R,
{
    if_static(cond, on_true, on_false)(Identity)
}
