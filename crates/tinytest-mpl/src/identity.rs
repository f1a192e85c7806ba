//! Identity function and callable.

/// Return the argument unchanged.
///
/// Values stay owned and references keep their mutability and lifetime.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Callable form of [`identity`], handed to the closures run by
/// [`exec_if`](crate::exec_if).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Identity {
    #[inline]
    pub fn apply<T>(self, value: T) -> T {
        identity(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_same_reference() {
        let s = String::from("value");
        assert!(std::ptr::eq(identity(&s), &s));
        assert!(std::ptr::eq(Identity.apply(&s), &s));
    }

    #[test]
    fn test_mut_reference_writes_through() {
        let mut n = 1;
        *identity(&mut n) += 1;
        *Identity.apply(&mut n) += 1;
        assert_eq!(n, 3);
    }
}
