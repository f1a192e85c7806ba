//! Check macros.
//!
//! Thin wrappers over [`CaseContext`](crate::CaseContext) that capture the
//! checked expression's source text and the call site. Operands are
//! evaluated exactly once.

/// Check that `expr` is true. The case continues if it is not.
///
/// Evaluates to `true` when the check passed.
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr $(,)?) => {
        $ctx.check(
            $cond,
            ::core::stringify!($cond),
            $crate::Location::new(::core::file!(), ::core::line!()),
        )
    };
}

/// Check that `expr` is true. The case body returns early if it is not.
///
/// Must be used inside a case body (it applies `?` to a
/// [`CaseResult`](crate::CaseResult)).
#[macro_export]
macro_rules! require {
    ($ctx:expr, $cond:expr $(,)?) => {
        $ctx.require(
            $cond,
            ::core::stringify!($cond),
            $crate::Location::new(::core::file!(), ::core::line!()),
        )?
    };
}

/// Check that `lhs == rhs`. The case continues if they differ.
///
/// Evaluates to `true` when the check passed.
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => $ctx.check_eq(
                lhs,
                rhs,
                ::core::stringify!($lhs),
                ::core::stringify!($rhs),
                $crate::Location::new(::core::file!(), ::core::line!()),
            ),
        }
    };
}

/// Check that `lhs == rhs`. The case body returns early if they differ.
#[macro_export]
macro_rules! require_eq {
    ($ctx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => $ctx.require_eq(
                lhs,
                rhs,
                ::core::stringify!($lhs),
                ::core::stringify!($rhs),
                $crate::Location::new(::core::file!(), ::core::line!()),
            )?,
        }
    };
}

/// Attach a formatted line of context to the next check.
#[macro_export]
macro_rules! add_info {
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.add_info(::std::format!($($arg)+))
    };
}

/// Print a formatted message at `message` verbosity.
#[macro_export]
macro_rules! message {
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.message(&::std::format!($($arg)+))
    };
}
