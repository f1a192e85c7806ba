#![forbid(unsafe_code)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Tinytest MPL
//!
//! Compile-time branching between values of different types.
//!
//! - [`Bool`]: a type-level boolean (`True` / `False`)
//! - [`if_static`]: pick one of two values, each keeping its own type
//! - [`exec_if`]: pick one of two closures and call it with [`Identity`]
//! - [`BoolType`]: lets generic code branch on an associated boolean type
//!
//! ## Example
//!
//! ```rust
//! use tinytest_mpl::{Bool, if_static};
//!
//! let text: String = if_static(Bool::<true>, String::from("text"), 42);
//! let number: i32 = if_static(Bool::<false>, String::from("text"), 42);
//! assert_eq!(text, "text");
//! assert_eq!(number, 42);
//! ```

mod boolean;
mod identity;
mod select;

pub use boolean::{Bool, BoolType, False, True};
pub use identity::{Identity, identity};
pub use select::{Select, exec_if, if_static};
