//! Container-agnostic traversal combinators over compile-time shape
//! extraction.
//!
//! The crate has two layers:
//!
//! - [`extract`] and the shape traits ([`Sequence`], [`Visitor`],
//!   [`Predicate`]) derive, from a container type or a callable type alone,
//!   its element type, argument types, and arity. Resolution is entirely
//!   static: a container with no element type or a callable with the wrong
//!   parameter list is a compile error, never a runtime one.
//! - [`traverse`] provides generic operations over any such container —
//!   [`each`](traverse::each), [`until`](traverse::until),
//!   [`remove`](traverse::remove), [`find`](traverse::find),
//!   [`pop`](traverse::pop) — without the caller ever spelling out the
//!   element type.
//!
//! # Example
//!
//! ```
//! use braid_core::traverse;
//!
//! let mut numbers = vec![3, 4, 3, 7];
//!
//! assert!(traverse::until(&numbers, |n: &i32| *n > 5));
//! assert_eq!(traverse::find(&numbers, |n: &i32| n % 2 == 0), Some(4));
//!
//! traverse::remove(&mut numbers, &3);
//! assert_eq!(numbers, vec![4, 7]);
//! ```

pub mod extract;
pub mod traverse;

mod callable;
mod sequence;

pub use callable::{IndexedVisitor, Predicate, Visitor};
pub use sequence::{PopFront, Retain, Sequence};
