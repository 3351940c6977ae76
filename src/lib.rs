#![no_std]

//! `countrange`: decorate any iterable with a synchronized counter index.
//!
//! A consumer walking a sequence through this crate receives, at each step,
//! the element together with its position. The starting value of the counter
//! and its direction are configurable, and element order may independently be
//! reversed, giving four useful enumerations of the same sequence.
//!
//! ```
//! use countrange::count;
//!
//! let letters = ["A", "B", "C", "D", "E"];
//! for (value, index) in count(&letters) {
//!     println!("{value}: {index}");
//! }
//! ```
//!
//! # Accepted shapes
//!
//! The entry points take anything iterable; ownership follows the argument:
//!
//! - `count(&container)` — borrows; pairs carry `&T` into the live sequence.
//! - `count(&mut container)` — borrows mutably; writing through the element
//!   reference modifies the sequence.
//! - `count(container)` — moves the container into the range, which keeps it
//!   alive for the whole traversal.
//! - `count(any_iterator)` — a segment of a sequence, a generated range, or
//!   any other iterator value works directly:
//!
//! ```
//! use countrange::count;
//!
//! let letters = ["A", "B", "C", "D", "E", "F", "G"];
//! let pairs: Vec<_> = count(letters.iter().take(3)).into_iter().collect();
//! assert_eq!(pairs, vec![(&"A", 0), (&"B", 1), (&"C", 2)]);
//! ```
//!
//! Sources that only lend their elements transiently can be copied into an
//! internally owned vector with [`count_owned`] / [`rcount_owned`]; this is
//! the only place the crate allocates.
//!
//! # Counter configuration
//!
//! [`Counted::offset`] sets the base value; [`Counted::reverse_index`] makes
//! the counter decrement so the final element sees the base value. Both are
//! independent of the element direction ([`count`] vs [`rcount`]):
//!
//! ```
//! use countrange::{count, rcount};
//!
//! let letters = ["A", "B", "C", "D", "E"];
//!
//! let forward: Vec<_> = count(&letters).into_iter().collect();
//! assert_eq!(forward[0], (&"A", 0));
//! assert_eq!(forward[4], (&"E", 4));
//!
//! let countdown: Vec<_> = count(&letters).reverse_index().into_iter().collect();
//! assert_eq!(countdown[0], (&"A", 4));
//! assert_eq!(countdown[4], (&"E", 0));
//!
//! let backwards: Vec<_> = rcount(&letters).into_iter().collect();
//! assert_eq!(backwards[0], (&"E", 0));
//! assert_eq!(backwards[4], (&"A", 4));
//!
//! let both: Vec<_> = rcount(&letters).reverse_index().into_iter().collect();
//! assert_eq!(both[0], (&"E", 4));
//! assert_eq!(both[4], (&"A", 0));
//! ```
//!
//! # Index type
//!
//! The counter type [`Index`] defaults to `usize` and is selected at build
//! time: the `signed-index` feature switches to a signed type, the `index-64`
//! feature forces 64 bits regardless of pointer width. Signed indices are the
//! safer choice for consumers doing their own arithmetic on the counter.
//!
//! ```toml
//! [dependencies]
//! countrange = { version = "0.1", features = ["signed-index", "index-64"] }
//! ```
//!
//! # Failure model
//!
//! There is none at runtime. The public API is infallible; shape mismatches
//! surface as missing trait bounds at compile time ([`rcount`] needs a
//! double-ended iterator, [`Counted::reverse_index`] needs an exact length).
//! Advancing never panics, including the step past the final element of an
//! unsigned countdown.
//!
//! # `no_std`
//!
//! The crate is `no_std` with `alloc` (used only by [`count_owned`] /
//! [`rcount_owned`]). The optional `std` feature exists for downstream
//! feature unification and enables nothing extra.

extern crate alloc;

mod index;
mod iter;
mod range;

// Re-export public types and functions
pub use index::Index;
pub use iter::CountingIter;
pub use range::{count, count_owned, rcount, rcount_owned, Counted};
