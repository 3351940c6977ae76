/// The counter type carried alongside every element.
///
/// Selected at build time by cargo features:
///
/// | `signed-index` | `index-64` | `Index` |
/// |---|---|---|
/// | off | off | `usize` |
/// | on | off | `isize` |
/// | off | on | `u64` |
/// | on | on | `i64` |
#[cfg(all(not(feature = "signed-index"), not(feature = "index-64")))]
pub type Index = usize;

/// The counter type carried alongside every element (`signed-index`).
#[cfg(all(feature = "signed-index", not(feature = "index-64")))]
pub type Index = isize;

/// The counter type carried alongside every element (`index-64`).
#[cfg(all(not(feature = "signed-index"), feature = "index-64"))]
pub type Index = u64;

/// The counter type carried alongside every element (`signed-index` + `index-64`).
#[cfg(all(feature = "signed-index", feature = "index-64"))]
pub type Index = i64;
