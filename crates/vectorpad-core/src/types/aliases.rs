//! Type aliases for commonly used shared types.
//!
//! The drawing surface is single-threaded, so shared mutable state is
//! `Rc<RefCell<T>>`. A viewport and its overlays hold the same transform
//! through one of these.

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```rust
/// use vectorpad_core::types::{shared, Shared};
///
/// let value: Shared<u32> = shared(1);
/// let alias = value.clone();
/// *alias.borrow_mut() += 1;
/// assert_eq!(*value.borrow(), 2);
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a value in [`Shared`].
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
