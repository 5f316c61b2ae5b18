//! Ready-made recycling of `Vec<E>` buffers.
//!
//! [`array_generator()`] builds a standalone generator for vectors. The free functions in this
//! module share one such generator per thread and per element type, so unrelated code can
//! recycle vectors without passing a generator around.
//!
//! # Example
//!
//! ```rust
//! use recycle_pool::arrays;
//!
//! let mut scratch = arrays::get::<u32>();
//! scratch.extend([1, 2, 3]);
//! assert_eq!(scratch.len(), 3);
//!
//! arrays::release(scratch);
//!
//! // The recycled vector comes back empty.
//! let scratch = arrays::get::<u32>();
//! assert!(scratch.is_empty());
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use foldhash::fast::RandomState;

use crate::{Generator, Template};

/// Creates a generator that recycles `Vec<E>`.
///
/// Released vectors are truncated to zero length, keeping their capacity. Taking a vector from
/// an empty generator allocates a new one, so [`Generator::get()`] always returns `Some`.
///
/// # Example
///
/// ```rust
/// use recycle_pool::array_generator;
///
/// let mut vectors = array_generator::<String>();
///
/// let mut names = vectors.get().unwrap();
/// names.push("Ferris".to_string());
///
/// vectors.release(names);
/// assert_eq!(vectors.count(), 1);
/// assert!(vectors.get().unwrap().is_empty());
/// ```
#[must_use]
pub fn array_generator<E: 'static>() -> Generator<Vec<E>> {
    Generator::builder(Template::constructor(Vec::new))
        .clear(Vec::clear)
        .regenerate(1)
        .build()
}

thread_local! {
    static ARRAY_GENERATORS: RefCell<HashMap<TypeId, Box<dyn Any>, RandomState>> =
        RefCell::new(HashMap::default());
}

/// Runs `f` with exclusive access to the current thread's shared generator for `Vec<E>`.
///
/// The generator is created on first use.
///
/// # Panics
///
/// Panics if called from within `f`, for any element type. The shared generators may only be
/// borrowed one at a time.
pub fn with<E: 'static, R>(f: impl FnOnce(&mut Generator<Vec<E>>) -> R) -> R {
    ARRAY_GENERATORS.with(|generators| {
        let mut generators = generators
            .try_borrow_mut()
            .expect("shared array generators must not be accessed reentrantly");

        let generator = generators
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(array_generator::<E>()) as Box<dyn Any>)
            .downcast_mut::<Generator<Vec<E>>>()
            .expect("entries are keyed by the type id of the element type they hold");

        f(generator)
    })
}

/// Takes an empty vector from the current thread's shared generator.
#[must_use]
pub fn get<E: 'static>() -> Vec<E> {
    with(|generator: &mut Generator<Vec<E>>| generator.get()).unwrap_or_default()
}

/// Returns a vector to the current thread's shared generator. The vector is cleared first.
pub fn release<E: 'static>(vec: Vec<E>) {
    with(|generator: &mut Generator<Vec<E>>| generator.release(vec));
}

/// The number of vectors stored in the current thread's shared generator for `Vec<E>`.
#[must_use]
pub fn count<E: 'static>() -> usize {
    with(|generator: &mut Generator<Vec<E>>| generator.count())
}
