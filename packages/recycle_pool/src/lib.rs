#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Recycling of transient objects without repeatedly constructing and dropping them.
//!
//! This crate provides two layers:
//!
//! * [`Pool`] is a plain last-in-first-out free list. Items you release into it are handed
//!   back, most recent first, by [`Pool::get()`].
//! * [`Generator`] owns a [`Pool`] and manages the lifecycle of the items in it. It knows how to
//!   manufacture fresh items (by calling a constructor or by cloning a template), prepares
//!   items as they are handed out, resets them as they are released, and can replenish itself
//!   automatically when it runs dry.
//!
//! The [`arrays`] module offers a ready-made generator for `Vec<E>`, shared per thread.
//!
//! # Key Features
//!
//! - **Two creation strategies**: constructor mode via [`Template::constructor()`] and clone
//!   mode via [`Template::value()`] or [`Template::prototype()`]
//! - **Lifecycle hooks**: an init hook receives caller arguments on every get, a clear hook
//!   resets items on every release
//! - **Eager population**: a target item count, seed data, or both
//! - **Lazy population**: a fixed or dynamic [`Regenerate`] policy for empty generators
//! - **Shrinking**: [`Generator::delete()`] accepts an absolute count or a fraction of the
//!   stored items
//!
//! # Thread safety
//!
//! Generators hold boxed hooks and are confined to one thread. [`Pool`] is thread-mobile
//! whenever its items are.
//!
//! # Example
//!
//! ```rust
//! use recycle_pool::{Options, Template, generate};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Particle {
//!     position: (f32, f32),
//!     alive: bool,
//! }
//!
//! let mut particles = generate(
//!     Template::constructor(Particle::default),
//!     Options::new()
//!         .count(100)
//!         .regenerate(10)
//!         .init(|particle: &mut Particle, position: (f32, f32)| {
//!             particle.position = position;
//!             particle.alive = true;
//!         })
//!         .clear(|particle| *particle = Particle::default()),
//! );
//!
//! let particle = particles.get_with((1.0, 2.0)).unwrap();
//! assert!(particle.alive);
//! assert_eq!(particles.count(), 99);
//!
//! particles.release(particle);
//! assert_eq!(particles.count(), 100);
//!
//! // Drop a quarter of the idle particles.
//! particles.delete(0.25);
//! assert_eq!(particles.count(), 75);
//! ```

pub mod arrays;
mod builder;
mod delete_amount;
mod error;
mod generator;
mod options;
mod pool;
mod template;

pub use arrays::array_generator;
pub use builder::GeneratorBuilder;
pub use delete_amount::{DeleteAmount, Fraction};
pub use error::{Error, Result};
pub use generator::Generator;
pub use options::{Options, Regenerate};
pub use pool::Pool;
pub(crate) use template::{CloneFn, CreationStrategy};
pub use template::{CreationMode, Template};

/// Creates a [`Generator`] that manufactures items according to `template`, configured and
/// populated according to `options`.
///
/// This is the non-builder equivalent of [`Generator::builder()`].
///
/// # Example
///
/// ```rust
/// use recycle_pool::{Options, Template, generate};
///
/// let generator = generate(Template::value(0_u32), Options::new().data([1, 2, 3]).count(5));
///
/// assert_eq!(generator.count(), 5);
/// assert!(generator.options().seed_data().is_none());
/// ```
pub fn generate<T, A>(template: Template<T>, options: Options<T, A>) -> Generator<T, A> {
    Generator::new_inner(template, options)
}
