use std::fmt;

use tracing::{debug, trace};

use crate::{
    CreationMode, CreationStrategy, DeleteAmount, GeneratorBuilder, Options, Pool, Template,
};

/// Recycles items of type `T`, manufacturing fresh ones when needed.
///
/// A generator layers an item lifecycle over a [`Pool`]:
///
/// * Fresh items are manufactured either by calling a constructor or by cloning a template
///   (see [`Template`]). The choice is made once, at construction time.
/// * Items handed out by [`get_with()`][1] pass through the optional init hook, which receives
///   the caller's arguments of type `A`.
/// * Items returned via [`release()`][2] pass through the optional clear hook before they are
///   stored for reuse.
/// * If asked for an item while empty, the generator can replenish itself according to its
///   [regenerate policy][crate::Regenerate].
///
/// Items are stored and handed out in last-in-first-out order.
///
/// # Thread safety
///
/// The generator owns boxed hooks that are neither [`Send`] nor [`Sync`], so it is confined to
/// the thread that created it.
///
/// # Example
///
/// ```rust
/// use recycle_pool::{Generator, Template};
///
/// let mut buffers = Generator::builder(Template::constructor(|| Vec::<u8>::with_capacity(1024)))
///     .count(4)
///     .clear(Vec::clear)
///     .regenerate(2)
///     .build();
///
/// let mut buffer = buffers.get().unwrap();
/// buffer.extend_from_slice(b"hello");
/// assert_eq!(buffers.count(), 3);
///
/// buffers.release(buffer);
/// assert_eq!(buffers.count(), 4);
///
/// // The clear hook emptied the buffer but it kept its capacity.
/// let buffer = buffers.get().unwrap();
/// assert!(buffer.is_empty());
/// assert!(buffer.capacity() >= 1024);
/// ```
///
/// [1]: Self::get_with
/// [2]: Self::release
pub struct Generator<T, A = ()> {
    pool: Pool<T>,

    strategy: CreationStrategy<T>,

    /// The options the generator was built with, minus the seed data which is consumed
    /// during construction.
    options: Options<T, A>,
}

impl<T> Generator<T> {
    /// Starts building a new [`Generator`] that manufactures items according to `template`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{Generator, Template};
    ///
    /// let generator = Generator::builder(Template::value([0_u32; 8]))
    ///     .count(16)
    ///     .build();
    ///
    /// assert_eq!(generator.count(), 16);
    /// ```
    pub fn builder(template: Template<T>) -> GeneratorBuilder<T> {
        GeneratorBuilder::new(template)
    }

    /// Takes an item out of the generator.
    ///
    /// Equivalent to [`get_with(())`][1] for generators whose init hook takes no arguments.
    ///
    /// [1]: Self::get_with
    #[must_use]
    pub fn get(&mut self) -> Option<T> {
        self.get_with(())
    }
}

impl<T, A> Generator<T, A> {
    pub(crate) fn new_inner(template: Template<T>, mut options: Options<T, A>) -> Self {
        let data = options.take_data();
        let seeded = data.len();
        let created = options.count.unwrap_or(0).saturating_sub(seeded);

        let mut generator = Self {
            pool: Pool::with_capacity(seeded.saturating_add(created)),
            strategy: template.into_strategy(),
            options,
        };

        for item in data {
            generator.release(item);
        }

        generator.create(created);

        debug!(
            seeded,
            created,
            mode = ?generator.mode(),
            "populated generator"
        );

        generator
    }

    /// Takes the most recently released item out of the generator and prepares it for use.
    ///
    /// If the generator is empty and has a regenerate policy, it first manufactures as many
    /// fresh items as the policy asks for and then tries again, once. One of the fresh items is
    /// handed out by this call, so afterwards the generator holds one item fewer than the
    /// policy produced.
    ///
    /// If an init hook is configured, it is invoked on the item with `args` before the item
    /// is returned.
    ///
    /// Returns `None` if no item is available.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{Options, Template, generate};
    ///
    /// let mut names = generate(
    ///     Template::constructor(String::new),
    ///     Options::new()
    ///         .regenerate(3)
    ///         .init(|name: &mut String, value: &'static str| name.push_str(value)),
    /// );
    ///
    /// assert_eq!(names.count(), 0);
    ///
    /// let name = names.get_with("Ferris").unwrap();
    /// assert_eq!(name, "Ferris");
    /// assert_eq!(names.count(), 2);
    /// ```
    #[must_use]
    pub fn get_with(&mut self, args: A) -> Option<T> {
        let mut item = match self.pool.get() {
            Some(item) => item,
            None => {
                self.regenerate();
                self.pool.get()?
            }
        };

        if let Some(init) = self.options.init.as_mut() {
            init(&mut item, args);
        }

        Some(item)
    }

    /// Returns an item to the generator for reuse.
    ///
    /// If a clear hook is configured, it is invoked on the item first.
    pub fn release(&mut self, mut item: T) {
        if let Some(clear) = self.options.clear.as_mut() {
            clear(&mut item);
        }

        self.pool.release(item);
    }

    /// Manufactures `count` fresh items and stores them for reuse.
    ///
    /// Fresh items are assumed to be in their neutral state, so the clear hook is not invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{Generator, Template};
    ///
    /// let mut generator = Generator::builder(Template::value(0_u64)).count(2).build();
    ///
    /// generator.create(5);
    /// assert_eq!(generator.count(), 7);
    /// ```
    pub fn create(&mut self, count: usize) {
        let strategy = &mut self.strategy;
        let clone_override = &mut self.options.clone;

        self.pool
            .extend((0..count).map(|_| strategy.create(clone_override.as_mut())));
    }

    /// Drops stored items without invoking any hooks.
    ///
    /// `amount` is either an absolute number of items or, for floating point values strictly
    /// between zero and one, a fraction of the items currently stored. See [`DeleteAmount`]
    /// for the exact conversion rules. Deleting more items than are stored empties the
    /// generator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{Generator, Template};
    ///
    /// let mut generator = Generator::builder(Template::value(0_u8)).count(10).build();
    ///
    /// generator.delete(0.2);
    /// assert_eq!(generator.count(), 8);
    ///
    /// generator.delete(3_usize);
    /// assert_eq!(generator.count(), 5);
    ///
    /// generator.delete(100_usize);
    /// assert_eq!(generator.count(), 0);
    /// ```
    pub fn delete(&mut self, amount: impl Into<DeleteAmount>) {
        let removed = amount.into().resolve(self.pool.count());

        self.pool.evict(removed);
    }

    /// Another name for [`delete()`][1].
    ///
    /// [1]: Self::delete
    pub fn offload(&mut self, amount: impl Into<DeleteAmount>) {
        self.delete(amount);
    }

    /// The number of items currently stored in the generator.
    #[must_use]
    pub fn count(&self) -> usize {
        self.pool.count()
    }

    /// Whether the generator currently stores no items.
    ///
    /// An empty generator may still be able to hand out items via its regenerate policy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// How the generator manufactures fresh items.
    #[must_use]
    pub fn mode(&self) -> CreationMode {
        self.strategy.mode()
    }

    /// Whether fresh items come from calling a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.mode() == CreationMode::Constructor
    }

    /// Whether fresh items are copies of a template.
    #[must_use]
    pub fn is_clone(&self) -> bool {
        self.mode() == CreationMode::Clone
    }

    /// The template fresh items are copied from. `None` in constructor mode.
    #[must_use]
    pub fn template(&self) -> Option<&T> {
        self.strategy.template()
    }

    /// The options the generator was built with.
    ///
    /// The seed data has been consumed, so [`Options::seed_data()`] is always `None` here.
    #[must_use]
    pub fn options(&self) -> &Options<T, A> {
        &self.options
    }

    /// Read-only access to the pool that stores the items.
    #[must_use]
    pub fn pool(&self) -> &Pool<T> {
        &self.pool
    }

    /// Releases storage capacity that is not used by any stored item.
    #[cfg_attr(test, mutants::skip)] // Capacity after shrinking is allocator-defined.
    pub fn shrink_to_fit(&mut self) {
        self.pool.shrink_to_fit();
    }

    fn regenerate(&mut self) {
        let Some(policy) = self.options.regenerate.as_mut() else {
            trace!("generator is empty and has no regenerate policy");
            return;
        };

        let count = policy.resolve();

        debug!(count, "regenerating empty generator");

        self.create(count);
    }
}

impl<T: fmt::Debug, A> fmt::Debug for Generator<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("count", &self.count())
            .field("strategy", &self.strategy)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
