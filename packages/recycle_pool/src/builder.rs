use std::fmt;

use crate::{Generator, Options, Template};

/// Builder for creating an instance of [`Generator`].
///
/// Obtained from [`Generator::builder()`]. Every setting mirrors the equivalent setting on
/// [`Options`]; the free function [`generate()`][crate::generate] is the non-builder
/// equivalent.
///
/// # Examples
///
/// ```
/// use recycle_pool::{Generator, Template};
///
/// let generator = Generator::builder(Template::constructor(String::new))
///     .count(8)
///     .clear(String::clear)
///     .regenerate_with(|| 4)
///     .build();
///
/// assert_eq!(generator.count(), 8);
/// ```
#[must_use]
pub struct GeneratorBuilder<T, A = ()> {
    template: Template<T>,
    options: Options<T, A>,
}

impl<T> GeneratorBuilder<T> {
    pub(crate) fn new(template: Template<T>) -> Self {
        Self {
            template,
            options: Options::new(),
        }
    }
}

impl<T, A> GeneratorBuilder<T, A> {
    /// Sets the number of items the generator holds right after construction.
    ///
    /// See [`Options::count()`].
    pub fn count(self, count: usize) -> Self {
        Self {
            template: self.template,
            options: self.options.count(count),
        }
    }

    /// Seeds the generator with existing items.
    ///
    /// See [`Options::data()`].
    pub fn data<I>(self, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            template: self.template,
            options: self.options.data(data),
        }
    }

    /// Sets the hook that fills in an item every time the generator hands one out.
    ///
    /// See [`Options::init()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::{Generator, Template};
    ///
    /// let mut generator = Generator::builder(Template::value(0_u64))
    ///     .count(1)
    ///     .init(|item: &mut u64, value: u64| *item = value)
    ///     .build();
    ///
    /// assert_eq!(generator.get_with(42), Some(42));
    /// ```
    pub fn init<B, F>(self, init: F) -> GeneratorBuilder<T, B>
    where
        F: FnMut(&mut T, B) + 'static,
    {
        GeneratorBuilder {
            template: self.template,
            options: self.options.init(init),
        }
    }

    /// Sets the hook that resets an item every time it is released into the generator.
    ///
    /// See [`Options::clear()`].
    pub fn clear<F>(self, clear: F) -> Self
    where
        F: FnMut(&mut T) + 'static,
    {
        Self {
            template: self.template,
            options: self.options.clear(clear),
        }
    }

    /// Replaces the function used to copy the template in clone mode.
    ///
    /// See [`Options::clone_with()`].
    pub fn clone_with<F>(self, clone: F) -> Self
    where
        F: FnMut(&T) -> T + 'static,
    {
        Self {
            template: self.template,
            options: self.options.clone_with(clone),
        }
    }

    /// Sets a fixed regenerate policy.
    ///
    /// See [`Options::regenerate()`].
    pub fn regenerate(self, count: usize) -> Self {
        Self {
            template: self.template,
            options: self.options.regenerate(count),
        }
    }

    /// Sets a dynamic regenerate policy.
    ///
    /// See [`Options::regenerate_with()`].
    pub fn regenerate_with<F>(self, policy: F) -> Self
    where
        F: FnMut() -> usize + 'static,
    {
        Self {
            template: self.template,
            options: self.options.regenerate_with(policy),
        }
    }

    /// Builds the generator, populating it according to the configured options.
    #[must_use]
    pub fn build(self) -> Generator<T, A> {
        Generator::new_inner(self.template, self.options)
    }
}

impl<T: fmt::Debug, A> fmt::Debug for GeneratorBuilder<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorBuilder")
            .field("template", &self.template)
            .field("options", &self.options)
            .finish()
    }
}
