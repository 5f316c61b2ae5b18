use std::fmt;

use crate::CloneFn;

/// Prepares an item handed out by [`Generator::get_with()`][crate::Generator::get_with].
pub(crate) type InitFn<T, A> = Box<dyn FnMut(&mut T, A)>;

/// Resets an item passed to [`Generator::release()`][crate::Generator::release].
pub(crate) type ClearFn<T> = Box<dyn FnMut(&mut T)>;

/// Configuration for a [`Generator`][crate::Generator].
///
/// Every setting is optional. An `Options` with nothing set produces an empty generator that
/// only manufactures items when asked to via [`create()`][1].
///
/// After the generator is constructed, it exposes the options it was built with through
/// [`Generator::options()`][2]. The seed data is consumed during construction, so that copy
/// never holds any [`data`][3].
///
/// # Example
///
/// ```rust
/// use recycle_pool::{Options, Template, generate};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let options = Options::new()
///     .count(10)
///     .init(|point: &mut Point, (x, y): (i32, i32)| {
///         point.x = x;
///         point.y = y;
///     })
///     .clear(|point| *point = Point::default());
///
/// let mut points = generate(Template::constructor(Point::default), options);
/// assert_eq!(points.count(), 10);
///
/// let point = points.get_with((1, 2)).unwrap();
/// assert_eq!((point.x, point.y), (1, 2));
/// assert_eq!(points.count(), 9);
/// ```
///
/// [1]: crate::Generator::create
/// [2]: crate::Generator::options
/// [3]: Self::data
#[must_use]
pub struct Options<T, A = ()> {
    pub(crate) count: Option<usize>,
    pub(crate) data: Option<Vec<T>>,
    pub(crate) init: Option<InitFn<T, A>>,
    pub(crate) clear: Option<ClearFn<T>>,
    pub(crate) clone: Option<CloneFn<T>>,
    pub(crate) regenerate: Option<Regenerate>,
}

impl<T> Options<T> {
    /// Creates a new set of options with nothing configured.
    ///
    /// Until an [init hook][1] is set, items are handed out without arguments.
    ///
    /// [1]: Self::init
    pub fn new() -> Self {
        Self {
            count: None,
            data: None,
            init: None,
            clear: None,
            clone: None,
            regenerate: None,
        }
    }
}

impl<T, A> Options<T, A> {

    /// Sets the number of items the generator holds right after construction.
    ///
    /// Items supplied via [`data()`][1] count towards this target. Only the shortfall is
    /// manufactured.
    ///
    /// [1]: Self::data
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Seeds the generator with existing items.
    ///
    /// Each item is released into the generator during construction. If a
    /// [clear hook][1] is configured, it is applied to every seed item first.
    ///
    /// [1]: Self::clear
    pub fn data<I>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.data = Some(data.into_iter().collect());
        self
    }

    /// Sets the hook that fills in an item every time the generator hands one out.
    ///
    /// The hook receives the item and the arguments passed to
    /// [`Generator::get_with()`][crate::Generator::get_with]. The type of those arguments
    /// becomes the generator's argument type, replacing any previously set init hook.
    pub fn init<B, F>(self, init: F) -> Options<T, B>
    where
        F: FnMut(&mut T, B) + 'static,
    {
        Options {
            count: self.count,
            data: self.data,
            init: Some(Box::new(init)),
            clear: self.clear,
            clone: self.clone,
            regenerate: self.regenerate,
        }
    }

    /// Sets the hook that resets an item every time it is released into the generator.
    pub fn clear<F>(mut self, clear: F) -> Self
    where
        F: FnMut(&mut T) + 'static,
    {
        self.clear = Some(Box::new(clear));
        self
    }

    /// Replaces the function used to copy the template in clone mode.
    ///
    /// Ignored in constructor mode.
    pub fn clone_with<F>(mut self, clone: F) -> Self
    where
        F: FnMut(&T) -> T + 'static,
    {
        self.clone = Some(Box::new(clone));
        self
    }

    /// When the generator is asked for an item while empty, it first manufactures
    /// `count` fresh items.
    pub fn regenerate(mut self, count: usize) -> Self {
        self.regenerate = Some(Regenerate::Fixed(count));
        self
    }

    /// When the generator is asked for an item while empty, it first manufactures as many
    /// fresh items as `policy` returns.
    ///
    /// The policy is consulted anew every time the generator runs dry.
    pub fn regenerate_with<F>(mut self, policy: F) -> Self
    where
        F: FnMut() -> usize + 'static,
    {
        self.regenerate = Some(Regenerate::Dynamic(Box::new(policy)));
        self
    }

    /// The number of items the generator was asked to hold after construction, if set.
    #[must_use]
    pub fn target_count(&self) -> Option<usize> {
        self.count
    }

    /// The seed items that have not been consumed yet.
    ///
    /// Always `None` for the options exposed by a constructed generator.
    #[must_use]
    pub fn seed_data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    /// Whether an init hook is configured.
    #[must_use]
    pub fn has_init(&self) -> bool {
        self.init.is_some()
    }

    /// Whether a clear hook is configured.
    #[must_use]
    pub fn has_clear(&self) -> bool {
        self.clear.is_some()
    }

    /// Whether a clone override is configured.
    #[must_use]
    pub fn has_clone(&self) -> bool {
        self.clone.is_some()
    }

    /// The regenerate policy, if any.
    #[must_use]
    pub fn regenerate_policy(&self) -> Option<&Regenerate> {
        self.regenerate.as_ref()
    }

    /// Takes the seed data out, leaving `None` behind.
    pub(crate) fn take_data(&mut self) -> Vec<T> {
        self.data.take().unwrap_or_default()
    }
}

impl<T> Default for Options<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for Options<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("count", &self.count)
            .field("data_len", &self.data.as_ref().map(Vec::len))
            .field("init", &self.has_init())
            .field("clear", &self.has_clear())
            .field("clone", &self.has_clone())
            .field("regenerate", &self.regenerate)
            .finish()
    }
}

/// How many fresh items a [`Generator`][crate::Generator] manufactures when it is asked for an
/// item while empty.
#[non_exhaustive]
pub enum Regenerate {
    /// Always manufacture this many items.
    Fixed(usize),

    /// Ask the function how many items to manufacture.
    Dynamic(Box<dyn FnMut() -> usize>),
}

impl Regenerate {
    /// Resolves the policy into the number of items to manufacture now.
    pub(crate) fn resolve(&mut self) -> usize {
        match self {
            Self::Fixed(count) => *count,
            Self::Dynamic(policy) => policy(),
        }
    }
}

impl fmt::Debug for Regenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => f.debug_tuple("Fixed").field(count).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").finish_non_exhaustive(),
        }
    }
}
