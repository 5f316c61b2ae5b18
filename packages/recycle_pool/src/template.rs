use std::fmt;

/// Manufactures a fresh item in constructor mode.
pub(crate) type ConstructorFn<T> = Box<dyn FnMut() -> T>;

/// Manufactures a fresh item from a template in clone mode.
pub(crate) type CloneFn<T> = Box<dyn FnMut(&T) -> T>;

/// Describes how a [`Generator`][crate::Generator] manufactures fresh items.
///
/// The variant chosen here fixes the generator's [`CreationMode`] for its entire lifetime.
///
/// # Examples
///
/// Constructor mode, where every fresh item comes from calling a function:
///
/// ```rust
/// use recycle_pool::{CreationMode, Generator, Template};
///
/// let generator = Generator::builder(Template::constructor(String::new)).build();
/// assert_eq!(generator.mode(), CreationMode::Constructor);
/// ```
///
/// Clone mode, where every fresh item is a copy of a template value:
///
/// ```rust
/// use recycle_pool::{CreationMode, Generator, Template};
///
/// let generator = Generator::builder(Template::value(vec![0_u8; 4])).build();
/// assert_eq!(generator.mode(), CreationMode::Clone);
/// assert_eq!(generator.template(), Some(&vec![0_u8; 4]));
/// ```
pub struct Template<T> {
    strategy: CreationStrategy<T>,
}

impl<T> Template<T> {
    /// Fresh items are produced by calling `constructor` with no arguments.
    ///
    /// Any per-use fields are expected to be filled in by the generator's init hook.
    pub fn constructor<F>(constructor: F) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        Self {
            strategy: CreationStrategy::Constructor(Box::new(constructor)),
        }
    }

    /// Fresh items are produced by applying `clone` to `template`.
    ///
    /// Use this for types that do not implement [`Clone`] or when the default clone is not
    /// the right way to derive a fresh item from the template.
    pub fn prototype<F>(template: T, clone: F) -> Self
    where
        F: FnMut(&T) -> T + 'static,
    {
        Self {
            strategy: CreationStrategy::Clone {
                template,
                clone: Box::new(clone),
            },
        }
    }

    pub(crate) fn into_strategy(self) -> CreationStrategy<T> {
        self.strategy
    }
}

impl<T: Clone + 'static> Template<T> {
    /// Fresh items are produced by cloning `template`.
    pub fn value(template: T) -> Self {
        Self::prototype(template, T::clone)
    }
}

impl<T: fmt::Debug> fmt::Debug for Template<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("strategy", &self.strategy)
            .finish()
    }
}

/// Which creation strategy a [`Generator`][crate::Generator] uses for fresh items.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CreationMode {
    /// Fresh items come from calling a constructor function.
    Constructor,

    /// Fresh items are copies of a template value.
    Clone,
}

/// The creation strategy selected once at construction time.
pub(crate) enum CreationStrategy<T> {
    Constructor(ConstructorFn<T>),
    Clone { template: T, clone: CloneFn<T> },
}

impl<T> CreationStrategy<T> {
    pub(crate) fn mode(&self) -> CreationMode {
        match self {
            Self::Constructor(_) => CreationMode::Constructor,
            Self::Clone { .. } => CreationMode::Clone,
        }
    }

    pub(crate) fn template(&self) -> Option<&T> {
        match self {
            Self::Constructor(_) => None,
            Self::Clone { template, .. } => Some(template),
        }
    }

    /// Manufactures one fresh item. In clone mode, `clone_override` takes precedence over the
    /// clone function the template was created with.
    pub(crate) fn create(&mut self, clone_override: Option<&mut CloneFn<T>>) -> T {
        match self {
            Self::Constructor(constructor) => constructor(),
            Self::Clone { template, clone } => match clone_override {
                Some(clone_override) => clone_override(&*template),
                None => clone(&*template),
            },
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CreationStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor(_) => f.debug_tuple("Constructor").finish_non_exhaustive(),
            Self::Clone { template, .. } => f
                .debug_struct("Clone")
                .field("template", template)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn constructor_strategy_calls_constructor() {
        let mut next = 0;
        let mut strategy = Template::constructor(move || {
            next += 1;
            next
        })
        .into_strategy();

        assert_eq!(strategy.mode(), CreationMode::Constructor);
        assert_eq!(strategy.template(), None);
        assert_eq!(strategy.create(None), 1);
        assert_eq!(strategy.create(None), 2);
    }

    #[test]
    fn value_strategy_clones_template() {
        let mut strategy = Template::value(String::from("blank")).into_strategy();

        assert_eq!(strategy.mode(), CreationMode::Clone);
        assert_eq!(strategy.template().map(String::as_str), Some("blank"));
        assert_eq!(strategy.create(None), "blank");
    }

    #[test]
    fn prototype_strategy_uses_custom_clone() {
        let mut strategy = Template::prototype(10_u32, |t| t * 2).into_strategy();

        assert_eq!(strategy.create(None), 20);
        assert_eq!(strategy.template(), Some(&10));
    }

    #[test]
    fn clone_override_takes_precedence() {
        let mut strategy = Template::value(1_u32).into_strategy();
        let mut replacement: CloneFn<u32> = Box::new(|t| t + 100);

        assert_eq!(strategy.create(Some(&mut replacement)), 101);
        assert_eq!(strategy.create(None), 1);
    }

    #[test]
    fn clone_override_ignored_in_constructor_mode() {
        let mut strategy = Template::constructor(|| 5_u32).into_strategy();
        let mut replacement: CloneFn<u32> = Box::new(|_| 0);

        assert_eq!(strategy.create(Some(&mut replacement)), 5);
    }

    #[test]
    fn debug_shows_template() {
        let template = Template::value(3_u8);

        let rendered = format!("{template:?}");

        assert!(rendered.contains("Clone"));
        assert!(rendered.contains('3'));
    }
}
