//! Dogs made of closures over captured state.

use crate::{Announce, Name, macros::impl_debug};

type BarkFn = Box<dyn Fn() -> Name>;

/// State captured by a [`Barkable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogState {
    /// The dog's name.
    pub name: Name,
}

impl DogState {
    /// Builds the state, falling back to [`DEFAULT_NAME`](crate::DEFAULT_NAME).
    pub fn new(name: impl Into<Option<Name>>) -> Self {
        Self {
            name: Name::or_default(name),
        }
    }
}

/// A bark closure owning its state.
///
/// The state is moved into the closure, so nothing outside can reach it afterwards.
pub struct Barkable {
    bark: BarkFn,
}

impl_debug!(Barkable);

impl Barkable {
    /// Captures `state` in a new bark closure.
    pub fn new(state: DogState) -> Self {
        Self {
            bark: Box::new(move || state.name.clone()),
        }
    }

    /// Shorthand for building the state and the closure in one go.
    pub fn with_name(name: impl Into<Option<Name>>) -> Self {
        Self::new(DogState::new(name))
    }

    /// Gives up ownership of the bark closure.
    pub fn into_fn(self) -> Box<dyn Fn() -> Name> {
        self.bark
    }
}

impl Announce for Barkable {
    #[inline]
    fn announce(&self) -> Name {
        (self.bark)()
    }
}

/// A dog that is nothing but a record of closures.
pub struct ClosureDog {
    bark: BarkFn,
}

impl_debug!(ClosureDog);

impl ClosureDog {
    /// Same as [`create_dog`].
    pub fn new(name: impl Into<Option<Name>>) -> Self {
        create_dog(name)
    }
}

impl Announce for ClosureDog {
    #[inline]
    fn announce(&self) -> Name {
        (self.bark)()
    }
}

/// Builds a [`ClosureDog`] whose bark is taken over from a freshly built [`Barkable`].
pub fn create_dog(name: impl Into<Option<Name>>) -> ClosureDog {
    let barker = Barkable::new(DogState::new(name));
    ClosureDog {
        bark: barker.into_fn(),
    }
}
