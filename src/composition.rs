//! Dogs that own a helper and forward their bark to it.

use crate::{Announce, Name, closure::Barkable};

/// A plain struct helper that knows how to bark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Barker {
    name: Name,
}

impl Barker {
    /// Builds a barker, falling back to [`DEFAULT_NAME`](crate::DEFAULT_NAME).
    pub fn new(name: impl Into<Option<Name>>) -> Self {
        Self {
            name: Name::or_default(name),
        }
    }
}

impl Announce for Barker {
    #[inline]
    fn announce(&self) -> Name {
        self.name.clone()
    }
}

/// A dog that has-a barker and delegates to it.
///
/// The barker can be anything implementing [`Announce`]: a struct ([`DogWithComposition`]), a
/// closure record ([`DogWithClosure`]), or a `Box<dyn Announce>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegating<B> {
    name: Name,
    barker: B,
}

/// Delegates to a [`Barker`].
pub type DogWithComposition = Delegating<Barker>;

/// Delegates to a closure-based [`Barkable`].
pub type DogWithClosure = Delegating<Barkable>;

impl<B: Announce> Delegating<B> {
    /// Pairs a name with an already built barker.
    pub fn with_barker(name: impl Into<Option<Name>>, barker: B) -> Self {
        Self {
            name: Name::or_default(name),
            barker,
        }
    }

    /// Name stored on the dog itself, independent of its barker.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The owned helper.
    pub fn barker(&self) -> &B {
        &self.barker
    }
}

impl Delegating<Barker> {
    /// Builds the dog and its [`Barker`] from the same name.
    pub fn new(name: impl Into<Option<Name>>) -> Self {
        let name = Name::or_default(name);
        Self {
            barker: Barker::new(name.clone()),
            name,
        }
    }
}

impl Delegating<Barkable> {
    /// Builds the dog and its closure-based [`Barkable`] from the same name.
    pub fn new(name: impl Into<Option<Name>>) -> Self {
        let name = Name::or_default(name);
        Self {
            barker: Barkable::with_name(name.clone()),
            name,
        }
    }
}

impl<B: Announce> Announce for Delegating<B> {
    #[inline]
    fn announce(&self) -> Name {
        self.barker.announce()
    }
}
