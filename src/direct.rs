//! Dogs that keep their name inline.

use std::rc::Rc;

use crate::{Announce, Name, macros::impl_debug};

/// As simple as it gets: the name lives on the dog and the bark is the shared trait impl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dog {
    name: Name,
}

impl Dog {
    /// Builds a dog, falling back to [`DEFAULT_NAME`](crate::DEFAULT_NAME).
    pub fn new(name: impl Into<Option<Name>>) -> Self {
        Self {
            name: Name::or_default(name),
        }
    }

    /// Renames this dog only.
    pub fn set_name(&mut self, name: impl Into<Name>) {
        self.name = name.into();
    }
}

impl Announce for Dog {
    #[inline]
    fn announce(&self) -> Name {
        self.name.clone()
    }
}

/// A bark callable tied to the dog it was made from.
///
/// Owns a strong reference to that dog, so it keeps answering after the [`BoundDog`] is gone, and
/// whoever ends up calling it.
pub type BoundBark = Rc<dyn Fn() -> Name>;

/// A [`Dog`] whose bark is bound to it at construction.
#[derive(Clone)]
pub struct BoundDog {
    dog: Rc<Dog>,
    bark: BoundBark,
}

impl_debug!(BoundDog, dog);

impl BoundDog {
    /// Builds the dog and binds its bark.
    pub fn new(name: impl Into<Option<Name>>) -> Self {
        let dog = Rc::new(Dog::new(name));
        let this = Rc::clone(&dog);
        Self {
            dog,
            bark: Rc::new(move || this.announce()),
        }
    }

    /// Returns the bound bark, usable without the dog.
    pub fn bark_fn(&self) -> BoundBark {
        Rc::clone(&self.bark)
    }

    /// The dog the bark is bound to.
    pub fn dog(&self) -> &Dog {
        &self.dog
    }
}

impl Announce for BoundDog {
    #[inline]
    fn announce(&self) -> Name {
        (self.bark)()
    }
}
