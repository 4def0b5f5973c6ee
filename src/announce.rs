use std::rc::Rc;

use crate::Name;

/// The single capability every dog flavour shares: saying its name.
///
/// Kept narrow on purpose so that closure-based and struct-based helpers can be used
/// interchangeably behind a delegating owner.
pub trait Announce {
    /// Returns the name the entity was built with.
    fn announce(&self) -> Name;
}

impl<A: Announce + ?Sized> Announce for &A {
    #[inline]
    fn announce(&self) -> Name {
        (**self).announce()
    }
}

impl<A: Announce + ?Sized> Announce for Box<A> {
    #[inline]
    fn announce(&self) -> Name {
        (**self).announce()
    }
}

impl<A: Announce + ?Sized> Announce for Rc<A> {
    #[inline]
    fn announce(&self) -> Name {
        (**self).announce()
    }
}
