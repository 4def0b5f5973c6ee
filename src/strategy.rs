use core::fmt;
use std::hint::black_box;

use crate::{
    Announce, Error, Name,
    closure::ClosureDog,
    composition::{DogWithClosure, DogWithComposition},
    direct::{BoundDog, Dog},
    macros::{impl_default, strategies},
};

strategies! {
    Closure => "closure", "Closure", ClosureDog;
    Composition => "composition", "Struct with composition", DogWithComposition;
    Mixed => "mixed", "Struct + Closure", DogWithClosure;
    Direct => "direct", "Good old structs, who needs composition", Dog;
    Bound => "bound", "Good old structs, but we gotta bind", BoundDog;
}

impl_default!(ClosureDog, DogWithComposition, DogWithClosure, BoundDog);

impl Strategy {
    /// Builds the name table for one op: one name per iteration, named after its index.
    pub fn names(iterations: usize) -> Vec<Name> {
        (0..iterations).map(Name::from).collect()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
