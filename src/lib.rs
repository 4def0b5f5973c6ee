#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(missing_docs)]

//! How much does it cost to build a dog and make it bark?
//!
//! Five ways of building the same entity, all answering [`Announce::announce`] with the name they
//! were given (or [`DEFAULT_NAME`]):
//!
//! - [`ClosureDog`]: closures over captured state;
//! - [`DogWithComposition`]: a struct owning a struct helper;
//! - [`DogWithClosure`]: a struct owning a closure helper;
//! - [`Dog`]: a plain struct;
//! - [`BoundDog`]: a plain struct with a bark callable bound to it.
//!
//! [`harness::Suite`] times them against each other; see [`Strategy`] for the labels.
//!
//! ```
//! use bark_bench::{Announce, Name, Strategy};
//!
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.construct(Name::from("Rex")).announce(), "Rex");
//! }
//! ```

mod announce;
pub mod closure;
pub mod composition;
pub mod direct;
mod error;
pub mod harness;
mod macros;
mod name;
mod strategy;

pub use announce::Announce;
pub use closure::{ClosureDog, create_dog};
pub use composition::{DogWithClosure, DogWithComposition};
pub use direct::{BoundDog, Dog};
pub use error::{Error, Result};
pub use name::{DEFAULT_NAME, Name};
pub use strategy::Strategy;
