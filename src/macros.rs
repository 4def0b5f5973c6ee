// Boxed closures are not `Debug`, so types holding one print their name only.
macro_rules! impl_debug {
    ($name:ident $(, $field:ident)*) => {
        impl core::fmt::Debug for $name {
            #[cfg_attr(coverage_nightly, coverage(off))]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field))*
                    .finish_non_exhaustive()
            }
        }
    };
}
pub(crate) use impl_debug;

macro_rules! impl_default {
    ($($name:ty),* $(,)?) => {
        $(
            impl Default for $name {
                fn default() -> Self {
                    Self::new(None)
                }
            }
        )*
    };
}
pub(crate) use impl_default;

macro_rules! strategies {
    ($($variant:ident => $key:literal, $label:literal, $entity:ty;)*) => {
        /// One way of building a dog and making it bark.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Strategy {
            $(
                #[doc = concat!("`", stringify!($entity), "`, labelled \"", $label, "\".")]
                $variant,
            )*
        }

        impl Strategy {
            /// Every strategy, in report order.
            pub const ALL: [Strategy; [$(stringify!($variant)),*].len()] = [$(Strategy::$variant),*];

            /// Label printed by the runner.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Strategy::$variant => $label,)*
                }
            }

            /// Short key used on the command line.
            pub const fn key(self) -> &'static str {
                match self {
                    $(Strategy::$variant => $key,)*
                }
            }

            /// Builds one dog with this strategy, type erased.
            pub fn construct(self, name: impl Into<Option<Name>>) -> Box<dyn Announce> {
                match self {
                    $(Strategy::$variant => Box::new(<$entity>::new(name)),)*
                }
            }

            /// Runs one benchmark op: builds a dog for every name and makes it bark once.
            ///
            /// Each arm is monomorphized, so the only dynamic dispatch measured is the one the
            /// strategy itself performs.
            #[inline(never)]
            pub fn run_batch(self, names: &[Name]) {
                match self {
                    $(Strategy::$variant => {
                        for name in names {
                            let dog = <$entity>::new(black_box(name.clone()));
                            black_box(dog.announce());
                        }
                    })*
                }
            }
        }

        impl core::str::FromStr for Strategy {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Strategy::$variant),)*
                    _ => Err(Error::UnknownStrategy(s.to_owned())),
                }
            }
        }
    };
}
pub(crate) use strategies;
