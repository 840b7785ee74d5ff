//! Unset-value detection for option fields.
//!
//! Option sets carry no explicit presence flags; a field is "unset" when it
//! holds its type's zero/empty value. Merging and request synthesis both key
//! off this predicate, implemented per concrete type rather than through
//! runtime inspection.

use chrono::Duration;
use std::collections::HashMap;

/// Predicate for a value being in its unset (zero/empty) state
pub trait IsUnset {
    fn is_unset(&self) -> bool;
}

macro_rules! unset_when_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl IsUnset for $t {
                fn is_unset(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

unset_when_zero!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl IsUnset for bool {
    fn is_unset(&self) -> bool {
        !*self
    }
}

impl IsUnset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl IsUnset for str {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl IsUnset for Duration {
    fn is_unset(&self) -> bool {
        self.is_zero()
    }
}

/// An absent reference is unset, and so is a present reference to an unset
/// payload. The second half is deliberate: `Some("")` carries no information
/// and is treated the same as `None` everywhere options are resolved.
impl<T: IsUnset> IsUnset for Option<T> {
    fn is_unset(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_unset(),
        }
    }
}

impl<T> IsUnset for Vec<T> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsUnset for HashMap<K, V> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
#[path = "zero_tests.rs"]
mod tests;
