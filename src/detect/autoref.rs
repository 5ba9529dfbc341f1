//! The two compile-time probes behind [`CapabilityFacts`](crate::CapabilityFacts).
//!
//! `Detect::<Ty>::IS_CLONE` answers "is `Ty` duplicable" and
//! `Detect::<Ty>::IS_UNPIN` answers "is `Ty` relocatable". Each name exists
//! twice on `Detect<Ty>`:
//!
//! ```text
//! DuplicableFallback::IS_CLONE   = false   for every Ty
//! Detect::<Ty>::IS_CLONE         = true    only where Ty: Clone
//! ```
//!
//! Path resolution prefers the inherent const, so the trait default is only
//! reached when the bound fails. The fallback trait has to be in scope at the
//! read site; the derive and `classify!` import it for you.
//!
//! The bound is checked where the path is written. Written inside
//! `fn f<T>()` with no `T: Clone` bound, `IS_CLONE` reads `false` even for
//! `T = String`; generic code should take `T: Subject` and call
//! [`classify`](crate::classify) instead.

use core::marker::PhantomData;

/// Carrier for the probe consts. Never constructed.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// `impl_detect!(fact: Trait => CONST)` declares `<Fact>Fallback` with a
/// `false` default and the `true` inherent const bounded on `Trait`.
macro_rules! impl_detect {
    ($fact:ident : $Trait:path => $Const:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$fact:camel Fallback>] {
                const $Const: bool = false;
            }
            impl<T: ?Sized> [<$fact:camel Fallback>] for Detect<T> {}

            impl<T: $Trait> Detect<T> {
                pub const $Const: bool = true;
            }
        }
    };
}

impl_detect!(duplicable: Clone => IS_CLONE);
impl_detect!(relocatable: Unpin => IS_UNPIN);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::{Detect, DuplicableFallback, RelocatableFallback};

    #[test]
    fn test_detect_std_traits() {
        assert!(Detect::<String>::IS_CLONE);
        assert!(Detect::<String>::IS_UNPIN);
        assert!(!Detect::<core::marker::PhantomPinned>::IS_UNPIN);
        assert!(!Detect::<std::sync::Mutex<u8>>::IS_CLONE);
    }
}
