//! Sealing helpers: traits that declare `private_decl!` can only be
//! implemented inside this crate, which keeps the dimension and fixed shape
//! traits free to grow.

/// Public but unnameable from outside the crate.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// Sealed: this method makes the trait impossible to implement
        /// outside the crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker
        {
            crate::private::PrivateMarker
        }
    };
}
