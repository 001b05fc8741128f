pub mod client;

pub use client::ClientProvider;

use yew::{Component, Context};

pub trait Provider<T> {
    /// Takes the context `T` from the closest provider above the component.
    ///
    /// # Panics
    ///
    /// Panics if the component is not a child of the provider.
    fn get<C>(ctx: &Context<C>) -> T
    where
        C: Component;
}
