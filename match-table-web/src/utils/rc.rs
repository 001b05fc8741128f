use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::rc::Rc as RcInner;

/// A reference-counting pointer to `T` with an efficient [`PartialEq`] implementation.
///
/// Two `Rc`s are equal if they point to the same allocation. This makes it possible to pass
/// values without a `PartialEq` impl, like trait objects, as component properties.
#[repr(transparent)]
pub struct Rc<T>(RcInner<T>)
where
    T: ?Sized;

impl<T> Rc<T> {
    /// Creates a new `Rc`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self(RcInner::new(value))
    }
}

impl<T> Rc<T>
where
    T: ?Sized,
{
    /// Returns `true` if both `Rc`s point to the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Rc<T>, other: &Rc<T>) -> bool {
        RcInner::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Clone for Rc<T>
where
    T: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Deref for Rc<T>
where
    T: ?Sized,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl<T> PartialEq for Rc<T>
where
    T: ?Sized,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T> Eq for Rc<T> where T: ?Sized {}

impl<T> From<RcInner<T>> for Rc<T>
where
    T: ?Sized,
{
    #[inline]
    fn from(rc: RcInner<T>) -> Self {
        Self(rc)
    }
}

impl<T> Debug for Rc<T>
where
    T: ?Sized,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Rc").field(&RcInner::as_ptr(&self.0)).finish()
    }
}
