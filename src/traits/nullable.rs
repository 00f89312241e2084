use std::rc::Rc;
use std::sync::Arc;

/// Types that have a null-equivalent value.
///
/// Used by the `is_null`/`is_non_null` checks of both condition builders.
/// Wrappers delegate to what they wrap, so `&Option<T>` and
/// `Box<Option<T>>` are null exactly when the inner option is `None`.
///
/// # Examples
///
/// ```
/// use guard_rail::traits::Nullable;
///
/// assert!(None::<i32>.is_null());
/// assert!(Some(1).is_non_null());
/// assert!((&None::<i32>).is_null());
/// assert!(std::ptr::null::<u8>().is_null());
/// ```
pub trait Nullable {
    fn is_null(&self) -> bool;

    #[inline]
    fn is_non_null(&self) -> bool {
        !self.is_null()
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}
