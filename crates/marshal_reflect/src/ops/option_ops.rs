use crate::Reflect;

/// Access to an `Option<T>`.
///
/// ```
/// use marshal_reflect::Reflect;
///
/// let x = Some(3_i16);
/// let opt = x.reflect_ref().as_option().unwrap();
/// assert_eq!(opt.value().and_then(|v| v.downcast_ref::<i16>()), Some(&3));
/// ```
pub trait Optional: Reflect {
    /// Returns the inner value, `None` for `None`.
    fn value(&self) -> Option<&dyn Reflect>;
}
