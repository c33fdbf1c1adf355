use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls;
use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose type carries a static capability table.
///
/// `Reflect` is the object-safe face of a type: the engine only ever sees
/// `&dyn Reflect` (to serialize) and `Box<dyn Reflect>` (from deserialize).
///
/// Types usually implement it through [`#[derive(Reflect)]`](crate::derive::Reflect).
/// The crate also ships implementations for primitives, `String`, `Vec`,
/// `VecDeque`, `HashMap`, `BTreeMap`, `Option`, `Box`, `Rc`, `Arc`, `RefCell`,
/// `TypeId`, and with the `chrono` feature some chrono types.
///
/// `Reflect` does not require `Send` or `Sync`, so shared graphs such as
/// `Rc<RefCell<Node>>` can be reflected.
///
/// # Examples
///
/// ```
/// use marshal_reflect::Reflect;
/// use marshal_reflect::ops::{ReflectRef, ScalarRef};
///
/// let x: &dyn Reflect = &7_u16;
/// assert!(matches!(x.reflect_ref(), ReflectRef::Scalar(ScalarRef::UInt(7))));
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Any {
    /// Casts this value to `&dyn Reflect`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as `Box<dyn Reflect>`.
    ///
    /// ```
    /// use marshal_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` would return the id of the box itself,
    /// this method always looks through it.
    ///
    /// ```
    /// use core::any::TypeId;
    /// use marshal_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
    /// assert_eq!(x.ty_id(), TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Performs a type-checked assignment, handing `value` back on mismatch.
    ///
    /// This is the setter used for struct fields.
    ///
    /// ```
    /// use marshal_reflect::Reflect;
    ///
    /// let mut x = 1_i32;
    /// assert!(x.set(5_i32.into_boxed_reflect()).is_ok());
    /// assert_eq!(x, 5);
    /// assert!(x.set(5_u8.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [`ReflectKind`] of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of this value by kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of this value by kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Debug formatting through reflection.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Option(data) => impls::option_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Scalar(data) => fmt::Debug::fmt(&data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts by reference.
    ///
    /// ```
    /// use marshal_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the box, handing it back if the type is not `T`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts and unboxes, handing the box back if the type is not `T`.
    ///
    /// ```
    /// use marshal_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.take::<i32>().ok(), Some(10));
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut` for a kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
