use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OptionInfo, TypeInfo, TypePath, Typed};
use crate::ops::Optional;
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Option(OptionInfo::new::<T>()))
    }
}

impl<T: Reflect + Typed> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        match self {
            Some(value) => Some(value as &dyn Reflect),
            None => None,
        }
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Option);
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn option_paths() {
        assert_eq!(<Option<String>>::type_name(), "Option<String>");
        assert_eq!(<Option<u8>>::type_ident(), "Option");
    }

    #[test]
    fn none_constructor() {
        let info = <Option<u8>>::type_info().as_option().unwrap();
        assert!(info.some_info().type_is::<u8>());

        let none = info.none();
        assert_eq!(none.reflect_kind(), ReflectKind::Option);
        assert_eq!(none.downcast_ref::<Option<u8>>(), Some(&None));
    }
}
