use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_list {
    ($list:ident, $module:literal, $get:expr, $push:expr) => {
        impl<T: TypePath> TypePath for $list<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($list), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($list), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($list)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Reflect + Typed> Typed for $list<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> List for $list<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                match $get(self, index) {
                    Some(item) => Some(item as &dyn Reflect),
                    None => None,
                }
            }

            fn push(&mut self, item: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                $push(self, item.take::<T>()?);
                Ok(())
            }

            #[inline]
            fn len(&self) -> usize {
                $list::len(self)
            }
        }

        impl<T: Reflect + Typed> Reflect for $list<T> {
            impl_reflect_cast_fn!(List);
        }
    };
}

impl_list!(Vec, "alloc::vec", <[T]>::get, Vec::push);
impl_list!(VecDeque, "alloc::collections::vec_deque", VecDeque::get, VecDeque::push_back);

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::List;

    #[test]
    fn list_access() {
        let mut queue: VecDeque<u8> = VecDeque::new();
        List::push(&mut queue, 1_u8.into_boxed_reflect()).unwrap();
        List::push(&mut queue, 2_u8.into_boxed_reflect()).unwrap();
        assert_eq!(List::len(&queue), 2);

        let list: &dyn List = &queue;
        let items: Vec<u8> = list.iter().filter_map(|v| v.downcast_ref::<u8>().copied()).collect();
        assert_eq!(items, [1, 2]);
    }

    #[test]
    fn list_info() {
        let info = <Vec<Vec<i8>>>::type_info().as_list().unwrap();
        assert_eq!(info.type_path(), "alloc::vec::Vec<alloc::vec::Vec<i8>>");
        assert_eq!(info.item_info().type_name(), "Vec<i8>");
        assert_eq!(<VecDeque<bool>>::type_path(), "alloc::collections::vec_deque::VecDeque<bool>");

        let fresh = info.new_empty();
        assert_eq!(fresh.downcast_ref::<Vec<Vec<i8>>>(), Some(&vec![]));
    }
}
