use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// Access to an ordered, growable sequence.
///
/// ```
/// use marshal_reflect::{Reflect, ops::List};
///
/// let mut vec = vec![1_i32, 2];
/// let list: &mut dyn List = &mut vec;
///
/// list.push(3_i32.into_boxed_reflect()).unwrap();
/// assert!(list.push(4_u8.into_boxed_reflect()).is_err());
///
/// assert_eq!(vec, [1, 2, 3]);
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Appends `item`, handing it back if it has the wrong type.
    fn push(&mut self, item: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Iterates the items in order.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
