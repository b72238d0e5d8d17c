use copier_core::{ListDef, Shape};

use crate::Peek;

/// Lets you read from a list (implements read-only list operations)
#[derive(Clone, Copy)]
pub struct PeekList<'mem> {
    /// the underlying value
    pub(crate) value: Peek<'mem>,

    /// the definition of the list
    pub(crate) def: ListDef,
}

impl core::fmt::Debug for PeekList<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeekList")
            .field("shape", &format_args!("{}", self.value.shape))
            .field("len", &self.len())
            .finish()
    }
}

impl<'mem> PeekList<'mem> {
    /// Returns the list definition
    #[inline(always)]
    pub fn def(&self) -> ListDef {
        self.def
    }

    /// Returns the shape of the list
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.value.shape
    }

    /// Get the number of items in the list
    #[inline]
    pub fn len(&self) -> usize {
        (self.def.len)(self.value.data)
    }

    /// Returns true if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an item from the list at the specified index
    pub fn get(&self, index: usize) -> Option<Peek<'mem>> {
        let item = (self.def.get)(self.value.data, index)?;
        Peek::from_any(item, self.def.item()).ok()
    }

    /// Returns an iterator over the items in the list
    pub fn iter(self) -> PeekListIter<'mem> {
        PeekListIter {
            list: self,
            index: 0,
            len: self.len(),
        }
    }
}

impl<'mem> IntoIterator for PeekList<'mem> {
    type Item = Peek<'mem>;
    type IntoIter = PeekListIter<'mem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a `PeekList`
pub struct PeekListIter<'mem> {
    list: PeekList<'mem>,
    index: usize,
    len: usize,
}

impl<'mem> Iterator for PeekListIter<'mem> {
    type Item = Peek<'mem>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PeekListIter<'_> {}
