//! Copies into lists: once per source item, or once for a single source
//! value.

use copier_core::Shape;
use copier_reflect::{HeapValue, Peek, PokeList};

use crate::{CopyError, Copier, trace};

impl Copier {
    /// Appends one element per item of `from` (a single element if `from` is
    /// not a list) to `list`. Each element starts as the zero value of
    /// `item_base` and is wrapped into the pointers the list's item type
    /// needs. An empty source list replaces `list` with an empty list.
    pub(crate) fn copy_into_list(
        &self,
        mut list: PokeList<'_>,
        from: Peek<'_>,
        item_base: &'static Shape,
        depth: usize,
    ) -> Result<(), CopyError> {
        let items: Vec<Option<Peek<'_>>> = match from.into_list() {
            Ok(items) => items.iter().map(Peek::innermost).collect(),
            Err(_) => vec![Some(from)],
        };

        if items.is_empty() {
            trace!("empty source list, clearing {}", list.shape());
            list.clear()?;
            return Ok(());
        }

        let item_shape = list.def().item();
        for item in items {
            let mut element = HeapValue::new_default(item_base);
            // null source items still append a zero element
            if let Some(item) = item {
                self.copy_element(element.poke(), item, depth)?;
            }

            match element.wrap_into(item_shape) {
                Ok(element) => list.push(element)?,
                Err(_err) => {
                    trace!("cannot append a {item_base} to {}: {_err}", list.shape());
                }
            }
        }
        Ok(())
    }
}
