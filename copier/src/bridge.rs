//! Bridging between fields and methods: a source field the destination lacks
//! can be handed to a destination setter, and a source getter can fill a
//! destination field.

use copier_core::{Method, Shape};
use copier_reflect::{HeapValue, Peek, Poke};

use crate::introspect::{peek_at, poke_at};
use crate::{CopyError, trace};

/// A bridge method and the embedded field path of its receiver (empty for
/// methods of the struct itself).
#[derive(Debug)]
struct MethodSite {
    path: Vec<usize>,
    method: &'static Method,
}

/// Looks up a bridge method by the field name it stands in for. Methods of
/// embedded structs are promoted: the shallowest one wins.
fn find_method(
    shape: &'static Shape,
    name: &str,
    wanted: fn(&Method) -> bool,
) -> Option<MethodSite> {
    let root = shape.deref_pointers();
    let mut seen = vec![root];
    let mut level = vec![(root, Vec::new())];

    while !level.is_empty() {
        let mut next = Vec::new();
        for (shape, path) in level {
            if let Some(method) = shape
                .methods
                .iter()
                .find(|method| method.name == name && wanted(method))
            {
                return Some(MethodSite { path, method });
            }

            let Some(def) = shape.as_struct() else {
                continue;
            };
            for (index, field) in def.fields.iter().enumerate() {
                if !field.is_embedded() {
                    continue;
                }
                let embedded = field.shape().deref_pointers();
                if seen.contains(&embedded) {
                    continue;
                }
                seen.push(embedded);
                let mut nested = path.clone();
                nested.push(index);
                next.push((embedded, nested));
            }
        }
        level = next;
    }
    None
}

/// Hands `from` to the setter `to` declares (or promotes) for `name`, if its
/// parameter has exactly `from`'s type. Returns whether a setter was called.
pub(crate) fn copy_to_setter(
    to: Poke<'_>,
    name: &str,
    from: Peek<'_>,
) -> Result<bool, CopyError> {
    let Some(site) = find_method(to.shape(), name, |method| method.as_setter().is_some()) else {
        return Ok(false);
    };
    if site
        .method
        .as_setter()
        .is_none_or(|(param, _)| param != from.shape())
    {
        trace!("setter {:?} does not take a {}", site.method, from.shape());
        return Ok(false);
    }
    let Some(mut receiver) = poke_at(to, &site.path).and_then(Poke::into_innermost) else {
        trace!("receiver of setter {:?} is behind a null pointer", site.method);
        return Ok(false);
    };

    trace!("calling {:?}", site.method);
    receiver.call_setter(site.method, from)?;
    Ok(true)
}

/// Calls the getter `from` declares (or promotes) for `name`, if any.
pub(crate) fn call_getter(from: Peek<'_>, name: &str) -> Result<Option<HeapValue>, CopyError> {
    let Some(site) = find_method(from.shape(), name, |method| method.as_getter().is_some())
    else {
        return Ok(None);
    };
    let Some(receiver) = peek_at(from, &site.path).and_then(Peek::innermost) else {
        trace!("receiver of getter {:?} is behind a null pointer", site.method);
        return Ok(None);
    };

    trace!("calling {:?}", site.method);
    Ok(Some(receiver.call_getter(site.method)?))
}
