//! Allocation of the embedded pointers a destination needs before its
//! fields can be written.

use std::collections::HashSet;

use copier_core::Shape;
use copier_reflect::{Poke, ReflectError};

use crate::trace;

/// Which embedded pointers of a destination get allocated.
#[derive(Debug)]
pub(crate) enum NeedInit {
    /// every null embedded pointer; the embedded pointers the source
    /// populated (dotted paths) are followed even into a self-embedding type
    All(HashSet<String>),
    /// the embedded pointers at these dotted paths, e.g. `base` or `base.audit`
    Paths(HashSet<String>),
}

impl NeedInit {
    fn contains(&self, path: &str) -> bool {
        match self {
            NeedInit::All(_) => true,
            NeedInit::Paths(paths) => paths.contains(path),
        }
    }
}

/// Walks the embedded fields of the struct behind `value` and allocates the
/// null pointers among those `need` names, so the fields behind them can be
/// written.
///
/// Value-embedded structs are always walked through. Other fields and
/// read-only fields are left alone.
pub(crate) fn ensure_reachable(
    value: Poke<'_>,
    prefix: &str,
    need: &NeedInit,
) -> Result<(), ReflectError> {
    ensure_reachable_inner(value, prefix, need, &mut Vec::new())
}

fn ensure_reachable_inner(
    value: Poke<'_>,
    prefix: &str,
    need: &NeedInit,
    ancestors: &mut Vec<&'static Shape>,
) -> Result<(), ReflectError> {
    let Some(value) = value.into_innermost() else {
        return Ok(());
    };
    let Ok(mut value) = value.into_struct() else {
        return Ok(());
    };

    ancestors.push(value.shape());
    for (index, field) in value.def().fields.iter().enumerate() {
        if !field.is_embedded() || !field.is_writable() {
            continue;
        }
        let path = format!("{prefix}{}", field.name);
        let shape = field.shape();
        if shape.as_pointer().is_some() {
            if !need.contains(&path) {
                continue;
            }
            // allocating every pointer of a self-embedding type never ends
            if let NeedInit::All(populated) = need
                && !populated.contains(&path)
                && ancestors.contains(&shape.deref_pointers())
            {
                continue;
            }
        }

        let embedded = allocate_chain(value.field(index)?, &path)?;
        ensure_reachable_inner(embedded, &format!("{path}."), need, ancestors)?;
    }
    ancestors.pop();
    Ok(())
}

/// Allocates every null pointer layer of `value` and returns the pointee.
fn allocate_chain<'mem>(
    mut value: Poke<'mem>,
    _path: &str,
) -> Result<Poke<'mem>, ReflectError> {
    while value.shape().as_pointer().is_some() {
        let mut ptr = value.into_pointer()?;
        if ptr.is_null() {
            trace!("allocating embedded {} at {_path}", ptr.shape());
            ptr.allocate()?;
        }
        value = ptr.into_inner()?;
    }
    Ok(value)
}
