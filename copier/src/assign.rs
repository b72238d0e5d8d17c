//! Leaf assignment: one value into another without looking at struct fields.

use copier_reflect::{Peek, Poke};

use crate::{CopyError, debug};

/// Outcome of a leaf assignment that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Assigned {
    /// the destination holds the source's value (or was left alone on purpose)
    Done,
    /// the types don't match at leaf level; a structural copy may still work
    Declined,
}

/// Assigns `from` into `to`.
///
/// - destination pointers: a null source pointer clears them, otherwise a null
///   destination is allocated and the assignment continues into the pointee
/// - convertible types are converted
/// - a destination scan hook is offered the source; a hook error declines
/// - source pointers are followed; a null one leaves the destination as is
pub(crate) fn assign(to: Poke<'_>, from: Peek<'_>) -> Result<Assigned, CopyError> {
    let mut to = to;

    if to.shape().as_pointer().is_some() {
        let mut ptr = to.into_pointer()?;
        if from.is_null() {
            ptr.clear()?;
            return Ok(Assigned::Done);
        }
        if ptr.is_null() {
            ptr.allocate()?;
        }
        return assign(ptr.into_inner()?, from);
    }

    if from.shape().is_convertible_to(to.shape()) {
        to.convert_from(from)?;
        return Ok(Assigned::Done);
    }

    if let Some(scanned) = to.scan(from) {
        return Ok(match scanned {
            Ok(()) => Assigned::Done,
            Err(_err) => {
                debug!("{} declined a {}: {_err}", to.shape(), from.shape());
                Assigned::Declined
            }
        });
    }

    if let Ok(ptr) = from.into_pointer() {
        return match ptr.inner() {
            Ok(pointee) => assign(to, pointee),
            Err(_) => Ok(Assigned::Done),
        };
    }

    Ok(Assigned::Declined)
}
