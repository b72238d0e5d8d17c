use std::collections::HashSet;

use copier_core::Reflect;
use copier_reflect::{Peek, Poke};

use crate::assign::{Assigned, assign};
use crate::bridge::{call_getter, copy_to_setter};
use crate::init::{NeedInit, ensure_reachable};
use crate::introspect::{FieldIndex, discover_fields, peek_at, poke_at};
use crate::{CopyError, CopyOptions, debug, global_options, trace};

/// Copies `src` into `dst` with the [global options](crate::global_options).
///
/// See [`Copier::copy`].
pub fn copy<D: Reflect, S: Reflect>(dst: &mut D, src: &S) -> Result<(), CopyError> {
    Copier::new(global_options()).copy(dst, src)
}

/// The copy engine, with its options.
#[derive(Clone, Copy, Debug, Default)]
pub struct Copier {
    options: CopyOptions,
}

impl Copier {
    /// Creates a copier with the given options.
    pub const fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    /// The options this copier runs with.
    pub const fn options(&self) -> CopyOptions {
        self.options
    }

    /// Copies the data of `src` into `dst`, as far as their shapes allow.
    ///
    /// Fails with [`CopyError::Unaddressable`] if `dst` ends in a null pointer
    /// (nothing is written then), and with the error of the first nested copy
    /// that fails, leaving the fields copied before it in place.
    pub fn copy<D: Reflect, S: Reflect>(&self, dst: &mut D, src: &S) -> Result<(), CopyError> {
        self.copy_peek(Poke::new(dst), Peek::new(src))
    }

    /// Type-erased version of [`Copier::copy`].
    pub fn copy_peek(&self, dst: Poke<'_>, src: Peek<'_>) -> Result<(), CopyError> {
        self.copy_at(dst, src, 0)
    }

    pub(crate) fn copy_at(
        &self,
        dst: Poke<'_>,
        src: Peek<'_>,
        depth: usize,
    ) -> Result<(), CopyError> {
        if depth > self.options.depth_limit() {
            return Err(CopyError::DepthLimitExceeded {
                limit: self.options.depth_limit(),
            });
        }

        let dst_shape = dst.shape();
        let Some(mut to) = dst.into_innermost() else {
            return Err(CopyError::Unaddressable { shape: dst_shape });
        };
        let Some(from) = src.innermost() else {
            trace!("source {} is null, nothing to copy", src.shape());
            return Ok(());
        };

        let from_base = from.shape().base();
        let to_base = to.shape().base();
        trace!(depth, "copying {} into {}", from.shape(), to.shape());

        if !from_base.is_struct() && from.shape() == to.shape() {
            to.set_from(from)?;
            return Ok(());
        }

        let into_list = to.shape().as_list().is_some();
        if (!from_base.is_struct() || !to_base.is_struct())
            && !(into_list && from_base.is_convertible_to(to_base))
        {
            trace!("nothing in common between {} and {}", from.shape(), to.shape());
            return Ok(());
        }

        if into_list {
            return self.copy_into_list(to.into_list()?, from, to_base, depth);
        }
        self.copy_element(to, from, depth)
    }

    /// Copies one (dereferenced) value: a leaf assignment between non-structs,
    /// field by field otherwise.
    pub(crate) fn copy_element(
        &self,
        to: Poke<'_>,
        from: Peek<'_>,
        depth: usize,
    ) -> Result<(), CopyError> {
        if !from.shape().base().is_struct() && !to.shape().base().is_struct() {
            assign(to, from)?;
            return Ok(());
        }
        self.copy_struct(to, from, depth)
    }

    fn copy_struct(&self, mut to: Poke<'_>, from: Peek<'_>, depth: usize) -> Result<(), CopyError> {
        if !from.shape().is_struct() || !to.shape().is_struct() {
            trace!("{} -> {} is not struct to struct, skipping", from.shape(), to.shape());
            return Ok(());
        }

        let mut populated = HashSet::new();
        let from_fields = discover_fields(from, "", Some(&mut populated));
        let need = if self.options.initializes_all_embedded() {
            NeedInit::All(populated)
        } else {
            NeedInit::Paths(populated)
        };
        ensure_reachable(to.reborrow(), "", &need)?;

        let from_index = FieldIndex::from_fields(&from_fields);
        let to_index = FieldIndex::for_shape(to.shape());

        // fields into fields, or into setters
        for flat in &from_fields {
            let Some(from_field) = from_index
                .get(flat.name)
                .and_then(|resolved| peek_at(from, &resolved.path))
            else {
                continue;
            };

            let Some(to_flat) = to_index.get(flat.name) else {
                copy_to_setter(to.reborrow(), flat.name, from_field)?;
                continue;
            };
            if !to_flat.field.is_writable() {
                trace!("{}.{} is read-only", to.shape(), flat.name);
                continue;
            }
            let Some(to_field) = poke_at(to.reborrow(), &to_flat.path) else {
                trace!("{}.{} is behind a null pointer", to.shape(), flat.name);
                continue;
            };

            if let Err(err) = self.copy_field(to_field, from_field, depth) {
                debug!("copying field {} failed: {err}", flat.name);
                return Err(err);
            }
        }

        // getters into fields
        let to_fields = discover_fields(to.as_peek(), "", None);
        for flat in to_fields {
            let Some(to_flat) = to_index.get(flat.name) else {
                continue;
            };
            if !to_flat.field.is_writable() {
                continue;
            }
            let Some(value) = call_getter(from, flat.name)? else {
                continue;
            };
            if let Some(to_field) = poke_at(to.reborrow(), &to_flat.path) {
                assign(to_field, value.peek())?;
            }
        }

        Ok(())
    }

    /// Leaf assignment first, a nested copy when the leaf declines.
    fn copy_field(&self, mut to: Poke<'_>, from: Peek<'_>, depth: usize) -> Result<(), CopyError> {
        if assign(to.reborrow(), from)? == Assigned::Declined {
            self.copy_at(to, from, depth + 1)?;
        }
        Ok(())
    }
}
