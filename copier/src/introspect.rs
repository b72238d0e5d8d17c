//! Field discovery: embedded fields are flattened into the name space of the
//! struct that embeds them.

use std::collections::{HashMap, HashSet};

use copier_core::{Field, Shape};
use copier_reflect::{Peek, Poke};

use crate::trace;

/// A field reachable from a struct, either directly or through embedded fields.
#[derive(Clone, Debug)]
pub(crate) struct FlatField {
    /// name the field is reachable under
    pub name: &'static str,
    /// field indices from the outer struct down to the field itself
    pub path: Vec<usize>,
    pub field: &'static Field,
}

impl FlatField {
    fn new(index: usize, field: &'static Field) -> Self {
        Self {
            name: field.name,
            path: vec![index],
            field,
        }
    }

    /// How many embedded fields lie between the outer struct and this field.
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    fn nested_in(mut self, index: usize) -> Self {
        self.path.insert(0, index);
        self
    }
}

/// Lists the fields of the struct behind `value`, depth-first in declaration
/// order, with embedded fields replaced by their own fields.
///
/// Embedded pointers that are null are skipped. Non-null ones have their
/// dotted path (`prefix` + name) recorded in `need`, when given.
pub(crate) fn discover_fields(
    value: Peek<'_>,
    prefix: &str,
    mut need: Option<&mut HashSet<String>>,
) -> Vec<FlatField> {
    let Some(value) = value.innermost() else {
        return Vec::new();
    };
    let Ok(value) = value.into_struct() else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for (index, field) in value.def().fields.iter().enumerate() {
        if !field.is_embedded() {
            fields.push(FlatField::new(index, field));
            continue;
        }

        let Ok(embedded) = value.field(index) else {
            continue;
        };
        if embedded.shape().as_pointer().is_some() {
            if embedded.innermost().is_none() {
                trace!("skipping null embedded field {prefix}{}", field.name);
                continue;
            }
            if let Some(need) = need.as_deref_mut() {
                need.insert(format!("{prefix}{}", field.name));
            }
        }

        let nested_prefix = format!("{prefix}{}.", field.name);
        fields.extend(
            discover_fields(embedded, &nested_prefix, need.as_deref_mut())
                .into_iter()
                .map(|flat| flat.nested_in(index)),
        );
    }
    fields
}

/// Resolves field names the way field promotion does: the shallowest field
/// of a name wins, and among fields at the same depth the last declared one.
#[derive(Debug, Default)]
pub(crate) struct FieldIndex {
    by_name: HashMap<&'static str, FlatField>,
}

impl FieldIndex {
    /// Indexes every field a struct type can reach, including the embedded
    /// fields themselves and fields behind embedded pointers.
    pub fn for_shape(shape: &'static Shape) -> Self {
        let mut index = Self::default();
        index.collect(shape.deref_pointers(), &mut Vec::new(), &mut Vec::new());
        index
    }

    /// Indexes fields found by [`discover_fields`].
    pub fn from_fields(fields: &[FlatField]) -> Self {
        let mut index = Self::default();
        for flat in fields {
            index.insert(flat.clone());
        }
        index
    }

    pub fn get(&self, name: &str) -> Option<&FlatField> {
        self.by_name.get(name)
    }

    fn insert(&mut self, flat: FlatField) {
        match self.by_name.get(flat.name) {
            Some(existing) if existing.depth() < flat.depth() => {}
            _ => {
                self.by_name.insert(flat.name, flat);
            }
        }
    }

    fn collect(
        &mut self,
        shape: &'static Shape,
        path: &mut Vec<usize>,
        ancestors: &mut Vec<&'static Shape>,
    ) {
        let Some(def) = shape.as_struct() else {
            return;
        };
        ancestors.push(shape);
        for (index, field) in def.fields.iter().enumerate() {
            path.push(index);
            self.insert(FlatField {
                name: field.name,
                path: path.clone(),
                field,
            });
            if field.is_embedded() {
                let embedded = field.shape().deref_pointers();
                // a struct embedding itself through a pointer
                if !ancestors.contains(&embedded) {
                    self.collect(embedded, path, ancestors);
                }
            }
            path.pop();
        }
        ancestors.pop();
    }
}

/// Follows a field path from `root`, dereferencing pointers in between.
///
/// Returns `None` if the path crosses a null pointer. An empty path yields
/// `root` itself.
pub(crate) fn peek_at<'mem>(root: Peek<'mem>, path: &[usize]) -> Option<Peek<'mem>> {
    let mut current = root;
    for &index in path {
        current = current.innermost()?.into_struct().ok()?.field(index).ok()?;
    }
    Some(current)
}

/// Mutable counterpart of [`peek_at`].
pub(crate) fn poke_at<'mem>(root: Poke<'mem>, path: &[usize]) -> Option<Poke<'mem>> {
    let mut current = root;
    for &index in path {
        current = current
            .into_innermost()?
            .into_struct()
            .ok()?
            .into_field(index)
            .ok()?;
    }
    Some(current)
}
