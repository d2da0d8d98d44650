//! Relation matching strategies.
//!
//! Each relation kind decides which hydrated children belong to which parent
//! and how they are stored on it. Keys are compared after [`Key`] coercion,
//! so `1` matches `"1"`. A child (or parent) without the join key is owned by
//! every parent: nested search documents carry ownership in their position,
//! not in their attributes.

mod belongs_to;
mod belongs_to_many;
mod has_many;
mod has_one;

pub use belongs_to_many::NewPivot;

use crate::schema::{Relation, RelationKind};
use crate::{Instance, Key};
use serde_json::Value;

/// Attaches hydrated children to their parents.
pub trait Match {
    /// Attaches `children` to each of `parents` under `name`.
    fn match_children(&self, parents: &mut [Instance], children: Vec<Instance>, name: &str);
}

impl Match for Relation {
    fn match_children(&self, parents: &mut [Instance], children: Vec<Instance>, name: &str) {
        match &self.kind {
            RelationKind::HasOne(has_one) => has_one.match_children(parents, children, name),
            RelationKind::HasMany(has_many) => has_many.match_children(parents, children, name),
            RelationKind::BelongsTo(belongs_to) => {
                belongs_to.match_children(parents, children, name)
            }
            RelationKind::BelongsToMany(belongs_to_many) => {
                belongs_to_many.match_children(parents, children, name)
            }
        }
    }
}

/// Returns false only when both keys are present and differ.
fn keys_match(parent: Option<&Value>, child: Option<&Value>) -> bool {
    match (parent.and_then(Key::coerce), child.and_then(Key::coerce)) {
        (Some(parent), Some(child)) => parent == child,
        _ => true,
    }
}

/// Splits `children` into one group per parent, in child order.
fn dictionary<F>(parents: &[Instance], children: Vec<Instance>, owns: F) -> Vec<Vec<Instance>>
where
    F: Fn(&Instance, &Instance) -> bool,
{
    match parents {
        // The hydration path always matches a single parent; move the
        // children instead of cloning them.
        [parent] => vec![children
            .into_iter()
            .filter(|child| owns(parent, child))
            .collect()],
        _ => parents
            .iter()
            .map(|parent| {
                children
                    .iter()
                    .filter(|child| owns(parent, child))
                    .cloned()
                    .collect()
            })
            .collect(),
    }
}
