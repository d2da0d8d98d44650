use super::{dictionary, keys_match, Match};
use crate::schema::BelongsToMany;
use crate::{Attributes, Instance, Loaded, Pivot};

/// Builds pivot records for relations that go through a join table.
pub trait NewPivot {
    /// Creates a pivot record for a join table row that already exists.
    fn new_existing_pivot(&self, attributes: Attributes) -> Pivot;
}

impl NewPivot for BelongsToMany {
    fn new_existing_pivot(&self, attributes: Attributes) -> Pivot {
        Pivot::new_existing(&self.table, attributes)
    }
}

impl Match for BelongsToMany {
    fn match_children(&self, parents: &mut [Instance], children: Vec<Instance>, name: &str) {
        // The join row, not the related model, records which parent a child
        // was loaded for. It must also point back at the child itself.
        let groups = dictionary(parents, children, |parent, child| {
            let pivot = child.pivot();
            let pivot_key = |key: &str| pivot.and_then(|pivot| pivot.get(key));

            keys_match(parent.get(&self.parent_key), pivot_key(&self.foreign_pivot_key))
                && keys_match(child.get(&self.related_key), pivot_key(&self.related_pivot_key))
        });

        for (parent, group) in parents.iter_mut().zip(groups) {
            parent.set_relation(name, Loaded::Many(group));
        }
    }
}
