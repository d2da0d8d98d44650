use super::{dictionary, keys_match, Match};
use crate::schema::HasMany;
use crate::{Instance, Loaded};

impl Match for HasMany {
    fn match_children(&self, parents: &mut [Instance], children: Vec<Instance>, name: &str) {
        let groups = dictionary(parents, children, |parent, child| {
            keys_match(parent.get(&self.local_key), child.get(&self.foreign_key))
        });

        for (parent, group) in parents.iter_mut().zip(groups) {
            parent.set_relation(name, Loaded::Many(group));
        }
    }
}
