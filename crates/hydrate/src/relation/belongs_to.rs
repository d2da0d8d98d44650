use super::{dictionary, keys_match, Match};
use crate::schema::BelongsTo;
use crate::{Instance, Loaded};

impl Match for BelongsTo {
    fn match_children(&self, parents: &mut [Instance], children: Vec<Instance>, name: &str) {
        let groups = dictionary(parents, children, |parent, owner| {
            keys_match(parent.get(&self.foreign_key), owner.get(&self.owner_key))
        });

        for (parent, group) in parents.iter_mut().zip(groups) {
            let owner = group.into_iter().next().map(Box::new);
            parent.set_relation(name, Loaded::One(owner));
        }
    }
}
