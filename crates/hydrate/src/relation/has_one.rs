use super::{dictionary, keys_match, Match};
use crate::schema::HasOne;
use crate::{Instance, Loaded};

impl Match for HasOne {
    fn match_children(&self, parents: &mut [Instance], children: Vec<Instance>, name: &str) {
        let groups = dictionary(parents, children, |parent, child| {
            keys_match(parent.get(&self.local_key), child.get(&self.foreign_key))
        });

        for (parent, group) in parents.iter_mut().zip(groups) {
            let one = group.into_iter().next().map(Box::new);
            parent.set_relation(name, Loaded::One(one));
        }
    }
}
