use crate::key::nibble_path;
use crate::set::footprint_of;
use crate::{Branch, Footprint, Leaf, MembershipSet, NibbleTrie};

impl NibbleTrie {
    pub fn new() -> Self {
        NibbleTrie {
            root: Branch::new(),
        }
    }

    #[inline]
    fn leaf(&mut self, path: [u8; 6]) -> &mut Leaf {
        self.root
            .child_branch(path[0])
            .child_branch(path[1])
            .child_branch(path[2])
            .child_branch(path[3])
            .child_branch(path[4])
            .child_leaf(path[5])
    }

    pub fn insert(&mut self, key: u32) {
        let (path, low) = nibble_path(key);
        self.leaf(path).insert(low);
    }

    pub fn test(&mut self, key: u32) -> bool {
        let (path, low) = nibble_path(key);
        self.leaf(path).test(low)
    }

    pub fn contains(&self, key: u32) -> bool {
        let (path, low) = nibble_path(key);
        self.root
            .get(path[0])
            .and_then(|b| b.get(path[1]))
            .and_then(|b| b.get(path[2]))
            .and_then(|b| b.get(path[3]))
            .and_then(|b| b.get(path[4]))
            .and_then(|b| b.get(path[5]))
            .map_or(false, |leaf| leaf.test(low))
    }

    pub fn footprint(&self) -> Footprint {
        footprint_of(&self.root)
    }
}

impl MembershipSet for NibbleTrie {
    fn insert(&mut self, key: u32) {
        NibbleTrie::insert(self, key)
    }

    fn test(&mut self, key: u32) -> bool {
        NibbleTrie::test(self, key)
    }

    fn contains(&self, key: u32) -> bool {
        NibbleTrie::contains(self, key)
    }

    fn footprint(&self) -> Footprint {
        NibbleTrie::footprint(self)
    }
}
