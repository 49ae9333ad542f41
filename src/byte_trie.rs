use crate::key::byte_path;
use crate::set::footprint_of;
use crate::{Branch, ByteTrie, Footprint, Leaf, MembershipSet};

impl ByteTrie {
    pub fn new() -> Self {
        ByteTrie {
            root: Branch::new(),
        }
    }

    #[inline]
    fn leaf(&mut self, path: [u8; 3]) -> &mut Leaf {
        self.root
            .child_branch(path[0])
            .child_branch(path[1])
            .child_leaf(path[2])
    }

    pub fn insert(&mut self, key: u32) {
        let (path, low) = byte_path(key);
        self.leaf(path).insert(low);
    }

    pub fn test(&mut self, key: u32) -> bool {
        let (path, low) = byte_path(key);
        self.leaf(path).test(low)
    }

    pub fn contains(&self, key: u32) -> bool {
        let (path, low) = byte_path(key);
        self.root
            .get(path[0])
            .and_then(|b| b.get(path[1]))
            .and_then(|b| b.get(path[2]))
            .map_or(false, |leaf| leaf.test(low))
    }

    pub fn footprint(&self) -> Footprint {
        footprint_of(&self.root)
    }
}

impl MembershipSet for ByteTrie {
    fn insert(&mut self, key: u32) {
        ByteTrie::insert(self, key)
    }

    fn test(&mut self, key: u32) -> bool {
        ByteTrie::test(self, key)
    }

    fn contains(&self, key: u32) -> bool {
        ByteTrie::contains(self, key)
    }

    fn footprint(&self) -> Footprint {
        ByteTrie::footprint(self)
    }
}
