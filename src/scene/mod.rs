use std::cell::RefCell;
use std::rc::Rc;

pub type SharedScene = Rc<RefCell<SceneNode>>;

/// A composite scene node. An empty node is a valid scene root.
#[derive(Debug, Default)]
pub struct SceneNode {
    children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new() -> Self {
        SceneNode::default()
    }

    pub fn into_shared(self) -> SharedScene {
        Rc::new(RefCell::new(self))
    }

    pub fn add_node(&mut self, node: SceneNode) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// This node plus all of its descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_root_counts_itself() {
        let root = SceneNode::new();
        assert!(root.is_empty());
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn counts_nested_children() {
        let mut branch = SceneNode::new();
        branch.add_node(SceneNode::new());
        branch.add_node(SceneNode::new());

        let mut root = SceneNode::new();
        root.add_node(branch);
        root.add_node(SceneNode::new());

        assert_eq!(root.children().len(), 2);
        assert_eq!(root.node_count(), 5);
    }
}
