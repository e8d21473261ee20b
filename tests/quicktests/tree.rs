use anchortree::{Order, Tree};

use crate::Op;

struct ModelNode {
    value: u8,
    left: Option<usize>,
    right: Option<usize>,
}

/// The same tree kept as a flat arena. Searching follows the textbook description directly: look
/// in both subtrees, then let the node itself win, else prefer the right subtree's match.
#[derive(Default)]
struct Model {
    nodes: Vec<ModelNode>,
    root: Option<usize>,
}

impl Model {
    fn push(&mut self, value: u8) -> usize {
        self.nodes.push(ModelNode {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    fn add_root(&mut self, value: u8) {
        match self.root {
            Some(root) => self.nodes[root].value = value,
            None => self.root = Some(self.push(value)),
        }
    }

    fn find(&self, at: Option<usize>, target: u8) -> Option<usize> {
        let i = at?;
        let right = self.find(self.nodes[i].right, target);
        let left = self.find(self.nodes[i].left, target);
        if self.nodes[i].value == target {
            Some(i)
        } else {
            right.or(left)
        }
    }

    fn add(&mut self, anchor: u8, value: u8, left: bool) -> bool {
        let Some(i) = self.find(self.root, anchor) else {
            return false;
        };
        let slot = if left {
            self.nodes[i].left
        } else {
            self.nodes[i].right
        };
        match slot {
            Some(child) => self.nodes[child].value = value,
            None => {
                let child = Some(self.push(value));
                if left {
                    self.nodes[i].left = child;
                } else {
                    self.nodes[i].right = child;
                }
            }
        }
        true
    }

    fn walk(&self, at: Option<usize>, order: Order, out: &mut Vec<u8>) {
        let Some(i) = at else {
            return;
        };
        let node = &self.nodes[i];
        if order == Order::Preorder {
            out.push(node.value);
        }
        self.walk(node.left, order, out);
        if order == Order::Inorder {
            out.push(node.value);
        }
        self.walk(node.right, order, out);
        if order == Order::Postorder {
            out.push(node.value);
        }
    }

    fn traverse(&self, order: Order) -> Vec<u8> {
        let mut out = Vec::new();
        self.walk(self.root, order, &mut out);
        out
    }
}

const ORDERS: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];

/// Applies a set of operations to a tree and the model, checking that both agree on which
/// inserts succeed.
fn do_ops(ops: &[Op], tree: &mut Tree<u8>, model: &mut Model) -> bool {
    for op in ops {
        let agreed = match *op {
            Op::AddRoot(v) => {
                tree.add_root(v);
                model.add_root(v);
                true
            }
            Op::AddLeft(anchor, v) => tree.add_left(&anchor, v).is_ok() == model.add(anchor, v, true),
            Op::AddRight(anchor, v) => {
                tree.add_right(&anchor, v).is_ok() == model.add(anchor, v, false)
            }
        };
        if !agreed {
            return false;
        }
    }
    true
}

fn traversals_match(tree: &Tree<u8>, model: &Model) -> bool {
    ORDERS
        .iter()
        .all(|&order| tree.traverse(order).copied().collect::<Vec<_>>() == model.traverse(order))
}

quickcheck::quickcheck! {
    fn matches_model(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();

        do_ops(&ops, &mut tree, &mut model) && traversals_match(&tree, &model)
    }
}

quickcheck::quickcheck! {
    fn clone_is_unaffected_by_later_ops(ops: Vec<Op>, more: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();
        do_ops(&ops, &mut tree, &mut model);

        let copy = tree.clone();
        let mut ignored = Model::default();
        do_ops(&more, &mut tree, &mut ignored);

        traversals_match(&copy, &model)
    }
}

quickcheck::quickcheck! {
    fn take_moves_everything(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();
        do_ops(&ops, &mut tree, &mut model);

        let moved = tree.take();
        tree.is_empty() && tree.begin() == tree.end() && traversals_match(&moved, &model)
    }
}

quickcheck::quickcheck! {
    fn n_advances_exhaust(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();
        do_ops(&ops, &mut tree, &mut model);

        let n = model.nodes.len();
        ORDERS.iter().all(|&order| {
            let mut cursor = tree.traverse(order);
            let mut seen = 0;
            while !cursor.is_exhausted() {
                cursor.advance();
                seen += 1;
            }
            let end = match order {
                Order::Preorder => tree.end_preorder(),
                Order::Inorder => tree.end_inorder(),
                Order::Postorder => tree.end_postorder(),
            };
            cursor.advance();
            seen == n && cursor == end
        })
    }
}
