use std::fmt;

use log::{error, info, trace, warn};

use super::code_table::CodeTable;
use crate::errors::{HuffError, HuffResult};
use crate::tools::options::{CollisionPolicy, DecodeOptions};

/// A node in the decode tree. Index 0 of a branch is the "0" (left) child, index 1 the "1" (right) child.
///
/// Codewords may be arbitrarily long, so nothing that walks a tree (drop, comparison, the
/// statistics below) recurses per level; they all run off an explicit work stack.
pub enum Node {
    Branch([Option<Box<Node>>; 2]),
    Leaf(char),
}

impl Node {
    fn empty_branch() -> Node {
        Node::Branch([None, None])
    }

    /// Child in direction `bit` (false = 0, true = 1). Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Branch(kids) => kids[bit as usize].as_deref(),
            Node::Leaf(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// The symbol held by a leaf.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf(sym) => Some(*sym),
            Node::Branch(_) => None,
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach every descendant so each Box drops with no children of its own
        let mut stack: Vec<Box<Node>> = Vec::new();
        if let Node::Branch(kids) = self {
            stack.extend(kids.iter_mut().filter_map(Option::take));
        }
        while let Some(mut node) = stack.pop() {
            if let Node::Branch(kids) = &mut *node {
                stack.extend(kids.iter_mut().filter_map(Option::take));
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Node::Leaf(a), Node::Leaf(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Node::Branch(a), Node::Branch(b)) => {
                    for (x, y) in a.iter().zip(b) {
                        match (x, y) {
                            (Some(x), Some(y)) => stack.push((&**x, &**y)),
                            (None, None) => {}
                            _ => return false,
                        }
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    /// Shallow: shows which children exist, not the subtrees under them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(sym) => write!(f, "Leaf({:?})", sym),
            Node::Branch([left, right]) => f
                .debug_struct("Branch")
                .field("left", &left.is_some())
                .field("right", &right.is_some())
                .finish(),
        }
    }
}

/// Prefix-code decode tree, rebuilt from a code table. Read-only once built.
#[derive(Eq, PartialEq)]
pub struct DecodeTree {
    root: Node,
}

impl DecodeTree {
    /// Build a tree straight from a list of codewords, using the alphabet and
    /// collision policy in `opts`.
    pub fn build<S: AsRef<str>>(codewords: &[S], opts: &DecodeOptions) -> HuffResult<Self> {
        let table = CodeTable::new(codewords, &opts.alphabet, opts.collisions)?;
        Self::from_table(&table, opts.collisions)
    }

    /// Insert every (codeword, symbol) pair of the table into one shared tree.
    pub fn from_table(table: &CodeTable, collisions: CollisionPolicy) -> HuffResult<Self> {
        let mut root = Node::empty_branch();
        for (codeword, symbol) in table.entries() {
            if !insert(&mut root, codeword, *symbol) {
                match collisions {
                    CollisionPolicy::Reject => {
                        error!(
                            "Codeword {} for {} collides with an earlier codeword.",
                            codeword, symbol
                        );
                        return Err(HuffError::PrefixConflict {
                            codeword: codeword.clone(),
                            symbol: *symbol,
                        });
                    }
                    CollisionPolicy::FirstWins => {
                        warn!(
                            "Codeword {} for {} collides with an earlier codeword. Skipping it.",
                            codeword, symbol
                        );
                    }
                }
            }
        }
        let tree = Self { root };
        info!(
            "Built a decode tree with {} leaves, {} levels deep.",
            tree.leaf_count(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Follow `path` (a '0'/'1' string) from the root and report the symbol found there, if any.
    pub fn symbol_at(&self, path: &str) -> Option<char> {
        let mut node = &self.root;
        for c in path.chars() {
            node = match c {
                '0' => node.child(false)?,
                '1' => node.child(true)?,
                _ => return None,
            };
        }
        node.symbol()
    }

    /// Number of symbols the tree can produce.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf(_) => count += 1,
                Node::Branch(kids) => stack.extend(kids.iter().flatten().map(Box::as_ref)),
            }
        }
        count
    }

    /// Length of the longest codeword in the tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Node::Branch(kids) = node {
                stack.extend(kids.iter().flatten().map(|k| (&**k, level + 1)));
            }
        }
        deepest
    }
}

impl fmt::Debug for DecodeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeTree")
            .field("root", &self.root)
            .field("leaves", &self.leaf_count())
            .field("depth", &self.depth())
            .finish()
    }
}

/// Walk `codeword` down from `root`, creating branches as needed, and put a leaf at the end.
/// Returns false, leaving the tree untouched below the collision point, if the path runs into
/// an existing leaf or the final slot is already taken.
fn insert(root: &mut Node, codeword: &str, symbol: char) -> bool {
    let bits: Vec<bool> = codeword.chars().map(|c| c == '1').collect();

    // An empty codeword is only allowed on its own; the root itself becomes the leaf.
    let Some((&last, path)) = bits.split_last() else {
        if matches!(root, Node::Branch([None, None])) {
            *root = Node::Leaf(symbol);
            return true;
        }
        return false;
    };

    let mut node = root;
    for &bit in path {
        node = match node {
            Node::Leaf(_) => return false,
            Node::Branch(kids) => {
                &mut **kids[bit as usize].get_or_insert_with(|| Box::new(Node::empty_branch()))
            }
        };
    }
    match node {
        Node::Leaf(_) => false,
        Node::Branch(kids) => {
            let slot = &mut kids[last as usize];
            if slot.is_some() {
                return false;
            }
            trace!("Placing {} at {}", symbol, codeword);
            *slot = Some(Box::new(Node::Leaf(symbol)));
            true
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn strict() -> DecodeOptions {
        DecodeOptions::new()
    }

    #[test]
    fn basic_tree_test() {
        let tree = DecodeTree::build(&["0", "10", "11"], &strict()).unwrap();
        assert_eq!(tree.symbol_at("0"), Some('A'));
        assert_eq!(tree.symbol_at("10"), Some('B'));
        assert_eq!(tree.symbol_at("11"), Some('C'));
        assert_eq!(tree.symbol_at("1"), None);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 2);
        assert!(!tree.root().is_leaf());
    }

    #[test]
    fn child_test() {
        let tree = DecodeTree::build(&["0", "10"], &strict()).unwrap();
        let right = tree.root().child(true).unwrap();
        assert!(!right.is_leaf());
        assert_eq!(right.child(false).and_then(Node::symbol), Some('B'));
        assert!(right.child(true).is_none());
        // Leaves never have children
        let left = tree.root().child(false).unwrap();
        assert!(left.child(false).is_none());
        assert!(left.child(true).is_none());
    }

    #[test]
    fn sparse_tree_test() {
        // Not a complete code: nothing lives under "000" or "01".
        let tree = DecodeTree::build(&["001", "1"], &strict()).unwrap();
        assert_eq!(tree.symbol_at("001"), Some('A'));
        assert_eq!(tree.symbol_at("1"), Some('B'));
        assert!(tree.root().child(false).unwrap().child(true).is_none());
    }

    #[test]
    fn empty_codeword_test() {
        let tree = DecodeTree::build(&[""], &strict()).unwrap();
        assert_eq!(tree.root(), &Node::Leaf('A'));
        assert_eq!(tree.symbol_at(""), Some('A'));
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn prefix_conflict_rejected_test() {
        // "0" sorts before "01", so "01" is the one that runs into a leaf.
        assert_eq!(
            DecodeTree::build(&["0", "01", "1"], &strict()),
            Err(HuffError::PrefixConflict {
                codeword: "01".to_string(),
                symbol: 'B',
            })
        );
        // Same collision with the shorter codeword listed second.
        assert_eq!(
            DecodeTree::build(&["10", "1"], &strict()),
            Err(HuffError::PrefixConflict {
                codeword: "10".to_string(),
                symbol: 'A',
            })
        );
    }

    #[test]
    fn prefix_conflict_first_wins_test() {
        let opts = strict().with_collisions(CollisionPolicy::FirstWins);
        let tree = DecodeTree::build(&["0", "01", "1"], &opts).unwrap();
        assert_eq!(tree.symbol_at("0"), Some('A'));
        assert_eq!(tree.symbol_at("01"), None);
        assert_eq!(tree.symbol_at("1"), Some('C'));
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn order_independent_shape_test() {
        let opts = strict().with_alphabet(
            crate::huffman_coding::alphabet::Alphabet::new("xyzw".chars()).unwrap(),
        );
        let a = DecodeTree::build(&["00", "01", "10", "11"], &opts).unwrap();
        let opts_b = strict().with_alphabet(
            crate::huffman_coding::alphabet::Alphabet::new("wzyx".chars()).unwrap(),
        );
        let b = DecodeTree::build(&["11", "10", "01", "00"], &opts_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn deep_codeword_test() {
        let long = "1".repeat(200_000);
        let tree = DecodeTree::build(&["0".to_string(), long.clone()], &strict()).unwrap();
        assert_eq!(tree.depth(), 200_000);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.symbol_at(&long), Some('B'));
        let again = DecodeTree::build(&[long, "0".to_string()], &strict()).unwrap();
        // Same shape, symbols swapped
        assert!(tree != again);
        assert_eq!(
            format!("{:?}", tree),
            "DecodeTree { root: Branch { left: true, right: true }, leaves: 2, depth: 200000 }"
        );
        drop(tree);
        drop(again);
    }

    #[test]
    fn node_eq_test() {
        assert_eq!(Node::Leaf('A'), Node::Leaf('A'));
        assert_ne!(Node::Leaf('A'), Node::Leaf('B'));
        assert_ne!(Node::Leaf('A'), Node::empty_branch());
        let one = DecodeTree::build(&["0", "1"], &strict()).unwrap();
        let other = DecodeTree::build(&["0", "11"], &strict()).unwrap();
        assert!(one != other);
    }
}
