//! Mirrors upstream `keyed-node.ts` node shape.
//!
//! Rust divergence: upstream marks a missing child with `null` inside the
//! `children` array. Here a child position is a [`ChildSlot`], so "no
//! children field" (`children: None`) and "empty position"
//! (`ChildSlot::Empty`) stay distinct.

/// A tree node identified by `key`, with optional payload and children.
///
/// `data` is never read by the printer; it rides along for callers that
/// reuse the shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedNode<D = (), K = String> {
    pub key: K,
    pub data: Option<D>,
    pub children: Option<Vec<ChildSlot<D, K>>>,
}

/// One position within a node's `children` sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChildSlot<D = (), K = String> {
    Node(KeyedNode<D, K>),
    Empty,
}

impl<D, K> ChildSlot<D, K> {
    pub fn as_node(&self) -> Option<&KeyedNode<D, K>> {
        match self {
            ChildSlot::Node(node) => Some(node),
            ChildSlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChildSlot::Empty)
    }
}

impl<D, K> From<KeyedNode<D, K>> for ChildSlot<D, K> {
    fn from(node: KeyedNode<D, K>) -> Self {
        ChildSlot::Node(node)
    }
}

impl<D, K> From<Option<KeyedNode<D, K>>> for ChildSlot<D, K> {
    fn from(node: Option<KeyedNode<D, K>>) -> Self {
        node.map_or(ChildSlot::Empty, ChildSlot::Node)
    }
}

impl<D, K> KeyedNode<D, K> {
    /// Leaf node without data and without a `children` field.
    pub fn new(key: K) -> Self {
        Self {
            key,
            data: None,
            children: None,
        }
    }

    pub fn with_data(key: K, data: D) -> Self {
        Self {
            key,
            data: Some(data),
            children: None,
        }
    }

    /// Appends `node` as the last child, creating the `children` field if absent.
    pub fn child(mut self, node: KeyedNode<D, K>) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .push(ChildSlot::Node(node));
        self
    }

    /// Appends an empty slot as the last child.
    pub fn empty_child(mut self) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .push(ChildSlot::Empty);
        self
    }

    /// Replaces the `children` field. An empty iterator yields `Some(vec![])`.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = ChildSlot<D, K>>,
    {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// True when there is no `children` field or it holds no slots.
    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().map_or(true, Vec::is_empty)
    }

    /// Present children in order, skipping empty slots.
    pub fn child_nodes(&self) -> impl Iterator<Item = &KeyedNode<D, K>> {
        self.children
            .iter()
            .flatten()
            .filter_map(ChildSlot::as_node)
    }
}
