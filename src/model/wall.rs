use super::NodeId;

/// An undirected straight wall between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// Free-form name or kind, `"unknown"` when the source gave none.
    pub name: String,
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
    pub thickness: f64,
}

impl Wall {
    /// Creates an unnamed wall.
    #[must_use]
    pub fn new(start_node_id: NodeId, end_node_id: NodeId, thickness: f64) -> Self {
        Self {
            name: "unknown".to_owned(),
            start_node_id,
            end_node_id,
            thickness,
        }
    }

    /// Sets the wall name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// A wall is valid when it joins two distinct nodes and has positive
    /// thickness.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start_node_id != self.end_node_id && self.thickness > 0.0
    }

    /// Endpoints in traversal order: `(start, end)`, or `(end, start)` when
    /// `inversed`.
    #[must_use]
    pub fn endpoints(&self, inversed: bool) -> (NodeId, NodeId) {
        if inversed {
            (self.end_node_id, self.start_node_id)
        } else {
            (self.start_node_id, self.end_node_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Wall::new(NodeId(1), NodeId(2), 0.2).is_valid());
        assert!(!Wall::new(NodeId(1), NodeId(1), 0.2).is_valid());
        assert!(!Wall::new(NodeId(1), NodeId(2), 0.0).is_valid());
    }

    #[test]
    fn endpoints_follow_direction() {
        let wall = Wall::new(NodeId(1), NodeId(2), 0.2);
        assert_eq!(wall.endpoints(false), (NodeId(1), NodeId(2)));
        assert_eq!(wall.endpoints(true), (NodeId(2), NodeId(1)));
    }
}
