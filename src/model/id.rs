use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id! {
    /// Identifier of a node, unique within a plan.
    NodeId
}

entity_id! {
    /// Identifier of a wall, unique within a plan.
    WallId
}

entity_id! {
    /// Identifier of a hole (door, window opening), unique within a plan.
    HoleId
}

entity_id! {
    /// Identifier of an area (room), unique within a plan.
    AreaId
}
