use super::WallId;

/// A named region of the plan bounded by a set of walls.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub name: String,
    wall_ids: Vec<WallId>,
}

impl Area {
    /// Creates an area, dropping repeated wall ids while keeping the order of
    /// first occurrence.
    #[must_use]
    pub fn new(name: impl Into<String>, wall_ids: impl IntoIterator<Item = WallId>) -> Self {
        let mut unique: Vec<WallId> = Vec::new();
        for id in wall_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            name: name.into(),
            wall_ids: unique,
        }
    }

    /// The walls of this area, without duplicates.
    #[must_use]
    pub fn wall_ids(&self) -> &[WallId] {
        &self.wall_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_removed_in_first_occurrence_order() {
        let area = Area::new("kitchen", [3, 1, 3, 2, 1].map(WallId));
        assert_eq!(area.wall_ids(), &[WallId(3), WallId(1), WallId(2)]);
        assert_eq!(area.name, "kitchen");
    }
}
