// SPDX-License-Identifier: MPL-2.0
//! Sample rows shown by the demo table.

/// One inventory line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub location: String,
}

impl Item {
    fn new(id: &str, name: &str, quantity: u32, location: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            quantity,
            location: location.to_string(),
        }
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("sku-001", "Hex bolts M6", 240, "A-12"),
        Item::new("sku-002", "Washers 6mm", 1200, "A-13"),
        Item::new("sku-003", "Cable ties", 85, "C-02"),
        Item::new("sku-004", "Wood screws 4x40", 600, "B-07"),
        Item::new("sku-005", "Wall plugs", 0, "B-08"),
    ]
}

/// Rows currently shown plus the ones removed, in removal order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    removed: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            removed: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_removed(&self) -> bool {
        !self.removed.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Removes the row with `id`, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(index);
        self.removed.push(item.clone());
        Some(item)
    }

    pub fn clear(&mut self) {
        self.removed.append(&mut self.items);
    }

    /// Restores removed rows, sorted by id.
    pub fn restore(&mut self) {
        self.items.append(&mut self.removed);
        self.items.sort_by(|a, b| a.id.cmp(&b.id));
    }
}
