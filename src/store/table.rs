//! Insertion-ordered table keyed by record id.

use std::collections::HashMap;

/// A stored record with a unique generated identifier.
pub trait Record {
    fn id(&self) -> &str;
}

/// Rows kept in insertion order with an id → position index.
///
/// Rows are never removed, so positions stay valid for the table's lifetime.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> Table<T> {
    /// Appends a row. Ids are generated ULIDs and never repeat.
    pub fn insert(&mut self, row: T) -> &T {
        let position = self.rows.len();
        self.index.insert(row.id().to_string(), position);
        self.rows.push(row);
        &self.rows[position]
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.rows[position])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let position = *self.index.get(id)?;
        self.rows.get_mut(position)
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Rows paired with their insertion sequence number.
    pub fn iter_sequenced(&self) -> impl Iterator<Item = (usize, &T)> {
        self.rows.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: u32,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, value: u32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut table = Table::default();
        table.insert(row("c", 3));
        table.insert(row("a", 1));
        table.insert(row("b", 2));

        let values: Vec<u32> = table.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![3, 1, 2]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut table = Table::default();
        table.insert(row("a", 1));

        assert_eq!(table.get("a").map(|r| r.value), Some(1));
        assert!(table.get("missing").is_none());

        if let Some(r) = table.get_mut("a") {
            r.value = 10;
        }
        assert_eq!(table.get("a").map(|r| r.value), Some(10));
    }
}
