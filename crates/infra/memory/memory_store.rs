use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::entities::{
    plans::PlanEntity, server_nodes::ServerNodeEntity, staff::StaffEntity,
    testimonials::TestimonialEntity, users::UserEntity,
};

/// Process-lifetime backing collections. Built once at startup and shared by `Arc`
/// with every repository; tests build their own instance.
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) plans: RwLock<Table<PlanEntity>>,
    pub(crate) staff: RwLock<Table<StaffEntity>>,
    pub(crate) testimonials: RwLock<Table<TestimonialEntity>>,
    pub(crate) server_nodes: RwLock<Table<ServerNodeEntity>>,
    /// Keyed by username, which is unique.
    pub(crate) users: RwLock<HashMap<String, UserEntity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Keyed collection that remembers insertion order.
#[derive(Debug)]
pub struct Table<T> {
    rows: HashMap<Uuid, (u64, T)>,
    next_seq: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    pub fn insert(&mut self, id: Uuid, value: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(id, (seq, value));
    }

    pub fn get(&self, id: &Uuid) -> Option<&T> {
        self.rows.get(id).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        self.rows.get_mut(id).map(|(_, value)| value)
    }

    pub fn remove(&mut self, id: &Uuid) -> bool {
        self.rows.remove(id).is_some()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.rows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clones every row, oldest first.
    pub fn values(&self) -> Vec<T> {
        let mut rows: Vec<&(u64, T)> = self.rows.values().collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, value)| value.clone()).collect()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Uuid, &mut T)> {
        self.rows.iter_mut().map(|(id, (_, value))| (id, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_insertion_order() {
        let mut table = Table::default();
        let ids: Vec<Uuid> = (0..20).map(|_| Uuid::new_v4()).collect();
        for (n, id) in ids.iter().enumerate() {
            table.insert(*id, n);
        }

        assert_eq!(table.values(), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn remove_reports_whether_a_row_existed() {
        let mut table = Table::default();
        let id = Uuid::new_v4();
        table.insert(id, "row");

        assert!(table.remove(&id));
        assert!(!table.remove(&id));
        assert!(table.is_empty());
    }
}
