use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    entities::staff::{InsertStaffEntity, StaffEntity, UpdateStaffEntity},
    repositories::staff::StaffRepository,
};
use crate::infra::memory::memory_store::{MemoryStore, Table};

pub struct StaffMemory {
    store: Arc<MemoryStore>,
}

impl StaffMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

/// Staff-of-the-month enforcer: unflags every holder except `except` and returns how many
/// records changed. Runs under the staff write lock held by `create`/`update`.
fn enforce_single_staff_of_month(staff: &mut Table<StaffEntity>, except: Option<Uuid>) -> usize {
    let mut cleared = 0;
    for (id, member) in staff.iter_mut() {
        if member.is_staff_of_month && Some(*id) != except {
            member.is_staff_of_month = false;
            cleared += 1;
        }
    }
    cleared
}

#[async_trait]
impl StaffRepository for StaffMemory {
    async fn create(&self, insert_staff_entity: InsertStaffEntity) -> Result<StaffEntity> {
        let member = insert_staff_entity.into_entity(Uuid::new_v4(), Utc::now());

        let mut staff = self.store.staff.write();
        if member.is_staff_of_month {
            let cleared = enforce_single_staff_of_month(&mut staff, None);
            debug!(staff_id = %member.id, cleared, "staff: staff of the month handed over");
        }
        staff.insert(member.id, member.clone());

        Ok(member)
    }

    async fn find_all(&self) -> Result<Vec<StaffEntity>> {
        Ok(self.store.staff.read().values())
    }

    async fn find_by_id(&self, staff_id: Uuid) -> Result<Option<StaffEntity>> {
        Ok(self.store.staff.read().get(&staff_id).cloned())
    }

    async fn update(
        &self,
        staff_id: Uuid,
        update_staff_entity: UpdateStaffEntity,
    ) -> Result<Option<StaffEntity>> {
        let mut staff = self.store.staff.write();
        if !staff.contains(&staff_id) {
            return Ok(None);
        }

        if update_staff_entity.is_staff_of_month == Some(true) {
            let cleared = enforce_single_staff_of_month(&mut staff, Some(staff_id));
            debug!(%staff_id, cleared, "staff: staff of the month handed over");
        }

        let updated = staff.get_mut(&staff_id).map(|member| {
            member.apply(update_staff_entity);
            member.clone()
        });

        Ok(updated)
    }

    async fn delete(&self, staff_id: Uuid) -> Result<bool> {
        Ok(self.store.staff.write().remove(&staff_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_member(name: &str, is_staff_of_month: bool) -> InsertStaffEntity {
        InsertStaffEntity {
            name: name.to_string(),
            position: "Network Engineer".to_string(),
            bio: "Keeps packets moving.".to_string(),
            avatar: None,
            skills: vec!["Networking".to_string()],
            is_staff_of_month,
        }
    }

    async fn flagged(repo: &StaffMemory) -> Vec<Uuid> {
        repo.find_all()
            .await
            .unwrap()
            .into_iter()
            .filter(|member| member.is_staff_of_month)
            .map(|member| member.id)
            .collect()
    }

    #[tokio::test]
    async fn creating_a_flagged_member_unflags_the_previous_holder() {
        let repo = StaffMemory::new(Arc::new(MemoryStore::new()));

        let first = repo.create(insert_member("Alex", true)).await.unwrap();
        assert_eq!(flagged(&repo).await, vec![first.id]);

        let second = repo.create(insert_member("Div", true)).await.unwrap();
        assert_eq!(flagged(&repo).await, vec![second.id]);

        repo.create(insert_member("Priya", false)).await.unwrap();
        assert_eq!(flagged(&repo).await, vec![second.id]);
    }

    #[tokio::test]
    async fn updating_to_flagged_keeps_a_single_holder() {
        let repo = StaffMemory::new(Arc::new(MemoryStore::new()));
        let mut ids = Vec::new();
        for name in ["Sayan", "Ace", "M1nx", "Aura"] {
            ids.push(repo.create(insert_member(name, false)).await.unwrap().id);
        }
        assert!(flagged(&repo).await.is_empty());

        for id in ids.iter().chain(ids.iter().rev()) {
            let updated = repo
                .update(
                    *id,
                    UpdateStaffEntity {
                        is_staff_of_month: Some(true),
                        ..Default::default()
                    },
                )
                .await
                .unwrap()
                .unwrap();
            assert!(updated.is_staff_of_month);
            assert_eq!(flagged(&repo).await, vec![*id]);
        }
    }

    #[tokio::test]
    async fn update_of_missing_member_leaves_holder_alone() {
        let repo = StaffMemory::new(Arc::new(MemoryStore::new()));
        let holder = repo.create(insert_member("Div", true)).await.unwrap();

        let result = repo
            .update(
                Uuid::new_v4(),
                UpdateStaffEntity {
                    is_staff_of_month: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(flagged(&repo).await, vec![holder.id]);
    }

    #[tokio::test]
    async fn enforcer_spares_the_excluded_member() {
        let store = Arc::new(MemoryStore::new());
        let repo = StaffMemory::new(Arc::clone(&store));
        let holder = repo.create(insert_member("Div", true)).await.unwrap();

        let cleared = enforce_single_staff_of_month(&mut store.staff.write(), Some(holder.id));
        assert_eq!(cleared, 0);
        assert_eq!(flagged(&repo).await, vec![holder.id]);

        let cleared = enforce_single_staff_of_month(&mut store.staff.write(), None);
        assert_eq!(cleared, 1);
        assert!(flagged(&repo).await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_promotions_never_leave_two_holders() {
        let store = Arc::new(MemoryStore::new());
        let repo = Arc::new(StaffMemory::new(Arc::clone(&store)));
        let mut ids = Vec::new();
        for n in 0..16 {
            ids.push(
                repo.create(insert_member(&format!("member-{n}"), false))
                    .await
                    .unwrap()
                    .id,
            );
        }

        let mut handles = Vec::new();
        for id in ids {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.update(
                    id,
                    UpdateStaffEntity {
                        is_staff_of_month: Some(true),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(flagged(&repo).await.len(), 1);
    }

    #[tokio::test]
    async fn avatar_can_be_cleared() {
        let repo = StaffMemory::new(Arc::new(MemoryStore::new()));
        let mut input = insert_member("Elena", false);
        input.avatar = Some("https://cdn.example/elena.png".to_string());
        let created = repo.create(input).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateStaffEntity {
                    avatar: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.avatar, None);
        assert_eq!(updated.created_at, created.created_at);
    }
}
