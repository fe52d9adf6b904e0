use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::entities::staff::{InsertStaffEntity, StaffEntity, UpdateStaffEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberDto {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub skills: Vec<String>,
    pub is_staff_of_month: bool,
    pub created_at: DateTime<Utc>,
}

impl From<StaffEntity> for StaffMemberDto {
    fn from(value: StaffEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            position: value.position,
            bio: value.bio,
            avatar: value.avatar,
            skills: value.skills,
            is_staff_of_month: value.is_staff_of_month,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertStaffModel {
    pub name: String,
    pub position: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub is_staff_of_month: Option<bool>,
}

impl InsertStaffModel {
    pub fn to_entity(self) -> InsertStaffEntity {
        InsertStaffEntity {
            name: self.name,
            position: self.position,
            bio: self.bio,
            avatar: self.avatar.filter(|avatar| !avatar.is_empty()),
            skills: self.skills,
            is_staff_of_month: self.is_staff_of_month.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Absent keeps the avatar, `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub avatar: Option<Option<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub is_staff_of_month: Option<bool>,
}

impl UpdateStaffModel {
    pub fn to_entity(self) -> UpdateStaffEntity {
        UpdateStaffEntity {
            name: self.name,
            position: self.position,
            bio: self.bio,
            avatar: self.avatar,
            skills: self.skills,
            is_staff_of_month: self.is_staff_of_month,
        }
    }
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
