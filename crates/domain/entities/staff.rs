use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct StaffEntity {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub skills: Vec<String>,
    pub is_staff_of_month: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStaffEntity {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub skills: Vec<String>,
    pub is_staff_of_month: bool,
}

/// `avatar: Some(None)` clears the avatar, `None` leaves it as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStaffEntity {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<Option<String>>,
    pub skills: Option<Vec<String>>,
    pub is_staff_of_month: Option<bool>,
}

impl InsertStaffEntity {
    pub fn into_entity(self, id: Uuid, created_at: DateTime<Utc>) -> StaffEntity {
        StaffEntity {
            id,
            name: self.name,
            position: self.position,
            bio: self.bio,
            avatar: self.avatar,
            skills: self.skills,
            is_staff_of_month: self.is_staff_of_month,
            created_at,
        }
    }
}

impl StaffEntity {
    pub fn apply(&mut self, changes: UpdateStaffEntity) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(position) = changes.position {
            self.position = position;
        }
        if let Some(bio) = changes.bio {
            self.bio = bio;
        }
        if let Some(avatar) = changes.avatar {
            self.avatar = avatar;
        }
        if let Some(skills) = changes.skills {
            self.skills = skills;
        }
        if let Some(is_staff_of_month) = changes.is_staff_of_month {
            self.is_staff_of_month = is_staff_of_month;
        }
    }
}
