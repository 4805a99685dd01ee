use serde::Serialize;

use crate::model::{EditField, Member, MemberId};

/// In-progress values for the row being edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditCursor {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl EditCursor {
    pub fn seed(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
        }
    }

    pub fn set(&mut self, field: EditField, value: String) {
        match field {
            EditField::Name => self.name = value,
            EditField::Email => self.email = value,
            EditField::Role => self.role = value,
        }
    }

    pub fn write_into(&self, member: &mut Member) {
        member.name.clone_from(&self.name);
        member.email.clone_from(&self.email);
        member.role.clone_from(&self.role);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing(EditCursor),
}

impl EditState {
    pub fn cursor(&self) -> Option<&EditCursor> {
        match self {
            Self::Viewing => None,
            Self::Editing(cursor) => Some(cursor),
        }
    }

    pub fn is_editing(&self, id: &MemberId) -> bool {
        self.cursor().map(|c| &c.id == id).unwrap_or(false)
    }
}
