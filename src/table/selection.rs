use serde::Deserialize;
use serde::Serialize;

use crate::model::{Member, MemberId};
use crate::pagination::PAGE_SIZE;

/// How the header checkbox decides between "clear" and "select page".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectAllPolicy {
    /// Compare the selection size with the fixed page size.
    #[default]
    PageSize,
    /// Checked only when every row on the current page is selected.
    VisibleRows,
}

impl SelectAllPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "page-size" | "pagesize" | "fixed" => Some(Self::PageSize),
            "visible-rows" | "visible" => Some(Self::VisibleRows),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PageSize => "page-size",
            Self::VisibleRows => "visible-rows",
        }
    }

    /// Whether the header box reads as checked for `visible` rows.
    pub fn header_checked(self, selection: &Selection, visible: &[Member]) -> bool {
        match self {
            Self::PageSize => selection.len() == PAGE_SIZE,
            Self::VisibleRows => {
                !visible.is_empty() && visible.iter().all(|m| selection.contains(&m.id))
            }
        }
    }
}

/// Checked member ids in the order they were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<MemberId>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemberId> {
        self.ids.iter()
    }

    /// Returns true when the id is selected after the call.
    pub fn toggle(&mut self, id: &MemberId) -> bool {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn replace<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = MemberId>,
    {
        self.ids.clear();
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
