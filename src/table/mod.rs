pub mod edit;
pub mod selection;

use tracing::debug;

use crate::filter;
use crate::model::{EditField, Member, MemberId};
use crate::pagination::{self, PageTarget};

pub use edit::{EditCursor, EditState};
pub use selection::{SelectAllPolicy, Selection};

/// Every user event the table reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Loaded(Vec<Member>),
    SetSearchTerm(String),
    Search,
    GoToPage(PageTarget),
    ToggleRow(MemberId),
    ToggleAll,
    DeleteSelected,
    Edit(MemberId),
    SetField(EditField, String),
    Save,
    Cancel,
    DeleteRow(MemberId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(&'static str),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    members: Vec<Member>,
    filtered: Vec<Member>,
    search_term: String,
    current_page: usize,
    selection: Selection,
    edit: EditState,
    select_all_policy: SelectAllPolicy,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(SelectAllPolicy::default())
    }
}

impl TableState {
    pub fn new(select_all_policy: SelectAllPolicy) -> Self {
        Self {
            members: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            selection: Selection::default(),
            edit: EditState::Viewing,
            select_all_policy,
        }
    }

    pub fn with_members(members: Vec<Member>, select_all_policy: SelectAllPolicy) -> Self {
        let mut state = Self::new(select_all_policy);
        state.apply(Action::Loaded(members));
        state
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn filtered(&self) -> &[Member] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered.len())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn select_all_policy(&self) -> SelectAllPolicy {
        self.select_all_policy
    }

    pub fn visible(&self) -> &[Member] {
        pagination::page_slice(&self.filtered, self.current_page)
    }

    fn is_visible(&self, id: &MemberId) -> bool {
        self.visible().iter().any(|m| &m.id == id)
    }

    /// Whether the header checkbox reads as checked.
    pub fn all_selected(&self) -> bool {
        self.select_all_policy
            .header_checked(&self.selection, self.visible())
    }

    /// Applies one event. Ignored events leave the state untouched.
    pub fn apply(&mut self, action: Action) -> Outcome {
        debug!(?action, "applying table action");
        let outcome = match action {
            Action::Loaded(members) => {
                self.filtered = members.clone();
                self.members = members;
                self.current_page = 1;
                self.selection.clear();
                self.edit = EditState::Viewing;
                Outcome::Applied
            }
            Action::SetSearchTerm(term) => {
                self.search_term = term;
                Outcome::Applied
            }
            Action::Search => {
                self.filtered = filter::search(&self.search_term, &self.members);
                self.current_page = 1;
                Outcome::Applied
            }
            Action::GoToPage(target) => {
                self.current_page = target.resolve(self.current_page, self.filtered.len());
                Outcome::Applied
            }
            Action::ToggleRow(id) => self.toggle_row(&id),
            Action::ToggleAll => {
                if self.all_selected() {
                    self.selection.clear();
                } else {
                    let ids: Vec<MemberId> = self.visible().iter().map(|m| m.id.clone()).collect();
                    self.selection.replace(ids);
                }
                self.edit = EditState::Viewing;
                Outcome::Applied
            }
            Action::DeleteSelected => {
                let selection = std::mem::take(&mut self.selection);
                self.members.retain(|m| !selection.contains(&m.id));
                self.filtered.retain(|m| !selection.contains(&m.id));
                self.edit = EditState::Viewing;
                Outcome::Applied
            }
            Action::Edit(id) => {
                let seeded = self
                    .visible()
                    .iter()
                    .find(|m| m.id == id)
                    .map(EditCursor::seed);
                match seeded {
                    Some(cursor) => {
                        self.edit = EditState::Editing(cursor);
                        Outcome::Applied
                    }
                    None => Outcome::Ignored("row is not on the current page"),
                }
            }
            Action::SetField(field, value) => match &mut self.edit {
                EditState::Editing(cursor) => {
                    cursor.set(field, value);
                    Outcome::Applied
                }
                EditState::Viewing => Outcome::Ignored("no row is being edited"),
            },
            Action::Save => match std::mem::take(&mut self.edit) {
                EditState::Editing(cursor) => {
                    for member in self
                        .members
                        .iter_mut()
                        .chain(self.filtered.iter_mut())
                        .filter(|m| m.id == cursor.id)
                    {
                        cursor.write_into(member);
                    }
                    self.selection.clear();
                    Outcome::Applied
                }
                EditState::Viewing => Outcome::Ignored("no row is being edited"),
            },
            Action::Cancel => {
                self.edit = EditState::Viewing;
                Outcome::Applied
            }
            Action::DeleteRow(id) => {
                if !self.is_visible(&id) {
                    return Outcome::Ignored("row is not on the current page");
                }
                self.members.retain(|m| m.id != id);
                self.filtered.retain(|m| m.id != id);
                self.selection.clear();
                self.edit = EditState::Viewing;
                Outcome::Applied
            }
        };
        self.current_page = pagination::clamp_page(self.current_page, self.filtered.len());
        outcome
    }

    fn toggle_row(&mut self, id: &MemberId) -> Outcome {
        if self.edit.is_editing(id) {
            return Outcome::Ignored("row is being edited");
        }
        if !self.is_visible(id) {
            return Outcome::Ignored("row is not on the current page");
        }
        if !self.selection.toggle(id) {
            self.edit = EditState::Viewing;
        }
        Outcome::Applied
    }
}

/// Reducer form of [`TableState::apply`].
pub fn reduce(mut state: TableState, action: Action) -> TableState {
    state.apply(action);
    state
}
