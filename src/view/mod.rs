use serde::Serialize;

use crate::model::{Member, MemberId};
use crate::pagination::{self, PagerControls};
use crate::table::TableState;

/// One rendered body row. When `editing` is set, the displayed values are the
/// scratch values instead of the stored ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub selected: bool,
    pub editing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub search_term: String,
    pub header_checked: bool,
    pub rows: Vec<RowView>,
    pub pager: PagerControls,
    pub total: usize,
    pub filtered: usize,
    pub selected: Vec<MemberId>,
}

fn row_view(state: &TableState, member: &Member) -> RowView {
    let selected = state.selection().contains(&member.id);
    match state.edit().cursor().filter(|c| c.id == member.id) {
        Some(cursor) => RowView {
            id: member.id.clone(),
            name: cursor.name.clone(),
            email: cursor.email.clone(),
            role: cursor.role.clone(),
            selected,
            editing: true,
        },
        None => RowView {
            id: member.id.clone(),
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
            selected,
            editing: false,
        },
    }
}

/// Derives everything the rendering surface shows from the current state.
pub fn derive_view(state: &TableState) -> TableView {
    let rows = state
        .visible()
        .iter()
        .map(|member| row_view(state, member))
        .collect();
    TableView {
        search_term: state.search_term().to_string(),
        header_checked: state.all_selected(),
        rows,
        pager: pagination::controls(state.current_page(), state.filtered().len()),
        total: state.members().len(),
        filtered: state.filtered().len(),
        selected: state.selection().iter().cloned().collect(),
    }
}
