use crate::filter;
use crate::model::{EditField, Member, MemberId};
use crate::pagination::{self, PageTarget, PAGE_SIZE};
use crate::session::{Session, Step};
use crate::table::{Action, EditState, SelectAllPolicy, TableState};
use crate::view::derive_view;

fn roster(n: usize) -> Vec<Member> {
    (1..=n)
        .map(|i| {
            Member::new(
                &i.to_string(),
                &format!("Member {i}"),
                &format!("member{i}@mailinator.com"),
                if i % 4 == 0 { "admin" } else { "member" },
            )
        })
        .collect()
}

fn id(s: &str) -> MemberId {
    MemberId::from(s)
}

#[test]
fn twenty_five_members_span_three_pages() {
    let mut state = TableState::with_members(roster(25), SelectAllPolicy::PageSize);
    state.apply(Action::SetSearchTerm(String::new()));
    state.apply(Action::Search);
    assert_eq!(state.filtered().len(), 25);
    assert_eq!(state.page_count(), 3);

    state.apply(Action::GoToPage(PageTarget::Number(3)));
    assert_eq!(state.visible().len(), 5);
    assert_eq!(derive_view(&state).rows.len(), 5);
}

#[test]
fn edit_save_updates_email_everywhere() {
    let mut state = TableState::with_members(roster(25), SelectAllPolicy::PageSize);
    state.apply(Action::ToggleRow(id("2")));
    state.apply(Action::Edit(id("7")));
    state.apply(Action::SetField(EditField::Email, "a@b.com".to_string()));
    state.apply(Action::Save);

    let full = state.members().iter().find(|m| m.id == id("7")).unwrap();
    let shown = state.filtered().iter().find(|m| m.id == id("7")).unwrap();
    assert_eq!(full.email, "a@b.com");
    assert_eq!(shown.email, "a@b.com");
    assert!(state.selection().is_empty());
    assert_eq!(state.edit(), &EditState::Viewing);
}

#[test]
fn repeated_save_with_same_values_is_idempotent() {
    let mut state = TableState::with_members(roster(12), SelectAllPolicy::PageSize);
    state.apply(Action::Edit(id("4")));
    state.apply(Action::SetField(EditField::Name, "Renamed".to_string()));
    state.apply(Action::Save);
    let once = state.members().to_vec();

    state.apply(Action::Edit(id("4")));
    state.apply(Action::SetField(EditField::Name, "Renamed".to_string()));
    state.apply(Action::Save);
    assert_eq!(state.members(), once.as_slice());
    assert_eq!(state.filtered(), once.as_slice());
}

#[test]
fn delete_selected_removes_checked_rows() {
    let mut state = TableState::with_members(roster(25), SelectAllPolicy::PageSize);
    state.apply(Action::ToggleRow(id("3")));
    state.apply(Action::ToggleRow(id("5")));
    state.apply(Action::DeleteSelected);

    assert!(!state.members().iter().any(|m| m.id == id("3") || m.id == id("5")));
    assert!(!state.filtered().iter().any(|m| m.id == id("3") || m.id == id("5")));
    assert_eq!(state.members().len(), 23);
    assert!(state.selection().is_empty());
}

#[test]
fn header_checkbox_clears_full_selection_then_selects_page() {
    let mut state = TableState::with_members(roster(25), SelectAllPolicy::PageSize);
    for i in 1..=PAGE_SIZE {
        state.apply(Action::ToggleRow(id(&i.to_string())));
    }
    assert_eq!(state.selection().len(), 10);

    state.apply(Action::ToggleAll);
    assert!(state.selection().is_empty());

    state.apply(Action::GoToPage(PageTarget::Next));
    state.apply(Action::ToggleAll);
    let expected: Vec<MemberId> = (11..=20).map(|i| id(&i.to_string())).collect();
    let selected: Vec<MemberId> = state.selection().iter().cloned().collect();
    assert_eq!(selected, expected);
}

#[test]
fn failed_load_renders_empty_table() {
    let mut state = TableState::new(SelectAllPolicy::PageSize);
    state.apply(Action::Loaded(Vec::new()));
    let view = derive_view(&state);
    assert!(view.rows.is_empty());
    assert_eq!(view.pager.page_count, 0);
    assert_eq!(view.total, 0);

    // navigation on an empty table stays on page 1
    state.apply(Action::GoToPage(PageTarget::Last));
    state.apply(Action::GoToPage(PageTarget::Next));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn filter_then_paginate_reproduces_filtered_set() {
    let members = roster(46);
    for query in ["", "admin", "member1", "MAILINATOR", "nobody"] {
        let filtered = filter::search(query, &members);
        let mut joined = Vec::new();
        for page in 1..=pagination::page_count(filtered.len()) {
            joined.extend_from_slice(pagination::page_slice(&filtered, page));
        }
        assert_eq!(joined, filtered);
    }
}

#[test]
fn search_after_navigation_returns_to_first_page() {
    let mut state = TableState::with_members(roster(46), SelectAllPolicy::PageSize);
    state.apply(Action::GoToPage(PageTarget::Last));
    assert_eq!(state.current_page(), 5);
    state.apply(Action::SetSearchTerm("admin".to_string()));
    state.apply(Action::Search);
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.filtered().len(), 11);
}

#[test]
fn shell_session_drives_the_whole_flow() {
    colored::control::set_override(false);
    let state = TableState::with_members(roster(25), SelectAllPolicy::PageSize);
    let mut session = Session::new(state, crate::output::OutputFormat::Text);

    for line in [
        "search member2",
        "edit 20",
        "set role owner",
        "save",
        "search",
        "page last",
        "delete 25",
    ] {
        assert!(matches!(session.handle_line(line), Step::Continue(_)));
    }

    let state = session.state();
    let edited = state.members().iter().find(|m| m.id == id("20")).unwrap();
    assert_eq!(edited.role, "owner");
    assert_eq!(state.members().len(), 24);
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.visible().len(), 4);
}
