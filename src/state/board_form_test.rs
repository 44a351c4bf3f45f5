use serde_json::json;

use super::*;
use crate::state::boards::BoardsState;

fn existing_board() -> Board {
    Board {
        id: 100,
        title: "Platform Launch".to_owned(),
        columns: vec![
            Column {
                id: 101,
                title: "Todo".to_owned(),
                tasks: vec![Task(json!({ "title": "Build UI" })), Task(json!({ "title": "QA" }))],
            },
            Column { id: 102, title: "Doing".to_owned(), tasks: vec![Task(json!({ "title": "Ship" }))] },
            Column { id: 103, title: "Done".to_owned(), tasks: vec![] },
        ],
    }
}

fn generator() -> IdGenerator {
    let ids = IdGenerator::new();
    ids.observe(1_000);
    ids
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn blank_form_starts_with_one_blank_column() {
    let form = BoardFormState::blank(&generator());
    assert!(!form.is_editing());
    assert_eq!(form.name, "");
    assert_eq!(form.rows.len(), 1);
    assert_eq!(form.rows[0].title, "");
    assert!(form.rows[0].tasks.is_empty());
    assert!(!form.attempted);
}

#[test]
fn for_board_seeds_name_rows_and_tasks() {
    let board = existing_board();
    let form = BoardFormState::for_board(&board, &generator());
    assert_eq!(form.board_id, Some(100));
    assert_eq!(form.name, "Platform Launch");
    let ids: Vec<_> = form.rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![101, 102, 103]);
    assert_eq!(form.rows[0].tasks.len(), 2);
}

#[test]
fn seeded_with_no_columns_adds_blank_row() {
    let form = BoardFormState::seeded(Some(7), "Empty", &[], &generator());
    assert_eq!(form.rows.len(), 1);
    assert_eq!(form.rows[0].title, "");
}

// =============================================================
// Row editing
// =============================================================

#[test]
fn add_column_appends_blank_row_with_unique_id() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    let a = form.add_column(&ids);
    let b = form.add_column(&ids);
    assert_ne!(a, b);
    assert_eq!(form.rows.len(), 3);
    assert_eq!(form.rows[2].id, b);
    assert_eq!(form.column_title(b), Some(""));
}

#[test]
fn remove_column_by_id() {
    let mut form = BoardFormState::for_board(&existing_board(), &generator());
    assert!(form.remove_column(102));
    assert!(!form.remove_column(102));
    let ids: Vec<_> = form.rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![101, 103]);
}

#[test]
fn remove_last_column_leaves_no_rows() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    let only = form.rows[0].id;
    assert!(form.remove_column(only));
    assert!(form.rows.is_empty());
}

#[test]
fn set_column_title_targets_one_row() {
    let mut form = BoardFormState::for_board(&existing_board(), &generator());
    assert!(form.set_column_title(102, "In Progress".to_owned()));
    assert!(!form.set_column_title(999, "nope".to_owned()));
    assert_eq!(form.column_title(101), Some("Todo"));
    assert_eq!(form.column_title(102), Some("In Progress"));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn submit_with_blank_name_is_rejected() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    let column = form.rows[0].id;
    form.set_column_title(column, "A".to_owned());
    assert_eq!(form.submit(&ids), Err(FormError::MissingBoardName));

    form.set_name("   ".to_owned());
    assert_eq!(form.submit(&ids), Err(FormError::MissingBoardName));
}

#[test]
fn rejected_submit_leaves_store_unchanged() {
    let ids = generator();
    let form = BoardFormState::blank(&ids);
    let mut store = BoardsState::new(vec![existing_board()]);
    let before = store.clone();
    if let Ok(submission) = form.submit(&ids) {
        store.apply(submission);
    }
    assert_eq!(store, before);
}

#[test]
fn submit_with_unfilled_added_column_is_rejected() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    form.set_name("X".to_owned());
    let first = form.rows[0].id;
    form.set_column_title(first, "A".to_owned());
    let added = form.add_column(&ids);
    assert_eq!(
        form.submit(&ids),
        Err(FormError::MissingColumnTitle { id: added, position: 2 })
    );
}

#[test]
fn board_name_is_checked_before_columns() {
    let form = BoardFormState::blank(&generator());
    assert_eq!(form.validate(), Err(FormError::MissingBoardName));
}

#[test]
fn invalid_markers_only_after_attempt() {
    let mut form = BoardFormState::blank(&generator());
    let row = form.rows[0].id;
    assert!(!form.name_invalid());
    assert!(!form.column_invalid(row));

    form.attempted = true;
    assert!(form.name_invalid());
    assert!(form.column_invalid(row));

    form.set_name("Named".to_owned());
    form.set_column_title(row, "Col".to_owned());
    assert!(!form.name_invalid());
    assert!(!form.column_invalid(row));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn create_builds_board_with_empty_task_lists_and_selects_it() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    form.set_name("X".to_owned());
    let first = form.rows[0].id;
    form.set_column_title(first, "A".to_owned());
    let second = form.add_column(&ids);
    form.set_column_title(second, "B".to_owned());

    let mut store = BoardsState::new(vec![existing_board()]);
    let Ok(submission) = form.submit(&ids) else {
        panic!("expected valid submission");
    };
    assert!(store.apply(submission));

    assert_eq!(store.items.len(), 2);
    let board = &store.items[1];
    assert_eq!(board.title, "X");
    let titles: Vec<_> = board.columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert!(board.columns.iter().all(|c| c.tasks.is_empty()));
    assert_eq!(store.selected_index, 1);
    assert_ne!(board.id, 100);
}

#[test]
fn create_discards_tasks_from_seeded_columns() {
    let ids = generator();
    let board = existing_board();
    let form = BoardFormState::seeded(None, "Copy", &board.columns, &ids);
    let Ok(BoardSubmission::Create(created)) = form.submit(&ids) else {
        panic!("expected create submission");
    };
    assert!(created.columns.iter().all(|c| c.tasks.is_empty()));
}

#[test]
fn edit_preserves_task_lists_while_updating_titles() {
    let ids = generator();
    let board = existing_board();
    let mut form = BoardFormState::for_board(&board, &ids);
    form.set_name("Launch v2".to_owned());
    form.set_column_title(101, "Backlog".to_owned());

    let mut store = BoardsState::new(vec![board.clone()]);
    let Ok(submission) = form.submit(&ids) else {
        panic!("expected valid submission");
    };
    assert!(store.apply(submission));

    let updated = &store.items[0];
    assert_eq!(updated.id, 100);
    assert_eq!(updated.title, "Launch v2");
    assert_eq!(updated.columns[0].title, "Backlog");
    for (before, after) in board.columns.iter().zip(&updated.columns) {
        assert_eq!(before.tasks, after.tasks);
    }
    assert_eq!(store.items.len(), 1);
}

#[test]
fn removed_row_is_excluded_from_submission() {
    let ids = generator();
    let mut form = BoardFormState::for_board(&existing_board(), &ids);
    form.remove_column(102);
    let added = form.add_column(&ids);
    form.set_column_title(added, "Review".to_owned());

    let Ok(BoardSubmission::Update { columns, .. }) = form.submit(&ids) else {
        panic!("expected update submission");
    };
    let ids: Vec<_> = columns.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![101, 103, added]);
    assert!(columns[2].tasks.is_empty());
}

#[test]
fn submit_trims_name_and_titles() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    form.set_name("  Roadmap  ".to_owned());
    let row = form.rows[0].id;
    form.set_column_title(row, " Now ".to_owned());
    let Ok(BoardSubmission::Create(board)) = form.submit(&ids) else {
        panic!("expected create submission");
    };
    assert_eq!(board.title, "Roadmap");
    assert_eq!(board.columns[0].title, "Now");
}

#[test]
fn submit_with_all_rows_removed_creates_board_without_columns() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    form.set_name("Bare".to_owned());
    let row = form.rows[0].id;
    form.remove_column(row);
    let Ok(BoardSubmission::Create(board)) = form.submit(&ids) else {
        panic!("expected create submission");
    };
    assert!(board.columns.is_empty());
}

// =============================================================
// Commit
// =============================================================

#[test]
fn commit_with_blank_name_keeps_dialog_open_and_store_unchanged() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    let mut store = BoardsState::new(vec![existing_board()]);
    let before = store.clone();
    let mut toggled = Vec::new();

    let result = commit(&mut form, &mut store, &ids, |open| toggled.push(open));

    assert_eq!(result, Err(FormError::MissingBoardName));
    assert_eq!(store, before);
    assert!(toggled.is_empty());
    assert!(form.attempted);
    assert!(form.name_invalid());
}

#[test]
fn commit_create_appends_selects_and_closes_dialog() {
    let ids = generator();
    let mut form = BoardFormState::blank(&ids);
    form.set_name("X".to_owned());
    let row = form.rows[0].id;
    form.set_column_title(row, "A".to_owned());
    let mut store = BoardsState::new(vec![existing_board()]);
    let mut toggled = Vec::new();

    let result = commit(&mut form, &mut store, &ids, |open| toggled.push(open));

    assert_eq!(result, Ok(()));
    assert_eq!(toggled, vec![false]);
    assert_eq!(store.items.len(), 2);
    assert_eq!(store.selected().map(|b| b.title.as_str()), Some("X"));
}

#[test]
fn commit_edit_of_vanished_board_closes_dialog_without_store_change() {
    let ids = generator();
    let mut form = BoardFormState::for_board(&existing_board(), &ids);
    let mut store = BoardsState::new(vec![Board { id: 5, title: "Other".to_owned(), columns: vec![] }]);
    let before = store.clone();
    let mut toggled = Vec::new();

    let result = commit(&mut form, &mut store, &ids, |open| toggled.push(open));

    assert_eq!(result, Ok(()));
    assert_eq!(toggled, vec![false]);
    assert_eq!(store, before);
}
