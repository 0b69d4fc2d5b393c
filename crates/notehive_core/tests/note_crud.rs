use notehive_core::{FixedClock, InMemoryNoteRepository, InvalidArgument, NoteRepository};
use std::collections::BTreeSet;
use time::macros::date;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn add_note_stores_the_note_and_returns_it() {
    let repo = InMemoryNoteRepository::new();

    let added = repo
        .add_note(
            Some("First note".to_string()),
            Some("Body of the first note".to_string()),
            &tags(&["rust", "Test"]),
        )
        .unwrap();

    assert!(added.id() > 0);
    assert_eq!(added.title(), "First note");
    assert_eq!(added.text(), "Body of the first note");
    assert_eq!(
        added.tags().iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["rust", "test"]
    );

    let all = repo.get_all_notes();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], added);
}

#[test]
fn add_note_assigns_strictly_increasing_ids() {
    let repo = InMemoryNoteRepository::new();

    let first = repo.add_note(None, None, &[]).unwrap();
    let second = repo.add_note(None, None, &[]).unwrap();
    let third = repo.add_note(None, None, &[]).unwrap();

    assert_eq!(first.id(), 1);
    assert!(second.id() > first.id());
    assert!(third.id() > second.id());
}

#[test]
fn add_note_substitutes_defaults_for_absent_title_and_text() {
    let repo = InMemoryNoteRepository::new();

    let added = repo.add_note(None, None, &[]).unwrap();

    assert_eq!(added.title(), "title");
    assert_eq!(added.text(), "text");
    assert!(added.tags().is_empty());
}

#[test]
fn add_note_rejects_blank_tag_without_partial_insert() {
    let repo = InMemoryNoteRepository::new();

    let err = repo
        .add_note(
            Some("Shopping list".to_string()),
            Some("Coffee".to_string()),
            &tags(&["", "groceries", "food"]),
        )
        .unwrap_err();

    assert!(matches!(err, InvalidArgument::BlankTag(_)));
    assert!(repo.get_all_notes().is_empty());

    // The failed call must not burn an id either.
    let next = repo.add_note(None, None, &[]).unwrap();
    assert_eq!(next.id(), 1);
}

#[test]
fn add_note_rejects_whitespace_only_tag() {
    let repo = InMemoryNoteRepository::new();

    let err = repo
        .add_note(None, None, &tags(&["shopping", "   ", "list"]))
        .unwrap_err();

    assert!(matches!(err, InvalidArgument::BlankTag(_)));
    assert!(repo.get_all_notes().is_empty());
}

#[test]
fn get_note_by_id_finds_the_stored_note() {
    let repo = InMemoryNoteRepository::new();
    repo.add_note(Some("Sunday chores".to_string()), None, &[])
        .unwrap();
    let monday = repo
        .add_note(Some("Monday chores".to_string()), None, &[])
        .unwrap();

    let found = repo.get_note_by_id(monday.id()).unwrap();
    assert_eq!(found.title(), "Monday chores");
}

#[test]
fn get_note_by_id_returns_none_for_unknown_id() {
    let repo = InMemoryNoteRepository::new();
    assert!(repo.get_note_by_id(999).is_none());
}

#[test]
fn get_all_notes_returns_every_stored_note() {
    let repo = InMemoryNoteRepository::new();
    let mut expected = BTreeSet::new();
    for title in ["one", "two", "three", "four"] {
        let note = repo.add_note(Some(title.to_string()), None, &[]).unwrap();
        expected.insert(note.id());
    }

    let actual: BTreeSet<_> = repo.get_all_notes().iter().map(|note| note.id()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn get_all_notes_is_empty_for_a_fresh_repository() {
    let repo = InMemoryNoteRepository::new();
    assert!(repo.get_all_notes().is_empty());
    assert!(repo.is_empty());
}

#[test]
fn update_note_text_replaces_the_text() {
    let repo = InMemoryNoteRepository::new();
    let note = repo
        .add_note(Some("Test".to_string()), Some("Old text".to_string()), &[])
        .unwrap();

    let updated = repo
        .update_note_text(note.id(), Some("new".to_string()))
        .unwrap();

    assert!(updated);
    assert_eq!(repo.get_note_by_id(note.id()).unwrap().text(), "new");
}

#[test]
fn update_note_text_returns_false_for_unknown_id() {
    let repo = InMemoryNoteRepository::new();
    let updated = repo
        .update_note_text(999, Some("whatever".to_string()))
        .unwrap();
    assert!(!updated);
}

#[test]
fn update_note_text_rejects_absent_text_on_existing_note() {
    let repo = InMemoryNoteRepository::new();
    let note = repo
        .add_note(None, Some("keep me".to_string()), &[])
        .unwrap();

    let err = repo.update_note_text(note.id(), None).unwrap_err();

    assert_eq!(err, InvalidArgument::MissingText);
    assert_eq!(repo.get_note_by_id(note.id()).unwrap().text(), "keep me");
}

#[test]
fn delete_note_is_terminal_for_that_id() {
    let repo = InMemoryNoteRepository::new();
    let note = repo
        .add_note(Some("Remove".to_string()), None, &tags(&["x"]))
        .unwrap();

    assert!(repo.delete_note(note.id()));
    assert!(!repo.delete_note(note.id()));
    assert!(repo.get_note_by_id(note.id()).is_none());
}

#[test]
fn delete_note_returns_false_for_unknown_id() {
    let repo = InMemoryNoteRepository::new();
    assert!(!repo.delete_note(999));
}

#[test]
fn ids_are_never_reused_after_delete() {
    let repo = InMemoryNoteRepository::new();
    let first = repo.add_note(None, None, &[]).unwrap();
    repo.delete_note(first.id());

    let second = repo.add_note(None, None, &[]).unwrap();
    assert!(second.id() > first.id());
}

#[test]
fn creation_date_comes_from_the_supplied_clock() {
    let repo = InMemoryNoteRepository::with_clock(Box::new(FixedClock(date!(2024 - 05 - 01))));

    let note = repo.add_note(None, None, &[]).unwrap();

    assert_eq!(note.creation_date(), date!(2024 - 05 - 01));
    assert_eq!(
        repo.get_note_by_id(note.id()).unwrap().creation_date(),
        date!(2024 - 05 - 01)
    );
}

#[test]
fn two_repositories_are_fully_independent() {
    let left = InMemoryNoteRepository::new();
    let right = InMemoryNoteRepository::new();

    let in_left = left.add_note(Some("only left".to_string()), None, &[]).unwrap();

    assert!(right.get_note_by_id(in_left.id()).is_none());
    assert_eq!(right.add_note(None, None, &[]).unwrap().id(), 1);
}

#[test]
fn returned_notes_are_snapshots_not_live_state() {
    let repo = InMemoryNoteRepository::new();
    let snapshot = repo
        .add_note(None, Some("before".to_string()), &tags(&["old"]))
        .unwrap();

    repo.update_note_text(snapshot.id(), Some("after".to_string()))
        .unwrap();
    repo.add_tag_to_note(snapshot.id(), "new").unwrap();

    // The earlier snapshot is unaffected by later repository mutations.
    assert_eq!(snapshot.text(), "before");
    assert!(!snapshot.tags().contains("new"));

    let fresh = repo.get_note_by_id(snapshot.id()).unwrap();
    assert_eq!(fresh.text(), "after");
    assert!(fresh.tags().contains("new"));
}
