//! Tests for Roster operations
//!
//! These tests verify:
//! - add / update / delete semantics and id assignment
//! - Failed operations leave the source roster untouched
//! - Stable sorting in both directions and the direction toggle
//! - Status filtering

use roster::config::IdStrategy;
use roster::member::{IdGenerator, Member, MemberDraft, MemberId, MemberPatch, Status};
use roster::roster::{
    filter_by_status, sort_by_key, Direction, Roster, SortKey, SortState, StatusFilter,
};
use roster::validate::{Field, ValidationRules};
use roster::RosterError;

// =============================================================================
// Helper Functions
// =============================================================================

fn rules() -> ValidationRules {
    ValidationRules::default()
}

fn ids() -> IdGenerator {
    IdGenerator::new(IdStrategy::Sequential)
}

fn member(id: u64, name: &str, age: u32, status: Status) -> Member {
    Member {
        id: MemberId::Seq(id),
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase()),
        age,
        status,
    }
}

fn budi_roster() -> Roster {
    Roster::from_members(vec![member(1, "Budi", 25, Status::Active)]).unwrap()
}

fn sample_roster() -> Roster {
    Roster::from_members(vec![
        member(1, "Citra", 30, Status::Active),
        member(2, "Ani", 25, Status::Inactive),
        member(3, "Budi", 30, Status::Active),
        member(4, "Dewi", 25, Status::Active),
        member(5, "Eko", 41, Status::Inactive),
    ])
    .unwrap()
}

fn names(members: &[Member]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_assigns_next_sequential_id() {
    let roster = budi_roster();
    let draft = MemberDraft::new("Ani", "ani@email.com", "30", "Inactive");

    let (next, added) = roster.add(&draft, &rules(), &ids()).unwrap();

    assert_eq!(added.id, MemberId::Seq(2));
    assert_eq!(next.len(), 2);
    assert_eq!(next.members()[1], added);
    assert_eq!(added.status, Status::Inactive);
    // Source roster untouched
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_add_to_empty_roster_starts_at_one() {
    let draft = MemberDraft::new("Ani", "ani@email.com", "30", "Active");
    let (_, added) = Roster::new().add(&draft, &rules(), &ids()).unwrap();
    assert_eq!(added.id, MemberId::Seq(1));
}

#[test]
fn test_add_uses_max_id_not_count() {
    let roster = Roster::from_members(vec![
        member(7, "Budi", 25, Status::Active),
        member(3, "Ani", 30, Status::Active),
    ])
    .unwrap();
    let draft = MemberDraft::new("Citra", "citra@email.com", "22", "Active");

    let (_, added) = roster.add(&draft, &rules(), &ids()).unwrap();

    assert_eq!(added.id, MemberId::Seq(8));
}

#[test]
fn test_add_after_largest_id_takes_lowest_free_id() {
    let roster = Roster::from_members(vec![
        member(1, "Budi", 25, Status::Active),
        member(u64::MAX, "Ani", 30, Status::Active),
        member(2, "Citra", 22, Status::Active),
    ])
    .unwrap();
    let draft = MemberDraft::new("Dewi", "dewi@email.com", "28", "Active");

    let (next, added) = roster.add(&draft, &rules(), &ids()).unwrap();

    assert_eq!(added.id, MemberId::Seq(3));
    let (_, again) = next.add(&draft, &rules(), &ids()).unwrap();
    assert_eq!(again.id, MemberId::Seq(4));
}

#[test]
fn test_add_counts_numeric_string_ids() {
    let mut stored = member(0, "Budi", 25, Status::Active);
    stored.id = MemberId::Token("5".to_string());
    let roster = Roster::from_members(vec![stored]).unwrap();
    let draft = MemberDraft::new("Ani", "ani@email.com", "30", "Active");

    let (_, added) = roster.add(&draft, &rules(), &ids()).unwrap();

    assert_eq!(added.id, MemberId::Seq(6));
}

#[test]
fn test_add_with_uuid_ids() {
    let generator = IdGenerator::new(IdStrategy::Uuid);
    let draft = MemberDraft::new("Ani", "ani@email.com", "30", "Active");

    let (next, first) = Roster::new().add(&draft, &rules(), &generator).unwrap();
    let (_, second) = next.add(&draft, &rules(), &generator).unwrap();

    assert!(matches!(first.id, MemberId::Token(_)));
    assert_ne!(first.id, second.id);
}

#[test]
fn test_add_trims_text_fields() {
    let draft = MemberDraft::new("  Ani  ", " ani@email.com ", " 30 ", "Active");
    let (_, added) = Roster::new().add(&draft, &rules(), &ids()).unwrap();

    assert_eq!(added.name, "Ani");
    assert_eq!(added.email, "ani@email.com");
}

#[test]
fn test_add_invalid_candidates_rejected() {
    let roster = budi_roster();
    let invalid = [
        MemberDraft::new("", "ani@email.com", "30", "Active"),
        MemberDraft::new("Ani", "ani.email.com", "30", "Active"),
        MemberDraft::new("Ani", "ani@email.com", "0", "Active"),
        MemberDraft::new("Ani", "ani@email.com", "-2", "Active"),
        MemberDraft::new("Ani", "ani@email.com", "30.5", "Active"),
    ];

    for draft in &invalid {
        let err = roster.add(draft, &rules(), &ids()).unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)), "{:?}", draft);
    }
    assert_eq!(roster, budi_roster());
}

#[test]
fn test_add_validation_error_carries_field_messages() {
    let draft = MemberDraft::new("", "nope", "30", "Active");
    match Roster::new().add(&draft, &rules(), &ids()) {
        Err(RosterError::Validation(errors)) => {
            assert_eq!(errors.fields(), vec![Field::Name, Field::Email]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_patches_only_given_fields() {
    let roster = budi_roster();
    let (next, updated) = roster
        .update(&MemberId::Seq(1), &MemberPatch::default().age("26"), &rules())
        .unwrap();

    assert_eq!(updated.id, MemberId::Seq(1));
    assert_eq!(updated.age, 26);
    assert_eq!(updated.name, "Budi");
    assert_eq!(updated.email, "budi@email.com");
    assert_eq!(updated.status, Status::Active);
    assert_eq!(next.members(), &[updated]);
}

#[test]
fn test_update_preserves_position() {
    let roster = sample_roster();
    let (next, _) = roster
        .update(&MemberId::Seq(3), &MemberPatch::default().name("Bima"), &rules())
        .unwrap();

    assert_eq!(names(next.members()), vec!["Citra", "Ani", "Bima", "Dewi", "Eko"]);
}

#[test]
fn test_update_trims_like_add() {
    let roster = budi_roster();
    let patch = MemberPatch::default().name("  Budi Santoso  ").email("  budi@new.com ");
    let (_, updated) = roster.update(&MemberId::Seq(1), &patch, &rules()).unwrap();

    assert_eq!(updated.name, "Budi Santoso");
    assert_eq!(updated.email, "budi@new.com");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let roster = budi_roster();
    let err = roster
        .update(&MemberId::Seq(99), &MemberPatch::default().age("30"), &rules())
        .unwrap_err();

    assert!(matches!(err, RosterError::NotFound(MemberId::Seq(99))));
}

#[test]
fn test_update_invalid_patch_leaves_roster_unchanged() {
    let roster = budi_roster();
    for patch in [
        MemberPatch::default().name("   "),
        MemberPatch::default().email("budi@"),
        MemberPatch::default().age("0"),
        MemberPatch::default().age("abc"),
        MemberPatch::default().status("Sometimes"),
    ] {
        let err = roster.update(&MemberId::Seq(1), &patch, &rules()).unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
    }
    assert_eq!(roster, budi_roster());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_record() {
    let roster = sample_roster();
    let (next, removed) = roster.delete(&MemberId::Seq(2)).unwrap();

    assert_eq!(removed.name, "Ani");
    assert_eq!(names(next.members()), vec!["Citra", "Budi", "Dewi", "Eko"]);
    assert_eq!(roster.len(), 5);
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let err = budi_roster().delete(&MemberId::Token("ghost".into())).unwrap_err();
    assert!(matches!(err, RosterError::NotFound(_)));
}

#[test]
fn test_add_then_delete_restores_prior_state() {
    let roster = sample_roster();
    let draft = MemberDraft::new("Fajar", "fajar@email.com", "19", "Active");

    let (added, member) = roster.add(&draft, &rules(), &ids()).unwrap();
    let (restored, _) = added.delete(&member.id).unwrap();

    assert_eq!(restored, roster);
}

#[test]
fn test_numeric_string_id_reachable_by_typed_id() {
    let mut stored = member(0, "Budi", 25, Status::Active);
    stored.id = MemberId::Token("5".to_string());
    let roster = Roster::from_members(vec![stored]).unwrap();
    let typed: MemberId = "5".parse().unwrap();

    assert_eq!(roster.get(&typed).unwrap().name, "Budi");

    let (next, updated) = roster
        .update(&typed, &MemberPatch::default().age("26"), &rules())
        .unwrap();
    // The stored form of the id is kept
    assert_eq!(updated.id, MemberId::Token("5".to_string()));
    assert_eq!(updated.age, 26);

    let (empty, removed) = next.delete(&typed).unwrap();
    assert_eq!(removed.name, "Budi");
    assert!(empty.is_empty());
}

#[test]
fn test_padded_string_id_is_not_an_integer() {
    let mut stored = member(0, "Budi", 25, Status::Active);
    stored.id = MemberId::Token("05".to_string());
    let roster = Roster::from_members(vec![stored]).unwrap();

    assert!(roster.get(&MemberId::Seq(5)).is_err());
    assert_eq!(roster.get(&"05".parse().unwrap()).unwrap().name, "Budi");
}

#[test]
fn test_from_members_rejects_number_and_string_of_same_id() {
    let mut as_text = member(0, "Ani", 30, Status::Active);
    as_text.id = MemberId::Token("1".to_string());

    let err = Roster::from_members(vec![member(1, "Budi", 25, Status::Active), as_text])
        .unwrap_err();

    assert!(matches!(err, RosterError::Parse(_)));
}

#[test]
fn test_from_members_rejects_duplicate_ids() {
    let err = Roster::from_members(vec![
        member(1, "Budi", 25, Status::Active),
        member(1, "Ani", 30, Status::Active),
    ])
    .unwrap_err();

    assert!(matches!(err, RosterError::Parse(_)));
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_by_name_ascending_and_descending() {
    let roster = sample_roster();

    let asc = sort_by_key(roster.members(), SortKey::Name, Direction::Ascending);
    assert_eq!(names(&asc), vec!["Ani", "Budi", "Citra", "Dewi", "Eko"]);

    let desc = sort_by_key(roster.members(), SortKey::Name, Direction::Descending);
    assert_eq!(names(&desc), vec!["Eko", "Dewi", "Citra", "Budi", "Ani"]);
}

#[test]
fn test_sort_by_age_is_numeric_and_stable() {
    let roster = sample_roster();

    let asc = sort_by_key(roster.members(), SortKey::Age, Direction::Ascending);
    // 25: Ani before Dewi, 30: Citra before Budi (insertion order)
    assert_eq!(names(&asc), vec!["Ani", "Dewi", "Citra", "Budi", "Eko"]);

    let desc = sort_by_key(roster.members(), SortKey::Age, Direction::Descending);
    assert_eq!(names(&desc), vec!["Eko", "Citra", "Budi", "Ani", "Dewi"]);
}

#[test]
fn test_sort_numeric_not_lexical() {
    let members = vec![
        member(1, "A", 100, Status::Active),
        member(2, "B", 9, Status::Active),
        member(3, "C", 25, Status::Active),
    ];
    let sorted = sort_by_key(&members, SortKey::Age, Direction::Ascending);
    assert_eq!(names(&sorted), vec!["B", "C", "A"]);
}

#[test]
fn test_sort_by_status_groups_active_first() {
    let sorted = sample_roster().sorted(SortKey::Status, Direction::Ascending);
    assert_eq!(names(&sorted), vec!["Citra", "Budi", "Dewi", "Ani", "Eko"]);
}

#[test]
fn test_sort_does_not_reorder_canonical_roster() {
    let roster = sample_roster();
    let _ = roster.sorted(SortKey::Name, Direction::Ascending);
    assert_eq!(names(roster.members()), vec!["Citra", "Ani", "Budi", "Dewi", "Eko"]);
}

#[test]
fn test_sort_state_toggles_per_key() {
    let mut state = SortState::new();

    assert_eq!(state.current(SortKey::Age), None);
    assert_eq!(state.toggle(SortKey::Age), Direction::Ascending);
    assert_eq!(state.toggle(SortKey::Age), Direction::Descending);
    // Other keys keep their own state
    assert_eq!(state.toggle(SortKey::Name), Direction::Ascending);
    assert_eq!(state.toggle(SortKey::Age), Direction::Ascending);
    assert_eq!(state.current(SortKey::Name), Some(Direction::Ascending));

    state.reset();
    assert_eq!(state.toggle(SortKey::Age), Direction::Ascending);
}

#[test]
fn test_sort_key_parsing() {
    assert_eq!("age".parse::<SortKey>().unwrap(), SortKey::Age);
    assert_eq!("Nama".parse::<SortKey>().unwrap(), SortKey::Name);
    assert_eq!("umur".parse::<SortKey>().unwrap(), SortKey::Age);
    assert!("id".parse::<SortKey>().is_err());
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_filter_all_is_identity() {
    let roster = sample_roster();
    assert_eq!(filter_by_status(roster.members(), StatusFilter::All), roster.members());
}

#[test]
fn test_filter_by_status_keeps_order() {
    let roster = sample_roster();

    let active = roster.filtered(StatusFilter::Only(Status::Active));
    assert_eq!(names(&active), vec!["Citra", "Budi", "Dewi"]);

    let inactive = roster.filtered(StatusFilter::Only(Status::Inactive));
    assert_eq!(names(&inactive), vec!["Ani", "Eko"]);
}

#[test]
fn test_filter_parsing() {
    assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!("semua".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!(
        "Active".parse::<StatusFilter>().unwrap(),
        StatusFilter::Only(Status::Active)
    );
    assert_eq!(
        "Tidak Aktif".parse::<StatusFilter>().unwrap(),
        StatusFilter::Only(Status::Inactive)
    );
    assert!("archived".parse::<StatusFilter>().is_err());
}
