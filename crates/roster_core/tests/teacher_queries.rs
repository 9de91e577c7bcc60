use roster_core::db::open_db_in_memory;
use roster_core::{
    RepoError, SqliteTeacherRepository, Teacher, TeacherRepository, TeacherService,
};

fn seed(repo: &SqliteTeacherRepository<'_>) -> Vec<Teacher> {
    let rows = [
        Teacher::new("t-1", "Ali", "Top", 45, "professor"),
        Teacher::new("t-2", "John", "Stone", 30, "lecturer"),
        Teacher::new("t-3", "Alice", "Top", 50, "professor"),
        Teacher::new("t-4", "Bob", "Hill", 40, "professor"),
        Teacher::new("t-5", "ali", "Bottom", 35, "professor"),
    ];
    rows.iter().map(|t| repo.save(t).unwrap()).collect()
}

#[test]
fn save_generates_document_id_and_reloads() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&Teacher::new("t-9", "Mira", "Kaya", 38, "lecturer"))
        .unwrap();

    let doc_id = saved.id.clone().expect("save must assign a document id");
    let loaded = repo.get(&doc_id).unwrap().unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn save_with_existing_id_replaces_document() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&Teacher::new("t-9", "Mira", "Kaya", 38, "lecturer"))
        .unwrap();

    let mut replacement = saved.clone();
    replacement.title = "professor".to_string();
    let updated = repo.save(&replacement).unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.title, "professor");
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn find_by_teacher_id_returns_all_matches() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    repo.save(&Teacher::new("shared", "A", "A", 1, "x")).unwrap();
    repo.save(&Teacher::new("shared", "B", "B", 2, "y")).unwrap();

    let found = repo.find_by_teacher_id("shared").unwrap();
    assert_eq!(found.len(), 2);
    assert!(repo.find_by_teacher_id("absent").unwrap().is_empty());
}

#[test]
fn age_less_than_is_strict() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    seed(&repo);

    let under_40 = repo.find_by_age_less_than(40).unwrap();
    let ages: Vec<i64> = under_40.iter().map(|t| t.age).collect();
    assert_eq!(ages, vec![30, 35], "40 itself must be excluded");
}

#[test]
fn age_between_excludes_both_bounds() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    seed(&repo);

    let between = repo.find_by_age_between(30, 45).unwrap();
    let ages: Vec<i64> = between.iter().map(|t| t.age).collect();
    assert_eq!(ages, vec![35, 40], "30 and 45 must both be excluded");
}

#[test]
fn name_or_lastname_orders_by_age_descending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    seed(&repo);

    let found = repo
        .find_by_name_or_lastname_order_by_age_desc("Ali", "Top")
        .unwrap();
    let ages: Vec<i64> = found.iter().map(|t| t.age).collect();
    assert_eq!(ages, vec![50, 45], "Alice Top (50) then Ali Top (45)");
}

#[test]
fn first3_by_title_caps_result_cardinality() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    seed(&repo);

    let professors = repo.find_first3_by_title("professor").unwrap();
    assert_eq!(professors.len(), 3, "four match but only 3 may return");
    // Insertion order: Ali, Alice, Bob.
    assert_eq!(professors[0].name, "Ali");
    assert_eq!(professors[2].name, "Bob");
}

#[test]
fn name_prefix_match_is_literal() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    seed(&repo);
    repo.save(&Teacher::new("t-6", "Al%wild", "X", 20, "y"))
        .unwrap();

    // Case-sensitive: "ali" (t-5) must not match.
    let al = repo.find_by_name_starting_with("Al").unwrap();
    let names: Vec<&str> = al.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Ali", "Alice", "Al%wild"]);

    // Wildcard characters in the prefix must match literally.
    let wild = repo.find_by_name_starting_with("Al%").unwrap();
    assert_eq!(wild.len(), 1);
    assert_eq!(wild[0].name, "Al%wild");

    let lower = repo.find_by_name_starting_with("al").unwrap();
    let names: Vec<&str> = lower.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["ali"]);
}

#[test]
fn name_regex_honors_inline_case_flag() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    seed(&repo);

    let sensitive = repo.find_by_name_regex("^Ali$").unwrap();
    assert_eq!(sensitive.len(), 1);
    assert_eq!(sensitive[0].name, "Ali");

    let insensitive = repo.find_by_name_regex("(?i)^ali$").unwrap();
    let names: Vec<&str> = insensitive.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Ali", "ali"]);
}

#[test]
fn invalid_regex_is_a_typed_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();

    let err = repo.find_by_name_regex("(unclosed").unwrap_err();
    assert!(matches!(err, RepoError::InvalidRegex { .. }));
}

#[test]
fn exact_name_match_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    seed(&repo);

    assert_eq!(repo.find_by_exact_name("Ali").unwrap().len(), 1);
    assert_eq!(repo.find_by_exact_name("ali").unwrap().len(), 1);
    assert!(repo.find_by_exact_name("ALI").unwrap().is_empty());
}

#[test]
fn delete_by_teacher_id_removes_all_matches_and_reports_count() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    repo.save(&Teacher::new("shared", "A", "A", 1, "x")).unwrap();
    repo.save(&Teacher::new("shared", "B", "B", 2, "y")).unwrap();
    repo.save(&Teacher::new("other", "C", "C", 3, "z")).unwrap();

    assert_eq!(repo.delete_by_teacher_id("shared").unwrap(), 2);
    assert_eq!(repo.delete_by_teacher_id("shared").unwrap(), 0);
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeacherRepository::try_new(&conn).unwrap();
    let service = TeacherService::new(repo);

    let saved = service
        .save(&Teacher::new("t-1", "Ali", "Top", 45, "professor"))
        .unwrap();
    let found = service.find_by_teacher_id("t-1").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, saved.id);
}
