use serde_yaml::Value;
use sitefeed_core::{
    local_date_stamp, FeedRepository, FeedService, PublicationRequest, Record, StoreError,
    UpdateRequest, YamlFeedRepository, PUBLICATIONS_FILE, UPDATES_FILE,
};
use std::path::Path;

#[test]
fn first_update_bootstraps_absent_file_and_second_prepends() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("_data")).unwrap();
    let service = FeedService::new(YamlFeedRepository::updates_in(dir.path()));

    let mut paper = UpdateRequest::new("New paper accepted!", "Details about the paper...");
    paper.kind = "publication".to_string();
    let persisted_paper = service.add_update(&paper).unwrap();

    service
        .add_update(&UpdateRequest::new("Talk scheduled", "Giving a talk"))
        .unwrap();

    let document = YamlFeedRepository::updates_in(dir.path()).load().unwrap();
    assert_eq!(document.len(), 2);
    assert_eq!(document[0].title(), Some("Talk scheduled"));
    assert_eq!(document[0].get_str("type"), Some("general"));
    assert_eq!(document[1].title(), Some("New paper accepted!"));
    assert_eq!(
        document[1].get_str("content"),
        Some("Details about the paper...")
    );
    assert_eq!(document[1].get_str("type"), Some("publication"));
    assert_eq!(document[1].get_str("link"), Some(""));
    assert_eq!(
        document[1].get_str("date"),
        Some(persisted_paper.date.as_str())
    );

    let field_names: Vec<&str> = document[1]
        .fields()
        .iter()
        .map(|(name, _)| name.as_str().unwrap())
        .collect();
    assert_eq!(field_names, ["title", "content", "date", "type", "link"]);
}

#[test]
fn two_appends_on_empty_file_stack_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("updates.yml");
    std::fs::write(&path, "").unwrap();
    let service = FeedService::new(YamlFeedRepository::new(&path));

    service
        .add_update(&UpdateRequest::new("First", "first body"))
        .unwrap();
    service
        .add_update(&UpdateRequest::new("Second", "second body"))
        .unwrap();

    let document = YamlFeedRepository::new(&path).load().unwrap();
    let titles: Vec<Option<&str>> = document.iter().map(Record::title).collect();
    assert_eq!(titles, [Some("Second"), Some("First")]);
}

#[test]
fn prepend_retains_existing_hand_edited_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("updates.yml");
    std::fs::write(
        &path,
        concat!(
            "- title: Legacy entry\n",
            "  content: Written by hand\n",
            "  date: 2023-09-01\n",
            "  type: general\n",
            "  link: ''\n",
            "  pinned: true\n",
        ),
    )
    .unwrap();
    let service = FeedService::new(YamlFeedRepository::new(&path));

    service
        .add_update(&UpdateRequest::new("Fresh entry", "Just added"))
        .unwrap();

    let document = YamlFeedRepository::new(&path).load().unwrap();
    assert_eq!(document.len(), 2);
    assert_eq!(document[0].title(), Some("Fresh entry"));
    assert_eq!(document[1].title(), Some("Legacy entry"));
    assert_eq!(document[1].get_str("date"), Some("2023-09-01"));
    assert_eq!(document[1].get("pinned"), Some(&Value::Bool(true)));
}

#[test]
fn update_date_is_generated_at_append_time() {
    let dir = tempfile::tempdir().unwrap();
    let service = FeedService::new(YamlFeedRepository::new(dir.path().join("updates.yml")));

    let before = local_date_stamp();
    let update = service
        .add_update(&UpdateRequest::new("Dated", "Body"))
        .unwrap();
    let after = local_date_stamp();

    // Either stamp is acceptable when the call straddles midnight.
    assert!(
        update.date == before || update.date == after,
        "unexpected date: {}",
        update.date
    );
}

#[test]
fn publication_keeps_caller_supplied_date() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("_data")).unwrap();
    let service = FeedService::new(YamlFeedRepository::publications_in(dir.path()));

    let publication = service
        .add_publication(&PublicationRequest::new(
            "Paper Title",
            "Author List",
            "Conference Name",
            "2024-01-01",
        ))
        .unwrap();
    assert_eq!(publication.date, "2024-01-01");

    let document = YamlFeedRepository::publications_in(dir.path())
        .load()
        .unwrap();
    assert_eq!(document[0].get_str("date"), Some("2024-01-01"));
    assert_eq!(document[0].get_str("type"), Some("conference"));
    assert_eq!(document[0].get_str("venue"), Some("Conference Name"));
}

#[test]
fn returned_record_matches_persisted_head() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("updates.yml");
    let service = FeedService::new(YamlFeedRepository::new(&path));

    let update = service
        .add_update(&UpdateRequest::new("Head check", "Body"))
        .unwrap();

    let document = YamlFeedRepository::new(&path).load().unwrap();
    assert_eq!(document[0], Record::from_entry(&update).unwrap());
}

#[test]
fn append_on_malformed_file_propagates_error_and_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("updates.yml");
    std::fs::write(&path, "not: [valid\n").unwrap();
    let service = FeedService::new(YamlFeedRepository::new(&path));

    let err = service
        .add_update(&UpdateRequest::new("Doomed", "Body"))
        .unwrap_err();

    assert!(matches!(err, StoreError::Yaml(_)), "unexpected: {err}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "not: [valid\n");
}

#[test]
fn repositories_resolve_fixed_data_paths() {
    let updates = YamlFeedRepository::updates_in("/site");
    assert_eq!(updates.path(), Path::new("/site").join(UPDATES_FILE));

    let publications = YamlFeedRepository::publications_in("/site");
    assert_eq!(
        publications.path(),
        Path::new("/site").join(PUBLICATIONS_FILE)
    );
}
