//! End-to-end list flows through the DOM-free core.

use roster_api_models::{ImportResult, PageResponse, Student};
use roster_ui::core::config::derive_api_base_url;
use roster_ui::core::banner::Banner;
use roster_ui::core::cache::Resolution;
use roster_ui::core::error::{ApiError, INVALID_CREDENTIALS};
use roster_ui::core::list_state::ListState;
use roster_ui::core::mutation::MutationKind;
use roster_ui::core::query::{ListPatch, PageSize, SortKey, SortOrder, StatusFilter};
use roster_ui::features::students::state::{StudentColumn, StudentQuery, export_query};

fn student(id: i64, first: &str, active: bool) -> Student {
    Student {
        id: Some(id),
        first_name: first.into(),
        last_name: "Doe".into(),
        email: format!("{}@test.com", first.to_lowercase()),
        active: Some(active),
        ..Student::default()
    }
}

fn page_of(rows: Vec<Student>) -> PageResponse<Student> {
    PageResponse {
        total_elements: rows.len() as u64,
        content: rows,
        total_pages: 1,
        number: 0,
        size: 10,
    }
}

fn loaded(query: StudentQuery, rows: Vec<Student>) -> ListState<Student> {
    let mut state = ListState::default();
    state.observe_query(query);
    let ticket = state.begin_fetch().expect("first fetch");
    assert_eq!(state.apply_page(&ticket, page_of(rows)), Resolution::Applied);
    state
}

#[test]
fn default_parameters_are_omitted_and_round_trip() {
    let default = StudentQuery::default();
    assert_eq!(default.to_query_string(), "");
    let query = default
        .apply(ListPatch::search("john smith"))
        .apply(ListPatch::page_size(PageSize::new(25).expect("allowed size")))
        .toggle_sort(StudentColumn::Email)
        .apply(ListPatch::page(2));
    let written = query.to_query_string();
    assert!(!written.contains("order="));
    assert!(!written.contains("status="));
    assert_eq!(StudentQuery::from_query_str(&written), query);
}

#[test]
fn sort_toggle_flips_then_switches_column() {
    let by_email = StudentQuery::default().toggle_sort(StudentColumn::Email);
    assert_eq!(by_email.sort, SortKey::Column(StudentColumn::Email));
    assert_eq!(by_email.order, SortOrder::Asc);
    let flipped = by_email.toggle_sort(StudentColumn::Email);
    assert_eq!(flipped.order, SortOrder::Desc);
    let by_section = flipped.toggle_sort(StudentColumn::Section);
    assert_eq!(by_section.sort, SortKey::Column(StudentColumn::Section));
    assert_eq!(by_section.order, SortOrder::Asc);
}

#[test]
fn filter_changes_reset_page_and_clear_selection() {
    let on_page_three = StudentQuery::default().apply(ListPatch::page(3));
    let mut state = loaded(on_page_three.clone(), vec![student(1, "John", true)]);
    state.toggle_row(1);

    let changes = [
        on_page_three.apply(ListPatch::search("x")),
        on_page_three.apply(ListPatch::status(StatusFilter::Inactive)),
        on_page_three.toggle_sort(StudentColumn::Phone),
        on_page_three.apply(ListPatch::page_size(PageSize::new(50).expect("allowed size"))),
    ];
    for next in changes {
        assert_eq!(next.page, 0);
        let mut state = state.clone();
        assert!(state.observe_query(next));
        assert!(state.selection.is_empty());
    }
}

#[test]
fn toggle_all_tracks_the_page_at_call_time() {
    let mut state = loaded(
        StudentQuery::default(),
        vec![student(1, "John", true), student(2, "Jane", false)],
    );
    state.toggle_all();
    assert_eq!(state.selection.ids(), vec![1, 2]);
    state.toggle_all();
    assert!(state.selection.is_empty());

    state.toggle_all();
    state.complete_mutation(MutationKind::Save, true);
    let ticket = state.begin_fetch().expect("refetch after save");
    state.apply_page(
        &ticket,
        page_of(vec![student(1, "John", true), student(3, "Ann", true)]),
    );
    assert_eq!(state.selection.ids(), vec![1]);
    state.toggle_all();
    assert_eq!(state.selection.ids(), vec![1, 3]);
}

#[test]
fn mixed_selection_offers_both_bulk_toggles_then_refetches() {
    let mut state = loaded(
        StudentQuery::default(),
        vec![student(1, "John", true), student(2, "Jane", false)],
    );
    state.toggle_all();
    let summary = state.summary();
    assert_eq!(summary.count, 2);
    assert!(summary.can_activate());
    assert!(summary.can_deactivate());

    assert!(state.start_mutation(MutationKind::BulkDeactivate));
    assert!(!state.start_mutation(MutationKind::BulkDeactivate));
    state.complete_mutation(MutationKind::BulkDeactivate, true);
    assert!(state.selection.is_empty());
    assert!(state.view().stale);
    assert!(state.begin_fetch().is_some());
}

#[test]
fn csv_import_banner_reports_blank_row() {
    let body = r#"{"imported":3,"failed":1,"errors":["Row 4: firstName and email are required"]}"#;
    let result: ImportResult = serde_json::from_str(body).expect("import result");
    let banner = Banner::from(result);
    assert_eq!(banner.counters(), vec!["3 imported", "1 failed"]);
    assert_eq!(
        banner.errors(),
        ["Row 4: firstName and email are required".to_string()]
    );
}

#[test]
fn export_carries_search_without_status_when_all() {
    let query = StudentQuery::default().apply(ListPatch::search("john"));
    assert_eq!(query.status, StatusFilter::All);
    let params = export_query(&query);
    assert_eq!(params, "search=john");
    assert!(!params.contains("active"));
}

#[test]
fn unauthorized_outside_auth_expires_session_but_login_does_not() {
    let listing = ApiError::from_response("/students?page=0", 401, "");
    assert_eq!(listing, ApiError::SessionExpired);
    assert!(listing.is_session_expired());

    let login = ApiError::from_response("/auth/login", 401, "");
    assert!(!login.is_session_expired());
    assert_eq!(login.display_message("unused"), INVALID_CREDENTIALS);

    let refused = ApiError::from_response("/students", 403, "");
    assert!(!refused.is_session_expired());
}

#[test]
fn abandoned_key_response_never_reaches_the_screen() {
    let mut state = ListState::<Student>::default();
    state.observe_query(StudentQuery::default());
    let first = state.begin_fetch().expect("first fetch");
    state.observe_query(StudentQuery::default().apply(ListPatch::page(1)));
    let second = state.begin_fetch().expect("second fetch");

    assert_eq!(
        state.apply_page(&first, page_of(vec![student(1, "John", true)])),
        Resolution::Cached
    );
    assert!(state.view().loading);
    assert_eq!(
        state.apply_page(&second, page_of(vec![student(11, "Zoe", true)])),
        Resolution::Applied
    );
    assert_eq!(state.visible_ids(), vec![11]);
}

#[test]
fn legacy_and_malformed_links_still_open_a_usable_list() {
    let query = StudentQuery::from_query_str("?status=true&size=7&page=x&tab=archive");
    assert_eq!(query.status, StatusFilter::Active);
    assert_eq!(query.page_size.get(), 10);
    assert_eq!(query.page, 0);

    let next = query.apply(ListPatch::page(1));
    let written = next.merge_into("status=true&size=7&page=x&tab=archive");
    assert!(written.starts_with("tab=archive"));
    assert_eq!(StudentQuery::from_query_str(&written), next);
}

#[test]
fn dev_server_talks_to_the_api_port() {
    assert_eq!(
        derive_api_base_url("http:", "localhost", "3000"),
        "http://localhost:8080/api"
    );
}
