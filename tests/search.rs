use std::time::{Duration, Instant};

use edu_admin::list::{
    ColumnDef, DebouncedSearch, FilterDef, ListController, ListQueryState, PageSizes,
};

const DEBOUNCE: Duration = Duration::from_millis(300);
const COLUMNS: [ColumnDef; 1] = [ColumnDef::new("title", "Title").sortable()];
const FILTERS: [FilterDef; 1] = [FilterDef::new("category", "Category")];

fn controller(query: &str) -> ListController {
    let mut controller = ListController::new(
        "/courses",
        ListQueryState::new(10),
        &COLUMNS,
        &FILTERS,
        PageSizes::default(),
        DEBOUNCE,
    );
    controller.sync_query(query);
    controller
}

#[test]
fn fast_keystrokes_navigate_once() {
    let t0 = Instant::now();
    let mut controller = controller("page=4&category=science");
    let mut navigations = Vec::new();

    for (offset, text) in [(0, "a"), (100, "ab"), (200, "abc")] {
        let now = t0 + Duration::from_millis(offset);
        controller.on_search_input(text, now);
        navigations.extend(controller.tick(now));
    }
    for offset in [350, 450, 500, 2_000] {
        navigations.extend(controller.tick(t0 + Duration::from_millis(offset)));
    }

    assert_eq!(navigations.len(), 1);
    assert_eq!(
        navigations[0].href,
        "/courses?page=1&perPage=10&search=abc&category=science"
    );
    assert_eq!(controller.state().search, "abc");
}

#[test]
fn typing_back_to_the_url_value_does_not_navigate() {
    let t0 = Instant::now();
    let mut controller = controller("search=moon");
    controller.on_search_input("moo", t0);
    controller.on_search_input("moon", t0 + Duration::from_millis(50));
    assert_eq!(controller.tick(t0 + Duration::from_secs(1)), None);
}

#[test]
fn external_url_change_replaces_input() {
    let t0 = Instant::now();
    let mut controller = controller("search=moon");
    controller.on_search_input("mars", t0);

    controller.sync_query("search=venus");

    assert_eq!(controller.search_text(), "venus");
    assert_eq!(controller.search_deadline(), None);
    assert_eq!(controller.tick(t0 + Duration::from_secs(1)), None);
}

#[test]
fn own_navigation_keeps_typed_text() {
    let t0 = Instant::now();
    let mut search = DebouncedSearch::new("", DEBOUNCE);
    search.input("comet ", t0);

    let committed = search.poll(t0 + DEBOUNCE, "").unwrap();
    assert_eq!(committed, "comet");

    search.sync_from_url(&committed);
    assert_eq!(search.text(), "comet ");
}
