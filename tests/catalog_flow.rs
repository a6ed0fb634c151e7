//! End-to-end browsing flows driven through the event handler.

use folio_catalog::catalog::CatalogStore;
use folio_catalog::engine::PageMarker::{Ellipsis, Number};
use folio_catalog::{
    handle_event, initialize, Action, AppState, CatalogEntry, Category, Config, EntryId, Event, Key,
};

fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1, "Portfolio Site", Category::Web)
            .with_subcategory("Portfolio")
            .with_description("Personal website")
            .with_technologies(["React"])
            .with_image("site.png"),
        CatalogEntry::new(2, "Kitchen Hood", Category::Technical)
            .with_subcategory("Kitchen Equipment")
            .with_technologies(["AutoCAD"])
            .with_image("hood-1.png")
            .with_gallery(["hood-2.png", "hood-3.png"]),
        CatalogEntry::new(3, "Prep Table", Category::Technical)
            .with_subcategory("Kitchen Equipment")
            .with_technologies(["SolidWorks"]),
        CatalogEntry::new(4, "Gear Housing", Category::Technical).with_technologies(["AutoCAD"]),
        CatalogEntry::new(2, "Kitchen Hood (copy)", Category::Technical),
        CatalogEntry::new("cert-1", "Content Marketing", Category::Education)
            .as_certificate("Digital Marketing Institute"),
    ]
}

fn state() -> AppState {
    initialize(&Config::default(), CatalogStore::new(catalog()))
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event)
}

fn ids(state: &AppState) -> Vec<EntryId> {
    state.filtered.iter().map(|entry| entry.id.clone()).collect()
}

#[test]
fn duplicates_are_shown_once() {
    let state = state();
    assert_eq!(state.store.source_len(), 6);
    assert_eq!(state.filtered.len(), 5);
    let hood = state.store.get(&EntryId::from(2)).unwrap();
    assert_eq!(hood.title, "Kitchen Hood");
}

#[test]
fn category_then_subcategory_narrows() {
    let mut state = state();
    send(&mut state, Event::SetCategory(Category::Technical));
    assert_eq!(state.subcategories, vec!["All", "Kitchen Equipment", "Other"]);
    assert_eq!(ids(&state), vec![EntryId::from(2), EntryId::from(3), EntryId::from(4)]);

    send(&mut state, Event::SetSubcategory("Other".to_string()));
    assert_eq!(ids(&state), vec![EntryId::from(4)]);

    send(&mut state, Event::SetCategory(Category::Web));
    assert_eq!(state.query.selected_subcategory(), "All");
    assert_eq!(ids(&state), vec![EntryId::from(1)]);
}

#[test]
fn search_combines_with_category() {
    let mut state = state();
    send(&mut state, Event::SetSearchQuery("autocad".to_string()));
    assert_eq!(ids(&state), vec![EntryId::from(2), EntryId::from(4)]);

    send(&mut state, Event::SetCategory(Category::Web));
    assert!(state.filtered.is_empty());

    let vm = state.compute_viewmodel();
    assert_eq!(vm.empty_state.unwrap().message, "No results found");
}

#[test]
fn subcategory_not_in_category_matches_nothing() {
    let mut state = state();
    send(&mut state, Event::SetCategory(Category::Web));
    send(&mut state, Event::SetSubcategory("Kitchen Equipment".to_string()));
    assert!(state.filtered.is_empty());
}

#[test]
fn pages_of_seven_entries() {
    let entries = (1..=7)
        .map(|i| CatalogEntry::new(i, format!("Entry {i}"), Category::Demo))
        .collect();
    let mut state = initialize(&Config::default(), CatalogStore::new(entries));

    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.current_page().items.len(), 6);

    send(&mut state, Event::SetPage(2));
    let page = state.current_page();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, EntryId::from(7));

    send(&mut state, Event::SearchChar('7'));
    assert_eq!(state.query.current_page(), 1);
    assert_eq!(state.current_page().items.len(), 1);
}

#[test]
fn long_result_lists_collapse_the_page_bar() {
    let entries = (1..=60)
        .map(|i| CatalogEntry::new(i, format!("Entry {i}"), Category::Demo))
        .collect();
    let mut state = initialize(&Config::default(), CatalogStore::new(entries));
    send(&mut state, Event::SetPage(5));

    let bar = state.compute_viewmodel().pagination.unwrap();
    assert_eq!(bar.total_pages, 10);
    assert_eq!(
        bar.markers,
        vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
    );
}

#[test]
fn gallery_walkthrough() {
    let mut state = state();

    let (render, actions) = send(&mut state, Event::OpenDetail(EntryId::from(2)));
    assert!(render);
    assert_eq!(
        actions,
        vec![
            Action::RegisterKeyBindings,
            Action::LoadImage { src: "hood-1.png".to_string() },
        ]
    );

    send(&mut state, Event::ImageLoaded { src: None });
    send(&mut state, Event::Key(Key::ArrowLeft));
    let detail = state.compute_viewmodel().detail.unwrap();
    assert_eq!(detail.counter.as_deref(), Some("3 / 3"));
    assert!(detail.is_loading);

    send(&mut state, Event::ImageLoaded { src: Some("hood-3.png".to_string()) });
    send(&mut state, Event::ToggleZoom);
    send(&mut state, Event::JumpTo(0));
    let detail = state.compute_viewmodel().detail.unwrap();
    assert_eq!(detail.image.unwrap().src, "hood-1.png");
    assert!(detail.is_zoomed);

    let (_, actions) = send(&mut state, Event::Key(Key::Escape));
    assert_eq!(actions, vec![Action::ReleaseKeyBindings]);
    assert!(state.compute_viewmodel().detail.is_none());
}

#[test]
fn bindings_stay_balanced_across_many_sessions() {
    let mut state = state();
    let mut registered = 0;
    let mut released = 0;

    for id in [1, 2, 3, 2, 4] {
        for event in [
            Event::OpenDetail(EntryId::from(id)),
            Event::OpenDetail(EntryId::from(id)),
            Event::NextImage,
            Event::CloseDetail,
            Event::CloseDetail,
        ] {
            let (_, actions) = send(&mut state, event);
            registered += actions.iter().filter(|a| **a == Action::RegisterKeyBindings).count();
            released += actions.iter().filter(|a| **a == Action::ReleaseKeyBindings).count();
        }
    }

    assert_eq!(registered, 5);
    assert_eq!(released, 5);
    assert!(!state.key_bindings.is_active());
}

#[test]
fn certificates_browse_like_projects() {
    let mut state = state();
    send(&mut state, Event::SetCategory(Category::Education));
    let vm = state.compute_viewmodel();
    assert_eq!(vm.cards.len(), 1);
    assert_eq!(vm.cards[0].issuer.as_deref(), Some("Digital Marketing Institute"));
    assert_eq!(vm.cards[0].subcategory, "Other");
}

#[test]
fn view_mode_keeps_the_page() {
    let entries = (1..=12)
        .map(|i| CatalogEntry::new(i, format!("Entry {i}"), Category::Demo))
        .collect();
    let mut state = initialize(&Config::default(), CatalogStore::new(entries));
    send(&mut state, Event::NextPage);
    send(&mut state, Event::ToggleViewMode);
    assert_eq!(state.query.current_page(), 2);
    assert_eq!(state.compute_viewmodel().view_mode, folio_catalog::ViewMode::List);
}
