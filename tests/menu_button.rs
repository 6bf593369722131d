//! Scenario tests driving menu buttons through the headless simulator.
use icy_menu_button::event::Status;
use icy_menu_button::menu_button::Error as BindError;
use icy_menu_button::{Document, ElementId, Error, Item, MenuButton, Page, Role, Settings};

use icy_menu_button_test::Simulator;

const CLASS: &str = "menu-button-actions";

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Action(String),
}

fn document(labels: &[&str]) -> (Document, ElementId) {
    let mut document = Document::new();
    let root = document.root();

    let container = document.insert(root, Role::GenericContainer, "");
    document.add_class(container, CLASS);

    let _ = document.insert(container, Role::Button, "Actions");
    let menu = document.insert(container, Role::Menu, "");

    for label in labels {
        let _ = document.insert(menu, Role::MenuItem, *label);
    }

    let output = document.insert(root, Role::Label, "none");
    document.set_attribute(output, "id", "action_output");

    let _ = document.insert(root, Role::TextInput, "Search");

    (document, container)
}

fn simulator(labels: &[&str]) -> Simulator<Message> {
    let (document, _) = document(labels);
    let mut page = Page::new(document);

    let _ = page
        .mount_all(CLASS, |item: &Item| Message::Action(item.label().to_owned()))
        .expect("valid menu button");

    Simulator::new(page)
}

fn tabbable(simulator: &Simulator<Message>) -> Vec<String> {
    let document = simulator.document();

    document
        .find_all(document.root(), Role::MenuItem)
        .into_iter()
        .filter(|id| document.tab_index(*id) == Some(0))
        .map(|id| document.text_content(id))
        .collect()
}

fn is_open(simulator: &Simulator<Message>) -> bool {
    let trigger = simulator.find("Actions").expect("trigger");
    let document = simulator.document();
    let popup = document.find(document.root(), Role::Menu).expect("popup");

    let expanded = document.attribute(trigger, "aria-expanded") == Some("true");
    let visible = !document.is_hidden(popup);

    assert_eq!(expanded, visible, "trigger and popup disagree");

    expanded
}

#[test]
fn arrow_down_twice_then_enter_activates_third_action() {
    let mut simulator = simulator(&["Action 1", "Action 2", "Action 3"]);

    assert!(!simulator.is_visible("Action 1").unwrap());

    let _ = simulator.click("Actions").unwrap();
    assert!(is_open(&simulator));
    assert!(simulator.is_visible("Action 3").unwrap());
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 1"));
    assert_eq!(tabbable(&simulator), vec!["Action 1"]);

    let _ = simulator.press_key("ArrowDown");
    let _ = simulator.press_key("ArrowDown");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 3"));

    let status = simulator.press_key("Enter");

    assert_eq!(status, Status::Captured);
    assert!(!is_open(&simulator));
    assert!(!simulator.is_visible("Action 3").unwrap());
    assert_eq!(simulator.focused_text().as_deref(), Some("Actions"));
    assert_eq!(
        simulator.into_messages().collect::<Vec<_>>(),
        vec![Message::Action("Action 3".to_owned())]
    );
}

#[test]
fn navigation_wraps_at_both_ends() {
    let mut simulator = simulator(&["Action 1", "Action 2", "Action 3"]);
    let _ = simulator.click("Actions").unwrap();

    let _ = simulator.press_key("ArrowUp");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 3"));

    let _ = simulator.press_key("ArrowDown");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 1"));

    let _ = simulator.press_key("Up");
    let _ = simulator.press_key("Down");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 1"));
}

#[test]
fn forward_cycle_returns_to_start_with_one_tabbable_item() {
    let labels = ["Cut", "Copy", "Paste", "Delete", "Select all"];
    let mut simulator = simulator(&labels);
    let _ = simulator.click("Actions").unwrap();

    for start in labels {
        let _ = simulator.hover(start).unwrap();

        for _ in 0..labels.len() {
            let _ = simulator.press_key("ArrowDown");
            assert_eq!(tabbable(&simulator).len(), 1);
            assert_eq!(
                tabbable(&simulator).first().map(String::as_str),
                simulator.focused_text().as_deref()
            );
        }

        assert_eq!(simulator.focused_text().as_deref(), Some(start));
    }

    assert!(simulator.messages().is_empty());
}

#[test]
fn clicking_an_item_activates_it_once() {
    let mut simulator = simulator(&["Action 1", "Action 2"]);

    let _ = simulator.click("Actions").unwrap();
    let _ = simulator.click("Action 2").unwrap();

    assert!(!is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Actions"));
    assert_eq!(
        simulator.messages(),
        &[Message::Action("Action 2".to_owned())]
    );
}

#[test]
fn space_activates_an_item() {
    let mut simulator = simulator(&["Action 1", "Action 2"]);

    let _ = simulator.click("Actions").unwrap();
    let _ = simulator.press_key(" ");

    assert_eq!(
        simulator.messages(),
        &[Message::Action("Action 1".to_owned())]
    );
}

#[test]
fn escape_closes_without_activating() {
    let mut simulator = simulator(&["Action 1", "Action 2", "Action 3"]);

    let _ = simulator.click("Actions").unwrap();
    let _ = simulator.press_key("ArrowDown");
    let status = simulator.press_key("Escape");

    assert_eq!(status, Status::Captured);
    assert!(!is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Actions"));
    assert!(simulator.messages().is_empty());
}

#[test]
fn pressing_outside_closes_only_when_open() {
    let mut simulator = simulator(&["Action 1"]);
    let output = simulator.document().get_by_id("action_output").unwrap();

    let _ = simulator.click_element(output);
    assert!(!is_open(&simulator));
    assert_eq!(simulator.focused(), None);

    let _ = simulator.click("Actions").unwrap();
    assert!(is_open(&simulator));

    let _ = simulator.click_element(output);

    assert!(!is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Actions"));
    assert!(simulator.page().listeners().is_empty());
    assert!(simulator.messages().is_empty());
}

#[test]
fn clicking_the_trigger_again_closes() {
    let mut simulator = simulator(&["Action 1"]);

    let _ = simulator.click("Actions").unwrap();
    let _ = simulator.click("Actions").unwrap();

    assert!(!is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Actions"));
}

#[test]
fn trigger_keyboard_opens_on_either_edge() {
    let mut simulator = simulator(&["Action 1", "Action 2", "Action 3"]);
    simulator.focus("Actions").unwrap();

    let _ = simulator.press_key("ArrowUp");
    assert!(is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 3"));

    let _ = simulator.press_key("Escape");
    let _ = simulator.press_key("ArrowDown");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 1"));

    let _ = simulator.press_key("Escape");
    let _ = simulator.press_key("Enter");
    assert!(is_open(&simulator));

    let _ = simulator.press_key("Escape");
    let _ = simulator.press_key(" ");
    assert!(is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 1"));
}

#[test]
fn home_and_end_jump_to_the_edges() {
    let mut simulator = simulator(&["Action 1", "Action 2", "Action 3"]);
    let _ = simulator.click("Actions").unwrap();

    let _ = simulator.press_key("End");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 3"));

    let _ = simulator.press_key("Home");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 1"));

    let _ = simulator.press_key("PageDown");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 3"));

    let _ = simulator.press_key("PageUp");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 1"));
}

#[test]
fn typing_moves_to_the_matching_item() {
    let mut simulator = simulator(&["Cut", "Copy", "Paste", "Delete"]);
    let _ = simulator.click("Actions").unwrap();

    let _ = simulator.typewrite("p");
    assert_eq!(simulator.focused_text().as_deref(), Some("Paste"));

    let _ = simulator.typewrite("C");
    assert_eq!(simulator.focused_text().as_deref(), Some("Cut"));

    let _ = simulator.typewrite("c");
    assert_eq!(simulator.focused_text().as_deref(), Some("Copy"));

    let _ = simulator.typewrite("x");
    assert_eq!(simulator.focused_text().as_deref(), Some("Copy"));
    assert!(simulator.messages().is_empty());
}

#[test]
fn tab_closes_and_lets_focus_move_on() {
    let mut simulator = simulator(&["Action 1", "Action 2"]);
    let _ = simulator.click("Actions").unwrap();

    let status = simulator.press_key("Tab");

    assert_eq!(status, Status::Ignored);
    assert!(!is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Search"));
    assert!(simulator.messages().is_empty());
}

#[test]
fn hovering_focuses_without_activating() {
    let mut simulator = simulator(&["Action 1", "Action 2", "Action 3"]);
    let _ = simulator.click("Actions").unwrap();

    let _ = simulator.hover("Action 2").unwrap();

    assert!(is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 2"));
    assert_eq!(tabbable(&simulator), vec!["Action 2"]);
    assert!(simulator.messages().is_empty());

    let _ = simulator.press_key("ArrowDown");
    assert_eq!(simulator.focused_text().as_deref(), Some("Action 3"));
}

#[test]
fn focus_class_tracks_focus_inside_the_container() {
    let mut simulator = simulator(&["Action 1"]);
    let container = simulator
        .document()
        .find_all_by_class(simulator.document().root(), CLASS)[0];

    assert!(!simulator.document().has_class(container, "focus"));

    simulator.focus("Actions").unwrap();
    assert!(simulator.document().has_class(container, "focus"));

    let _ = simulator.press_key("Enter");
    assert!(simulator.document().has_class(container, "focus"));

    let _ = simulator.press_key("Tab");
    assert!(!simulator.document().has_class(container, "focus"));
}

#[test]
fn settings_disable_type_ahead_and_tab_closing() {
    let (mut document, container) = document(&["Cut", "Copy", "Paste"]);

    let settings = Settings::from_ron("(type_ahead: false, close_on_tab: false)").unwrap();
    let menu_button = MenuButton::bind(&mut document, container, |item: &Item| {
        Message::Action(item.label().to_owned())
    })
    .unwrap()
    .settings(settings);

    let mut page = Page::new(document);
    let _ = page.insert(menu_button);
    let mut simulator = Simulator::new(page);

    let _ = simulator.click("Actions").unwrap();
    let _ = simulator.typewrite("p");
    assert_eq!(simulator.focused_text().as_deref(), Some("Cut"));

    let _ = simulator.press_key("Tab");
    assert!(is_open(&simulator));
    assert_eq!(simulator.focused_text().as_deref(), Some("Search"));
}

#[test]
fn settings_change_the_focus_class() {
    let (mut document, container) = document(&["Action 1"]);

    let settings = Settings {
        focus_class: "has-focus".into(),
        ..Settings::default()
    };
    let menu_button = MenuButton::bind(&mut document, container, |item: &Item| {
        Message::Action(item.label().to_owned())
    })
    .unwrap()
    .settings(settings);

    let mut page = Page::new(document);
    let _ = page.insert(menu_button);
    let mut simulator = Simulator::new(page);

    simulator.focus("Actions").unwrap();

    assert!(simulator.document().has_class(container, "has-focus"));
    assert!(!simulator.document().has_class(container, "focus"));
}

#[test]
fn mounting_a_malformed_container_fails_fast() {
    let mut document = Document::new();
    let root = document.root();
    let container = document.insert(root, Role::GenericContainer, "");
    document.add_class(container, CLASS);
    let _ = document.insert(container, Role::Button, "Actions");
    let _ = document.insert(container, Role::Menu, "");

    let mut page = Page::new(document);
    let result = page.mount_all(CLASS, |item: &Item| Message::Action(item.label().to_owned()));

    assert_eq!(
        result,
        Err(Error::MenuButton(BindError::NoItems { container }))
    );
}
