use icy_menu_button::keyboard::Key;
use icy_menu_button::{Document, ElementId, Item, Page, Role, Settings};
use icy_menu_button::{MenuButton, event};

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

const CLASS: &str = "menu-button-actions";

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut app = App::new(settings)?;

    println!("Commands: click <text>, hover <text>, key <name>, type <text>, show, quit");
    app.show();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let (command, argument) = line
            .trim()
            .split_once(' ')
            .unwrap_or((line.trim(), ""));

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "show" => {}
            "click" => app.click(argument),
            "hover" => app.hover(argument),
            "key" => app.press_key(argument),
            "type" => argument.chars().for_each(|c| app.press_key(&c.to_string())),
            _ => tracing::warn!("Unknown command {command:?}"),
        }

        app.show();
        io::stdout().flush()?;
    }

    Ok(())
}

#[derive(Debug, Clone)]
enum Message {
    Action(String),
}

struct App {
    page: Page<Message>,
    output: ElementId,
}

impl App {
    fn new(settings: Settings) -> Result<Self, icy_menu_button::Error> {
        let mut document = Document::new();
        let root = document.root();

        let container = document.insert(root, Role::GenericContainer, "");
        document.add_class(container, CLASS);

        let _ = document.insert(container, Role::Button, "Actions");
        let menu = document.insert(container, Role::Menu, "");

        for label in ["Action 1", "Action 2", "Action 3"] {
            let _ = document.insert(menu, Role::MenuItem, label);
        }

        let _ = document.insert(root, Role::Label, "Last action:");
        let output = document.insert(root, Role::TextInput, "none");
        document.set_attribute(output, "id", "action_output");

        let mut page = Page::new(document);

        for container in page.document().find_all_by_class(root, CLASS) {
            let menu_button = MenuButton::bind(page.document_mut(), container, |item: &Item| {
                Message::Action(item.label().to_owned())
            })?
            .settings(settings.clone());

            let _ = page.insert(menu_button);
        }

        Ok(Self { page, output })
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Action(label) => {
                tracing::info!("Action: {label}");

                self.page.document_mut().set_text(self.output, label);
            }
        }
    }

    fn click(&mut self, text: &str) {
        let Some(target) = self.find(text) else {
            return;
        };

        let button = icy_menu_button::mouse::Button::Left;

        for event in [
            icy_menu_button::mouse::Event::ButtonPressed(button),
            icy_menu_button::mouse::Event::ButtonReleased(button),
            icy_menu_button::mouse::Event::Clicked(button),
        ] {
            let _ = self.dispatch(target, event.into());
        }
    }

    fn hover(&mut self, text: &str) {
        let Some(target) = self.find(text) else {
            return;
        };

        let _ = self.dispatch(target, icy_menu_button::mouse::Event::CursorEntered.into());
    }

    fn press_key(&mut self, name: &str) {
        let key = match name {
            "Space" => Key::from(" "),
            name => Key::from(name),
        };

        let target = self.page.keyboard_target();
        let status = self.dispatch(
            target,
            icy_menu_button::keyboard::Event::pressed(key).into(),
        );

        tracing::debug!("Key {name:?} was {status:?}");
    }

    fn dispatch(&mut self, target: ElementId, event: event::Event) -> event::Status {
        let mut messages = Vec::new();
        let status = self.page.dispatch(target, &event, &mut messages);

        for message in messages {
            self.update(message);
        }

        status
    }

    fn find(&self, text: &str) -> Option<ElementId> {
        let document = self.page.document();
        let found = document
            .descendants(document.root())
            .into_iter()
            .find(|id| {
                document
                    .get(*id)
                    .is_some_and(|element| element.text().trim() == text)
            });

        if found.is_none() {
            tracing::warn!("No element with text {text:?}");
        }

        found
    }

    fn show(&self) {
        let document = self.page.document();

        for id in document.descendants(document.root()) {
            let Some(element) = document.get(id) else {
                continue;
            };

            if document.is_hidden(id) || element.role() == Role::GenericContainer {
                continue;
            }

            let marker = if document.focused() == Some(id) { ">" } else { " " };
            let expanded = document.attribute(id, "aria-expanded").unwrap_or("false");

            match element.role() {
                Role::Button => {
                    println!("{marker} [{}] expanded={expanded}", element.text());
                }
                Role::MenuItem => println!("{marker}   - {}", element.text()),
                Role::TextInput => println!("{marker} ({})", element.text()),
                _ if element.text().is_empty() => {}
                _ => println!("{marker} {}", element.text()),
            }
        }
    }
}
