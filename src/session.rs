//! Interactive visualization session
//!
//! Owns the list and the scene it is drawn into. Every add/delete goes to the
//! list first and is followed by a full scene rebuild.

use linkscape_list::LinkedList;
use linkscape_scene::{project, reconcile, LayoutConfig, MemoryScene, PointLight, PrimitiveFactory};
use tracing::{debug, info, warn};

use crate::command::{Command, HELP};
use crate::settings::Settings;

/// What the session wants printed after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// A list, the scene showing it, and everything needed to rebuild that scene
pub struct Session {
    list: LinkedList<String>,
    scene: MemoryScene,
    factory: PrimitiveFactory,
    layout: LayoutConfig,
    lights: Vec<PointLight>,
}

impl Session {
    /// Start a session with an empty list and a scene holding only the lights.
    pub fn new(settings: &Settings) -> Self {
        let mut session = Self {
            list: LinkedList::new(),
            scene: MemoryScene::new(),
            factory: settings.factory(),
            layout: settings.layout.to_layout(),
            lights: settings.lights(),
        };
        session.refresh();
        info!(lights = session.lights.len(), "Session started");
        session
    }

    pub fn list(&self) -> &LinkedList<String> {
        &self.list
    }

    pub fn scene(&self) -> &MemoryScene {
        &self.scene
    }

    /// Append `value`. Blank values are ignored. The scene is rebuilt either way.
    pub fn add(&mut self, value: &str) -> bool {
        let added = match self.list.append(value.to_owned()) {
            Ok(()) => true,
            Err(err) => {
                warn!("Ignoring add: {}", err);
                false
            }
        };
        self.refresh();
        added
    }

    /// Delete the first node equal to `value`, returning whether one was removed.
    /// The scene is rebuilt either way.
    pub fn delete(&mut self, value: &str) -> bool {
        let deleted = match self.list.delete(&value.to_owned()) {
            Ok(Some(_)) => true,
            Ok(None) => {
                debug!(value, "no node to delete");
                false
            }
            Err(err) => {
                warn!("Ignoring delete: {}", err);
                false
            }
        };
        self.refresh();
        deleted
    }

    /// Drop every node and rebuild the scene.
    pub fn clear(&mut self) {
        self.list.clear();
        self.refresh();
    }

    /// Rebuild the scene from the current list.
    pub fn refresh(&mut self) {
        let projection = project(&self.list, &self.layout);
        let diff = reconcile(&mut self.scene, &mut self.factory, &projection, &self.lights);
        debug!(
            net = diff.net_change(),
            objects = self.scene.len(),
            "refreshed scene"
        );
    }

    /// Current projection as pretty JSON.
    pub fn projection_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&project(&self.list, &self.layout))
    }

    /// `a -> b -> c`, or `(empty)`.
    pub fn describe_list(&self) -> String {
        if self.list.is_empty() {
            return "(empty)".to_owned();
        }
        self.list
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<Reply> {
        let text = match command {
            Command::Add(value) => {
                if self.add(&value) {
                    format!("added {:?} ({} nodes)", value, self.list.len())
                } else {
                    "nothing to add: value is blank".to_owned()
                }
            }
            Command::Delete(value) => {
                if self.delete(&value) {
                    format!("deleted {:?} ({} nodes)", value, self.list.len())
                } else if value.trim().is_empty() {
                    "nothing to delete: value is blank".to_owned()
                } else {
                    format!("{value:?} is not in the list")
                }
            }
            Command::Clear => {
                self.clear();
                "cleared".to_owned()
            }
            Command::Show => format!("list: {}\n{}", self.describe_list(), self.scene)
                .trim_end()
                .to_owned(),
            Command::Json => self.projection_json()?,
            Command::Help => HELP.to_owned(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }
}
