//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the current wizard step.

use crate::wizard::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    /// Cycle backwards through colors or leaf styles
    CyclePrevious,
    /// Cycle forwards through colors or leaf styles
    CycleNext,
    /// Pick/unpick the item under the cursor
    Toggle,
    Next,
    Back,
    Confirm,
    StartOver,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// True if `event` triggers this binding. Shift is ignored for characters.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.key {
            return false;
        }
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        modifiers == self.modifiers
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Step-specific keybindings
    step_bindings: HashMap<WizardStep, Vec<Keybinding>>,
    /// Global keybindings (available on every step)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create the registry with every step's bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            step_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_global_bindings();
        ctx.register_step_bindings();
        ctx
    }

    fn register_global_bindings(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];
    }

    fn register_step_bindings(&mut self) {
        let nav = || {
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Move up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Move down"),
            ]
        };

        self.step_bindings.insert(
            WizardStep::Intro,
            vec![Keybinding::new(KeyCode::Enter, KeyAction::Next, "Enter", "Start")],
        );

        let mut flowers = nav();
        flowers.extend([
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Pick/unpick"),
            Keybinding::new(KeyCode::Enter, KeyAction::Next, "Enter", "Next"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ]);
        self.step_bindings.insert(WizardStep::Flowers, flowers);

        let mut paper = nav();
        paper.extend([
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Choose paper"),
            Keybinding::new(KeyCode::Left, KeyAction::CyclePrevious, "Left", "Previous color"),
            Keybinding::new(KeyCode::Right, KeyAction::CycleNext, "Right", "Next color"),
            Keybinding::new(KeyCode::Enter, KeyAction::Next, "Enter", "Next"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ]);
        self.step_bindings.insert(WizardStep::Paper, paper);

        let mut adornments = nav();
        adornments.extend([
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Select/deselect"),
            Keybinding::new(KeyCode::Tab, KeyAction::Toggle, "Tab", "Select/deselect"),
            Keybinding::new(KeyCode::Left, KeyAction::CyclePrevious, "Left", "Previous option"),
            Keybinding::new(KeyCode::Right, KeyAction::CycleNext, "Right", "Next option"),
            Keybinding::new(KeyCode::Enter, KeyAction::Next, "Enter", "Next"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ]);
        self.step_bindings.insert(WizardStep::Adornments, adornments);

        self.step_bindings.insert(
            WizardStep::Summary,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Confirm order"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::StartOver, "R", "Start over"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );
    }

    /// Get keybindings for a step (includes global bindings)
    pub fn get_bindings(&self, step: WizardStep) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(step_bindings) = self.step_bindings.get(&step) {
            bindings.extend(step_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key press to an action. Step bindings win over globals.
    pub fn resolve(&self, step: WizardStep, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(step)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, step: WizardStep) -> Vec<NavBarItem> {
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;
        let mut has_cycle = false;
        let mut seen_actions = Vec::new();

        for binding in self.get_bindings(step) {
            match binding.action {
                // Combine Up/Down and Left/Right into single items
                KeyAction::NavigateUp | KeyAction::NavigateDown => {
                    if !has_nav {
                        items.push(NavBarItem {
                            key_display: "Up/Dn".to_string(),
                            action_label: "Move".to_string(),
                        });
                        has_nav = true;
                    }
                }
                KeyAction::CyclePrevious | KeyAction::CycleNext => {
                    if !has_cycle {
                        let label = if step == WizardStep::Paper { "Color" } else { "Option" };
                        items.push(NavBarItem {
                            key_display: "Left/Right".to_string(),
                            action_label: label.to_string(),
                        });
                        has_cycle = true;
                    }
                }
                action if seen_actions.contains(&action) => {}
                action => {
                    seen_actions.push(action);
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Full key list for the help overlay
    pub fn get_help_content(&self, step: WizardStep) -> Vec<(String, String)> {
        self.get_bindings(step)
            .into_iter()
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect()
    }
}
