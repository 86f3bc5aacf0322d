//! Game flow between screens, as one explicit state instead of a set of independent flags.

use log::debug;

/// Which page of the settings panel is showing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SettingsView {
    /// The settings menu itself.
    #[default]
    Menu,
    /// The privacy policy page.
    Privacy,
}

/// A modal panel over the board. At most one is open at a time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Overlay {
    /// How to play.
    Help,
    /// The settings panel, on one of its pages.
    Settings(SettingsView),
}

/// The screen the player is looking at.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Screen {
    /// Title screen, before the first tap.
    Splash,
    /// A level is on the board.
    Playing {
        /// Index of the level in the pack.
        level: usize,
        /// Open modal panel, if any.
        overlay: Option<Overlay>,
    },
    /// The level was just completed.
    Won {
        /// Index of the completed level.
        level: usize,
    },
    /// Every level has been beaten.
    Finished,
}

/// Game flow over a pack of `level_count` levels.
///
/// Transition methods return whether they applied; a transition that makes no sense from the current screen
/// leaves the session untouched.
#[derive(Clone, Debug)]
pub struct Session {
    screen: Screen,
    // level to resume from the splash screen
    level: usize,
    level_count: usize,
    hint_playing: bool,
}

impl Session {
    /// A session starting on the splash screen at the first level.
    pub fn new(level_count: usize) -> Self {
        Self {
            screen: Screen::Splash,
            level: 0,
            level_count,
            hint_playing: false,
        }
    }

    /// A session resuming at a persisted level index.
    ///
    /// Only the leading digits count, after optional whitespace and a `+`, so `"3.0"` and `"3abc"` both resume
    /// at level 3. Anything without leading digits, or out of range for the pack, falls back to the first level.
    pub fn restore(saved: &str, level_count: usize) -> Self {
        let mut session = Self::new(level_count);
        let unsigned = saved.trim_start();
        let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);
        let digits = &unsigned[..unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len())];
        match digits.parse::<usize>() {
            Ok(level) if level < level_count => session.level = level,
            _ => debug!("ignoring saved level {saved:?}"),
        }

        session
    }

    /// The level index to persist.
    pub fn saved_level(&self) -> String {
        self.level.to_string()
    }

    /// The current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Index of the level being played or resumed.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Whether the board should react to touches.
    pub fn accepts_input(&self) -> bool {
        matches!(self.screen, Screen::Playing { overlay: None, .. }) && !self.hint_playing
    }

    /// Leave the splash screen.
    pub fn start(&mut self) -> bool {
        if self.screen != Screen::Splash || self.level_count == 0 {
            return false;
        }

        self.screen = Screen::Playing { level: self.level, overlay: None };
        true
    }

    fn set_overlay(&mut self, wanted: Option<Overlay>) -> bool {
        match &mut self.screen {
            Screen::Playing { overlay, .. } => {
                *overlay = wanted;
                true
            }
            _ => false,
        }
    }

    fn overlay(&self) -> Option<Overlay> {
        match self.screen {
            Screen::Playing { overlay, .. } => overlay,
            _ => None,
        }
    }

    /// Open the help panel, replacing settings if open, or close it if it is already open.
    pub fn toggle_help(&mut self) -> bool {
        match self.overlay() {
            Some(Overlay::Help) => self.set_overlay(None),
            _ => self.set_overlay(Some(Overlay::Help)),
        }
    }

    /// Open the settings menu, replacing help if open, or close it if it is already open.
    pub fn toggle_settings(&mut self) -> bool {
        match self.overlay() {
            Some(Overlay::Settings(_)) => self.set_overlay(None),
            _ => self.set_overlay(Some(Overlay::Settings(SettingsView::Menu))),
        }
    }

    /// Switch the open settings panel to the privacy policy.
    pub fn show_privacy(&mut self) -> bool {
        match self.overlay() {
            Some(Overlay::Settings(_)) => self.set_overlay(Some(Overlay::Settings(SettingsView::Privacy))),
            _ => false,
        }
    }

    /// Close whichever panel is open. Settings reopen on the menu page.
    pub fn close_overlay(&mut self) -> bool {
        self.overlay().is_some() && self.set_overlay(None)
    }

    /// Start playing a hint. Refused while one is already playing or the level is not in play.
    pub fn begin_hint(&mut self) -> bool {
        if self.hint_playing || !matches!(self.screen, Screen::Playing { overlay: None, .. }) {
            return false;
        }

        self.hint_playing = true;
        true
    }

    /// The hint animation finished or was dismissed.
    pub fn end_hint(&mut self) {
        self.hint_playing = false;
    }

    /// Whether a hint is playing.
    pub fn hint_playing(&self) -> bool {
        self.hint_playing
    }

    /// The player drew every edge of the current level.
    pub fn win(&mut self) -> bool {
        match self.screen {
            Screen::Playing { level, overlay: None } if !self.hint_playing => {
                self.screen = Screen::Won { level };
                true
            }
            _ => false,
        }
    }

    /// Move on from a won level, to the next one or to the finish screen after the last.
    pub fn next_level(&mut self) -> bool {
        let Screen::Won { level } = self.screen else {
            return false;
        };

        if level + 1 < self.level_count {
            self.level = level + 1;
            self.screen = Screen::Playing { level: self.level, overlay: None };
        } else {
            self.screen = Screen::Finished;
        }
        true
    }

    /// Start over from the first level after finishing the pack.
    pub fn reset(&mut self) -> bool {
        if self.screen != Screen::Finished {
            return false;
        }

        self.level = 0;
        self.screen = Screen::Playing { level: 0, overlay: None };
        true
    }
}
