//! Lightbox state machine
//!
//! The lightbox has two states, `Closed` and `Open { photos, index }`. Every
//! input is an explicit [`LightboxEvent`] passed to [`Lightbox::dispatch`],
//! which updates the state and returns the ordered list of [`Effect`]s the host
//! has to carry out (show an image, lock scrolling, move focus, ...). The
//! machine itself never touches the screen, the network or the clock.
//!
//! ```text
//!            open(photos, i, trigger)
//!   Closed ─────────────────────────────▶ Open(photos, i)
//!     ▲                                    │  ▲   next / prev / Tab
//!     │              close / Esc           │  └──────────────┘
//!     └────────────────────────────────────┘
//! ```
//!
//! `T` is the host's handle for the element that opened the viewer. The
//! machine stores it only to hand it back in [`Effect::RestoreFocus`].

use crate::catalog::PhotoRef;

/// Interactive controls of the modal, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Close,
    Prev,
    Next,
}

impl Control {
    /// Every control, in focus order
    pub const ORDER: [Self; 3] = [Self::Close, Self::Prev, Self::Next];

    /// Accessible label of the control
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Close => "Close lightbox",
            Self::Prev => "Previous photo",
            Self::Next => "Next photo",
        }
    }

    /// Controls that can take focus, given whether navigation is shown
    #[must_use]
    pub fn focusable(nav_visible: bool) -> &'static [Self] {
        if nav_visible {
            &Self::ORDER
        } else {
            &[Self::Close]
        }
    }
}

/// Keys the lightbox reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Left,
    Right,
    Tab,
    ShiftTab,
    /// Activates the focused control
    Enter,
}

/// Open/closed state with the loaded photo set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        photos: Vec<PhotoRef>,
        /// Always within `0..photos.len()`
        index: usize,
    },
}

/// What the host should display for the current photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoView {
    /// Large-resolution image source
    pub src: String,
    /// Accessible label with the 1-based position
    pub alt: String,
    /// `"{index + 1} / {len}"`
    pub counter: String,
    pub index: usize,
    pub len: usize,
    /// Whether the prev/next controls are shown
    pub nav_visible: bool,
}

/// Side effect requested by a transition, in the order it should be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<T> {
    /// Display a photo
    Show(PhotoView),
    /// Start fetching an image that may be shown next; never awaited
    Preload(String),
    /// Stop the page behind the modal from scrolling
    LockScroll,
    /// Let the page scroll again
    UnlockScroll,
    /// Route keyboard input to the lightbox
    CaptureKeys,
    /// Stop routing keyboard input to the lightbox
    ReleaseKeys,
    /// Move focus to a modal control
    Focus(Control),
    /// Give focus back to the opener, if it still exists
    RestoreFocus(T),
}

/// Input to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent<T> {
    Open {
        photos: Vec<PhotoRef>,
        start: usize,
        trigger: Option<T>,
    },
    Next,
    Prev,
    Close,
    Key(LightboxKey),
    /// A control was clicked or otherwise activated
    Activate(Control),
    /// A click landed outside the modal frame
    BackdropClick,
}

/// Modal photo viewer
#[derive(Debug, Clone)]
pub struct Lightbox<T> {
    state: LightboxState,
    trigger: Option<T>,
    focus: Control,
}

impl<T> Default for Lightbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lightbox<T> {
    /// Create a closed lightbox
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LightboxState::Closed,
            trigger: None,
            focus: Control::Close,
        }
    }

    /// Feed one event into the machine
    pub fn dispatch(&mut self, event: LightboxEvent<T>) -> Vec<Effect<T>> {
        match event {
            LightboxEvent::Open {
                photos,
                start,
                trigger,
            } => self.open(photos, start, trigger),
            LightboxEvent::Next => self.next(),
            LightboxEvent::Prev => self.prev(),
            LightboxEvent::Close | LightboxEvent::BackdropClick => self.close(),
            LightboxEvent::Key(key) => self.handle_key(key),
            LightboxEvent::Activate(control) => self.activate(control),
        }
    }

    /// Open the viewer on a photo set
    ///
    /// An out-of-range `start` is clamped to the last photo. An empty photo set
    /// is ignored and leaves the state unchanged.
    pub fn open(&mut self, photos: Vec<PhotoRef>, start: usize, trigger: Option<T>) -> Vec<Effect<T>> {
        if photos.is_empty() {
            tracing::warn!("lightbox open ignored: empty photo set");
            return Vec::new();
        }

        let index = if start < photos.len() {
            start
        } else {
            tracing::warn!(start, len = photos.len(), "lightbox start index clamped");
            photos.len() - 1
        };

        let mut effects = Vec::new();
        if !self.is_open() {
            effects.push(Effect::LockScroll);
            effects.push(Effect::CaptureKeys);
        }

        tracing::trace!(index, len = photos.len(), "lightbox open");
        self.state = LightboxState::Open { photos, index };
        self.trigger = trigger;
        self.focus = Control::Close;

        self.show_current(&mut effects);
        effects.push(Effect::Focus(Control::Close));
        effects
    }

    /// Advance to the next photo, wrapping around
    pub fn next(&mut self) -> Vec<Effect<T>> {
        self.step(true)
    }

    /// Go back to the previous photo, wrapping around
    pub fn prev(&mut self) -> Vec<Effect<T>> {
        self.step(false)
    }

    /// Close the viewer and hand focus back to the opener
    pub fn close(&mut self) -> Vec<Effect<T>> {
        if !self.is_open() {
            return Vec::new();
        }

        tracing::trace!("lightbox close");
        self.state = LightboxState::Closed;
        self.focus = Control::Close;

        let mut effects = vec![Effect::UnlockScroll, Effect::ReleaseKeys];
        if let Some(trigger) = self.trigger.take() {
            effects.push(Effect::RestoreFocus(trigger));
        }
        effects
    }

    /// Handle a key press; ignored while closed
    pub fn handle_key(&mut self, key: LightboxKey) -> Vec<Effect<T>> {
        if !self.is_open() {
            return Vec::new();
        }

        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::Left => self.prev(),
            LightboxKey::Right => self.next(),
            LightboxKey::Tab => self.cycle_focus(true),
            LightboxKey::ShiftTab => self.cycle_focus(false),
            LightboxKey::Enter => self.activate(self.focus),
        }
    }

    /// Activate a control as if it had been clicked
    pub fn activate(&mut self, control: Control) -> Vec<Effect<T>> {
        match control {
            Control::Close => self.close(),
            Control::Prev => self.prev(),
            Control::Next => self.next(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LightboxState {
        &self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Current index, `None` while closed
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match &self.state {
            LightboxState::Open { index, .. } => Some(*index),
            LightboxState::Closed => None,
        }
    }

    /// Loaded photos, empty while closed
    #[must_use]
    pub fn photos(&self) -> &[PhotoRef] {
        match &self.state {
            LightboxState::Open { photos, .. } => photos,
            LightboxState::Closed => &[],
        }
    }

    /// Photo at the current index
    #[must_use]
    pub fn current(&self) -> Option<&PhotoRef> {
        match &self.state {
            LightboxState::Open { photos, index } => photos.get(*index),
            LightboxState::Closed => None,
        }
    }

    /// Whether prev/next controls are shown
    #[must_use]
    pub fn nav_visible(&self) -> bool {
        self.photos().len() > 1
    }

    /// Focused control, `None` while closed
    #[must_use]
    pub fn focused(&self) -> Option<Control> {
        self.is_open().then_some(self.focus)
    }

    /// Handle of the element that opened the viewer
    #[must_use]
    pub const fn trigger(&self) -> Option<&T> {
        self.trigger.as_ref()
    }

    /// What the host should display, `None` while closed
    #[must_use]
    pub fn view(&self) -> Option<PhotoView> {
        let LightboxState::Open { photos, index } = &self.state else {
            return None;
        };
        let photo = photos.get(*index)?;

        Some(PhotoView {
            src: photo.large.clone(),
            alt: format!("Concert photo {}", index + 1),
            counter: format!("{} / {}", index + 1, photos.len()),
            index: *index,
            len: photos.len(),
            nav_visible: photos.len() > 1,
        })
    }

    /// Indices of the neighbours to preload, `None` when there is nothing to navigate to
    #[must_use]
    pub fn adjacent(&self) -> Option<(usize, usize)> {
        let LightboxState::Open { photos, index } = &self.state else {
            return None;
        };
        let len = photos.len();
        if len <= 1 {
            return None;
        }
        Some(((index + len - 1) % len, (index + 1) % len))
    }

    fn step(&mut self, forward: bool) -> Vec<Effect<T>> {
        let LightboxState::Open { photos, index } = &mut self.state else {
            return Vec::new();
        };
        let len = photos.len();
        if len <= 1 {
            return Vec::new();
        }

        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
        tracing::trace!(index = *index, len, "lightbox navigate");

        let mut effects = Vec::new();
        self.show_current(&mut effects);
        effects
    }

    fn cycle_focus(&mut self, forward: bool) -> Vec<Effect<T>> {
        let controls = Control::focusable(self.nav_visible());
        let n = controls.len();
        let pos = controls.iter().position(|c| *c == self.focus).unwrap_or(0);

        let target = if forward {
            (pos + 1) % n
        } else {
            (pos + n - 1) % n
        };
        self.focus = controls[target];
        vec![Effect::Focus(self.focus)]
    }

    fn show_current(&self, effects: &mut Vec<Effect<T>>) {
        let Some(view) = self.view() else {
            return;
        };
        effects.push(Effect::Show(view));

        if let Some((prev, next)) = self.adjacent() {
            let photos = self.photos();
            effects.push(Effect::Preload(photos[prev].large.clone()));
            if next != prev {
                effects.push(Effect::Preload(photos[next].large.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::photo_refs;

    type Effects = Vec<Effect<&'static str>>;

    fn open_at(n: usize, start: usize) -> (Lightbox<&'static str>, Effects) {
        let mut lightbox = Lightbox::new();
        let effects = lightbox.open(photo_refs(n), start, Some("tile"));
        (lightbox, effects)
    }

    fn preloads(effects: &Effects) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Preload(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_starts_closed() {
        let lightbox: Lightbox<()> = Lightbox::new();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.index(), None);
        assert!(lightbox.photos().is_empty());
        assert!(lightbox.view().is_none());
        assert!(lightbox.focused().is_none());
    }

    #[test]
    fn test_open_prev_next_close_scenario() {
        let (mut lightbox, effects) = open_at(3, 0);
        assert_eq!(lightbox.index(), Some(0));
        assert_eq!(effects[0], Effect::LockScroll);
        assert_eq!(effects[1], Effect::CaptureKeys);
        assert_eq!(effects.last(), Some(&Effect::Focus(Control::Close)));

        lightbox.prev();
        assert_eq!(lightbox.index(), Some(2));
        lightbox.next();
        assert_eq!(lightbox.index(), Some(0));

        let effects = lightbox.close();
        assert!(!lightbox.is_open());
        assert!(lightbox.photos().is_empty());
        assert_eq!(
            effects,
            vec![
                Effect::UnlockScroll,
                Effect::ReleaseKeys,
                Effect::RestoreFocus("tile"),
            ]
        );
    }

    #[test]
    fn test_show_effect_contents() {
        let (_, effects) = open_at(3, 1);
        let view = effects
            .iter()
            .find_map(|e| match e {
                Effect::Show(view) => Some(view.clone()),
                _ => None,
            })
            .unwrap();

        assert_eq!(view.src, photo_refs(3)[1].large);
        assert_eq!(view.alt, "Concert photo 2");
        assert_eq!(view.counter, "2 / 3");
        assert!(view.nav_visible);
    }

    #[test]
    fn test_circular_navigation_returns_to_start() {
        for n in 2..6 {
            for start in 0..n {
                let (mut lightbox, _) = open_at(n, start);
                for _ in 0..n {
                    lightbox.next();
                }
                assert_eq!(lightbox.index(), Some(start));
                for _ in 0..n {
                    lightbox.prev();
                }
                assert_eq!(lightbox.index(), Some(start));
            }
        }
    }

    #[test]
    fn test_single_photo_hides_navigation() {
        let (mut lightbox, effects) = open_at(1, 0);
        assert!(!lightbox.nav_visible());
        assert!(preloads(&effects).is_empty());

        assert!(lightbox.next().is_empty());
        assert!(lightbox.prev().is_empty());
        assert_eq!(lightbox.index(), Some(0));

        let view = lightbox.view().unwrap();
        assert!(!view.nav_visible);
        assert_eq!(view.counter, "1 / 1");
    }

    #[test]
    fn test_preloads_adjacent_large_images() {
        let photos = photo_refs(4);
        let (mut lightbox, effects) = open_at(4, 0);
        assert_eq!(
            preloads(&effects),
            vec![photos[3].large.as_str(), photos[1].large.as_str()]
        );

        let effects = lightbox.next();
        assert_eq!(
            preloads(&effects),
            vec![photos[0].large.as_str(), photos[2].large.as_str()]
        );
    }

    #[test]
    fn test_two_photos_preload_neighbour_once() {
        let photos = photo_refs(2);
        let (_, effects) = open_at(2, 0);
        assert_eq!(preloads(&effects), vec![photos[1].large.as_str()]);
    }

    #[test]
    fn test_open_empty_stays_closed() {
        let mut lightbox: Lightbox<&str> = Lightbox::new();
        let effects = lightbox.open(Vec::new(), 0, Some("tile"));
        assert!(effects.is_empty());
        assert!(!lightbox.is_open());
        assert!(lightbox.trigger().is_none());
    }

    #[test]
    fn test_open_clamps_out_of_range_index() {
        let (lightbox, _) = open_at(3, 10);
        assert_eq!(lightbox.index(), Some(2));
    }

    #[test]
    fn test_reopen_overwrites_state() {
        let (mut lightbox, _) = open_at(3, 2);
        let effects = lightbox.open(photo_refs(5), 4, Some("other"));

        assert_eq!(lightbox.index(), Some(4));
        assert_eq!(lightbox.photos().len(), 5);
        assert_eq!(lightbox.trigger(), Some(&"other"));
        assert!(!effects.contains(&Effect::LockScroll));
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lightbox: Lightbox<&str> = Lightbox::new();
        for key in [
            LightboxKey::Escape,
            LightboxKey::Left,
            LightboxKey::Right,
            LightboxKey::Tab,
            LightboxKey::Enter,
        ] {
            assert!(lightbox.handle_key(key).is_empty());
        }
        assert!(lightbox.close().is_empty());
        assert!(lightbox.next().is_empty());
    }

    #[test]
    fn test_keyboard_contract() {
        let (mut lightbox, _) = open_at(3, 0);

        lightbox.handle_key(LightboxKey::Right);
        assert_eq!(lightbox.index(), Some(1));
        lightbox.handle_key(LightboxKey::Left);
        lightbox.handle_key(LightboxKey::Left);
        assert_eq!(lightbox.index(), Some(2));

        let effects = lightbox.handle_key(LightboxKey::Escape);
        assert!(!lightbox.is_open());
        assert!(effects.contains(&Effect::RestoreFocus("tile")));
    }

    #[test]
    fn test_focus_trap_cycles() {
        let (mut lightbox, _) = open_at(3, 0);
        assert_eq!(lightbox.focused(), Some(Control::Close));

        assert_eq!(
            lightbox.handle_key(LightboxKey::ShiftTab),
            vec![Effect::Focus(Control::Next)]
        );
        assert_eq!(
            lightbox.handle_key(LightboxKey::Tab),
            vec![Effect::Focus(Control::Close)]
        );

        lightbox.handle_key(LightboxKey::Tab);
        lightbox.handle_key(LightboxKey::Tab);
        assert_eq!(lightbox.focused(), Some(Control::Next));
        lightbox.handle_key(LightboxKey::Tab);
        assert_eq!(lightbox.focused(), Some(Control::Close));
    }

    #[test]
    fn test_focus_trap_single_photo_stays_on_close() {
        let (mut lightbox, _) = open_at(1, 0);
        lightbox.handle_key(LightboxKey::Tab);
        assert_eq!(lightbox.focused(), Some(Control::Close));
        lightbox.handle_key(LightboxKey::ShiftTab);
        assert_eq!(lightbox.focused(), Some(Control::Close));
    }

    #[test]
    fn test_enter_activates_focused_control() {
        let (mut lightbox, _) = open_at(3, 0);
        lightbox.handle_key(LightboxKey::Tab);
        lightbox.handle_key(LightboxKey::Tab);
        assert_eq!(lightbox.focused(), Some(Control::Next));

        lightbox.handle_key(LightboxKey::Enter);
        assert_eq!(lightbox.index(), Some(1));

        lightbox.handle_key(LightboxKey::Tab);
        lightbox.handle_key(LightboxKey::Enter);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_dispatch_backdrop_click_closes() {
        let mut lightbox = Lightbox::new();
        lightbox.dispatch(LightboxEvent::Open {
            photos: photo_refs(2),
            start: 1,
            trigger: Some(7_usize),
        });
        assert_eq!(lightbox.index(), Some(1));

        let effects = lightbox.dispatch(LightboxEvent::BackdropClick);
        assert!(!lightbox.is_open());
        assert_eq!(effects.last(), Some(&Effect::RestoreFocus(7)));
    }

    #[test]
    fn test_close_without_trigger() {
        let mut lightbox: Lightbox<&str> = Lightbox::new();
        lightbox.open(photo_refs(2), 0, None);
        assert_eq!(
            lightbox.close(),
            vec![Effect::UnlockScroll, Effect::ReleaseKeys]
        );
    }
}
