//! Button table

use super::action::Action;
use super::dispatch;
use crate::touch::ScreenPoint;

/// Number of buttons on the panel
pub const BUTTON_COUNT: usize = 8;

/// Number of buttons active while locked (the lock toggle only)
pub const LOCKED_BUTTON_COUNT: usize = 1;

/// Icon references; pixel data is owned by the display side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconId {
    Water,
    RecycleWater,
    Wash,
    TumbleDry,
    Play,
    Backward,
    Forward,
    Locked,
    Unlocked,
}

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive containment: both `x + width` and `y + height` are inside
    pub fn contains(&self, point: ScreenPoint) -> bool {
        let (px, py) = (u32::from(point.x), u32::from(point.y));
        let (x0, y0) = (u32::from(self.x), u32::from(self.y));
        let x1 = x0 + u32::from(self.width);
        let y1 = y0 + u32::from(self.height);

        (x0..=x1).contains(&px) && (y0..=y1).contains(&py)
    }
}

/// Button identifiers in registry order
///
/// The lock toggle is first so that the locked subset is a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Lock,
    Play,
    SpinTime,
    RinseCount,
    Bubbles,
    HeavyDuty,
    Next,
    Previous,
}

impl ButtonId {
    /// All buttons in registry order
    pub const ALL: [ButtonId; BUTTON_COUNT] = [
        ButtonId::Lock,
        ButtonId::Play,
        ButtonId::SpinTime,
        ButtonId::RinseCount,
        ButtonId::Bubbles,
        ButtonId::HeavyDuty,
        ButtonId::Next,
        ButtonId::Previous,
    ];

    /// Action bound to this button
    pub const fn action(self) -> Action {
        match self {
            ButtonId::Lock => Action::ToggleLock,
            ButtonId::Play => Action::Play,
            ButtonId::SpinTime => Action::IncrementSpinTime,
            ButtonId::RinseCount => Action::IncrementRinseCount,
            ButtonId::Bubbles => Action::ToggleBubbles,
            ButtonId::HeavyDuty => Action::ToggleHeavyDuty,
            ButtonId::Next => Action::NextCycle,
            ButtonId::Previous => Action::PreviousCycle,
        }
    }
}

/// An interactive screen region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub id: ButtonId,
    pub rect: Rect,
    pub icon: IconId,
}

impl Button {
    pub const fn new(id: ButtonId, rect: Rect, icon: IconId) -> Self {
        Self { id, rect, icon }
    }

    pub const fn action(&self) -> Action {
        self.id.action()
    }
}

/// Factory button layout for a 480x320 landscape screen
pub const DEFAULT_LAYOUT: [Button; BUTTON_COUNT] = [
    Button::new(ButtonId::Lock, Rect::new(360, 10, 60, 60), IconId::Unlocked),
    Button::new(ButtonId::Play, Rect::new(250, 230, 100, 80), IconId::Play),
    Button::new(ButtonId::SpinTime, Rect::new(10, 90, 60, 60), IconId::RecycleWater),
    Button::new(ButtonId::RinseCount, Rect::new(10, 10, 60, 60), IconId::Water),
    Button::new(ButtonId::Bubbles, Rect::new(10, 170, 60, 60), IconId::Wash),
    Button::new(ButtonId::HeavyDuty, Rect::new(10, 250, 60, 60), IconId::TumbleDry),
    Button::new(ButtonId::Next, Rect::new(370, 230, 100, 80), IconId::Forward),
    Button::new(ButtonId::Previous, Rect::new(130, 230, 100, 80), IconId::Backward),
];

/// The button table plus the lock state
#[derive(Debug, Clone)]
pub struct ButtonRegistry {
    buttons: [Button; BUTTON_COUNT],
    locked: bool,
}

impl ButtonRegistry {
    /// Create an unlocked registry
    pub const fn new(buttons: [Button; BUTTON_COUNT]) -> Self {
        Self {
            buttons,
            locked: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of buttons that can currently fire
    pub fn active_count(&self) -> usize {
        if self.locked {
            LOCKED_BUTTON_COUNT
        } else {
            BUTTON_COUNT
        }
    }

    /// Buttons that can currently fire, in registry order
    pub fn active(&self) -> &[Button] {
        &self.buttons[..self.active_count()]
    }

    /// Every button, regardless of lock state
    pub fn all(&self) -> &[Button] {
        &self.buttons
    }

    /// Button by id
    pub fn get(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Resolve a point against the active subset
    pub fn hit_test(&self, point: ScreenPoint) -> Option<&Button> {
        dispatch::hit_test(self.active(), point)
    }

    /// Flip the lock state and swap the lock button's icon
    ///
    /// Returns the updated lock button, or `None` if the table has no
    /// lock button.
    pub fn toggle_lock(&mut self) -> Option<Button> {
        self.locked = !self.locked;
        let icon = if self.locked {
            IconId::Locked
        } else {
            IconId::Unlocked
        };

        let button = self.buttons.iter_mut().find(|b| b.id == ButtonId::Lock)?;
        button.icon = icon;
        Some(*button)
    }
}

impl Default for ButtonRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert!(rect.contains(ScreenPoint::new(10, 20)));
        assert!(rect.contains(ScreenPoint::new(40, 60)));
        assert!(!rect.contains(ScreenPoint::new(41, 60)));
        assert!(!rect.contains(ScreenPoint::new(40, 61)));
        assert!(!rect.contains(ScreenPoint::new(9, 20)));
    }

    #[test]
    fn test_rect_at_screen_edge_does_not_overflow() {
        let rect = Rect::new(u16::MAX - 5, 0, 10, 10);
        assert!(rect.contains(ScreenPoint::new(u16::MAX, 5)));
    }

    #[test]
    fn test_layout_order_matches_ids() {
        for (button, id) in DEFAULT_LAYOUT.iter().zip(ButtonId::ALL) {
            assert_eq!(button.id, id);
        }
        assert_eq!(DEFAULT_LAYOUT[0].id, ButtonId::Lock);
    }

    #[test]
    fn test_starts_unlocked() {
        let registry = ButtonRegistry::default();
        assert!(!registry.is_locked());
        assert_eq!(registry.active_count(), BUTTON_COUNT);
        assert_eq!(
            registry.get(ButtonId::Lock).map(|b| b.icon),
            Some(IconId::Unlocked)
        );
    }

    #[test]
    fn test_toggle_lock_round_trip() {
        let mut registry = ButtonRegistry::default();

        let lock = registry.toggle_lock();
        assert!(registry.is_locked());
        assert_eq!(registry.active_count(), 1);
        assert_eq!(lock.map(|b| b.icon), Some(IconId::Locked));

        let lock = registry.toggle_lock();
        assert!(!registry.is_locked());
        assert_eq!(registry.active_count(), 8);
        assert_eq!(lock.map(|b| b.icon), Some(IconId::Unlocked));
    }

    #[test]
    fn test_locked_only_lock_fires() {
        let mut registry = ButtonRegistry::default();
        registry.toggle_lock();

        // Play centre
        assert!(registry.hit_test(ScreenPoint::new(300, 270)).is_none());
        let hit = registry.hit_test(ScreenPoint::new(390, 40));
        assert_eq!(hit.map(|b| b.id), Some(ButtonId::Lock));
    }

    #[test]
    fn test_each_button_reachable_at_its_centre() {
        let registry = ButtonRegistry::default();
        for button in registry.all() {
            let centre = ScreenPoint::new(
                button.rect.x + button.rect.width / 2,
                button.rect.y + button.rect.height / 2,
            );
            assert_eq!(registry.hit_test(centre).map(|b| b.id), Some(button.id));
        }
    }

    #[test]
    fn test_right_edge_misses_everything() {
        let registry = ButtonRegistry::default();
        assert!(registry.hit_test(ScreenPoint::new(480, 160)).is_none());
    }
}
