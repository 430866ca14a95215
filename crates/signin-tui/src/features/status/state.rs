//! Submit control and error banner state.

/// Generation id of an error banner.
///
/// Each `Failed` shows a fresh banner; an auto-hide only applies to the
/// banner it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(pub u64);

/// Frames the banner takes to fade out once hidden by the auto-hide.
pub const FADE_FRAMES: u8 = 8;

pub const ERROR_MESSAGE: &str = "Invalid email or password";

/// The submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub loading: bool,
}

impl SubmitButton {
    pub fn label(&self) -> &'static str {
        if self.loading { "Loading.." } else { "Login" }
    }

    /// True when pressing the control would start a login.
    pub fn can_submit(&self) -> bool {
        self.enabled && !self.loading
    }
}

/// The "Invalid email or password" banner.
///
/// `current` is the logical visibility. A banner dismissed by the auto-hide
/// keeps drawing for `FADE_FRAMES` ticks while it fades out.
#[derive(Debug, Default)]
pub struct ErrorBanner {
    next_id: u64,
    current: Option<BannerId>,
    fade_frames: u8,
}

impl ErrorBanner {
    /// Reveals a new banner and returns its id.
    pub fn show(&mut self) -> BannerId {
        let id = BannerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some(id);
        self.fade_frames = 0;
        id
    }

    /// Hides the banner immediately, without fading.
    pub fn hide(&mut self) {
        self.current = None;
        self.fade_frames = 0;
    }

    /// Starts fading out `id` if it is still the banner on screen.
    ///
    /// Returns false for a stale id.
    pub fn auto_hide(&mut self, id: BannerId) -> bool {
        if self.current != Some(id) {
            return false;
        }
        self.current = None;
        self.fade_frames = FADE_FRAMES;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_fading(&self) -> bool {
        self.current.is_none() && self.fade_frames > 0
    }

    /// Whether anything should be drawn this frame.
    pub fn should_render(&self) -> bool {
        self.is_visible() || self.is_fading()
    }

    /// Remaining opacity in `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        if self.is_visible() {
            1.0
        } else {
            f32::from(self.fade_frames) / f32::from(FADE_FRAMES)
        }
    }

    /// Advances the fade animation. Returns true while still animating.
    pub fn on_tick(&mut self) -> bool {
        if self.is_fading() {
            self.fade_frames -= 1;
        }
        self.is_fading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        let mut button = SubmitButton::default();
        assert_eq!(button.label(), "Login");
        button.loading = true;
        assert_eq!(button.label(), "Loading..");
    }

    #[test]
    fn test_can_submit_requires_enabled_and_not_loading() {
        let button = SubmitButton {
            enabled: true,
            loading: true,
        };
        assert!(!button.can_submit());
        let button = SubmitButton {
            enabled: true,
            loading: false,
        };
        assert!(button.can_submit());
    }

    #[test]
    fn test_auto_hide_fades_then_disappears() {
        let mut banner = ErrorBanner::default();
        let id = banner.show();
        assert!(banner.is_visible());

        assert!(banner.auto_hide(id));
        assert!(!banner.is_visible());
        assert!(banner.is_fading());

        for _ in 0..FADE_FRAMES {
            banner.on_tick();
        }
        assert!(!banner.should_render());
    }

    #[test]
    fn test_stale_auto_hide_is_ignored() {
        let mut banner = ErrorBanner::default();
        let first = banner.show();
        let second = banner.show();
        assert_ne!(first, second);

        assert!(!banner.auto_hide(first));
        assert!(banner.is_visible());
        assert!(banner.auto_hide(second));
        assert!(!banner.auto_hide(second));
    }

    #[test]
    fn test_hide_skips_fade() {
        let mut banner = ErrorBanner::default();
        let id = banner.show();
        banner.hide();
        assert!(!banner.should_render());
        assert!(!banner.auto_hide(id));
    }

    #[test]
    fn test_opacity() {
        let mut banner = ErrorBanner::default();
        let id = banner.show();
        assert!((banner.opacity() - 1.0).abs() < f32::EPSILON);
        banner.auto_hide(id);
        banner.on_tick();
        assert!(banner.opacity() < 1.0);
    }
}
