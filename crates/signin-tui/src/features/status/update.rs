//! Status reducer: folds view-model notifications into the submit control
//! and the error banner.

use signin_core::{LoginStatus, ValidationResult};

use super::state::{BannerId, ErrorBanner, SubmitButton};
use crate::effects::UiEffect;

/// Tracks the login-enabled signal.
///
/// While a login is in flight the control stays disabled through `loading`;
/// the stored flag is what it returns to once the attempt resolves.
pub fn apply_validation(submit: &mut SubmitButton, result: &ValidationResult) {
    submit.enabled = result.login_enabled();
}

/// Applies a status transition to the submit control and banner.
pub fn apply_status(
    submit: &mut SubmitButton,
    banner: &mut ErrorBanner,
    validation: &ValidationResult,
    status: LoginStatus,
) -> Vec<UiEffect> {
    match status {
        LoginStatus::Idle => vec![],
        LoginStatus::Loading => {
            submit.loading = true;
            banner.hide();
            vec![]
        }
        LoginStatus::Succeeded => {
            restore(submit, validation);
            banner.hide();
            vec![]
        }
        LoginStatus::Failed => {
            restore(submit, validation);
            let id = banner.show();
            vec![UiEffect::ScheduleErrorAutoHide { banner: id }]
        }
    }
}

/// Handles an elapsed auto-hide timer.
pub fn handle_auto_hide(banner: &mut ErrorBanner, id: BannerId) {
    if !banner.auto_hide(id) {
        tracing::debug!(banner = id.0, "stale error auto-hide ignored");
    }
}

fn restore(submit: &mut SubmitButton, validation: &ValidationResult) {
    submit.loading = false;
    submit.enabled = validation.login_enabled();
}

#[cfg(test)]
mod tests {
    use signin_core::Credentials;

    use super::*;

    fn valid() -> ValidationResult {
        ValidationResult::evaluate(&Credentials::new("kumar@combine.com", "12345"))
    }

    fn invalid() -> ValidationResult {
        ValidationResult::evaluate(&Credentials::new("not-an-email", "12345"))
    }

    #[test]
    fn test_loading_disables_and_hides_banner() {
        let mut submit = SubmitButton::default();
        let mut banner = ErrorBanner::default();
        banner.show();
        apply_validation(&mut submit, &valid());

        let effects = apply_status(&mut submit, &mut banner, &valid(), LoginStatus::Loading);
        assert!(effects.is_empty());
        assert!(!submit.can_submit());
        assert_eq!(submit.label(), "Loading..");
        assert!(!banner.should_render());
    }

    #[test]
    fn test_failed_shows_banner_and_schedules_one_auto_hide() {
        let mut submit = SubmitButton::default();
        let mut banner = ErrorBanner::default();
        apply_status(&mut submit, &mut banner, &valid(), LoginStatus::Loading);

        let effects = apply_status(&mut submit, &mut banner, &valid(), LoginStatus::Failed);
        assert!(banner.is_visible());
        assert_eq!(submit.label(), "Login");
        assert!(submit.can_submit());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::ScheduleErrorAutoHide { .. }]
        ));
    }

    #[test]
    fn test_restore_follows_current_validation() {
        let mut submit = SubmitButton::default();
        let mut banner = ErrorBanner::default();
        apply_status(&mut submit, &mut banner, &valid(), LoginStatus::Loading);
        apply_validation(&mut submit, &invalid());
        assert!(!submit.can_submit());

        apply_status(&mut submit, &mut banner, &invalid(), LoginStatus::Succeeded);
        assert!(!submit.loading);
        assert!(!submit.enabled);
    }

    #[test]
    fn test_idle_is_a_no_op() {
        let mut submit = SubmitButton::default();
        let mut banner = ErrorBanner::default();
        let id = banner.show();
        let effects = apply_status(&mut submit, &mut banner, &valid(), LoginStatus::Idle);
        assert!(effects.is_empty());
        assert!(banner.is_visible());
        handle_auto_hide(&mut banner, id);
        assert!(banner.is_fading());
    }
}
