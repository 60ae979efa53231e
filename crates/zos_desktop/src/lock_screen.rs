//! Lock screen state: a placeholder password gate with an error flash and no lockout.

use crate::model::LockConfig;

/// How long a rejected attempt keeps the error indicator visible.
pub const ERROR_FLASH_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    Rejected,
    /// Submitting while not locked.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockScreenState {
    pub is_locked: bool,
    pub input: String,
    pub show_error: bool,
}

impl LockScreenState {
    pub fn lock(&mut self) {
        *self = Self {
            is_locked: true,
            ..Self::default()
        };
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Checks the typed password when the config asks for one.
    ///
    /// A mismatch clears the input and raises the error flash; attempts are unlimited.
    pub fn submit(&mut self, config: &LockConfig) -> UnlockOutcome {
        if !self.is_locked {
            return UnlockOutcome::Ignored;
        }
        if config.require_password && self.input != config.password {
            self.input.clear();
            self.show_error = true;
            return UnlockOutcome::Rejected;
        }
        *self = Self::default();
        UnlockOutcome::Unlocked
    }

    pub fn clear_error(&mut self) {
        self.show_error = false;
    }
}

/// Single uppercase initial used when no avatar image is configured.
pub fn avatar_initial(user_name: &str) -> String {
    user_name
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn password_config() -> LockConfig {
        LockConfig {
            require_password: true,
            ..LockConfig::default()
        }
    }

    #[test]
    fn unlock_without_password_requirement() {
        let mut lock = LockScreenState::default();
        lock.lock();

        assert_eq!(lock.submit(&LockConfig::default()), UnlockOutcome::Unlocked);
        assert!(!lock.is_locked);
    }

    #[test]
    fn wrong_password_flashes_error_and_clears_input() {
        let mut lock = LockScreenState::default();
        lock.lock();
        lock.set_input("hunter2");

        assert_eq!(lock.submit(&password_config()), UnlockOutcome::Rejected);
        assert!(lock.is_locked);
        assert!(lock.show_error);
        assert_eq!(lock.input, "");

        lock.clear_error();
        assert!(!lock.show_error);
    }

    #[test]
    fn repeated_failures_never_lock_out() {
        let mut lock = LockScreenState::default();
        lock.lock();
        for _ in 0..10 {
            lock.set_input("nope");
            assert_eq!(lock.submit(&password_config()), UnlockOutcome::Rejected);
        }

        lock.set_input("password");
        assert_eq!(lock.submit(&password_config()), UnlockOutcome::Unlocked);
        assert_eq!(lock, LockScreenState::default());
    }

    #[test]
    fn submit_while_unlocked_is_ignored() {
        let mut lock = LockScreenState::default();
        assert_eq!(lock.submit(&password_config()), UnlockOutcome::Ignored);
    }

    #[test]
    fn avatar_initial_uses_first_letter() {
        assert_eq!(avatar_initial("ada"), "A");
        assert_eq!(avatar_initial("  "), "?");
    }
}
