//! Keyboard input handlers for the application

use anyhow::Result;
use crossterm::event::KeyCode;

use super::state::*;
use super::{wizard, App};
use crate::constants::MAX_INPUT_LENGTH;

impl App {
    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        // Handle exit confirmation dialog
        if self.show_exit_confirm {
            match key {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.show_exit_confirm = false;
                }
                _ => {}
            }
            return Ok(());
        }

        // Blocking alert swallows everything until dismissed
        if self.alert.is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return Ok(());
        }

        // Escape goes back (show confirm on the first step)
        if key == KeyCode::Esc {
            match self.wizard.step() {
                Step::Welcome => self.show_exit_confirm = true,
                Step::Locale | Step::Disk | Step::User | Step::Summary => {
                    self.apply(wizard::retreat(&self.wizard));
                }
                Step::Install | Step::Complete => {}
            }
            return Ok(());
        }

        match self.wizard.step() {
            Step::Welcome => self.handle_welcome_key(key),
            Step::Locale => self.handle_locale_key(key),
            Step::Disk => self.handle_disk_key(key),
            Step::User => self.handle_user_key(key),
            Step::Summary => self.handle_summary_key(key),
            Step::Install => self.handle_install_key(key),
            Step::Complete => self.handle_complete_key(key),
        }

        Ok(())
    }

    /// Validated forward navigation; failures become an alert or a hint
    fn try_advance(&mut self) {
        match wizard::advance(&self.wizard, &self.form) {
            Ok(transition) => self.apply(transition),
            Err(e) if e.is_blocking() => {
                tracing::debug!("Validation failed on {:?}: {}", self.wizard.step(), e);
                self.alert = Some(e.to_string());
            }
            Err(e) => {
                self.hint = Some(e.to_string());
            }
        }
    }

    fn handle_welcome_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.try_advance(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.show_exit_confirm = true,
            _ => {}
        }
    }

    fn handle_locale_key(&mut self, key: KeyCode) {
        let (options, cursor) = match self.locale_focus {
            LocaleField::Language => (&self.config.languages, &mut self.language_cursor),
            LocaleField::Timezone => (&self.config.timezones, &mut self.timezone_cursor),
        };

        match key {
            KeyCode::Tab | KeyCode::BackTab => {
                self.locale_focus = match self.locale_focus {
                    LocaleField::Language => LocaleField::Timezone,
                    LocaleField::Timezone => LocaleField::Language,
                };
            }
            KeyCode::Up | KeyCode::Char('k') => {
                *cursor = cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if *cursor + 1 < options.len() {
                    *cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(option) = options.get(*cursor) {
                    let value = option.value.clone();
                    match self.locale_focus {
                        LocaleField::Language => self.form.language = value,
                        LocaleField::Timezone => self.form.timezone = value,
                    }
                    self.hint = None;
                }
            }
            KeyCode::Enter => self.try_advance(),
            _ => {}
        }
    }

    fn handle_disk_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if matches!(self.disks, DiskList::Failed(_)) {
                    self.load_disks();
                }
            }
            KeyCode::Enter => self.try_advance(),
            _ => {}
        }

        let DiskList::Loaded(disks) = &self.disks else {
            return;
        };
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.disk_cursor = self.disk_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.disk_cursor + 1 < disks.len() {
                    self.disk_cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(disk) = disks.get(self.disk_cursor) {
                    tracing::info!("Selected disk {}", disk.device);
                    self.wizard = wizard::select_disk(&self.wizard, &disk.device);
                    self.hint = None;
                }
            }
            _ => {}
        }
    }

    fn handle_user_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab | KeyCode::Down => {
                self.user_field = self.user_field.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.user_field = self.user_field.prev();
            }
            KeyCode::Char(c) => {
                let field = self.active_user_input();
                if field.chars().count() < MAX_INPUT_LENGTH {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                self.active_user_input().pop();
            }
            KeyCode::Enter => self.try_advance(),
            _ => {}
        }
    }

    fn active_user_input(&mut self) -> &mut String {
        match self.user_field {
            UserField::FullName => &mut self.form.fullname,
            UserField::Username => &mut self.form.username,
            UserField::Password => &mut self.form.password,
            UserField::ConfirmPassword => &mut self.form.password_confirm,
        }
    }

    fn handle_summary_key(&mut self, key: KeyCode) {
        if key == KeyCode::Enter {
            self.start_installation();
        }
    }

    fn handle_install_key(&mut self, key: KeyCode) {
        // Leaving is only offered once the installation can no longer finish
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q'))
            && self.install.phase == InstallPhase::Failed
        {
            self.show_exit_confirm = true;
        }
    }

    fn handle_complete_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') | KeyCode::Char('R') => self.request_reboot(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, goto};
    use super::*;
    use crate::api::DiskDescriptor;
    use crate::commands::errors::ParsedError;

    fn disk(device: &str) -> DiskDescriptor {
        DiskDescriptor {
            device: device.to_string(),
            model: None,
            size: 1 << 30,
        }
    }

    async fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).await.unwrap();
        }
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c)).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_escape_on_welcome_asks_to_exit() {
        let (mut app, _rx) = app();
        press(&mut app, &[KeyCode::Esc]).await;
        assert!(app.show_exit_confirm);
        press(&mut app, &[KeyCode::Char('n')]).await;
        assert!(!app.show_exit_confirm);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_locale_selection_and_advance() {
        let (mut app, _rx) = app();
        press(&mut app, &[KeyCode::Enter]).await;
        assert_eq!(app.wizard.step(), Step::Locale);

        // Nothing chosen yet: a hint, no alert, no movement
        press(&mut app, &[KeyCode::Enter]).await;
        assert_eq!(app.wizard.step(), Step::Locale);
        assert!(app.hint.is_some());
        assert!(app.alert.is_none());

        press(
            &mut app,
            &[KeyCode::Down, KeyCode::Char(' '), KeyCode::Tab, KeyCode::Char(' ')],
        )
        .await;
        assert_eq!(app.form.language, app.config.languages[1].value);
        assert_eq!(app.form.timezone, app.config.timezones[0].value);

        press(&mut app, &[KeyCode::Enter]).await;
        assert_eq!(app.wizard.step(), Step::Disk);
    }

    #[tokio::test]
    async fn test_disk_selection_moves_with_cursor() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::Disk);
        app.disks = DiskList::Loaded(vec![disk("/dev/sda"), disk("/dev/sdb")]);

        press(&mut app, &[KeyCode::Char(' ')]).await;
        assert_eq!(app.wizard.selected_disk.as_deref(), Some("/dev/sda"));
        press(&mut app, &[KeyCode::Down, KeyCode::Char(' ')]).await;
        assert_eq!(app.wizard.selected_disk.as_deref(), Some("/dev/sdb"));

        press(&mut app, &[KeyCode::Down]).await;
        assert_eq!(app.disk_cursor, 1);

        press(&mut app, &[KeyCode::Enter]).await;
        assert_eq!(app.wizard.step(), Step::User);
    }

    #[tokio::test]
    async fn test_disk_retry_only_after_failure() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::Disk);
        app.disks = DiskList::Failed(ParsedError {
            summary: "Loading disks failed".to_string(),
            detail: None,
            suggestion: "Press r".to_string(),
        });

        press(&mut app, &[KeyCode::Char('r')]).await;
        assert!(matches!(app.disks, DiskList::Loading));

        // Already in flight: a second retry is ignored
        press(&mut app, &[KeyCode::Char('r')]).await;
        assert!(matches!(app.disks, DiskList::Loading));
    }

    #[tokio::test]
    async fn test_user_step_blocking_alert() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::User);

        press(&mut app, &[KeyCode::Tab]).await;
        type_text(&mut app, "alice").await;
        press(&mut app, &[KeyCode::Tab]).await;
        type_text(&mut app, "pass1").await;
        press(&mut app, &[KeyCode::Tab]).await;
        type_text(&mut app, "pass2").await;

        press(&mut app, &[KeyCode::Enter]).await;
        assert_eq!(app.alert.as_deref(), Some("Passwords do not match."));
        assert_eq!(app.wizard.step(), Step::User);

        // Keys other than Enter/Esc are swallowed by the alert
        press(&mut app, &[KeyCode::Backspace]).await;
        assert_eq!(app.form.password_confirm, "pass2");
        press(&mut app, &[KeyCode::Esc]).await;
        assert!(app.alert.is_none());
        assert_eq!(app.wizard.step(), Step::User);

        press(&mut app, &[KeyCode::Backspace]).await;
        type_text(&mut app, "1").await;
        press(&mut app, &[KeyCode::Enter]).await;
        assert_eq!(app.alert.as_deref(), Some("Password must be at least 6 characters long."));
    }

    #[tokio::test]
    async fn test_escape_retreats_without_validation() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::User);
        press(&mut app, &[KeyCode::Esc]).await;
        assert_eq!(app.wizard.step(), Step::Disk);
        assert_eq!(app.visible, Some(Step::Disk));
    }

    #[tokio::test]
    async fn test_escape_ignored_during_install() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::Install);
        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]).await;
        assert_eq!(app.wizard.step(), Step::Install);
        assert!(!app.show_exit_confirm);
    }

    #[tokio::test]
    async fn test_complete_step_keys() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::Complete);
        press(&mut app, &[KeyCode::Char('r')]).await;
        assert!(app.reboot_requested);
        press(&mut app, &[KeyCode::Char('q')]).await;
        assert!(app.should_quit);
    }
}
