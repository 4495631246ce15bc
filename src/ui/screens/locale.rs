//! Language and timezone selection

use ratatui::{layout::Rect, Frame};

use crate::app::{App, LocaleField};
use crate::config::SelectOption;
use crate::ui::layout::two_columns;
use crate::ui::widgets::MenuList;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (left, right) = two_columns(area);

    let languages = option_list(
        &app.config.languages,
        app.language_cursor,
        &app.form.language,
        app.locale_focus == LocaleField::Language,
    )
    .title(" Language ");
    frame.render_widget(languages, left);

    let timezones = option_list(
        &app.config.timezones,
        app.timezone_cursor,
        &app.form.timezone,
        app.locale_focus == LocaleField::Timezone,
    )
    .title(" Timezone ");
    frame.render_widget(timezones, right);
}

fn option_list<'a>(
    options: &'a [SelectOption],
    cursor: usize,
    chosen: &str,
    focused: bool,
) -> MenuList<'a> {
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    let chosen = options.iter().position(|o| o.value == chosen);
    MenuList::new(labels, cursor).chosen(chosen).focused(focused)
}
