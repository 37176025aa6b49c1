use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const HINT_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) mod picker {
    use super::*;

    pub(crate) const OTHER_MONTH_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const DISABLED_STYLE: Style = BASE_STYLE
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT);

    pub(crate) const TODAY_STYLE: Style = BASE_STYLE
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    pub(crate) const SELECTED_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

    pub(crate) const CURSOR_STYLE: Style = BASE_STYLE
        .fg(Color::LightBlue)
        .add_modifier(Modifier::UNDERLINED);

    pub(crate) const NAV_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const NAV_DISABLED_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}

pub(crate) mod field {
    use super::*;

    pub(crate) const VALUE_STYLE: Style = BASE_STYLE;

    pub(crate) const ICON_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

    pub(crate) const FOCUSED_BORDER_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);
}
