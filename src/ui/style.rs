use crate::ui::state::notice::NoticeLevel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#1e1f22",
        }
    }

    fn foreground(self) -> &'static str {
        match self {
            Theme::Light => "#1f2328",
            Theme::Dark => "#e6e6e6",
        }
    }

    fn border(self) -> &'static str {
        match self {
            Theme::Light => "#bbb",
            Theme::Dark => "#4a4b50",
        }
    }

    fn header_background(self) -> &'static str {
        match self {
            Theme::Light => "#f3f3f3",
            Theme::Dark => "#2b2d31",
        }
    }

    fn modified_background(self) -> &'static str {
        match self {
            Theme::Light => "#fff3c4",
            Theme::Dark => "#5c4a12",
        }
    }
}

pub fn root_container_style(theme: Theme) -> String {
    format!(
        "height: 100vh; display: flex; flex-direction: column; gap: 8px; padding: 8px; box-sizing: border-box; font-family: sans-serif; background: {}; color: {};",
        theme.background(),
        theme.foreground()
    )
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto;"
}

pub fn table_style(theme: Theme) -> String {
    format!(
        "border-collapse: collapse; background: {}; color: {};",
        theme.background(),
        theme.foreground()
    )
}

pub fn table_header_cell_style(theme: Theme) -> String {
    format!(
        "position: sticky; top: 0; z-index: 1; border: 1px solid {}; padding: 4px 8px; background: {}; font-weight: 600;",
        theme.border(),
        theme.header_background()
    )
}

pub fn row_header_cell_style(theme: Theme) -> String {
    format!(
        "border: 1px solid {}; padding: 4px 8px; background: {}; text-align: right; color: #888;",
        theme.border(),
        theme.header_background()
    )
}

pub fn cell_style(theme: Theme, modified: bool) -> String {
    let background = if modified {
        theme.modified_background()
    } else {
        "transparent"
    };
    let marker = if modified {
        " box-shadow: inset 3px 0 0 #e0a800;"
    } else {
        ""
    };
    format!(
        "border: 1px solid {}; padding: 4px 8px; white-space: pre; background: {background};{marker}",
        theme.border()
    )
}

pub fn notice_style(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "padding: 6px 10px; border-radius: 4px; background: #e8eef9; color: #1c3d7a;",
        NoticeLevel::Success => {
            "padding: 6px 10px; border-radius: 4px; background: #e3f4e6; color: #1b5e20;"
        }
        NoticeLevel::Error => "padding: 6px 10px; border-radius: 4px; background: #fdecea; color: #a3161a;",
    }
}
