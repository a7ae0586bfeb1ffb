use crate::types::ThemeMode;

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Value of the `data-theme` attribute on the app root.
    ///
    /// Only the active mode's styles are injected, and they also target
    /// `:root` and `body` so the page outside the app root follows the theme.
    pub fn as_attr(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Light mode",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Dark mode",
        },
    }
}

const DARK_THEME: &str = r#"
:root,
[data-theme="dark"] {
    --color-bg-primary: #0d1117;
    --color-bg-secondary: #161b22;
    --color-text-primary: #e6edf3;
    --color-text-muted: #8b949e;
    --color-border: #30363d;
    --color-input-bg: #0d1117;
    --color-input-border: #30363d;
    --color-accent: #2f81f7;
    --color-chat-user-bg: #1f6feb;
    --color-chat-user-text: #ffffff;
    --color-chat-ai-bg: #21262d;
    --color-chat-ai-text: #e6edf3;
    --color-status-error: #f85149;
    --color-timestamp: #6e7681;
}
body {
    background: var(--color-bg-primary);
    color: var(--color-text-primary);
}
"#;

const LIGHT_THEME: &str = r#"
:root,
[data-theme="light"] {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f6f8fa;
    --color-text-primary: #1f2328;
    --color-text-muted: #59636e;
    --color-border: #d1d9e0;
    --color-input-bg: #ffffff;
    --color-input-border: #d1d9e0;
    --color-accent: #0969da;
    --color-chat-user-bg: #0969da;
    --color-chat-user-text: #ffffff;
    --color-chat-ai-bg: #f6f8fa;
    --color-chat-ai-text: #1f2328;
    --color-status-error: #d1242f;
    --color-timestamp: #818b98;
}
body {
    background: var(--color-bg-primary);
    color: var(--color-text-primary);
}
"#;
