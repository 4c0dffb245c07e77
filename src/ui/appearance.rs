use std::fmt;

/// Light or dark display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort guess at the system's dark-mode preference.
///
/// The terminal's own hint (`COLORFGBG`) is consulted first, then the
/// desktop setting. Returns None when neither says anything.
pub fn detect_preferred_appearance() -> Option<Appearance> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| appearance_from_colorfgbg(&value))
        .or_else(detect_via_os_hint)
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`) with ANSI color
/// indexes. Background 0-6 and 8 are dark colors.
fn appearance_from_colorfgbg(value: &str) -> Option<Appearance> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(Appearance::Dark),
        7 | 9..=15 => Some(Appearance::Light),
        _ => None,
    }
}

fn detect_via_os_hint() -> Option<Appearance> {
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;
        // `defaults` exits non-zero when AppleInterfaceStyle is unset, which
        // means light mode.
        let output = Command::new("/usr/bin/defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .ok()?;
        let dark = output.status.success()
            && String::from_utf8_lossy(&output.stdout)
                .to_ascii_lowercase()
                .contains("dark");
        return Some(if dark {
            Appearance::Dark
        } else {
            Appearance::Light
        });
    }

    #[cfg(target_os = "windows")]
    {
        use winreg::enums::HKEY_CURRENT_USER;
        use winreg::RegKey;
        let personalize = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
            .ok()?;
        let light: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
        return Some(if light == 0 {
            Appearance::Dark
        } else {
            Appearance::Light
        });
    }

    #[cfg(target_os = "linux")]
    {
        gsettings_value("color-scheme")
            .and_then(|scheme| {
                if scheme.contains("prefer-dark") {
                    Some(Appearance::Dark)
                } else if scheme.contains("default") || scheme.contains("prefer-light") {
                    Some(Appearance::Light)
                } else {
                    None
                }
            })
            // Older GNOME: dark variants carry "-dark" in the gtk theme name
            .or_else(|| {
                gsettings_value("gtk-theme").map(|theme| {
                    if theme.contains("-dark") {
                        Appearance::Dark
                    } else {
                        Appearance::Light
                    }
                })
            })
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        None
    }
}

#[cfg(target_os = "linux")]
fn gsettings_value(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_background_decides() {
        assert_eq!(appearance_from_colorfgbg("15;0"), Some(Appearance::Dark));
        assert_eq!(appearance_from_colorfgbg("0;15"), Some(Appearance::Light));
        assert_eq!(
            appearance_from_colorfgbg("12;default;8"),
            Some(Appearance::Dark)
        );
        assert_eq!(appearance_from_colorfgbg("0;7"), Some(Appearance::Light));
    }

    #[test]
    fn colorfgbg_garbage_is_ignored() {
        assert_eq!(appearance_from_colorfgbg(""), None);
        assert_eq!(appearance_from_colorfgbg("15;default"), None);
        assert_eq!(appearance_from_colorfgbg("1;200"), None);
    }
}
