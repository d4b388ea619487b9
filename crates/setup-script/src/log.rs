//! Status lines in the surrounding script's conventions.
//!
//! The generated fragments are spliced into a larger script that defines
//! `step_log`/`add_log` (Bash) and `Step-Log`/`Add-Log` (PowerShell) plus the
//! `$tick`/`$cross` marks. This module only formats calls to them.

use setup_meta::Shell;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Error,
    Success,
    Warning,
}

impl LogLevel {
    fn ansi_code(&self) -> &'static str {
        match self {
            LogLevel::Error => "31",
            LogLevel::Success => "32",
            LogLevel::Warning => "33",
        }
    }

    fn console_color(&self) -> &'static str {
        match self {
            LogLevel::Error => "red",
            LogLevel::Success => "green",
            LogLevel::Warning => "yellow",
        }
    }
}

/// Status mark variable passed to `add_log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Tick,
    Cross,
}

impl Mark {
    fn variable(&self) -> &'static str {
        match self {
            Mark::Tick => "$tick",
            Mark::Cross => "$cross",
        }
    }
}

/// A colored message line, prefixed with `label: ` when a label is given.
pub fn log(message: &str, shell: Shell, level: LogLevel, label: &str) -> String {
    let text = if label.is_empty() {
        message.to_string()
    } else {
        format!("{label}: {message}")
    };

    match shell {
        Shell::Bash => format!("echo \"\\033[{};1m{text}\\033[0m\"", level.ansi_code()),
        Shell::PowerShell => format!(
            "Write-Host \"{text}\" -ForegroundColor {}",
            level.console_color()
        ),
    }
}

/// A step header line.
pub fn step_log(message: &str, shell: Shell) -> String {
    match shell {
        Shell::Bash => format!("step_log \"{message}\""),
        Shell::PowerShell => format!("Step-Log \"{message}\""),
    }
}

/// A per-item result line, e.g. `add_log "$tick" "pcov.enabled=1" "Added to php.ini"`.
pub fn add_log(mark: Mark, subject: &str, message: &str, shell: Shell) -> String {
    let function = match shell {
        Shell::Bash => "add_log",
        Shell::PowerShell => "Add-Log",
    };
    format!("{function} \"{}\" \"{subject}\" \"{message}\"", mark.variable())
}

/// Redirection appended to commands whose output would clutter the log.
pub fn suppress_output(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash => " >/dev/null 2>&1",
        Shell::PowerShell => " >$null 2>&1",
    }
}

/// The line emitted in place of a script for a platform we cannot target.
pub fn unsupported_platform(platform: &str) -> String {
    tracing::warn!(platform, "Refusing to generate script for unsupported platform");
    log(
        &format!("Platform {platform} is not supported"),
        Shell::default(),
        LogLevel::Error,
        "",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(LogLevel::Error, "31")]
    #[case(LogLevel::Success, "32")]
    #[case(LogLevel::Warning, "33")]
    fn test_bash_colors(#[case] level: LogLevel, #[case] code: &str) {
        let line = log("done", Shell::Bash, level, "");
        assert_eq!(line, format!("echo \"\\033[{code};1mdone\\033[0m\""));
    }

    #[test]
    fn test_bash_label_prefix() {
        let line = log(
            "PCOV requires PHP 7.1 or newer",
            Shell::Bash,
            LogLevel::Warning,
            "Set Coverage Driver",
        );
        assert_eq!(
            line,
            r#"echo "\033[33;1mSet Coverage Driver: PCOV requires PHP 7.1 or newer\033[0m""#
        );
    }

    #[test]
    fn test_powershell_log() {
        let line = log(
            "Disabled Xdebug and PCOV",
            Shell::PowerShell,
            LogLevel::Success,
            "Set Coverage Driver",
        );
        assert_eq!(
            line,
            r#"Write-Host "Set Coverage Driver: Disabled Xdebug and PCOV" -ForegroundColor green"#
        );
    }

    #[test]
    fn test_step_log() {
        assert_eq!(step_log("Setup Extensions", Shell::Bash), r#"step_log "Setup Extensions""#);
        assert_eq!(
            step_log("Setup Extensions", Shell::PowerShell),
            r#"Step-Log "Setup Extensions""#
        );
    }

    #[test]
    fn test_add_log() {
        assert_eq!(
            add_log(Mark::Tick, "pcov.enabled=1", "Added to php.ini", Shell::Bash),
            r#"add_log "$tick" "pcov.enabled=1" "Added to php.ini""#
        );
        assert_eq!(
            add_log(Mark::Cross, "pcov", "PHP 7.1 or newer is required.", Shell::PowerShell),
            r#"Add-Log "$cross" "pcov" "PHP 7.1 or newer is required.""#
        );
    }

    #[test]
    fn test_unsupported_platform() {
        let line = unsupported_platform("fedora");
        assert!(line.contains("Platform fedora is not supported"));
        assert!(line.starts_with("echo"));
    }

    #[test]
    fn test_suppress_output() {
        assert_eq!(suppress_output(Shell::Bash), " >/dev/null 2>&1");
        assert_eq!(suppress_output(Shell::PowerShell), " >$null 2>&1");
    }
}
