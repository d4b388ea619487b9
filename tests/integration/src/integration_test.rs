//! End-to-end flow: config file -> resolver -> coverage -> one script.

use pretty_assertions::assert_eq;
use setup_coverage::{CoverageConfigurator, CoverageDriver};
use setup_extensions::{ExtensionRequest, ExtensionResolver};
use setup_meta::{Platform, RuntimeVersion, load_config};
use setup_script::ScriptFragment;
use std::fs;
use tempfile::TempDir;

/// Write a setup.toml into a fresh temp dir.
fn setup_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("setup.toml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

/// Extensions followed by coverage, as a CI job would assemble them.
fn build_script(
    resolver: &ExtensionResolver,
    platform: Platform,
    version: &str,
    extensions: &str,
    driver: CoverageDriver,
) -> ScriptFragment {
    let ctx = resolver.context(platform, RuntimeVersion::parse(version).unwrap());
    let mut script = resolver.resolve(&ExtensionRequest::parse(extensions), &ctx, None);
    script.append(CoverageConfigurator::with_resolver(resolver.clone()).configure(driver, &ctx));
    script
}

#[test]
fn test_full_linux_job_with_config() {
    let (_temp, path) = setup_config(
        r#"
[paths]
ini_file = "/etc/php/7.4/cli/php.ini"
scripts_dir = "/home/runner/setup-php/src/scripts/ext"

[[extension]]
name = "relay"
platform = "linux"
versions = ">=7.4"
command = "sh /home/runner/relay.sh"
"#,
    );
    let config = load_config(&path).unwrap();
    let resolver = ExtensionResolver::from_config(&config).unwrap();

    let script = build_script(
        &resolver,
        Platform::Linux,
        "7.4",
        "relay, gearman, pdo_pgsql",
        CoverageDriver::Pcov,
    );

    let lines: Vec<&str> = script.lines().iter().map(String::as_str).collect();
    assert_eq!(
        lines,
        vec![
            r#"step_log "Setup Extensions""#,
            "sh /home/runner/relay.sh",
            "sh /home/runner/setup-php/src/scripts/ext/gearman.sh 7.4",
            r#"add_extension pdo_pgsql "sudo $debconf_fix apt-get install -y php7.4-pgsql >/dev/null 2>&1" extension"#,
            r#"step_log "Set Coverage Driver""#,
            r#"add_extension pcov "sudo $debconf_fix apt-get install -y php7.4-pcov >/dev/null 2>&1" extension"#,
            r#"echo "pcov.enabled=1" >> /etc/php/7.4/cli/php.ini"#,
            r#"add_log "$tick" "pcov.enabled=1" "Added to php.ini""#,
            "if [ -e /etc/php/7.4/mods-available/xdebug.ini ]; then sudo phpdismod -v 7.4 xdebug; fi",
            r#"sudo sed -i "/xdebug/d" /etc/php/7.4/cli/php.ini"#,
            r#"echo "\033[32;1mSet Coverage Driver: PCOV enabled as coverage driver\033[0m""#,
        ]
    );
}

#[test]
fn test_override_outside_constraint_uses_builtin() {
    let (_temp, path) = setup_config(
        r#"
[[extension]]
name = "relay"
versions = ">=8.0"
command = "install-relay"
"#,
    );
    let resolver = ExtensionResolver::from_config(&load_config(&path).unwrap()).unwrap();

    let script = build_script(&resolver, Platform::Darwin, "7.4", "relay", CoverageDriver::None);
    assert!(!script.contains("install-relay"));
    assert!(script.contains(r#"add_extension relay "pecl_install relay >/dev/null 2>&1" extension"#));
}

#[test]
fn test_windows_job_default_paths() {
    let resolver = ExtensionResolver::new();
    let script = build_script(
        &resolver,
        Platform::Win32,
        "7.2",
        "phalcon3, sqlite",
        CoverageDriver::Xdebug,
    );

    let lines: Vec<&str> = script.lines().iter().map(String::as_str).collect();
    assert_eq!(
        lines,
        vec![
            r#"Step-Log "Setup Extensions""#,
            r"& src\scripts\ext\phalcon.ps1 phalcon3 7.2",
            "Add-Extension sqlite3",
            r#"Step-Log "Set Coverage Driver""#,
            "Add-Extension xdebug",
            r#"Write-Host "Set Coverage Driver: Xdebug enabled as coverage driver" -ForegroundColor green"#,
        ]
    );
}

#[test]
fn test_config_errors_surface_before_generation() {
    let (_temp, path) = setup_config("[[extension]]\nname = \"relay\"\nversions = \"~~\"\ncommand = \"x\"\n");
    assert!(load_config(&path).is_err());
}
