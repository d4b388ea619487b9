//! Properties that must hold across the whole platform x version matrix.

use rstest::rstest;
use setup_coverage::configure;
use setup_extensions::{resolve, xdebug_release};
use setup_meta::RuntimeVersion;

const VERSIONS: [&str; 9] = ["5.3", "5.4", "5.5", "5.6", "7.0", "7.1", "7.2", "7.3", "7.4"];

const EVERYTHING: &str = "xdebug, pcov, sqlite, mysql, grpc, protobuf, swoole, redis, \
                          imagick, gearman, phalcon3, phalcon4, ast-beta, xdebug-alpha, \
                          does_not_exist";

fn php(v: &str) -> RuntimeVersion {
    RuntimeVersion::parse(v).unwrap()
}

#[rstest]
fn test_bash_platforms_emit_no_powershell(#[values("linux", "darwin")] platform: &str) {
    for version in VERSIONS {
        let script = resolve(EVERYTHING, &php(version), platform, None).render();
        assert!(!script.contains("Add-Extension"), "{platform} {version}");
        assert!(!script.contains("Step-Log"), "{platform} {version}");
        assert!(!script.contains(".ps1"), "{platform} {version}");
    }
}

#[test]
fn test_windows_emits_no_bash() {
    for version in VERSIONS {
        let script = resolve(EVERYTHING, &php(version), "win32", None).render();
        assert!(!script.contains("add_extension"), "{version}");
        assert!(!script.contains("apt-get"), "{version}");
        assert!(!script.contains(".sh "), "{version}");
    }
}

#[rstest]
fn test_coverage_drivers_are_exclusive(
    #[values("linux", "darwin", "win32")] platform: &str,
    #[values("7.1", "7.4", "8.0")] version: &str,
) {
    let pcov = configure("pcov", &php(version), platform).render();
    assert!(pcov.contains("PCOV enabled as coverage driver"));
    // Whatever installed pcov, xdebug is taken out afterwards
    let enabled = pcov.find("pcov.enabled=1").unwrap();
    let xdebug_off = pcov.rfind("xdebug").unwrap();
    assert!(enabled < xdebug_off);

    let none = configure("none", &php(version), platform).render();
    assert!(none.contains("xdebug") && none.contains("pcov"));
    assert!(!none.contains("enabled=1"));
}

#[rstest]
#[case("5.3", "2.2.7")]
#[case("5.4", "2.4.1")]
#[case("5.5", "2.5.5")]
#[case("5.6", "2.5.5")]
#[case("7.0", "2.7.2")]
#[case("7.1", "2.9.6")]
#[case("7.2", "2.9.6")]
fn test_linux_xdebug_follows_release_table(#[case] version: &str, #[case] release: &str) {
    assert_eq!(xdebug_release(&php(version)), release);
    let script = resolve("xdebug", &php(version), "linux", None);
    assert!(script.contains(&format!("add_pecl_extension xdebug {release} zend_extension")));
}

#[test]
fn test_every_line_is_one_command() {
    for platform in ["linux", "darwin", "win32"] {
        for version in VERSIONS {
            let script = resolve(EVERYTHING, &php(version), platform, None);
            for line in script.lines() {
                assert!(!line.is_empty());
                assert!(!line.contains('\n'), "{line:?}");
            }
        }
    }
}
