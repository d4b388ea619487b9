//! Commands taking a coverage driver out of the runtime.
//!
//! Disabling has two halves: unregistering the module (linux, win32) and
//! deleting its lines from php.ini (linux, darwin). Each function returns
//! `None` where its half does not apply.

use setup_meta::{Platform, ScriptContext};

/// Unregister `extension` from the runtime's module list.
pub fn disable_module(ctx: &ScriptContext, extension: &str) -> Option<String> {
    match ctx.platform {
        Platform::Linux => Some(format!(
            "if [ -e /etc/php/{v}/mods-available/{extension}.ini ]; then sudo phpdismod -v {v} {extension}; fi",
            v = ctx.version
        )),
        Platform::Darwin => None,
        Platform::Win32 => Some(format!(
            "if(php -m | findstr -i {extension}) {{ Disable-PhpExtension {extension} {} }}",
            ctx.php_dir
        )),
    }
}

/// Delete every php.ini line mentioning `extension`.
pub fn scrub_config(ctx: &ScriptContext, extension: &str) -> Option<String> {
    match ctx.platform {
        Platform::Linux => Some(format!("sudo sed -i \"/{extension}/d\" {}", ctx.ini_file)),
        // BSD sed wants an explicit (empty) backup suffix
        Platform::Darwin => Some(format!("sudo sed -i '' \"/{extension}/d\" {}", ctx.ini_file)),
        Platform::Win32 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use setup_meta::RuntimeVersion;

    fn ctx(platform: Platform) -> ScriptContext {
        ScriptContext::new(platform, RuntimeVersion::parse("7.3").unwrap())
    }

    #[test]
    fn test_linux_both_halves() {
        let ctx = ctx(Platform::Linux);
        assert_eq!(
            disable_module(&ctx, "xdebug").unwrap(),
            "if [ -e /etc/php/7.3/mods-available/xdebug.ini ]; then sudo phpdismod -v 7.3 xdebug; fi"
        );
        assert_eq!(scrub_config(&ctx, "pcov").unwrap(), r#"sudo sed -i "/pcov/d" $ini_file"#);
    }

    #[test]
    fn test_darwin_scrub_only() {
        let ctx = ctx(Platform::Darwin);
        assert!(disable_module(&ctx, "xdebug").is_none());
        assert_eq!(
            scrub_config(&ctx, "xdebug").unwrap(),
            r#"sudo sed -i '' "/xdebug/d" $ini_file"#
        );
    }

    #[test]
    fn test_windows_module_only() {
        let mut ctx = ctx(Platform::Win32);
        assert_eq!(
            disable_module(&ctx, "pcov").unwrap(),
            r"if(php -m | findstr -i pcov) { Disable-PhpExtension pcov C:\tools\php }"
        );
        assert!(scrub_config(&ctx, "pcov").is_none());

        ctx.php_dir = r"D:\php".to_string();
        assert!(disable_module(&ctx, "xdebug").unwrap().ends_with(r"Disable-PhpExtension xdebug D:\php }"));
    }
}
