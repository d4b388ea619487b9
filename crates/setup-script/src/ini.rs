//! php.ini directive writer.

use setup_meta::{ScriptContext, Shell};

use crate::fragment::ScriptFragment;
use crate::log::{Mark, add_log};

/// Append comma-separated ini directives to the context's php.ini.
///
/// Emits one append command per directive, followed by one `add_log` line
/// per directive. Blank entries are skipped.
pub fn add_ini_values(values_csv: &str, ctx: &ScriptContext) -> ScriptFragment {
    let values: Vec<&str> = values_csv
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    let shell = ctx.shell();
    let mut fragment = ScriptFragment::new();
    for value in &values {
        fragment.push(match shell {
            Shell::Bash => format!("echo \"{value}\" >> {}", ctx.ini_file),
            Shell::PowerShell => format!("Add-Content {} \"{value}\"", ctx.ini_file),
        });
    }
    for value in &values {
        fragment.push(add_log(Mark::Tick, value, "Added to php.ini", shell));
    }
    fragment
}
