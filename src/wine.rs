// ~/winelocale/src/wine.rs
//
// The external-process boundary: writes the generated patch to disk,
// imports it with Wine's regedit, then launches the target executable
// with the locale environment. The core never does I/O; this module
// never computes patch content.

use std::path::Path;
use std::process::{Child, Command, ExitStatus};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::paths::patch_path;
use crate::registry::locale::Locale;
use crate::registry::logfont::FontDescriptor;
use crate::registry::patch::{assemble, PatchOptions};
use crate::{info, warn};

/// Registry import is a quick batch operation; anything slower than this
/// means a wedged wineserver and gets killed.
const REGEDIT_TIMEOUT: Duration = Duration::from_secs(120);

/// Generate the patch, import it, and run `exe` under Wine with LANG set
/// to the locale's Unix tag. A failed import aborts the launch; the
/// target's own exit status is logged but not treated as our failure.
pub fn run_with_locale(
    exe: &Path,
    locale: Locale,
    font: &FontDescriptor,
    opts: PatchOptions,
) -> Result<()> {
    let patch = assemble(locale, font, opts)?;
    let patch_file = patch_path();
    std::fs::write(&patch_file, patch)?;
    info!("Wrote registry patch to {}", patch_file.display());

    import_patch(&patch_file)?;

    let exe = exe.canonicalize()?;
    let wine_path = to_wine_path(&exe);
    info!(
        "Launching '{}' with LANG={}",
        wine_path,
        locale.unix_tag()
    );

    let status = Command::new("wine")
        .arg(&wine_path)
        .env("WINEDEBUG", "-all")
        .env("LANG", locale.unix_tag())
        .status()
        .map_err(|e| Error::ExternalTool {
            tool: "wine",
            reason: format!("failed to launch '{wine_path}': {e}"),
        })?;

    match status.code() {
        Some(0) => info!("Target exited cleanly"),
        Some(code) => warn!("Target exited with status {code}"),
        None => warn!("Target terminated by signal"),
    }

    // The registry stays patched: re-importing the same freshly generated
    // patch would restore nothing, so the old second import is gone.
    info!("Wine prefix left with the patched locale/font settings");
    Ok(())
}

/// Import a .reg patch into the prefix, bounded by REGEDIT_TIMEOUT.
fn import_patch(patch_file: &Path) -> Result<()> {
    info!("Importing registry patch via regedit");
    let child = Command::new("wine")
        .arg("regedit.exe")
        .arg(patch_file)
        .env("WINEDEBUG", "-all")
        .spawn()
        .map_err(|e| Error::ExternalTool {
            tool: "regedit",
            reason: format!("failed to launch: {e}"),
        })?;

    let status = wait_bounded(child, REGEDIT_TIMEOUT, "regedit")?;
    if !status.success() {
        return Err(Error::ExternalTool {
            tool: "regedit",
            reason: format!("import exited with {status}"),
        });
    }
    info!("Registry patch imported");
    Ok(())
}

/// Wait for a child process, killing it once the deadline passes.
fn wait_bounded(mut child: Child, timeout: Duration, tool: &'static str) -> Result<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            warn!("{tool} exceeded {}s, killing it", timeout.as_secs());
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::ExternalTool {
                tool,
                reason: format!("timed out after {}s", timeout.as_secs()),
            });
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

/// Translate an absolute host path into Wine's view through the Z:
/// drive mapping.
fn to_wine_path(path: &Path) -> String {
    format!("Z:{}", path.display().to_string().replace('/', "\\"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wine_path_translation() {
        let p = Path::new("/home/user/games/app.exe");
        assert_eq!(to_wine_path(p), "Z:\\home\\user\\games\\app.exe");
    }
}
