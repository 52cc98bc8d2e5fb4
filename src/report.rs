//! Post-install verification and the failure summary.

use crate::install::{CommandRunner, StructuredCommand};
use crate::menu::Prompter;
use crate::options::WizardOptions;
use crate::session::Session;
use crate::WizardError;
use std::io::{BufRead, Write};

/// Manual install hint for a failed item.
///
/// This is a simpler heuristic than the installer's classifier: an
/// `Appium` prefix means the toolchain, a name containing `driver` means
/// a driver, and anything else is treated as a global npm package.
///
/// ```rust
/// use appium_setup::remediation_hint;
///
/// assert_eq!(remediation_hint("Appium latest", "latest"), "- Appium: npm install -g appium@latest");
/// assert_eq!(remediation_hint("gecko", "latest"), "- gecko: npm install -g gecko");
/// ```
pub fn remediation_hint(item: &str, toolchain_version: &str) -> String {
    if item.starts_with("Appium") {
        format!("- Appium: npm install -g appium@{}", toolchain_version)
    } else if item.contains("driver") {
        format!("- {}: appium driver install {}", item, item)
    } else {
        format!("- {}: npm install -g {}", item, item)
    }
}

/// Run the best-effort verification queries.
///
/// Each query only affects its own output line.
pub async fn verify<R, W, C>(
    prompter: &mut Prompter<R, W>,
    runner: &C,
    options: &WizardOptions,
) -> Result<(), WizardError>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    prompter.println("\n🔍 Verifying installation...")?;

    let version = StructuredCommand::new(&options.appium_program, ["--version"]);
    match runner.capture(&version, options.probe_timeout).await {
        Ok(out) => prompter.println(format!("✅ Appium version: {}", out.trim()))?,
        Err(error) => {
            tracing::warn!(%error, "appium version query failed");
            prompter.println("❌ Could not verify Appium installation")?
        }
    }

    let drivers = StructuredCommand::new(&options.appium_program, ["driver", "list"]);
    match runner.capture(&drivers, options.probe_timeout).await {
        Ok(out) => {
            prompter.println("\n📋 Installed drivers:")?;
            prompter.println(out.trim_end())?;
        }
        Err(error) => {
            tracing::warn!(%error, "driver list query failed");
            prompter.println("❌ Could not get driver list")?
        }
    }
    Ok(())
}

/// Print the failed items and their manual install hints, or a success line.
pub fn print_failure_summary<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &Session,
) -> Result<(), WizardError> {
    let failures = session.failures();
    if failures.is_empty() {
        return prompter.println("\n🎉 All installations completed successfully!");
    }

    prompter.println("\n⚠️  Failed installations:")?;
    for item in &failures {
        prompter.println(format!("❌ {}", item))?;
    }

    let version = session.toolchain_version.as_deref().unwrap_or("latest");
    prompter.println("\n🔧 Manual installation instructions:")?;
    for item in &failures {
        prompter.println(remediation_hint(item, version))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::InstallError;
    use crate::testing::ScriptedRunner;
    use crate::Platform;
    use std::io::Cursor;

    fn prompter() -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(Vec::new()), Vec::new())
    }

    fn text(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    fn failed() -> Result<(), InstallError> {
        Err(InstallError::InstallerFailed {
            message: "exit 1".to_string(),
            exit_code: Some(1),
            fix: String::new(),
        })
    }

    #[test]
    fn test_remediation_hint_rules() {
        assert_eq!(
            remediation_hint("Appium 2.11.0", "2.11.0"),
            "- Appium: npm install -g appium@2.11.0"
        );
        assert_eq!(
            remediation_hint("appium-flutter-driver", "latest"),
            "- appium-flutter-driver: appium driver install appium-flutter-driver"
        );
        // Official driver names carry no "driver" keyword.
        assert_eq!(
            remediation_hint("xcuitest", "latest"),
            "- xcuitest: npm install -g xcuitest"
        );
        // "execute-driver" is a plugin, but the heuristic only looks at the name.
        assert_eq!(
            remediation_hint("execute-driver", "latest"),
            "- execute-driver: appium driver install execute-driver"
        );
    }

    #[test]
    fn test_summary_lists_failures_in_order() {
        let mut session = Session::new(Platform::Linux);
        session.toolchain_version = Some("3.0.0".to_string());
        session.record("Appium 3.0.0", failed());
        session.record("images", Ok(()));
        session.record("appium-wait-plugin", failed());

        let mut p = prompter();
        print_failure_summary(&mut p, &session).unwrap();
        let out = text(p);
        let first = out.find("❌ Appium 3.0.0").unwrap();
        let second = out.find("❌ appium-wait-plugin").unwrap();
        assert!(first < second);
        assert!(!out.contains("❌ images"));
        assert!(out.contains("- Appium: npm install -g appium@3.0.0"));
        assert!(out.contains("- appium-wait-plugin: npm install -g appium-wait-plugin"));
    }

    #[test]
    fn test_summary_all_succeeded() {
        let mut session = Session::new(Platform::MacOs);
        session.record("gecko", Ok(()));
        let mut p = prompter();
        print_failure_summary(&mut p, &session).unwrap();
        assert_eq!(text(p), "\n🎉 All installations completed successfully!\n");
    }

    #[tokio::test]
    async fn test_verify_each_line_independent() {
        let runner = ScriptedRunner::new().with_output("appium driver list", "- xcuitest@7.1.0 [installed]\n");
        let mut p = prompter();
        verify(&mut p, &runner, &WizardOptions::default()).await.unwrap();
        let out = text(p);
        assert!(out.contains("❌ Could not verify Appium installation"));
        assert!(out.contains("📋 Installed drivers:\n- xcuitest@7.1.0 [installed]"));
        assert!(!out.contains("Could not get driver list"));
    }

    #[tokio::test]
    async fn test_verify_success() {
        let runner = ScriptedRunner::new().with_output("appium --version", "3.0.0\n");
        let mut p = prompter();
        verify(&mut p, &runner, &WizardOptions::default()).await.unwrap();
        let out = text(p);
        assert!(out.contains("✅ Appium version: 3.0.0"));
        assert!(out.contains("❌ Could not get driver list"));
    }
}
