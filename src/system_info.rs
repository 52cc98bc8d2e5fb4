//! The "System Information" documentation section.
//!
//! Every check is independent: a failure only changes its own line.

use crate::detect::{detect_command, detect_tool};
use crate::environment::Environment;
use crate::install::{CommandRunner, StructuredCommand};
use crate::menu::Prompter;
use crate::options::WizardOptions;
use crate::{Platform, Tool, ToolStatus, WizardError};
use std::io::{self, BufRead, Write};
use std::net::IpAddr;

/// Variables listed in the environment section, in display order.
pub const REPORTED_VARS: &[&str] = &[
    "NODE_PATH",
    "NPM_CONFIG_PREFIX",
    "ANDROID_HOME",
    "ANDROID_SDK_ROOT",
    "JAVA_HOME",
    "PATH",
];

/// Tools listed in the installed-versions section for a host platform.
pub fn reported_tools(host: Platform) -> Vec<Tool> {
    Tool::all()
        .filter(|tool| *tool != Tool::Carthage)
        .filter(|tool| host == Platform::MacOs || !tool.is_macos_only())
        .collect()
}

/// Command printing disk usage on the host platform.
pub fn disk_space_command(host: Platform) -> StructuredCommand {
    match host {
        Platform::Windows => {
            StructuredCommand::new("wmic", ["logicaldisk", "get", "size,freespace,caption"])
        }
        _ => StructuredCommand::new("df", ["-h"]),
    }
}

/// One address assigned to a network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// Interface name, e.g. `en0` or `eth0`.
    pub interface: String,
    /// Assigned address.
    pub ip: IpAddr,
    /// Loopback interfaces are not reported.
    pub loopback: bool,
}

/// Addresses of every network interface on this host.
pub fn host_addresses() -> io::Result<Vec<InterfaceAddress>> {
    let interfaces = if_addrs::get_if_addrs()?;
    Ok(interfaces
        .into_iter()
        .map(|iface| InterfaceAddress {
            loopback: iface.is_loopback(),
            ip: iface.ip(),
            interface: iface.name,
        })
        .collect())
}

/// Lines of the network section: each external IPv4 address as
/// `<interface>: <address>`.
pub fn network_lines(addresses: &io::Result<Vec<InterfaceAddress>>) -> Vec<String> {
    match addresses {
        Ok(addresses) => std::iter::once("Network Interfaces:".to_string())
            .chain(
                addresses
                    .iter()
                    .filter(|a| a.ip.is_ipv4() && !a.loopback)
                    .map(|a| format!("{}: {}", a.interface, a.ip)),
            )
            .collect(),
        Err(error) => {
            tracing::warn!(%error, "network interface query failed");
            vec!["❌ Could not get network information".to_string()]
        }
    }
}

fn program_for(tool: Tool, options: &WizardOptions) -> &str {
    match tool {
        Tool::Appium => options.appium_program.as_str(),
        Tool::Npm => options.npm_program.as_str(),
        other => other.executable_name(),
    }
}

fn version_line(tool: Tool, status: &ToolStatus) -> String {
    match status.summary() {
        Some(summary) => format!("{}: {}", tool.display_name(), summary),
        None => format!("{}: Not installed", tool.display_name()),
    }
}

/// Print the full system information report for `host` with the given
/// interface addresses.
pub async fn show_host_information<R, W, C>(
    prompter: &mut Prompter<R, W>,
    runner: &C,
    env: &Environment,
    options: &WizardOptions,
    host: Platform,
    addresses: io::Result<Vec<InterfaceAddress>>,
) -> Result<(), WizardError>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    let limit = options.probe_timeout;
    prompter.println("\n📊 System Information")?;
    prompter.println("=====================")?;

    prompter.println("\n🖥️  System Information:")?;
    prompter.println(format!("Platform: {}", std::env::consts::OS))?;
    prompter.println(format!("Architecture: {}", std::env::consts::ARCH))?;
    let node = detect_tool(runner, Tool::Node, limit).await;
    let npm = detect_command(runner, &options.npm_program, Tool::Npm.version_args(), limit).await;
    prompter.println(format!(
        "Node.js Version: {}",
        node.summary().unwrap_or("Not available")
    ))?;
    prompter.println(format!(
        "NPM Version: {}",
        npm.summary().unwrap_or("Not available")
    ))?;

    prompter.println("\n💿 Disk Space:")?;
    let disk = disk_space_command(host);
    match runner.capture(&disk, limit).await {
        Ok(out) => {
            let label = if host == Platform::Windows {
                "Windows Disk Space:"
            } else {
                "Disk Space:"
            };
            prompter.println(label)?;
            prompter.println(out.trim_end())?;
        }
        Err(error) => {
            tracing::warn!(command = %disk, %error, "disk space query failed");
            prompter.println("❌ Could not get disk space information")?
        }
    }

    prompter.println("\n📦 Installed Versions:")?;
    for tool in reported_tools(host) {
        let status = match tool {
            Tool::Node => node.clone(),
            Tool::Npm => npm.clone(),
            other => {
                detect_command(runner, program_for(other, options), other.version_args(), limit)
                    .await
            }
        };
        prompter.println(version_line(tool, &status))?;
    }

    prompter.println("\n🌍 Environment Variables:")?;
    for var in REPORTED_VARS {
        let value = env.get(var).unwrap_or_else(|| "Not set".to_string());
        prompter.println(format!("{}: {}", var, value))?;
    }

    prompter.println("\n🌐 Network Information:")?;
    prompter.print_lines(network_lines(&addresses))
}

/// Print the system information report for the machine the wizard runs on.
pub async fn show_system_information<R, W, C>(
    prompter: &mut Prompter<R, W>,
    runner: &C,
    env: &Environment,
    options: &WizardOptions,
) -> Result<(), WizardError>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    show_host_information(
        prompter,
        runner,
        env,
        options,
        Platform::detect(),
        host_addresses(),
    )
    .await
}
