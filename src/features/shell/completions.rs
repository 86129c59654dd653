//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and
//! PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FlightmarkError;

const BIN_NAME: &str = "flightmark";

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns `FlightmarkError::Parse` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, FlightmarkError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| FlightmarkError::Parse(format!("UTF-8 error: {e}")))
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(flightmark completions bash)

# Or save to a file:
flightmark completions bash > /usr/local/etc/bash_completion.d/flightmark
"
        .to_string(),

        Shell::Zsh => r"# Add to ~/.zshrc (before compinit):
source <(flightmark completions zsh)

# Or save to your fpath:
flightmark completions zsh > ~/.zsh/completions/_flightmark
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
flightmark completions fish > ~/.config/fish/completions/flightmark.fish

# Or run directly:
flightmark completions fish | source
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
flightmark completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
flightmark completions elvish > ~/.elvish/lib/flightmark.elv

# Then add to ~/.elvish/rc.elv:
use flightmark
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
