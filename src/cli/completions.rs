use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pagematter completions bash > ~/.bash_completion.d/pagematter\n\n\
                  Generate zsh completions:\n    pagematter completions zsh > ~/.zfunc/_pagematter\n\n\
                  Generate fish completions:\n    pagematter completions fish > ~/.config/fish/completions/pagematter.fish\n\n\
                  Generate PowerShell completions:\n    pagematter completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
