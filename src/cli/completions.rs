use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    unistack completions bash > ~/.bash_completion.d/unistack\n\n\
                  Generate zsh completions:\n    unistack completions zsh > ~/.zfunc/_unistack\n\n\
                  Generate fish completions:\n    unistack completions fish > ~/.config/fish/completions/unistack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
