pub const COMPLETIONS_HELP: &str = "DISCUSSION:
    Writes a completion script for the chosen shell to stdout; redirect
    it to wherever your shell loads completions from.

    Bash:
        $ svcreg completions bash > ~/.local/share/bash-completion/completions/svcreg

    Zsh:
        $ svcreg completions zsh > ~/.zfunc/_svcreg

    Fish:
        $ svcreg completions fish > ~/.config/fish/completions/svcreg.fish";
