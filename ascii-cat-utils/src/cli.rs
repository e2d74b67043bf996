use clap::Parser;

/// Command-line surface. The animation takes no options; clap provides
/// `--help` and `--version`.
#[derive(Parser, Default, Debug, Clone)]
#[clap(
    name = "ascii-cat",
    version,
    about = "Loops an ASCII-art cat in your terminal until you press Ctrl-C"
)]
pub struct CliArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_without_arguments() {
        assert!(CliArgs::try_parse_from(["ascii-cat"]).is_ok());
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(CliArgs::try_parse_from(["ascii-cat", "--fps", "10"]).is_err());
    }
}
