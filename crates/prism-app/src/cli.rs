use clap::Parser;

/// prism — an animated background of glowing glass polyhedra.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (a tracing directive, e.g. "prism=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Window width override in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height override in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let args =
            Args::parse_from(["prism", "--width", "640", "--height", "480", "--print-config"]);
        assert_eq!(args.width, Some(640));
        assert_eq!(args.height, Some(480));
        assert!(args.print_config);
        assert!(args.config.is_none());
    }
}
