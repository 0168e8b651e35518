use super::*;

#[test]
fn parses_search_command_with_default_server() {
    let cli = Cli::try_parse_from(["scout-cli", "search", "th9 attack"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref query, ref server })
            if query == "th9 attack" && server == DEFAULT_SERVER
    ));
}

#[test]
fn parses_search_command_with_server_override() {
    let cli = Cli::try_parse_from([
        "scout-cli",
        "search",
        "farming",
        "--server",
        "http://127.0.0.1:8080",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref server, .. }) if server == "http://127.0.0.1:8080"
    ));
}

#[test]
fn parses_health_command() {
    let cli = Cli::try_parse_from(["scout-cli", "health"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Health { .. })));
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["scout-cli", "search"]).is_err());
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["scout-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}
