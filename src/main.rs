use clap::{Parser, Subcommand};
use log::debug;
use seqlist_core::ListArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort integers or benchmark the sorting algorithms on an array or linked list
    List(ListArgs),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let cli = Cli::parse();

    match cli.commands {
        Commands::List(list_args) => {
            debug!("running list command: {list_args:?}");
            list_args.run()
        }
    }
}

fn get_styles() -> clap::builder::Styles {
    use anstyle::{AnsiColor, Color, Style};

    let colored = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));

    clap::builder::Styles::styled()
        .usage(colored(AnsiColor::Magenta).bold().underline())
        .header(colored(AnsiColor::Magenta).bold())
        .literal(colored(AnsiColor::Green))
        .invalid(colored(AnsiColor::Red).bold())
        .error(colored(AnsiColor::Red).bold())
        .valid(colored(AnsiColor::Cyan).bold().underline())
        .placeholder(colored(AnsiColor::Yellow))
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_sort_with_negative_values() {
    let cli = Cli::try_parse_from([
        "seqlist", "list", "sort", "-a", "merge", "-b", "linked", "3", "-1", "2",
    ]);
    assert!(cli.is_ok());

    let cli = Cli::try_parse_from(["seqlist", "list", "sort", "-a", "bubble", "1"]);
    assert!(cli.is_err());
}

#[test]
fn parses_bench_defaults() {
    assert!(Cli::try_parse_from(["seqlist", "list", "bench"]).is_ok());
}
