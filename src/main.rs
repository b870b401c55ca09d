use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::{greet, greet_all, load_requests, GreeterConfig, Greeting, Person};

const USAGE: &str = "\
Usage: greeter [--config <file>] [command]

Commands:
  (none)                              greet the configured default person
  greet <formal|casual> <name> [age]  greet one person
  batch <file.json>                   greet every request in a JSON file
  styles                              list greeting styles";

fn main() -> Result<()> {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let config_path = take_config_flag(&mut args)?;
    let config = GreeterConfig::load(config_path.as_deref())?;

    match args.first().map(String::as_str) {
        None => run_default(&config),
        Some("greet") => run_greet(&args[1..]),
        Some("batch") => run_batch(&args[1..]),
        Some("styles") => {
            for style in Greeting::ALL {
                println!("{:<8} {}", style.as_str(), style.prefix());
            }
            Ok(())
        }
        Some("help") | Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => bail!("Unknown command '{}'\n\n{}", other, USAGE),
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Pull `--config <file>` out of the argument list
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };

    if pos + 1 >= args.len() {
        bail!("--config needs a file path");
    }

    let path = PathBuf::from(args.remove(pos + 1));
    args.remove(pos);
    Ok(Some(path))
}

fn run_default(config: &GreeterConfig) -> Result<()> {
    println!("{}", greet(config.default_style, &config.default_person));
    Ok(())
}

fn run_greet(args: &[String]) -> Result<()> {
    let (style, person) = parse_greet_args(args)?;
    println!("{}", greet(style, &person));
    Ok(())
}

/// `<style> <name> [age]`, nothing more
fn parse_greet_args(args: &[String]) -> Result<(Greeting, Person)> {
    let (style, name, age) = match args {
        [style, name] => (style, name, None),
        [style, name, age] => (style, name, Some(age)),
        [_, _, _, extra, ..] => bail!("Unexpected argument '{}'\n\n{}", extra, USAGE),
        _ => bail!("greet needs a style and a name\n\n{}", USAGE),
    };

    let style: Greeting = style.parse()?;
    let age = match age {
        Some(age) => age
            .parse::<i64>()
            .with_context(|| format!("Invalid age: '{}'", age))?,
        None => 0,
    };

    Ok((style, Person::new(name.as_str(), age)))
}

fn run_batch(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("batch needs a JSON file\n\n{}", USAGE);
    };

    let requests = load_requests(path)?;
    tracing::info!(count = requests.len(), "greeting batch");

    for response in greet_all(&requests) {
        println!("{}", response.greeting);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_greet_args_with_and_without_age() {
        let (style, person) = parse_greet_args(&args(&["casual", "Ann"])).unwrap();
        assert_eq!(style, Greeting::Casual);
        assert_eq!(person, Person::new("Ann", 0));

        let (_, person) = parse_greet_args(&args(&["formal", "Ann", "-4"])).unwrap();
        assert_eq!(person.age, -4);
    }

    #[test]
    fn test_greet_args_reject_extra() {
        let err = parse_greet_args(&args(&["formal", "Ann", "30", "loud"])).unwrap_err();

        assert!(err.to_string().contains("Unexpected argument 'loud'"));
        assert!(err.to_string().contains("Usage: greeter"));
    }

    #[test]
    fn test_greet_args_reject_missing_and_bad_values() {
        assert!(parse_greet_args(&args(&["formal"])).is_err());
        assert!(parse_greet_args(&args(&["rude", "Ann"])).is_err());
        assert!(parse_greet_args(&args(&["formal", "Ann", "old"])).is_err());
    }

    #[test]
    fn test_config_flag_is_removed() {
        let mut list = args(&["--config", "g.json", "styles"]);

        let path = take_config_flag(&mut list).unwrap();

        assert_eq!(path, Some(PathBuf::from("g.json")));
        assert_eq!(list, args(&["styles"]));
    }
}
