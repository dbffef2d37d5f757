use chrono::{Local, NaiveDateTime};
use saywhen::{Context, wire};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.suggestions {
        print_json(&wire::suggestions_payload(), config.pretty);
        return;
    }

    let ctx = Context { reference_time: config.reference_time };
    let request = wire::ParseRequest { input: config.input };
    let response = wire::respond(&request, &ctx);
    let failed = !response.success;
    print_json(&response, config.pretty);
    if failed {
        std::process::exit(1);
    }
}

struct CliConfig {
    input: String,
    reference_time: NaiveDateTime,
    pretty: bool,
    suggestions: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_time = Local::now().naive_local();
    let mut pretty = io::stdout().is_terminal();
    let mut suggestions = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("saywhen {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--pretty" => pretty = true,
            "--compact" => pretty = false,
            "--suggestions" => suggestions = true,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = parse_reference(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_time = parse_reference(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    if suggestions {
        return Ok(CliConfig { input: String::new(), reference_time, pretty, suggestions });
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_time, pretty, suggestions })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) {
    let rendered = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("error: failed to encode response: {err}");
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "saywhen {version}

Natural-language schedule time parser CLI.

Usage:
  saywhen [OPTIONS] [--] <input...>
  saywhen [OPTIONS] --input <text>
  saywhen --suggestions

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS.
                             Default: the current local time.
  --suggestions              Print suggestion phrases and examples as JSON.
  --pretty                   Pretty-print the JSON response.
  --compact                  Single-line JSON response.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Parsed and admissible for scheduling.
  1  Parse or validation failure.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
