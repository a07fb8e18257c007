use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tutorbook", version, about = "Manage students, lessons and tasks from the command line")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON data file; overrides the config file and TUTORBOOK_DATA_FILE.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read commands from stdin until `exit` (the default).
    Repl,
    /// Run each LINE against the book, saving after every change.
    Exec(LinesArgs),
    /// Parse each LINE without touching the book and print the result as JSON.
    Check(LinesArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LinesArgs {
    /// Command lines, e.g. "addtask n/Bob t/Essay d/2099-01-31".
    #[arg(required = true)]
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcommand_is_optional() {
        let args = Args::try_parse_from(["tutorbook"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.data_file.is_none());
    }

    #[test]
    fn exec_takes_lines_and_global_data_file() {
        let args =
            Args::try_parse_from(["tutorbook", "exec", "list", "viewtasks", "--data-file", "b.json"])
                .unwrap();
        assert_eq!(args.data_file, Some(PathBuf::from("b.json")));
        match args.command {
            Some(Commands::Exec(lines)) => assert_eq!(lines.lines, vec!["list", "viewtasks"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn check_requires_a_line() {
        assert!(Args::try_parse_from(["tutorbook", "check"]).is_err());
    }
}
