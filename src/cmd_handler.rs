use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

pub const EXIT_STATUS_HELP: &str = "Exit status:\n  \
    0  no duplicates, validator command printed\n  \
    1  duplicate plans found, no command printed\n  \
    2  a plan could not be read or no plans were found";

/// CLI application that checks planner output for duplicate plans and prints
/// the validator command for them
///
/// Exit status is 0 when the validator command was printed, 1 when duplicate
/// plans were found (no command is printed) and 2 when a plan could not be
/// read or none were found.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXIT_STATUS_HELP)]
pub struct CmdArgs {
    /// Folder the planner wrote its plans into
    #[arg(short = 'd', long, default_value = "found_plans")]
    pub plans_dir: PathBuf,

    /// Plan file prefix, plans are named <prefix>.1 .. <prefix>.N
    #[arg(short, long, default_value = "sas_plan")]
    pub prefix: String,

    /// Number of plans, discovered from the folder when omitted
    #[arg(short = 'n', long)]
    pub count: Option<NonZeroUsize>,

    /// Path of the validator executable
    #[arg(long, default_value = "VAL/validate")]
    pub validator: PathBuf,

    /// Domain file handed to the validator
    #[arg(long, default_value = "benchmarks/ged-opt14-strips/domain.pddl")]
    pub domain: PathBuf,

    /// Problem file handed to the validator
    #[arg(long, default_value = "benchmarks/ged-opt14-strips/d-1-3.pddl")]
    pub problem: PathBuf,

    /// Report every duplicate pair instead of stopping at the first one
    #[arg(short, long, default_value_t = false)]
    pub all: bool,

    /// Do not show the progress spinner
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_planner_layout() {
        let args = CmdArgs::try_parse_from(["plan-duplicate-checker"]).unwrap();
        assert_eq!(args.plans_dir, PathBuf::from("found_plans"));
        assert_eq!(args.prefix, "sas_plan");
        assert!(args.count.is_none());
        assert_eq!(args.validator, PathBuf::from("VAL/validate"));
        assert!(!args.all);
    }

    #[test]
    fn help_documents_exit_status() {
        use clap::CommandFactory;

        let help = CmdArgs::command().render_help().to_string();
        assert!(help.contains("Exit status:"));
        assert!(help.contains("1  duplicate plans found"));
    }

    #[test]
    fn zero_count_is_rejected() {
        let result = CmdArgs::try_parse_from(["plan-duplicate-checker", "-n", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn explicit_count_and_flags() {
        let args = CmdArgs::try_parse_from([
            "plan-duplicate-checker",
            "-d",
            "out",
            "-n",
            "12",
            "--all",
            "--domain",
            "d.pddl",
        ])
        .unwrap();
        assert_eq!(args.plans_dir, PathBuf::from("out"));
        assert_eq!(args.count.map(NonZeroUsize::get), Some(12));
        assert!(args.all);
        assert_eq!(args.domain, PathBuf::from("d.pddl"));
    }
}
