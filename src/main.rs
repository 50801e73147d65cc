use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use plan_duplicate_checker::cmd_handler::CmdArgs;
use plan_duplicate_checker::{logging, run, Outcome};
use spinners::{Spinner, Spinners, Stream};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmds = CmdArgs::parse();
    logging::init(cmds.verbose);

    let mut sp = if cmds.quiet || !std::io::stderr().is_terminal() {
        None
    } else {
        let msg = format!("Comparing plans in {:?}", cmds.plans_dir);
        Some(Spinner::with_stream(Spinners::Aesthetic, msg, Stream::Stderr))
    };

    let mut buffer = vec![];
    let result = run(&cmds, &mut buffer).await;

    if let Some(sp) = sp.as_mut() {
        sp.stop_with_newline();
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout.write_all(&buffer).and_then(|_| stdout.flush()) {
        eprintln!("Error writing output {:?}", err);
        return ExitCode::from(2);
    }

    match result {
        Ok(Outcome::Command(_)) => ExitCode::SUCCESS,
        Ok(Outcome::Duplicates(_)) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
