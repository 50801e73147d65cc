pub mod cmd_handler;
pub mod command;
pub mod duplicate_check;
pub mod error;
pub mod logging;
pub mod plan;
pub mod print;

use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::cmd_handler::CmdArgs;
use crate::command::ValidatorCommand;
use crate::duplicate_check::{check_duplicates, CheckMode, CheckReport};
use crate::plan::PlanSet;

#[derive(Debug)]
pub enum Outcome {
    Duplicates(CheckReport),
    Command(ValidatorCommand),
}

pub async fn plan_set(cmds: &CmdArgs) -> Result<PlanSet, error::PlanError> {
    match cmds.count {
        Some(count) => Ok(PlanSet::new(
            cmds.plans_dir.clone(),
            cmds.prefix.clone(),
            count.get(),
        )),
        None => PlanSet::discover(cmds.plans_dir.clone(), cmds.prefix.clone()).await,
    }
}

/// Checks the plans named by `cmds` and writes either the duplicate report or
/// the validator command to `out`.
pub async fn run(cmds: &CmdArgs, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let set = plan_set(cmds).await?;
    let mode = if cmds.all {
        CheckMode::ReportAll
    } else {
        CheckMode::StopAtFirst
    };

    let report = check_duplicates(&set, mode)
        .await
        .with_context(|| format!("checking plans {}", set.pattern()))?;

    if report.has_duplicates() {
        write!(out, "{}", print::render_report(&report, &set))?;
        return Ok(Outcome::Duplicates(report));
    }

    let command = ValidatorCommand::from(
        cmds.validator.clone(),
        cmds.domain.clone(),
        cmds.problem.clone(),
        &set,
    );
    info!(plans = set.count(), "no duplicate plans");
    writeln!(out, "{}", command)?;
    Ok(Outcome::Command(command))
}
