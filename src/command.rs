use std::fmt::Display;
use std::path::PathBuf;

use crate::plan::PlanSet;

/// Invocation of the external plan validator:
/// `<validator> <domain> <problem> <plan 1> .. <plan N>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorCommand {
    pub program: PathBuf,
    pub domain: PathBuf,
    pub problem: PathBuf,
    pub plans: Vec<PathBuf>,
}

impl ValidatorCommand {
    pub fn from(program: PathBuf, domain: PathBuf, problem: PathBuf, set: &PlanSet) -> Self {
        ValidatorCommand {
            program,
            domain,
            problem,
            plans: set.paths().collect(),
        }
    }

    pub fn args(&self) -> Vec<String> {
        [&self.program, &self.domain, &self.problem]
            .into_iter()
            .chain(self.plans.iter())
            .map(|path| path.to_string_lossy().into_owned())
            .collect()
    }
}

impl Display for ValidatorCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", shell_words::join(self.args()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(count: usize) -> ValidatorCommand {
        ValidatorCommand::from(
            PathBuf::from("VAL/validate"),
            PathBuf::from("benchmarks/ged-opt14-strips/domain.pddl"),
            PathBuf::from("benchmarks/ged-opt14-strips/d-1-3.pddl"),
            &PlanSet::new("found_plans", "sas_plan", count),
        )
    }

    #[test]
    fn plans_follow_domain_and_problem_in_index_order() {
        let args = command(3).args();
        assert_eq!(
            args,
            vec![
                "VAL/validate",
                "benchmarks/ged-opt14-strips/domain.pddl",
                "benchmarks/ged-opt14-strips/d-1-3.pddl",
                "found_plans/sas_plan.1",
                "found_plans/sas_plan.2",
                "found_plans/sas_plan.3",
            ]
        );
    }

    #[test]
    fn plain_paths_print_space_joined() {
        assert_eq!(
            command(2).to_string(),
            "VAL/validate benchmarks/ged-opt14-strips/domain.pddl \
             benchmarks/ged-opt14-strips/d-1-3.pddl found_plans/sas_plan.1 found_plans/sas_plan.2"
        );
    }

    #[test]
    fn thirty_plans_end_with_the_last_index() {
        let args = command(30).args();
        assert_eq!(args.len(), 33);
        assert_eq!(args.last().map(String::as_str), Some("found_plans/sas_plan.30"));
    }

    #[test]
    fn paths_with_spaces_are_quoted() {
        let cmd = ValidatorCommand::from(
            PathBuf::from("VAL/validate"),
            PathBuf::from("my domain.pddl"),
            PathBuf::from("p.pddl"),
            &PlanSet::new("found_plans", "sas_plan", 1),
        );
        assert_eq!(
            cmd.to_string(),
            "VAL/validate 'my domain.pddl' p.pddl found_plans/sas_plan.1"
        );
    }
}
