//! Plan files as written by the planner.
//!
//! A planner run leaves its solutions in one folder as `<prefix>.1`,
//! `<prefix>.2`, .. `<prefix>.N`. [`PlanSet`] renders that path template and
//! [`Plan`] holds the lines of one loaded file.

use std::path::{Path, PathBuf};

use data_encoding::HEXUPPER;
use ring::digest::{Context, SHA256};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::PlanError;

#[derive(Debug, Clone)]
pub struct Plan {
    index: usize,
    path: PathBuf,
    lines: Vec<String>,
    fingerprint: String,
}

impl Plan {
    pub fn from_text(index: usize, path: PathBuf, text: &str) -> Self {
        let lines = split_lines(text);
        let fingerprint = fingerprint(&lines);
        Plan {
            index,
            path,
            lines,
            fingerprint,
        }
    }

    /// Reads plan `index` of `set` from disk.
    pub async fn load(set: &PlanSet, index: usize) -> Result<Self, PlanError> {
        let path = set.path(index);
        let text = fs::read_to_string(&path)
            .await
            .map_err(|source| PlanError::Read {
                index,
                path: path.clone(),
                source,
            })?;
        let plan = Plan::from_text(index, path, &text);
        debug!(
            index,
            path = %plan.path().display(),
            lines = plan.len(),
            "loaded plan"
        );
        if plan.is_empty() {
            warn!(index, path = %plan.path().display(), "plan has no lines");
        }
        Ok(plan)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// True when both plans have the same lines in the same order.
    ///
    /// Line count and fingerprint only reject early, a match is always
    /// confirmed line by line.
    pub fn is_duplicate_of(&self, other: &Plan) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.fingerprint != other.fingerprint {
            return false;
        }
        self.lines()
            .iter()
            .zip(other.lines())
            .all(|(a, b)| a == b)
    }
}

/// Splits where `str.splitlines` does: `\n`, `\r\n`, `\r`, vertical tab,
/// form feed, the separators `\x1c`..`\x1e`, NEL and the Unicode line and
/// paragraph separators. A trailing terminator does not yield an empty last
/// line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            None => {
                lines.push(rest.to_string());
                break;
            }
            Some((pos, c)) => {
                lines.push(rest[..pos].to_string());
                let terminator = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[pos + terminator..];
            }
        }
    }
    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn fingerprint(lines: &[String]) -> String {
    let mut context = Context::new(&SHA256);
    for line in lines {
        context.update(line.as_bytes());
        context.update(b"\n");
    }
    HEXUPPER.encode(context.finish().as_ref())
}

/// The files `<dir>/<prefix>.1 ..= <dir>/<prefix>.<count>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSet {
    dir: PathBuf,
    prefix: String,
    count: usize,
}

impl PlanSet {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, count: usize) -> Self {
        PlanSet {
            dir: dir.into(),
            prefix: prefix.into(),
            count,
        }
    }

    /// Counts the contiguous run of existing plans starting at index 1.
    pub async fn discover(
        dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Result<Self, PlanError> {
        let mut set = PlanSet::new(dir, prefix, 0);
        loop {
            let index = set.count + 1;
            let path = set.path(index);
            let exists = fs::try_exists(&path)
                .await
                .map_err(|source| PlanError::Read {
                    index,
                    path: path.clone(),
                    source,
                })?;
            if !exists {
                break;
            }
            set.count = index;
        }

        if set.count == 0 {
            return Err(PlanError::NoPlans {
                pattern: set.pattern(),
            });
        }
        info!(count = set.count, pattern = %set.pattern(), "discovered plans");
        Ok(set)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}", self.prefix, index))
    }

    /// Plan paths in index order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (1..=self.count).map(|index| self.path(index))
    }

    pub fn pattern(&self) -> String {
        self.dir
            .join(format!("{}.<N>", self.prefix))
            .display()
            .to_string()
    }
}
