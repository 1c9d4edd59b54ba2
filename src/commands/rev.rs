//! Implementation of the `revdiff rev` actions.

use super::emit;
use crate::cli::RevAction;
use revdiff::config::Config;
use revdiff::error::{Result, RevdiffError};
use revdiff::revision;
use std::cmp::Ordering;
use std::io::Write;
use tracing::{debug, warn};

/// Dispatch revision actions.
pub(super) fn dispatch_rev<W: Write>(config: &Config, action: RevAction, out: &mut W) -> Result<()> {
    debug!(?action, "running revision action");

    match action {
        RevAction::Check(args) => {
            if !revision::is_valid(&args.rev) {
                return Err(invalid(&args.rev, "not a revision number"));
            }
            emit(out, "valid")
        }
        RevAction::Count(args) => {
            let rev = resolve(config, &args.rev);
            let count = revision::component_count(rev)
                .ok_or_else(|| invalid(rev, "not a revision number"))?;
            emit(out, count)
        }
        RevAction::Strip(args) => {
            let rev = resolve(config, &args.rev);
            let stripped = revision::strip(rev, args.amount).ok_or_else(|| {
                invalid(rev, &format!("cannot strip {} component(s)", args.amount))
            })?;
            emit(out, stripped)
        }
        RevAction::Prev(args) => {
            let rev = resolve(config, &args.rev);
            let prev =
                revision::predecessor(rev).ok_or_else(|| invalid(rev, "has no predecessor"))?;
            emit(out, prev)
        }
        RevAction::Branch(args) => {
            let rev = resolve(config, &args.rev);
            let branch =
                revision::to_branch(rev).ok_or_else(|| invalid(rev, "has no branch number"))?;
            emit(out, branch)
        }
        RevAction::Magic(args) => {
            let rev = resolve(config, &args.rev);
            let magic = revision::magic_branch(rev)
                .ok_or_else(|| invalid(rev, "has no magic branch revision"))?;
            emit(out, magic)
        }
        RevAction::Cmp(args) => {
            let left = resolve(config, &args.left);
            let right = resolve(config, &args.right);
            for rev in [left, right] {
                if !revision::is_valid(rev) {
                    return Err(invalid(rev, "not a revision number"));
                }
            }
            emit(out, ordering_name(revision::compare(left, right)))
        }
        RevAction::Sort(args) => {
            let mut revs: Vec<&str> = args
                .revs
                .iter()
                .map(String::as_str)
                .filter(|rev| {
                    let valid = revision::is_valid(rev);
                    if !valid {
                        warn!(rev, "skipping invalid revision");
                    }
                    valid
                })
                .collect();
            revision::sort_descending(&mut revs);
            for rev in revs {
                emit(out, rev)?;
            }
            Ok(())
        }
    }
}

/// Substitute the configured fallback for an invalid revision.
fn resolve<'a>(config: &'a Config, rev: &'a str) -> &'a str {
    let Some(fallback) = config.fallback_revision.as_deref() else {
        return rev;
    };

    let resolved = revision::valid_or(rev, fallback);
    if resolved != rev {
        warn!(rev, fallback, "substituting fallback revision");
    }
    resolved
}

fn invalid(rev: &str, reason: &str) -> RevdiffError {
    RevdiffError::InvalidRevision(format!("'{}' {}", rev, reason))
}

fn ordering_name(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}
