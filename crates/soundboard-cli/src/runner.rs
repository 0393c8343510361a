//! Command execution for one CLI invocation.

use crate::Args;
use soundboard_core::{find_best, BuildReporter, IndexBuilder, IndexStore, Result, TagReader};
use tracing::info;

/// Execute `args` and return the line to print, if any.
///
/// Nothing is printed without a non-empty `--search`.
///
/// A rebuild persists a fresh index first. A search then either loads the
/// persisted index (even one written moments ago by the same invocation) or
/// builds a transient one. The result line is `--path` concatenated with the
/// best file name, with no separator added.
pub(crate) fn run<R, P>(
    args: &Args,
    builder: &IndexBuilder<R, P>,
    store: &IndexStore,
) -> Result<Option<String>>
where
    R: TagReader,
    P: BuildReporter,
{
    if args.rebuild_index {
        let index = builder.build(&args.path)?;
        let location = store.persist(&args.path, &index)?;
        info!(
            "Rebuilt index of {} files at {}",
            index.len(),
            location.display()
        );
    }

    // An empty query counts as no search.
    let Some(to_find) = args.to_find.as_deref().filter(|query| !query.is_empty()) else {
        return Ok(None);
    };

    let index = if args.use_index {
        store.load(&args.path)?
    } else {
        builder.build(&args.path)?
    };

    let (file_name, candidates) = find_best(to_find, &index)?;
    info!("Picked {} out of {} candidates", file_name, candidates);

    Ok(Some(format!("{}{}", args.path, file_name)))
}
