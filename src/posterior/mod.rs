//! Posterior accessor: materialize draw tables from a fitted-model handle.

use crate::core::DrawTable;
use crate::engine::FittedModel;
use crate::error::{PosteriorError, Result};

/// Which parameters to pull out of a fitted model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParameterSelection {
    /// Everything the handle monitored during fitting.
    #[default]
    All,
    /// An explicit list of parameter names.
    Named(Vec<String>),
}

impl ParameterSelection {
    /// Build a named selection from anything string-like.
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Named(names.into_iter().map(Into::into).collect())
    }
}

/// Extract draws for the selected parameters into a [`DrawTable`].
///
/// Every requested name is validated against the handle's monitored-set
/// metadata before any draw is pulled, so a bad name fails the whole call
/// with [`PosteriorError::UnknownParameter`] and no partial table escapes.
///
/// The handle is read-only from this layer's perspective: calling this
/// twice with the same handle and selection yields identical tables.
pub fn extract<H: FittedModel>(handle: &H, selection: &ParameterSelection) -> Result<DrawTable> {
    let monitored = handle.monitored_parameters();

    let names: Vec<&str> = match selection {
        ParameterSelection::All => monitored.iter().map(String::as_str).collect(),
        ParameterSelection::Named(requested) => {
            for name in requested {
                if !monitored.iter().any(|m| m == name) {
                    return Err(PosteriorError::UnknownParameter {
                        name: name.clone(),
                        monitored: monitored.to_vec(),
                    });
                }
            }
            requested.iter().map(String::as_str).collect()
        }
    };

    let mut table = DrawTable::new();
    for name in names {
        table.insert(name, handle.draws(name)?.clone())?;
    }
    Ok(table)
}

/// Extract draws for every monitored parameter.
pub fn extract_all<H: FittedModel>(handle: &H) -> Result<DrawTable> {
    extract(handle, &ParameterSelection::All)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParameterDraws;
    use crate::engine::StoredPosterior;

    fn make_handle() -> StoredPosterior {
        let mut table = DrawTable::new();
        table
            .insert("mu", ParameterDraws::scalar(vec![1.0, 1.1, 0.9, 1.05]))
            .unwrap();
        table
            .insert("sigma", ParameterDraws::scalar(vec![0.5, 0.6, 0.55, 0.48]))
            .unwrap();
        StoredPosterior::from_table(table).unwrap()
    }

    #[test]
    fn extract_all_returns_every_monitored_parameter() {
        let handle = make_handle();
        let table = extract_all(&handle).unwrap();

        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["mu", "sigma"]);
        assert_eq!(table.num_draws(), Some(4));
    }

    #[test]
    fn named_selection_subsets_the_table() {
        let handle = make_handle();
        let table = extract(&handle, &ParameterSelection::named(["sigma"])).unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.get("sigma").is_some());
        assert!(table.get("mu").is_none());
    }

    #[test]
    fn unknown_parameter_fails_the_whole_call() {
        let handle = make_handle();
        let err = extract(&handle, &ParameterSelection::named(["mu", "gamma"])).unwrap_err();

        assert_eq!(
            err,
            PosteriorError::UnknownParameter {
                name: "gamma".into(),
                monitored: vec!["mu".into(), "sigma".into()],
            }
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let handle = make_handle();
        let first = extract_all(&handle).unwrap();
        let second = extract_all(&handle).unwrap();
        assert_eq!(first, second);
    }
}
