use descend_core::{Function, Location};

use super::{Error, Invocations, Settings, oracle::Oracle};

/// Builds the first location of a run.
///
/// Uses the caller's initial data when the settings provide it, otherwise
/// evaluates the objective once at `x0`, preferring the combined capability.
/// The returned invocations count what was called.
pub(super) fn initial_location<F>(
    oracle: &Oracle<'_, F>,
    x0: &[f64],
    settings: &Settings,
) -> Result<(Location, Invocations), Error>
where
    F: Function + ?Sized,
{
    if x0.is_empty() {
        return Err(Error::EmptyInitialPoint);
    }

    let caps = oracle.capabilities();
    let mut location = Location::new(x0.to_vec(), caps.has_gradient());
    let mut inv = Invocations::default();

    if let Some(initial) = settings.initial_data() {
        check_value(initial.f)?;
        location.f = initial.f;
        if caps.has_gradient() {
            let gradient = initial.gradient.as_deref().unwrap_or_default();
            if gradient.len() != x0.len() {
                return Err(Error::DimensionMismatch {
                    expected: x0.len(),
                    found: gradient.len(),
                });
            }
            location.gradient.copy_from_slice(gradient);
        }
        return Ok((location, inv));
    }

    if let Some(fg) = oracle.function_gradient() {
        location.f = fg.value_and_gradient(x0, &mut location.gradient);
        inv.function_gradient = 1;
    } else {
        location.f = oracle.value(x0);
        inv.function = 1;
    }
    check_value(location.f)?;

    Ok((location, inv))
}

fn check_value(f: f64) -> Result<(), Error> {
    if f.is_nan() || f == f64::INFINITY {
        return Err(Error::InvalidInitialValue(f));
    }
    Ok(())
}
