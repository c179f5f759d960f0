//! Location boundary. Coordinates are always optional: a provider that has a
//! source but fails to produce a fix reports the reason so the caller can log
//! it, and record creation proceeds without a location either way.

use crate::models::coordinates::Coordinates;

pub trait LocationProvider {
    /// Attempt to acquire coordinates once.
    /// - `Ok(Some(_))` — fix acquired
    /// - `Ok(None)` — no location source at all (nothing to log)
    /// - `Err(reason)` — a source exists but failed; the reason goes to the
    ///   diagnostics log
    fn current_location(&self) -> Result<Option<Coordinates>, String>;
}

/// Coordinates passed explicitly on the command line.
pub struct ExplicitFix {
    raw: String,
}

/// Coordinates taken from the `default_location` config entry.
pub struct ConfiguredFix {
    raw: String,
}

/// No location source configured.
pub struct NoFix;

impl LocationProvider for ExplicitFix {
    fn current_location(&self) -> Result<Option<Coordinates>, String> {
        match Coordinates::parse(&self.raw) {
            Some(c) => Ok(Some(c)),
            None => Err(format!("unparseable --location value '{}'", self.raw)),
        }
    }
}

impl LocationProvider for ConfiguredFix {
    fn current_location(&self) -> Result<Option<Coordinates>, String> {
        match Coordinates::parse(&self.raw) {
            Some(c) => Ok(Some(c)),
            None => Err(format!(
                "unparseable default_location '{}' in config",
                self.raw
            )),
        }
    }
}

impl LocationProvider for NoFix {
    fn current_location(&self) -> Result<Option<Coordinates>, String> {
        Ok(None)
    }
}

/// Pick the provider for one creation flow: explicit CLI coordinates win,
/// then the configured default, then none.
pub fn provider_for(
    explicit: Option<&String>,
    configured: Option<&String>,
) -> Box<dyn LocationProvider> {
    if let Some(raw) = explicit {
        Box::new(ExplicitFix { raw: raw.clone() })
    } else if let Some(raw) = configured {
        Box::new(ConfiguredFix { raw: raw.clone() })
    } else {
        Box::new(NoFix)
    }
}
