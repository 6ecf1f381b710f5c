//! Persistent parameter storage interface.
//!
//! The key-value store itself is an external collaborator; this module
//! fixes the namespace and keys and provides the boot-time fallback
//! behavior. A store that is absent or failing at boot is not fatal;
//! the controller runs on compiled-in defaults.

use crate::timing::TimingParameters;

/// Namespace holding the controller's persisted values.
pub const STORE_NAMESPACE: &str = "splash";

/// Key for the drop height, stored as floating-point meters.
pub const HEIGHT_KEY: &str = "HEIGHT";

/// Key for the flash offset, stored as signed integer milliseconds.
pub const OFFSET_KEY: &str = "OFFSET";

/// Capability interface over the persistent key-value collaborator.
pub trait ParameterStore {
    /// Error surfaced by the underlying store.
    type Error;

    /// Loads the persisted height in meters, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the read itself fails.
    fn load_height(&mut self) -> Result<Option<f64>, Self::Error>;

    /// Loads the persisted offset in milliseconds, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the read itself fails.
    fn load_offset(&mut self) -> Result<Option<i32>, Self::Error>;

    /// Persists both fields under [`HEIGHT_KEY`] and [`OFFSET_KEY`].
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write fails.
    fn save(&mut self, params: &TimingParameters) -> Result<(), Self::Error>;
}

/// Loads boot parameters, substituting defaults per field on absence
/// or storage error.
pub fn load_or_default<S: ParameterStore>(store: &mut S) -> TimingParameters {
    let defaults = TimingParameters::DEFAULT;
    let height_m = match store.load_height() {
        Ok(Some(height)) => height,
        Ok(None) | Err(_) => defaults.height_m,
    };
    let offset_ms = match store.load_offset() {
        Ok(Some(offset)) => offset,
        Ok(None) | Err(_) => defaults.offset_ms,
    };

    TimingParameters {
        height_m,
        offset_ms,
    }
}

/// Store that never holds values and rejects nothing.
///
/// Used where the persistence collaborator is not wired up, e.g. in
/// host builds.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmptyParameterStore;

impl EmptyParameterStore {
    /// Creates a new empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ParameterStore for EmptyParameterStore {
    type Error = core::convert::Infallible;

    fn load_height(&mut self) -> Result<Option<f64>, Self::Error> {
        Ok(None)
    }

    fn load_offset(&mut self) -> Result<Option<i32>, Self::Error> {
        Ok(None)
    }

    fn save(&mut self, _: &TimingParameters) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStore {
        height: Option<f64>,
        offset: Option<i32>,
    }

    impl ParameterStore for FixedStore {
        type Error = ();

        fn load_height(&mut self) -> Result<Option<f64>, Self::Error> {
            Ok(self.height)
        }

        fn load_offset(&mut self) -> Result<Option<i32>, Self::Error> {
            Ok(self.offset)
        }

        fn save(&mut self, _: &TimingParameters) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct BrokenStore;

    impl ParameterStore for BrokenStore {
        type Error = ();

        fn load_height(&mut self) -> Result<Option<f64>, Self::Error> {
            Err(())
        }

        fn load_offset(&mut self) -> Result<Option<i32>, Self::Error> {
            Err(())
        }

        fn save(&mut self, _: &TimingParameters) -> Result<(), Self::Error> {
            Err(())
        }
    }

    #[test]
    fn persisted_values_win_over_defaults() {
        let mut store = FixedStore {
            height: Some(1.44),
            offset: Some(-150),
        };
        let params = load_or_default(&mut store);
        assert_eq!(params, TimingParameters::new(1.44, -150));
    }

    #[test]
    fn absent_fields_fall_back_per_field() {
        let mut store = FixedStore {
            height: Some(1.20),
            offset: None,
        };
        let params = load_or_default(&mut store);
        assert_eq!(params, TimingParameters::new(1.20, -25));
    }

    #[test]
    fn broken_store_yields_defaults() {
        let params = load_or_default(&mut BrokenStore);
        assert_eq!(params, TimingParameters::DEFAULT);
    }

    #[test]
    fn empty_store_yields_defaults() {
        let params = load_or_default(&mut EmptyParameterStore::new());
        assert_eq!(params, TimingParameters::DEFAULT);
    }
}
