//! PIN gate for management operations

use crate::domain::AdminPin;
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use log::{info, warn};

/// Service for checking the admin PIN
pub struct PinService<S> {
    store: S,
}

impl<S: KeyValueStore> PinService<S> {
    pub fn new(store: S) -> Self {
        PinService { store }
    }

    /// Whether the entered string equals the stored PIN
    pub fn check(&self, entered: &str) -> Result<bool> {
        Ok(self.store.load_pin()?.matches(entered))
    }

    /// Unlock management operations. Fails with `IncorrectPin` on mismatch.
    pub fn unlock(self, entered: &str) -> Result<AdminSession<S>> {
        let pin = self.store.load_pin()?;
        if let Err(e) = pin.verify(entered) {
            warn!("Rejected incorrect PIN");
            return Err(e);
        }
        Ok(AdminSession { store: self.store })
    }
}

/// Proof that the PIN was entered; required by every management service
pub struct AdminSession<S> {
    store: S,
}

impl<S: KeyValueStore> AdminSession<S> {
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the stored PIN wholesale
    pub fn change_pin(&self, new_pin: &str) -> Result<()> {
        let pin = AdminPin::new(new_pin)?;
        self.store.save_pin(&pin)?;
        info!("Admin PIN changed");
        Ok(())
    }
}
