//! The session controller
//!
//! Two states: `Locked` (no plan, no passphrase in memory) and `Unlocked`
//! (current plan held, passphrase cached only when the plan is encrypted).
//! Every operation either completes fully or leaves the previous state
//! observable; a failed unlock never leaves a half-decrypted plan behind.
//!
//! Saves are serialized by `&mut self` and encrypt with the passphrase
//! captured when the save starts, so a lock or a fresh unlock under a
//! different passphrase cannot interleave with a save in flight.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::crypto::{decrypt, encrypt, validate_passphrase, Passphrase};
use crate::error::{BinderError, BinderResult};
use crate::models::{demo_plan, normalize, Plan};
use crate::storage::PlanStore;

use super::activity::{ActivityBus, ActivityRelay};

/// Inactivity timeout before the session locks itself
pub const AUTO_LOCK_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// The state machine owning "am I locked"
pub struct SessionController {
    store: PlanStore,
    bus: Option<Box<dyn ActivityBus>>,
    relay: Option<Box<dyn ActivityRelay>>,
    /// `Some` exactly while unlocked
    plan: Option<Plan>,
    /// `Some` only while unlocked with an encrypted plan; never persisted
    passphrase: Option<Passphrase>,
    /// Cached encryption flag, answerable while locked
    encrypted: bool,
    last_activity: DateTime<Utc>,
    auto_lock_timeout: Duration,
    /// Single generic message for the most recent failure
    last_error: Option<String>,
}

impl SessionController {
    /// Create a controller with the default auto-lock timeout
    pub fn new(store: PlanStore) -> Self {
        Self::with_auto_lock_timeout(store, AUTO_LOCK_TIMEOUT)
    }

    /// Create a controller with a custom auto-lock timeout
    pub fn with_auto_lock_timeout(store: PlanStore, auto_lock_timeout: Duration) -> Self {
        let status = store.exists();
        Self {
            store,
            bus: None,
            relay: None,
            plan: None,
            passphrase: None,
            encrypted: status.is_encrypted,
            last_activity: Utc::now(),
            auto_lock_timeout,
            last_error: None,
        }
    }

    /// Attach an activity bus. Best effort: the controller works without
    /// one, each view then tracking activity on its own.
    pub fn set_activity_bus(&mut self, bus: Box<dyn ActivityBus>) {
        self.bus = Some(bus);
        if self.plan.is_some() && self.relay.is_none() {
            self.open_relay();
        }
    }

    // --- observers ---

    pub fn is_locked(&self) -> bool {
        self.plan.is_none()
    }

    /// Whether the stored plan is encrypted (valid while locked too)
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn current_plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// The generic user-facing message for the most recent failure
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Remaining time before auto-lock; `None` while locked
    pub fn time_until_auto_lock(&self) -> Option<Duration> {
        if self.plan.is_none() {
            return None;
        }
        Some(self.auto_lock_timeout.saturating_sub(self.elapsed()))
    }

    // --- transitions ---

    /// `Locked -> Unlocked`. Requires a passphrase when the stored record
    /// is encrypted. On any failure the session stays locked with no
    /// partial state.
    pub fn unlock(&mut self, passphrase: Option<&str>) -> BinderResult<()> {
        let status = self.store.exists();
        if !status.present {
            return self.fail(BinderError::NoSavedPlan);
        }

        let (plan, cached) = if status.is_encrypted {
            let Some(pass) = passphrase else {
                return self.fail(BinderError::PassphraseRequired);
            };
            let Some(blob) = self.store.load_encrypted() else {
                return self.fail(BinderError::NoSavedPlan);
            };
            let bytes = self.track(decrypt(&blob, pass))?;
            let raw: Value = match serde_json::from_slice(&bytes) {
                Ok(raw) => raw,
                Err(e) => return self.fail(BinderError::MalformedJson(e.to_string())),
            };
            (normalize(&raw), Some(Passphrase::new(pass)))
        } else {
            let Some(plan) = self.store.load_plain() else {
                return self.fail(BinderError::NoSavedPlan);
            };
            (plan, None)
        };

        self.plan = Some(plan);
        self.passphrase = cached;
        self.encrypted = status.is_encrypted;
        self.open_relay();
        self.touch();
        self.last_error = None;
        Ok(())
    }

    /// Self-transition while unlocked: persist, then commit in memory.
    ///
    /// The updated plan becomes current only after a successful write; the
    /// stored encryption state cannot be changed through this path.
    pub fn save_plan(&mut self, mut updated: Plan) -> BinderResult<()> {
        if self.plan.is_none() {
            return self.fail(BinderError::NoPlanLoaded);
        }
        updated.updated_at = Utc::now();
        updated.is_encrypted = self.encrypted;

        match self.persist(&updated) {
            Ok(()) => {
                self.plan = Some(updated);
                self.touch();
                self.last_error = None;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// `Locked -> Unlocked` with a fresh empty plan. Encrypts and caches
    /// the passphrase when one is given; marks first run complete.
    pub fn create_new(&mut self, title: &str, passphrase: Option<&str>) -> BinderResult<()> {
        self.create(Plan::new(title, passphrase.is_some()), passphrase)
    }

    /// Like [`create_new`](Self::create_new), seeded from the demo
    /// generator. The resulting plan carries the demo marker.
    pub fn create_demo(&mut self, passphrase: Option<&str>) -> BinderResult<()> {
        self.create(demo_plan(), passphrase)
    }

    /// Encrypt a currently-plaintext plan under a new passphrase
    pub fn add_encryption(&mut self, passphrase: &str) -> BinderResult<()> {
        let Some(plan) = self.plan.clone() else {
            return self.fail(BinderError::NoPlanLoaded);
        };
        if self.encrypted {
            return self.fail(BinderError::AlreadyEncrypted);
        }
        self.track(validate_passphrase(passphrase))?;

        let mut plan = plan;
        plan.is_encrypted = true;
        plan.updated_at = Utc::now();
        self.track(write_encrypted(&self.store, &plan, passphrase))?;

        self.encrypted = true;
        self.passphrase = Some(Passphrase::new(passphrase));
        self.plan = Some(plan);
        self.touch();
        self.last_error = None;
        Ok(())
    }

    /// Re-key an encrypted plan under a new passphrase
    pub fn change_passphrase(&mut self, new_passphrase: &str) -> BinderResult<()> {
        let Some(plan) = self.plan.clone() else {
            return self.fail(BinderError::NoPlanLoaded);
        };
        if !self.encrypted {
            return self.fail(BinderError::NotEncrypted);
        }
        self.track(validate_passphrase(new_passphrase))?;

        let mut plan = plan;
        plan.updated_at = Utc::now();
        self.track(write_encrypted(&self.store, &plan, new_passphrase))?;

        self.passphrase = Some(Passphrase::new(new_passphrase));
        self.plan = Some(plan);
        self.touch();
        self.last_error = None;
        Ok(())
    }

    /// Store an encrypted plan as plaintext and drop the passphrase
    pub fn remove_encryption(&mut self) -> BinderResult<()> {
        let Some(plan) = self.plan.clone() else {
            return self.fail(BinderError::NoPlanLoaded);
        };
        if !self.encrypted {
            return self.fail(BinderError::NotEncrypted);
        }

        let mut plan = plan;
        plan.is_encrypted = false;
        plan.updated_at = Utc::now();
        self.track(self.store.save_plain(&plan))?;

        self.encrypted = false;
        self.passphrase = None;
        self.plan = Some(plan);
        self.touch();
        self.last_error = None;
        Ok(())
    }

    /// `Unlocked -> Locked`. Drops the passphrase (wiping it) and the
    /// current plan, closes the relay. Always succeeds, safe to call from
    /// any state.
    pub fn lock(&mut self) {
        if let Some(mut relay) = self.relay.take() {
            relay.close();
        }
        self.passphrase = None;
        self.plan = None;
        self.last_activity = Utc::now();
    }

    /// Erase the stored record and all in-memory state. Irreversible; the
    /// caller owns confirming intent. Marks the device first-run again.
    pub fn reset_plan(&mut self) -> BinderResult<()> {
        match self.store.clear() {
            Ok(()) => {
                self.lock();
                self.encrypted = false;
                self.last_error = None;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    // --- activity / auto-lock ---

    /// Note local user activity and broadcast it to other views
    pub fn record_activity(&mut self) {
        if self.plan.is_some() {
            self.touch();
        }
    }

    /// Periodic countdown evaluation (1 Hz is sufficient). Adopts newer
    /// activity from other views, then locks when the inactivity timeout
    /// has elapsed. Returns `true` when this tick locked the session.
    pub fn tick(&mut self) -> bool {
        if self.plan.is_none() {
            return false;
        }
        if let Some(relay) = self.relay.as_mut() {
            for at in relay.drain() {
                if at > self.last_activity {
                    self.last_activity = at;
                }
            }
        }
        if self.elapsed() >= self.auto_lock_timeout {
            self.lock();
            true
        } else {
            false
        }
    }

    // --- internals ---

    fn create(&mut self, mut plan: Plan, passphrase: Option<&str>) -> BinderResult<()> {
        plan.is_encrypted = passphrase.is_some();
        match passphrase {
            Some(pass) => {
                self.track(validate_passphrase(pass))?;
                self.track(write_encrypted(&self.store, &plan, pass))?;
            }
            None => self.track(self.store.save_plain(&plan))?,
        }

        self.encrypted = passphrase.is_some();
        self.passphrase = passphrase.map(Passphrase::new);
        self.plan = Some(plan);
        self.open_relay();
        self.touch();
        self.last_error = None;
        Ok(())
    }

    /// Persist the plan with the passphrase cached at this moment
    fn persist(&self, plan: &Plan) -> BinderResult<()> {
        if plan.is_encrypted {
            let pass = self
                .passphrase
                .as_ref()
                .ok_or(BinderError::NoPassphraseAvailable)?;
            write_encrypted(&self.store, plan, pass.as_str())
        } else {
            self.store.save_plain(plan)
        }
    }

    fn open_relay(&mut self) {
        if self.relay.is_none() {
            self.relay = self.bus.as_ref().map(|b| b.subscribe());
        }
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
        if let Some(relay) = self.relay.as_mut() {
            relay.publish(self.last_activity);
        }
    }

    fn elapsed(&self) -> Duration {
        (Utc::now() - self.last_activity)
            .to_std()
            .unwrap_or_default()
    }

    /// Age the activity clock, as if the user had been idle
    #[cfg(test)]
    fn backdate_activity(&mut self, by: Duration) {
        if let Ok(delta) = chrono::Duration::from_std(by) {
            self.last_activity = self.last_activity - delta;
        }
    }

    fn fail<T>(&mut self, err: BinderError) -> BinderResult<T> {
        self.last_error = Some(err.user_message());
        Err(err)
    }

    fn track<T>(&mut self, result: BinderResult<T>) -> BinderResult<T> {
        if let Err(e) = &result {
            self.last_error = Some(e.user_message());
        }
        result
    }
}

/// Serialize and encrypt a plan, then upsert the record
fn write_encrypted(store: &PlanStore, plan: &Plan, passphrase: &str) -> BinderResult<()> {
    let bytes = serde_json::to_vec(plan)
        .map_err(|e| BinderError::Io(format!("Failed to serialize plan: {}", e)))?;
    let blob = encrypt(&bytes, passphrase)?;
    store.save_encrypted(&blob)
}
