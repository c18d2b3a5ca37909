//! Settings change coordinator.
//!
//! Keeps every summary on the settings screen in step with the preference
//! store while the screen is active, and runs the watchface installer when
//! the install row is clicked.

use super::display::{PreferenceScreen, SettingsView};
use super::keys::{PreferenceKey, TargetKind, BINDINGS};
use super::store::{PreferenceStore, Subscription};
use super::watchface::{InstallContext, InstallWatchFace, MessageDispatcher};
use std::sync::Arc;

/// Coordinates preference changes with the settings screen.
pub struct SettingsCoordinator<V: SettingsView = PreferenceScreen> {
    store: Arc<dyn PreferenceStore>,
    view: V,
    installer: Arc<dyn InstallWatchFace>,
    dispatcher: Arc<dyn MessageDispatcher>,
    context: InstallContext,
    /// Present while active
    subscription: Option<Subscription>,
}

impl<V: SettingsView> SettingsCoordinator<V> {
    /// Create an inactive coordinator.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        view: V,
        installer: Arc<dyn InstallWatchFace>,
        dispatcher: Arc<dyn MessageDispatcher>,
        context: InstallContext,
    ) -> Self {
        Self {
            store,
            view,
            installer,
            dispatcher,
            context,
            subscription: None,
        }
    }

    /// Whether the coordinator is currently subscribed to the store.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Screen becomes visible: subscribe and refresh every summary.
    pub fn on_resume(&mut self) {
        if self.subscription.is_some() {
            tracing::debug!("Settings coordinator already active");
            return;
        }

        self.subscription = Some(self.store.subscribe());
        self.refresh_all();
        tracing::debug!("Settings coordinator active");
    }

    /// Screen hidden: unsubscribe.
    pub fn on_pause(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.store.unsubscribe(&subscription.id);
            tracing::debug!("Settings coordinator inactive");
        }
    }

    /// React to a change of the raw key `key`.
    ///
    /// Also drains any queued notifications, so hosts that deliver changes
    /// directly never let the subscription queue grow.
    pub fn on_preference_changed(&mut self, key: &str) {
        self.apply_change(key);
        self.process_pending_changes();
    }

    /// Drain queued change notifications. Returns how many were handled.
    pub fn process_pending_changes(&mut self) -> usize {
        let pending: Vec<String> = match &self.subscription {
            Some(subscription) => subscription.changes.try_iter().collect(),
            None => return 0,
        };

        for key in &pending {
            self.apply_change(key);
        }
        pending.len()
    }

    fn apply_change(&mut self, key: &str) {
        match PreferenceKey::from_key(key) {
            Some(key) => self.refresh(key),
            None => tracing::trace!("Ignoring change of unknown preference {}", key),
        }
    }

    /// Recompute the summary of one key from the store.
    pub fn refresh(&mut self, key: PreferenceKey) {
        let Some(binding) = key.binding() else {
            return;
        };

        let raw = self.store.get_string(key.as_str(), key.default_value());
        let summary = (binding.format)(&raw);

        match binding.kind {
            TargetKind::Summary => match self.view.summary_target(key) {
                Some(target) => target.set_summary(&summary),
                None => tracing::warn!("No display target for {}", key),
            },
            TargetKind::List => match self.view.list_target(key) {
                Some(target) => {
                    target.set_selected_value(&raw);
                    target.set_summary(&summary);
                }
                None => tracing::warn!("No list target for {}", key),
            },
        }
    }

    /// Recompute every bound summary.
    pub fn refresh_all(&mut self) {
        for binding in BINDINGS {
            self.refresh(binding.key);
        }
    }

    /// Install row clicked. Always reports the click as handled.
    pub fn on_install_click(&self) -> bool {
        if let Err(e) = self.installer.execute(&self.context, &*self.dispatcher) {
            tracing::error!("Watchface install failed: {}", e);
        }
        true
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<V: SettingsView> Drop for SettingsCoordinator<V> {
    fn drop(&mut self) {
        self.on_pause();
    }
}
