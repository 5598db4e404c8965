//! The in-memory fleet state store — the single source of truth.
//!
//! One process-wide instance owns every device record, telemetry history,
//! command log, and optimization scenario. Each public operation holds the
//! internal lock for its whole duration (writers exclusive, readers shared),
//! so concurrent handlers never lose a `last_telemetry` update, never see a
//! torn `(actions_completed, status)` pair, and never observe a half-applied
//! registration.
//!
//! The store raises no domain errors: unknown ids come back as `None` or are
//! silently ignored. Existence checks and range validation belong to the
//! HTTP boundary.

use std::collections::HashMap;

use tokio::sync::RwLock;

use fleethub_domain::command::{CommandId, CommandLogEntry, CommandParams, CommandStatus};
use fleethub_domain::device::{Device, DeviceStatus};
use fleethub_domain::id::{DeviceId, ScenarioId};
use fleethub_domain::optimization::{OptimizationAction, OptimizationScenario, ScenarioStatus};
use fleethub_domain::telemetry::{Metrics, TelemetrySample};
use fleethub_domain::time::{self, Timestamp};

/// Everything behind the lock.
#[derive(Default)]
struct FleetState {
    devices: HashMap<DeviceId, Device>,
    /// First-registration order, for stable `list_devices` iteration.
    device_order: Vec<DeviceId>,
    telemetry: HashMap<DeviceId, Vec<TelemetrySample>>,
    commands: HashMap<DeviceId, Vec<CommandLogEntry>>,
    scenarios: HashMap<ScenarioId, OptimizationScenario>,
}

/// In-memory state store for the whole fleet.
///
/// Created once at startup and shared behind an `Arc`; all state is lost on
/// process exit. Operations are short, non-blocking map work — a single
/// store-wide lock is sufficient.
#[derive(Default)]
pub struct FleetStore {
    state: RwLock<FleetState>,
}

impl FleetStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device, overwriting any existing record under the same id.
    ///
    /// Re-registration resets the live snapshot (`online`, nothing reported
    /// yet) but leaves telemetry and command logs keyed by the id intact.
    /// The device keeps its original slot in the listing order.
    #[tracing::instrument(skip(self, capabilities))]
    pub async fn register_device(
        &self,
        id: DeviceId,
        kind: String,
        location: String,
        capabilities: Vec<String>,
    ) -> Device {
        let device = Device::new(id.clone(), kind, location, capabilities);
        let mut state = self.state.write().await;
        if !state.devices.contains_key(&id) {
            state.device_order.push(id.clone());
        }
        state.devices.insert(id, device.clone());
        device
    }

    /// Look up a device by id.
    pub async fn get_device(&self, id: &DeviceId) -> Option<Device> {
        self.state.read().await.devices.get(id).cloned()
    }

    /// All registered devices, in first-registration order.
    pub async fn list_devices(&self) -> Vec<Device> {
        let state = self.state.read().await;
        state
            .device_order
            .iter()
            .filter_map(|id| state.devices.get(id).cloned())
            .collect()
    }

    /// Append a telemetry sample to the device's history.
    ///
    /// The history is created lazily and accepts samples for ids that were
    /// never registered. When the device *is* registered, its live snapshot
    /// (`last_seen`, `last_telemetry`, `status = online`) is refreshed in
    /// the same critical section — the only place device status changes.
    /// Out-of-order timestamps are appended as-is.
    #[tracing::instrument(skip(self, metrics))]
    pub async fn save_telemetry(
        &self,
        device_id: &DeviceId,
        timestamp: Timestamp,
        metrics: Metrics,
    ) {
        let mut state = self.state.write().await;
        state
            .telemetry
            .entry(device_id.clone())
            .or_default()
            .push(TelemetrySample {
                timestamp,
                metrics: metrics.clone(),
            });
        if let Some(device) = state.devices.get_mut(device_id) {
            device.last_seen = Some(timestamp);
            device.last_telemetry = Some(metrics);
            device.status = DeviceStatus::Online;
        }
    }

    /// Samples with `from <= timestamp <= to`, in insertion order.
    ///
    /// Empty when the device has no history or nothing falls in the range.
    /// Callers are responsible for rejecting inverted ranges beforehand.
    pub async fn telemetry_history(
        &self,
        device_id: &DeviceId,
        from: Timestamp,
        to: Timestamp,
    ) -> Vec<TelemetrySample> {
        let state = self.state.read().await;
        state
            .telemetry
            .get(device_id)
            .map(|samples| {
                samples
                    .iter()
                    .filter(|sample| from <= sample.timestamp && sample.timestamp <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Latest metrics per registered device that has reported at least once,
    /// in first-registration order. Devices without telemetry are omitted.
    pub async fn live_state_all(&self) -> Vec<(DeviceId, Metrics)> {
        let state = self.state.read().await;
        state
            .device_order
            .iter()
            .filter_map(|id| {
                let device = state.devices.get(id)?;
                let metrics = device.last_telemetry.clone()?;
                Some((device.id.clone(), metrics))
            })
            .collect()
    }

    /// Latest metrics for one device.
    ///
    /// `None` covers both an unknown id and a known device that has never
    /// reported — the two cases are intentionally indistinguishable here.
    pub async fn live_state_one(&self, device_id: &DeviceId) -> Option<(DeviceId, Metrics)> {
        let state = self.state.read().await;
        let device = state.devices.get(device_id)?;
        let metrics = device.last_telemetry.clone()?;
        Some((device.id.clone(), metrics))
    }

    /// Issue a command: a fresh globally-unique id, `sent` status, and an
    /// append to the device's log. Registration is not checked here.
    #[tracing::instrument(skip(self, params))]
    pub async fn add_command(
        &self,
        device_id: &DeviceId,
        command: String,
        params: CommandParams,
    ) -> CommandLogEntry {
        let mut state = self.state.write().await;
        let entry = CommandLogEntry {
            command_id: CommandId::new(),
            device_id: device_id.clone(),
            command,
            params,
            status: CommandStatus::Sent,
            sent_at: time::now(),
            executed_at: None,
        };
        state
            .commands
            .entry(device_id.clone())
            .or_default()
            .push(entry.clone());
        entry
    }

    /// Mark a previously issued command as executed.
    ///
    /// Finds the entry by `(device_id, command_id)` with a linear scan of
    /// that device's log and stamps `executed_at`. Unknown pairs are a
    /// silent no-op.
    #[tracing::instrument(skip(self))]
    pub async fn mark_command_executed(&self, device_id: &DeviceId, command_id: CommandId) {
        let mut state = self.state.write().await;
        if let Some(entry) = state
            .commands
            .get_mut(device_id)
            .and_then(|log| log.iter_mut().find(|entry| entry.command_id == command_id))
        {
            entry.status = CommandStatus::Executed;
            entry.executed_at = Some(time::now());
        }
    }

    /// Commands issued to a device, in insertion order.
    pub async fn command_history(&self, device_id: &DeviceId) -> Vec<CommandLogEntry> {
        self.state
            .read()
            .await
            .commands
            .get(device_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Record a scenario, overwriting any previous one under the same id.
    ///
    /// Actions are stored verbatim; nothing is executed. The scenario starts
    /// `accepted` with zero progress.
    #[tracing::instrument(skip(self, actions), fields(total_actions = actions.len()))]
    pub async fn save_optimization(
        &self,
        scenario_id: ScenarioId,
        generated_at: Timestamp,
        actions: Vec<OptimizationAction>,
    ) -> OptimizationScenario {
        let scenario = OptimizationScenario {
            scenario_id: scenario_id.clone(),
            generated_at,
            total_actions: actions.len(),
            actions_completed: 0,
            status: ScenarioStatus::Accepted,
            actions,
        };
        self.state
            .write()
            .await
            .scenarios
            .insert(scenario_id, scenario.clone());
        scenario
    }

    /// Look up a scenario by id.
    pub async fn get_optimization(&self, scenario_id: &ScenarioId) -> Option<OptimizationScenario> {
        self.state.read().await.scenarios.get(scenario_id).cloned()
    }

    /// Update scenario progress and recompute its status from the
    /// completed/total ratio.
    ///
    /// Progress is clamped into `[0, total_actions]`. Unknown ids are a
    /// silent no-op.
    #[tracing::instrument(skip(self))]
    pub async fn set_optimization_progress(
        &self,
        scenario_id: &ScenarioId,
        actions_completed: i64,
    ) {
        let mut state = self.state.write().await;
        if let Some(scenario) = state.scenarios.get_mut(scenario_id) {
            scenario.actions_completed = clamp_progress(actions_completed, scenario.total_actions);
            scenario.status =
                ScenarioStatus::derive(scenario.actions_completed, scenario.total_actions);
        }
    }

    /// Update scenario progress with an explicit status, bypassing the
    /// derived value for this call only.
    ///
    /// The next recomputing update derives from the ratio again — overrides
    /// do not persist. Unknown ids are a silent no-op.
    #[tracing::instrument(skip(self))]
    pub async fn override_optimization_progress(
        &self,
        scenario_id: &ScenarioId,
        actions_completed: i64,
        status: ScenarioStatus,
    ) {
        let mut state = self.state.write().await;
        if let Some(scenario) = state.scenarios.get_mut(scenario_id) {
            scenario.actions_completed = clamp_progress(actions_completed, scenario.total_actions);
            scenario.status = status;
        }
    }
}

/// Clamp a caller-supplied progress count into `[0, total]`.
fn clamp_progress(actions_completed: i64, total: usize) -> usize {
    usize::try_from(actions_completed)
        .unwrap_or(0)
        .min(total)
}
