//! Demo scenario — exercises every service once, in order.

use std::io::Write;

use serde::Serialize;

use hometrack_domain::device::{Device, DeviceChanges};
use hometrack_domain::error::{ConflictError, HomeTrackError};
use hometrack_domain::id::{DeviceId, HubId};

use crate::config::OutputFormat;
use crate::wiring::Services;

/// Errors that abort the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("service call failed")]
    Service(#[from] HomeTrackError),
    #[error("failed to write demo output")]
    Io(#[from] std::io::Error),
    #[error("failed to encode demo output")]
    Json(#[from] serde_json::Error),
}

/// Key outcomes of a demo run.
#[derive(Debug, Serialize)]
pub struct DemoSummary {
    pub devices_created: usize,
    pub hub_info_refused: usize,
    pub paired_delete_refused: bool,
    pub devices_remaining: usize,
}

#[derive(Serialize)]
struct Section<'a> {
    section: &'a str,
}

#[derive(Serialize)]
struct Step<'a, T: ?Sized> {
    step: &'a str,
    data: &'a T,
}

#[derive(Serialize)]
struct Refused {
    refused: String,
}

impl From<&ConflictError> for Refused {
    fn from(err: &ConflictError) -> Self {
        Self {
            refused: err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct Pairing {
    hub_id: HubId,
    device_id: DeviceId,
}

/// Writes demo steps to `out` as text lines or JSON lines.
pub struct Reporter<W> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    /// Start a new group of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or encoding fails.
    pub fn section(&mut self, title: &str) -> Result<(), DemoError> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "\n== {title}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &Section { section: title })?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Record one step and the value it produced.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or encoding fails.
    pub fn record<T: Serialize + ?Sized>(&mut self, step: &str, data: &T) -> Result<(), DemoError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{step}: {}", serde_json::to_string(data)?)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &Step { step, data })?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Separate business-rule refusals from real failures.
fn refusal<T>(result: Result<T, HomeTrackError>) -> Result<Result<T, ConflictError>, HomeTrackError> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(HomeTrackError::Conflict(err)) => Ok(Err(err)),
        Err(err) => Err(err),
    }
}

/// Run the scenario against `services`, writing each step to `reporter`.
///
/// # Errors
///
/// Returns an error if an unexpected service call fails or output cannot
/// be written. Expected refusals are recorded, not returned.
pub async fn run<W: Write>(
    services: &Services,
    reporter: &mut Reporter<W>,
) -> Result<DemoSummary, DemoError> {
    let Services {
        devices,
        hubs,
        dwellings,
    } = services;

    reporter.section("Creating devices")?;
    let mut created: Vec<Device> = Vec::new();
    for kind in ["switch", "dimmer", "lock", "thermostat"] {
        let device = devices.create(kind).await?;
        reporter.record("created", &device.info())?;
        created.push(device);
    }
    let [switch, dimmer, lock, thermostat] = [0, 1, 2, 3].map(|i| created[i].id);

    reporter.section("Listing all devices")?;
    for device in devices.list().await? {
        reporter.record(device.kind().as_str(), &device.id)?;
    }

    reporter.section("Modifying device states")?;
    let modifications = [
        ("turn switch on", switch, DeviceChanges::new().with("state", "on")),
        ("set dimmer to 75", dimmer, DeviceChanges::new().with("brightness", 75)),
        (
            "set lock pin and unlock",
            lock,
            DeviceChanges::new()
                .with("pin_code", "1234")
                .with("state", "unlocked"),
        ),
        ("set thermostat to 25", thermostat, DeviceChanges::new().with("temperature", 25)),
    ];
    for (step, id, changes) in &modifications {
        let applied = devices.modify(*id, changes).await?;
        reporter.record(step, &applied)?;
    }

    reporter.section("Device states")?;
    for id in [switch, dimmer, lock, thermostat] {
        reporter.record("info", &devices.info(id).await?)?;
    }

    reporter.section("Creating hubs")?;
    let hub1 = hubs.create().await?.id;
    let hub2 = hubs.create().await?.id;
    reporter.record("created", &hub1)?;
    reporter.record("created", &hub2)?;

    reporter.section("Creating dwellings")?;
    let dwelling1 = dwellings.create_dwelling().await?.id;
    let dwelling2 = dwellings.create_dwelling().await?.id;
    for dwelling in dwellings.list_dwellings().await? {
        reporter.record("dwelling", &dwelling)?;
    }

    reporter.section("Occupancy")?;
    reporter.record("occupied", &dwellings.occupied(dwelling1).await?)?;
    reporter.record("vacant", &dwellings.vacant(dwelling2).await?)?;

    reporter.section("Installing hubs in dwellings")?;
    reporter.record("installed", &dwellings.install_hub(dwelling1, hub1).await?)?;
    reporter.record("installed", &dwellings.install_hub(dwelling2, hub2).await?)?;

    reporter.section("Pairing devices to hub 1")?;
    for device_id in [switch, dimmer] {
        hubs.pair_device_to_hub(hub1, device_id).await?;
        reporter.record("paired", &Pairing { hub_id: hub1, device_id })?;
    }
    for device in hubs.list_devices(hub1).await? {
        reporter.record("on hub 1", &device.info())?;
    }

    reporter.section("Pairing devices to hub 2")?;
    for device_id in [lock, thermostat] {
        hubs.pair_device_to_hub(hub2, device_id).await?;
        reporter.record("paired", &Pairing { hub_id: hub2, device_id })?;
    }

    reporter.section("Device info through hub layer")?;
    let mut hub_info_refused = 0;
    for id in [lock, thermostat] {
        match refusal(hubs.device_info(id).await)? {
            Ok(info) => reporter.record("info", &info)?,
            Err(err) => {
                hub_info_refused += 1;
                reporter.record("info", &Refused::from(&err))?;
            }
        }
    }

    reporter.section("Removing switch from hub 1")?;
    reporter.record("unpaired", &hubs.remove_device_from_hub(switch).await?)?;

    reporter.section("Deleting paired dimmer")?;
    let paired_delete_refused = match refusal(devices.delete(dimmer).await)? {
        Ok(()) => {
            reporter.record("deleted", &dimmer)?;
            false
        }
        Err(err) => {
            reporter.record("delete", &Refused::from(&err))?;
            true
        }
    };

    reporter.section("Deleting unpaired switch")?;
    devices.delete(switch).await?;
    reporter.record("deleted", &switch)?;

    reporter.section("Final device list")?;
    let remaining = devices.list().await?;
    for device in &remaining {
        reporter.record("device", &device.info())?;
    }

    let summary = DemoSummary {
        devices_created: created.len(),
        hub_info_refused,
        paired_delete_refused,
        devices_remaining: remaining.len(),
    };
    reporter.section("Summary")?;
    reporter.record("summary", &summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_refuse_paired_operations_and_delete_unpaired_switch() {
        let services = Services::in_memory();
        let mut reporter = Reporter::new(OutputFormat::Text, Vec::new());

        let summary = run(&services, &mut reporter).await.unwrap();

        assert_eq!(summary.devices_created, 4);
        assert_eq!(summary.hub_info_refused, 2);
        assert!(summary.paired_delete_refused);
        assert_eq!(summary.devices_remaining, 3);
    }

    #[tokio::test]
    async fn should_leave_dwellings_with_installed_hubs() {
        let services = Services::in_memory();
        let mut reporter = Reporter::new(OutputFormat::Text, Vec::new());
        run(&services, &mut reporter).await.unwrap();

        let dwellings = services.dwellings.list_dwellings().await.unwrap();
        assert_eq!(dwellings.len(), 2);
        assert!(dwellings.iter().all(|d| d.hub_id.is_some()));
        assert_eq!(dwellings.iter().filter(|d| d.occupied).count(), 1);
    }

    #[tokio::test]
    async fn should_write_one_json_object_per_line() {
        let services = Services::in_memory();
        let mut reporter = Reporter::new(OutputFormat::Json, Vec::new());
        run(&services, &mut reporter).await.unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(!output.is_empty());
        for line in output.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("section").is_some() || value.get("step").is_some());
        }
    }

    #[tokio::test]
    async fn should_write_sections_as_text_headers() {
        let services = Services::in_memory();
        let mut reporter = Reporter::new(OutputFormat::Text, Vec::new());
        run(&services, &mut reporter).await.unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("== Creating devices"));
        assert!(output.contains("turn switch on: true"));
        assert!(output.contains("refused"));
    }

    #[test]
    fn should_keep_non_conflict_errors_as_failures() {
        let not_found: Result<(), HomeTrackError> = Err(hometrack_domain::error::NotFoundError {
            entity: "Device",
            id: "x".to_string(),
        }
        .into());
        assert!(refusal(not_found).is_err());
    }
}
