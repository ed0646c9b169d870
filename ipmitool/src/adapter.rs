use crate::client::CloudApi;
use log::{debug, warn};
use std::io::Write;
use structs::boot_device::{BootAction, BootDevice};
use structs::error::IpmiError;
use structs::power_action::Type::{OFF, ON};
use structs::power_action::PowerAction;
use structs::vapp::VAppNode;

/// Translates chassis commands for one VApp node into cloud API calls.
///
/// Every verb writes its ipmitool output to `out` and returns the process exit
/// status: `0` when the cloud API accepted the request, `1` otherwise.
pub struct IpmiCloudAdapter<C: CloudApi> {
    node: VAppNode,
    api: C,
}

impl<C: CloudApi> IpmiCloudAdapter<C> {
    /// # Errors
    ///
    /// Will return `Err` if `host` is not an address of a known VApp node
    pub fn new(host: &str, api: C) -> Result<Self, IpmiError> {
        let node = VAppNode::resolve(host)?;
        debug!("{} is VApp node {}", node.address, node.vm_name);
        Ok(IpmiCloudAdapter { node, api })
    }

    #[must_use]
    pub fn vm_name(&self) -> &str {
        self.node.vm_name.as_str()
    }

    pub fn set_bootdev_pxe<W: Write>(&self, out: &mut W) -> i32 {
        self.set_boot_device(BootDevice::PXE, out)
    }

    pub fn set_bootdev_hd<W: Write>(&self, out: &mut W) -> i32 {
        self.set_boot_device(BootDevice::DISK, out)
    }

    fn set_boot_device<W: Write>(&self, device: BootDevice, out: &mut W) -> i32 {
        let action = BootAction::new(device, self.vm_name());
        self.call_cloud_api(&action.api_path(), Some(action.success_message()), out)
    }

    pub fn set_poweroff<W: Write>(&self, out: &mut W) -> i32 {
        let action = PowerAction::new(OFF, self.vm_name());
        self.call_cloud_api(&action.api_path(), Some(action.success_message()), out)
    }

    /// Reports the power-on message even when the call failed.
    pub fn set_poweron<W: Write>(&self, out: &mut W) -> i32 {
        let action = PowerAction::new(ON, self.vm_name());
        let status = self.call_cloud_api(&action.api_path(), None, out);
        report(out, action.success_message());
        status
    }

    fn call_cloud_api<W: Write>(&self, api_path: &str, message: Option<&str>, out: &mut W) -> i32 {
        match self.api.call(api_path) {
            Ok(()) => {
                if let Some(message) = message {
                    report(out, message);
                }
                0
            }
            Err(err) => {
                report(out, &err.to_string());
                match &err {
                    IpmiError::HttpError { body, .. } => report(out, body),
                    IpmiError::TransportError { reason, .. } => report(out, reason),
                    _ => {}
                }
                1
            }
        }
    }
}

/// Writes one output line; a closed stdout must not change the exit status.
pub fn report<W: Write>(out: &mut W, line: &str) {
    if let Err(err) = writeln!(out, "{}", line) {
        warn!("could not write output: {}", err);
    }
}
