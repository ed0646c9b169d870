use crate::adapter::{report, IpmiCloudAdapter};
use crate::client::CloudApi;
use std::io::Write;
use structs::boot_device::BootDevice;
use structs::error::IpmiError;
use structs::power_action::Type;

/// Runs `subcmd arg` against `adapter` and returns the exit status.
pub fn run_cmd<C: CloudApi, W: Write>(
    adapter: &IpmiCloudAdapter<C>,
    subcmd: &str,
    arg: &str,
    out: &mut W,
) -> i32 {
    match dispatch(adapter, subcmd, arg, out) {
        Ok(status) => status,
        Err(err) => {
            report(out, &err.to_string());
            1
        }
    }
}

fn dispatch<C: CloudApi, W: Write>(
    adapter: &IpmiCloudAdapter<C>,
    subcmd: &str,
    arg: &str,
    out: &mut W,
) -> Result<i32, IpmiError> {
    match subcmd {
        "bootdev" => match BootDevice::parse(arg)? {
            BootDevice::PXE => Ok(adapter.set_bootdev_pxe(out)),
            BootDevice::DISK => Ok(adapter.set_bootdev_hd(out)),
        },
        "power" => match Type::parse(arg)? {
            Type::OFF => Ok(adapter.set_poweroff(out)),
            Type::ON => Ok(adapter.set_poweron(out)),
        },
        _ => Err(IpmiError::UnknownSubcommand(subcmd.to_string())),
    }
}
