use crate::error::IpmiError;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum BootDevice {
    DISK,
    PXE,
}

impl BootDevice {
    /// # Errors
    ///
    /// Will return `Err` if `arg` is neither `disk` nor `pxe`
    pub fn parse(arg: &str) -> Result<BootDevice, IpmiError> {
        match arg {
            "disk" => Ok(BootDevice::DISK),
            "pxe" => Ok(BootDevice::PXE),
            _ => Err(IpmiError::UnknownBootDevice(arg.to_string())),
        }
    }

    /// Device name as the cloud API spells it.
    #[must_use]
    pub fn api_token(&self) -> &'static str {
        match self {
            BootDevice::DISK => "hd",
            BootDevice::PXE => "net",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BootAction {
    device: BootDevice,
    vm_name: String,
}

impl BootAction {
    #[must_use]
    pub fn new(device: BootDevice, vm_name: &str) -> Self {
        BootAction {
            device,
            vm_name: vm_name.to_string(),
        }
    }

    #[must_use]
    pub fn api_path(&self) -> String {
        format!(
            "Vms/set_boot_device_api/boot_devices:{}/vm_name:{}.xml",
            self.device.api_token(),
            self.vm_name
        )
    }

    #[must_use]
    pub fn success_message(&self) -> &'static str {
        match self.device {
            BootDevice::DISK => "Set Boot Device to disk",
            BootDevice::PXE => "Set Boot Device to pxe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_boot_paths() {
        assert_eq!(
            BootAction::new(BootDevice::DISK, "ms-1").api_path(),
            "Vms/set_boot_device_api/boot_devices:hd/vm_name:ms-1.xml"
        );
        assert_eq!(
            BootAction::new(BootDevice::PXE, "sc-1").api_path(),
            "Vms/set_boot_device_api/boot_devices:net/vm_name:sc-1.xml"
        );
    }

    #[test]
    fn only_disk_and_pxe_are_known() {
        assert_eq!(BootDevice::parse("disk").unwrap(), BootDevice::DISK);
        assert_eq!(BootDevice::parse("pxe").unwrap(), BootDevice::PXE);
        for other in ["cdrom", "bios", "hd", "net"] {
            assert!(matches!(
                BootDevice::parse(other),
                Err(IpmiError::UnknownBootDevice(_))
            ));
        }
    }
}
