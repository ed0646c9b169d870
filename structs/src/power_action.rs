use crate::error::IpmiError;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Type {
    ON,
    OFF,
}

impl Type {
    /// # Errors
    ///
    /// Will return `Err` if `arg` is neither `on` nor `off`
    pub fn parse(arg: &str) -> Result<Type, IpmiError> {
        match arg {
            "on" => Ok(Type::ON),
            "off" => Ok(Type::OFF),
            _ => Err(IpmiError::UnknownPowerState(arg.to_string())),
        }
    }

    #[must_use]
    pub fn get_name(&self) -> &'static str {
        match self {
            Type::ON => "poweron",
            Type::OFF => "poweroff",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerAction {
    action: Type,
    vm_name: String,
}

impl PowerAction {
    #[must_use]
    pub fn new(action: Type, vm_name: &str) -> Self {
        PowerAction {
            action,
            vm_name: vm_name.to_string(),
        }
    }

    #[must_use]
    pub fn api_path(&self) -> String {
        format!("Vms/{}_api/vm_name:{}.xml", self.action.get_name(), self.vm_name)
    }

    #[must_use]
    pub fn success_message(&self) -> &'static str {
        match self.action {
            Type::ON => "Chassis Power Control: Up/On",
            Type::OFF => "Chassis Power Control: Down/Off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_power_paths() {
        assert_eq!(
            PowerAction::new(Type::ON, "ms-1").api_path(),
            "Vms/poweron_api/vm_name:ms-1.xml"
        );
        assert_eq!(
            PowerAction::new(Type::OFF, "db2").api_path(),
            "Vms/poweroff_api/vm_name:db2.xml"
        );
    }

    #[test]
    fn parses_power_states() {
        assert_eq!(Type::parse("on").unwrap(), Type::ON);
        assert_eq!(Type::parse("off").unwrap(), Type::OFF);
        assert!(matches!(
            Type::parse("cycle"),
            Err(IpmiError::UnknownPowerState(state)) if state == "cycle"
        ));
        assert!(Type::parse("ON").is_err());
    }
}
