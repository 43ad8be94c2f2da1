//! Per-role default options.
//!
//! Default option sets are captured once at model construction and
//! substituted whenever a role adder (or link adder) is called with no
//! options of its own. They can be loaded from a YAML file so an
//! embedding tool can ship canned profiles.

use std::fs::File;
use std::path::Path;

use color_eyre::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::options::Options;

/// Default option sets, one per role plus one for links.
///
/// A default set applies only when the caller supplies no options at
/// add-time; an explicitly empty bag is not distinguished from
/// "no options".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyDefaults {
    pub host: Options,
    pub switch: Options,
    pub link: Options,
    pub legacy_router: Options,
    pub legacy_switch: Options,
    pub transit_portal_router: Options,
    pub host_interface: Options,
}

/// Load per-role default options from a YAML file
pub fn load_defaults(path: &Path) -> Result<TopologyDefaults> {
    info!("Loading topology defaults from: {:?}", path);

    let file = File::open(path)?;
    let defaults: TopologyDefaults = serde_yaml::from_reader(file)?;

    Ok(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_defaults() {
        let yaml = r#"
host:
  cpu: 0.5
switch:
  bridge: "ovs"
link:
  bw: 10
  delay: "5ms"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let defaults = load_defaults(temp_file.path()).unwrap();

        assert_eq!(defaults.host.get("cpu").unwrap().as_f64(), Some(0.5));
        assert_eq!(defaults.switch.get("bridge"), Some(&OptionValue::from("ovs")));
        assert_eq!(defaults.link.get("delay"), Some(&OptionValue::from("5ms")));
        // Unlisted roles fall back to empty sets.
        assert!(defaults.legacy_router.is_empty());
        assert!(defaults.host_interface.is_empty());
    }

    #[test]
    fn test_load_defaults_missing_file_fails() {
        assert!(load_defaults(Path::new("no_such_defaults.yaml")).is_err());
    }
}
