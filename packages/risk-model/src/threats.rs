use std::collections::BTreeMap;

/// Well-known threat actors and the capability tier they map to.
pub const DEFAULT_THREATS: [(&str, u8); 5] = [
    ("Script Kiddie", 1),
    ("Hacktivist", 2),
    ("Cyber Criminal", 3),
    ("Organized Crime (FIN7)", 4),
    ("Nation State (APT29)", 5),
];

/// Default threat map, keyed by actor label.
pub fn default_threats() -> BTreeMap<&'static str, u8> {
    DEFAULT_THREATS.into_iter().collect()
}
