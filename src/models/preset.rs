use crate::utils::time::hhmm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Named bundle of time-range defaults offered by a row's preset selector.
/// Missing attributes fall back to empty times, no break, and no next-day flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimePreset {
    pub name: String,
    #[serde(default, with = "hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub break_minutes: u32,
    #[serde(default)]
    pub start_next_day: bool,
    #[serde(default)]
    pub end_next_day: bool,
    /// Restricts the preset to rows whose selected contract matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
}

impl TimePreset {
    pub fn new(name: &str, start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Self {
        Self {
            name: name.to_string(),
            start_time: Some(start),
            end_time: Some(end),
            break_minutes,
            ..Self::default()
        }
    }

    /// Whether the preset may be offered for a row with the given contract state.
    /// Rows without a contract selector (`None`) see every preset.
    pub fn offered_for(&self, row_contract: Option<Option<&str>>) -> bool {
        match (&self.contract, row_contract) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(own), Some(Some(selected))) => own == selected,
            (Some(_), Some(None)) => false,
        }
    }
}

/// Looks up a preset by name among those offered for a row.
pub fn find_preset<'a>(
    presets: &'a [TimePreset],
    name: &str,
    row_contract: Option<Option<&str>>,
) -> Option<&'a TimePreset> {
    presets
        .iter()
        .find(|p| p.name == name && p.offered_for(row_contract))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_yaml_fields_take_defaults() {
        let p: TimePreset = serde_yaml::from_str("name: short").unwrap();
        assert_eq!(p.start_time, None);
        assert_eq!(p.end_time, None);
        assert_eq!(p.break_minutes, 0);
        assert!(!p.start_next_day && !p.end_next_day);
    }

    #[test]
    fn contract_bound_preset_needs_matching_selection() {
        let p = TimePreset {
            name: "day".into(),
            contract: Some("C-1".into()),
            ..TimePreset::default()
        };
        assert!(p.offered_for(None));
        assert!(p.offered_for(Some(Some("C-1"))));
        assert!(!p.offered_for(Some(Some("C-2"))));
        assert!(!p.offered_for(Some(None)));
    }

    #[test]
    fn find_preset_skips_presets_of_other_contracts() {
        let presets = vec![
            TimePreset {
                name: "day".into(),
                contract: Some("C-1".into()),
                ..TimePreset::default()
            },
            TimePreset {
                name: "day".into(),
                contract: Some("C-2".into()),
                break_minutes: 45,
                ..TimePreset::default()
            },
        ];
        let found = find_preset(&presets, "day", Some(Some("C-2"))).unwrap();
        assert_eq!(found.break_minutes, 45);
        assert!(find_preset(&presets, "night", None).is_none());
    }
}
