//! Static value generator and YAML to BinValue conversion.

use record_core::BinValue;
use serde_yaml::Value as YamlValue;
use std::collections::HashMap;

/// Convert a YAML value to a BinValue.
///
/// Scalars tagged `!geojson` become GeoJSON values. Other tags are ignored.
/// Map entries whose key is not a string are dropped.
pub fn yaml_to_bin_value(yaml: &YamlValue) -> BinValue {
    match yaml {
        YamlValue::Null => BinValue::Nil,
        YamlValue::Bool(b) => BinValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                BinValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                BinValue::Double(f)
            } else {
                BinValue::String(n.to_string())
            }
        }
        YamlValue::String(s) => BinValue::String(s.clone()),
        YamlValue::Sequence(arr) => BinValue::List(arr.iter().map(yaml_to_bin_value).collect()),
        YamlValue::Mapping(map) => {
            let values: HashMap<String, BinValue> = map
                .iter()
                .filter_map(|(k, v)| Some((k.as_str()?.to_string(), yaml_to_bin_value(v))))
                .collect();
            BinValue::Map(values)
        }
        YamlValue::Tagged(tagged) => match &tagged.value {
            YamlValue::String(s) if tagged.tag == "geojson" => BinValue::GeoJson(s.clone()),
            value => yaml_to_bin_value(value),
        },
    }
}
