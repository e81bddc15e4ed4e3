//! Layering of YAML configuration values.
//!
//! Local overrides are merged over the project config:
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (an `ignore` list is never appended to)
//! - `null` in the overlay removes the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Merge `overlay` over `base`, returning a new value.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order; later layers win.
///
/// Layers that are `null` (an empty YAML file) contribute nothing.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
