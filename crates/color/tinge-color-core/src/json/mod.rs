//! Shorthand JSON forms for colors, normalized into [`Color4`].
//!
//! Accepted shorthands:
//! - a string: `"#rrggbb"`-style hex or a keyword-table name;
//! - a 3- or 4-element numeric array, read as 8-bit components when every
//!   value is integral and any exceeds 1 (so `[255, 0, 0]` is bytes while
//!   `[1, 0, 0]` and `[0.5, 0.5, 0.5]` are unit floats);
//! - the canonical object form produced by the serde derive
//!   (`{"r": .., "g": .., "b": .., "a": ..}`).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tinge_math_core::Scalar;

use crate::color::Color4;
use crate::error::ColorError;

/// Parse one of the shorthand forms above.
pub fn color_from_json<T>(value: &JsonValue) -> Result<Color4<T>, ColorError>
where
    T: Scalar + DeserializeOwned,
{
    match value {
        JsonValue::String(s) => s.parse(),
        JsonValue::Array(arr) => color_from_array(arr),
        JsonValue::Object(_) => serde_json::from_value(value.clone())
            .map_err(|e| ColorError::Json(e.to_string())),
        other => Err(ColorError::Json(format!(
            "expected string, array, or object, got {other}"
        ))),
    }
}

/// Emit the canonical object form.
pub fn color_to_json<T>(c: &Color4<T>) -> Result<JsonValue, ColorError>
where
    T: Scalar + Serialize,
{
    serde_json::to_value(c).map_err(|e| ColorError::Json(e.to_string()))
}

fn color_from_array<T: Scalar>(arr: &[JsonValue]) -> Result<Color4<T>, ColorError> {
    if arr.len() != 3 && arr.len() != 4 {
        return Err(ColorError::BadArity(arr.len()));
    }

    let mut parts = [0.0f64; 4];
    parts[3] = 1.0;
    for (i, v) in arr.iter().enumerate() {
        parts[i] = v
            .as_f64()
            .ok_or_else(|| ColorError::Json(format!("non-numeric component: {v}")))?;
    }

    let taken = &parts[..arr.len()];
    let all_integral = taken.iter().all(|p| p.fract() == 0.0);
    let any_above_one = taken.iter().any(|p| *p > 1.0);
    if all_integral && any_above_one {
        // Byte components 0..=255.
        let mut bytes = [255u8; 4];
        for (i, p) in taken.iter().enumerate() {
            if *p < 0.0 || *p > 255.0 {
                return Err(ColorError::Json(format!("byte component out of range: {p}")));
            }
            bytes[i] = *p as u8;
        }
        Ok(Color4::from_rgba8(bytes[0], bytes[1], bytes[2], bytes[3]))
    } else {
        Color4::try_new(
            T::from_f64(parts[0]),
            T::from_f64(parts[1]),
            T::from_f64(parts[2]),
            T::from_f64(parts[3]),
        )
    }
}
