//! String forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` hex plus the named
//! table. Short hex forms expand each nibble (`#f0a` == `#ff00aa`).

use core::str::FromStr;

use tinge_math_core::Scalar;

use crate::color::Color4;
use crate::error::ColorError;
use crate::names;

impl<T: Scalar> Color4<T> {
    /// Parse a `#`-prefixed hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))?;
        let invalid = || ColorError::InvalidHex(hex.to_string());

        let mut bytes = [0u8, 0, 0, 255];
        match digits.len() {
            // rgb | rgba, one nibble per channel
            3 | 4 => {
                for (i, d) in digits.as_bytes().chunks(1).enumerate() {
                    let d = core::str::from_utf8(d).map_err(|_| invalid())?;
                    let v = u8::from_str_radix(d, 16).map_err(|_| invalid())?;
                    bytes[i] = v * 16 + v;
                }
            }
            // rrggbb | rrggbbaa
            6 | 8 => {
                for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
                    let pair = core::str::from_utf8(pair).map_err(|_| invalid())?;
                    bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
                }
            }
            _ => return Err(invalid()),
        }
        Ok(Self::from_rgba8(bytes[0], bytes[1], bytes[2], bytes[3]))
    }
}

impl<T: Scalar> FromStr for Color4<T> {
    type Err = ColorError;

    /// Hex when `#`-prefixed, otherwise a name from the keyword table.
    fn from_str(s: &str) -> Result<Self, ColorError> {
        if s.starts_with('#') {
            Self::from_hex(s)
        } else {
            names::by_name(s).ok_or_else(|| ColorError::UnknownName(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color4f;

    #[test]
    fn long_hex_forms() {
        let c = Color4f::from_hex("#ff0000").unwrap();
        assert_eq!(c, Color4f::color_red());
        let c = Color4f::from_hex("#00ff0080").unwrap();
        assert_eq!(c.to_rgba8(), [0, 255, 0, 128]);
    }

    #[test]
    fn short_hex_forms_expand_nibbles() {
        assert_eq!(
            Color4f::from_hex("#f0a").unwrap(),
            Color4f::from_hex("#ff00aa").unwrap()
        );
        assert_eq!(
            Color4f::from_hex("#f0a8").unwrap(),
            Color4f::from_hex("#ff00aa88").unwrap()
        );
    }

    #[test]
    fn bad_hex_is_rejected() {
        for s in ["#", "#ff", "#ggg", "#12345", "ff0000"] {
            assert!(matches!(
                Color4f::from_hex(s),
                Err(ColorError::InvalidHex(_))
            ));
        }
    }

    #[test]
    fn from_str_falls_back_to_names() {
        let c: Color4f = "cornsilk".parse().unwrap();
        assert_eq!(c.to_rgba8(), [255, 248, 220, 255]);
        let err = "nope".parse::<Color4f>().unwrap_err();
        assert_eq!(err, ColorError::UnknownName("nope".into()));
    }
}
