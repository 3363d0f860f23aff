//! Color notations.

use super::patterns::{HEX_COLOR, HSL, HSLA, RGB, RGBA};

/// `#` followed by 3, 4, 6 or 8 hex digits.
pub fn hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// `rgb(r, g, b)` with channels 0-255, or all three as percentages.
pub fn rgb(s: &str) -> bool {
    RGB.is_match(s)
}

/// `rgba(r, g, b, a)` with an alpha between 0 and 1.
pub fn rgba(s: &str) -> bool {
    RGBA.is_match(s)
}

/// `hsl(h, s%, l%)` with a hue of 0-360.
pub fn hsl(s: &str) -> bool {
    HSL.is_match(s)
}

/// `hsla(h, s%, l%, a)`.
pub fn hsla(s: &str) -> bool {
    HSLA.is_match(s)
}

/// Any of the hex, `rgb`, `rgba`, `hsl` or `hsla` notations.
///
/// # Example
///
/// ```rust
/// use conform::format::color;
///
/// assert!(color("#fff"));
/// assert!(color("rgb(255, 0, 128)"));
/// assert!(color("hsla(120, 100%, 50%, 0.3)"));
/// assert!(!color("rgb(256, 0, 0)"));
/// assert!(!color("red"));
/// ```
pub fn color(s: &str) -> bool {
    hex_color(s) || hsla(s) || hsl(s) || rgb(s) || rgba(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        for valid in ["#abc", "#ABCD", "#a1b2c3", "#a1b2c3d4"] {
            assert!(hex_color(valid), "{}", valid);
        }
        for invalid in ["abc", "#ab", "#abcde", "#ggg", "#a1b2c3d4e"] {
            assert!(!hex_color(invalid), "{}", invalid);
        }
    }

    #[test]
    fn test_rgb() {
        assert!(rgb("rgb(0,0,0)"));
        assert!(rgb("rgb( 255 , 255 , 255 )"));
        assert!(rgb("rgb(10%, 50%, 100%)"));
        assert!(!rgb("rgb(10%, 50, 100%)"));
        assert!(!rgb("rgb(1,2)"));
        assert!(!rgb("rgb(01,2,3)"));
    }

    #[test]
    fn test_functional_notation_allows_ascii_whitespace_only() {
        assert!(rgb("rgb(\t1,\r\n2,3)"));
        assert!(!rgb("rgb(\u{a0}1,2,3)"));
        assert!(!color("hsl(\u{3000}0,0%,0%)"));
    }

    #[test]
    fn test_rgba() {
        assert!(rgba("rgba(0,0,0,0)"));
        assert!(rgba("rgba(255,255,255,1)"));
        assert!(rgba("rgba(10,20,30,0.5)"));
        assert!(!rgba("rgba(10,20,30,2)"));
        assert!(!rgba("rgba(10,20,30)"));
    }

    #[test]
    fn test_hsl() {
        assert!(hsl("hsl(360,100%,100%)"));
        assert!(hsl("hsl(0, 0%, 0%)"));
        assert!(!hsl("hsl(361,100%,100%)"));
        assert!(!hsl("hsl(120,100,50%)"));
        assert!(hsla("hsla(240, 50%, 50%, 1)"));
        assert!(!hsla("hsla(240, 50%, 50%)"));
    }

    #[test]
    fn test_color_accepts_every_notation() {
        assert!(color("#000000"));
        assert!(color("rgba(1,2,3,0.9)"));
        assert!(color("hsl(10,10%,10%)"));
        assert!(!color(""));
    }
}
