use crate::core::config::SiteConfig;
use crate::core::target::StyleTarget;

pub const BACKGROUND_POSITION_PROPERTY: &str = "background-position";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpeedError {
    #[error("speed attribute is missing")]
    Missing,
    #[error("speed {0:?} is not a finite number")]
    NotANumber(String),
    #[error("speed must be non-zero")]
    Zero,
}

pub fn parse_speed(raw: Option<&str>) -> Result<f64, SpeedError> {
    let raw = raw.map(str::trim).ok_or(SpeedError::Missing)?;
    if raw.is_empty() {
        return Err(SpeedError::Missing);
    }
    let speed: f64 = raw
        .parse()
        .map_err(|_| SpeedError::NotANumber(raw.to_string()))?;
    if !speed.is_finite() {
        return Err(SpeedError::NotANumber(raw.to_string()));
    }
    if speed == 0.0 {
        return Err(SpeedError::Zero);
    }
    Ok(speed)
}

/// Vertical background offset in px for the current scroll position.
#[inline]
pub fn background_offset(scroll_top: f64, speed: f64) -> f64 {
    let offset = -(scroll_top / speed);
    // -0 would print as "-0px"
    if offset == 0.0 {
        0.0
    } else {
        offset
    }
}

/// Format a number the way JavaScript's `String(n)` does: plain decimal in
/// `[1e-6, 1e21)`, exponent form with an explicit sign outside it.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

pub fn background_position(scroll_top: f64, speed: f64, config: &SiteConfig) -> String {
    format!(
        "{} {}px",
        config.parallax_x_anchor,
        js_number(background_offset(scroll_top, speed))
    )
}

/// Reposition one element's background. On a bad speed the element is left
/// untouched.
pub fn apply<T: StyleTarget>(
    target: &T,
    scroll_top: f64,
    raw_speed: Option<&str>,
    config: &SiteConfig,
) -> Result<String, SpeedError> {
    let speed = parse_speed(raw_speed)?;
    let position = background_position(scroll_top, speed, config);
    target.set_style(BACKGROUND_POSITION_PROPERTY, &position);
    Ok(position)
}
