//! Temperature conversions for cold-storage readings.
//!
//! Every conversion rejects a reading below absolute zero on its input scale.

use thiserror::Error;

const C_TO_F_RATIO: f64 = 9.0 / 5.0;
const F_TO_C_RATIO: f64 = 5.0 / 9.0;
const F_OFFSET: f64 = 32.0;
const K_OFFSET: f64 = 273.15;

const C_ABSOLUTE_ZERO: f64 = -273.15;
const F_ABSOLUTE_ZERO: f64 = -459.67;
const K_ABSOLUTE_ZERO: f64 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    fn symbol(self) -> &'static str {
        match self { Self::Celsius => "°C", Self::Fahrenheit => "°F", Self::Kelvin => "°K" }
    }
    fn absolute_zero(self) -> f64 {
        match self { Self::Celsius => C_ABSOLUTE_ZERO, Self::Fahrenheit => F_ABSOLUTE_ZERO, Self::Kelvin => K_ABSOLUTE_ZERO }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TemperatureError {
    #[error("Temperature {value:.2}{symbol} is below absolute zero", symbol = .scale.symbol())]
    BelowAbsoluteZero { value: f64, scale: Scale },
}

fn check(value: f64, scale: Scale) -> Result<f64, TemperatureError> {
    if value < scale.absolute_zero() {
        return Err(TemperatureError::BelowAbsoluteZero { value, scale });
    }
    Ok(value)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64, TemperatureError> {
    Ok(check(celsius, Scale::Celsius)? * C_TO_F_RATIO + F_OFFSET)
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64, TemperatureError> {
    Ok((check(fahrenheit, Scale::Fahrenheit)? - F_OFFSET) * F_TO_C_RATIO)
}

pub fn celsius_to_kelvin(celsius: f64) -> Result<f64, TemperatureError> {
    Ok(check(celsius, Scale::Celsius)? + K_OFFSET)
}

pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64, TemperatureError> {
    Ok(check(kelvin, Scale::Kelvin)? - K_OFFSET)
}

pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> Result<f64, TemperatureError> {
    Ok((check(fahrenheit, Scale::Fahrenheit)? - F_OFFSET) * F_TO_C_RATIO + K_OFFSET)
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> Result<f64, TemperatureError> {
    Ok((check(kelvin, Scale::Kelvin)? - K_OFFSET) * C_TO_F_RATIO + F_OFFSET)
}
