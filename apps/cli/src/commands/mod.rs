pub mod clear;
pub mod export;
pub mod facility;
pub mod import;
pub mod reset;
pub mod schema;
pub mod set;
pub mod show;
pub mod simulate;

use secure_analytics::domain::indicators::{Group, IndicatorSchema};

use crate::core::CliError;

/// Accepts `crime` or `environment.crime`. The group prefix must match the
/// key's own group.
pub fn resolve_key(schema: &IndicatorSchema, input: &str) -> Result<(Group, String), CliError> {
    let unknown = || CliError::UnknownIndicator(input.to_string());

    let (group, name) = match input.split_once('.') {
        Some((group, name)) => (Some(Group::parse(group).ok_or_else(unknown)?), name),
        None => (None, input),
    };

    let spec = schema.lookup(name).ok_or_else(unknown)?;
    if group.is_some_and(|g| g != spec.group) {
        return Err(unknown());
    }

    Ok((spec.group, name.to_string()))
}
