use analytics_snapshot::{ObjectType, ProtectionClass};
use anyhow::Result;
use clap::Args;

use crate::core::CliContext;
use crate::ui::{self, dashboard};

/// Edit the facility profile. Without flags the current profile is shown.
#[derive(Args, Debug)]
pub struct FacilityCommand {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// office, industrial, retail, logistics, public, residential, other
    #[arg(long = "type")]
    pub object_type: Option<ObjectType>,

    /// low, medium, high, critical
    #[arg(long)]
    pub protection_class: Option<ProtectionClass>,

    #[arg(long)]
    pub employees: Option<u32>,

    /// Free text, e.g. "Mo-Fr: 06:00-22:00"
    #[arg(long)]
    pub hours: Option<String>,
}

impl FacilityCommand {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.object_type.is_none()
            && self.protection_class.is_none()
            && self.employees.is_none()
            && self.hours.is_none()
    }

    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let mut session = ctx.session()?;

        if self.is_empty() {
            ui::println(dashboard::facility_table(session.facility()).to_string());
            return Ok(());
        }

        let mut facility = session.facility().clone();
        // Empty strings unset a text field.
        let text = |v: &String| Some(v.trim().to_string()).filter(|s| !s.is_empty());

        if let Some(name) = &self.name {
            facility.object_name = text(name);
        }
        if let Some(location) = &self.location {
            facility.location = text(location);
        }
        if let Some(hours) = &self.hours {
            facility.operating_hours = text(hours);
        }
        if self.object_type.is_some() {
            facility.object_type = self.object_type;
        }
        if self.protection_class.is_some() {
            facility.protection_class = self.protection_class;
        }
        if self.employees.is_some() {
            facility.employees = self.employees;
        }

        session.set_facility(facility);
        ctx.commit(&session)?;

        ui::success(format!(
            "Facility updated ({} indicators and fields complete)",
            session.completion_count()
        ));
        Ok(())
    }
}
