use analytics_snapshot::Snapshot;
use anyhow::Result;

/// Print the JSON Schema of snapshot files.
#[derive(Debug)]
pub struct SchemaCommand;

impl SchemaCommand {
    pub fn execute(&self) -> Result<()> {
        let schema = schemars::schema_for!(Snapshot);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
