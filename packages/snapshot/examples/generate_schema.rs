use analytics_snapshot::Snapshot;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(Snapshot);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
