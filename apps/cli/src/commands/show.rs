use analytics_snapshot::FacilityProfile;
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use secure_analytics::application::DashboardSession;
use secure_analytics::domain::charts::{
    environment_radar, object_bars, trend_series, BarPoint, RadarSeries, TrendSeries,
};
use secure_analytics::domain::indicators::Group;
use secure_analytics::domain::scoring::ScoreReport;
use secure_analytics::domain::sources::DataSource;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::CliContext;
use crate::ui::{self, dashboard};

#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Print machine-readable JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Include the radar, object bars and trend charts
    #[arg(long)]
    pub charts: bool,
}

/// Everything the dashboard shows, in one document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub profile: &'a str,
    pub facility: &'a FacilityProfile,
    pub environment: BTreeMap<String, i64>,
    pub object: BTreeMap<String, i64>,
    pub report: Option<ScoreReport>,
    pub radar: RadarSeries,
    pub object_bars: Vec<BarPoint>,
    pub trend: TrendSeries,
    pub sources: &'a [DataSource],
}

impl<'a> DashboardView<'a> {
    pub fn build(profile: &'a str, session: &'a DashboardSession) -> Self {
        let aggregator = session.aggregator();
        Self {
            profile,
            facility: session.facility(),
            environment: aggregator.set(Group::Environment).to_map(),
            object: aggregator.set(Group::Object).to_map(),
            report: session.report(),
            radar: environment_radar(aggregator.set(Group::Environment)),
            object_bars: object_bars(aggregator.set(Group::Object)),
            trend: trend_series(),
            sources: session.sources().sources(),
        }
    }
}

impl ShowCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        if self.json {
            let session = ctx.headless_session()?;
            let view = DashboardView::build(&ctx.config.profile, &session);
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        let session = ctx.session()?;
        ui::println(dashboard::render(&session, self.charts, Utc::now()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::presenter::{SilentPresenter, TerminalNotifier};
    use secure_analytics::application::AppConfig;

    #[test]
    fn test_json_view_shape() {
        let session = DashboardSession::new(
            &AppConfig::default(),
            Box::new(TerminalNotifier),
            Box::new(SilentPresenter),
        )
        .unwrap();

        let view = DashboardView::build("default", &session);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["profile"], "default");
        assert_eq!(json["environment"]["crime"], 3);
        assert_eq!(json["report"]["cards"].as_array().unwrap().len(), 4);
        assert_eq!(json["radar"]["target"].as_array().unwrap().len(), 6);
        assert_eq!(json["objectBars"].as_array().unwrap().len(), 6);
        assert_eq!(json["sources"].as_array().unwrap().len(), 5);
    }
}
