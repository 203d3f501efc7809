use hazardscope_core::charts::{
    self, ChartData, HotspotMap, MetricsCard, RadarProfile, TypeCount, DEFAULT_MIN_DEATHS,
};
use hazardscope_core::{CountryGazetteer, DisasterStore};

/// The main panels, cycled with Tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Map,
    Breakdown,
    Radar,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Panel::Map => Panel::Breakdown,
            Panel::Breakdown => Panel::Radar,
            Panel::Radar => Panel::Map,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Map => "Hotspot map",
            Panel::Breakdown => "Disaster types",
            Panel::Radar => "Risk profile",
        }
    }
}

/// Application state: the loaded store, the current selection, and the
/// chart data derived from it.
///
/// Selection changes rebuild the derived data the way the dashboard's
/// callback graph re-fired on dropdown changes; everything else is
/// read-only.
pub struct App {
    store: DisasterStore,
    gazetteer: CountryGazetteer,

    pub countries: Vec<String>,
    pub country_idx: usize,
    pub years: Vec<i32>,
    pub year_idx: usize,
    pub panel: Panel,

    pub metrics: ChartData<MetricsCard>,
    pub map: ChartData<HotspotMap>,
    pub breakdown: ChartData<Vec<TypeCount>>,
    pub radar: ChartData<RadarProfile>,

    pub should_quit: bool,
}

impl App {
    pub fn new(store: DisasterStore) -> Self {
        let countries: Vec<String> = store.countries().into_iter().map(str::to_string).collect();
        let mut app = Self {
            store,
            gazetteer: CountryGazetteer::default(),
            countries,
            country_idx: 0,
            years: Vec::new(),
            year_idx: 0,
            panel: Panel::Map,
            metrics: ChartData::Insufficient("no data loaded".into()),
            map: ChartData::Insufficient("no data loaded".into()),
            breakdown: ChartData::Insufficient("no data loaded".into()),
            radar: ChartData::Insufficient("no data loaded".into()),
            should_quit: false,
        };
        app.rebuild_country();
        app
    }

    pub fn country(&self) -> Option<&str> {
        self.countries.get(self.country_idx).map(String::as_str)
    }

    pub fn year(&self) -> Option<i32> {
        self.years.get(self.year_idx).copied()
    }

    pub fn next_country(&mut self) {
        if self.countries.is_empty() {
            return;
        }
        self.country_idx = (self.country_idx + 1) % self.countries.len();
        self.rebuild_country();
    }

    pub fn prev_country(&mut self) {
        if self.countries.is_empty() {
            return;
        }
        self.country_idx = (self.country_idx + self.countries.len() - 1) % self.countries.len();
        self.rebuild_country();
    }

    pub fn next_year(&mut self) {
        if self.years.is_empty() {
            return;
        }
        self.year_idx = (self.year_idx + 1) % self.years.len();
        self.rebuild_selection();
    }

    pub fn prev_year(&mut self) {
        if self.years.is_empty() {
            return;
        }
        self.year_idx = (self.year_idx + self.years.len() - 1) % self.years.len();
        self.rebuild_selection();
    }

    pub fn cycle_panel(&mut self) {
        self.panel = self.panel.next();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Country changed: rebuild the gazetteer and year list, reset the
    /// year to its default, and refresh the derived charts.
    fn rebuild_country(&mut self) {
        let Some(country) = self.country().map(str::to_string) else {
            return;
        };
        self.gazetteer = CountryGazetteer::build(&self.store.reference, &country);
        self.years = self.store.years_for(&country);
        self.year_idx = 0;
        self.rebuild_selection();
    }

    /// Selection changed: recompute every panel's data.
    fn rebuild_selection(&mut self) {
        let Some(country) = self.country().map(str::to_string) else {
            return;
        };
        let Some(year) = self.year() else {
            let reason = format!("no years with events for {country}");
            self.metrics = ChartData::Insufficient(reason.clone());
            self.map = ChartData::Insufficient(reason.clone());
            self.breakdown = ChartData::Insufficient(reason.clone());
            self.radar = ChartData::Insufficient(reason);
            return;
        };

        self.metrics = charts::metrics_card(&self.store, &country, year);
        self.map = charts::hotspot_map(
            &self.store,
            &self.gazetteer,
            &country,
            year,
            DEFAULT_MIN_DEATHS,
        );
        self.breakdown = charts::type_breakdown(&self.store, &country, Some(year));
        self.radar = charts::risk_profile(&self.store, &country, year);
    }
}
